use std::cell::{Cell, RefCell};
use std::ffi::CString;
use std::os::raw::c_char;

use dcwproto_msg::CodecError;

use crate::types::DcwResult;

thread_local! {
    static LAST_ERROR: RefCell<CString> = RefCell::new(CString::default());
    static LAST_RESULT: Cell<DcwResult> = const { Cell::new(DcwResult::Ok) };
}

pub(crate) fn clear_error_state() {
    LAST_ERROR.with(|state| {
        *state.borrow_mut() = CString::default();
    });
    LAST_RESULT.with(|code| code.set(DcwResult::Ok));
}

pub(crate) fn set_error(code: DcwResult, message: impl Into<String>) -> DcwResult {
    let message = message.into();
    tracing::debug!(?code, %message, "ffi call failed");
    let sanitized = message.replace('\0', "?");
    LAST_ERROR.with(|state| {
        *state.borrow_mut() = CString::new(sanitized).unwrap_or_default();
    });
    LAST_RESULT.with(|state| state.set(code));
    code
}

pub(crate) fn set_invalid_argument(message: impl Into<String>) -> DcwResult {
    set_error(DcwResult::InvalidArgument, message)
}

pub(crate) fn set_panic_error() {
    set_error(DcwResult::Internal, "panic across FFI boundary");
}

pub(crate) fn map_codec_error(err: &CodecError) -> DcwResult {
    let code = match err {
        CodecError::UnknownTag(_) => DcwResult::UnknownTag,
        CodecError::Truncated { .. } => DcwResult::Truncated,
        CodecError::CountTooLarge { .. } => DcwResult::CountTooLarge,
        CodecError::FieldTooLarge { .. } => DcwResult::FieldTooLarge,
        CodecError::BufferTooSmall { .. } => DcwResult::BufferTooSmall,
        CodecError::EmptyList(_) => DcwResult::EmptyList,
        CodecError::UnexpectedType { .. } => DcwResult::UnexpectedType,
    };
    set_error(code, err.to_string())
}

pub(crate) fn last_error_ptr() -> *const c_char {
    LAST_ERROR.with(|state| state.borrow().as_ptr())
}

pub(crate) fn last_result() -> DcwResult {
    LAST_RESULT.with(Cell::get)
}
