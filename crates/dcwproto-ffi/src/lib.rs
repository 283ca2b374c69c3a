//! dcwproto-ffi: C-ABI exports for the DCW message codec.
//!
//! Encode exports build a message from flat arrays and return the number of
//! bytes written (0 on failure). Decode exports return 1/0 and copy the fields
//! of one expected message kind into caller buffers. The reason for the most
//! recent failure on the calling thread is available from
//! [`dcw_last_error`] and [`dcw_last_result`].

mod args;
mod decode;
mod encode;
mod error;
mod types;

use std::panic::AssertUnwindSafe;

pub use decode::{dcw_marshal_acceptsta, dcw_marshal_rejectsta, dcw_read_msgtype};
pub use encode::{
    dcw_serialize_join, dcw_serialize_staack, dcw_serialize_stanack, dcw_serialize_unjoin,
};
pub use types::{
    DcwResult, DCW_ERR_BUFFER_TOO_SMALL, DCW_ERR_COUNT_TOO_LARGE, DCW_ERR_EMPTY_LIST,
    DCW_ERR_FIELD_TOO_LARGE, DCW_ERR_INTERNAL, DCW_ERR_INVALID_ARGUMENT, DCW_ERR_TRUNCATED,
    DCW_ERR_UNEXPECTED_TYPE, DCW_ERR_UNKNOWN_TAG, DCW_MAX_MESSAGE_SIZE, DCW_MSG_AP_ACCEPT_STA,
    DCW_MSG_AP_ACK_DISCONNECT, DCW_MSG_AP_QUIT, DCW_MSG_AP_REJECT_STA, DCW_MSG_STA_ACK,
    DCW_MSG_STA_JOIN, DCW_MSG_STA_NACK, DCW_MSG_STA_UNJOIN, DCW_OK,
};

fn ffi_boundary<T>(on_panic: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(_) => {
            error::set_panic_error();
            on_panic
        }
    }
}

#[no_mangle]
pub extern "C" fn dcw_clear_error() {
    ffi_boundary((), || {
        error::clear_error_state();
    });
}

#[no_mangle]
pub extern "C" fn dcw_last_error() -> *const std::os::raw::c_char {
    ffi_boundary(std::ptr::null(), error::last_error_ptr)
}

#[no_mangle]
pub extern "C" fn dcw_last_result() -> DcwResult {
    ffi_boundary(DcwResult::Internal, error::last_result)
}

#[cfg(test)]
mod tests {
    use std::ffi::CStr;

    use super::*;

    #[test]
    fn last_error_empty_after_clear() {
        dcw_clear_error();
        let ptr = dcw_last_error();
        assert!(!ptr.is_null());

        // SAFETY: dcw_last_error returns a pointer to a thread-local CString.
        let text = unsafe { CStr::from_ptr(ptr).to_str().unwrap() };
        assert!(text.is_empty());
        assert_eq!(dcw_last_result(), DcwResult::Ok);
    }

    #[test]
    fn successful_call_clears_previous_error() {
        let unknown = [0x42u8];
        // SAFETY: Buffer is valid for its length.
        assert_eq!(unsafe { dcw_read_msgtype(unknown.as_ptr(), 1) }, -1);
        assert_eq!(dcw_last_result(), DcwResult::UnknownTag);

        let quit = [0x99u8];
        // SAFETY: Buffer is valid for its length.
        assert_eq!(unsafe { dcw_read_msgtype(quit.as_ptr(), 1) }, 0x99);
        assert_eq!(dcw_last_result(), DcwResult::Ok);
    }

    #[test]
    fn panics_are_contained() {
        let value = ffi_boundary(7, || -> i32 { panic!("boom") });
        assert_eq!(value, 7);
        assert_eq!(dcw_last_result(), DcwResult::Internal);
    }
}
