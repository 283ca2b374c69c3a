use dcwproto_msg::{decode_expecting, read_message_type, MessageType, MACADDR_LEN};

use crate::args;
use crate::error;

/// Decode a message and return its tag, or -1 if it does not decode.
///
/// # Safety
/// `buf` must be readable for `buf_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn dcw_read_msgtype(buf: *const u8, buf_len: usize) -> i32 {
    crate::ffi_boundary(-1, || {
        error::clear_error_state();

        let input = {
            // SAFETY: Forwarded caller contract on `buf`.
            match unsafe { args::bytes_arg(buf, buf_len, "buf") } {
                Some(v) => v,
                None => return -1,
            }
        };

        match read_message_type(input) {
            Ok(kind) => i32::from(kind.tag()),
            Err(err) => {
                let _ = error::map_codec_error(&err);
                -1
            }
        }
    })
}

/// Decode an AP accept and copy its SSIDs out as NUL-terminated strings
/// written back to back into `ssids`.
///
/// Returns 1 on success and 0 on failure. `*ssids_count` is set to the number
/// of SSIDs on success and 0 otherwise.
///
/// # Safety
/// `ssids` must be writable for `ssids_size` bytes, `ssids_count` must be null
/// or writable, and `buf` must be readable for `buf_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn dcw_marshal_acceptsta(
    ssids: *mut u8,
    ssids_size: usize,
    ssids_count: *mut usize,
    buf: *const u8,
    buf_len: usize,
) -> i32 {
    crate::ffi_boundary(0, || {
        error::clear_error_state();
        // SAFETY: Forwarded caller contract on `ssids_count`.
        unsafe { args::write_out(ssids_count, 0) };

        let input = {
            // SAFETY: Forwarded caller contract on `buf`.
            match unsafe { args::bytes_arg(buf, buf_len, "buf") } {
                Some(v) => v,
                None => return 0,
            }
        };
        let out = {
            // SAFETY: Forwarded caller contract on `ssids`.
            match unsafe { args::bytes_out_arg(ssids, ssids_size, "ssids") } {
                Some(v) => v,
                None => return 0,
            }
        };

        let accepted = match decode_expecting(input, MessageType::ApAcceptStation)
            .and_then(|msg| msg.into_accepted_ssids())
        {
            Ok(v) => v,
            Err(err) => {
                let _ = error::map_codec_error(&err);
                return 0;
            }
        };

        let mut offset = 0usize;
        for ssid in &accepted {
            let text = ssid.wire_bytes();
            let needed = text.len() + 1;
            if out.len() - offset < needed {
                let _ = error::set_error(
                    crate::types::DcwResult::BufferTooSmall,
                    format!("ssids buffer too small ({} bytes)", out.len()),
                );
                return 0;
            }
            out[offset..offset + text.len()].copy_from_slice(text);
            out[offset + text.len()] = 0;
            offset += needed;
        }

        // SAFETY: Forwarded caller contract on `ssids_count`.
        unsafe { args::write_out(ssids_count, accepted.len()) };
        1
    })
}

/// Decode an AP reject and copy its hardware addresses out as packed 6-byte
/// entries.
///
/// Returns 1 on success and 0 on failure. `*macaddrs_count` is set to the
/// number of addresses on success and 0 otherwise.
///
/// # Safety
/// `macaddrs` must be writable for `macaddrs_size` bytes, `macaddrs_count`
/// must be null or writable, and `buf` must be readable for `buf_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn dcw_marshal_rejectsta(
    macaddrs: *mut u8,
    macaddrs_size: usize,
    macaddrs_count: *mut usize,
    buf: *const u8,
    buf_len: usize,
) -> i32 {
    crate::ffi_boundary(0, || {
        error::clear_error_state();
        // SAFETY: Forwarded caller contract on `macaddrs_count`.
        unsafe { args::write_out(macaddrs_count, 0) };

        let input = {
            // SAFETY: Forwarded caller contract on `buf`.
            match unsafe { args::bytes_arg(buf, buf_len, "buf") } {
                Some(v) => v,
                None => return 0,
            }
        };
        let out = {
            // SAFETY: Forwarded caller contract on `macaddrs`.
            match unsafe { args::bytes_out_arg(macaddrs, macaddrs_size, "macaddrs") } {
                Some(v) => v,
                None => return 0,
            }
        };

        let rejected = match decode_expecting(input, MessageType::ApRejectStation)
            .and_then(|msg| msg.into_rejected_macaddrs())
        {
            Ok(v) => v,
            Err(err) => {
                let _ = error::map_codec_error(&err);
                return 0;
            }
        };

        if out.len() < rejected.len() * MACADDR_LEN {
            let _ = error::set_error(
                crate::types::DcwResult::BufferTooSmall,
                format!(
                    "macaddrs buffer too small ({} bytes, {} needed)",
                    out.len(),
                    rejected.len() * MACADDR_LEN
                ),
            );
            return 0;
        }
        for (slot, macaddr) in out.chunks_exact_mut(MACADDR_LEN).zip(&rejected) {
            slot.copy_from_slice(macaddr.octets());
        }

        // SAFETY: Forwarded caller contract on `macaddrs_count`.
        unsafe { args::write_out(macaddrs_count, rejected.len()) };
        1
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DcwResult;

    #[test]
    fn read_msgtype_returns_tag_or_minus_one() {
        let quit = [0x99u8];
        // SAFETY: Buffer is valid for its length.
        assert_eq!(unsafe { dcw_read_msgtype(quit.as_ptr(), quit.len()) }, 0x99);

        let truncated = [0x01u8, 0x02, 0xAA];
        // SAFETY: Buffer is valid for its length.
        assert_eq!(
            unsafe { dcw_read_msgtype(truncated.as_ptr(), truncated.len()) },
            -1
        );
        assert_eq!(crate::dcw_last_result(), DcwResult::Truncated);

        let unknown = [0x77u8];
        // SAFETY: Buffer is valid for its length.
        assert_eq!(
            unsafe { dcw_read_msgtype(unknown.as_ptr(), unknown.len()) },
            -1
        );
        assert_eq!(crate::dcw_last_result(), DcwResult::UnknownTag);
    }

    #[test]
    fn marshal_acceptsta_packs_nul_terminated_ssids() {
        let wire = [0x21u8, 0x02, 0x03, b'n', b'e', b't', 0x02, b'o', b'k'];
        let mut out = [0xFFu8; 16];
        let mut count = 99usize;

        // SAFETY: Buffers are valid for the declared sizes.
        let rc = unsafe {
            dcw_marshal_acceptsta(
                out.as_mut_ptr(),
                out.len(),
                &mut count,
                wire.as_ptr(),
                wire.len(),
            )
        };

        assert_eq!(rc, 1);
        assert_eq!(count, 2);
        assert_eq!(&out[..7], b"net\0ok\0");
    }

    #[test]
    fn marshal_acceptsta_fails_when_output_too_small() {
        let wire = [0x21u8, 0x01, 0x03, b'n', b'e', b't'];
        let mut out = [0u8; 3];
        let mut count = 7usize;

        // SAFETY: Buffers are valid for the declared sizes.
        let rc = unsafe {
            dcw_marshal_acceptsta(
                out.as_mut_ptr(),
                out.len(),
                &mut count,
                wire.as_ptr(),
                wire.len(),
            )
        };

        assert_eq!(rc, 0);
        assert_eq!(count, 0);
        assert_eq!(crate::dcw_last_result(), DcwResult::BufferTooSmall);
    }

    #[test]
    fn marshal_acceptsta_rejects_other_kinds() {
        let wire = [0x22u8, 0x00];
        let mut out = [0u8; 16];
        let mut count = 0usize;

        // SAFETY: Buffers are valid for the declared sizes.
        let rc = unsafe {
            dcw_marshal_acceptsta(
                out.as_mut_ptr(),
                out.len(),
                &mut count,
                wire.as_ptr(),
                wire.len(),
            )
        };

        assert_eq!(rc, 0);
        assert_eq!(crate::dcw_last_result(), DcwResult::UnexpectedType);
    }

    #[test]
    fn marshal_rejectsta_copies_packed_addresses() {
        let wire = [0x22u8, 0x02, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 0xEE];
        let mut out = [0u8; 6 * 32];
        let mut count = 0usize;

        // SAFETY: Buffers are valid for the declared sizes.
        let rc = unsafe {
            dcw_marshal_rejectsta(
                out.as_mut_ptr(),
                out.len(),
                &mut count,
                wire.as_ptr(),
                wire.len(),
            )
        };

        assert_eq!(rc, 1);
        assert_eq!(count, 2);
        assert_eq!(&out[..12], &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn marshal_rejectsta_accepts_empty_list() {
        let wire = [0x22u8, 0x00];
        let mut count = 5usize;

        // SAFETY: A zero-sized output may be null.
        let rc = unsafe {
            dcw_marshal_rejectsta(
                std::ptr::null_mut(),
                0,
                &mut count,
                wire.as_ptr(),
                wire.len(),
            )
        };

        assert_eq!(rc, 1);
        assert_eq!(count, 0);
    }
}
