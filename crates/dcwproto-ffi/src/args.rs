use std::ffi::CStr;
use std::os::raw::c_char;

use dcwproto_msg::{MacAddr, Ssid, MACADDR_LEN, MAX_ENTRIES};

use crate::error;

/// Convert an optional byte pointer + length into a slice.
///
/// # Safety
/// If `len > 0`, `data` must be non-null and readable for `len` bytes.
pub(crate) unsafe fn bytes_arg<'a>(data: *const u8, len: usize, name: &str) -> Option<&'a [u8]> {
    if len == 0 {
        return Some(&[]);
    }
    if data.is_null() {
        let _ = error::set_invalid_argument(format!("{name} cannot be null when len > 0"));
        return None;
    }

    // SAFETY: Pointer and length are validated above and owned by caller for the call duration.
    Some(unsafe { std::slice::from_raw_parts(data, len) })
}

/// Convert an output pointer + capacity into a mutable slice.
///
/// # Safety
/// If `len > 0`, `data` must be non-null and writable for `len` bytes.
pub(crate) unsafe fn bytes_out_arg<'a>(
    data: *mut u8,
    len: usize,
    name: &str,
) -> Option<&'a mut [u8]> {
    if len == 0 {
        return Some(&mut []);
    }
    if data.is_null() {
        let _ = error::set_invalid_argument(format!("{name} cannot be null when size > 0"));
        return None;
    }

    // SAFETY: Pointer and length are validated above and owned by caller for the call duration.
    Some(unsafe { std::slice::from_raw_parts_mut(data, len) })
}

/// Check a list count coming from the caller against the list capacity.
pub(crate) fn count_arg(count: usize, name: &str) -> Option<usize> {
    if count == 0 {
        let _ = error::set_invalid_argument(format!("{name} must be at least 1"));
        return None;
    }
    if count > MAX_ENTRIES {
        let _ = error::set_invalid_argument(format!("{name} must be at most {MAX_ENTRIES}"));
        return None;
    }
    Some(count)
}

/// Read `count` packed 6-byte hardware addresses.
///
/// # Safety
/// `macaddrs` must be readable for `count * 6` bytes.
pub(crate) unsafe fn macaddrs_arg(macaddrs: *const u8, count: usize) -> Option<Vec<MacAddr>> {
    let count = count_arg(count, "macaddr_count")?;
    // SAFETY: Forwarded caller contract.
    let packed = unsafe { bytes_arg(macaddrs, count * MACADDR_LEN, "macaddrs") }?;
    Some(
        packed
            .chunks_exact(MACADDR_LEN)
            .map(|chunk| {
                let mut octets = [0u8; MACADDR_LEN];
                octets.copy_from_slice(chunk);
                MacAddr(octets)
            })
            .collect(),
    )
}

/// Read `count` consecutive NUL-terminated SSID strings.
///
/// # Safety
/// `ssids` must point to `count` NUL-terminated strings laid out back to back.
pub(crate) unsafe fn ssid_strings_arg(ssids: *const c_char, count: usize) -> Option<Vec<Ssid>> {
    if ssids.is_null() {
        let _ = error::set_invalid_argument("ssids cannot be null");
        return None;
    }

    let mut cursor = ssids;
    let mut out = Vec::with_capacity(count);
    for index in 0..count {
        let text = {
            // SAFETY: The caller guarantees `count` NUL-terminated strings starting at `ssids`.
            unsafe { CStr::from_ptr(cursor) }
        };
        let bytes = text.to_bytes();
        match Ssid::new(bytes) {
            Ok(ssid) => out.push(ssid),
            Err(err) => {
                let _ = error::set_invalid_argument(format!("ssid {index}: {err}"));
                return None;
            }
        }
        // SAFETY: Stays within the caller's buffer: the next string starts after this NUL.
        cursor = unsafe { cursor.add(bytes.len() + 1) };
    }
    Some(out)
}

/// Write a value through a non-null output pointer.
///
/// # Safety
/// `out` must be null or valid for writes of `T`.
pub(crate) unsafe fn write_out<T>(out: *mut T, value: T) {
    if !out.is_null() {
        // SAFETY: Checked for null above; validity is guaranteed by the caller.
        unsafe { out.write(value) };
    }
}
