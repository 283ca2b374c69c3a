use std::os::raw::c_char;

use dcwproto_msg::{encode, BondedChannel, MacAddr, Message};

use crate::args;
use crate::error;

/// Serialize a built message into the caller's buffer; 0 on failure.
fn serialize_into(
    output: *mut u8,
    output_size: usize,
    msg: dcwproto_msg::Result<Message>,
) -> usize {
    let msg = match msg {
        Ok(msg) => msg,
        Err(err) => {
            let _ = error::map_codec_error(&err);
            return 0;
        }
    };

    let dst = {
        // SAFETY: Forwarded caller contract on `output` / `output_size`.
        match unsafe { args::bytes_out_arg(output, output_size, "output") } {
            Some(dst) => dst,
            None => return 0,
        }
    };

    match encode(&msg, dst) {
        Ok(written) => written,
        Err(err) => {
            let _ = error::map_codec_error(&err);
            0
        }
    }
}

fn serialize_macaddr_list(
    output: *mut u8,
    output_size: usize,
    macaddr_count: usize,
    macaddrs: *const u8,
    build: fn(&[MacAddr]) -> dcwproto_msg::Result<Message>,
) -> usize {
    crate::ffi_boundary(0, || {
        error::clear_error_state();

        let macaddrs = {
            // SAFETY: Forwarded caller contract on `macaddrs`.
            match unsafe { args::macaddrs_arg(macaddrs, macaddr_count) } {
                Some(v) => v,
                None => return 0,
            }
        };

        serialize_into(output, output_size, build(&macaddrs))
    })
}

/// Build and serialize a station join.
///
/// Returns the number of bytes written to `output`, or 0 on failure.
///
/// # Safety
/// `output` must be writable for `output_size` bytes and `macaddrs` readable
/// for `macaddr_count * 6` bytes.
#[no_mangle]
pub unsafe extern "C" fn dcw_serialize_join(
    output: *mut u8,
    output_size: usize,
    macaddr_count: usize,
    macaddrs: *const u8,
) -> usize {
    serialize_macaddr_list(
        output,
        output_size,
        macaddr_count,
        macaddrs,
        Message::station_join,
    )
}

/// Build and serialize a station unjoin.
///
/// # Safety
/// Same contract as [`dcw_serialize_join`].
#[no_mangle]
pub unsafe extern "C" fn dcw_serialize_unjoin(
    output: *mut u8,
    output_size: usize,
    macaddr_count: usize,
    macaddrs: *const u8,
) -> usize {
    serialize_macaddr_list(
        output,
        output_size,
        macaddr_count,
        macaddrs,
        Message::station_unjoin,
    )
}

/// Build and serialize a station negative acknowledgement.
///
/// # Safety
/// Same contract as [`dcw_serialize_join`].
#[no_mangle]
pub unsafe extern "C" fn dcw_serialize_stanack(
    output: *mut u8,
    output_size: usize,
    macaddr_count: usize,
    macaddrs: *const u8,
) -> usize {
    serialize_macaddr_list(
        output,
        output_size,
        macaddr_count,
        macaddrs,
        Message::station_nack,
    )
}

/// Build and serialize a station acknowledgement.
///
/// `macaddrs` holds `bonded_count` packed 6-byte addresses and `ssids` holds
/// `bonded_count` NUL-terminated strings back to back, paired by position.
///
/// # Safety
/// `output` must be writable for `output_size` bytes, `macaddrs` readable for
/// `bonded_count * 6` bytes and `ssids` must contain `bonded_count` C strings.
#[no_mangle]
pub unsafe extern "C" fn dcw_serialize_staack(
    output: *mut u8,
    output_size: usize,
    bonded_count: usize,
    macaddrs: *const u8,
    ssids: *const c_char,
) -> usize {
    crate::ffi_boundary(0, || {
        error::clear_error_state();

        let macaddrs = {
            // SAFETY: Forwarded caller contract on `macaddrs`.
            match unsafe { args::macaddrs_arg(macaddrs, bonded_count) } {
                Some(v) => v,
                None => return 0,
            }
        };
        let ssids = {
            // SAFETY: Forwarded caller contract on `ssids`.
            match unsafe { args::ssid_strings_arg(ssids, bonded_count) } {
                Some(v) => v,
                None => return 0,
            }
        };

        let channels: Vec<BondedChannel> = macaddrs
            .into_iter()
            .zip(ssids)
            .map(|(macaddr, ssid)| BondedChannel { macaddr, ssid })
            .collect();

        serialize_into(output, output_size, Message::station_ack(&channels))
    })
}
