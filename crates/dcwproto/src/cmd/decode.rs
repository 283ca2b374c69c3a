use dcwproto_msg::{decode_with_config, CodecConfig, Message};

use crate::cmd::{read_input, DecodeArgs};
use crate::exit::{decode_error, CliResult, SUCCESS};
use crate::output::{print_message, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let wire = read_input(&args)?;
    let msg = decode_input(&wire, args.strict)?;
    print_message(&msg, &wire, format);
    Ok(SUCCESS)
}

pub(crate) fn decode_input(wire: &[u8], strict: bool) -> CliResult<Message> {
    let config = if strict {
        CodecConfig::strict()
    } else {
        CodecConfig::default()
    };
    decode_with_config(wire, &config).map_err(|e| decode_error("decode", e))
}
