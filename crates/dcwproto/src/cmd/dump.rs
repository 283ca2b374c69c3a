use dcwproto_msg::render;

use crate::cmd::decode::decode_input;
use crate::cmd::{read_input, DecodeArgs};
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: DecodeArgs) -> CliResult<i32> {
    let wire = read_input(&args)?;
    let msg = decode_input(&wire, args.strict)?;
    print!("{}", render(&msg));
    Ok(SUCCESS)
}
