use dcwproto_msg::{MessageType, MAX_MESSAGE_SIZE};

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("dcwproto {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: dcwproto");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("DCWPROTO_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("max_message_size: {MAX_MESSAGE_SIZE}");
    let tags: Vec<String> = MessageType::ALL
        .iter()
        .map(|kind| format!("0x{:02X}", kind.tag()))
        .collect();
    println!("message_tags: {}", tags.join(","));

    Ok(SUCCESS)
}
