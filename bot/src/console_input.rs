use std::io::stdin;
use std::thread;

use locations::{Command, Reply};
use tracing::{debug, info};

use crate::context::BotContextRef;

/// Operator console on stdin. Ends quietly when stdin is closed.
pub fn console_input_thread(context_ref: BotContextRef) {
    thread::spawn(move || {
        pollster::block_on(console_input_loop(context_ref))
    });
}

pub async fn console_input_loop(context_ref: BotContextRef) {
    loop {
        let mut input = String::new();
        match stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                println!("error: {e}");
                break;
            }
        }
        match process_console_input(input.trim_end_matches(['\r', '\n']), &context_ref).await {
            Ok(output) => println!("{output}"),
            Err(e) => println!("error: {e}"),
        }
    }
    debug!("console closed");
}

/// `save`, `load` and `status` act on the store file; anything else is treated like a chat message.
pub async fn process_console_input(input: &str, context_ref: &BotContextRef) -> anyhow::Result<String> {
    match input.trim() {
        "save" => {
            let context = context_ref.read().await;
            context.save()?;
            info!("saved {} locations from console", context.store.len());
            Ok(format!("saved to {}", context.save_path.display()))
        }
        "load" => {
            let mut context = context_ref.write().await;
            context.reload()?;
            info!("reloaded {} locations from console", context.store.len());
            Ok(format!("loaded {} locations", context.store.len()))
        }
        "status" => {
            let context = context_ref.read().await;
            let json = serde_json::to_string_pretty(&context.store)?;
            Ok(json)
        }
        _ => {
            let Some(cmd) = Command::parse(input)? else { return Ok("input not recognized".to_owned()) };
            let mut context = context_ref.write().await;
            let reply = cmd.execute(&mut context.store)?;
            Ok(match reply {
                Reply::Text(text) | Reply::Block(text) => text,
            })
        }
    }
}
