use locations::{Command, Reply};
use tracing::{debug, warn};

use crate::{
    context::BotContextRef,
    gateway::{Gateway, IncomingMessage},
};

pub const REACTION_TRIGGER: &str = "ET";
pub const REACTION_EMOJI: &str = "🍗";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct MessageResponse {
    pub react: bool,
    pub reply: Option<String>,
}

/// Runs one chat message against the store. Lines that are not commands get no reply.
pub async fn process_message(content: &str, context_ref: &BotContextRef) -> MessageResponse {
    let react = content.contains(REACTION_TRIGGER);

    let reply = match Command::parse(content) {
        Ok(Some(cmd)) => {
            debug!("command: {cmd:?}");
            let mut context = context_ref.write().await;
            match cmd.execute(&mut context.store) {
                Ok(reply) => Some(format_reply(&reply)),
                Err(e) => Some(format_inline(&e.to_string())),
            }
        }
        Ok(None) => None,
        Err(e) => Some(format_inline(&e.to_string())),
    };

    MessageResponse { react, reply }
}

/// Reacts first, then replies. Delivery failures are logged and dropped.
pub async fn handle_message(gateway: &impl Gateway, msg: &IncomingMessage, context_ref: &BotContextRef) {
    let response = process_message(&msg.content, context_ref).await;

    if response.react {
        if let Err(e) = gateway.add_reaction(msg.channel_id, msg.message_id, REACTION_EMOJI).await {
            warn!("could not react to message {}: {e:#}", msg.message_id);
        }
    }

    if let Some(reply) = response.reply {
        if let Err(e) = gateway.send_text(msg.channel_id, &reply).await {
            warn!("could not reply in channel {}: {e:#}", msg.channel_id);
        }
    }
}

pub fn format_reply(reply: &Reply) -> String {
    match reply {
        Reply::Text(text) => format_inline(text),
        Reply::Block(text) => format!("```{text}```"),
    }
}

fn format_inline(text: &str) -> String {
    format!("`{text}`")
}
