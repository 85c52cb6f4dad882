//! The part of the chat client the bot depends on.

pub type ChannelId = u64;
pub type MessageId = u64;

#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub content: String,
}

#[allow(async_fn_in_trait)]
pub trait Gateway {
    async fn send_text(&self, channel_id: ChannelId, text: &str) -> anyhow::Result<()>;

    async fn add_reaction(&self, channel_id: ChannelId, message_id: MessageId, emoji: &str) -> anyhow::Result<()>;
}
