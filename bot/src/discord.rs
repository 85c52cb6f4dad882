use std::sync::Arc;

use anyhow::Context as _;
use serenity::{
    all::{
        ActivityData, ChannelId, Context, EventHandler, GatewayIntents, Http, Message, MessageId,
        ReactionType, Ready,
    },
    async_trait, Client,
};
use tracing::info;

use crate::{
    context::BotContextRef,
    gateway::{self, Gateway, IncomingMessage},
    handler::handle_message,
};

const STATUS: &str = "Covfefe";

pub struct DiscordGateway {
    http: Arc<Http>,
}

impl Gateway for DiscordGateway {
    async fn send_text(&self, channel_id: gateway::ChannelId, text: &str) -> anyhow::Result<()> {
        ChannelId::new(channel_id).say(&self.http, text).await?;
        Ok(())
    }

    async fn add_reaction(
        &self,
        channel_id: gateway::ChannelId,
        message_id: gateway::MessageId,
        emoji: &str,
    ) -> anyhow::Result<()> {
        ChannelId::new(channel_id)
            .create_reaction(&self.http, MessageId::new(message_id), ReactionType::Unicode(emoji.to_owned()))
            .await?;
        Ok(())
    }
}

struct Handler {
    context_ref: BotContextRef,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.id == ctx.cache.current_user().id {
            return;
        }
        let gateway = DiscordGateway { http: ctx.http.clone() };
        let incoming = IncomingMessage {
            channel_id: msg.channel_id.get(),
            message_id: msg.id.get(),
            content: msg.content,
        };
        handle_message(&gateway, &incoming, &self.context_ref).await;
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("connected as {}", ready.user.name);
        ctx.set_activity(Some(ActivityData::playing(STATUS)));
    }
}

pub async fn build_client(token: &str, context_ref: BotContextRef) -> anyhow::Result<Client> {
    let intents = GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;
    Client::builder(token, intents)
        .event_handler(Handler { context_ref })
        .await
        .context("could not create discord client")
}
