use anyhow::Context;
use autosave::spawn_autosave;
use config::get_config;
use console_input::console_input_thread;
use context::BotContext;
use shutdown::{shutdown, shutdown_signal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod autosave;
mod config;
mod console_input;
mod context;
mod discord;
mod gateway;
mod handler;
mod shutdown;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,serenity=warn")))
        .init();

    let config = get_config();

    let context_ref = BotContext::load_or_default(config.save_path.clone()).into_ref();

    console_input_thread(context_ref.clone());

    let mut client = discord::build_client(&config.token, context_ref.clone()).await?;
    let shard_manager = client.shard_manager.clone();
    let mut gateway = tokio::spawn(async move { client.start().await });

    let autosave = spawn_autosave(context_ref.clone(), config.autosave_period());

    info!("Bot is running...");

    let gateway_result = tokio::select! {
        result = &mut gateway => Some(result),
        _ = shutdown_signal() => None,
    };

    shutdown(&context_ref, autosave, async move {
        match gateway_result {
            Some(result) => {
                result
                    .context("discord client task failed")?
                    .context("discord connection failed")?;
                warn!("discord connection closed");
            }
            None => {
                shard_manager.shutdown_all().await;
                gateway
                    .await
                    .context("discord client task failed")?
                    .context("discord connection failed")?;
            }
        }
        anyhow::Ok(())
    })
    .await?;

    info!("shut down");
    Ok(())
}
