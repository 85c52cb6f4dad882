use std::time::Duration;

use tokio::{
    sync::oneshot,
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, error, info};

use crate::context::BotContextRef;

pub struct Autosave {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

/// Saves the store every `period`, starting one period from now.
pub fn spawn_autosave(context_ref: BotContextRef, period: Duration) -> Autosave {
    let (stop, mut stopped) = oneshot::channel();
    let handle = tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                biased;
                _ = &mut stopped => break,
                _ = interval.tick() => {
                    let context = context_ref.read().await;
                    match context.save() {
                        Ok(()) => debug!("autosaved {} locations", context.store.len()),
                        Err(e) => error!("autosave failed: {e}"),
                    }
                }
            }
        }
        info!("autosave stopped");
    });
    Autosave { stop, handle }
}

impl Autosave {
    /// No save starts after this is called. A save that is already running is waited for.
    pub async fn stop(self) {
        let _ = self.stop.send(());
        if let Err(e) = self.handle.await {
            error!("autosave task failed: {e}");
        }
    }
}
