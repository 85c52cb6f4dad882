use std::future::Future;

use tracing::{error, info};

use crate::{autosave::Autosave, context::BotContextRef};

/// Saves once more, stops the autosave, then runs `close`. A failed save is logged and shutdown goes on.
pub async fn shutdown<F>(context_ref: &BotContextRef, autosave: Autosave, close: F) -> anyhow::Result<()>
where
    F: Future<Output = anyhow::Result<()>>,
{
    {
        let context = context_ref.read().await;
        match context.save() {
            Ok(()) => info!("saved locations to {}", context.save_path.display()),
            Err(e) => error!("final save failed: {e}"),
        }
    }
    autosave.stop().await;
    close.await
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("could not listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("could not listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received ctrl-c"),
        _ = terminate => info!("received SIGTERM"),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };

    use anyhow::anyhow;
    use locations::{Location, LocationStore};
    use tempfile::tempdir;

    use super::*;
    use crate::{autosave::spawn_autosave, context::BotContext};

    const PERIOD: Duration = Duration::from_secs(60);

    #[tokio::test(start_paused = true)]
    async fn saves_then_stops_autosave_then_closes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("locations.json");
        let context_ref = BotContext::load_or_default(path.clone()).into_ref();
        context_ref.write().await.store.set("home", Location::new(1.0, 2.0, 3.0));
        let autosave = spawn_autosave(context_ref.clone(), PERIOD);
        let steps = Arc::new(Mutex::new(Vec::new()));

        let close_steps = steps.clone();
        let close_path = path.clone();
        shutdown(&context_ref, autosave, async move {
            // the final save is already on disk
            assert_eq!(LocationStore::load(&close_path).unwrap().len(), 1);
            close_steps.lock().unwrap().push("saved");

            // and the autosave no longer writes
            std::fs::remove_file(&close_path).unwrap();
            tokio::time::sleep(PERIOD * 3).await;
            assert!(!close_path.exists());
            close_steps.lock().unwrap().push("closed");
            anyhow::Ok(())
        })
        .await
        .unwrap();

        assert_eq!(*steps.lock().unwrap(), vec!["saved", "closed"]);

        tokio::time::sleep(PERIOD * 3).await;
        assert!(!path.exists());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_save_still_closes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("locations.json");
        let context_ref = BotContext::load_or_default(path).into_ref();
        let autosave = spawn_autosave(context_ref.clone(), PERIOD);
        let closed = Arc::new(Mutex::new(false));

        let close_flag = closed.clone();
        shutdown(&context_ref, autosave, async move {
            *close_flag.lock().unwrap() = true;
            anyhow::Ok(())
        })
        .await
        .unwrap();

        assert!(*closed.lock().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn close_error_is_returned_after_saving() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("locations.json");
        let context_ref = BotContext::load_or_default(path.clone()).into_ref();
        let autosave = spawn_autosave(context_ref.clone(), PERIOD);

        let err = shutdown(&context_ref, autosave, async { Err::<(), _>(anyhow!("authentication failed")) })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "authentication failed");
        assert!(path.exists());
    }
}
