//! Background worker persisting click events off the request path.

use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::application::services::ClickService;
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::ClickRepository;

/// Drains the click channel, appending each event to its link's log through
/// [`ClickService::append`].
///
/// Up to `concurrency` appends run at once. Appends for the same code may
/// therefore overlap and lose an update; see [`ClickRepository`]. Failures are
/// logged and dropped, never retried.
///
/// Returns once every sender is dropped and all in-flight appends finished,
/// which lets the server drain queued clicks on shutdown.
pub async fn run_click_worker<R>(
    mut rx: mpsc::Receiver<ClickEvent>,
    click_service: Arc<ClickService<R>>,
    concurrency: usize,
) where
    R: ClickRepository + 'static,
{
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();

    while let Some(event) = rx.recv().await {
        let Ok(permit) = semaphore.clone().acquire_owned().await else {
            break;
        };
        let click_service = click_service.clone();

        tasks.spawn(async move {
            let _permit = permit;
            match click_service.append(&event.code, event.click).await {
                Ok(()) => debug!("Click recorded for {}", event.code),
                Err(e) => warn!("Dropping click for {}: {}", event.code, e),
            }
        });

        while tasks.try_join_next().is_some() {}
    }

    while tasks.join_next().await.is_some() {}
    info!("Click worker stopped");
}
