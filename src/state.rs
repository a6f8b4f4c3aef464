//! Shared application state injected into all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{ClickService, LinkService, StatsService};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::persistence::{KvClickRepository, KvLinkRepository};
use crate::infrastructure::store::KvStore;

/// Services, store handle, and click queue shared across requests.
///
/// Cloning is cheap: every field is reference-counted or a channel sender.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<KvLinkRepository>>,
    pub click_service: Arc<ClickService<KvClickRepository>>,
    pub stats_service: Arc<StatsService<KvLinkRepository, KvClickRepository>>,
    pub store: Arc<dyn KvStore>,
    pub click_sender: mpsc::Sender<ClickEvent>,
    /// Trust `X-Forwarded-*` headers when building public URLs.
    pub behind_proxy: bool,
}

impl AppState {
    /// Wires the repositories and services over a single store.
    pub fn new(
        store: Arc<dyn KvStore>,
        click_sender: mpsc::Sender<ClickEvent>,
        click_log_capacity: usize,
        behind_proxy: bool,
    ) -> Self {
        let link_repository = Arc::new(KvLinkRepository::new(store.clone()));
        let click_repository = Arc::new(KvClickRepository::new(store.clone()));

        let link_service = Arc::new(LinkService::new(link_repository));
        let click_service = Arc::new(ClickService::new(click_repository, click_log_capacity));
        let stats_service = Arc::new(StatsService::new(
            link_service.clone(),
            click_service.clone(),
        ));

        Self {
            link_service,
            click_service,
            stats_service,
            store,
            click_sender,
            behind_proxy,
        }
    }
}
