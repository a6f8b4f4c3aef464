//! Link statistics and dashboard service.

use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

use crate::application::services::{ClickService, LinkService};
use crate::domain::analytics::{CountryCount, RECENT_CLICKS, by_country, recent};
use crate::domain::entities::{Click, Link};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

/// Everything the stats page shows for one link.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: Link,
    pub total_clicks: usize,
    pub countries: Vec<CountryCount>,
    /// Newest first.
    pub recent: Vec<Click>,
}

/// One dashboard row.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardEntry {
    pub link: Link,
    pub clicks: usize,
}

/// Dashboard listing with totals over the listed entries.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    /// Index order, newest first.
    pub entries: Vec<DashboardEntry>,
    pub total_links: usize,
    pub total_clicks: usize,
}

/// Read-side service combining links, click logs, and aggregation.
pub struct StatsService<L: LinkRepository, C: ClickRepository> {
    link_service: Arc<LinkService<L>>,
    click_service: Arc<ClickService<C>>,
}

impl<L: LinkRepository, C: ClickRepository> StatsService<L, C> {
    /// Number of index entries the dashboard shows.
    pub const DASHBOARD_LIMIT: usize = 100;

    pub fn new(link_service: Arc<LinkService<L>>, click_service: Arc<ClickService<C>>) -> Self {
        Self {
            link_service,
            click_service,
        }
    }

    /// Builds the stats for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_link_stats(&self, code: &str) -> Result<LinkStats, AppError> {
        let link = self.link_service.get_link_by_code(code).await?;
        let log = self.click_service.get_all(code).await?;

        Ok(LinkStats {
            link,
            total_clicks: log.len(),
            countries: by_country(log.iter()),
            recent: recent(&log, RECENT_CLICKS),
        })
    }

    /// Builds the dashboard from the first `limit` index entries.
    ///
    /// Entries are loaded concurrently. An entry whose record is missing, or
    /// whose lookup fails, is left out rather than failing the page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the index itself cannot be read.
    pub async fn get_dashboard(&self, limit: usize) -> Result<Dashboard, AppError> {
        let codes = self.link_service.list_codes(limit).await?;

        let entries: Vec<DashboardEntry> = join_all(codes.iter().map(|code| self.load_entry(code)))
            .await
            .into_iter()
            .flatten()
            .collect();

        let total_clicks = entries.iter().map(|e| e.clicks).sum();

        Ok(Dashboard {
            total_links: entries.len(),
            total_clicks,
            entries,
        })
    }

    async fn load_entry(&self, code: &str) -> Option<DashboardEntry> {
        let (link, clicks) = tokio::join!(
            self.link_service.get_link_by_code(code),
            self.click_service.count_for(code)
        );

        match (link, clicks) {
            (Ok(link), Ok(clicks)) => Some(DashboardEntry { link, clicks }),
            (Err(e), _) | (_, Err(e)) => {
                debug!("Skipping dashboard entry {}: {}", code, e);
                None
            }
        }
    }
}
