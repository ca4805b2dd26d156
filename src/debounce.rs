use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::client::CatalogClient;
use crate::constants::DEFAULT_FILTER_DEBOUNCE_MS;
use crate::error::Result;
use crate::models::{CatalogPage, FilterCriteria, PageRequest, ProductRecord};

/// Tag handed out for every triggered request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Shared counter used to recognise stale responses. A ticket is current
/// until a newer one is issued from the same sequence.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Coalesces bursts of filter requests and drops responses that arrive
/// after a newer filter or page request was issued.
///
/// `Ok(None)` means the request was superseded, either before it was sent
/// or while it was in flight. A superseded request yields `Ok(None)` even
/// when it failed; only errors of the current request are returned.
#[derive(Debug, Clone)]
pub struct FilterDebouncer {
    client: CatalogClient,
    sequence: RequestSequence,
    delay: Duration,
    deduplicate: bool,
}

impl FilterDebouncer {
    pub fn new(client: CatalogClient) -> Self {
        Self::with_delay(client, Duration::from_millis(DEFAULT_FILTER_DEBOUNCE_MS))
    }

    pub fn with_delay(client: CatalogClient, delay: Duration) -> Self {
        Self {
            client,
            sequence: RequestSequence::new(),
            delay,
            deduplicate: false,
        }
    }

    pub fn deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    pub fn sequence(&self) -> &RequestSequence {
        &self.sequence
    }

    pub async fn submit(&self, criteria: FilterCriteria) -> Result<Option<Vec<ProductRecord>>> {
        let ticket = self.sequence.issue();
        tokio::time::sleep(self.delay).await;

        if !self.sequence.is_current(ticket) {
            log::debug!("filter {:?} superseded before sending", criteria);
            return Ok(None);
        }

        let result = self
            .client
            .filter_products(&criteria, self.deduplicate)
            .await;

        if !self.sequence.is_current(ticket) {
            log::debug!("dropping stale filter response for {:?}", criteria);
            return Ok(None);
        }
        Ok(Some(result?))
    }

    /// Page changes are not delayed but still supersede pending filters.
    pub async fn load_page(&self, page: PageRequest) -> Result<Option<CatalogPage>> {
        let ticket = self.sequence.issue();
        let result = self.client.load_page(page).await;

        if !self.sequence.is_current(ticket) {
            log::debug!("dropping stale page {} response", page.page_number);
            return Ok(None);
        }
        Ok(Some(result?))
    }
}
