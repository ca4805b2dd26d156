use reqwest::Client;

use crate::constants::{
    ACTION_FILTER, ACTION_GET_IDS, ACTION_GET_ITEMS, DEFAULT_API_URL, DEFAULT_ITEMS_PER_PAGE,
};
use crate::credential::CredentialSource;
use crate::error::Result;
use crate::models::{
    CatalogPage, FilterCriteria, GetIdsParams, GetItemsParams, PageRequest, ProductRecord,
    RemoteItem,
};
use crate::normalize::{dedupe_by_id, project_items};
use crate::remote::RemoteInvoker;

/// Settings the catalog client needs: where the API lives and how large a
/// page is.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub items_per_page: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// Stateless client for the remote product API.
///
/// Holds configuration only, so clones can be shared freely between tasks.
/// Each call derives its credential, talks to the remote endpoint and
/// returns normalized records or the failure.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    invoker: RemoteInvoker,
    credentials: CredentialSource,
    items_per_page: u32,
}

impl CatalogClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http(Client::new(), config)
    }

    pub fn with_http(http: Client, config: ClientConfig) -> Self {
        Self {
            invoker: RemoteInvoker::new(http, config.base_url),
            credentials: CredentialSource::default(),
            items_per_page: config.items_per_page,
        }
    }

    pub fn with_credentials(mut self, credentials: CredentialSource) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    pub fn base_url(&self) -> &str {
        self.invoker.base_url()
    }

    /// Builds a request for `page_number` using the configured page size.
    pub fn page(&self, page_number: u32) -> Result<PageRequest> {
        PageRequest::new(page_number, self.items_per_page)
    }

    /// Identifiers for one page, verbatim and possibly with duplicates.
    pub async fn list_ids(&self, page: PageRequest) -> Result<Vec<String>> {
        let params = GetIdsParams {
            offset: page.offset(),
            limit: page.limit(),
        };
        self.invoker
            .invoke(ACTION_GET_IDS, &params, &self.credentials.credential())
            .await
    }

    /// Resolves identifiers to records, keeping the first record per id.
    pub async fn resolve_details(&self, ids: &[String]) -> Result<Vec<ProductRecord>> {
        let params = GetItemsParams { ids };
        let items: Vec<RemoteItem> = self
            .invoker
            .invoke(ACTION_GET_ITEMS, &params, &self.credentials.credential())
            .await?;
        Ok(dedupe_by_id(project_items(items)))
    }

    /// Server-side filtering. Results are returned in server order; pass
    /// `deduplicate` to apply the same first-occurrence rule as
    /// [`resolve_details`](Self::resolve_details).
    pub async fn filter_products(
        &self,
        criteria: &FilterCriteria,
        deduplicate: bool,
    ) -> Result<Vec<ProductRecord>> {
        let items: Vec<RemoteItem> = self
            .invoker
            .invoke(ACTION_FILTER, criteria, &self.credentials.credential())
            .await?;
        let records = project_items(items);
        if deduplicate {
            Ok(dedupe_by_id(records))
        } else {
            Ok(records)
        }
    }

    /// Lists and resolves one page. A page is the last one when the server
    /// returned fewer ids than a full page.
    pub async fn load_page(&self, page: PageRequest) -> Result<CatalogPage> {
        let ids = self.list_ids(page).await?;
        let has_next = ids.len() >= page.items_per_page as usize;

        let products = if ids.is_empty() {
            Vec::new()
        } else {
            self.resolve_details(&ids).await?
        };

        Ok(CatalogPage {
            page: page.page_number,
            products,
            has_previous: page.page_number > 1,
            has_next,
        })
    }
}
