use creaturedex_core::digimon::{
    build_list_response, classify_entry, classify_list_payload, detail_endpoint, filter_by_name,
    list_endpoint, name_search_endpoint, normalize, Digimon, DigimonEntry, DigimonListResponse,
    EnhancedDigimon, EnhancedListResponse, ListPayload, SEARCH_WINDOW,
};
use creaturedex_core::encyclopedia::{DigimonPageResponse, ITEMS_PER_PAGE};
use creaturedex_core::search::SearchChain;
use serde_json::Value;

use crate::fanout::fetch_ordered;
use crate::http::ApiClient;

/// Digimon API adapter
///
/// Upstream payloads are read as raw JSON and reconciled by the core
/// classification and normalization functions.
#[derive(Debug, Clone)]
pub struct DigimonService {
    client: ApiClient,
    fetch_concurrency: usize,
}

impl DigimonService {
    pub fn new(client: ApiClient, fetch_concurrency: usize) -> Self {
        Self {
            client,
            fetch_concurrency,
        }
    }

    /// Fetch one page. `page` is 0-indexed, as upstream expects.
    pub async fn list(&self, page: usize, page_size: usize) -> DigimonListResponse {
        match self.fetch_raw(&list_endpoint(page, page_size)).await {
            Ok(raw) => build_list_response(classify_list_payload(raw), page, page_size),
            Err(e) => {
                log::error!("Failed to fetch Digimon list (page {page}, size {page_size}): {e}");
                DigimonListResponse::empty()
            }
        }
    }

    pub async fn detail(&self, id_or_name: &str) -> Option<Digimon> {
        match self.fetch_raw(&detail_endpoint(id_or_name)).await {
            Ok(raw) => Some(normalize(&raw)),
            Err(e) => {
                log::error!("Failed to fetch Digimon {id_or_name}: {e}");
                None
            }
        }
    }

    /// Exact lookup, then the upstream name filter, then a local scan
    pub async fn search(&self, query: &str) -> Vec<Digimon> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let outcome = SearchChain::new()
            .tier("direct", move || async move {
                match self.fetch_raw(&detail_endpoint(query)).await {
                    Ok(raw) => Some(vec![normalize(&raw)]),
                    Err(e) => {
                        log::debug!("No exact Digimon match for {query:?}: {e}");
                        None
                    }
                }
            })
            .tier("name-filter", move || async move {
                let raw = match self.fetch_raw(&name_search_endpoint(query)).await {
                    Ok(raw) => raw,
                    Err(e) => {
                        log::debug!("Digimon name filter failed for {query:?}: {e}");
                        return None;
                    }
                };

                let entries: Vec<DigimonEntry> = match classify_list_payload(raw) {
                    ListPayload::Paginated { content, .. } => {
                        content.iter().map(classify_entry).collect()
                    }
                    ListPayload::Legacy(items) => items.iter().map(classify_entry).collect(),
                    ListPayload::Unrecognized => return None,
                };

                Some(self.resolve(entries).await)
            })
            .tier("list-filter", move || async move {
                let list = self.list(0, SEARCH_WINDOW).await;
                let matches: Vec<DigimonEntry> = filter_by_name(&list.content, query)
                    .into_iter()
                    .cloned()
                    .collect();
                Some(self.resolve(matches).await)
            })
            .run()
            .await;

        log::debug!(
            "Digimon search {query:?}: {} result(s) from {:?}",
            outcome.results.len(),
            outcome.tier
        );
        outcome.results
    }

    /// List a page and attach the first type, attribute and level to each entry
    pub async fn enhanced_list(&self, page: usize, page_size: usize) -> EnhancedListResponse {
        let list = self.list(page, page_size).await;

        let content = fetch_ordered(list.content, self.fetch_concurrency, |entry| async move {
            match entry {
                DigimonEntry::Stub(stub) => {
                    let detail = self.detail(&stub.lookup_key()).await;
                    EnhancedDigimon::from_stub(&stub, detail.as_ref())
                }
                DigimonEntry::Full(digimon) => EnhancedDigimon::from_full(&digimon),
            }
        })
        .await;

        EnhancedListResponse {
            content,
            pageable: list.pageable,
        }
    }

    /// One page for the page-data endpoint. `page` is 1-indexed.
    pub async fn page_data(&self, page: usize) -> DigimonPageResponse {
        let page = page.max(1);
        let list = self.enhanced_list(page - 1, ITEMS_PER_PAGE).await;
        DigimonPageResponse::new(list, page)
    }

    /// Complete a set of entries: stubs are fetched, full records kept as is
    async fn resolve(&self, entries: Vec<DigimonEntry>) -> Vec<Digimon> {
        fetch_ordered(entries, self.fetch_concurrency, |entry| async move {
            match entry {
                DigimonEntry::Stub(stub) => self.detail(&stub.lookup_key()).await,
                DigimonEntry::Full(digimon) => Some(digimon),
            }
        })
        .await
        .into_iter()
        .flatten()
        .collect()
    }

    async fn fetch_raw(&self, endpoint: &str) -> Result<Value, String> {
        self.client.get::<Value>(endpoint).await.into_result()
    }
}
