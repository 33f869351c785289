use creaturedex_core::encyclopedia::{PokemonPageResponse, ITEMS_PER_PAGE};
use creaturedex_core::pokemon::{
    detail_endpoint, filter_by_name, list_endpoint, normalize_query, resource_id_from_url,
    Pokemon, PokemonListResponse, SEARCH_WINDOW,
};
use creaturedex_core::search::SearchChain;

use crate::fanout::fetch_ordered;
use crate::http::ApiClient;

/// Pokémon API adapter
///
/// Never fails: request failures are logged and surface as empty lists or
/// `None`.
#[derive(Debug, Clone)]
pub struct PokemonService {
    client: ApiClient,
    fetch_concurrency: usize,
}

impl PokemonService {
    pub fn new(client: ApiClient, fetch_concurrency: usize) -> Self {
        Self {
            client,
            fetch_concurrency,
        }
    }

    pub async fn list(&self, offset: usize, limit: usize) -> PokemonListResponse {
        let response = self
            .client
            .get::<PokemonListResponse>(&list_endpoint(offset, limit))
            .await;

        match response.into_result() {
            Ok(list) => list,
            Err(e) => {
                log::error!("Failed to fetch Pokémon list (offset {offset}, limit {limit}): {e}");
                PokemonListResponse::empty()
            }
        }
    }

    pub async fn detail(&self, id_or_name: &str) -> Option<Pokemon> {
        match self.lookup(id_or_name).await {
            Ok(pokemon) => Some(pokemon),
            Err(e) => {
                log::error!("Failed to fetch Pokémon {id_or_name}: {e}");
                None
            }
        }
    }

    /// Fetch the details behind a set of resource URLs
    ///
    /// Only the successful subset is returned, in input order.
    pub async fn details(&self, urls: &[String]) -> Vec<Pokemon> {
        let ids: Vec<String> = urls
            .iter()
            .filter_map(|url| {
                let id = resource_id_from_url(url);
                if id.is_none() {
                    log::warn!("No Pokémon id in {url:?}");
                }
                id.map(str::to_string)
            })
            .collect();

        self.details_by_key(ids).await
    }

    async fn details_by_key(&self, keys: Vec<String>) -> Vec<Pokemon> {
        fetch_ordered(keys, self.fetch_concurrency, |key| async move {
            self.detail(&key).await
        })
        .await
        .into_iter()
        .flatten()
        .collect()
    }

    /// Exact lookup first, then a substring scan of the first list window
    pub async fn search(&self, query: &str) -> Vec<Pokemon> {
        let query = normalize_query(query);
        if query.is_empty() {
            return Vec::new();
        }

        let query = query.as_str();
        let outcome = SearchChain::new()
            .tier("direct", move || async move {
                match self.lookup(query).await {
                    Ok(pokemon) => Some(vec![pokemon]),
                    Err(e) => {
                        log::debug!("No exact Pokémon match for {query:?}: {e}");
                        None
                    }
                }
            })
            .tier("list-filter", move || async move {
                let list = self.list(0, SEARCH_WINDOW).await;
                let urls: Vec<String> = filter_by_name(&list.results, query)
                    .into_iter()
                    .map(|resource| resource.url.clone())
                    .collect();

                if urls.is_empty() {
                    return None;
                }
                Some(self.details(&urls).await)
            })
            .run()
            .await;

        log::debug!(
            "Pokémon search {query:?}: {} result(s) from {:?}",
            outcome.results.len(),
            outcome.tier
        );
        outcome.results
    }

    /// One page of full records for the page-data endpoint. `page` is 1-indexed.
    pub async fn page_data(&self, page: usize) -> PokemonPageResponse {
        let page = page.max(1);
        let offset = (page - 1).saturating_mul(ITEMS_PER_PAGE);
        let list = self.list(offset, ITEMS_PER_PAGE).await;

        let names: Vec<String> = list.results.iter().map(|r| r.name.clone()).collect();
        let pokemon = self.details_by_key(names).await;

        PokemonPageResponse::new(pokemon, page, list.count)
    }

    async fn lookup(&self, id_or_name: &str) -> Result<Pokemon, String> {
        self.client
            .get::<Pokemon>(&detail_endpoint(id_or_name))
            .await
            .into_result()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures;
    use super::*;
    use crate::http::mock::{MockTransport, Reply};

    fn service(transport: &std::sync::Arc<MockTransport>) -> PokemonService {
        PokemonService::new(transport.client(), 4)
    }

    #[tokio::test]
    async fn test_list_success() {
        let transport = MockTransport::new();
        transport.ok(
            "/pokemon?offset=0&limit=2",
            fixtures::list(1302, &[(1, "bulbasaur"), (2, "ivysaur")], true),
        );

        let list = service(&transport).list(0, 2).await;

        assert_eq!(list.count, 1302);
        assert_eq!(list.results.len(), 2);
        assert_eq!(list.results[1].name, "ivysaur");
        assert!(list.next.is_some());
    }

    #[tokio::test]
    async fn test_list_failure_is_empty() {
        let transport = MockTransport::new();
        transport.status("/pokemon?offset=0&limit=20", 500);

        let list = service(&transport).list(0, 20).await;

        assert_eq!(list, PokemonListResponse::empty());
    }

    #[tokio::test]
    async fn test_detail() {
        let transport = MockTransport::new();
        transport.ok("/pokemon/pikachu", fixtures::pokemon(25, "pikachu"));

        let pokemon = service(&transport).detail("pikachu").await.unwrap();

        assert_eq!(pokemon.id, 25);
        assert_eq!(pokemon.type_names(), vec!["electric"]);
        assert_eq!(pokemon.image_url(), Some("https://img.test/art/25.png"));
    }

    #[tokio::test]
    async fn test_detail_failure_is_none() {
        let transport = MockTransport::new();
        transport.reply("/pokemon/1", Reply::Unreachable("timeout".to_string()));

        assert!(service(&transport).detail("1").await.is_none());
    }

    #[tokio::test]
    async fn test_details_drops_failures() {
        let transport = MockTransport::new();
        transport.ok("/pokemon/1", fixtures::pokemon(1, "bulbasaur"));
        transport.status("/pokemon/2", 404);

        let urls = vec![
            "https://pokeapi.co/api/v2/pokemon/1/".to_string(),
            "https://pokeapi.co/api/v2/pokemon/2/".to_string(),
        ];
        let pokemon = service(&transport).details(&urls).await;

        assert_eq!(pokemon.len(), 1);
        assert_eq!(pokemon[0].name, "bulbasaur");
        assert!(transport.was_called("/pokemon/2"));
    }

    #[tokio::test]
    async fn test_details_keeps_input_order() {
        let transport = MockTransport::new();
        for (id, name) in [(4, "charmander"), (1, "bulbasaur"), (7, "squirtle")] {
            transport.ok(&format!("/pokemon/{id}"), fixtures::pokemon(id, name));
        }

        let urls: Vec<String> = [4, 1, 7]
            .iter()
            .map(|id| format!("https://pokeapi.co/api/v2/pokemon/{id}/"))
            .collect();
        let names: Vec<String> = service(&transport)
            .details(&urls)
            .await
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, vec!["charmander", "bulbasaur", "squirtle"]);
    }

    #[tokio::test]
    async fn test_search_exact_match_skips_list() {
        let transport = MockTransport::new();
        transport.ok("/pokemon/pikachu", fixtures::pokemon(25, "pikachu"));

        let results = service(&transport).search("  Pikachu ").await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "pikachu");
        assert_eq!(transport.calls(), vec!["/pokemon/pikachu"]);
    }

    #[tokio::test]
    async fn test_search_falls_back_to_list_filter() {
        let transport = MockTransport::new();
        transport.ok(
            "/pokemon?offset=0&limit=100",
            fixtures::list(
                3,
                &[(1, "bulbasaur"), (25, "pikachu"), (172, "pichu")],
                false,
            ),
        );
        transport.ok("/pokemon/25", fixtures::pokemon(25, "pikachu"));
        transport.ok("/pokemon/172", fixtures::pokemon(172, "pichu"));

        let results = service(&transport).search("pi").await;

        let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["pikachu", "pichu"]);
        assert_eq!(
            transport.calls(),
            vec![
                "/pokemon/pi",
                "/pokemon?offset=0&limit=100",
                "/pokemon/25",
                "/pokemon/172"
            ]
        );
    }

    #[tokio::test]
    async fn test_search_without_matches() {
        let transport = MockTransport::new();
        transport.ok(
            "/pokemon?offset=0&limit=100",
            fixtures::list(1, &[(1, "bulbasaur")], false),
        );

        assert!(service(&transport).search("mew").await.is_empty());
        assert!(!transport.was_called("/pokemon/1"));
    }

    #[tokio::test]
    async fn test_search_failed_details_yield_nothing() {
        let transport = MockTransport::new();
        transport.ok(
            "/pokemon?offset=0&limit=100",
            fixtures::list(2, &[(25, "pikachu"), (172, "pichu")], false),
        );
        transport.status("/pokemon/25", 500);
        transport.reply("/pokemon/172", Reply::Unreachable("reset".to_string()));

        let results = service(&transport).search("pi").await;

        assert!(results.is_empty());
        assert_eq!(
            transport.calls(),
            vec![
                "/pokemon/pi",
                "/pokemon?offset=0&limit=100",
                "/pokemon/25",
                "/pokemon/172"
            ]
        );
    }

    #[tokio::test]
    async fn test_search_empty_query_makes_no_request() {
        let transport = MockTransport::new();

        assert!(service(&transport).search("   ").await.is_empty());
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_page_data() {
        let transport = MockTransport::new();
        transport.ok(
            "/pokemon?offset=20&limit=20",
            fixtures::list(45, &[(21, "spearow"), (22, "fearow")], true),
        );
        transport.ok("/pokemon/spearow", fixtures::pokemon(21, "spearow"));

        let page = service(&transport).page_data(2).await;

        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_items, 45);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.pokemon_list.len(), 1);
        assert_eq!(page.pokemon_list[0].name, "spearow");
    }

    #[tokio::test]
    async fn test_page_data_far_page_saturates_offset() {
        let transport = MockTransport::new();

        let page = service(&transport).page_data(usize::MAX).await;

        assert_eq!(page.current_page, usize::MAX);
        assert!(page.pokemon_list.is_empty());
        assert_eq!(
            transport.calls(),
            vec![format!("/pokemon?offset={}&limit=20", usize::MAX)]
        );
    }
}
