use crate::prelude::{eprintln, *};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use creaturedex_core::encyclopedia::{
    parse_page_param, DigimonPageResponse, EncyclopediaKind, Entity, EntityPage,
    PokemonPageResponse,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::encyclopedia::Encyclopedia;

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
}

pub struct AppState {
    encyclopedia: Encyclopedia,
    default_page_size: usize,
}

impl AppState {
    pub fn new(encyclopedia: Encyclopedia, default_page_size: usize) -> Self {
        Self {
            encyclopedia,
            default_page_size,
        }
    }
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let config = global.config();
    let addr = f!("{}:{}", options.host, options.port);

    if global.verbose {
        eprintln!("Pokémon API Base: {}", config.pokemon_api_url);
        eprintln!("Digimon API Base: {}", config.digimon_api_url);
    }

    let state = Arc::new(AppState::new(
        global.encyclopedia(&config),
        config.default_page_size,
    ));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    eprintln!("creaturedex listening on http://{}", addr);
    log::info!("Serving page data on {addr}");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/pokemon/page", get(pokemon_page))
        .route("/api/digimon/page", get(digimon_page))
        .route("/api/encyclopedia/{kind}", get(list_entities))
        .route("/api/encyclopedia/{kind}/search", get(search_entities))
        .route("/api/encyclopedia/{kind}/{id}", get(get_entity))
        .layer(cors)
        .with_state(state)
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::UnsupportedKind(_) => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
struct PageParams {
    page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    page: Option<String>,
    page_size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

fn parse_count(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
}

async fn pokemon_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Json<PokemonPageResponse> {
    let page = parse_page_param(params.page.as_deref());
    Json(state.encyclopedia.pokemon().page_data(page).await)
}

async fn digimon_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Json<DigimonPageResponse> {
    let page = parse_page_param(params.page.as_deref());
    Json(state.encyclopedia.digimon().page_data(page).await)
}

/// `page` is 0-indexed here, matching the facade
async fn list_entities(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<EntityPage>, Error> {
    let page = parse_count(params.page.as_deref()).unwrap_or(0);
    let page_size = parse_count(params.page_size.as_deref())
        .filter(|size| *size > 0)
        .unwrap_or(state.default_page_size);

    let output = state
        .encyclopedia
        .entities_by_kind(&kind, page, page_size)
        .await?;
    Ok(Json(output))
}

async fn search_entities(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Entity>>, Error> {
    let results = state.encyclopedia.search_by_kind(&kind, &params.q).await?;
    Ok(Json(results))
}

async fn get_entity(
    State(state): State<Arc<AppState>>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Json<Entity>, Error> {
    let kind: EncyclopediaKind = kind.parse()?;
    state
        .encyclopedia
        .entity(kind, &id)
        .await
        .map(Json)
        .ok_or(Error::NotFound { kind, id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digimon::service::fixtures as digimon_fixtures;
    use crate::encyclopedia::testing::encyclopedia;
    use crate::http::mock::MockTransport;
    use crate::pokemon::service::fixtures as pokemon_fixtures;

    fn state(transport: &Arc<MockTransport>) -> State<Arc<AppState>> {
        State(Arc::new(AppState::new(encyclopedia(transport), 20)))
    }

    #[tokio::test]
    async fn test_pokemon_page_defaults_to_first_page() {
        let transport = MockTransport::new();
        transport.ok(
            "/pokemon?offset=0&limit=20",
            pokemon_fixtures::list(1302, &[(1, "bulbasaur")], true),
        );
        transport.ok("/pokemon/bulbasaur", pokemon_fixtures::pokemon(1, "bulbasaur"));

        let Json(page) = pokemon_page(
            state(&transport),
            Query(PageParams {
                page: Some("abc".to_string()),
            }),
        )
        .await;

        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 66);
        assert_eq!(page.pokemon_list.len(), 1);
    }

    #[tokio::test]
    async fn test_digimon_page() {
        let transport = MockTransport::new();
        transport.ok(
            "/digimon?page=1&pageSize=20",
            digimon_fixtures::paginated(vec![digimon_fixtures::stub(21, "Patamon")], 1460, 73),
        );
        transport.ok(
            "/digimon/21",
            digimon_fixtures::digimon(21, "Patamon", "Mammal", "Data", "Rookie"),
        );

        let Json(page) = digimon_page(
            state(&transport),
            Query(PageParams {
                page: Some("2".to_string()),
            }),
        )
        .await;

        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 73);
        assert_eq!(page.digimon_list[0].kind, "Mammal");

        let body = serde_json::to_value(&page).unwrap();
        assert_eq!(body["digimonList"][0]["type"], "Mammal");
        assert_eq!(body["digimonList"][0]["primaryType"], "Mammal");
    }

    #[tokio::test]
    async fn test_list_entities_uses_default_page_size() {
        let transport = MockTransport::new();
        transport.ok(
            "/pokemon?offset=40&limit=20",
            pokemon_fixtures::list(45, &[(41, "zubat")], false),
        );

        let Json(page) = list_entities(
            state(&transport),
            Path("pokemon".to_string()),
            Query(ListParams {
                page: Some("2".to_string()),
                page_size: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(page.pagination.current_page, 2);
        assert_eq!(page.pagination.page_size, 20);
        assert!(!page.pagination.has_next_page);
    }

    #[tokio::test]
    async fn test_huge_page_params_do_not_overflow() {
        let transport = MockTransport::new();
        let huge = "1000000000000000000".to_string();

        let Json(page) = pokemon_page(
            state(&transport),
            Query(PageParams {
                page: Some(huge.clone()),
            }),
        )
        .await;
        assert_eq!(page.current_page, 1_000_000_000_000_000_000);
        assert!(page.pokemon_list.is_empty());

        let Json(page) = list_entities(
            state(&transport),
            Path("pokemon".to_string()),
            Query(ListParams {
                page: Some(huge),
                page_size: Some("1000".to_string()),
            }),
        )
        .await
        .unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.pagination.page_size, 1000);
        assert_eq!(transport.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_kind_is_bad_request() {
        let transport = MockTransport::new();

        let err = list_entities(
            state(&transport),
            Path("unknown".to_string()),
            Query(ListParams::default()),
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "Unsupported encyclopedia type: unknown");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_entity_is_not_found() {
        let transport = MockTransport::new();

        let err = get_entity(
            state(&transport),
            Path(("digimon".to_string(), "Agumonn".to_string())),
        )
        .await
        .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_search_entities() {
        let transport = MockTransport::new();
        transport.ok(
            "/digimon/Agumon",
            digimon_fixtures::digimon(1, "Agumon", "Reptile", "Vaccine", "Rookie"),
        );

        let Json(results) = search_entities(
            state(&transport),
            Path("digimon".to_string()),
            Query(SearchParams {
                q: "Agumon".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name(), "Agumon");
    }
}
