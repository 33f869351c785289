use creaturedex_core::encyclopedia::{
    digimon_entity_page, pokemon_entity_page, EncyclopediaKind, Entity, EntityPage,
    UnsupportedKind,
};
use std::sync::Arc;

use crate::config::Config;
use crate::digimon::DigimonService;
use crate::http::{ApiClient, Transport};
use crate::pokemon::PokemonService;

/// Single entry point over both encyclopedias
///
/// Operations taking an [`EncyclopediaKind`] cannot fail. The `*_by_kind`
/// variants accept the raw discriminant and reject unknown values before any
/// request is made.
#[derive(Debug, Clone)]
pub struct Encyclopedia {
    pokemon: PokemonService,
    digimon: DigimonService,
}

impl Encyclopedia {
    pub fn new(pokemon: PokemonService, digimon: DigimonService) -> Self {
        Self { pokemon, digimon }
    }

    /// Wire both adapters to their configured upstreams over one transport
    pub fn from_config(config: &Config, transport: Arc<dyn Transport>) -> Self {
        Self::new(
            PokemonService::new(
                ApiClient::new(&config.pokemon_api_url, Arc::clone(&transport)),
                config.fetch_concurrency,
            ),
            DigimonService::new(
                ApiClient::new(&config.digimon_api_url, transport),
                config.fetch_concurrency,
            ),
        )
    }

    pub fn pokemon(&self) -> &PokemonService {
        &self.pokemon
    }

    pub fn digimon(&self) -> &DigimonService {
        &self.digimon
    }

    /// One page of list entries. `page` is 0-indexed.
    pub async fn entities(
        &self,
        kind: EncyclopediaKind,
        page: usize,
        page_size: usize,
    ) -> EntityPage {
        match kind {
            EncyclopediaKind::Pokemon => {
                let offset = page.saturating_mul(page_size);
                let list = self.pokemon.list(offset, page_size).await;
                pokemon_entity_page(list, page, page_size)
            }
            EncyclopediaKind::Digimon => {
                digimon_entity_page(self.digimon.list(page, page_size).await)
            }
        }
    }

    pub async fn entity(&self, kind: EncyclopediaKind, id_or_name: &str) -> Option<Entity> {
        match kind {
            EncyclopediaKind::Pokemon => self.pokemon.detail(id_or_name).await.map(Entity::Pokemon),
            EncyclopediaKind::Digimon => self.digimon.detail(id_or_name).await.map(Entity::Digimon),
        }
    }

    pub async fn search(&self, kind: EncyclopediaKind, query: &str) -> Vec<Entity> {
        match kind {
            EncyclopediaKind::Pokemon => self
                .pokemon
                .search(query)
                .await
                .into_iter()
                .map(Entity::Pokemon)
                .collect(),
            EncyclopediaKind::Digimon => self
                .digimon
                .search(query)
                .await
                .into_iter()
                .map(Entity::Digimon)
                .collect(),
        }
    }

    pub async fn entities_by_kind(
        &self,
        kind: &str,
        page: usize,
        page_size: usize,
    ) -> Result<EntityPage, UnsupportedKind> {
        let kind: EncyclopediaKind = kind.parse()?;
        Ok(self.entities(kind, page, page_size).await)
    }

    pub async fn search_by_kind(
        &self,
        kind: &str,
        query: &str,
    ) -> Result<Vec<Entity>, UnsupportedKind> {
        let kind: EncyclopediaKind = kind.parse()?;
        Ok(self.search(kind, query).await)
    }
}
