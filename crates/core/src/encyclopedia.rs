use serde::Serialize;
use std::str::FromStr;

use crate::digimon::{
    Digimon, DigimonEntry, DigimonListResponse, EnhancedDigimon, EnhancedListResponse,
};
use crate::pagination::total_pages;
use crate::pokemon::{NamedResource, Pokemon, PokemonListResponse};

/// Number of entries on a page-data page
pub const ITEMS_PER_PAGE: usize = 20;

/// Display fallbacks for enhanced Digimon list items
pub const FALLBACK_TYPE: &str = "Unknown type";
pub const FALLBACK_ATTRIBUTE: &str = "Unknown attribute";
pub const FALLBACK_LEVEL: &str = "Normal";

/// Raised when an encyclopedia discriminant is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported encyclopedia type: {0}")]
pub struct UnsupportedKind(pub String);

/// Which upstream an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EncyclopediaKind {
    Pokemon,
    Digimon,
}

impl EncyclopediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncyclopediaKind::Pokemon => "pokemon",
            EncyclopediaKind::Digimon => "digimon",
        }
    }
}

impl FromStr for EncyclopediaKind {
    type Err = UnsupportedKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pokemon" => Ok(EncyclopediaKind::Pokemon),
            "digimon" => Ok(EncyclopediaKind::Digimon),
            other => Err(UnsupportedKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for EncyclopediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A full record from either source
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entity {
    Pokemon(Pokemon),
    Digimon(Digimon),
}

impl Entity {
    pub fn id(&self) -> u64 {
        match self {
            Entity::Pokemon(pokemon) => pokemon.id,
            Entity::Digimon(digimon) => digimon.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entity::Pokemon(pokemon) => &pokemon.name,
            Entity::Digimon(digimon) => &digimon.name,
        }
    }
}

/// A list entry from either source
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntitySummary {
    Pokemon(NamedResource),
    Digimon(DigimonEntry),
}

/// Facade pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityPagination {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Envelope shared by both encyclopedias
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityPage {
    pub content: Vec<EntitySummary>,
    pub pagination: EntityPagination,
}

/// Wrap a Pokémon list response. `page` is 0-indexed.
pub fn pokemon_entity_page(list: PokemonListResponse, page: usize, page_size: usize) -> EntityPage {
    EntityPage {
        pagination: EntityPagination {
            current_page: page,
            page_size,
            total_items: list.count,
            total_pages: total_pages(list.count, page_size),
            has_next_page: list.next.is_some(),
            has_prev_page: list.previous.is_some(),
        },
        content: list
            .results
            .into_iter()
            .map(EntitySummary::Pokemon)
            .collect(),
    }
}

/// Wrap a Digimon list response, reusing its upstream metadata
pub fn digimon_entity_page(list: DigimonListResponse) -> EntityPage {
    let pageable = list.pageable;
    EntityPage {
        pagination: EntityPagination {
            current_page: pageable.current_page,
            page_size: pageable.elements_on_page,
            total_items: pageable.total_elements,
            total_pages: pageable.total_pages.max(1),
            has_next_page: pageable.next_page.is_some(),
            has_prev_page: pageable.previous_page.is_some(),
        },
        content: list
            .content
            .into_iter()
            .map(EntitySummary::Digimon)
            .collect(),
    }
}

/// `GET /api/pokemon/page` response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonPageResponse {
    pub pokemon_list: Vec<Pokemon>,
    pub total_pages: usize,
    pub current_page: usize,
    pub total_items: usize,
}

impl PokemonPageResponse {
    pub fn new(pokemon_list: Vec<Pokemon>, current_page: usize, total_items: usize) -> Self {
        Self {
            pokemon_list,
            total_pages: total_pages(total_items, ITEMS_PER_PAGE),
            current_page,
            total_items,
        }
    }
}

/// An enhanced Digimon with display labels resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigimonPageItem {
    #[serde(flatten)]
    pub digimon: EnhancedDigimon,
    #[serde(rename = "type")]
    pub kind: String,
    pub attribute: String,
    pub level: String,
}

impl From<EnhancedDigimon> for DigimonPageItem {
    fn from(digimon: EnhancedDigimon) -> Self {
        Self {
            kind: digimon
                .primary_type
                .clone()
                .unwrap_or_else(|| FALLBACK_TYPE.to_string()),
            attribute: digimon
                .primary_attribute
                .clone()
                .unwrap_or_else(|| FALLBACK_ATTRIBUTE.to_string()),
            level: digimon
                .primary_level
                .clone()
                .unwrap_or_else(|| FALLBACK_LEVEL.to_string()),
            digimon,
        }
    }
}

/// `GET /api/digimon/page` response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigimonPageResponse {
    pub digimon_list: Vec<DigimonPageItem>,
    pub total_pages: usize,
    pub current_page: usize,
    pub total_items: usize,
}

impl DigimonPageResponse {
    pub fn new(list: EnhancedListResponse, current_page: usize) -> Self {
        Self {
            total_pages: list.pageable.total_pages.max(1),
            total_items: list.pageable.total_elements,
            current_page,
            digimon_list: list.content.into_iter().map(DigimonPageItem::from).collect(),
        }
    }
}

/// Parse a 1-indexed `page` query value; missing or invalid values mean page 1
pub fn parse_page_param(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Format an id as `#0001`
pub fn format_id(id: u64, pad_length: usize) -> String {
    format!("#{id:0>pad_length$}")
}
