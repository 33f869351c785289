//! Digimon payload classification and normalization
//!
//! The Digimon API has changed shape over time. A list request may answer with
//! a bare array of full records (legacy) or with `{content, pageable}` where
//! each content entry is either a full record or a `{id, name, image, href}`
//! stub. Payloads are classified once into [`ListPayload`] and [`DigimonEntry`]
//! and every record goes through [`normalize`], which never fails.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Page size used by the local-filter search tier
pub const SEARCH_WINDOW: usize = 100;

/// Label used for sub-entries that arrive without one
pub const UNKNOWN_LABEL: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DigimonImage {
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigimonType {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigimonLevel {
    pub id: u64,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigimonAttribute {
    pub id: u64,
    pub attribute: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigimonField {
    pub id: u64,
    pub field: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigimonDescription {
    pub language: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigimonSkill {
    pub skill: String,
    pub description: String,
}

/// Link to another Digimon in an evolution line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionRef {
    pub name: String,
    pub href: String,
}

/// Canonical Digimon record. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Digimon {
    pub id: u64,
    pub name: String,
    pub images: Vec<DigimonImage>,
    pub levels: Vec<DigimonLevel>,
    pub types: Vec<DigimonType>,
    pub attributes: Vec<DigimonAttribute>,
    pub fields: Vec<DigimonField>,
    pub descriptions: Vec<DigimonDescription>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub x_antibody: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub skills: Vec<DigimonSkill>,
    #[serde(default)]
    pub prior_evolutions: Vec<EvolutionRef>,
    #[serde(default)]
    pub next_evolutions: Vec<EvolutionRef>,
}

impl Digimon {
    pub fn image_url(&self) -> Option<&str> {
        self.images.first().map(|image| image.href.as_str())
    }

    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(|t| t.kind.as_str())
    }

    pub fn primary_attribute(&self) -> Option<&str> {
        self.attributes.first().map(|a| a.attribute.as_str())
    }

    pub fn primary_level(&self) -> Option<&str> {
        self.levels.first().map(|l| l.level.as_str())
    }

    /// English description, or the first one available
    pub fn description(&self) -> Option<&str> {
        self.descriptions
            .iter()
            .find(|d| d.language.starts_with("en"))
            .or(self.descriptions.first())
            .map(|d| d.description.as_str())
    }
}

/// Minimal list entry that needs a detail request to be complete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigimonStub {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub href: String,
}

impl DigimonStub {
    /// Identifier to use for the detail endpoint
    pub fn lookup_key(&self) -> String {
        if self.id != 0 {
            self.id.to_string()
        } else {
            self.name.clone()
        }
    }
}

/// A list content entry, classified once
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DigimonEntry {
    Stub(DigimonStub),
    Full(Digimon),
}

impl DigimonEntry {
    pub fn name(&self) -> &str {
        match self {
            DigimonEntry::Stub(stub) => &stub.name,
            DigimonEntry::Full(digimon) => &digimon.name,
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            DigimonEntry::Stub(stub) => stub.id,
            DigimonEntry::Full(digimon) => digimon.id,
        }
    }
}

/// Upstream pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub current_page: usize,
    pub elements_on_page: usize,
    pub total_elements: usize,
    pub total_pages: usize,
    pub previous_page: Option<String>,
    pub next_page: Option<String>,
}

impl Pageable {
    /// Metadata for a failed list request
    pub fn empty() -> Self {
        Self {
            current_page: 0,
            elements_on_page: 0,
            total_elements: 0,
            total_pages: 1,
            previous_page: None,
            next_page: None,
        }
    }

    fn from_value(value: &Value) -> Self {
        Self {
            current_page: usize_field(value, "currentPage"),
            elements_on_page: usize_field(value, "elementsOnPage"),
            total_elements: usize_field(value, "totalElements"),
            total_pages: usize_field(value, "totalPages").max(1),
            previous_page: link_field(value, "previousPage"),
            next_page: link_field(value, "nextPage"),
        }
    }
}

/// Digimon list envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigimonListResponse {
    pub content: Vec<DigimonEntry>,
    pub pageable: Pageable,
}

impl DigimonListResponse {
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            pageable: Pageable::empty(),
        }
    }
}

/// Shape of a raw list payload
#[derive(Debug, Clone, PartialEq)]
pub enum ListPayload {
    /// Bare array of full records
    Legacy(Vec<Value>),
    /// `{content, pageable}` object
    Paginated { content: Vec<Value>, pageable: Value },
    /// Anything else
    Unrecognized,
}

/// Classify a raw list payload
pub fn classify_list_payload(value: Value) -> ListPayload {
    match value {
        Value::Array(items) => ListPayload::Legacy(items),
        Value::Object(mut map) => match map.remove("content") {
            Some(Value::Array(content)) => ListPayload::Paginated {
                content,
                pageable: map.remove("pageable").unwrap_or(Value::Null),
            },
            _ => ListPayload::Unrecognized,
        },
        _ => ListPayload::Unrecognized,
    }
}

/// Classify a single content entry: anything carrying `href` is a stub
pub fn classify_entry(value: &Value) -> DigimonEntry {
    if value.get("href").is_some() {
        DigimonEntry::Stub(DigimonStub {
            id: u64_field(value, "id"),
            name: string_field(value, "name"),
            image: string_field(value, "image"),
            href: string_field(value, "href"),
        })
    } else {
        DigimonEntry::Full(normalize(value))
    }
}

/// Build the list envelope for a raw payload
///
/// A paginated payload with content keeps its upstream metadata. Everything
/// else is treated as a legacy array and gets synthesized metadata.
pub fn build_list_response(
    payload: ListPayload,
    page: usize,
    page_size: usize,
) -> DigimonListResponse {
    match payload {
        ListPayload::Paginated { content, pageable } if !content.is_empty() => {
            DigimonListResponse {
                content: content.iter().map(classify_entry).collect(),
                pageable: Pageable::from_value(&pageable),
            }
        }
        ListPayload::Legacy(items) => {
            let content: Vec<DigimonEntry> = items
                .iter()
                .map(|item| DigimonEntry::Full(normalize(item)))
                .collect();
            let pageable = synthesize_pageable(content.len(), page, page_size);
            DigimonListResponse { content, pageable }
        }
        ListPayload::Paginated { .. } | ListPayload::Unrecognized => DigimonListResponse {
            content: Vec::new(),
            pageable: synthesize_pageable(0, page, page_size),
        },
    }
}

/// Pagination metadata for a payload that carried none
pub fn synthesize_pageable(len: usize, page: usize, page_size: usize) -> Pageable {
    let total_pages = crate::pagination::total_pages(len, page_size);

    let previous_page = if page > 0 {
        Some(list_endpoint(page - 1, page_size))
    } else {
        None
    };

    let next_page = if page.saturating_add(1) < total_pages {
        Some(list_endpoint(page + 1, page_size))
    } else {
        None
    };

    Pageable {
        current_page: page,
        elements_on_page: len,
        total_elements: len,
        total_pages,
        previous_page,
        next_page,
    }
}

/// Normalize any JSON value into a fully populated [`Digimon`]
pub fn normalize(raw: &Value) -> Digimon {
    Digimon {
        id: u64_field(raw, "id"),
        name: string_field(raw, "name"),
        images: array_field(raw, "images")
            .iter()
            .map(|image| DigimonImage {
                href: match image {
                    Value::String(href) => href.clone(),
                    other => string_field(other, "href"),
                },
            })
            .collect(),
        levels: array_field(raw, "levels")
            .iter()
            .map(|l| DigimonLevel {
                id: u64_field(l, "id"),
                level: label_field(l, "level"),
            })
            .collect(),
        types: array_field(raw, "types")
            .iter()
            .map(|t| DigimonType {
                id: u64_field(t, "id"),
                kind: label_field(t, "type"),
            })
            .collect(),
        attributes: array_field(raw, "attributes")
            .iter()
            .map(|a| DigimonAttribute {
                id: u64_field(a, "id"),
                attribute: label_field(a, "attribute"),
            })
            .collect(),
        fields: array_field(raw, "fields")
            .iter()
            .map(|f| DigimonField {
                id: u64_field(f, "id"),
                field: label_field(f, "field"),
                image: string_field(f, "image"),
            })
            .collect(),
        descriptions: array_field(raw, "descriptions")
            .iter()
            .map(|d| DigimonDescription {
                language: string_field(d, "language"),
                description: string_field(d, "description"),
            })
            .collect(),
        x_antibody: raw.get("xAntibody").and_then(Value::as_bool),
        release_date: raw
            .get("releaseDate")
            .and_then(Value::as_str)
            .filter(|date| !date.is_empty())
            .map(str::to_string),
        skills: array_field(raw, "skills")
            .iter()
            .map(|s| DigimonSkill {
                skill: first_string(s, &["skill", "name"]),
                description: string_field(s, "description"),
            })
            .collect(),
        prior_evolutions: evolutions(raw, &["priorEvolutions", "prior_forms"]),
        next_evolutions: evolutions(raw, &["nextEvolutions", "next_forms"]),
    }
}

fn evolutions(raw: &Value, keys: &[&str]) -> Vec<EvolutionRef> {
    keys.iter()
        .map(|key| array_field(raw, key))
        .find(|entries| !entries.is_empty())
        .unwrap_or_default()
        .iter()
        .map(|e| EvolutionRef {
            name: first_string(e, &["digimon", "name"]),
            href: first_string(e, &["url", "href"]),
        })
        .collect()
}

fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn first_string(value: &Value, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

fn label_field(value: &Value, key: &str) -> String {
    match value.get(key).and_then(Value::as_str) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => UNKNOWN_LABEL.to_string(),
    }
}

fn u64_field(value: &Value, key: &str) -> u64 {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_u64().unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    }
}

fn usize_field(value: &Value, key: &str) -> usize {
    u64_field(value, key) as usize
}

fn link_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|link| !link.is_empty())
        .map(str::to_string)
}

/// List entry enriched with the first type, attribute and level
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedDigimon {
    pub id: u64,
    pub name: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_attribute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_level: Option<String>,
}

impl EnhancedDigimon {
    /// Enrich a stub with its detail record, if the detail request succeeded
    pub fn from_stub(stub: &DigimonStub, detail: Option<&Digimon>) -> Self {
        Self {
            id: stub.id,
            name: stub.name.clone(),
            image: stub.image.clone(),
            href: Some(stub.href.clone()),
            primary_type: detail.and_then(|d| d.primary_type()).map(str::to_string),
            primary_attribute: detail
                .and_then(|d| d.primary_attribute())
                .map(str::to_string),
            primary_level: detail.and_then(|d| d.primary_level()).map(str::to_string),
        }
    }

    /// Derive the enrichment fields from a record that is already complete
    pub fn from_full(digimon: &Digimon) -> Self {
        Self {
            id: digimon.id,
            name: digimon.name.clone(),
            image: digimon.image_url().unwrap_or_default().to_string(),
            href: None,
            primary_type: digimon.primary_type().map(str::to_string),
            primary_attribute: digimon.primary_attribute().map(str::to_string),
            primary_level: digimon.primary_level().map(str::to_string),
        }
    }
}

/// Enhanced list envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancedListResponse {
    pub content: Vec<EnhancedDigimon>,
    pub pageable: Pageable,
}

/// Case-insensitive substring filter over list entries
pub fn filter_by_name<'a>(entries: &'a [DigimonEntry], query: &str) -> Vec<&'a DigimonEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name().to_lowercase().contains(&needle))
        .collect()
}

pub fn list_endpoint(page: usize, page_size: usize) -> String {
    format!("/digimon?page={page}&pageSize={page_size}")
}

pub fn detail_endpoint(id_or_name: &str) -> String {
    format!("/digimon/{}", urlencoding::encode(id_or_name))
}

pub fn name_search_endpoint(name: &str) -> String {
    format!("/digimon?name={}", urlencoding::encode(name))
}
