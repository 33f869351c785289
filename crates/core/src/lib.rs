//! Core library for creaturedex
//!
//! This crate implements the **Functional Core** of the creaturedex application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The creaturedex project uses a two-crate architecture:
//!
//! - **`creaturedex_core`** (this crate): Pure types and transformations with zero I/O
//! - **`creaturedex`**: HTTP transport, source adapters, CLI and page-data server
//!
//! Two upstream APIs with very different payload conventions are reconciled here:
//! the Pokémon API is a conventional offset/limit REST API, while the Digimon API
//! answers either with a bare array (legacy) or with a `{content, pageable}`
//! envelope whose entries may be stubs or full records. Everything that decides
//! *what the data means* lives in this crate; the shell only moves bytes.
//!
//! # Module Organization
//!
//! - [`http`]: Tri-state API response envelope and the status message table
//! - [`pokemon`]: Pokémon models, URL id extraction and name filtering
//! - [`digimon`]: Payload classification, normalization and list enrichment
//! - [`encyclopedia`]: Source discriminant, shared envelope and page-data responses
//! - [`pagination`]: Page-number window for pagination controls
//! - [`search`]: Ordered fallback combinator used by both adapters' search
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use creaturedex_core::digimon::{build_list_response, classify_list_payload};
//!
//! // A legacy payload (bare array) from the Digimon API
//! let raw = serde_json::json!([{ "id": 1, "name": "Agumon" }]);
//!
//! let list = build_list_response(classify_list_payload(raw), 0, 20);
//!
//! assert_eq!(list.content.len(), 1);
//! assert_eq!(list.pageable.total_pages, 1);
//! ```

pub mod digimon;
pub mod encyclopedia;
pub mod http;
pub mod pagination;
pub mod pokemon;
pub mod search;
