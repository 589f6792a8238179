//! Client for the hosted backend service of projdesk
//!
//! The application keeps no database of its own: projects, items and
//! artifacts live in a hosted RLS-backed Postgres service reached over
//! per-table REST endpoints. This crate is the thin client for that
//! service, plus the one batch operation built on top of it.
//!
//! - [`RestClient`] — filtered select / insert / delete against the table
//!   endpoints, authenticated with the anonymous key.
//! - [`Filter`] — the two query operators the application uses (`eq`,
//!   `ilike` substring match).
//! - [`ItemStore`] — trait seam over the item operations, so batch logic
//!   stays independent of HTTP.
//! - [`purge_titles`] — the maintenance run deleting items whose titles
//!   match known junk patterns, together with their artifact links.
//!
//! All enforcement (authorization, uniqueness, referential integrity) is
//! the service's job; nothing here validates beyond type shape, and no
//! request is ever retried.

pub mod filter;
pub mod purge;
pub mod rest;
pub mod store;

pub use filter::Filter;
pub use purge::{purge_titles, PurgeReport, DEFAULT_PURGE_PATTERNS};
pub use rest::{RestClient, ARTIFACTS_TABLE, ITEMS_TABLE, ITEM_ARTIFACTS_TABLE};
pub use store::ItemStore;

pub use projdesk_core::{Config, DeskError, Result};
