//! # projdesk-core
//!
//! Shared foundation for the projdesk crates: the domain records mirrored
//! from the backend schema, the supported document formats, the error enum
//! and the startup configuration.
//!
//! The crates split the way the application does:
//!
//! - [`projdesk-extract`](https://docs.rs/projdesk-extract) turns uploaded
//!   PDF/Word/Excel files into plain text,
//! - [`projdesk-client`](https://docs.rs/projdesk-client) persists and
//!   deletes rows through the hosted backend service,
//! - `projdesk-cli` wires both into the `projdesk` binary.
//!
//! Everything here is passive: records carry no behavior and no invariant
//! enforcement beyond their type shape, because validation and authorization
//! live entirely in the hosted backend.

pub mod config;
pub mod error;
pub mod format;
pub mod models;

pub use config::{Config, ENV_ANON_KEY, ENV_API_URL};
pub use error::{DeskError, Result};
pub use format::DocumentKind;
pub use models::{
    Artifact, Item, ItemArtifactLink, ItemStatus, ItemType, Project, Suggestion,
};
