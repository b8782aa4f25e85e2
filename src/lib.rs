//! awards: award search service.
//!
//! The engine lives in [`awards_core`] and the HTTP adapter in
//! [`awards_web`]; this crate adds the pieces only the binary needs, exposed
//! as modules so integration tests can import them directly.
//!
//! # Architecture
//!
//! ```text
//! data.json ──► RecordSet ──► Store ──► awards-web (HTTP)
//!     ▲                         │
//!     └── reload (notify) ──────┘   headless (CLI output)
//! ```

pub mod headless;
pub mod reload;

pub use awards_core::{Filter, Query, Record, RecordSet, Store};
