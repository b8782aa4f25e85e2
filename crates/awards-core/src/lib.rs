//! awards-core: record model and search engine for the award catalogue.
//!
//! # Architecture
//!
//! ```text
//! RecordSet ──► search (filters + term) ──► paginate ──► page + Pagination
//!     │
//!     └──────► catalog (distinct faculties, for filter choices)
//! ```
//!
//! Every engine operation is a pure function over an immutable snapshot, so
//! concurrent requests need no coordination. [`store::Store`] publishes a new
//! snapshot wholesale when the data is reloaded.

pub mod catalog;
pub mod codes;
pub mod config;
pub mod error;
pub mod faculty;
pub mod filters;
pub mod paginate;
pub mod search;
pub mod store;
pub mod types;

pub use catalog::list_faculties;
pub use codes::{AwardType, Campus, LearnerLevel};
pub use error::LoadError;
pub use faculty::extract_faculty;
pub use filters::Filter;
pub use paginate::{paginate, PageWindow, Pagination};
pub use search::{search, Query};
pub use store::{RecordSet, Store};
pub use types::{FieldValue, Record};
