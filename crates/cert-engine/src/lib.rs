//! In-memory query engine for the certificate registry.
//!
//! Given a fixed collection of [`cert_model::Certificate`] records and a
//! mutable query state, the engine deterministically derives the filtered,
//! sorted result set and one fixed-size page of it. There is no persistence
//! and no caching; every read recomputes the view from the collection and the
//! current state.

pub mod filter;
pub mod page;
pub mod search;
pub mod sort;

pub use filter::{FilterUpdate, SearchFilters, Selection};
pub use page::PAGE_SIZE;
pub use search::{CertificateSearch, SearchResults};
pub use sort::{SortDirection, SortField};
