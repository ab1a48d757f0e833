//! Client-side caches of the backend collections.
//!
//! One store per resource, provided through context so views read signals
//! and dispatch actions without owning any fetch logic. Stores never retry;
//! views re-invoke `fetch` on filter changes or explicit refresh.

pub mod analytics;
pub mod companies;
pub mod payments;
mod sequence;
pub mod subscriptions;

pub use sequence::Sequence;
