//! Item payloads.
//!
//! Items are opaque to this crate: field values go out and come back as JSON
//! without validation. The operations themselves are methods on
//! [`PodioClient`](crate::PodioClient).

mod types;

pub use types::{FilterOptions, Item, ItemList};
