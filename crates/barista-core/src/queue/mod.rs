//! Queue module: fixed-capacity circular storage.

mod bounded;

pub use bounded::{BoundedQueue, Iter, MAX_CAPACITY};
