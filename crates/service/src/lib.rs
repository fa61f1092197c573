//! Service layer owning the person collection.
//! - `PersonStore` is the seam the HTTP layer depends on.
//! - `InMemoryPersonStore` is the only implementation; nothing is persisted.

pub mod errors;
pub mod persons;
