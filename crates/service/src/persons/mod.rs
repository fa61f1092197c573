pub mod memory;
pub mod store;

pub use memory::InMemoryPersonStore;
pub use store::PersonStore;
