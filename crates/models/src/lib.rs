pub mod errors;
pub mod person;

pub use errors::ModelError;
pub use person::{NameUpdate, Person, PersonView, Validate};
