use async_trait::async_trait;
use models::{NameUpdate, Person, PersonView};

use crate::errors::ServiceError;

/// Trait abstraction for the person collection.
/// Payloads are expected to be validated by the caller.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Append a record under the next id and return it.
    async fn create(&self, view: PersonView) -> Person;
    /// All records in insertion order.
    async fn get_all(&self) -> Vec<Person>;
    async fn find_by_id(&self, id: i64) -> Result<PersonView, ServiceError>;
    /// Case-insensitive exact match on name.
    async fn find_by_name(&self, name: &str) -> Vec<PersonView>;
    /// Overwrite name and age in place; id and position are kept.
    async fn replace(&self, id: i64, view: PersonView) -> Result<PersonView, ServiceError>;
    /// Overwrite only the name.
    async fn patch_name(&self, id: i64, update: NameUpdate) -> Result<NameUpdate, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}
