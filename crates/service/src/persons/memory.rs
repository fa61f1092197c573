use std::sync::Arc;

use async_trait::async_trait;
use models::{NameUpdate, Person, PersonView};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::persons::store::PersonStore;

/// In-memory person collection guarded by a single lock.
///
/// Every compound operation (scan for the max id then append, find then
/// mutate, find then remove) runs under one write guard, so concurrent
/// requests never interleave inside an operation.
#[derive(Clone, Default)]
pub struct InMemoryPersonStore {
    inner: Arc<RwLock<Vec<Person>>>,
}

impl InMemoryPersonStore {
    /// Empty store; the first insert gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the four fixture records, ids 1 to 4.
    pub fn seeded() -> Self {
        let records = vec![
            Person::new(1, "Laura", 30),
            Person::new(2, "Mariano", 21),
            Person::new(3, "Paopalo", 19),
            Person::new(4, "Yamoto", 60),
        ];
        info!(persons = ?records, "person list has been created");
        Self::from_records(records)
    }

    pub fn from_records(records: Vec<Person>) -> Self {
        Self { inner: Arc::new(RwLock::new(records)) }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Apply a mutation to the record with `id` under the write lock.
    async fn update_person<F, T>(&self, id: i64, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut Person) -> T,
    {
        let mut list = self.inner.write().await;
        let person = list
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ServiceError::not_found(id))?;
        Ok(f(person))
    }
}

/// Max id currently stored plus one; 1 for an empty list.
fn next_id(list: &[Person]) -> i64 {
    list.iter().map(|p| p.id).max().unwrap_or(0) + 1
}

#[async_trait]
impl PersonStore for InMemoryPersonStore {
    async fn create(&self, view: PersonView) -> Person {
        let mut list = self.inner.write().await;
        let person = Person { id: next_id(&list), name: view.name, age: view.age };
        list.push(person.clone());
        info!(id = person.id, name = %person.name, "person created");
        person
    }

    async fn get_all(&self) -> Vec<Person> {
        self.inner.read().await.clone()
    }

    async fn find_by_id(&self, id: i64) -> Result<PersonView, ServiceError> {
        let list = self.inner.read().await;
        match list.iter().find(|p| p.id == id) {
            Some(p) => Ok(p.view()),
            None => {
                debug!(id, "person lookup missed");
                Err(ServiceError::not_found(id))
            }
        }
    }

    async fn find_by_name(&self, name: &str) -> Vec<PersonView> {
        let wanted = name.to_lowercase();
        let list = self.inner.read().await;
        list.iter()
            .filter(|p| p.name.to_lowercase() == wanted)
            .map(Person::view)
            .collect()
    }

    async fn replace(&self, id: i64, view: PersonView) -> Result<PersonView, ServiceError> {
        let updated = self
            .update_person(id, |p| {
                p.name = view.name;
                p.age = view.age;
                p.view()
            })
            .await?;
        info!(id, name = %updated.name, age = updated.age, "person replaced");
        Ok(updated)
    }

    async fn patch_name(&self, id: i64, update: NameUpdate) -> Result<NameUpdate, ServiceError> {
        let patched = self
            .update_person(id, |p| {
                p.name = update.name;
                NameUpdate { name: p.name.clone() }
            })
            .await?;
        info!(id, name = %patched.name, "person name patched");
        Ok(patched)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        let mut list = self.inner.write().await;
        let pos = list
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ServiceError::not_found(id))?;
        list.remove(pos);
        info!(id, "person deleted");
        Ok(())
    }
}
