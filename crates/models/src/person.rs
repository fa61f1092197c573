use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const NAME_MANDATORY: &str = "name is mandatory";
pub const NEGATIVE_AGE: &str = "negative age is wrong";

/// Stored person record. Only the store assigns `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

impl Person {
    pub fn new(id: i64, name: impl Into<String>, age: i32) -> Self {
        Self { id, name: name.into(), age }
    }

    pub fn view(&self) -> PersonView {
        PersonView { name: self.name.clone(), age: self.age }
    }
}

/// Externally visible projection of a person, without its id.
/// Used as the create/replace payload and as the read response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonView {
    pub name: String,
    pub age: i32,
}

impl PersonView {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self { name: name.into(), age }
    }
}

/// Partial update payload: only the name changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameUpdate {
    pub name: String,
}

impl NameUpdate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Field-level checks run on inbound payloads before they reach the store.
pub trait Validate {
    fn validate(&self) -> Result<(), ModelError>;
}

fn check_name(name: &str, errors: &mut Vec<String>) {
    if name.trim().is_empty() {
        errors.push(NAME_MANDATORY.to_string());
    }
}

fn check_age(age: i32, errors: &mut Vec<String>) {
    if age < 0 {
        errors.push(NEGATIVE_AGE.to_string());
    }
}

fn finish(errors: Vec<String>) -> Result<(), ModelError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ModelError::Validation(errors))
    }
}

impl Validate for PersonView {
    fn validate(&self) -> Result<(), ModelError> {
        let mut errors = Vec::new();
        check_name(&self.name, &mut errors);
        check_age(self.age, &mut errors);
        finish(errors)
    }
}

impl Validate for NameUpdate {
    fn validate(&self) -> Result<(), ModelError> {
        let mut errors = Vec::new();
        check_name(&self.name, &mut errors);
        finish(errors)
    }
}
