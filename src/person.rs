use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// One record of the searchable collection. Never mutated after load;
/// `slug` is the identity key.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub slug: String,
    pub name: String,
    pub born: i32,
    pub died: i32,
}

const BUILTIN_DATASET: &str = include_str!("../data/people.json");

/// Read-only, ordered collection of people. Loaded once before the event
/// loop starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    people: Vec<Person>,
}

impl Directory {
    pub fn builtin() -> AppResult<Self> {
        let people = serde_json::from_str::<Vec<Person>>(BUILTIN_DATASET)
            .map_err(|source| AppError::dataset("<builtin>", source))?;
        Self::from_people(people)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(
                source,
                format!("failed to read people dataset: {}", path.display()),
            )
        })?;
        let people = serde_json::from_str::<Vec<Person>>(&raw)
            .map_err(|source| AppError::dataset(path.display().to_string(), source))?;
        Self::from_people(people)
    }

    pub fn from_people(people: Vec<Person>) -> AppResult<Self> {
        if people.is_empty() {
            return Err(AppError::invalid_argument("people dataset is empty"));
        }

        let mut seen = HashSet::new();
        for person in &people {
            if person.name.is_empty() {
                return Err(AppError::invalid_argument(format!(
                    "person {} has an empty name",
                    person.slug
                )));
            }
            if !seen.insert(person.slug.as_str()) {
                return Err(AppError::invalid_argument(format!(
                    "duplicate person slug: {}",
                    person.slug
                )));
            }
        }

        Ok(Self { people })
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn get(&self, index: usize) -> Option<&Person> {
        self.people.get(index)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
