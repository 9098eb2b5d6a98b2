use std::collections::HashSet;
use std::path::Path;

use shared::{
    domain::{Person, PersonId},
    error::DirectoryError,
};

/// The demo dataset the prototype ships with. Loaded once at startup; there
/// is no write path anywhere in the system.
const EMBEDDED_SEED: &str = include_str!("seed.json");

/// Read-only contact store. Holds the people in seed order and resolves id
/// lookups; everything else (networks, relation groups, search results) is
/// derived on demand from this list.
pub struct ContactStore {
    people: Vec<Person>,
}

impl ContactStore {
    /// Builds the store from the dataset compiled into the binary.
    pub fn from_embedded_seed() -> Result<Self, DirectoryError> {
        Self::from_json(EMBEDDED_SEED)
    }

    /// Builds the store from a caller-supplied seed file. The dataset is
    /// still fixed for the lifetime of the process; this only changes where
    /// it comes from.
    pub fn from_seed_file(path: &Path) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DirectoryError::SeedRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, DirectoryError> {
        let people: Vec<Person> = serde_json::from_str(raw)?;
        Self::from_people(people)
    }

    /// Validates that person ids are unique. Relation targets are NOT
    /// validated here; dangling targets are tolerated until a view tries to
    /// navigate to one.
    pub fn from_people(people: Vec<Person>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        for person in &people {
            if !seen.insert(person.id.as_str()) {
                return Err(DirectoryError::DuplicatePersonId(person.id.0.clone()));
            }
        }
        tracing::info!(people = people.len(), "contact store loaded");
        Ok(Self { people })
    }

    /// People in seed order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|person| &person.id == id)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
