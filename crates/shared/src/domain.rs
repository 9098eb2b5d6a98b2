use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_newtype!(PersonId);
id_newtype!(NoteId);
id_newtype!(ReminderId);
id_newtype!(NetworkId);

/// Free-text home/work locations. Both fields carry whatever the seed says,
/// including the "—" placeholder the dataset uses for unknown locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub home: String,
    pub work: String,
}

/// A directed link to another person. `person_id` is a weak lookup key into
/// the contact store and is allowed to dangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    #[serde(rename = "type")]
    pub kind: String,
    pub person_id: PersonId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub date: NaiveDate,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub label: String,
    pub due: NaiveDate,
}

/// One contact record. List fields default to empty so sparse seed files
/// stay loadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Opaque identicon URL; rendered locally as an initials disc.
    pub avatar: String,
    pub primary_role: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub orgs: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub relations: Vec<Relation>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

/// Derived grouping of people who share an organization. Never stored;
/// recomputed from the contact list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub id: NetworkId,
    pub name: String,
    pub members: Vec<PersonId>,
}

impl Network {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}
