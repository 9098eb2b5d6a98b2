//! Contact directory core: the in-memory store, the network/relationship
//! derivers, people filtering, and the view-router state machine. Everything
//! here is synchronous and UI-agnostic; the GUI and the CLI both sit on top
//! of this crate.

pub mod derive;
pub mod filter;
pub mod router;
pub mod store;

pub use derive::{networks, relation_groups, slugify, RelationGroup};
pub use filter::search_people;
pub use router::{NavEvent, ViewRouter, ViewState};
pub use store::ContactStore;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
