use super::*;
use shared::domain::{Coordinates, NetworkId, Person, PersonId, Relation};
use shared::error::DirectoryError;

fn person(id: &str, name: &str, orgs: &[&str]) -> Person {
    Person {
        id: PersonId::new(id),
        name: name.to_string(),
        avatar: format!("https://api.dicebear.com/8.x/initials/svg?seed={name}"),
        primary_role: String::new(),
        coordinates: Coordinates {
            home: String::new(),
            work: String::new(),
        },
        orgs: orgs.iter().map(|org| org.to_string()).collect(),
        tags: Vec::new(),
        relations: Vec::new(),
        notes: Vec::new(),
        reminders: Vec::new(),
    }
}

fn relation(kind: &str, target: &str, label: &str) -> Relation {
    Relation {
        kind: kind.to_string(),
        person_id: PersonId::new(target),
        label: label.to_string(),
    }
}

#[test]
fn slugifies_organization_names_deterministically() {
    assert_eq!(slugify("Dana-Farber"), "dana-farber");
    assert_eq!(slugify("Dana-Farber Cancer Institute"), "dana-farber-cancer-institute");
    assert_eq!(slugify("Harvard Medical School"), "harvard-medical-school");
    // Runs of non-alphanumerics collapse to one hyphen, including at the ends.
    assert_eq!(slugify("A &  B!!"), "a-b-");
    assert_eq!(slugify("  Acme"), "-acme");
    assert_eq!(slugify("Org 2.0"), "org-2-0");
}

#[test]
fn slugify_is_idempotent() {
    for name in ["Dana-Farber Cancer Institute", "A &  B!!", "  Acme", "Org 2.0"] {
        let once = slugify(name);
        assert_eq!(slugify(&once), once);
    }
}

#[test]
fn derives_one_network_per_distinct_organization() {
    let people = vec![
        person("c1", "Craig", &["Dana-Farber"]),
        person("c2", "Katherine", &["Dana-Farber"]),
        person("c3", "Spouse", &[]),
    ];

    let derived = networks(&people);
    assert_eq!(derived.len(), 1);
    assert_eq!(derived[0].id, NetworkId::new("dana-farber"));
    assert_eq!(derived[0].name, "Dana-Farber");
    assert_eq!(
        derived[0].members,
        vec![PersonId::new("c1"), PersonId::new("c2")]
    );
}

#[test]
fn orders_networks_and_members_by_first_encounter() {
    let people = vec![
        person("c1", "Ada", &["Beta Corp", "Alpha Org"]),
        person("c2", "Ben", &["Alpha Org"]),
        person("c3", "Cam", &["Beta Corp"]),
    ];

    let derived = networks(&people);
    let names: Vec<&str> = derived.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["Beta Corp", "Alpha Org"]);
    assert_eq!(
        derived[0].members,
        vec![PersonId::new("c1"), PersonId::new("c3")]
    );
    assert_eq!(
        derived[1].members,
        vec![PersonId::new("c1"), PersonId::new("c2")]
    );
}

#[test]
fn empty_input_yields_no_networks() {
    assert!(networks(&[]).is_empty());
}

#[test]
fn groups_relations_by_kind_preserving_insertion_order() {
    let mut p = person("c1", "Craig", &[]);
    p.relations = vec![
        relation("coworker", "c2", "First coworker"),
        relation("spouse", "c3", "Spouse"),
        relation("coworker", "c4", "Second coworker"),
    ];

    let groups = relation_groups(&p);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].kind, "coworker");
    assert_eq!(groups[0].relations[0].label, "First coworker");
    assert_eq!(groups[0].relations[1].label, "Second coworker");
    assert_eq!(groups[1].kind, "spouse");
    assert_eq!(groups[1].relations.len(), 1);
}

#[test]
fn empty_relation_list_yields_empty_grouping() {
    let p = person("c1", "Craig", &[]);
    assert!(relation_groups(&p).is_empty());
}

#[test]
fn empty_query_returns_full_list_in_order() {
    let store = ContactStore::from_embedded_seed().expect("seed");
    let results = search_people(store.people(), "");
    assert_eq!(results.len(), store.len());
    let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["c1", "c2", "c3"]);
}

#[test]
fn filters_case_insensitively_on_name_role_and_orgs() {
    let store = ContactStore::from_embedded_seed().expect("seed");

    let by_name = search_people(store.people(), "KATHERINE");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id.as_str(), "c2");

    let by_role = search_people(store.people(), "nurse manager");
    assert_eq!(by_role.len(), 1);
    assert_eq!(by_role[0].id.as_str(), "c2");

    let by_org = search_people(store.people(), "harvard");
    assert_eq!(by_org.len(), 1);
    assert_eq!(by_org[0].id.as_str(), "c1");
}

#[test]
fn does_not_search_tags_or_note_bodies() {
    let store = ContactStore::from_embedded_seed().expect("seed");
    // "board-level" appears only in c1's tags; "esplanade" only in a note body.
    assert!(search_people(store.people(), "board-level").is_empty());
    assert!(search_people(store.people(), "esplanade").is_empty());
}

#[test]
fn filtering_does_not_mutate_the_source_list() {
    let store = ContactStore::from_embedded_seed().expect("seed");
    let before: Vec<String> = store.people().iter().map(|p| p.name.clone()).collect();
    let _ = search_people(store.people(), "dana");
    let after: Vec<String> = store.people().iter().map(|p| p.name.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn embedded_seed_loads_with_expected_records() {
    let store = ContactStore::from_embedded_seed().expect("seed");
    assert_eq!(store.len(), 3);

    let craig = store.person(&PersonId::new("c1")).expect("c1");
    assert_eq!(craig.orgs.len(), 2);
    assert_eq!(craig.notes.len(), 2);
    assert_eq!(craig.reminders.len(), 1);

    let spouse = store.person(&PersonId::new("c3")).expect("c3");
    assert!(spouse.orgs.is_empty());
    // The placeholder exists purely to satisfy c1's spouse relation.
    assert_eq!(spouse.relations[0].person_id, PersonId::new("c1"));
}

#[test]
fn seed_networks_follow_first_encounter_order() {
    let store = ContactStore::from_embedded_seed().expect("seed");
    let derived = networks(store.people());
    assert_eq!(derived.len(), 2);
    assert_eq!(derived[0].id, NetworkId::new("dana-farber-cancer-institute"));
    assert_eq!(
        derived[0].members,
        vec![PersonId::new("c1"), PersonId::new("c2")]
    );
    assert_eq!(derived[1].id, NetworkId::new("harvard-medical-school"));
    assert_eq!(derived[1].members, vec![PersonId::new("c1")]);
}

#[test]
fn rejects_duplicate_person_ids_at_load() {
    let people = vec![person("c1", "Craig", &[]), person("c1", "Copy", &[])];
    match ContactStore::from_people(people) {
        Err(DirectoryError::DuplicatePersonId(id)) => assert_eq!(id, "c1"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected duplicate-id rejection"),
    }
}

#[test]
fn tolerates_dangling_relation_targets_until_lookup() {
    let mut p = person("c1", "Craig", &[]);
    p.relations = vec![relation("mentor", "c99", "Mentor")];
    let store = ContactStore::from_people(vec![p]).expect("store");

    // The relation loads fine; only resolution comes back empty.
    let craig = store.person(&PersonId::new("c1")).expect("c1");
    let target = craig.relations[0].person_id.clone();
    assert!(store.person(&target).is_none());
}

#[test]
fn reports_unreadable_seed_files() {
    let missing = std::path::Path::new("/nonexistent/momfog-seed.json");
    match ContactStore::from_seed_file(missing) {
        Err(DirectoryError::SeedRead { path, .. }) => {
            assert!(path.contains("momfog-seed.json"));
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected seed read error"),
    }
}

#[test]
fn router_starts_on_home() {
    let router = ViewRouter::new();
    assert_eq!(*router.view(), ViewState::Home);
    assert_eq!(router.prompt(), "");
}

#[test]
fn back_from_person_and_network_returns_to_people() {
    let mut router = ViewRouter::new();
    router.apply(NavEvent::OpenPerson(PersonId::new("c1")));
    assert_eq!(*router.view(), ViewState::Person(PersonId::new("c1")));
    router.apply(NavEvent::Back);
    assert_eq!(*router.view(), ViewState::People);

    router.apply(NavEvent::OpenNetwork(NetworkId::new("dana-farber")));
    router.apply(NavEvent::Back);
    assert_eq!(*router.view(), ViewState::People);
}

#[test]
fn back_is_a_noop_elsewhere() {
    let mut router = ViewRouter::new();
    router.apply(NavEvent::Back);
    assert_eq!(*router.view(), ViewState::Home);

    router.apply(NavEvent::GoCalendar);
    router.apply(NavEvent::Back);
    assert_eq!(*router.view(), ViewState::Calendar);
}

#[test]
fn submitting_nonempty_prompt_navigates_to_people_and_clears_it() {
    let mut router = ViewRouter::new();
    router.prompt_mut().push_str("find donors");
    router.apply(NavEvent::SubmitPrompt);
    assert_eq!(*router.view(), ViewState::People);
    assert_eq!(router.prompt(), "");
}

#[test]
fn submitting_blank_prompt_changes_nothing() {
    let mut router = ViewRouter::new();
    router.prompt_mut().push_str("   ");
    router.apply(NavEvent::SubmitPrompt);
    assert_eq!(*router.view(), ViewState::Home);
    assert_eq!(router.prompt(), "   ");
}

#[test]
fn navigation_to_a_dangling_id_still_switches_state() {
    // The router does not consult the store; the view layer decides that an
    // unknown id renders nothing.
    let mut router = ViewRouter::new();
    router.apply(NavEvent::OpenPerson(PersonId::new("no-such-person")));
    assert_eq!(
        *router.view(),
        ViewState::Person(PersonId::new("no-such-person"))
    );
}
