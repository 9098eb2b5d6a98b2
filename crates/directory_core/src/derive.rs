use shared::domain::{Network, NetworkId, Person, Relation};

/// URL-safe slug of an organization name: lowercase, with every run of
/// characters outside `[a-z0-9]` collapsed to a single hyphen. Leading and
/// trailing runs also become hyphens; two organizations may slug to the same
/// id and nothing here disambiguates them.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug
}

/// Groups people into one network per distinct organization name. Networks
/// appear in first-encounter order of their organization; members keep the
/// order in which they were encountered in `people`. A person with no
/// organizations contributes to no network, so no network is ever empty.
pub fn networks(people: &[Person]) -> Vec<Network> {
    let mut ordered: Vec<Network> = Vec::new();
    for person in people {
        for org in &person.orgs {
            match ordered.iter().position(|network| network.name == *org) {
                Some(index) => ordered[index].members.push(person.id.clone()),
                None => ordered.push(Network {
                    id: NetworkId::new(slugify(org)),
                    name: org.clone(),
                    members: vec![person.id.clone()],
                }),
            }
        }
    }
    ordered
}

/// One section of the knowledge tree: all of a person's relations sharing a
/// `kind`, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationGroup {
    pub kind: String,
    pub relations: Vec<Relation>,
}

/// Groups a person's relations by kind, preserving first-encounter order of
/// kinds and insertion order within each kind. Target ids are not resolved
/// here; the consuming view decides what a dangling target means.
pub fn relation_groups(person: &Person) -> Vec<RelationGroup> {
    let mut groups: Vec<RelationGroup> = Vec::new();
    for relation in &person.relations {
        match groups.iter().position(|group| group.kind == relation.kind) {
            Some(index) => groups[index].relations.push(relation.clone()),
            None => groups.push(RelationGroup {
                kind: relation.kind.clone(),
                relations: vec![relation.clone()],
            }),
        }
    }
    groups
}
