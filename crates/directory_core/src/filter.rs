use shared::domain::Person;

/// Case-insensitive substring filter over name, primary role, and
/// organization names. Tags and note bodies are deliberately not searched.
/// An empty query returns the full list in original order.
pub fn search_people<'a>(people: &'a [Person], query: &str) -> Vec<&'a Person> {
    if query.is_empty() {
        return people.iter().collect();
    }
    let needle = query.to_lowercase();
    people
        .iter()
        .filter(|person| matches_query(person, &needle))
        .collect()
}

fn matches_query(person: &Person, needle: &str) -> bool {
    person.name.to_lowercase().contains(needle)
        || person.primary_role.to_lowercase().contains(needle)
        || person
            .orgs
            .iter()
            .any(|org| org.to_lowercase().contains(needle))
}
