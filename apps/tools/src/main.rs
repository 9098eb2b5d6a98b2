use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use directory_core::{networks, relation_groups, search_people, ContactStore};
use shared::domain::PersonId;

/// Seed-dataset inspector. Runs the same store and derivers as the GUI,
/// which makes it the quickest way to sanity-check an edited seed file.
#[derive(Parser, Debug)]
struct Cli {
    /// JSON seed file to load instead of the embedded dataset.
    #[arg(long)]
    seed: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every person in seed order.
    People,
    /// Derive and list networks with their members.
    Networks,
    /// Run the people filter against a query.
    Search { query: String },
    /// Dump one person as JSON, reminders included.
    Show { person_id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = match &cli.seed {
        Some(path) => ContactStore::from_seed_file(path)?,
        None => ContactStore::from_embedded_seed()?,
    };

    match cli.command {
        Command::People => {
            for person in store.people() {
                println!(
                    "{}  {}  [{}]",
                    person.id,
                    person.name,
                    person.orgs.join(", ")
                );
            }
        }
        Command::Networks => {
            for network in networks(store.people()) {
                println!("{} ({})", network.name, network.id);
                for member_id in &network.members {
                    if let Some(member) = store.person(member_id) {
                        println!("  {}  {}", member.id, member.name);
                    }
                }
            }
        }
        Command::Search { query } => {
            let results = search_people(store.people(), &query);
            if results.is_empty() {
                println!("no people match '{query}'");
            }
            for person in results {
                println!("{}  {}  {}", person.id, person.name, person.primary_role);
            }
        }
        Command::Show { person_id } => {
            let id = PersonId::new(person_id);
            match store.person(&id) {
                Some(person) => {
                    println!("{}", serde_json::to_string_pretty(person)?);
                    let groups = relation_groups(person);
                    if !groups.is_empty() {
                        println!("relation groups:");
                        for group in groups {
                            let labels: Vec<&str> = group
                                .relations
                                .iter()
                                .map(|relation| relation.label.as_str())
                                .collect();
                            println!("  {}: {}", group.kind, labels.join(", "));
                        }
                    }
                }
                None => println!("no person with id '{id}'"),
            }
        }
    }

    Ok(())
}
