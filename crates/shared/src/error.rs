use thiserror::Error;

/// Failures surfaced while building the contact store. Navigation to unknown
/// ids is not an error at this layer; views render nothing for those.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("seed data is not valid JSON: {0}")]
    SeedDecode(#[from] serde_json::Error),

    #[error("duplicate person id '{0}' in seed data")]
    DuplicatePersonId(String),

    #[error("failed to read seed file '{path}'")]
    SeedRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
