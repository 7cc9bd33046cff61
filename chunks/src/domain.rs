use serde::{Deserialize, Serialize};

/// A chunk is a block of content addressed by a stable, globally
/// unique key. The lookup path never mutates a chunk; authoring and
/// deletion happen through the repository's mutation surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Canonical, locale-independent identifier.
    pub key: String,
    /// Arbitrary text, may be empty.
    pub content: String,
    /// Short description for authoring UIs.
    pub description: String,
}

impl Chunk {
    pub fn new(
        key: impl Into<String>,
        content: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            content: content.into(),
            description: description.into(),
        }
    }
}
