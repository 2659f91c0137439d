use thiserror::Error;

/// Problems found while loading portfolio content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse portfolio content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("project \"{project}\" lists the tech tag \"{tag}\" more than once")]
    DuplicateTechTag { project: String, tag: String },

    #[error("skill group \"{group}\" lists \"{skill}\" more than once")]
    DuplicateSkill { group: String, skill: String },

    #[error("portfolio needs at least one contact link")]
    NoContactLinks,
}
