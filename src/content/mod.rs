//! Portfolio content: the literal records every section renders.
//!
//! Content ships inside the binary as JSON and is parsed and validated
//! once, before the window opens.

mod error;
pub use error::*;

mod schema;
pub use schema::*;

use std::collections::HashSet;

use gpui::SharedString;

const BUILTIN_CONTENT: &str = include_str!("../../content/portfolio.json");

impl Portfolio {
    /// Loads the content bundled with the binary.
    pub fn builtin() -> Result<Portfolio, ContentError> {
        Self::from_json(BUILTIN_CONTENT)
    }

    pub fn from_json(json: &str) -> Result<Portfolio, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        portfolio.validate()?;

        tracing::info!(
            experience = portfolio.experience.len(),
            projects = portfolio.projects.len(),
            stats = portfolio.stats.len(),
            education = portfolio.education.len(),
            skill_groups = portfolio.skill_groups().count(),
            "loaded portfolio content"
        );

        Ok(portfolio)
    }

    /// All skill groups, column by column.
    pub fn skill_groups(&self) -> impl Iterator<Item = (&SharedString, &SkillGroup)> {
        self.skills.iter().flat_map(|column| column.iter())
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.links.is_empty() {
            return Err(ContentError::NoContactLinks);
        }

        for project in &self.projects {
            if let Some(tag) = first_duplicate(&project.tech) {
                return Err(ContentError::DuplicateTechTag {
                    project: project.title.to_string(),
                    tag: tag.to_string(),
                });
            }
        }

        for (title, group) in self.skill_groups() {
            if let Some(skill) = first_duplicate(&group.skills) {
                return Err(ContentError::DuplicateSkill {
                    group: title.to_string(),
                    skill: skill.to_string(),
                });
            }
        }

        Ok(())
    }
}

fn first_duplicate(items: &[SharedString]) -> Option<&SharedString> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().find(|item| !seen.insert(item.as_ref()))
}
