use enum_assoc::Assoc;
use folio_palette::ColorToken;
use gpui::SharedString;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::assets::IconKind;

/// Everything the page shows, authored ahead of time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub links: Vec<ContactLink>,
    #[serde(default)]
    pub stats: Vec<StatBadgeEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    /// Columns of skill groups, keyed by group title in display order.
    #[serde(default)]
    pub skills: Vec<IndexMap<SharedString, SkillGroup>>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    pub headings: SectionHeadings,
}

/// Headings of the titled page sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionHeadings {
    pub experience: SectionHeadingEntry,
    pub projects: SectionHeadingEntry,
    pub skills: SectionHeadingEntry,
    pub education: SectionHeadingEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionHeadingEntry {
    pub title: SharedString,
    pub icon: IconKind,
    #[serde(default)]
    pub color: ColorToken,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: SharedString,
    /// Shown in place of the logo or photo when those assets are missing.
    pub initials: SharedString,
    pub availability: SharedString,
    pub status: SharedString,
    pub headline: Headline,
    pub bio: Vec<BioSpan>,
    pub logo: SharedString,
    pub photo: SharedString,
    pub credit: SharedString,
}

/// Three-part hero headline; the middle part is drawn in the accent gradient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Headline {
    pub lead: SharedString,
    pub highlight: SharedString,
    pub trail: SharedString,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BioSpan {
    pub text: SharedString,
    #[serde(default)]
    pub emphasis: bool,
}

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[func(pub fn icon(&self) -> IconKind)]
pub enum LinkKind {
    #[assoc(icon = IconKind::Mail)]
    Email,
    #[assoc(icon = IconKind::Github)]
    Github,
    #[assoc(icon = IconKind::Linkedin)]
    Linkedin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub label: SharedString,
    /// Footer text, when it differs from the button label.
    #[serde(default)]
    pub footer_label: Option<SharedString>,
    pub url: SharedString,
}

impl ContactLink {
    pub fn footer_label(&self) -> SharedString {
        self.footer_label.clone().unwrap_or_else(|| self.label.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatBadgeEntry {
    pub icon: IconKind,
    pub value: SharedString,
    pub label: SharedString,
    #[serde(default)]
    pub color: ColorToken,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: SharedString,
    pub company: SharedString,
    pub period: SharedString,
    pub location: SharedString,
    /// Bullet points, in display order.
    pub points: Vec<SharedString>,
    #[serde(default)]
    pub color: ColorToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStat {
    pub label: SharedString,
    pub value: SharedString,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: SharedString,
    pub description: SharedString,
    /// Tech tags, in display order. Must be unique within a project.
    pub tech: Vec<SharedString>,
    #[serde(default)]
    pub stats: Vec<ProjectStat>,
    #[serde(default)]
    pub color: ColorToken,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub skills: Vec<SharedString>,
    /// Tints the whole group with an accent instead of neutral chips.
    #[serde(default)]
    pub accent: Option<ColorToken>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: SharedString,
    pub degree: SharedString,
    pub score: SharedString,
    pub year: SharedString,
    #[serde(default)]
    pub color: ColorToken,
}
