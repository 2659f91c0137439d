#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Bundled icon identifiers.
///
/// Content refers to icons by their kebab-case name, e.g. `"book-open"`.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[func(pub fn path(&self) -> SharedString)]
pub enum IconKind {
    #[assoc(path = "icons/award.svg".into())]
    Award,
    #[assoc(path = "icons/book_open.svg".into())]
    BookOpen,
    #[assoc(path = "icons/briefcase.svg".into())]
    Briefcase,
    /// Leading glyph for experience bullet points.
    #[assoc(path = "icons/chevron_right.svg".into())]
    ChevronRight,
    #[assoc(path = "icons/code.svg".into())]
    Code,
    #[assoc(path = "icons/cpu.svg".into())]
    Cpu,
    #[assoc(path = "icons/github.svg".into())]
    Github,
    #[assoc(path = "icons/linkedin.svg".into())]
    Linkedin,
    #[assoc(path = "icons/mail.svg".into())]
    Mail,
    #[assoc(path = "icons/map_pin.svg".into())]
    MapPin,
    #[assoc(path = "icons/rocket.svg".into())]
    Rocket,
    #[assoc(path = "icons/terminal.svg".into())]
    Terminal,
    /// Placeholder for a missing profile photo.
    #[assoc(path = "icons/user.svg".into())]
    User,
}

impl IconKind {
    pub const ALL: [IconKind; 13] = [
        IconKind::Award,
        IconKind::BookOpen,
        IconKind::Briefcase,
        IconKind::ChevronRight,
        IconKind::Code,
        IconKind::Cpu,
        IconKind::Github,
        IconKind::Linkedin,
        IconKind::Mail,
        IconKind::MapPin,
        IconKind::Rocket,
        IconKind::Terminal,
        IconKind::User,
    ];
}

impl From<IconKind> for SharedString {
    fn from(icon: IconKind) -> Self {
        icon.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_names() {
        let icon: IconKind = serde_json::from_str("\"book-open\"").unwrap();
        assert_eq!(icon, IconKind::BookOpen);

        let icon: IconKind = serde_json::from_str("\"chevron-right\"").unwrap();
        assert_eq!(icon, IconKind::ChevronRight);

        assert!(serde_json::from_str::<IconKind>("\"sparkles\"").is_err());
    }

    #[test]
    fn test_icon_paths_are_unique() {
        let mut paths: Vec<SharedString> = IconKind::ALL.iter().map(|icon| icon.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), IconKind::ALL.len());
    }
}
