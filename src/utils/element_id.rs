use gpui::{ElementId, SharedString};

pub trait ElementIdExt {
    /// Derives a child id, used to key per-element state under a component's id.
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId;
}

impl ElementIdExt for ElementId {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId {
        ElementId::NamedChild(Box::new(self.clone()), suffix.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes_are_distinct() {
        let id = ElementId::from("project:0");

        assert_ne!(id.with_suffix("state:hover"), id.with_suffix("state:revealed"));
        assert_eq!(id.with_suffix("state:hover"), id.with_suffix("state:hover"));
        assert_ne!(id.with_suffix("state:hover"), id);
    }
}
