/// Technologies shown on a collapsed experience card.
pub const TECH_PREVIEW_LIMIT: usize = 5;

/// Expand/collapse state of one experience card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandableCard {
    expanded: bool,
}

impl ExpandableCard {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.expanded {
            items
        } else {
            &items[..items.len().min(TECH_PREVIEW_LIMIT)]
        }
    }

    /// Count for the "+N more" badge; only while collapsed and only when positive.
    pub fn hidden_count<T>(&self, items: &[T]) -> Option<usize> {
        if self.expanded {
            return None;
        }
        match items.len().saturating_sub(TECH_PREVIEW_LIMIT) {
            0 => None,
            n => Some(n),
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "Show Less"
        } else {
            "Show Achievements"
        }
    }
}

/// Cards without achievements have nothing to expand.
pub fn has_toggle<T>(achievements: &[T]) -> bool {
    !achievements.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn techs(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("tech-{i}")).collect()
    }

    #[test]
    fn test_collapsed_caps_list() {
        let items = techs(6);
        let card = ExpandableCard::default();
        assert!(!card.is_expanded());
        assert_eq!(card.visible(&items).len(), 5);
        assert_eq!(card.visible(&items), &items[..5]);
        assert_eq!(card.hidden_count(&items), Some(1));
        assert_eq!(format!("+{} more", card.hidden_count(&items).unwrap()), "+1 more");
    }

    #[test]
    fn test_expanded_shows_all() {
        let items = techs(6);
        let mut card = ExpandableCard::default();
        card.toggle();
        assert!(card.is_expanded());
        assert_eq!(card.visible(&items).len(), 6);
        assert_eq!(card.hidden_count(&items), None);
        assert_eq!(card.toggle_label(), "Show Less");

        card.toggle();
        assert_eq!(card.toggle_label(), "Show Achievements");
        assert_eq!(card.hidden_count(&items), Some(1));
    }

    #[test]
    fn test_short_lists() {
        let card = ExpandableCard::default();
        for n in 0..=5 {
            let items = techs(n);
            assert_eq!(card.visible(&items).len(), n);
            assert_eq!(card.hidden_count(&items), None);
        }
    }

    #[test]
    fn test_toggle_presence() {
        let none: Vec<String> = vec![];
        assert!(!has_toggle(&none));
        assert!(has_toggle(&["Shipped it".to_string()]));
    }
}
