use crate::constants::COPY_SEPARATOR;

/// Paragraphs the visitor has collected during this session.
/// Insertion-ordered, unique by string equality.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collection {
    items: Vec<String>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `text` if absent, remove it if present.
    /// Returns whether the text is collected afterwards.
    pub fn toggle(&mut self, text: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|t| t == text) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(text.to_string());
            true
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        self.items.iter().any(|t| t == text)
    }

    /// Remove by position in the list. Out-of-range is a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Copy-all payload: every paragraph, separated by a rule.
    pub fn export_text(&self) -> String {
        self.items.join(COPY_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut c = Collection::new();
        assert!(c.toggle("海浪的聲音"));
        assert!(c.contains("海浪的聲音"));
        assert!(!c.toggle("海浪的聲音"));
        assert!(c.is_empty());
    }

    #[test]
    fn test_order_kept_on_middle_removal() {
        let mut c = Collection::new();
        c.toggle("a");
        c.toggle("b");
        c.toggle("c");
        c.toggle("b");
        assert_eq!(c.iter().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_at() {
        let mut c = Collection::new();
        c.toggle("a");
        c.toggle("b");
        assert_eq!(c.remove_at(0).as_deref(), Some("a"));
        assert_eq!(c.remove_at(5), None);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_export_text() {
        let mut c = Collection::new();
        assert_eq!(c.export_text(), "");
        c.toggle("first");
        c.toggle("second");
        assert_eq!(c.export_text(), "first\n\n---\n\nsecond");
    }
}
