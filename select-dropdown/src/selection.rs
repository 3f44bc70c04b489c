/// Insertion-ordered set of selected labels.
///
/// Order is chip display order. A label is stored at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    labels: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `label` unless it is already present.
    ///
    /// Returns `true` when the set changed. A repeated add returns `false`
    /// and leaves the order untouched.
    pub fn add(&mut self, label: &str) -> bool {
        if self.has(label) {
            return false;
        }
        self.labels.push(label.to_string());
        true
    }

    /// Remove `label`. Returns `false` if it was not selected.
    pub fn remove(&mut self, label: &str) -> bool {
        match self.labels.iter().position(|l| l == label) {
            Some(index) => {
                self.labels.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn has(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn to_ordered_list(&self) -> Vec<String> {
        self.labels.clone()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_in_insertion_order() {
        let mut set = SelectionSet::new();
        assert!(set.add("Canada"));
        assert!(set.add("Austria"));
        assert_eq!(set.to_ordered_list(), vec!["Canada", "Austria"]);
    }

    #[test]
    fn test_add_twice_is_noop() {
        let mut set = SelectionSet::new();
        assert!(set.add("Austria"));
        assert!(set.add("Canada"));
        assert!(!set.add("Austria"));
        assert_eq!(set.to_ordered_list(), vec!["Austria", "Canada"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set = SelectionSet::new();
        set.add("Austria");
        assert!(!set.remove("Canada"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut set = SelectionSet::new();
        set.add("Bali");
        set.add("Canada");
        set.add("Austria");
        assert!(set.remove("Canada"));
        assert_eq!(set.to_ordered_list(), vec!["Bali", "Austria"]);
        assert!(!set.has("Canada"));
    }

    #[test]
    fn test_readd_after_remove_goes_to_end() {
        let mut set = SelectionSet::new();
        set.add("Bali");
        set.add("Canada");
        set.remove("Bali");
        set.add("Bali");
        assert_eq!(set.to_ordered_list(), vec!["Canada", "Bali"]);
    }
}
