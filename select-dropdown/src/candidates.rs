use std::collections::HashSet;

/// Case-fold and trim a filter term the way candidate labels are compared.
fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// The fixed candidate list plus the active filter term.
///
/// The filtered sequence is a pure function of `(candidates, term)`: it is
/// rebuilt by [`CandidateStore::set_filter`] and never edited in place.
#[derive(Debug, Clone)]
pub struct CandidateStore {
    candidates: Vec<String>,
    folded: Vec<String>,
    broad_regions: HashSet<String>,
    term: String,
    filtered: Vec<usize>,
}

impl CandidateStore {
    /// Create a store over `candidates`. Labels in `broad_regions` are rendered
    /// after a divider; unknown broad-region labels are simply never matched.
    pub fn new<I, S, B, T>(candidates: I, broad_regions: B) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        B: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let candidates: Vec<String> = candidates.into_iter().map(Into::into).collect();
        let folded = candidates.iter().map(|c| c.to_lowercase()).collect();
        let filtered = (0..candidates.len()).collect();
        Self {
            candidates,
            folded,
            broad_regions: broad_regions.into_iter().map(Into::into).collect(),
            term: String::new(),
            filtered,
        }
    }

    /// Replace the filter term and recompute the filtered sequence.
    pub fn set_filter(&mut self, term: &str) -> FilteredSequence<'_> {
        let needle = normalize(term);
        self.term = term.to_string();
        self.filtered = if needle.is_empty() {
            (0..self.candidates.len()).collect()
        } else {
            self.folded
                .iter()
                .enumerate()
                .filter(|(_, label)| label.contains(needle.as_str()))
                .map(|(i, _)| i)
                .collect()
        };
        self.filtered()
    }

    pub fn filtered(&self) -> FilteredSequence<'_> {
        FilteredSequence { store: self }
    }

    /// The raw term as last supplied, before trimming and case-folding.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The full, unfiltered candidate list.
    pub fn all(&self) -> &[String] {
        &self.candidates
    }

    pub fn contains(&self, label: &str) -> bool {
        self.candidates.iter().any(|c| c == label)
    }

    pub fn is_broad_region(&self, label: &str) -> bool {
        self.broad_regions.contains(label)
    }
}

/// A borrowed view of the labels matching the current filter term.
#[derive(Debug, Clone, Copy)]
pub struct FilteredSequence<'a> {
    store: &'a CandidateStore,
}

impl<'a> FilteredSequence<'a> {
    pub fn len(&self) -> usize {
        self.store.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.filtered.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.store
            .filtered
            .get(index)
            .map(|&i| self.store.candidates[i].as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + 'a {
        let store = self.store;
        store.filtered.iter().map(move |&i| store.candidates[i].as_str())
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }

    /// Index before which a divider row is drawn.
    ///
    /// This is the position of the first broad-region label, but only when it
    /// is not the first row: a divider never leads the list.
    pub fn divider_index(&self) -> Option<usize> {
        self.iter()
            .position(|label| self.store.is_broad_region(label))
            .filter(|&i| i > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CandidateStore {
        CandidateStore::new(
            [
                "Bali [Indonesia]",
                "New Zealand",
                "Austria",
                "World Wide",
                "All of Europe",
                "All of Asia",
            ],
            ["World Wide", "All of Europe", "All of Asia"],
        )
    }

    #[test]
    fn test_empty_term_keeps_full_list_in_order() {
        let mut store = store();
        let filtered = store.set_filter("");
        assert_eq!(filtered.len(), 6);
        assert_eq!(filtered.get(0), Some("Bali [Indonesia]"));
        assert_eq!(filtered.get(5), Some("All of Asia"));
    }

    #[test]
    fn test_filter_is_case_insensitive_and_trimmed() {
        let mut store = store();
        let filtered = store.set_filter("  ZEAL ");
        assert_eq!(filtered.to_vec(), vec!["New Zealand"]);
        assert_eq!(store.term(), "  ZEAL ");
    }

    #[test]
    fn test_whitespace_only_term_matches_everything() {
        let mut store = store();
        assert_eq!(store.set_filter("   ").len(), 6);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let mut store = store();
        let filtered = store.set_filter("xyz-no-match");
        assert!(filtered.is_empty());
        assert_eq!(filtered.get(0), None);
        assert_eq!(filtered.divider_index(), None);
    }

    #[test]
    fn test_divider_before_first_broad_region() {
        let store = store();
        assert_eq!(store.filtered().divider_index(), Some(3));
    }

    #[test]
    fn test_divider_never_first_row() {
        let mut store = store();
        // Only broad regions match: "All of Europe", "All of Asia"
        let filtered = store.set_filter("all of");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.divider_index(), None);
    }

    #[test]
    fn test_divider_after_filtering_mixed_results() {
        let mut store = store();
        let filtered = store.set_filter("ia");
        assert_eq!(
            filtered.to_vec(),
            vec!["Bali [Indonesia]", "Austria", "All of Asia"]
        );
        assert_eq!(filtered.divider_index(), Some(2));
    }

    #[test]
    fn test_no_broad_region_no_divider() {
        let mut store = store();
        assert_eq!(store.set_filter("new").divider_index(), None);
    }

    #[test]
    fn test_contains_and_broad_region_lookup() {
        let store = store();
        assert!(store.contains("Austria"));
        assert!(!store.contains("austria"));
        assert!(store.is_broad_region("World Wide"));
        assert!(!store.is_broad_region("Austria"));
    }
}
