//! Live title search over the catalog
//!
//! Case-insensitive contiguous-substring matching, recomputed in full on
//! every query change. Comparison lowercases both sides with the
//! locale-independent Unicode fold, so behavior does not drift with the
//! process locale and mixed-script titles match predictably.
//!
//! The fold is simple lowercasing, not full case folding: a query produced
//! by uppercasing a title can miss when the round trip diverges ("ß" →
//! "SS" → "ss", which no longer contains "ß"). Queries typed as they read,
//! in either case, still match; this mirrors `contains(ignoreCase = true)`
//! matching elsewhere rather than Unicode simple-fold equivalence.

use crate::catalog::RecipeRecord;
use crate::logging;

/// Check if a title contains the query as a substring, ignoring case.
/// The empty query matches every title.
pub fn title_matches(title: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    title.to_lowercase().contains(&query.to_lowercase())
}

/// Filter the catalog by title, preserving catalog order.
pub fn filter(catalog: &[RecipeRecord], query: &str) -> Vec<RecipeRecord> {
    let query_lower = query.to_lowercase();
    catalog
        .iter()
        .filter(|r| query_lower.is_empty() || r.title.to_lowercase().contains(&query_lower))
        .cloned()
        .collect()
}

/// Same filter, returning indices into the catalog instead of clones.
pub fn filter_indices(catalog: &[RecipeRecord], query: &str) -> Vec<usize> {
    let query_lower = query.to_lowercase();
    if query_lower.is_empty() {
        return (0..catalog.len()).collect();
    }
    catalog
        .iter()
        .enumerate()
        .filter(|(_, r)| r.title.to_lowercase().contains(&query_lower))
        .map(|(idx, _)| idx)
        .collect()
}

/// Screen-session search state: the full catalog, the current query, and the
/// derived visible subset. `visible` is recomputed synchronously inside
/// [`SearchSession::set_query`], never patched incrementally, so there is no
/// stale intermediate state to observe.
pub struct SearchSession {
    catalog: Vec<RecipeRecord>,
    query: String,
    visible: Vec<usize>,
}

impl SearchSession {
    /// Create a session over a freshly loaded catalog. The initial query is
    /// empty, so everything is visible.
    pub fn new(catalog: Vec<RecipeRecord>) -> Self {
        let visible = (0..catalog.len()).collect();
        Self {
            catalog,
            query: String::new(),
            visible,
        }
    }

    /// Replace the query and rederive the visible set.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.visible = filter_indices(&self.catalog, &self.query);
        logging::log_query(&self.query, self.visible.len(), self.catalog.len());
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn catalog(&self) -> &[RecipeRecord] {
        &self.catalog
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    /// The visible subset, in catalog order
    pub fn visible(&self) -> impl Iterator<Item = &RecipeRecord> {
        self.visible.iter().map(|&idx| &self.catalog[idx])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// The nth visible record, n counted within the visible set
    pub fn visible_record(&self, n: usize) -> Option<&RecipeRecord> {
        self.visible.get(n).map(|&idx| &self.catalog[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> RecipeRecord {
        RecipeRecord::new(title, format!("/recipes/{}", title.len()), "img")
    }

    fn titles(records: &[RecipeRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_catalog_unchanged() {
        let catalog = vec![record("番茄炒蛋"), record("三杯雞"), record("滷肉飯")];
        let result = filter(&catalog, "");
        assert_eq!(result, catalog);
    }

    #[test]
    fn matches_cjk_substring() {
        let catalog = vec![record("番茄炒蛋"), record("三杯雞"), record("滷肉飯")];
        let result = filter(&catalog, "雞");
        assert_eq!(titles(&result), ["三杯雞"]);
    }

    #[test]
    fn match_ignores_case_both_directions() {
        let catalog = vec![record("Tomato Egg")];
        assert_eq!(filter(&catalog, "TOMATO").len(), 1);
        assert_eq!(filter(&catalog, "tomato egg").len(), 1);
        // Uppercased full title matches its own record
        assert_eq!(filter(&catalog, &catalog[0].title.to_uppercase()).len(), 1);
        assert_eq!(filter(&catalog, &catalog[0].title.to_lowercase()).len(), 1);
    }

    #[test]
    fn lowercase_fold_does_not_expand_sharp_s() {
        // "ß".to_uppercase() is "SS"; lowercasing that gives "ss", which the
        // original title no longer contains. Documented edge of the fixed
        // lowercase fold; same-case and lowercased queries still match.
        let catalog = vec![record("Weißwurst")];
        assert_eq!(filter(&catalog, "weißwurst").len(), 1);
        assert_eq!(filter(&catalog, "WEIßWURST").len(), 1);
        assert!(filter(&catalog, &catalog[0].title.to_uppercase()).is_empty());
    }

    #[test]
    fn no_match_returns_empty() {
        let catalog = vec![record("Egg")];
        assert!(filter(&catalog, "xyz").is_empty());
    }

    #[test]
    fn preserves_catalog_order_and_duplicates() {
        let catalog = vec![
            record("蔥油雞"),
            record("三杯雞"),
            record("麻婆豆腐"),
            record("三杯雞"),
        ];
        let result = filter(&catalog, "雞");
        assert_eq!(titles(&result), ["蔥油雞", "三杯雞", "三杯雞"]);
    }

    #[test]
    fn only_contiguous_substrings_match() {
        let catalog = vec![record("蔥爆牛肉")];
        // Characters present but not adjacent
        assert!(filter(&catalog, "蔥肉").is_empty());
        assert_eq!(filter(&catalog, "爆牛").len(), 1);
    }

    #[test]
    fn matches_exactly_the_contains_relation() {
        let catalog = vec![
            record("Egg Fried Rice"),
            record("Scrambled Eggs"),
            record("滷肉飯"),
        ];
        for query in ["egg", "RICE", "飯", "z", ""] {
            let result = filter(&catalog, query);
            for r in &catalog {
                let expected = title_matches(&r.title, query);
                assert_eq!(result.contains(r), expected);
                assert_eq!(
                    expected,
                    r.title.to_lowercase().contains(&query.to_lowercase())
                );
            }
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let catalog = vec![record("三杯雞"), record("白斬雞"), record("滷肉飯")];
        let first = filter(&catalog, "雞");
        let second = filter(&catalog, "雞");
        assert_eq!(first, second);
    }

    #[test]
    fn index_variant_agrees_with_record_variant() {
        let catalog = vec![record("三杯雞"), record("滷肉飯"), record("白斬雞")];
        for query in ["雞", "", "飯", "xyz"] {
            let by_index: Vec<&RecipeRecord> = filter_indices(&catalog, query)
                .into_iter()
                .map(|i| &catalog[i])
                .collect();
            let by_record = filter(&catalog, query);
            assert_eq!(by_index, by_record.iter().collect::<Vec<_>>());
        }
    }

    #[test]
    fn session_starts_with_everything_visible() {
        let session = SearchSession::new(vec![record("a"), record("b")]);
        assert_eq!(session.query(), "");
        assert_eq!(session.visible_len(), 2);
    }

    #[test]
    fn session_rederives_visible_on_each_query_change() {
        let mut session =
            SearchSession::new(vec![record("番茄炒蛋"), record("三杯雞"), record("滷肉飯")]);

        session.set_query("雞");
        assert_eq!(session.visible_len(), 1);
        assert_eq!(session.visible_record(0).unwrap().title, "三杯雞");

        session.set_query("");
        assert_eq!(session.visible_len(), 3);
        // Back to catalog order
        let visible: Vec<&str> = session.visible().map(|r| r.title.as_str()).collect();
        assert_eq!(visible, ["番茄炒蛋", "三杯雞", "滷肉飯"]);
    }

    #[test]
    fn session_handles_unmatched_query() {
        let mut session = SearchSession::new(vec![record("Egg")]);
        session.set_query("xyz");
        assert_eq!(session.visible_len(), 0);
        assert!(session.visible_record(0).is_none());
        // Catalog itself is untouched
        assert_eq!(session.catalog_len(), 1);
    }

    #[test]
    fn session_over_empty_catalog_never_fails() {
        let mut session = SearchSession::new(Vec::new());
        session.set_query("anything");
        assert_eq!(session.visible_len(), 0);
    }
}
