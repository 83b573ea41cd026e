//! Duplicate report state: the last fetched groups and the set of paths the
//! user has staged for deletion.
//!
//! All mutations are plain methods so the selection and merge rules can be
//! unit tested without a DOM; the `app` component holds one `DupReport` in a
//! signal and re-renders whenever it changes.

use std::collections::BTreeSet;

use crate::types::{DuplicateGroup, ExplainedGroup};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DupReport {
    pub groups: Vec<DuplicateGroup>,
    /// Paths checked for deletion. Ordered so the delete request body is
    /// deterministic regardless of click order.
    selection: BTreeSet<String>,
}

impl DupReport {
    /// Install a fresh duplicate check result. Any previous report and the
    /// whole selection are discarded.
    pub fn replace(&mut self, groups: Vec<DuplicateGroup>) {
        self.groups = groups;
        self.selection.clear();
    }

    /// Flip one path in or out of the selection. Returns whether the path is
    /// selected afterwards.
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.selection.remove(path) {
            false
        } else {
            self.selection.insert(path.to_string());
            true
        }
    }

    pub fn is_selected(&self, path: &str) -> bool {
        self.selection.contains(path)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected paths in set order, ready for the delete request body.
    pub fn selected(&self) -> Vec<String> {
        self.selection.iter().cloned().collect()
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// The explain affordance is offered whenever at least one group exists,
    /// whether or not explanations have been fetched yet.
    pub fn show_explain(&self) -> bool {
        !self.groups.is_empty()
    }

    /// The delete affordance is offered only while something is selected.
    pub fn show_delete(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Merge per-hash explanations into the loaded groups. Groups whose hash
    /// is absent from `updates` keep their current (usually empty)
    /// explanation. Returns how many groups were updated.
    pub fn merge_explanations(&mut self, updates: &[ExplainedGroup]) -> usize {
        let mut merged = 0;
        for update in updates {
            let Some(text) = update.explanation.as_ref() else {
                continue;
            };
            if let Some(group) = self.groups.iter_mut().find(|g| g.hash == update.hash) {
                group.explanation = Some(text.clone());
                merged += 1;
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(hash: &str, size: u64, paths: &[&str]) -> DuplicateGroup {
        DuplicateGroup {
            hash: hash.into(),
            size,
            paths: paths.iter().map(|p| p.to_string()).collect(),
            explanation: None,
        }
    }

    #[test]
    fn toggle_twice_restores_prior_state() {
        let mut report = DupReport::default();
        report.replace(vec![group("h1", 10, &["/a", "/b"])]);

        assert!(!report.show_delete());
        assert!(report.toggle("/a"));
        assert!(report.is_selected("/a"));
        assert!(report.show_delete());
        assert!(!report.toggle("/a"));
        assert!(!report.is_selected("/a"));
        assert!(!report.show_delete());
    }

    #[test]
    fn replace_discards_selection() {
        let mut report = DupReport::default();
        report.replace(vec![group("h1", 10, &["/a", "/b"])]);
        report.toggle("/a");
        report.toggle("/b");
        assert_eq!(report.selection_len(), 2);

        report.replace(vec![group("h2", 20, &["/c", "/d"])]);
        assert_eq!(report.selection_len(), 0);
        assert!(!report.show_delete());
    }

    #[test]
    fn empty_selection_yields_no_delete_request_body() {
        let mut report = DupReport::default();
        report.replace(vec![group("h1", 10, &["/a", "/b"])]);
        // nothing toggled: the delete handler bails out before any request
        assert!(report.selected().is_empty());
        assert!(!report.show_delete());
    }

    #[test]
    fn selected_paths_are_ordered() {
        let mut report = DupReport::default();
        report.replace(vec![group("h1", 10, &["/b", "/a", "/c"])]);
        report.toggle("/c");
        report.toggle("/a");
        assert_eq!(report.selected(), vec!["/a".to_string(), "/c".to_string()]);
    }

    #[test]
    fn affordances_follow_report_content() {
        let mut report = DupReport::default();
        assert!(!report.show_explain());
        assert!(!report.show_delete());

        report.replace(vec![group("h1", 10, &["/a", "/b"])]);
        assert!(report.show_explain());
        // explanations not fetched yet; explain is still offered
        assert!(report.groups[0].explanation.is_none());

        report.replace(Vec::new());
        assert!(!report.show_explain());
    }

    #[test]
    fn merge_matches_by_hash_and_leaves_the_rest_alone() {
        let mut report = DupReport::default();
        report.replace(vec![
            group("h1", 10, &["/a", "/b"]),
            group("h2", 20, &["/c", "/d"]),
        ]);

        let updates = vec![
            ExplainedGroup { hash: "h2".into(), explanation: Some("render cache".into()) },
            ExplainedGroup { hash: "h9".into(), explanation: Some("unknown".into()) },
        ];
        assert_eq!(report.merge_explanations(&updates), 1);
        assert_eq!(report.groups[0].explanation, None);
        assert_eq!(report.groups[1].explanation.as_deref(), Some("render cache"));
    }

    #[test]
    fn merge_ignores_updates_without_text() {
        let mut report = DupReport::default();
        report.replace(vec![group("h1", 10, &["/a", "/b"])]);
        let updates = vec![ExplainedGroup { hash: "h1".into(), explanation: None }];
        assert_eq!(report.merge_explanations(&updates), 0);
        assert_eq!(report.groups[0].explanation, None);
    }
}
