//! The label views of an issue: current list, selector and inline create form.
//!
//! Each view computes the label set the user asked for and hands it to the
//! shared [`LabelOperations`](crate::coordinator::LabelOperations).

pub mod create;
pub mod list;
pub mod root;
pub mod select;

pub use create::{LabelCreateForm, LabelCreateInput};
pub use list::LabelList;
pub use root::IssueLabel;
pub use select::LabelSelect;

/// `values` without `label_id`, order preserved.
pub fn without_label(values: &[String], label_id: &str) -> Vec<String> {
    values.iter().filter(|id| id.as_str() != label_id).cloned().collect()
}

/// `values` with `label_id` appended if it is not already there.
pub fn with_label(values: &[String], label_id: &str) -> Vec<String> {
    let mut updated = values.to_vec();
    if !updated.iter().any(|id| id == label_id) {
        updated.push(label_id.to_string());
    }
    updated
}

pub fn toggle_label(values: &[String], label_id: &str) -> Vec<String> {
    if values.iter().any(|id| id == label_id) {
        without_label(values, label_id)
    } else {
        with_label(values, label_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn without_keeps_remaining_order() {
        assert_eq!(without_label(&ids(&["a", "b", "c"]), "b"), ids(&["a", "c"]));
        assert_eq!(without_label(&ids(&["a"]), "z"), ids(&["a"]));
    }

    #[test]
    fn with_appends_once() {
        assert_eq!(with_label(&ids(&["a"]), "b"), ids(&["a", "b"]));
        assert_eq!(with_label(&ids(&["a", "b"]), "a"), ids(&["a", "b"]));
    }

    #[test]
    fn toggle_flips_membership() {
        let start = ids(&["L1"]);
        let off = toggle_label(&start, "L1");
        assert!(off.is_empty());
        assert_eq!(toggle_label(&off, "L2"), ids(&["L2"]));
    }
}
