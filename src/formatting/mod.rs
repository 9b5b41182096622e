pub mod labels;

pub use labels::{format_label, format_label_line, parse_hex_color, print_issue_labels, print_project_labels, resolve_labels};
