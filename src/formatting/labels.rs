use colored::*;
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::Label;

lazy_static! {
    static ref HEX_COLOR: Regex = Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
        .expect("hex color pattern is valid");
}

pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let caps = HEX_COLOR.captures(value)?;
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
    Some((channel(1)?, channel(2)?, channel(3)?))
}

/// Label name prefixed with a dot in the label's own color.
pub fn format_label(label: &Label) -> String {
    let dot = match label.color.as_deref().and_then(parse_hex_color) {
        Some((r, g, b)) => "●".truecolor(r, g, b),
        None => "●".dimmed(),
    };
    format!("{} {}", dot, label.name)
}

/// Resolve ids against the project's labels, keeping the order of `ids`.
/// Ids with no matching label are skipped.
pub fn resolve_labels<'a>(ids: &[String], labels: &'a [Label]) -> Vec<&'a Label> {
    ids.iter()
        .filter_map(|id| labels.iter().find(|label| &label.id == id))
        .collect()
}

/// One line of label chips, or a dimmed placeholder when there are none.
pub fn format_label_line(resolved: &[&Label]) -> String {
    if resolved.is_empty() {
        return "No labels.".dimmed().to_string();
    }

    resolved
        .iter()
        .map(|label| format_label(label))
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn print_issue_labels(ids: &[String], labels: &[Label]) {
    println!("{}", format_label_line(&resolve_labels(ids, labels)));
}

pub fn print_project_labels(labels: &[Label], selected: &[String]) {
    if labels.is_empty() {
        println!("{}", "No labels in this project.".dimmed());
        return;
    }

    for label in labels {
        let checkbox = if selected.contains(&label.id) { "[✓]" } else { "[ ]" };
        println!("{} {}  {}", checkbox, format_label(label), label.id.bright_black());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(id: &str, name: &str) -> Label {
        Label {
            id: id.to_string(),
            name: name.to_string(),
            color: Some("#ff0000".to_string()),
            description: None,
            parent: None,
            project_id: None,
            sort_order: None,
        }
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#ff8000"), Some((255, 128, 0)));
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("ff8000"), None);
        assert!(is_hex_color("#0a0B0c"));
    }

    #[test]
    fn resolve_keeps_id_order_and_skips_unknown() {
        let labels = vec![label("a", "Bug"), label("b", "Docs")];
        let ids = vec!["b".to_string(), "missing".to_string(), "a".to_string()];
        let names: Vec<&str> = resolve_labels(&ids, &labels).iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Docs", "Bug"]);
    }

    #[test]
    fn format_label_ends_with_name() {
        colored::control::set_override(false);
        assert_eq!(format_label(&label("a", "Bug")), "● Bug");
    }

    #[test]
    fn label_line_joins_chips_or_says_none() {
        colored::control::set_override(false);
        let labels = vec![label("a", "Bug"), label("b", "Docs")];
        assert_eq!(format_label_line(&[&labels[1], &labels[0]]), "● Docs  ● Bug");
        assert_eq!(format_label_line(&[]), "No labels.");
    }
}
