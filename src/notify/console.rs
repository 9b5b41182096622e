use colored::*;

use super::{Notification, NotificationKind, NotificationSink};

/// Prints notifications to the terminal. Errors go to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

pub fn format_notification(notification: &Notification) -> String {
    let (icon, message) = match notification.kind {
        NotificationKind::Success => ("✓".green().bold(), notification.message.green()),
        NotificationKind::Error => ("✗".red().bold(), notification.message.red()),
    };
    format!("{} {} {}", icon, notification.title.bold(), message)
}

impl NotificationSink for ConsoleSink {
    fn notify(&self, notification: Notification) {
        let line = format_notification(&notification);
        match notification.kind {
            NotificationKind::Error => eprintln!("{}", line),
            NotificationKind::Success => println!("{}", line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_line_carries_title_and_message() {
        colored::control::set_override(false);
        let line = format_notification(&Notification::error("Issue update failed"));
        assert_eq!(line, "✗ Error! Issue update failed");
    }

    #[test]
    fn success_line_uses_check_mark() {
        colored::control::set_override(false);
        let line = format_notification(&Notification::success("Label created successfully"));
        assert_eq!(line, "✓ Success! Label created successfully");
    }
}
