//! Generated help text.
//!
//! The help screen is a pure function of the display labels, the custom
//! bindings, and the console's help key: identical inputs produce identical
//! text.

use crate::handlers::HandlerTable;
use crate::labels::Labels;
use sift_keys::KeyPress;

/// Builds the help text shown when the user presses the help key.
#[must_use]
pub fn help_text<T>(labels: &Labels, handlers: &HandlerTable<T>) -> String {
    let Labels {
        singular,
        plural,
        verb,
    } = labels;

    let mut text = String::new();
    text.push_str(&format!(
        "Type SPC or y to {verb} the current {singular};\n"
    ));
    text.push_str(&format!(
        "n, delete, or backspace to skip the current {singular};\n"
    ));
    text.push_str(&format!("! to {verb} all remaining {plural};\n"));
    text.push_str(&format!(
        "q or ESC to exit, skipping all remaining {plural};\n"
    ));
    for (key, help) in handlers.entries() {
        text.push_str(&format!("{} to {help};\n", key.describe()));
    }
    text.push_str(&format!(
        "or . (period) to {verb} the current {singular} and exit."
    ));
    text
}

/// Builds the short hint appended to each interactive prompt, e.g.
/// `y, n, !, ., q, or ? for help`.
#[must_use]
pub fn hint_text(help_key: &KeyPress) -> String {
    format!("y, n, !, ., q, or {} for help", help_key.describe())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_labels() {
        let handlers: HandlerTable<()> = HandlerTable::new();
        let text = help_text(&Labels::default(), &handlers);
        assert_eq!(
            text,
            "Type SPC or y to act on the current object;\n\
             n, delete, or backspace to skip the current object;\n\
             ! to act on all remaining objects;\n\
             q or ESC to exit, skipping all remaining objects;\n\
             or . (period) to act on the current object and exit."
        );
    }

    #[test]
    fn test_custom_bindings_listed_in_order() {
        let mut handlers: HandlerTable<()> = HandlerTable::new();
        handlers
            .bind(KeyPress::plain('d'), "show a diff", |_| true)
            .unwrap();
        handlers
            .bind(KeyPress::plain('e'), "edit the file", |_| true)
            .unwrap();
        let text = help_text(&Labels::new("file", "files", "delete"), &handlers);
        let diff_pos = text.find("d to show a diff;").unwrap();
        let edit_pos = text.find("e to edit the file;").unwrap();
        assert!(diff_pos < edit_pos);
        assert!(text.contains("delete the current file"));
    }

    #[test]
    fn test_help_text_is_deterministic() {
        let make = || {
            let mut handlers: HandlerTable<()> = HandlerTable::new();
            handlers
                .bind(KeyPress::plain('d'), "show a diff", |_| true)
                .unwrap();
            help_text(&Labels::new("file", "files", "delete"), &handlers)
        };
        assert_eq!(make(), make());
    }

    #[test]
    fn test_hint_text() {
        assert_eq!(
            hint_text(&KeyPress::plain('?')),
            "y, n, !, ., q, or ? for help"
        );
        assert_eq!(
            hint_text(&KeyPress::ctrl('h')),
            "y, n, !, ., q, or Ctrl+h for help"
        );
    }
}
