use chrono::{DateTime, Utc};
use colored::Colorize;
use phext::api::{CmdMessage, ListedScroll, MessageLevel, TocEntry};
use phext::config::PhextConfig;
use phext::model::Metadata;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(crate) fn print_scrolls(scrolls: &[ListedScroll], preview_width: usize) {
    for scroll in scrolls {
        println!(
            "{} {}",
            scroll.coordinate.to_string().yellow(),
            preview(&scroll.text, preview_width)
        );
    }
}

pub(crate) fn print_toc(entries: &[TocEntry], preview_width: usize) {
    for entry in entries {
        let noun = if entry.lines == 1 { "line" } else { "lines" };
        let size = format!("({} {}, {} bytes)", entry.lines, noun, entry.bytes);
        println!(
            "{} {} {}",
            entry.coordinate.to_string().yellow(),
            preview(&entry.heading, preview_width),
            size.dimmed()
        );
    }
}

pub(crate) fn print_phexts(phexts: &[Metadata]) {
    if phexts.is_empty() {
        println!("No phexts found.");
        return;
    }

    let label_width = phexts.iter().map(|m| m.label.width()).max().unwrap_or(0);
    for metadata in phexts {
        let padding = label_width - metadata.label.width();
        println!(
            "{}{}  {}  {}",
            metadata.label.bold(),
            " ".repeat(padding),
            metadata.coordinate.to_string().yellow(),
            format_time_ago(metadata.updated_at).dimmed()
        );
    }
}

pub(crate) fn print_config(config: &PhextConfig, key: Option<&str>) {
    match key {
        Some("default-label") => println!("{}", config.default_label),
        Some("preview-width") => println!("{}", config.preview_width),
        Some(_) => {}
        None => {
            println!("default-label = {}", config.default_label);
            println!("preview-width = {}", config.preview_width);
        }
    }
}

/// One-line preview of scroll text, at most `max_width` columns.
pub(crate) fn preview(text: &str, max_width: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    truncate_to_width(&flat, max_width)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    format!("updated {}", formatter.convert(duration.to_std().unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_flattens_newlines() {
        assert_eq!(preview("one\ntwo", 80), "one two");
    }

    #[test]
    fn test_preview_truncates_with_ellipsis() {
        assert_eq!(preview("abcdefgh", 5), "abcd…");
        assert_eq!(preview("abcde", 5), "abcde");
    }

    #[test]
    fn test_preview_counts_wide_chars() {
        // each ideograph is two columns
        assert_eq!(preview("日本語テキスト", 6), "日本…");
    }

    #[test]
    fn test_time_ago_format() {
        assert!(format_time_ago(Utc::now()).starts_with("updated "));
    }
}
