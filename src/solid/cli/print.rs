use chrono::{DateTime, Utc};
use colored::Colorize;
use solid::api::{CmdMessage, MessageLevel, ShapeReport};
use solid::config::SolidConfig;
use solid::journal::Entry;
use solid::model::Product;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 16;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_entries(entries: &[Entry]) {
    for (pos, entry) in entries.iter().enumerate() {
        let prefix = format!("[{}] {}: ", pos, entry.number);
        let available = LINE_WIDTH.saturating_sub(prefix.width() + TIME_WIDTH);
        let text = truncate_to_width(&entry.text.replace('\n', " "), available);
        let padding = available.saturating_sub(text.width());

        println!(
            "{}{}{}{}",
            prefix.yellow(),
            text,
            " ".repeat(padding),
            format_time_ago(entry.created_at).dimmed()
        );
    }
}

pub(super) fn print_products(products: &[Product]) {
    let name_width = products
        .iter()
        .map(|p| p.name().width())
        .max()
        .unwrap_or(0);

    for product in products {
        let padding = name_width - product.name().width();
        println!(
            "  - {}{}  {:<6} {}",
            product.name().bold(),
            " ".repeat(padding),
            product.color().to_string(),
            product.size().to_string().dimmed()
        );
    }
}

pub(super) fn print_shapes(reports: &[ShapeReport]) {
    for report in reports {
        let verdict = if report.check.holds() {
            "ok".green()
        } else {
            "broken".red()
        };
        println!(
            "{:<10} {}  {}  [{}]",
            report.kind.bold(),
            report.shape,
            report.check,
            verdict
        );
    }
}

pub(super) fn print_config(config: &SolidConfig) {
    for key in SolidConfig::KEYS {
        let value = config.get(key).unwrap_or_default();
        println!("{} = {}", key.bold(), value);
    }
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
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
