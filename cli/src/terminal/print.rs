//! Terminal rendering. Every line goes out as a tracing event on
//! [`PRINT_TARGET`] so the formatter can write it verbatim.

use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{colors, logging::PRINT_TARGET};

pub const TOTAL_WIDTH: usize = 64;

/// Widest key printed by [`aligned_line`] ("Domain").
const KEY_WIDTH: usize = 6;
/// Widest key in a detail tree ("Domain", "Module").
const TREE_KEY_WIDTH: usize = 7;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

fn rule(width: usize, glyph: &str) -> ColoredString {
    glyph.repeat(width).color(colors::SEPARATOR)
}

/// `label` padded with dots to `width`, then a colon.
fn dotted_key(label: ColoredString, len: usize, width: usize) -> String {
    format!(
        "{}{}{}",
        label,
        ".".repeat(width.saturating_sub(len)).color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    )
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title: String = format!("⟦ SOLID v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let side: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(title.as_str())) / 2;

    print(&format!("{}{}{}", rule(side, "═"), title.bright_green().bold(), rule(side, "═")));
    centerln(&"five principles, before and after".italic().white().to_string());
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let dashes: usize = TOTAL_WIDTH.saturating_sub(title.chars().count());
    let left: usize = dashes / 2;

    print(&format!(
        "{}{}{}",
        rule(left, "─"),
        title.bright_green(),
        rule(dashes - left, "─")
    ));
}

/// Marks the start of the `before` or `after` half of a lesson.
pub fn phase(label: &str, color: Color, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let arrow: ColoredString = "▸".color(colors::SEPARATOR);
    print(&format!("{} {}", arrow, label.to_uppercase().color(color).bold()));
}

pub fn fat_separator() {
    print(&rule(TOTAL_WIDTH, "═").to_string());
}

pub fn aligned_line(key: &str, value: &str) {
    let key: String = dotted_key(key.color(colors::PRIMARY), key.len(), KEY_WIDTH + 1);
    print_status(format!("{} {}", key, value.color(colors::TEXT_DEFAULT)));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT)));
}

pub fn tree_head(idx: usize, name: &str) {
    let index: ColoredString = idx.to_string().color(colors::ACCENT);
    let open: ColoredString = "[".color(colors::SEPARATOR);
    let close: ColoredString = "]".color(colors::SEPARATOR);
    print(&format!("{open}{index}{close} {}", name.color(colors::PRIMARY)));
}

pub fn as_tree_one_level(details: Vec<(String, ColoredString)>) {
    let count: usize = details.len();
    for (i, (key, value)) in details.into_iter().enumerate() {
        let branch: ColoredString = (if i + 1 < count { "├─" } else { "└─" }).bright_black();
        let key_len: usize = key.len();
        let key: String = dotted_key(key.color(colors::TEXT_DEFAULT), key_len, TREE_KEY_WIDTH);
        print(&format!(" {branch} {key} {value}"));
    }
}

pub fn centerln(msg: &str) {
    let pad: String = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{pad}{msg}{pad}"));
}

pub fn end_of_program() {
    fat_separator();
}
