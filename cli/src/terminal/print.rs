use std::cell::Cell;
use std::sync::OnceLock;

use crate::terminal::colors;
use colored::*;
use primer_common::config::Config;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "primer::print";

static CONFIG: OnceLock<Config> = OnceLock::new();

thread_local! {
    static KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

/// Right-hand side of an [`aligned_line`].
///
/// Plain text takes the default colour. Pre-coloured text keeps its own.
pub trait LineValue {
    fn into_colored(self) -> ColoredString;
}

impl LineValue for &str {
    fn into_colored(self) -> ColoredString {
        self.color(colors::TEXT_DEFAULT)
    }
}

impl LineValue for String {
    fn into_colored(self) -> ColoredString {
        self.color(colors::TEXT_DEFAULT)
    }
}

impl LineValue for ColoredString {
    fn into_colored(self) -> ColoredString {
        self
    }
}

/// Applies the output switches from the config. Call once, before printing.
pub fn initialize(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }
    let _ = CONFIG.set(cfg.clone());
}

fn is_quiet() -> bool {
    CONFIG.get().is_some_and(Config::is_quiet)
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn header(msg: &str) {
    if is_quiet() {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

/// Sets the column at which [`aligned_line`] places its colon.
pub fn set_key_width(width: usize) {
    KEY_WIDTH.set(width);
}

/// `key` padded with dots so the colon lands one column past `width`.
fn dotted_key(key: &str, width: usize) -> String {
    let dots: usize = (width + 1).saturating_sub(UnicodeWidthStr::width(key));
    format!(
        "{}{}{}",
        key.color(colors::PRIMARY),
        ".".repeat(dots).color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    )
}

fn status_line(msg: &str) -> String {
    format!("{} {}", ">".color(colors::SEPARATOR), msg.color(colors::TEXT_DEFAULT))
}

fn indexed_entry(idx: usize, name: &str) -> String {
    format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    )
}

pub fn aligned_line(key: &str, value: impl LineValue) {
    let key: String = dotted_key(key, KEY_WIDTH.get());
    print(&status_line(&format!("{key} {}", value.into_colored())));
}

pub fn print_status(msg: impl AsRef<str>) {
    print(&status_line(msg.as_ref()));
}

/// `[idx] name`, one entry of a numbered listing.
pub fn entry(idx: usize, name: &str) {
    print(&indexed_entry(idx, name));
}

pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    let key_width: usize = key_value_pair
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0);
    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(key_width + 1 - key.len()).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}

pub fn end_of_program() {
    if is_quiet() {
        return;
    }
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
