//! Fixed-width release table rendering.

use std::fmt::Display;

/// Column width of the repository name.
pub const NAME_WIDTH: usize = 40;

/// Column width of the release status.
pub const STATUS_WIDTH: usize = 20;

/// Width of the rule printed under the header.
pub const RULE_WIDTH: usize = 63;

const SEPARATOR: &str = " | ";

pub fn header() -> String {
    row("Repository", "Latest Release")
}

pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// One left-aligned row. Values wider than their column are not truncated.
pub fn row(name: impl Display, status: impl Display) -> String {
    // Render first: padding only applies to the formatted string, not to
    // Display impls that write directly.
    let name = name.to_string();
    let status = status.to_string();
    format!("{:<NAME_WIDTH$}{}{:<STATUS_WIDTH$}", name, SEPARATOR, status)
}
