use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const IPV4_ADDR: Color = Color::Cyan;
pub const ACTIVE: Color = Color::Green;
pub const INACTIVE: Color = Color::Red;
pub const UNKNOWN: Color = Color::Yellow;
