use ratatui::style::Color as TermColor;

use crate::state::Color;

pub const ACCENT: TermColor = TermColor::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: TermColor = TermColor::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: TermColor = TermColor::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: TermColor = TermColor::Rgb(0x6b, 0x72, 0x80);
pub const EMPTY_CELL: TermColor = TermColor::Rgb(0x26, 0x26, 0x26);
pub const BUTTON_TEXT: TermColor = TermColor::Rgb(0xe5, 0xe5, 0xe5);

/// Terminal color used to paint a canvas color.
pub fn paint(color: Color) -> TermColor {
    match color {
        Color::Black => TermColor::Rgb(0x00, 0x00, 0x00),
        Color::White => TermColor::Rgb(0xff, 0xff, 0xff),
        Color::Red => TermColor::Rgb(0xef, 0x44, 0x44),
        Color::Orange => TermColor::Rgb(0xf9, 0x73, 0x16),
        Color::Yellow => TermColor::Rgb(0xea, 0xb3, 0x08),
        Color::Green => TermColor::Rgb(0x22, 0xc5, 0x5e),
        Color::Blue => TermColor::Rgb(0x3b, 0x82, 0xf6),
        Color::Purple => TermColor::Rgb(0xa8, 0x55, 0xf7),
        Color::Pink => TermColor::Rgb(0xec, 0x48, 0x99),
        Color::Gray => TermColor::Rgb(0x6b, 0x72, 0x80),
        Color::Rgb(r, g, b) => TermColor::Rgb(r, g, b),
    }
}
