//! UI theme: keeps configurable colors in one place instead of scattered
//! through the render code.

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub fg: Color,
    pub accent_fg: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub sidebar_bg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub tab_bar_bg: Color,
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,
    pub tab_inactive_fg: Color,
    pub line_number_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub focus_border: Color,
    pub inactive_border: Color,
    pub popup_bg: Color,
    pub error_fg: Color,
    pub info_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            fg: Color::Rgb(0xdd, 0xdd, 0xdd),
            accent_fg: Color::Rgb(0x87, 0xce, 0xeb),
            header_bg: Color::Rgb(0x2d, 0x2d, 0x2d),
            header_fg: Color::Rgb(0xff, 0xff, 0xff),
            sidebar_bg: Color::Rgb(0x25, 0x25, 0x25),
            selected_bg: Color::Rgb(0x00, 0x7a, 0xcc),
            selected_fg: Color::Rgb(0xff, 0xff, 0xff),
            tab_bar_bg: Color::Rgb(0x2d, 0x2d, 0x2d),
            tab_active_bg: Color::Rgb(0x1a, 0x1a, 0x1a),
            tab_active_fg: Color::Rgb(0xff, 0xff, 0xff),
            tab_inactive_fg: Color::Rgb(0x99, 0x99, 0x99),
            line_number_fg: Color::Rgb(0x66, 0x66, 0x66),
            status_bg: Color::Rgb(0x2d, 0x2d, 0x2d),
            status_fg: Color::Rgb(0xcc, 0xcc, 0xcc),
            focus_border: Color::Rgb(0x00, 0x7a, 0xcc),
            inactive_border: Color::Rgb(0x44, 0x44, 0x44),
            popup_bg: Color::Rgb(0x2d, 0x2d, 0x2d),
            error_fg: Color::Rgb(0xf4, 0x47, 0x47),
            info_fg: Color::Rgb(0x4e, 0xc9, 0xb0),
        }
    }
}
