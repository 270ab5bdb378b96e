use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub surface: Color,
    pub positive: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::Rgb(226, 232, 240),
            text_muted: Color::Rgb(140, 150, 165),
            accent: Color::Rgb(56, 189, 248),
            border: Color::Rgb(51, 65, 85),
            border_focused: Color::Rgb(56, 189, 248),
            surface: Color::Rgb(15, 23, 42),
            positive: Color::Rgb(74, 222, 128),
            error: Color::Rgb(248, 113, 113),
        }
    }
}
