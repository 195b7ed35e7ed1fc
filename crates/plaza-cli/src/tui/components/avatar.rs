use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Initials stand in for the avatar images the terminal cannot show
pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Avatar glyph; `has_border` maps to the original's decorative border style
pub(crate) fn avatar_span(name: &str, has_border: bool) -> Span<'static> {
    let style = if has_border {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!("({})", initials(name)), style)
}
