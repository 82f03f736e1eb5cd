use crate::form::{FieldKind, FieldState};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

/// Build a labelled input for a field. Invalid values get an error border;
/// password values are masked.
///
pub fn input<'a>(kind: FieldKind, field: &FieldState, focused: bool, theme: &Theme) -> Paragraph<'a> {
    let border_style = if field.is_invalid() {
        styling::invalid_block_border_style(theme)
    } else if focused {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };

    let title = if focused {
        Span::styled(kind.label(), styling::active_block_title_style())
    } else {
        Span::raw(kind.label())
    };

    let mut text = match kind {
        FieldKind::Email => field.value.clone(),
        FieldKind::Password => "*".repeat(field.value.chars().count()),
    };
    if focused {
        text.push('_');
    }

    Paragraph::new(text)
        .style(styling::normal_text_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        )
}
