use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, MUTED_TEXT, PINK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn widget() -> Paragraph<'static> {
        let title_style = Style::default().fg(PINK).add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let tagline_style = Style::default().fg(MUTED_TEXT);
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled("👶 Baby Name Generator", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled("Discover the perfect name for your little one.", tagline_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
