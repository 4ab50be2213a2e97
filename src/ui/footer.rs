use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

pub struct Footer;

impl Footer {
    /// Key hints for the focused area; the version sits on the bottom border.
    pub fn widget(focus: Focus) -> Paragraph<'static> {
        let hints = match focus {
            Focus::Form => " Enter: Generate │ ↑/↓: Field │ Tab: Cards │ Ctrl+Q: Quit",
            Focus::Cards => " ←/→/↑/↓: Select │ F: Favorite │ S: Share │ Tab: Form │ Ctrl+Q: Quit",
        };
        let version = Line::styled(
            format!(" Powered by Gemini API · v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(MUTED_TEXT),
        )
        .right_aligned();

        Paragraph::new(Line::from(hints))
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
            .block(
                Block::bordered()
                    .border_style(Style::default().fg(GLOBAL_BORDER))
                    .title_bottom(version),
            )
    }
}
