use crate::ui::app::{App, Focus};
use crate::ui::cards::render_card_grid;
use crate::ui::footer::Footer;
use crate::ui::form::FormField;
use crate::ui::header::Header;
use crate::ui::layout::{bottom_centered_rect, layout_regions};
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PINK, POPUP_BORDER, ROSE, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const FORM_HEIGHT: u16 = 5;
const LABEL_WIDTH: usize = 18;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::widget(), header);
    frame.render_widget(Footer::widget(app.focus()), footer);

    let [form_area, status_area, cards_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(body);

    render_form(frame, form_area, app);
    render_status(frame, status_area, app);

    let cards = app.cards();
    let selected = (app.focus() == Focus::Cards).then(|| app.selection());
    render_card_grid(frame, cards_area, &cards, selected, app.thumbnails());

    if let Some(message) = app.names().notification_message() {
        render_toast(frame, body, message);
    }
}

fn spinner(tick: u8) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

fn render_form(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let form = app.form();
    let form_focused = app.focus() == Focus::Form;
    let loading = app.names().is_loading;

    let field_line = |label: &str, value: &str, field: FormField| {
        let active = form_focused && form.focused == field;
        let value_style = if active {
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let marker = if active { "▸ " } else { "  " };
        let cursor = if active && !loading { "▏" } else { "" };
        Line::from(vec![
            Span::styled(marker, Style::default().fg(PINK)),
            Span::styled(
                format!("{:<width$}", label, width = LABEL_WIDTH),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(value.to_string(), value_style),
            Span::styled(cursor, Style::default().fg(PINK)),
        ])
    };

    let button = if loading {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{} Generating...", spinner(app.animation_tick())),
                Style::default().fg(MUTED_TEXT),
            ),
        ])
    } else {
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(
                " Generate Names ",
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ROSE)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(error) = &form.error {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(error.clone(), Style::default().fg(STATUS_ERROR)));
        }
        Line::from(spans)
    };

    let lines = vec![
        field_line("Culture / Origin", &form.culture, FormField::Culture),
        field_line("Starting Letter", &form.letter, FormField::Letter),
        button,
    ];

    let border = if form_focused { PINK } else { GLOBAL_BORDER };
    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Find a name ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let names = app.names();
    let line = if names.is_loading {
        Line::from(vec![
            Span::styled(
                format!(" {} ", spinner(app.animation_tick())),
                Style::default().fg(STATUS_OK),
            ),
            Span::styled(
                "Generating names and images...",
                Style::default().fg(HEADER_TEXT),
            ),
        ])
    } else if let Some(error) = &names.error {
        Line::from(vec![
            Span::styled(" ⚠ ", Style::default().fg(STATUS_ERROR)),
            Span::styled(error.clone(), Style::default().fg(STATUS_ERROR)),
        ])
    } else if names.generated.is_empty() {
        Line::from(Span::styled(
            " Your generated names will appear here. Fill out the form above to get started!",
            Style::default().fg(MUTED_TEXT),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_toast(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let width = (message.chars().count() as u16).saturating_add(4);
    let toast = bottom_centered_rect(area, width, 3);

    frame.render_widget(Clear, toast);
    let widget = Paragraph::new(Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(HEADER_TEXT),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
    );
    frame.render_widget(widget, toast);
}
