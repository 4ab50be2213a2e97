//! Name cards and the scrolling card grid.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::NameRecord;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PINK, ROSE,
};
use crate::ui::thumbnail::ThumbnailCache;

/// Rows of one card, borders included.
pub const CARD_HEIGHT: u16 = 8;

/// Which list a card comes from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Section {
    Favorites,
    Generated,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Favorites => "Your Favorite Names",
            Section::Generated => "Generated Names",
        }
    }
}

/// A record as displayed: where it sits and whether it is a favorite.
#[derive(Clone, Copy, Debug)]
pub struct Card<'a> {
    pub record: &'a NameRecord,
    pub section: Section,
    pub is_favorite: bool,
}

/// Columns that fit in `width`.
pub fn columns_for_width(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=99 => 2,
        _ => 3,
    }
}

/// One line of the grid: a section heading or a row of card indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridRow {
    Heading(Section),
    Cards(Vec<usize>),
}

impl GridRow {
    fn height(&self) -> u16 {
        match self {
            GridRow::Heading(_) => 1,
            GridRow::Cards(_) => CARD_HEIGHT,
        }
    }
}

/// Lay cards out in rows, one heading per section.
pub fn grid_rows(cards: &[Card<'_>], columns: usize) -> Vec<GridRow> {
    let columns = columns.max(1);
    let mut rows = Vec::new();
    let mut start = 0;
    while start < cards.len() {
        let section = cards[start].section;
        let end = cards[start..]
            .iter()
            .position(|card| card.section != section)
            .map_or(cards.len(), |offset| start + offset);

        rows.push(GridRow::Heading(section));
        let indices: Vec<usize> = (start..end).collect();
        rows.extend(indices.chunks(columns).map(|chunk| GridRow::Cards(chunk.to_vec())));
        start = end;
    }
    rows
}

/// First row to draw so that the row holding `selected` is visible.
pub fn first_visible_row(rows: &[GridRow], selected: usize, height: u16) -> usize {
    let Some(target) = rows
        .iter()
        .position(|row| matches!(row, GridRow::Cards(ids) if ids.contains(&selected)))
    else {
        return 0;
    };

    let mut first = target;
    let mut used = rows[target].height();
    // Pull earlier rows in (headings included) while they still fit.
    while first > 0 && used + rows[first - 1].height() <= height {
        first -= 1;
        used += rows[first].height();
    }
    first
}

/// Draw the grid into `area`.
pub fn render_card_grid(
    frame: &mut Frame,
    area: Rect,
    cards: &[Card<'_>],
    selected: Option<usize>,
    thumbnails: &ThumbnailCache,
) {
    if area.width == 0 || area.height == 0 || cards.is_empty() {
        return;
    }

    let columns = columns_for_width(area.width);
    let rows = grid_rows(cards, columns);
    let first = selected.map_or(0, |sel| first_visible_row(&rows, sel, area.height));

    let mut y = area.y;
    let bottom = area.y + area.height;
    for row in &rows[first..] {
        let height = row.height();
        if y + height > bottom {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, height);
        match row {
            GridRow::Heading(section) => {
                let heading = Paragraph::new(Line::from(Span::styled(
                    format!(" {}", section.title()),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )));
                frame.render_widget(heading, row_area);
            }
            GridRow::Cards(indices) => {
                let cells = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                    .split(row_area);
                for (cell, &index) in cells.iter().zip(indices) {
                    render_card(frame, *cell, &cards[index], selected == Some(index), thumbnails);
                }
            }
        }
        y += height;
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    card: &Card<'_>,
    is_selected: bool,
    thumbnails: &ThumbnailCache,
) {
    let heart = if card.is_favorite { "♥" } else { "♡" };
    let border_color = if is_selected { PINK } else { GLOBAL_BORDER };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(heart, Style::default().fg(ROSE)),
            Span::raw(" "),
            Span::styled(
                card.record.name.clone(),
                Style::default().fg(PINK).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]));
    if is_selected {
        block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Half-block cells are two pixels tall, so a square image is twice as wide as high.
    let thumb_width = (inner.height * 2).min(inner.width / 2);
    let [thumb_area, text_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(thumb_width), Constraint::Min(1)])
        .areas(inner);

    match thumbnails.get(&card.record.image_url, thumb_area.width, thumb_area.height) {
        Some(lines) => frame.render_widget(Paragraph::new(lines), thumb_area),
        None => frame.render_widget(
            Paragraph::new(Span::styled(" 🖼", Style::default().fg(MUTED_TEXT))),
            thumb_area,
        ),
    }

    let mut lines = vec![Line::from(Span::styled(
        card.record.meaning.clone(),
        Style::default().fg(HEADER_TEXT),
    ))];
    if is_selected {
        lines.push(Line::from(""));
        let action = if card.is_favorite { "unfavorite" } else { "favorite" };
        lines.push(Line::from(Span::styled(
            format!("F: {action}  S: share"),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    let text = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(text, text_area.inner(ratatui::layout::Margin::new(1, 0)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(names: &[&str]) -> Vec<NameRecord> {
        names
            .iter()
            .map(|name| NameRecord::new(*name, "m", "https://example.com/x.jpg"))
            .collect()
    }

    #[test]
    fn rows_group_by_section_with_headings() {
        let favs = records(&["Aiko"]);
        let generated = records(&["Ada", "Bea", "Cy", "Di"]);
        let cards: Vec<Card> = favs
            .iter()
            .map(|record| Card {
                record,
                section: Section::Favorites,
                is_favorite: true,
            })
            .chain(generated.iter().map(|record| Card {
                record,
                section: Section::Generated,
                is_favorite: false,
            }))
            .collect();

        let rows = grid_rows(&cards, 3);
        assert_eq!(
            rows,
            vec![
                GridRow::Heading(Section::Favorites),
                GridRow::Cards(vec![0]),
                GridRow::Heading(Section::Generated),
                GridRow::Cards(vec![1, 2, 3]),
                GridRow::Cards(vec![4]),
            ]
        );
    }

    #[test]
    fn selected_row_scrolls_into_view() {
        let rows = vec![
            GridRow::Heading(Section::Generated),
            GridRow::Cards(vec![0]),
            GridRow::Cards(vec![1]),
            GridRow::Cards(vec![2]),
        ];
        // Room for two card rows only.
        assert_eq!(first_visible_row(&rows, 2, CARD_HEIGHT * 2), 2);
        assert_eq!(first_visible_row(&rows, 0, CARD_HEIGHT * 2), 0);
    }

    #[test]
    fn narrow_terminals_get_one_column() {
        assert_eq!(columns_for_width(40), 1);
        assert_eq!(columns_for_width(80), 2);
        assert_eq!(columns_for_width(120), 3);
    }
}
