//! Table of records for one resource.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::application::services::{ListController, LoadState};
use crate::domain::{AdminRecord, RecordStatus, Resource};

const MAX_CELL_CHARS: usize = 48;

pub struct RecordTable<'a> {
    resource: Resource,
    list: &'a ListController<AdminRecord>,
}

impl<'a> RecordTable<'a> {
    #[must_use]
    pub const fn new(resource: Resource, list: &'a ListController<AdminRecord>) -> Self {
        Self { resource, list }
    }

    fn title(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!(" {} ", self.resource.title()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];
        if self.list.is_loading() {
            spans.push(Span::styled(
                "⟳ loading ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ));
        }
        Line::from(spans)
    }

    fn widths(&self) -> Vec<Constraint> {
        let columns = self.resource.columns();
        columns
            .iter()
            .map(|c| match *c {
                "Created" | "Status" | "Age" | "Gender" | "Coins" => Constraint::Length(11),
                _ => Constraint::Fill(1),
            })
            .collect()
    }
}

fn status_style(value: &str) -> Style {
    match RecordStatus::from(value) {
        RecordStatus::Active | RecordStatus::Resolved => Style::default().fg(Color::Green),
        RecordStatus::Inactive => Style::default().fg(Color::Red),
        RecordStatus::Pending => Style::default().fg(Color::Yellow),
        RecordStatus::Other(_) => Style::default(),
    }
}

fn truncate(value: &str) -> String {
    if value.chars().count() <= MAX_CELL_CHARS {
        value.to_string()
    } else {
        let cut: String = value.chars().take(MAX_CELL_CHARS - 1).collect();
        format!("{cut}…")
    }
}

impl StatefulWidget for RecordTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray))
            .title(self.title());

        if self.list.rows().is_empty() {
            let message = match self.list.state() {
                LoadState::Idle | LoadState::Loading => "Loading records…",
                LoadState::Failed => "Records could not be loaded. Press r to retry.",
                LoadState::Loaded if self.list.query().search.is_empty() => "No records yet.",
                LoadState::Loaded => "No records match the search.",
            };
            Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(area, buf);
            return;
        }

        let columns = self.resource.columns();
        let status_column = columns.iter().position(|c| *c == "Status");
        let header = Row::new(columns.iter().map(|c| Cell::from(*c))).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );

        let rows = self.list.rows().iter().map(|record| {
            Row::new(record.cells().into_iter().enumerate().map(|(i, value)| {
                let style = if Some(i) == status_column {
                    status_style(&value)
                } else {
                    Style::default()
                };
                Cell::from(truncate(&value)).style(style)
            }))
        });

        let table = Table::new(rows, self.widths())
            .header(header)
            .block(block)
            .column_spacing(2)
            .row_highlight_style(
                Style::default()
                    .bg(Color::Rgb(30, 45, 60))
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        StatefulWidget::render(table, area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::application::services::NotificationManager;
    use crate::domain::Page;

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_status_colours() {
        assert_eq!(status_style("active").fg, Some(Color::Green));
        assert_eq!(status_style("Resolved").fg, Some(Color::Green));
        assert_eq!(status_style("0").fg, Some(Color::Red));
        assert_eq!(status_style("pending").fg, Some(Color::Yellow));
        assert_eq!(status_style("archived").fg, None);
    }

    #[test]
    fn test_renders_rows_and_header() {
        let mut list = ListController::new(10);
        let ticket = list.fetch();
        let rows = vec![
            AdminRecord::from_json(
                Resource::Breeds,
                json!({"id": 1, "name": "Akita", "status": "active"}),
            )
            .unwrap(),
        ];
        list.apply(
            ticket.seq,
            Ok(Page {
                rows,
                total: 1,
                page: 1,
                limit: 10,
            }),
            &mut NotificationManager::default(),
        );

        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        let mut state = TableState::default();
        RecordTable::new(Resource::Breeds, &list).render(area, &mut buf, &mut state);

        let rendered = text(&buf);
        assert!(rendered.contains("Breeds"));
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("Akita"));
    }

    #[test]
    fn test_failed_load_shows_retry_hint() {
        let mut list: ListController<AdminRecord> = ListController::new(10);
        let ticket = list.fetch();
        list.apply(
            ticket.seq,
            Err(crate::domain::ApiError::rejected("boom")),
            &mut NotificationManager::default(),
        );

        let area = Rect::new(0, 0, 60, 4);
        let mut buf = Buffer::empty(area);
        RecordTable::new(Resource::Faqs, &list).render(area, &mut buf, &mut TableState::default());
        assert!(text(&buf).contains("could not be loaded"));
    }

    #[test]
    fn test_truncate_long_values() {
        let long = "x".repeat(MAX_CELL_CHARS + 10);
        assert_eq!(truncate(&long).chars().count(), MAX_CELL_CHARS);
        assert_eq!(truncate("short"), "short");
    }
}
