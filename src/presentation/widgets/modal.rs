//! Centered dialogs drawn over the console.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::application::dto::{PendingAction, PendingKind};
use crate::application::services::{RecordForm, SubAdminField, SubAdminForm};
use crate::domain::entities::PermissionRoutes;
use crate::domain::keybinding::Keybind;

use super::footer_bar::FooterBar;

/// Returns a `width` x `height` rect centered in `area`, shrunk to fit.
#[must_use]
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Clears `area`, draws a bordered frame and returns the inner rect.
fn frame(area: Rect, buf: &mut Buffer, title: &str, color: Color) -> Rect {
    Clear.render(area, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

fn field_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{label:<12}"), Style::default().fg(Color::Cyan)),
        Span::styled(value, value_style),
        Span::styled(cursor, Style::default().fg(Color::White)),
    ])
}

fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {:<12}{message}", ""),
        Style::default().fg(Color::Red),
    ))
}

fn status_line(submitting: bool, can_submit: bool) -> Line<'static> {
    if submitting {
        Line::from(Span::styled(
            "Saving…",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        ))
    } else if can_submit {
        Line::from(Span::styled(
            "Enter: save · Tab: next field · Esc: cancel",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            "Fix the highlighted fields to save · Esc: cancel",
            Style::default().fg(Color::DarkGray),
        ))
    }
}

/// Create/edit dialog for resources with a plain field list.
pub struct RecordFormModal<'a> {
    form: &'a RecordForm,
    submitting: bool,
}

impl<'a> RecordFormModal<'a> {
    #[must_use]
    pub const fn new(form: &'a RecordForm, submitting: bool) -> Self {
        Self { form, submitting }
    }
}

impl Widget for RecordFormModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();
        for (i, field) in self.form.fields().iter().enumerate() {
            let label = if field.required {
                field.label.to_string()
            } else {
                format!("{} (opt.)", field.label)
            };
            lines.push(field_line(
                &label,
                self.form.value(i).to_string(),
                i == self.form.focused(),
            ));
            let error = self.form.error(i);
            if !error.is_empty() {
                lines.push(error_line(error));
            }
        }
        lines.push(Line::raw(""));
        let can_submit = (0..self.form.fields().len()).all(|i| self.form.error(i).is_empty());
        lines.push(status_line(self.submitting, can_submit));

        #[allow(clippy::cast_possible_truncation)]
        let height = lines.len() as u16 + 2;
        let popup = centered(area, 64, height);
        let inner = frame(popup, buf, &self.form.title(), Color::Cyan);
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// Sub-admin creation dialog with password rules and the route checklist.
pub struct SubAdminFormModal<'a> {
    form: &'a SubAdminForm,
    submitting: bool,
}

impl<'a> SubAdminFormModal<'a> {
    #[must_use]
    pub const fn new(form: &'a SubAdminForm, submitting: bool) -> Self {
        Self { form, submitting }
    }
}

impl Widget for SubAdminFormModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.form.focused();
        let mut lines = Vec::new();

        let text_fields = [
            (SubAdminField::Name, "Name", self.form.name().to_string()),
            (SubAdminField::Email, "Email", self.form.email().to_string()),
            (
                SubAdminField::Password,
                "Password",
                "•".repeat(self.form.password_len()),
            ),
        ];
        for (field, label, value) in text_fields {
            lines.push(field_line(label, value, focused == field));
            let error = self.form.error(field);
            if !error.is_empty() {
                lines.push(error_line(error));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Permissions (Space to toggle)",
            Style::default().fg(Color::Cyan),
        )));
        let list_focused = focused == SubAdminField::Permissions;
        for (i, (flag, route)) in PermissionRoutes::ROUTES.iter().enumerate() {
            let checked = if self.form.permissions().contains(*flag) {
                "[x]"
            } else {
                "[ ]"
            };
            let under_cursor = list_focused && i == self.form.route_cursor();
            let style = if under_cursor {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(format!("{checked} {route}"), style),
            ]));
        }
        let error = self.form.error(SubAdminField::Permissions);
        if !error.is_empty() {
            lines.push(error_line(error));
        }

        lines.push(Line::raw(""));
        lines.push(status_line(self.submitting, self.form.can_submit()));

        #[allow(clippy::cast_possible_truncation)]
        let height = lines.len() as u16 + 2;
        let popup = centered(area, 72, height);
        let inner = frame(popup, buf, "New Sub-admin", Color::Cyan);
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// Yes/no prompt in front of a delete or status change.
pub struct ConfirmDialog<'a> {
    pending: &'a PendingAction,
    settling: bool,
}

impl<'a> ConfirmDialog<'a> {
    #[must_use]
    pub const fn new(pending: &'a PendingAction, settling: bool) -> Self {
        Self { pending, settling }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, color) = match self.pending.kind {
            PendingKind::Delete => ("Confirm delete", Color::Red),
            PendingKind::SetStatus(_) => ("Confirm status change", Color::Yellow),
        };
        let footer = if self.settling {
            Line::from(Span::styled(
                "Working…",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(vec![
                Span::styled(" y ", Style::default().fg(Color::Black).bg(color)),
                Span::raw(" confirm   "),
                Span::styled(" n ", Style::default().fg(Color::Black).bg(Color::Gray)),
                Span::raw(" cancel"),
            ])
        };
        let lines = vec![
            Line::raw(self.pending.prompt()),
            Line::raw(""),
            footer,
        ];

        let popup = centered(area, 56, 7);
        let inner = frame(popup, buf, title, color);
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

/// Full key reference.
pub struct HelpOverlay<'a> {
    keybinds: &'a [Keybind],
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(keybinds: &'a [Keybind]) -> Self {
        Self { keybinds }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line<'_>> = self
            .keybinds
            .iter()
            .map(|k| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>8}  ", FooterBar::format_key(&k.key)),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(k.label.as_ref()),
                ])
            })
            .collect();

        #[allow(clippy::cast_possible_truncation)]
        let height = lines.len() as u16 + 2;
        let popup = centered(area, 40, height);
        let inner = frame(popup, buf, "Keys", Color::Cyan);
        Paragraph::new(lines).render(inner, buf);
    }
}
