//! Resource console: tabs, search, paginated table and modals.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, TableState, Tabs, Widget},
};
use tracing::debug;

use crate::application::dto::{Mutation, PendingAction, PendingKind};
use crate::application::services::{
    ConfirmGate, FetchTicket, FormMode, ListController, LoadState, NotificationManager,
    RecordForm, SubAdminField, SubAdminForm,
};
use crate::domain::entities::AdminProfile;
use crate::domain::keybinding::Action;
use crate::domain::{AdminRecord, ApiError, Page, Resource};
use crate::infrastructure::config::FeatureFlags;
use crate::presentation::commands::CommandRegistry;
use crate::presentation::widgets::{
    ConfirmDialog, FocusContext, FooterBar, HelpOverlay, RecordFormModal, RecordTable,
    StatusBar, SubAdminFormModal, TextInput,
};

/// Actions shown in the footer while the table has focus.
const TABLE_ACTIONS: [Action; 9] = [
    Action::FocusSearch,
    Action::Create,
    Action::Edit,
    Action::ToggleStatus,
    Action::Delete,
    Action::NextPage,
    Action::PreviousPage,
    Action::Refresh,
    Action::ToggleHelp,
];

/// Work the console asks the event loop to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Fetch {
        resource: Resource,
        ticket: FetchTicket,
    },
    Mutate(Mutation),
    /// Restart the search debounce with the live text.
    ScheduleSearch {
        resource: Resource,
        text: String,
    },
    Logout,
    Quit,
}

/// Per-resource list state.
pub struct ResourceView {
    pub list: ListController<AdminRecord>,
    pub search: TextInput,
    pub table: TableState,
}

impl ResourceView {
    fn new(resource: Resource, page_size: u32) -> Self {
        Self {
            list: ListController::new(page_size),
            search: TextInput::new(" Search ")
                .placeholder(format!("Search {}...", resource.title().to_lowercase())),
            table: TableState::default(),
        }
    }
}

pub enum FormKind {
    Record(RecordForm),
    SubAdmin(SubAdminForm),
}

pub struct FormModal {
    pub kind: FormKind,
    /// The create/update request is in flight.
    pub submitting: bool,
}

pub enum Modal {
    Form(FormModal),
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleFocus {
    #[default]
    Table,
    Search,
}

pub struct ConsoleScreenState {
    admin: AdminProfile,
    tabs: Vec<Resource>,
    active: usize,
    views: HashMap<Resource, ResourceView>,
    focus: ConsoleFocus,
    modal: Option<Modal>,
    confirm: ConfirmGate<PendingAction>,
    registry: CommandRegistry,
}

impl ConsoleScreenState {
    /// Builds the console with one tab per resource the admin may open.
    #[must_use]
    pub fn new(
        admin: AdminProfile,
        features: &FeatureFlags,
        page_size: u32,
        registry: CommandRegistry,
    ) -> Self {
        let tabs: Vec<Resource> = Resource::ALL
            .into_iter()
            .filter(|r| features.allows(*r) && admin.can_access(*r))
            .collect();
        let views = tabs
            .iter()
            .map(|r| (*r, ResourceView::new(*r, page_size)))
            .collect();
        debug!(tabs = tabs.len(), "Console initialised");

        Self {
            admin,
            tabs,
            active: 0,
            views,
            focus: ConsoleFocus::Table,
            modal: None,
            confirm: ConfirmGate::new(),
            registry,
        }
    }

    #[must_use]
    pub fn active_resource(&self) -> Option<Resource> {
        self.tabs.get(self.active).copied()
    }

    #[must_use]
    pub fn tabs(&self) -> &[Resource] {
        &self.tabs
    }

    #[must_use]
    pub fn view(&self, resource: Resource) -> Option<&ResourceView> {
        self.views.get(&resource)
    }

    #[must_use]
    pub const fn focus(&self) -> ConsoleFocus {
        self.focus
    }

    #[must_use]
    pub const fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    #[must_use]
    pub const fn confirm_gate(&self) -> &ConfirmGate<PendingAction> {
        &self.confirm
    }

    #[must_use]
    pub const fn admin(&self) -> &AdminProfile {
        &self.admin
    }

    fn active_view_mut(&mut self) -> Option<(Resource, &mut ResourceView)> {
        let resource = self.active_resource()?;
        self.views.get_mut(&resource).map(|v| (resource, v))
    }

    /// Loads the active tab if it has never been fetched.
    pub fn open_active(&mut self) -> Option<ConsoleCommand> {
        let (resource, view) = self.active_view_mut()?;
        if view.list.state() != LoadState::Idle {
            return None;
        }
        let ticket = view.list.fetch();
        Some(ConsoleCommand::Fetch { resource, ticket })
    }

    fn switch_tab(&mut self, forward: bool) -> Option<ConsoleCommand> {
        if self.tabs.is_empty() {
            return None;
        }
        let len = self.tabs.len();
        self.active = if forward {
            (self.active + 1) % len
        } else {
            (self.active + len - 1) % len
        };
        self.focus = ConsoleFocus::Table;
        self.open_active()
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        notifications: &mut NotificationManager,
    ) -> Option<ConsoleCommand> {
        if self.confirm.is_visible() {
            return self.handle_confirm_key(key);
        }
        match self.modal.take() {
            Some(Modal::Help) => {
                if !matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::Enter
                ) {
                    self.modal = Some(Modal::Help);
                }
                return None;
            }
            Some(Modal::Form(mut modal)) => {
                let (command, keep_open) = Self::handle_form_key(&mut modal, key);
                if keep_open {
                    self.modal = Some(Modal::Form(modal));
                }
                return command;
            }
            None => {}
        }
        match self.focus {
            ConsoleFocus::Search => self.handle_search_key(key),
            ConsoleFocus::Table => {
                let action = self.registry.find_action(key)?;
                self.handle_action(action, notifications)
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Option<ConsoleCommand> {
        if self.confirm.is_settling() {
            return None;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char('y' | 'Y') => {
                let pending = self.confirm.confirm()?;
                debug!(resource = %pending.resource, id = %pending.id, "Action confirmed");
                Some(ConsoleCommand::Mutate(pending.into_mutation()))
            }
            KeyCode::Esc | KeyCode::Char('n' | 'N' | 'q') => {
                self.confirm.cancel();
                None
            }
            _ => None,
        }
    }

    /// Returns the command to run and whether the modal stays open.
    fn handle_form_key(modal: &mut FormModal, key: KeyEvent) -> (Option<ConsoleCommand>, bool) {
        if modal.submitting {
            return (None, true);
        }
        match (&mut modal.kind, key.code) {
            (_, KeyCode::Esc) => return (None, false),
            (FormKind::Record(form), KeyCode::Tab | KeyCode::Down) => form.focus_next(),
            (FormKind::Record(form), KeyCode::BackTab | KeyCode::Up) => form.focus_previous(),
            (FormKind::SubAdmin(form), KeyCode::Tab) => form.focus_next(),
            (FormKind::SubAdmin(form), KeyCode::BackTab) => form.focus_previous(),
            (FormKind::SubAdmin(form), KeyCode::Up)
                if form.focused() == SubAdminField::Permissions =>
            {
                form.route_cursor_up();
            }
            (FormKind::SubAdmin(form), KeyCode::Down)
                if form.focused() == SubAdminField::Permissions =>
            {
                form.route_cursor_down();
            }
            (FormKind::SubAdmin(form), KeyCode::Up) => form.focus_previous(),
            (FormKind::SubAdmin(form), KeyCode::Down) => form.focus_next(),
            (FormKind::Record(form), KeyCode::Enter) => {
                let resource = form.resource();
                return match form.submit() {
                    Ok(payload) => {
                        modal.submitting = true;
                        let mutation = match form.mode() {
                            FormMode::Create => Mutation::Create { resource, payload },
                            FormMode::Edit { id } => Mutation::Update {
                                resource,
                                id: id.clone(),
                                payload,
                            },
                        };
                        (Some(ConsoleCommand::Mutate(mutation)), true)
                    }
                    Err(e) => {
                        debug!(error = %e, "Form submission blocked");
                        (None, true)
                    }
                };
            }
            (FormKind::SubAdmin(form), KeyCode::Enter) => {
                return match form.submit() {
                    Ok(payload) => {
                        modal.submitting = true;
                        let mutation = Mutation::Create {
                            resource: Resource::SubAdmins,
                            payload,
                        };
                        (Some(ConsoleCommand::Mutate(mutation)), true)
                    }
                    Err(e) => {
                        debug!(error = %e, "Sub-admin submission blocked");
                        (None, true)
                    }
                };
            }
            (FormKind::Record(form), KeyCode::Backspace) => form.backspace(),
            (FormKind::SubAdmin(form), KeyCode::Backspace) => form.backspace(),
            (FormKind::Record(form), KeyCode::Char(c)) => form.input_char(c),
            (FormKind::SubAdmin(form), KeyCode::Char(c)) => form.input_char(c),
            _ => {}
        }
        (None, true)
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<ConsoleCommand> {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down
        ) {
            self.focus = ConsoleFocus::Table;
            if let Some((_, view)) = self.active_view_mut() {
                view.search.set_focused(false);
            }
            return None;
        }
        let (resource, view) = self.active_view_mut()?;
        if !view.search.handle_key(key) {
            return None;
        }
        let text = view.search.value().to_string();
        view.list.search_input(text.clone());
        Some(ConsoleCommand::ScheduleSearch { resource, text })
    }

    fn handle_action(
        &mut self,
        action: Action,
        notifications: &mut NotificationManager,
    ) -> Option<ConsoleCommand> {
        match action {
            Action::Quit => return Some(ConsoleCommand::Quit),
            Action::Logout => return Some(ConsoleCommand::Logout),
            Action::ToggleHelp => {
                self.modal = Some(Modal::Help);
                return None;
            }
            Action::NextScreen => return self.switch_tab(true),
            Action::PreviousScreen => return self.switch_tab(false),
            _ => {}
        }

        let (resource, view) = self.active_view_mut()?;
        let fetch = |ticket: Option<FetchTicket>| {
            ticket.map(|ticket| ConsoleCommand::Fetch { resource, ticket })
        };

        match action {
            Action::NavigateUp => {
                view.list.select_previous();
                view.table.select(view.list.selected());
                None
            }
            Action::NavigateDown => {
                view.list.select_next();
                view.table.select(view.list.selected());
                None
            }
            Action::NextPage => fetch(view.list.next_page()),
            Action::PreviousPage => fetch(view.list.previous_page()),
            Action::FirstPage => fetch(view.list.first_page()),
            Action::LastPage => fetch(view.list.last_page()),
            Action::IncreasePageSize => fetch(Some(view.list.increase_page_size())),
            Action::DecreasePageSize => fetch(Some(view.list.decrease_page_size())),
            Action::Refresh => fetch(Some(view.list.fetch())),
            Action::FocusSearch => {
                view.search.set_focused(true);
                self.focus = ConsoleFocus::Search;
                None
            }
            Action::ClearSearch => {
                view.search.clear();
                view.list.search_input(String::new());
                fetch(view.list.apply_search(""))
            }
            Action::Create => {
                if !resource.capabilities().create {
                    notifications.info(resource.title(), "Records cannot be added here");
                    return None;
                }
                let kind = if resource == Resource::SubAdmins {
                    FormKind::SubAdmin(SubAdminForm::new())
                } else {
                    FormKind::Record(RecordForm::create(resource))
                };
                self.open_form(kind);
                None
            }
            Action::Edit => {
                if !resource.capabilities().edit {
                    return None;
                }
                let form = RecordForm::edit(view.list.selected_row()?);
                self.open_form(FormKind::Record(form));
                None
            }
            Action::ToggleStatus => {
                if !resource.capabilities().toggle_status {
                    return None;
                }
                let record = view.list.selected_row()?;
                let Some(next) = record.status().and_then(|s| s.toggled()) else {
                    notifications.info(resource.title(), "This status cannot be toggled");
                    return None;
                };
                let pending = PendingAction {
                    resource,
                    id: record.id().to_string(),
                    label: record.label(),
                    kind: PendingKind::SetStatus(next),
                };
                self.confirm.open(pending);
                None
            }
            Action::Delete => {
                if !resource.capabilities().delete {
                    return None;
                }
                let record = view.list.selected_row()?;
                let pending = PendingAction {
                    resource,
                    id: record.id().to_string(),
                    label: record.label(),
                    kind: PendingKind::Delete,
                };
                self.confirm.open(pending);
                None
            }
            Action::Quit
            | Action::Logout
            | Action::ToggleHelp
            | Action::NextScreen
            | Action::PreviousScreen => None,
        }
    }

    fn open_form(&mut self, kind: FormKind) {
        self.modal = Some(Modal::Form(FormModal {
            kind,
            submitting: false,
        }));
    }

    /// Runs a search once its debounce window has passed.
    pub fn search_settled(&mut self, resource: Resource, text: &str) -> Option<ConsoleCommand> {
        let view = self.views.get_mut(&resource)?;
        let ticket = view.list.apply_search(text)?;
        Some(ConsoleCommand::Fetch { resource, ticket })
    }

    pub fn page_loaded(
        &mut self,
        resource: Resource,
        seq: u64,
        result: Result<Page<AdminRecord>, ApiError>,
        notifications: &mut NotificationManager,
    ) {
        if let Some(view) = self.views.get_mut(&resource) {
            view.list.apply(seq, result, notifications);
            view.table.select(view.list.selected());
        }
    }

    /// Settles any gate or form waiting on `resource` and refetches on success.
    pub fn mutation_settled(
        &mut self,
        resource: Resource,
        result: Result<Option<String>, ApiError>,
        success_message: &str,
        notifications: &mut NotificationManager,
    ) -> Option<ConsoleCommand> {
        if self
            .confirm
            .target()
            .is_some_and(|p| p.resource == resource && self.confirm.is_settling())
        {
            self.confirm.settle();
        }
        if matches!(&self.modal, Some(Modal::Form(m)) if m.submitting) {
            if result.is_ok() {
                self.modal = None;
            } else if let Some(Modal::Form(modal)) = &mut self.modal {
                modal.submitting = false;
            }
        }

        let view = self.views.get_mut(&resource)?;
        let ticket = view
            .list
            .mutation_settled(result, success_message, notifications)?;
        Some(ConsoleCommand::Fetch { resource, ticket })
    }
}

/// Renders [`ConsoleScreenState`].
pub struct ConsoleScreen;

impl StatefulWidget for ConsoleScreen {
    type State = ConsoleScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [header_area, tabs_area, search_area, table_area, pager_area, footer_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(area);

        render_header(state, header_area, buf);
        render_tabs(state, tabs_area, buf);

        if let Some(resource) = state.active_resource()
            && let Some(view) = state.views.get_mut(&resource)
        {
            (&view.search).render(search_area, buf);
            RecordTable::new(resource, &view.list).render(table_area, buf, &mut view.table);
            render_pager(view, pager_area, buf);
        } else {
            Paragraph::new("No screens are available for this account.")
                .style(Style::default().fg(Color::DarkGray))
                .render(table_area, buf);
        }

        render_footer(state, footer_area, buf);
        render_overlays(state, area, buf);
    }
}

fn render_header(state: &ConsoleScreenState, area: Rect, buf: &mut Buffer) {
    let loading = state
        .active_resource()
        .and_then(|r| state.views.get(&r))
        .is_some_and(|v| v.list.is_loading());
    let bar = StatusBar::info(format!(" Pawboard · {}", state.admin.display_name()))
        .loading(loading)
        .right(if state.admin.permissions.is_some() {
            "sub-admin "
        } else {
            "admin "
        });
    (&bar).render(area, buf);
}

fn render_tabs(state: &ConsoleScreenState, area: Rect, buf: &mut Buffer) {
    let titles: Vec<Line<'_>> = state.tabs.iter().map(|r| Line::from(r.title())).collect();
    Tabs::new(titles)
        .select(state.active)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|")
        .render(area, buf);
}

fn render_pager(view: &ResourceView, area: Rect, buf: &mut Buffer) {
    let query = view.list.query();
    let dim = Style::default().fg(Color::DarkGray);
    let line = Line::from(vec![
        Span::styled(
            format!(" Page {} of {}", query.page, view.list.page_count()),
            Style::default().fg(Color::White),
        ),
        Span::styled(format!(" · {} records", view.list.total()), dim),
        Span::styled(format!(" · {} per page", query.limit), dim),
        if query.search.is_empty() {
            Span::raw("")
        } else {
            Span::styled(
                format!(" · filtered by \"{}\"", query.search),
                Style::default().fg(Color::Yellow),
            )
        },
    ]);
    Paragraph::new(line).render(area, buf);
}

fn render_footer(state: &ConsoleScreenState, area: Rect, buf: &mut Buffer) {
    let context = if state.confirm.is_visible() {
        FocusContext::Confirm
    } else {
        match (&state.modal, state.focus) {
            (Some(Modal::Form(_)), _) => FocusContext::Form,
            (Some(Modal::Help), _) => FocusContext::Help,
            (None, ConsoleFocus::Search) => FocusContext::Search,
            (None, ConsoleFocus::Table) => FocusContext::Table,
        }
    };
    let keybinds = if context == FocusContext::Table {
        state.registry.keybinds(&TABLE_ACTIONS)
    } else {
        Vec::new()
    };
    FooterBar::new(&keybinds)
        .focus_context(context)
        .right_info(Some(context.hint()))
        .render(area, buf);
}

fn render_overlays(state: &ConsoleScreenState, area: Rect, buf: &mut Buffer) {
    match &state.modal {
        Some(Modal::Form(modal)) => match &modal.kind {
            FormKind::Record(form) => {
                RecordFormModal::new(form, modal.submitting).render(area, buf);
            }
            FormKind::SubAdmin(form) => {
                SubAdminFormModal::new(form, modal.submitting).render(area, buf);
            }
        },
        Some(Modal::Help) => {
            HelpOverlay::new(&state.registry.keybinds(&Action::ALL)).render(area, buf);
        }
        None => {}
    }
    if let Some(pending) = state.confirm.target() {
        ConfirmDialog::new(pending, state.confirm.is_settling()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use serde_json::json;

    use super::*;
    use crate::domain::Page;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn console(admin: AdminProfile) -> ConsoleScreenState {
        ConsoleScreenState::new(
            admin,
            &FeatureFlags::default(),
            10,
            CommandRegistry::default(),
        )
    }

    fn breeds_page(names: &[&str]) -> Page<AdminRecord> {
        Page {
            rows: names
                .iter()
                .enumerate()
                .map(|(i, n)| {
                    AdminRecord::from_json(
                        Resource::Breeds,
                        json!({"id": i + 1, "name": n, "status": "active"}),
                    )
                    .unwrap()
                })
                .collect(),
            total: 25,
            page: 1,
            limit: 10,
        }
    }

    /// Opens the Breeds tab and loads one page.
    fn loaded_breeds(notifications: &mut NotificationManager) -> ConsoleScreenState {
        let mut state = console(AdminProfile::new("Root", "root@pawboard.io"));
        state.open_active();
        state.handle_key(key(KeyCode::Tab), notifications);
        let Some(ConsoleCommand::Fetch { ticket, .. }) =
            state.handle_key(key(KeyCode::Tab), notifications)
        else {
            panic!("expected breeds fetch");
        };
        assert_eq!(state.active_resource(), Some(Resource::Breeds));
        state.page_loaded(
            Resource::Breeds,
            ticket.seq,
            Ok(breeds_page(&["Akita", "Pug"])),
            notifications,
        );
        state
    }

    #[test]
    fn test_tabs_follow_features_and_permissions() {
        let mut features = FeatureFlags::default();
        features.gifting = false;
        let admin: AdminProfile = serde_json::from_value(
            json!({"name": "Kim", "permissions": ["faqs", "gifting", "reports"]}),
        )
        .unwrap();

        let state =
            ConsoleScreenState::new(admin, &features, 10, CommandRegistry::default());
        assert_eq!(state.tabs(), &[Resource::Faqs, Resource::Reports]);
    }

    #[test]
    fn test_first_open_fetches_once() {
        let mut state = console(AdminProfile::new("Root", "root@pawboard.io"));
        assert!(matches!(
            state.open_active(),
            Some(ConsoleCommand::Fetch {
                resource: Resource::Dogs,
                ..
            })
        ));
        assert!(state.open_active().is_none());
    }

    #[test]
    fn test_search_typing_schedules_debounce() {
        let mut notifications = NotificationManager::default();
        let mut state = loaded_breeds(&mut notifications);

        state.handle_key(key(KeyCode::Char('/')), &mut notifications);
        assert_eq!(state.focus(), ConsoleFocus::Search);

        let command = state.handle_key(key(KeyCode::Char('p')), &mut notifications);
        assert_eq!(
            command,
            Some(ConsoleCommand::ScheduleSearch {
                resource: Resource::Breeds,
                text: "p".to_string()
            })
        );
        state.handle_key(key(KeyCode::Char('u')), &mut notifications);

        assert!(state.search_settled(Resource::Breeds, "p").is_none());
        let Some(ConsoleCommand::Fetch { ticket, .. }) =
            state.search_settled(Resource::Breeds, "pu")
        else {
            panic!("expected search fetch");
        };
        assert_eq!(ticket.query.search, "pu");
        assert_eq!(ticket.query.page, 1);
    }

    #[test]
    fn test_delete_goes_through_confirmation() {
        let mut notifications = NotificationManager::default();
        let mut state = loaded_breeds(&mut notifications);

        state.handle_key(key(KeyCode::Down), &mut notifications);
        assert!(
            state
                .handle_key(key(KeyCode::Char('d')), &mut notifications)
                .is_none()
        );
        assert!(state.confirm_gate().is_visible());

        let command = state.handle_key(key(KeyCode::Enter), &mut notifications);
        assert_eq!(
            command,
            Some(ConsoleCommand::Mutate(Mutation::Delete {
                resource: Resource::Breeds,
                id: "2".to_string()
            }))
        );
        assert!(state.confirm_gate().is_settling());
        assert!(
            state
                .handle_key(key(KeyCode::Enter), &mut notifications)
                .is_none()
        );

        let refetch =
            state.mutation_settled(Resource::Breeds, Ok(None), "Breed deleted", &mut notifications);
        assert!(!state.confirm_gate().is_visible());
        assert!(matches!(refetch, Some(ConsoleCommand::Fetch { .. })));
    }

    #[test]
    fn test_cancelled_confirmation_has_no_effect() {
        let mut notifications = NotificationManager::default();
        let mut state = loaded_breeds(&mut notifications);

        state.handle_key(key(KeyCode::Char('s')), &mut notifications);
        assert!(state.confirm_gate().is_visible());
        assert!(
            state
                .handle_key(key(KeyCode::Esc), &mut notifications)
                .is_none()
        );
        assert!(!state.confirm_gate().is_visible());
    }

    #[test]
    fn test_form_stays_open_on_failure() {
        let mut notifications = NotificationManager::default();
        let mut state = loaded_breeds(&mut notifications);

        state.handle_key(key(KeyCode::Char('a')), &mut notifications);
        for c in "Beagle".chars() {
            state.handle_key(key(KeyCode::Char(c)), &mut notifications);
        }
        let command = state.handle_key(key(KeyCode::Enter), &mut notifications);
        assert!(matches!(
            command,
            Some(ConsoleCommand::Mutate(Mutation::Create {
                resource: Resource::Breeds,
                ..
            }))
        ));

        let refetch = state.mutation_settled(
            Resource::Breeds,
            Err(ApiError::rejected("Breed already exists")),
            "Breed created",
            &mut notifications,
        );
        assert!(refetch.is_none());
        assert!(matches!(
            state.modal(),
            Some(Modal::Form(FormModal {
                submitting: false,
                ..
            }))
        ));
        assert_eq!(
            notifications.current_notification().unwrap().message,
            "Breed already exists"
        );
    }

    #[test]
    fn test_page_size_change_fetches_from_page_one() {
        let mut notifications = NotificationManager::default();
        let mut state = loaded_breeds(&mut notifications);

        state.handle_key(key(KeyCode::Right), &mut notifications);
        let Some(ConsoleCommand::Fetch { ticket, .. }) =
            state.handle_key(key(KeyCode::Char('+')), &mut notifications)
        else {
            panic!("expected fetch");
        };
        assert_eq!(ticket.query.limit, 25);
        assert_eq!(ticket.query.page, 1);
    }

    #[test]
    fn test_likes_cannot_be_created() {
        let mut notifications = NotificationManager::default();
        let mut state = console(AdminProfile::new("Root", "root@pawboard.io"));
        for _ in 0..4 {
            state.handle_key(key(KeyCode::Tab), &mut notifications);
        }
        assert_eq!(state.active_resource(), Some(Resource::Likes));

        state.handle_key(key(KeyCode::Char('a')), &mut notifications);
        assert!(state.modal().is_none());
        assert!(notifications.has_notifications());
    }
}
