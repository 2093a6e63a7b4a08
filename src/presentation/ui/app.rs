//! Main application orchestrator.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::services::{Debouncer, NotificationManager};
use crate::application::use_cases::{LoginUseCase, ResolveTokenUseCase, ResourceUseCase};
use crate::domain::entities::AdminProfile;
use crate::domain::keybinding::Action as KeyAction;
use crate::domain::ports::{AdminApiPort, AuthPort, TokenStoragePort};
use crate::domain::{ApiError, AuthToken, Resource};
use crate::infrastructure::config::{AppConfig, FeatureFlags};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::backend::{Action, Backend, BackendCommand};
use crate::presentation::ui::console_screen::{ConsoleCommand, ConsoleScreen, ConsoleScreenState};
use crate::presentation::ui::login_screen::{LoginAction, LoginScreen};
use crate::presentation::ui::notification_popup::NotificationPopup;

const NOTIFICATION_TICK_RATE: Duration = Duration::from_millis(250);
const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Login,
    Console,
    Exiting,
}

enum CurrentScreen {
    Login(LoginScreen),
    Console(Box<ConsoleScreenState>),
}

/// Settings the console is rebuilt from on every sign-in.
struct ConsoleSettings {
    features: FeatureFlags,
    page_size: u32,
    keybindings: HashMap<String, KeyAction>,
}

pub struct App {
    state: AppState,
    screen: CurrentScreen,
    login_use_case: LoginUseCase,
    resolve_token_use_case: ResolveTokenUseCase,
    resource_use_case: ResourceUseCase,
    settings: ConsoleSettings,
    current_token: Option<AuthToken>,
    notifications: NotificationManager,
    command_tx: mpsc::UnboundedSender<BackendCommand>,
    command_rx: Option<mpsc::UnboundedReceiver<BackendCommand>>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Bumped on every sign-in and sign-out; results from older sessions are dropped.
    session: u64,
    /// One timer per search field.
    searches: HashMap<Resource, Debouncer<(Resource, String)>>,
    search_delay: Duration,
    search_tx: mpsc::UnboundedSender<(Resource, String)>,
    search_rx: mpsc::UnboundedReceiver<(Resource, String)>,
}

impl App {
    #[must_use]
    pub fn new(
        auth_port: Arc<dyn AuthPort>,
        api_port: Arc<dyn AdminApiPort>,
        storage_port: Arc<dyn TokenStoragePort>,
        config: &AppConfig,
    ) -> Self {
        let login_use_case = LoginUseCase::new(auth_port, storage_port.clone());
        let resolve_token_use_case = ResolveTokenUseCase::new(storage_port);
        let resource_use_case = ResourceUseCase::new(api_port);
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (search_tx, search_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::Login,
            screen: CurrentScreen::Login(LoginScreen::new()),
            login_use_case,
            resolve_token_use_case,
            resource_use_case,
            settings: ConsoleSettings {
                features: config.features,
                page_size: config.page_size,
                keybindings: config.keybindings.clone(),
            },
            current_token: None,
            notifications: NotificationManager::new(config.notification_duration()),
            command_tx,
            command_rx: Some(command_rx),
            action_tx,
            action_rx,
            session: 0,
            searches: HashMap::new(),
            search_delay: config.search_debounce(),
            search_tx,
            search_rx,
        }
    }

    /// # Errors
    /// Returns error if terminal drawing or token resolution fails.
    pub async fn run(
        mut self,
        terminal: &mut DefaultTerminal,
        cli_token: Option<String>,
    ) -> color_eyre::Result<()> {
        self.start_backend();

        if let Some(resolved) = self.resolve_token_use_case.execute(cli_token).await? {
            info!(source = %resolved.source, "Found existing session");
            self.notifications.info(
                "Signed in",
                format!("Session restored from {}", resolved.source),
            );
            self.enter_console(AdminProfile::new("Administrator", ""), resolved.token);
        }

        self.run_event_loop(terminal).await?;

        self.searches.clear();
        info!("Application exiting normally");
        Ok(())
    }

    fn start_backend(&mut self) {
        if let Some(command_rx) = self.command_rx.take() {
            let backend = Backend::new(
                self.login_use_case.clone(),
                self.resource_use_case.clone(),
                command_rx,
                self.action_tx.clone(),
            );
            tokio::spawn(backend.run());
        }
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut notification_interval = interval(NOTIFICATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some((resource, text)) = self.search_rx.recv() => {
                    self.handle_search_settled(resource, &text);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(&event) == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = notification_interval.tick() => {
                    if self.notifications.has_notifications() {
                        self.notifications.tick();
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        match EventHandler::key_press(event) {
            Some(key) if EventHandler::is_force_quit(&key) => EventResult::Exit,
            Some(key) => self.handle_key(key),
            None => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        match &mut self.screen {
            CurrentScreen::Login(screen) => match screen.handle_key(key) {
                LoginAction::Submit => {
                    let request = screen.take_request();
                    screen.set_validating();
                    debug!(email = %request.email, "Submitting login");
                    self.send(BackendCommand::Login(request));
                    EventResult::Continue
                }
                LoginAction::Quit => EventResult::Exit,
                LoginAction::None => EventResult::Continue,
            },
            CurrentScreen::Console(state) => {
                let command = state.handle_key(key, &mut self.notifications);
                match command {
                    Some(command) => self.dispatch(command),
                    None => EventResult::Continue,
                }
            }
        }
    }

    fn handle_search_settled(&mut self, resource: Resource, text: &str) {
        let CurrentScreen::Console(state) = &mut self.screen else {
            return;
        };
        if let Some(command) = state.search_settled(resource, text) {
            self.dispatch(command);
        }
    }

    /// Performs a console request, attaching the session token where needed.
    fn dispatch(&mut self, command: ConsoleCommand) -> EventResult {
        match command {
            ConsoleCommand::Fetch { resource, ticket } => {
                let Some(token) = self.current_token.clone() else {
                    warn!(%resource, "Fetch requested without a session");
                    self.transition_to_login(Some(SESSION_EXPIRED));
                    return EventResult::Continue;
                };
                self.send(BackendCommand::FetchPage {
                    session: self.session,
                    token,
                    resource,
                    seq: ticket.seq,
                    query: ticket.query,
                });
            }
            ConsoleCommand::Mutate(mutation) => {
                let Some(token) = self.current_token.clone() else {
                    self.transition_to_login(Some(SESSION_EXPIRED));
                    return EventResult::Continue;
                };
                self.send(BackendCommand::Mutate {
                    session: self.session,
                    token,
                    mutation,
                });
            }
            ConsoleCommand::ScheduleSearch { resource, text } => {
                let (delay, tx) = (self.search_delay, &self.search_tx);
                self.searches
                    .entry(resource)
                    .or_insert_with(|| Debouncer::new(delay, tx.clone()))
                    .call((resource, text));
            }
            ConsoleCommand::Logout => {
                info!("Signing out");
                self.send(BackendCommand::Logout);
                self.transition_to_login(None);
            }
            ConsoleCommand::Quit => return EventResult::Exit,
        }
        EventResult::Continue
    }

    fn send(&self, command: BackendCommand) {
        if self.command_tx.send(command).is_err() {
            warn!("Backend worker is not running");
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::LoginSucceeded(response) => {
                info!(admin = %response.admin.display_name(), "Signed in");
                if !response.token_persisted {
                    debug!("Session token kept in memory only");
                }
                self.notifications.success(
                    "Signed in",
                    format!("Welcome, {}", response.admin.display_name()),
                );
                self.enter_console(response.admin, response.token);
            }
            Action::LoginFailed(error) => {
                warn!(error = %error, "Login failed");
                self.notifications.set_offline(error.is_network_error());
                if let CurrentScreen::Login(screen) = &mut self.screen {
                    screen.set_error(login_error_message(&error));
                }
            }
            Action::LoggedOut => debug!("Stored session cleared"),
            Action::PageLoaded { session, .. } | Action::MutationSettled { session, .. }
                if session != self.session =>
            {
                debug!(session, current = self.session, "Dropping result from an ended session");
            }
            Action::PageLoaded {
                resource,
                seq,
                result,
                ..
            } => {
                if let Err(error) = &result {
                    if error.is_unauthorized() {
                        self.session_expired();
                        return;
                    }
                    self.notifications.set_offline(error.is_network_error());
                } else {
                    self.notifications.set_offline(false);
                }
                if let CurrentScreen::Console(state) = &mut self.screen {
                    state.page_loaded(resource, seq, result, &mut self.notifications);
                }
            }
            Action::MutationSettled {
                resource,
                result,
                success_message,
                ..
            } => {
                if result.as_ref().is_err_and(ApiError::is_unauthorized) {
                    self.session_expired();
                    return;
                }
                let command = match &mut self.screen {
                    CurrentScreen::Console(state) => state.mutation_settled(
                        resource,
                        result,
                        &success_message,
                        &mut self.notifications,
                    ),
                    CurrentScreen::Login(_) => None,
                };
                if let Some(command) = command {
                    self.dispatch(command);
                }
            }
        }
    }

    fn enter_console(&mut self, admin: AdminProfile, token: AuthToken) {
        let registry = CommandRegistry::with_overrides(&self.settings.keybindings);
        let mut state = ConsoleScreenState::new(
            admin,
            &self.settings.features,
            self.settings.page_size,
            registry,
        );
        let first_fetch = state.open_active();

        self.session += 1;
        self.current_token = Some(token);
        self.state = AppState::Console;
        self.screen = CurrentScreen::Console(Box::new(state));

        if let Some(command) = first_fetch {
            self.dispatch(command);
        }
    }

    fn session_expired(&mut self) {
        warn!("Session rejected by the server");
        self.send(BackendCommand::Logout);
        self.transition_to_login(Some(SESSION_EXPIRED));
    }

    fn transition_to_login(&mut self, message: Option<&str>) {
        self.searches.clear();
        self.session += 1;
        self.current_token = None;
        self.state = AppState::Login;
        self.screen = CurrentScreen::Login(match message {
            Some(message) => LoginScreen::with_error(message),
            None => LoginScreen::new(),
        });
    }

    fn render(&mut self, frame: &mut Frame) {
        match &mut self.screen {
            CurrentScreen::Login(screen) => {
                frame.render_widget(&*screen, frame.area());
            }
            CurrentScreen::Console(state) => {
                frame.render_stateful_widget(ConsoleScreen, frame.area(), state);
            }
        }

        if let Some(notification) = self.notifications.current_notification() {
            frame.render_widget(NotificationPopup::new(notification), frame.area());
        }
    }
}

fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::InvalidInput { message } | ApiError::Rejected { message } => message.clone(),
        ApiError::Unauthorized { .. } => "Invalid email or password.".to_string(),
        ApiError::Network { message } => format!("Cannot reach the server: {message}"),
        ApiError::Storage { message } => {
            format!("Signed in, but the session could not be saved: {message}")
        }
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::application::dto::LoginResponse;
    use crate::domain::ports::mocks::{MockAdminApiPort, MockAuthPort, MockTokenStorage};

    fn app() -> App {
        App::new(
            Arc::new(MockAuthPort::new(true)),
            Arc::new(MockAdminApiPort::new()),
            Arc::new(MockTokenStorage::new()),
            &AppConfig::default(),
        )
    }

    fn token() -> AuthToken {
        AuthToken::new("pawboard-session-token-0001").unwrap()
    }

    fn sign_in(app: &mut App) {
        app.handle_action(Action::LoginSucceeded(LoginResponse {
            admin: AdminProfile::new("Root", "root@pawboard.io"),
            token: token(),
            token_persisted: true,
        }));
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_app_starts_on_login() {
        let app = app();
        assert_eq!(app.state, AppState::Login);
        assert!(app.current_token.is_none());
    }

    #[test]
    fn test_login_success_opens_console_and_fetches_first_tab() {
        let mut app = app();
        let mut commands = app.command_rx.take().unwrap();

        sign_in(&mut app);

        assert_eq!(app.state, AppState::Console);
        assert!(app.notifications.has_notifications());
        match commands.try_recv() {
            Ok(BackendCommand::FetchPage {
                resource, query, ..
            }) => {
                assert_eq!(resource, Resource::ALL[0]);
                assert_eq!(query.page, 1);
            }
            _ => panic!("expected a page fetch"),
        }
    }

    #[test]
    fn test_login_failure_shows_error() {
        let mut app = app();
        app.handle_action(Action::LoginFailed(ApiError::rejected("Invalid credentials")));

        let CurrentScreen::Login(screen) = &app.screen else {
            panic!("expected login screen");
        };
        assert_eq!(
            screen.state(),
            crate::presentation::ui::login_screen::LoginState::Error
        );
        assert_eq!(app.state, AppState::Login);
    }

    #[test]
    fn test_unauthorized_page_returns_to_login() {
        let mut app = app();
        let mut commands = app.command_rx.take().unwrap();
        sign_in(&mut app);
        let _ = commands.try_recv();

        app.handle_action(Action::PageLoaded {
            resource: Resource::ALL[0],
            session: app.session,
            seq: 1,
            result: Err(ApiError::unauthorized("jwt expired")),
        });

        assert_eq!(app.state, AppState::Login);
        assert!(app.current_token.is_none());
        assert!(matches!(commands.try_recv(), Ok(BackendCommand::Logout)));
    }

    #[test]
    fn test_network_failure_marks_offline() {
        let mut app = app();
        sign_in(&mut app);

        app.handle_action(Action::PageLoaded {
            resource: Resource::ALL[0],
            session: app.session,
            seq: 1,
            result: Err(ApiError::network("connection refused")),
        });

        assert!(app.notifications.is_offline());
        assert_eq!(app.state, AppState::Console);
    }

    #[test]
    fn test_logout_key_clears_session() {
        let mut app = app();
        let mut commands = app.command_rx.take().unwrap();
        sign_in(&mut app);
        let _ = commands.try_recv();

        let result = app.dispatch(ConsoleCommand::Logout);

        assert_eq!(result, EventResult::Continue);
        assert_eq!(app.state, AppState::Login);
        assert!(matches!(commands.try_recv(), Ok(BackendCommand::Logout)));
    }

    #[test]
    fn test_login_submit_sends_credentials() {
        let mut app = app();
        let mut commands = app.command_rx.take().unwrap();

        for c in "root@pawboard.io".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        for c in "Secr3t!".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        match commands.try_recv() {
            Ok(BackendCommand::Login(request)) => {
                assert_eq!(request.email, "root@pawboard.io");
                assert_eq!(request.password.as_str(), "Secr3t!");
            }
            _ => panic!("expected a login command"),
        }
    }

    #[test]
    fn test_force_quit_exits_from_any_screen() {
        let mut app = app();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(app.handle_terminal_event(&event), EventResult::Exit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_search_fetches_once() {
        let mut app = app();
        let mut commands = app.command_rx.take().unwrap();
        sign_in(&mut app);
        let _ = commands.try_recv();

        app.handle_key(key(KeyCode::Char('/')));
        for c in "rex".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        tokio::time::advance(AppConfig::default().search_debounce() + Duration::from_millis(10))
            .await;

        let (settled_resource, text) = app.search_rx.recv().await.unwrap();
        assert_eq!(settled_resource, Resource::ALL[0]);
        assert_eq!(text, "rex");
        app.handle_search_settled(settled_resource, &text);

        match commands.try_recv() {
            Ok(BackendCommand::FetchPage { query, .. }) => assert_eq!(query.search, "rex"),
            _ => panic!("expected a search fetch"),
        }
        assert!(app.search_rx.try_recv().is_err());
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn active_resource(app: &App) -> Resource {
        let CurrentScreen::Console(state) = &app.screen else {
            panic!("expected console screen");
        };
        state.active_resource().unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_searches_in_different_tabs_settle_independently() {
        let mut app = app();
        let mut commands = app.command_rx.take().unwrap();
        sign_in(&mut app);
        let first = active_resource(&app);

        app.handle_key(key(KeyCode::Char('/')));
        type_text(&mut app, "rex");
        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Tab));
        let second = active_resource(&app);
        assert_ne!(first, second);

        app.handle_key(key(KeyCode::Char('/')));
        type_text(&mut app, "q");
        while commands.try_recv().is_ok() {}

        tokio::time::advance(AppConfig::default().search_debounce() * 2).await;

        let mut settled = Vec::new();
        for _ in 0..2 {
            let (resource, text) = app.search_rx.recv().await.unwrap();
            app.handle_search_settled(resource, &text);
            settled.push((resource, text));
        }
        settled.sort();
        let mut expected = vec![(first, "rex".to_string()), (second, "q".to_string())];
        expected.sort();
        assert_eq!(settled, expected);

        let mut fetched = Vec::new();
        while let Ok(command) = commands.try_recv() {
            if let BackendCommand::FetchPage {
                resource, query, ..
            } = command
            {
                fetched.push((resource, query.search));
            }
        }
        fetched.sort();
        assert_eq!(fetched, expected);

        let CurrentScreen::Console(state) = &app.screen else {
            panic!("expected console screen");
        };
        assert_eq!(state.view(first).unwrap().list.query().search, "rex");
    }

    #[test]
    fn test_results_from_previous_session_are_dropped() {
        let mut app = app();
        let mut commands = app.command_rx.take().unwrap();
        sign_in(&mut app);
        let old_session = app.session;
        app.dispatch(ConsoleCommand::Logout);
        sign_in(&mut app);
        while commands.try_recv().is_ok() {}

        app.handle_action(Action::PageLoaded {
            session: old_session,
            resource: Resource::ALL[0],
            seq: 1,
            result: Err(ApiError::unauthorized("old token")),
        });
        app.handle_action(Action::MutationSettled {
            session: old_session,
            resource: Resource::ALL[0],
            result: Ok(None),
            success_message: "Dog deleted".to_string(),
        });

        assert_eq!(app.state, AppState::Console);
        assert!(app.current_token.is_some());
        assert!(commands.try_recv().is_err());
    }

    #[test]
    fn test_session_number_changes_on_sign_in_and_out() {
        let mut app = app();
        let mut commands = app.command_rx.take().unwrap();
        sign_in(&mut app);
        let signed_in = app.session;
        match commands.try_recv() {
            Ok(BackendCommand::FetchPage { session, .. }) => assert_eq!(session, signed_in),
            _ => panic!("expected a page fetch"),
        }

        app.dispatch(ConsoleCommand::Logout);
        assert_ne!(app.session, signed_in);
    }
}
