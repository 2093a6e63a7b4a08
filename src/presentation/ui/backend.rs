use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::dto::{LoginRequest, LoginResponse, Mutation};
use crate::application::use_cases::{LoginUseCase, ResourceUseCase};
use crate::domain::{AdminRecord, ApiError, AuthToken, Page, PageQuery, Resource};

/// Results reported back to the event loop.
#[derive(Debug)]
pub enum Action {
    LoginSucceeded(LoginResponse),
    LoginFailed(ApiError),
    LoggedOut,
    PageLoaded {
        session: u64,
        resource: Resource,
        seq: u64,
        result: Result<Page<AdminRecord>, ApiError>,
    },
    MutationSettled {
        session: u64,
        resource: Resource,
        result: Result<Option<String>, ApiError>,
        success_message: String,
    },
}

pub enum BackendCommand {
    Login(LoginRequest),
    Logout,
    FetchPage {
        session: u64,
        token: AuthToken,
        resource: Resource,
        seq: u64,
        query: PageQuery,
    },
    Mutate {
        session: u64,
        token: AuthToken,
        mutation: Mutation,
    },
}

#[derive(Clone)]
struct Worker {
    login: LoginUseCase,
    resources: ResourceUseCase,
    action_tx: mpsc::UnboundedSender<Action>,
}

/// Runs API calls off the event loop.
///
/// Each command executes in its own task so a slow list fetch never delays a
/// newer one; ordering between responses is resolved by sequence numbers.
/// Data results echo the session number of their command.
pub struct Backend {
    worker: Worker,
    command_rx: mpsc::UnboundedReceiver<BackendCommand>,
}

impl Backend {
    pub fn new(
        login: LoginUseCase,
        resources: ResourceUseCase,
        command_rx: mpsc::UnboundedReceiver<BackendCommand>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            worker: Worker {
                login,
                resources,
                action_tx,
            },
            command_rx,
        }
    }

    pub async fn run(mut self) {
        info!("Backend worker started");
        while let Some(command) = self.command_rx.recv().await {
            let worker = self.worker.clone();
            tokio::spawn(async move { worker.handle_command(command).await });
        }
        info!("Backend worker stopped");
    }
}

impl Worker {
    async fn handle_command(&self, command: BackendCommand) {
        match command {
            BackendCommand::Login(request) => match self.login.execute(request).await {
                Ok(response) => {
                    debug!(admin = %response.admin.display_name(), "Login completed");
                    let _ = self.action_tx.send(Action::LoginSucceeded(response));
                }
                Err(e) => {
                    let _ = self.action_tx.send(Action::LoginFailed(e));
                }
            },
            BackendCommand::Logout => {
                if let Err(e) = self.login.logout().await {
                    warn!(error = %e, "Failed to clear stored session");
                }
                let _ = self.action_tx.send(Action::LoggedOut);
            }
            BackendCommand::FetchPage {
                session,
                token,
                resource,
                seq,
                query,
            } => {
                let result = self.resources.fetch(&token, resource, &query).await;
                if let Err(e) = &result {
                    debug!(%resource, seq, error = %e, "Page fetch failed");
                }
                let _ = self.action_tx.send(Action::PageLoaded {
                    session,
                    resource,
                    seq,
                    result,
                });
            }
            BackendCommand::Mutate {
                session,
                token,
                mutation,
            } => {
                let resource = mutation.resource();
                let success_message = mutation.success_message();
                let result = self.resources.mutate(&token, mutation).await;
                let _ = self.action_tx.send(Action::MutationSettled {
                    session,
                    resource,
                    result,
                    success_message,
                });
            }
        }
    }
}
