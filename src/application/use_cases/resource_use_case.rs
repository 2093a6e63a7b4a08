//! Reads and writes against one admin resource.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::Mutation;
use crate::domain::ports::AdminApiPort;
use crate::domain::{AdminRecord, ApiError, AuthToken, Page, PageQuery, Resource};

/// Runs list fetches and mutations through the admin API port.
#[derive(Clone)]
pub struct ResourceUseCase {
    api: Arc<dyn AdminApiPort>,
}

impl ResourceUseCase {
    #[must_use]
    pub fn new(api: Arc<dyn AdminApiPort>) -> Self {
        Self { api }
    }

    /// Fetches one page of `resource`.
    ///
    /// # Errors
    /// Returns the API error unchanged.
    pub async fn fetch(
        &self,
        token: &AuthToken,
        resource: Resource,
        query: &PageQuery,
    ) -> Result<Page<AdminRecord>, ApiError> {
        debug!(%resource, page = query.page, limit = query.limit, "Fetching page");
        self.api.list(token, resource, query).await
    }

    /// Executes a single write request.
    ///
    /// # Errors
    /// Returns the API error unchanged.
    pub async fn mutate(
        &self,
        token: &AuthToken,
        mutation: Mutation,
    ) -> Result<Option<String>, ApiError> {
        let resource = mutation.resource();
        let result = match mutation {
            Mutation::Create { payload, .. } => self.api.create(token, resource, payload).await,
            Mutation::Update { id, payload, .. } => {
                self.api.update(token, resource, &id, payload).await
            }
            Mutation::SetStatus { id, status, .. } => {
                self.api.set_status(token, resource, &id, status).await
            }
            Mutation::Delete { id, .. } => self.api.delete(token, resource, &id).await,
        };
        match &result {
            Ok(_) => info!(%resource, "Mutation succeeded"),
            Err(e) => warn!(%resource, error = %e, "Mutation failed"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use serde_json::json;

    use super::*;
    use crate::application::dto::{PendingAction, PendingKind};
    use crate::application::services::{ConfirmGate, ListController, NotificationManager};
    use crate::domain::ports::mocks::MockAdminApiPort;

    fn token() -> AuthToken {
        AuthToken::new_unchecked("test-session-token-0001")
    }

    fn breed(id: &str, name: &str) -> AdminRecord {
        AdminRecord::from_json(Resource::Breeds, json!({"_id": id, "name": name})).unwrap()
    }

    fn page(rows: Vec<AdminRecord>, total: u64, page: u32, limit: u32) -> Page<AdminRecord> {
        Page {
            rows,
            total,
            page,
            limit,
        }
    }

    #[tokio::test]
    async fn test_confirmed_delete_calls_endpoint_once_then_refetches() {
        let mut api = MockAdminApiPort::new();
        let expected_query = PageQuery::first(25).with_search("bea").with_page(2);

        api.expect_list()
            .withf(|_, resource, query| *resource == Resource::Breeds && query.page == 1)
            .times(1)
            .returning(|_, _, _| Ok(page(vec![breed("b1", "Beagle")], 30, 1, 25)));
        let second_page = expected_query.clone();
        api.expect_list()
            .withf(move |_, resource, query| *resource == Resource::Breeds && *query == second_page)
            .times(2)
            .returning(|_, _, _| {
                Ok(page(
                    vec![breed("b7", "Bearded Collie"), breed("b8", "Beauceron")],
                    27,
                    2,
                    25,
                ))
            });
        api.expect_delete()
            .with(eq(token()), eq(Resource::Breeds), eq("b7"))
            .times(1)
            .returning(|_, _, _| Ok(None));

        let use_case = ResourceUseCase::new(Arc::new(api));
        let mut notifications = NotificationManager::default();
        let mut list = ListController::new(25);
        let mut gate = ConfirmGate::new();

        list.search_input("bea");
        let ticket = list.apply_search("bea").unwrap();
        let result = use_case.fetch(&token(), Resource::Breeds, &ticket.query).await;
        list.apply(ticket.seq, result, &mut notifications);

        let ticket = list.next_page().unwrap();
        assert_eq!(ticket.query, expected_query);
        let result = use_case.fetch(&token(), Resource::Breeds, &ticket.query).await;
        list.apply(ticket.seq, result, &mut notifications);

        let selected = list.selected_row().unwrap();
        gate.open(PendingAction {
            resource: Resource::Breeds,
            id: selected.id().to_string(),
            label: selected.label(),
            kind: PendingKind::Delete,
        });

        let mutation = gate.confirm().unwrap().into_mutation();
        let message = mutation.success_message();
        let result = use_case.mutate(&token(), mutation).await;
        gate.settle();
        assert!(gate.confirm().is_none());

        let refetch = list
            .mutation_settled(result, &message, &mut notifications)
            .unwrap();
        assert_eq!(refetch.query, expected_query);
        let result = use_case.fetch(&token(), Resource::Breeds, &refetch.query).await;
        list.apply(refetch.seq, result, &mut notifications);

        assert!(!gate.is_visible());
        assert_eq!(
            notifications.current_notification().unwrap().message,
            "Breed deleted"
        );
    }

    #[tokio::test]
    async fn test_status_toggle_sends_new_status() {
        let mut api = MockAdminApiPort::new();
        api.expect_set_status()
            .with(
                eq(token()),
                eq(Resource::Hobbies),
                eq("h1"),
                eq(crate::domain::RecordStatus::Inactive),
            )
            .times(1)
            .returning(|_, _, _, _| Ok(Some("Hobby updated".into())));

        let use_case = ResourceUseCase::new(Arc::new(api));
        let result = use_case
            .mutate(
                &token(),
                Mutation::SetStatus {
                    resource: Resource::Hobbies,
                    id: "h1".into(),
                    status: crate::domain::RecordStatus::Inactive,
                },
            )
            .await;

        assert_eq!(result, Ok(Some("Hobby updated".into())));
    }

    #[tokio::test]
    async fn test_failed_create_is_returned() {
        let mut api = MockAdminApiPort::new();
        api.expect_create()
            .times(1)
            .returning(|_, _, _| Err(ApiError::rejected("FAQ already exists")));

        let use_case = ResourceUseCase::new(Arc::new(api));
        let mut payload = crate::domain::ports::RecordPayload::new();
        payload.insert("question".into(), json!("Why?"));

        let result = use_case
            .mutate(
                &token(),
                Mutation::Create {
                    resource: Resource::Faqs,
                    payload,
                },
            )
            .await;

        assert_eq!(result, Err(ApiError::rejected("FAQ already exists")));
    }
}
