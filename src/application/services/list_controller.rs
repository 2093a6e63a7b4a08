//! Server-paginated, searchable list state for one resource table.
//!
//! The controller never talks to the network itself. Every operation that needs
//! data returns a [`FetchTicket`]; the caller runs the request and hands the
//! outcome back to [`ListController::apply`] together with the ticket's sequence
//! number. Responses to anything but the most recently issued ticket are
//! discarded, so a slow page-1 response cannot overwrite a newer page-2 view.

use tracing::{debug, warn};

use super::notification_manager::NotificationManager;
use crate::domain::pagination::{self, Page, PageQuery};
use crate::domain::ApiError;

/// Request the caller must execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: PageQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// What [`ListController::apply`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Loaded,
    Failed,
    /// A newer request was issued after this one.
    Stale,
}

#[derive(Debug)]
pub struct ListController<T> {
    query: PageQuery,
    search_text: String,
    rows: Vec<T>,
    total: u64,
    state: LoadState,
    selected: Option<usize>,
    issued: u64,
}

impl<T> ListController<T> {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            query: PageQuery::first(page_size),
            search_text: String::new(),
            rows: Vec::new(),
            total: 0,
            state: LoadState::Idle,
            selected: None,
            issued: 0,
        }
    }

    fn issue(&mut self, query: PageQuery) -> FetchTicket {
        self.issued += 1;
        self.query = query.clone();
        self.state = LoadState::Loading;
        debug!(
            seq = self.issued,
            page = query.page,
            limit = query.limit,
            search = %query.search,
            "Issuing list fetch"
        );
        FetchTicket {
            seq: self.issued,
            query,
        }
    }

    /// Fetches with the current parameters (initial load, manual refresh).
    pub fn fetch(&mut self) -> FetchTicket {
        self.issue(self.query.clone())
    }

    /// Re-runs the last-used parameters after a mutation.
    pub fn refetch(&mut self) -> FetchTicket {
        self.fetch()
    }

    /// Moves to `page`, clamped to the known page range.
    ///
    /// Returns `None` when the page does not change.
    pub fn set_page(&mut self, page: u32) -> Option<FetchTicket> {
        let page = page.clamp(1, self.page_count());
        if page == self.query.page {
            return None;
        }
        Some(self.issue(self.query.clone().with_page(page)))
    }

    pub fn next_page(&mut self) -> Option<FetchTicket> {
        self.set_page(self.query.page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> Option<FetchTicket> {
        self.set_page(self.query.page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> Option<FetchTicket> {
        self.set_page(1)
    }

    pub fn last_page(&mut self) -> Option<FetchTicket> {
        self.set_page(self.page_count())
    }

    /// Changes the page size and restarts from page 1, keeping the search text.
    pub fn set_page_size(&mut self, limit: u32) -> FetchTicket {
        self.issue(self.query.clone().with_limit(limit))
    }

    pub fn increase_page_size(&mut self) -> FetchTicket {
        self.set_page_size(pagination::next_page_size(self.query.limit))
    }

    pub fn decrease_page_size(&mut self) -> FetchTicket {
        self.set_page_size(pagination::previous_page_size(self.query.limit))
    }

    /// Records live search-box text. The fetch happens in [`Self::apply_search`]
    /// once the caller's debounce settles.
    pub fn search_input(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Runs the settled search from page 1.
    ///
    /// Returns `None` if `text` is no longer the live search text (a newer keystroke
    /// is still pending) or it equals the active search.
    pub fn apply_search(&mut self, text: &str) -> Option<FetchTicket> {
        if text != self.search_text || text == self.query.search {
            return None;
        }
        Some(self.issue(self.query.clone().with_search(text)))
    }

    /// Applies the outcome of the fetch issued as `seq`.
    ///
    /// Errors are reported through `notifications` and never returned.
    pub fn apply(
        &mut self,
        seq: u64,
        result: Result<Page<T>, ApiError>,
        notifications: &mut NotificationManager,
    ) -> ApplyOutcome {
        if seq != self.issued {
            debug!(seq, latest = self.issued, "Discarding stale list response");
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(page) => {
                debug!(rows = page.rows.len(), total = page.total, "List loaded");
                self.query.page = page.page.max(1);
                self.query.limit = page.limit.max(1);
                self.total = page.total;
                self.rows = page.rows;
                self.state = LoadState::Loaded;
                self.clamp_selection();
                ApplyOutcome::Loaded
            }
            Err(e) => {
                warn!(error = %e, "List fetch failed");
                self.rows.clear();
                self.total = 0;
                self.selected = None;
                self.state = LoadState::Failed;
                notifications.report_error("Could not load records", &e);
                ApplyOutcome::Failed
            }
        }
    }

    /// Handles the outcome of a create/update/status/delete request.
    ///
    /// On success notifies and returns a refetch with the last-used parameters. On
    /// failure notifies and leaves the rows untouched.
    pub fn mutation_settled(
        &mut self,
        result: Result<Option<String>, ApiError>,
        success_message: &str,
        notifications: &mut NotificationManager,
    ) -> Option<FetchTicket> {
        match result {
            Ok(server_message) => {
                let ticket = self.refetch();
                let message = server_message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| success_message.to_string());
                notifications.success("Success", message);
                Some(ticket)
            }
            Err(e) => {
                warn!(error = %e, "Mutation failed");
                notifications.report_error("Action failed", &e);
                None
            }
        }
    }

    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.rows.len() => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.rows.is_empty() {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    fn clamp_selection(&mut self) {
        self.selected = if self.rows.is_empty() {
            None
        } else {
            Some(self.selected.unwrap_or(0).min(self.rows.len() - 1))
        };
    }

    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected_row(&self) -> Option<&T> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub const fn query(&self) -> &PageQuery {
        &self.query
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub const fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    #[must_use]
    pub fn page_count(&self) -> u32 {
        pagination::page_count(self.total, self.query.limit)
    }
}
