//! Write requests against a resource.

use crate::domain::ports::RecordPayload;
use crate::domain::{RecordStatus, Resource};

/// A single create, update, status or delete request.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Create {
        resource: Resource,
        payload: RecordPayload,
    },
    Update {
        resource: Resource,
        id: String,
        payload: RecordPayload,
    },
    SetStatus {
        resource: Resource,
        id: String,
        status: RecordStatus,
    },
    Delete {
        resource: Resource,
        id: String,
    },
}

impl Mutation {
    #[must_use]
    pub const fn resource(&self) -> Resource {
        match self {
            Self::Create { resource, .. }
            | Self::Update { resource, .. }
            | Self::SetStatus { resource, .. }
            | Self::Delete { resource, .. } => *resource,
        }
    }

    /// Notification text used when the server sends no message.
    #[must_use]
    pub fn success_message(&self) -> String {
        let noun = self.resource().noun();
        match self {
            Self::Create { .. } => format!("{noun} created"),
            Self::Update { .. } => format!("{noun} updated"),
            Self::SetStatus { status, .. } => format!("{noun} marked {}", status.as_str()),
            Self::Delete { .. } => format!("{noun} deleted"),
        }
    }
}

/// A destructive action awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub resource: Resource,
    pub id: String,
    /// Human label of the target record.
    pub label: String,
    pub kind: PendingKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingKind {
    Delete,
    SetStatus(RecordStatus),
}

impl PendingAction {
    /// Question shown in the confirmation dialog.
    #[must_use]
    pub fn prompt(&self) -> String {
        match &self.kind {
            PendingKind::Delete => format!(
                "Delete {} \"{}\"? This cannot be undone.",
                self.resource.noun().to_lowercase(),
                self.label
            ),
            PendingKind::SetStatus(status) => {
                format!("Mark \"{}\" as {}?", self.label, status.as_str())
            }
        }
    }

    #[must_use]
    pub fn into_mutation(self) -> Mutation {
        match self.kind {
            PendingKind::Delete => Mutation::Delete {
                resource: self.resource,
                id: self.id,
            },
            PendingKind::SetStatus(status) => Mutation::SetStatus {
                resource: self.resource,
                id: self.id,
                status,
            },
        }
    }
}
