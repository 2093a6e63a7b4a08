//! Data transfer objects for the application layer.

mod auth_dto;
mod mutation_dto;

pub use auth_dto::{LoginRequest, LoginResponse, TokenSource};
pub use mutation_dto::{Mutation, PendingAction, PendingKind};
