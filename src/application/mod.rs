//! Application layer with use cases, DTOs and screen state services.

/// Data transfer objects.
pub mod dto;
/// List, form, confirmation and notification state.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{LoginRequest, LoginResponse, Mutation, TokenSource};
pub use use_cases::{LoginUseCase, ResolveTokenUseCase, ResourceUseCase};
