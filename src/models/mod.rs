//! Request and Response models for the bookshelf API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{BookIdRequest, LoginRequest, RegisterRequest};
pub use responses::{
    AuthResponse, HealthResponse, MessageResponse, ReviewCheckResponse, StatsResponse,
    UserResponse,
};
