//! # Actix Middleware Library
//!
//! Shared middleware components for the clinic's Actix services
//!
//! ## Modules
//! - `basic_auth`: HTTP Basic authentication with a pluggable credential verifier

pub mod basic_auth;

pub use basic_auth::{
    parse_basic_credentials, AuthError, AuthenticatedUser, BasicAuthMiddleware,
    CredentialVerifier, StaticCredentials,
};
