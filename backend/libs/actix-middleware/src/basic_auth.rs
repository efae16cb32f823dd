//! HTTP Basic authentication middleware
//!
//! Wraps individual resources so that only requests carrying credentials
//! accepted by a [`CredentialVerifier`] reach the handler. Everything else is
//! answered with `401 Unauthorized` and a `WWW-Authenticate: Basic` challenge.
//!
//! ## Example
//! ```rust,ignore
//! use actix_middleware::{BasicAuthMiddleware, StaticCredentials};
//! use actix_web::web;
//!
//! let auth = BasicAuthMiddleware::new(StaticCredentials::new("admin", "secret"), "Login Required");
//! let resource = web::resource("/patients").wrap(auth).route(web::get().to(handler));
//! ```

use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{AUTHORIZATION, WWW_AUTHENTICATE},
    Error, HttpMessage, HttpResponse,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use thiserror::Error;

const ACCESS_DENIED_BODY: &str = "Access denied. Please provide valid credentials.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingHeader,

    #[error("Authorization header is not Basic")]
    UnsupportedScheme,

    #[error("malformed Basic credentials")]
    Malformed,

    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Decides whether a username/password pair is allowed through
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single configured credential pair compared by exact equality
#[derive(Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Username of the caller that passed the Basic auth check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

/// Decode an `Authorization` header value into `(username, password)`.
///
/// The password is everything after the first `:`, so it may itself contain colons.
pub fn parse_basic_credentials(header: &str) -> Result<(String, String), AuthError> {
    let (scheme, encoded) = header
        .trim()
        .split_once(' ')
        .ok_or(AuthError::UnsupportedScheme)?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(AuthError::UnsupportedScheme);
    }

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| AuthError::Malformed)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::Malformed)?;
    let (username, password) = decoded.split_once(':').ok_or(AuthError::Malformed)?;

    Ok((username.to_string(), password.to_string()))
}

/// Basic authentication middleware
#[derive(Clone)]
pub struct BasicAuthMiddleware {
    verifier: Arc<dyn CredentialVerifier>,
    realm: Arc<str>,
}

impl BasicAuthMiddleware {
    pub fn new(verifier: impl CredentialVerifier + 'static, realm: &str) -> Self {
        Self::from_shared(Arc::new(verifier), realm)
    }

    /// Build from a verifier that is shared with other resources
    pub fn from_shared(verifier: Arc<dyn CredentialVerifier>, realm: &str) -> Self {
        Self {
            verifier,
            realm: Arc::from(realm),
        }
    }

    fn check(&self, req: &ServiceRequest) -> Result<String, AuthError> {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingHeader)?
            .to_str()
            .map_err(|_| AuthError::Malformed)?;

        let (username, password) = parse_basic_credentials(header)?;
        if self.verifier.verify(&username, &password) {
            Ok(username)
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BasicAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = BasicAuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BasicAuthMiddlewareService {
            service: Rc::new(service),
            auth: self.clone(),
        }))
    }
}

pub struct BasicAuthMiddlewareService<S> {
    service: Rc<S>,
    auth: BasicAuthMiddleware,
}

impl<S, B> Service<ServiceRequest> for BasicAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        match self.auth.check(&req) {
            Ok(username) => {
                req.extensions_mut().insert(AuthenticatedUser(username));
                Box::pin(async move {
                    let res = service.call(req).await?;
                    Ok(res.map_into_boxed_body())
                })
            }
            Err(e) => {
                tracing::warn!(
                    path = %req.path(),
                    reason = %e,
                    "Basic authentication rejected"
                );
                let response = HttpResponse::Unauthorized()
                    .insert_header((
                        WWW_AUTHENTICATE,
                        format!("Basic realm=\"{}\"", self.auth.realm),
                    ))
                    .content_type("text/plain; charset=utf-8")
                    .body(ACCESS_DENIED_BODY);
                Box::pin(async move { Ok(req.into_response(response)) })
            }
        }
    }
}
