//! Bearer-token gates.
//!
//! `AuthGate` guards protected scopes: a request without a bearer token gets
//! 401, a request whose token fails verification gets 403, and a verified
//! request continues with its [`Identity`] stored in the request extensions.
//!
//! `OptionalAuthGate` runs the same extraction on public scopes but never
//! rejects; handlers take `Option<Identity>` to personalize responses.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::auth::credential::{extract_and_verify, Credential};
use crate::auth::jwt::TokenCodec;
use crate::error::AppError;
use crate::logging::security;

/// Render `err` as the response for `req` without calling downstream services.
///
/// Must be called from inside the returned future so the response picks up
/// the task-local trace id set by `RequestTrace`.
pub(crate) fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let response = err.error_response();
    req.into_response(response).map_into_right_body()
}

#[derive(Clone)]
pub struct AuthGate {
    codec: TokenCodec,
}

impl AuthGate {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service,
            codec: self.codec.clone(),
        }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: S,
    codec: TokenCodec,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let credential = extract_and_verify(req.headers(), &self.codec);

        match credential.into_required() {
            Ok(identity) => {
                // Store identity in request extensions BEFORE calling the service
                req.extensions_mut().insert(identity);

                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => Box::pin(async move {
                match &err {
                    AppError::TokenRejected(cause) => security::token_rejected(req.path(), cause),
                    _ => security::token_missing(req.path()),
                }
                Ok(reject(req, err))
            }),
        }
    }
}

#[derive(Clone)]
pub struct OptionalAuthGate {
    codec: TokenCodec,
}

impl OptionalAuthGate {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }
}

impl<S, B> Transform<S, ServiceRequest> for OptionalAuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = OptionalAuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(OptionalAuthGateMiddleware {
            service,
            codec: self.codec.clone(),
        }))
    }
}

pub struct OptionalAuthGateMiddleware<S> {
    service: S,
    codec: TokenCodec,
}

impl<S, B> Service<ServiceRequest> for OptionalAuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let credential = extract_and_verify(req.headers(), &self.codec);

        if let Credential::Rejected(cause) = &credential {
            debug!(
                path = req.path(),
                reason = cause.reason(),
                "ignoring rejected token on optional-auth route"
            );
        }

        if let Some(identity) = credential.into_optional() {
            req.extensions_mut().insert(identity);
        }

        self.service.call(req)
    }
}
