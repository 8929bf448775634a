//! Role guard layered inside `AuthGate`.
//!
//! Wire it so `AuthGate` runs first (actix runs the last `.wrap` outermost):
//!
//! web::scope("/api/admin")
//!     .wrap(RequireRole::new(Role::Admin))
//!     .wrap(AuthGate::new(codec))

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::claims::{Identity, Role};
use crate::error::AppError;
use crate::logging::security;
use crate::middleware::auth_gate::reject;

/// Exact-match role check against the identity attached by `AuthGate`.
pub fn authorize(identity: Option<&Identity>, required: Role) -> Result<(), AppError> {
    let identity = identity.ok_or(AppError::Unauthenticated)?;
    if identity.role != required {
        return Err(AppError::RoleMismatch { required });
    }
    Ok(())
}

#[derive(Clone, Copy)]
pub struct RequireRole {
    required: Role,
}

impl RequireRole {
    pub fn new(required: Role) -> Self {
        Self { required }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service,
            required: self.required,
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: S,
    required: Role,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let required = self.required;
        let identity = req.extensions().get::<Identity>().cloned();

        match authorize(identity.as_ref(), required) {
            Ok(()) => {
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => Box::pin(async move {
                if let Some(identity) = &identity {
                    security::role_denied(req.path(), identity, required);
                }
                Ok(reject(req, err))
            }),
        }
    }
}
