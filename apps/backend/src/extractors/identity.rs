use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::claims::Identity;
use crate::error::AppError;

/// Reads the identity stored in request extensions by `AuthGate` or
/// `OptionalAuthGate`. Fails with 401 when none is attached; handlers on
/// optional-auth routes take `Option<Identity>` instead.
impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Identity>()
                .cloned()
                .ok_or(AppError::Unauthenticated),
        )
    }
}
