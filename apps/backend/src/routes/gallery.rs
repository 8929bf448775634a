use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::auth::claims::{Identity, Role};
use crate::error::AppError;
use crate::routes::auth::Envelope;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Viewer {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl From<Option<Identity>> for Viewer {
    fn from(identity: Option<Identity>) -> Self {
        match identity {
            Some(identity) => Viewer {
                authenticated: true,
                subject_id: Some(identity.subject_id),
                role: Some(identity.role),
            },
            None => Viewer {
                authenticated: false,
                subject_id: None,
                role: None,
            },
        }
    }
}

/// Who is browsing the gallery; anonymous visitors are welcome.
async fn viewer(identity: Option<Identity>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(Envelope::ok(Viewer::from(identity))))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/viewer", web::get().to(viewer));
}
