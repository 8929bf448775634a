use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware for the gallery frontend:
/// - Origins come from `AppConfig::cors_allowed_origins` (already validated)
/// - Only allow methods actually used by the API
/// - Expose the trace headers so the frontend can report them
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
