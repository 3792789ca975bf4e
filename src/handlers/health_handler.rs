use actix_web::{web, HttpResponse, Result};
use serde_json::json;

/// Health check for load balancers. Must answer while the process runs,
/// credential configured or not, and never touches the Claude API.
pub async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "rpa-port-customs-ai",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(health_check)));
}
