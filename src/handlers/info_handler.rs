use actix_web::{HttpResponse, Responder};
use serde_json::json;

/// Root endpoint with API information.
pub async fn info() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "name": "RPA-PORT Customs AI",
        "version": env!("CARGO_PKG_VERSION"),
        "website": "https://www.rpa-port.com",
        "contact": "devrpa@rpa-port.co.il",
        "status": "running",
        "endpoints": {
            "health": "/health",
            "chat": "POST /api/chat",
            "classify": "POST /api/classify",
            "agreements": "GET /api/agreements"
        }
    }))
}
