use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde::Serialize;
use serde_json::json;

use crate::models::chat::ChatMessage;
use crate::models::classify::ClassifyRequest;
use crate::services::claude_service::ClaudeService;
use crate::AppState;

/// Response-length ceiling for classification answers.
const CLASSIFY_MAX_TOKENS: u32 = 2048;

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub classification: String,
}

/// Handler for classifying a product: returns the HS code, duty rates and
/// requirements as one text completion.
pub async fn classify(
    state: web::Data<AppState>,
    request: web::Json<ClassifyRequest>,
) -> impl Responder {
    if request.description.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "description must not be empty"
        }));
    }

    let (model, timeout) = {
        let settings = state.settings.read().await;
        (settings.claude_model.clone(), settings.claude_timeout)
    };

    let service = match ClaudeService::new(model, timeout) {
        Ok(service) => service,
        Err(e) => {
            error!("Failed to create Claude client: {}", e);
            return HttpResponse::InternalServerError().json(json!({
                "error": e.to_string()
            }));
        }
    };

    info!("Classifying product description ({} chars)", request.description.len());

    // Classification is a single-turn prompt, no history.
    let messages = vec![ChatMessage {
        role: "user".to_string(),
        content: request.prompt(),
    }];

    match service.complete(&messages, CLASSIFY_MAX_TOKENS).await {
        Ok(text) => HttpResponse::Ok().json(ClassifyResponse {
            classification: text,
        }),
        Err(e) => {
            error!("Classification failed: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": format!("Claude API error: {}", e)
            }))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/classify", web::post().to(classify));
}
