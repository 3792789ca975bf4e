use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;

use crate::models::chat::{ChatRequest, ChatResponse};
use crate::services::claude_service::ClaudeService;
use crate::AppState;

/// Response-length ceiling for conversational queries.
const CHAT_MAX_TOKENS: u32 = 4096;

/// Handler for chatting with the customs AI. Supports Hebrew and English.
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> impl Responder {
    if request.message.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "message must not be empty"
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

    let request = request.into_inner();
    let tenant_id = request.tenant_id.clone();
    let messages = request.into_messages();
    info!("Forwarding chat request ({} messages)", messages.len());

    match service.complete(&messages, CHAT_MAX_TOKENS).await {
        Ok(text) => HttpResponse::Ok().json(ChatResponse {
            response: text,
            tenant_id,
        }),
        Err(e) => {
            error!("Chat completion failed: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": format!("Claude API error: {}", e)
            }))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/chat", web::post().to(chat));
}
