use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::agreement::TRADE_AGREEMENTS;

/// Lists the trade agreements Israel has. Static data, fixed order.
pub async fn list_agreements() -> impl Responder {
    HttpResponse::Ok().json(json!({ "agreements": TRADE_AGREEMENTS }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/agreements", web::get().to(list_agreements));
}
