// Declare modules
pub mod app_state;
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Public re-exports
pub use app_state::AppState;
pub use config::Settings;
pub use models::agreement::TradeAgreement;
pub use models::chat::{ChatMessage, ChatRequest, ChatResponse};
pub use models::classify::ClassifyRequest;
pub use services::claude_service::{ClaudeError, ClaudeService};

// Re-export handlers
pub use handlers::agreements_handler;
pub use handlers::chat_handler;
pub use handlers::classify_handler;
pub use handlers::health_handler;
pub use handlers::info_handler;
