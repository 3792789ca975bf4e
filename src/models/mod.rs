pub mod agreement;
pub mod chat;
pub mod classify;

pub use agreement::TradeAgreement;
pub use chat::{ChatMessage, ChatRequest, ChatResponse};
pub use classify::ClassifyRequest;
