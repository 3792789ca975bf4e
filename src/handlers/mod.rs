pub mod agreements_handler;
pub mod chat_handler;
pub mod classify_handler;
pub mod health_handler;
pub mod info_handler;
