pub mod claude_service;

pub use claude_service::{ClaudeError, ClaudeService};
