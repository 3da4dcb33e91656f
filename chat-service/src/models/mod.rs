pub mod chat;
pub mod faq;

pub use chat::{ChatRequest, ChatResponse};
pub use faq::{FaqEntry, FaqTable};
