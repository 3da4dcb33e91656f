pub mod metrics;
pub mod prompts;
pub mod providers;
pub mod resolver;

pub use resolver::{AnswerResolver, AnswerSource, Resolution, Route, APOLOGY};
