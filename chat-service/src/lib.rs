//! chat-service: answers institution FAQ questions from a keyword table and
//! a Gemini text model.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
