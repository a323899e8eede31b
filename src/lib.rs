//! Clarifi - AI writing feedback in the terminal
//!
//! Clarifi lets you write or paste text, pick one of several language models,
//! and submit the text for analysis. Results are addressed by a session id
//! and shown in feedback and rewrite views.

pub mod analysis;
pub mod app;
pub mod catalog;
pub mod config;
pub mod editor;
pub mod paths;
pub mod route;
pub mod submission;
pub mod tui;

pub use app::App;
pub use catalog::{ModelCatalog, ModelDescriptor};
pub use config::Config;
pub use route::{Route, SessionId};
