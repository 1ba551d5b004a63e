//! Terminal UI for Adventure Quest.
//!
//! A ratatui front end over the `aq-fiction` session controller: title
//! screen, registration form, the game screen with its journey stats, and
//! the help and Q&A overlays.

pub mod app;
pub mod config;
pub mod loader;
pub mod logging;
pub mod screens;
pub mod shared;
pub mod terminal;
pub mod transition;
