//! # Palazzo TUI Library
//!
//! Terminal user interface for the Palazzo restaurant showcase. The whole
//! site is one scrollable document (hero, about, food, menu, chef,
//! testimonials, reservation) plus a slide-in navigation drawer, rendered
//! with Ratatui.
//!
//! ## Architecture
//!
//! The TUI follows a component-based architecture: each UI element (page,
//! navigation drawer, reservation modal) is a component that handles events
//! against its own state and renders itself. State mutation happens only in
//! event handlers and `Msg::Tick` updates; cross-component actions travel as
//! `Effect`s drained by the runtime. All animation is tick-driven timeline
//! sampling, never blocking.

mod app;
mod ui;

pub use app::App;

use anyhow::Result;

/// Runs the main TUI application loop.
///
/// Initializes the terminal, builds the application state from the embedded
/// site content, and runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error for terminal setup failures (raw mode, alternate screen)
/// or event loop runtime issues.
pub async fn run(theme_override: Option<String>) -> Result<()> {
    ui::runtime::run_app(theme_override).await
}
