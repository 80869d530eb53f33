//! UI components of the Palazzo TUI.

pub mod common;
mod component;
pub mod nav_drawer;
pub mod page;
pub mod reserve;

pub(crate) use component::Component;
