//! UI layer: components, theming, animation, and the event loop.

pub mod animation;
pub mod components;
pub mod main_view;
pub mod runtime;
pub mod theme;
pub mod utils;
