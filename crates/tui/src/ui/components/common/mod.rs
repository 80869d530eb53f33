//! Shared building blocks used by multiple components.

mod text_input;

pub use text_input::TextInputState;
