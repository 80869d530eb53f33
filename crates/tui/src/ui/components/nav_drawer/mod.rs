//! Navigation drawer: state machine plus rendering adapter.
//!
//! `state.rs` owns the open/close lifecycle, keyboard navigation, and the
//! cancellable deferred close; it is pure and unit-tested without any
//! rendering. `nav_drawer_component.rs` is the thin adapter that samples the
//! animation timelines, draws the overlay and panel, and maps input events
//! onto the state's operations.

mod nav_drawer_component;
mod state;

pub use nav_drawer_component::NavDrawerComponent;
pub use state::{DEFERRED_CLOSE_DELAY, NavDrawerState, NavItem};
