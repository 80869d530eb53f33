//! Component system for the Palazzo TUI.
//!
//! Components are self-contained UI elements that own their local state,
//! handle the events routed to them, and render into a provided `Rect`.
//! Anything that must change global state is reported back as an `Effect`
//! instead of being applied in place.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;

use palazzo_types::{Effect, Msg};

use crate::app::App;

/// A UI component with its own state and behavior.
///
/// Event handlers receive `&mut App` so they can mutate the state they own
/// inside it; cross-cutting changes are returned as `Effect`s for the
/// runtime to process.
pub(crate) trait Component {
    /// Handle a key event routed to this component.
    #[allow(dead_code)]
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event routed to this component.
    #[allow(dead_code)]
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Update internal state in response to an application message.
    #[allow(dead_code)]
    fn update(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
