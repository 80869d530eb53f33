//! Top-level view: owns the components and routes events between them.
//!
//! Routing is strictly layered: the reservation modal (when open) captures
//! everything, then the navigation drawer (when open), then the global keys
//! and the page itself.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use palazzo_types::Effect;

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::nav_drawer::NavDrawerComponent;
use crate::ui::components::page::PageComponent;
use crate::ui::components::reserve::ReserveModalComponent;
use crate::ui::theme::theme_helpers as th;

#[derive(Debug, Default)]
pub struct MainView {
    page: PageComponent,
    nav_drawer: NavDrawerComponent,
    reserve_modal: ReserveModalComponent,
}

impl MainView {
    pub fn handle_key_event(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.reserve.show {
            return self.reserve_modal.handle_key_events(app, key);
        }
        if app.nav_drawer.open {
            return self.nav_drawer.handle_key_events(app, key);
        }
        match key.code {
            KeyCode::Char('q') => return vec![Effect::Quit],
            KeyCode::Char('m') => return vec![Effect::ToggleDrawer],
            KeyCode::Char('t') => return vec![Effect::CycleTheme],
            _ => {}
        }
        self.page.handle_key_events(app, key)
    }

    pub fn handle_mouse_event(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if app.reserve.show {
            return self.reserve_modal.handle_mouse_events(app, mouse);
        }
        // The drawer sees every mouse event: the burger button is clickable
        // even while closed, and an open drawer captures outside clicks.
        let effects = self.nav_drawer.handle_mouse_events(app, mouse);
        if !effects.is_empty() || app.nav_drawer.open {
            return effects;
        }
        if matches!(mouse.kind, MouseEventKind::ScrollUp | MouseEventKind::ScrollDown) {
            return self.page.handle_mouse_events(app, mouse);
        }
        Vec::new()
    }

    pub fn render(&mut self, frame: &mut Frame, app: &mut App) {
        let [main_area, hint_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        self.page.render(frame, main_area, app);
        self.nav_drawer.render(frame, main_area, app);
        if app.reserve.show {
            self.reserve_modal.render(frame, main_area, app);
        }
        self.render_hint_bar(frame, hint_area, app);
    }

    fn render_hint_bar(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let now = Instant::now();
        let line = if let Some(message) = app.status.active(now) {
            Line::from(Span::styled(format!(" {message}"), theme.status_success()))
        } else {
            let mut spans = Vec::new();
            if let Some(section) = app.page.section_in_view() {
                spans.push(Span::styled(format!(" {section} "), theme.accent_emphasis_style()));
                spans.push(Span::styled("| ", theme.text_muted_style()));
            }
            spans.extend(th::build_hint_spans(
                theme,
                &[
                    ("m", " menu  "),
                    ("1-7", " sections  "),
                    ("r", " reserve  "),
                    ("t", " theme  "),
                    ("q", " quit"),
                ],
            ));
            Line::from(spans)
        };
        frame.render_widget(Paragraph::new(line).style(th::panel_style(theme)), area);
    }
}
