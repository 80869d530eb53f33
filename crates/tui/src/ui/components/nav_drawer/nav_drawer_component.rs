use std::time::Instant;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use palazzo_types::Effect;

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// Width of the slide-in panel in terminal columns.
const PANEL_WIDTH: u16 = 36;
/// Horizontal distance an entry travels while revealing.
const ITEM_SLIDE: f32 = 6.0;

/// Rendering adapter for the navigation drawer.
///
/// Draws the burger button, the dimmed backdrop, and the slide-from-right
/// panel, sampling all motion from the drawer's animator. Every input event
/// is translated into a `NavDrawerState` operation; this component holds no
/// state of its own.
#[derive(Debug, Default)]
pub struct NavDrawerComponent;

impl NavDrawerComponent {
    /// The drawer owns the screen whenever it is open or still animating out.
    pub fn is_visible(app: &App, now: Instant) -> bool {
        app.nav_drawer.open || app.nav_drawer.animator.is_animating(now)
    }

    fn render_burger(&self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let glyph = if app.nav_drawer.open { "[ x ]" } else { "[ = ]" };
        let burger_area = Rect::new(area.right().saturating_sub(6), area.y, 5, 1);
        let style = if app.nav_drawer.open {
            theme.accent_emphasis_style()
        } else {
            theme.accent_primary_style()
        };
        frame.render_widget(Paragraph::new(glyph).style(style), burger_area);
        app.nav_drawer.burger_area = burger_area;
    }

    fn render_backdrop(&self, frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let opacity = app.nav_drawer.animator.overlay_opacity(now);
        if opacity <= 0.05 {
            return;
        }
        let buffer = frame.buffer_mut();
        if opacity < 0.55 {
            // Half-faded: dim the page underneath instead of covering it.
            buffer.set_style(area, Style::default().add_modifier(Modifier::DIM));
        } else {
            buffer.set_style(area, app.ctx.theme.overlay_style());
        }
    }

    fn render_panel(&self, frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
        let progress = app.nav_drawer.animator.panel_progress(now);
        let visible_cols = (PANEL_WIDTH as f32 * progress).round() as u16;
        if visible_cols == 0 {
            app.nav_drawer.panel_area = Rect::default();
            app.nav_drawer.item_areas.clear();
            return;
        }

        let panel_area = Rect::new(
            area.right().saturating_sub(visible_cols),
            area.y,
            visible_cols.min(area.width),
            area.height,
        );
        frame.render_widget(Clear, panel_area);

        let theme = &*app.ctx.theme;
        let content = app.ctx.content;
        let block = th::block(theme, Some(content.restaurant.name.as_str()), true);
        let inner = block.inner(panel_area);
        frame.render_widget(block, panel_area);

        let item_count = app.nav_drawer.items.len() as u16;
        let [header_area, items_area, footer_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(item_count * 2),
            Constraint::Min(0),
        ])
        .areas(inner);

        let header = Paragraph::new(content.restaurant.tagline.as_str())
            .style(theme.text_muted_style())
            .wrap(Wrap { trim: true });
        frame.render_widget(header, header_area);

        let mut item_areas = Vec::with_capacity(app.nav_drawer.items.len());
        for (index, item) in app.nav_drawer.items.iter().enumerate() {
            let row = items_area.y + (index as u16) * 2;
            if row >= items_area.bottom() {
                item_areas.push(Rect::default());
                continue;
            }
            let row_area = Rect::new(items_area.x, row, items_area.width, 1);
            item_areas.push(row_area);

            let reveal = app.nav_drawer.animator.item_progress(index, now);
            if reveal <= 0.0 {
                continue;
            }
            let indent = ((1.0 - reveal) * ITEM_SLIDE).round() as usize;
            let is_active = index == app.nav_drawer.active_index;
            let pulsing = app.nav_drawer.animator.emphasis_scale(index, now) > 1.0;

            let mut style = if is_active {
                theme.selection_style()
            } else {
                theme.text_primary_style()
            };
            if reveal < 1.0 {
                style = style.add_modifier(Modifier::DIM);
            }
            if pulsing {
                style = style.add_modifier(Modifier::BOLD | Modifier::RAPID_BLINK);
            }
            let marker = if is_active { "> " } else { "  " };
            let line = Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(marker, theme.accent_primary_style()),
                Span::styled(item.label.as_str(), style),
            ]);
            frame.render_widget(Paragraph::new(line), row_area);
        }

        let footer = Paragraph::new(vec![
            Line::from(Span::styled(
                "<- -> navigate   Enter select   Esc close",
                theme.text_muted_style(),
            )),
            Line::default(),
            Line::from(Span::styled(content.restaurant.phone.as_str(), theme.text_secondary_style())),
            Line::from(Span::styled(content.restaurant.hours.as_str(), theme.text_secondary_style())),
            Line::from(Span::styled(content.restaurant.address.as_str(), theme.text_secondary_style())),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(footer, footer_area);

        app.nav_drawer.panel_area = panel_area;
        app.nav_drawer.item_areas = item_areas;
    }
}

impl Component for NavDrawerComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        app.nav_drawer.handle_key(key.code, Instant::now())
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let now = Instant::now();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let point = (mouse.column, mouse.row);
                if app.nav_drawer.burger_area.contains(point.into()) {
                    return vec![Effect::ToggleDrawer];
                }
                if !app.nav_drawer.open {
                    return Vec::new();
                }
                if let Some(index) = app.nav_drawer.hit_item(mouse.column, mouse.row) {
                    return app.nav_drawer.activate(index, now);
                }
                app.nav_drawer.handle_outside_interaction(mouse.column, mouse.row, now);
                Vec::new()
            }
            MouseEventKind::Moved if app.nav_drawer.open => {
                if let Some(index) = app.nav_drawer.hit_item(mouse.column, mouse.row) {
                    app.nav_drawer.set_active(index);
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let now = Instant::now();
        self.render_burger(frame, area, app);
        if Self::is_visible(app, now) {
            self.render_backdrop(frame, area, app, now);
            self.render_panel(frame, area, app, now);
        } else {
            app.nav_drawer.panel_area = Rect::default();
            app.nav_drawer.item_areas.clear();
        }
    }
}
