use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Margin, Rect},
    text::{Line, Text},
    widgets::Paragraph,
};

use palazzo_types::{Effect, SectionId};

use super::sections;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// Rows moved by one arrow-key press.
const ARROW_STEP: i32 = 2;
/// Rows moved by one page-key press or wheel notch.
const PAGE_STEP: i32 = 20;
const WHEEL_STEP: i32 = 3;

/// Renders the whole site as one tall column of lines and blits the window
/// the scroll offset selects. Section start rows are recorded each frame so
/// anchor navigation and reveal tracking stay in sync with the real layout.
#[derive(Debug, Default)]
pub struct PageComponent;

impl PageComponent {
    fn section_lines(app: &App, section: SectionId, width: usize, now: Instant) -> Vec<Line<'static>> {
        let theme = &*app.ctx.theme;
        let content = app.ctx.content;
        match section {
            SectionId::Home => sections::hero_lines(theme, &content.hero, width),
            SectionId::About => sections::about_lines(theme, &content.about, width),
            SectionId::Food => sections::food_lines(theme, &content.food, width),
            SectionId::Menu => sections::menu_lines(theme, &content.menu, app.page.menu_category, width),
            SectionId::Chef => sections::chef_lines(theme, &content.chef, width),
            SectionId::Testimonials => {
                sections::testimonial_lines(theme, &content.testimonials, &app.carousel, now, width)
            }
            SectionId::Reserve => sections::reserve_lines(theme, &content.reserve, width),
        }
    }
}

impl Component for PageComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let now = Instant::now();
        match key.code {
            KeyCode::Up => app.page.scroll_by(-ARROW_STEP),
            KeyCode::Down => app.page.scroll_by(ARROW_STEP),
            KeyCode::PageUp => app.page.scroll_by(-PAGE_STEP),
            KeyCode::PageDown => app.page.scroll_by(PAGE_STEP),
            KeyCode::Home => app.page.scroll_to_edge(false),
            KeyCode::End => app.page.scroll_to_edge(true),
            KeyCode::Tab => {
                let count = app.ctx.content.menu.categories.len();
                if count > 0 {
                    app.page.menu_category = (app.page.menu_category + 1) % count;
                }
            }
            KeyCode::BackTab => {
                let count = app.ctx.content.menu.categories.len();
                if count > 0 {
                    app.page.menu_category = (app.page.menu_category + count - 1) % count;
                }
            }
            KeyCode::Char('n') => app.carousel.next(now),
            KeyCode::Char('p') => app.carousel.prev(now),
            KeyCode::Char('e') => return vec![Effect::ScrollToSection(SectionId::Menu)],
            KeyCode::Char('r') => return vec![Effect::OpenReserveModal],
            KeyCode::Char(digit @ '1'..='7') => {
                let index = digit as usize - '1' as usize;
                if let Some(section) = SectionId::ALL.get(index) {
                    return vec![Effect::ScrollToSection(*section)];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::ScrollUp => app.page.scroll_by(-WHEEL_STEP),
            MouseEventKind::ScrollDown => app.page.scroll_by(WHEEL_STEP),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let now = Instant::now();
        let inner = area.inner(Margin::new(2, 0));
        let width = inner.width.saturating_sub(2) as usize;

        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut section_rows: Vec<(SectionId, u16)> = Vec::with_capacity(SectionId::ALL.len());
        for section in SectionId::ALL {
            section_rows.push((section, lines.len() as u16));
            let mut body = Self::section_lines(app, section, width, now);
            sections::apply_reveal(&mut body, app.page.reveal_progress(section, now));
            lines.extend(body);
        }
        lines.extend(sections::footer_lines(&*app.ctx.theme, &app.ctx.content.restaurant, width));

        let content_height = lines.len() as u16;
        let paragraph = Paragraph::new(Text::from(lines))
            .style(th::panel_style(&*app.ctx.theme))
            .scroll((app.page.scroll_offset(), 0));
        frame.render_widget(paragraph, inner);

        app.page.record_layout(section_rows, content_height, inner.height, now);
    }
}
