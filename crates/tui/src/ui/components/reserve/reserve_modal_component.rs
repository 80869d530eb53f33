use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use palazzo_types::Effect;

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::reserve::state::ReserveField;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::centered_rect;

/// Modal dialog hosting the reservation form.
///
/// Keyboard-first: Tab/arrows move between fields, Enter advances and
/// submits from the last field, Esc closes without submitting.
#[derive(Debug, Default)]
pub struct ReserveModalComponent {
    modal_area: Rect,
    field_rows: Vec<(ReserveField, Rect)>,
}

impl ReserveModalComponent {
    fn hit_field(&self, col: u16, row: u16) -> Option<ReserveField> {
        self.field_rows
            .iter()
            .find(|(_, rect)| rect.contains(Position::new(col, row)))
            .map(|(field, _)| *field)
    }
}

impl Component for ReserveModalComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let form = &mut app.reserve;
        match key.code {
            KeyCode::Esc => return vec![Effect::CloseReserveModal],
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Enter => {
                if form.focused_field() == ReserveField::Requests {
                    return form.submit();
                }
                form.focus_next();
            }
            KeyCode::Left => form.focused_input_mut().move_left(),
            KeyCode::Right => form.focused_input_mut().move_right(),
            KeyCode::Home => form.focused_input_mut().move_home(),
            KeyCode::End => form.focused_input_mut().move_end(),
            KeyCode::Backspace => form.focused_input_mut().backspace(),
            KeyCode::Delete => form.focused_input_mut().delete(),
            KeyCode::Char(c) => form.focused_input_mut().insert_char(c),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(field) = self.hit_field(mouse.column, mouse.row) {
                while app.reserve.focused_field() != field {
                    app.reserve.focus_next();
                }
            } else if !self.modal_area.contains(Position::new(mouse.column, mouse.row)) {
                return vec![Effect::CloseReserveModal];
            }
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let modal = centered_rect(60, 70, area);
        frame.render_widget(Clear, modal);

        let block = th::block(theme, Some(app.ctx.content.reserve.title.as_str()), true);
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let label_width = ReserveField::ALL
            .iter()
            .map(|field| field.label().width())
            .max()
            .unwrap_or(0);

        let mut field_rows: Vec<(ReserveField, Rect)> = Vec::with_capacity(ReserveField::ALL.len());
        let mut cursor: Option<(u16, u16)> = None;
        let mut lines: Vec<Line<'static>> = vec![Line::default()];
        for field in ReserveField::ALL {
            let focused = app.reserve.focused_field() == field;
            let input = app.reserve.input(field);
            let marker = if field.is_required() { "*" } else { " " };
            let label = format!(" {marker}{:label_width$} ", field.label());
            let value_style = if focused {
                theme.selection_style()
            } else {
                theme.text_primary_style()
            };
            let row = inner.y + lines.len() as u16;
            if focused && row < inner.bottom() {
                let col = inner.x + label.width() as u16 + input.input()[..input.cursor()].width() as u16;
                cursor = Some((col.min(inner.right().saturating_sub(1)), row));
            }
            lines.push(Line::from(vec![
                Span::styled(label.clone(), theme.text_muted_style()),
                Span::styled(input.input().to_string(), value_style),
            ]));
            field_rows.push((field, Rect::new(inner.x, row, inner.width, 1)));
            lines.push(Line::default());
        }
        lines.push(Line::from(th::build_hint_spans(
            theme,
            &[(" Tab", " next field  "), ("Enter", " submit  "), ("Esc", " close")],
        )));

        frame.render_widget(Paragraph::new(lines).style(th::panel_style(theme)), inner);
        if let Some((col, row)) = cursor {
            frame.set_cursor_position(Position::new(col, row));
        }

        self.modal_area = modal;
        self.field_rows = field_rows;
    }
}
