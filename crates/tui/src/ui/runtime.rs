//! Runtime: terminal lifecycle, event loop, and effect processing.
//!
//! - A dedicated task blocks on `crossterm` input and forwards events over a
//!   channel, which keeps `poll()` and `read()` on one thread and makes
//!   resize delivery reliable across terminals.
//! - Smart ticking: a fast interval while anything animates, a slow one when
//!   the screen is fully settled. `App::update(Msg::Tick)` reports whether a
//!   visible change happened so idle ticks never trigger a redraw.
//! - Components return `Effect`s; `process_effects` applies them to the app.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::debug;

use palazzo_types::{Effect, Msg};

use crate::app::App;
use crate::ui::main_view::MainView;

/// Spawn a dedicated task that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel. Mouse-move events are throttled
/// to once per 16 ms so hover highlighting cannot flood the loop.
fn spawn_input_task() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    tokio::spawn(async move {
        let sixteen_ms = Duration::from_millis(16);
        let mut last_mouse_move = Instant::now();
        loop {
            if matches!(event::poll(sixteen_ms), Ok(true)) {
                match event::read() {
                    Ok(event) => {
                        let is_mouse_move =
                            event.as_mouse_event().is_some_and(|e| e.kind == MouseEventKind::Moved);
                        if is_mouse_move {
                            if last_mouse_move.elapsed() < sixteen_ms {
                                continue;
                            }
                            last_mouse_move = Instant::now();
                        }
                        if sender.send(event).await.is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        tracing::warn!(%error, "failed to read terminal event");
                        break;
                    }
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_event(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_event(app, mouse_event),
        Event::Resize(width, height) => {
            app.update(&Msg::Resize(width, height));
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Applies effects to the app. Returns `true` when the loop should exit.
fn process_effects(app: &mut App, effects: Vec<Effect>) -> bool {
    let now = Instant::now();
    for effect in effects {
        match effect {
            Effect::ToggleDrawer => app.nav_drawer.toggle(now),
            Effect::ScrollToSection(section) => {
                if !app.page.scroll_to_section(section) {
                    debug!(%section, "scroll request ignored; section not laid out yet");
                }
            }
            Effect::OpenReserveModal => app.reserve.open(),
            Effect::CloseReserveModal => app.reserve.close(),
            Effect::ShowStatus(message) => app.status.show(message, now),
            Effect::CycleTheme => {
                let follow_ups = app.cycle_theme();
                if process_effects(app, follow_ups) {
                    return true;
                }
            }
            Effect::Quit => return true,
        }
    }
    false
}

/// Entry point for the TUI runtime: terminal setup, event loop, cleanup.
pub async fn run_app(theme_override: Option<String>) -> Result<()> {
    let mut input_receiver = spawn_input_task();
    let mut main_view = MainView::default();
    let mut app = App::new(theme_override.as_deref());
    let mut terminal = setup_terminal()?;

    let fast_interval = Duration::from_millis(100);
    let idle_interval = Duration::from_millis(1000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    terminal.draw(|frame| main_view.render(frame, &mut app))?;

    loop {
        let target_interval = if app.is_animating(Instant::now()) {
            fast_interval
        } else {
            idle_interval
        };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut needs_render = false;
        let mut effects: Vec<Effect> = Vec::new();

        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if let Event::Key(key_event) = event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                effects = handle_input_event(&mut app, &mut main_view, event);
                needs_render = true;
            }
            _ = ticker.tick() => {
                needs_render = app.update(&Msg::Tick);
            }
            _ = signal::ctrl_c() => { break; }
        }

        if process_effects(&mut app, effects) {
            break;
        }

        if needs_render {
            terminal.draw(|frame| main_view.render(frame, &mut app))?;
        }
    }

    cleanup_terminal(&mut terminal)?;
    Ok(())
}
