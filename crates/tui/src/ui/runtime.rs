//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode,
//!   mouse capture).
//! - Drive a single loop that handles input, ticks and effects.
//! - Route input through `MainView` and execute the returned `Effect`s.
//!
//! Event Loop Strategy
//! - A blocking input thread reads crossterm events and forwards them over a
//!   channel, throttling mouse moves to one per 16 ms.
//! - Smart ticking: 16 ms while the dock width or the page title is tweening,
//!   100 ms otherwise so the status dot keeps breathing.
//! - `App::frame_time` is stamped once per pass; every transition request and
//!   every sample taken while handling that pass share it.
use std::io::Stdout;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use menudock_types::{Effect, Msg, Viewport};
use menudock_util::DockConfig;
use rat_focus::FocusBuilder;
use ratatui::{Terminal, prelude::CrosstermBackend};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{info, warn};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;
use crate::ui::theme;

const FAST_TICK: Duration = Duration::from_millis(16);
const IDLE_TICK: Duration = Duration::from_millis(100);
const MOUSE_MOVE_THROTTLE: Duration = Duration::from_millis(16);

type DockTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Spawn a dedicated input thread that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::task::spawn_blocking(move || {
        let mut last_mouse_move: Option<Instant> = None;
        loop {
            match event::poll(MOUSE_MOVE_THROTTLE) {
                Ok(false) => {
                    if sender.is_closed() {
                        break;
                    }
                    continue;
                }
                Ok(true) => {}
                Err(error) => {
                    warn!("Failed to poll terminal events: {}", error);
                    break;
                }
            }
            match event::read() {
                Ok(event) => {
                    let is_mouse_move = event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved);
                    if is_mouse_move {
                        if last_mouse_move.is_some_and(|last| last.elapsed() < MOUSE_MOVE_THROTTLE) {
                            continue;
                        }
                        last_mouse_move = Some(Instant::now());
                    }
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!("Failed to read terminal event: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<DockTerminal> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("failed to enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut DockTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut DockTerminal, app: &mut App, main_view: &mut MainView) -> Result<()> {
    // Rebuild focus just before rendering so newly drawn links are reachable
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = Rc::new(FocusBuilder::rebuild_for(app, Some(Rc::unwrap_or_clone(old_focus))));
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event).unwrap_or_default(),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Executes effects; returns `true` when the app should exit.
fn process_effects(app: &mut App, effects: Vec<Effect>) -> bool {
    for effect in effects {
        match effect {
            Effect::Navigate(href) => app.navigate(&href),
            Effect::Quit => return true,
        }
    }
    false
}

fn is_ctrl_c(event: &Event) -> bool {
    matches!(event, Event::Key(key) if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

async fn event_loop(terminal: &mut DockTerminal, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let mut input_receiver = spawn_input_thread();

    let mut current_interval = IDLE_TICK;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    app.frame_time = Instant::now();
    render(terminal, app, main_view)?;

    // Some terminals drop resize notifications; compare sizes every pass.
    let mut last_size = Some((app.viewport.width, app.viewport.height));

    loop {
        app.frame_time = Instant::now();
        let target_interval = if app.is_animating() { FAST_TICK } else { IDLE_TICK };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut effects = Vec::new();
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if is_ctrl_c(&event) {
                    break;
                }
                app.frame_time = Instant::now();
                effects.extend(handle_input_event(app, main_view, event));
            }
            _ = ticker.tick() => {
                app.frame_time = Instant::now();
                effects.extend(main_view.handle_message(app, Msg::Tick));
            }
            _ = signal::ctrl_c() => { break; }
        }

        if process_effects(app, effects) {
            break;
        }

        if let Ok((width, height)) = crossterm::terminal::size()
            && last_size != Some((width, height))
        {
            last_size = Some((width, height));
            app.update(&Msg::Resize(width, height));
        }

        render(terminal, app, main_view)?;
    }
    Ok(())
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event loop
/// and restores the terminal whether or not the loop succeeded.
pub async fn run_app(config: DockConfig) -> Result<()> {
    let loaded_theme = theme::load(config.theme.as_deref());
    let (width, height) = crossterm::terminal::size().context("failed to read terminal size")?;
    let mut app = App::new(&config, loaded_theme, Viewport::new(width, height), Instant::now());
    let mut main_view = MainView::new();
    info!(width, height, presentation = ?app.presentation(), "starting dock");

    let mut terminal = setup_terminal()?;
    let outcome = event_loop(&mut terminal, &mut app, &mut main_view).await;
    let restored = cleanup_terminal(&mut terminal).context("failed to restore terminal");
    if let Err(error) = &outcome {
        warn!("Event loop failed: {:#}", error);
    }
    outcome.and(restored)
}
