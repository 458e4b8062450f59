//! Chick Feed entry point.

use chick_feed::config::AppConfig;
use chick_feed::diag;
use chick_feed::error::AppError;
use chick_feed::events::AppEvent;
use chick_feed::fetch::{spawn_load, FeedClient};
use chick_feed::keys::{map_key, Action};
use chick_feed::nav::Tab;
use chick_feed::notifications::NotificationLevel;
use chick_feed::state::App;
use chick_feed::views::render_view;
use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let feeds = FeedClient::new(config.request_timeout_ms)?;
    let mut app = App::new(config, feeds);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(256);
    spawn_input_reader(event_tx.clone());

    app.loading = true;
    spawn_load(app.feeds.clone(), event_tx.clone());

    let tick_rate = Duration::from_millis(app.config.tick_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                let _ = event_tx.send(AppEvent::Tick).await;
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, &event_tx, event) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, AppError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<AppEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(AppEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(AppEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

fn handle_event(app: &mut App, sender: &mpsc::Sender<AppEvent>, event: AppEvent) -> bool {
    match event {
        AppEvent::Input(key) => {
            if let Some(action) = map_key(key) {
                return handle_action(app, sender, action);
            }
        }
        AppEvent::FeedsLoaded(outcome) => {
            for error in &outcome.errors {
                diag::log_error(&app.config.error_log_path, error);
            }
            app.apply_load_outcome(*outcome);
        }
        AppEvent::Resize { .. } | AppEvent::Tick => {}
    }
    false
}

fn handle_action(app: &mut App, sender: &mpsc::Sender<AppEvent>, action: Action) -> bool {
    match action {
        Action::Quit => return true,
        Action::NextTab => app.switch_tab(app.active_tab.next()),
        Action::PrevTab => app.switch_tab(app.active_tab.previous()),
        Action::SwitchTab(index) => {
            if let Some(tab) = Tab::from_index(index) {
                app.switch_tab(tab);
            }
        }
        Action::MoveDown => {
            if app.filter_panel.focused {
                app.filter_step(true);
            } else {
                app.select_next();
            }
        }
        Action::MoveUp => {
            if app.filter_panel.focused {
                app.filter_step(false);
            } else {
                app.select_previous();
            }
        }
        Action::MoveLeft => {
            if app.filter_panel.focused {
                app.filter_panel.prev_row();
            }
        }
        Action::MoveRight => {
            if app.filter_panel.focused {
                app.filter_panel.next_row();
            }
        }
        Action::Select => {
            if app.filter_panel.focused {
                app.filter_select();
            }
        }
        Action::ToggleFilterFocus => {
            app.filter_panel.focused = !app.filter_panel.focused;
        }
        Action::ClearFilters => {
            app.clear_filters();
            app.notify(NotificationLevel::Info, "Filters cleared");
        }
        Action::Refresh => {
            // A refresh while a load is in flight is not guarded against;
            // the last outcome to arrive wins.
            app.loading = true;
            spawn_load(app.feeds.clone(), sender.clone());
        }
        Action::Save => app.save_selected(),
        Action::OpenHelp => app.help_visible = !app.help_visible,
        Action::Cancel => {
            if app.help_visible {
                app.help_visible = false;
            } else if app.filter_panel.focused {
                app.filter_panel.focused = false;
            }
        }
    }
    false
}
