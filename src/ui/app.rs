//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::dashboard_consts::DEFAULT_CITY;
use crate::dataset::{DatasetCache, DatasetSource};
use crate::locale::DisplayLocale;
use crate::ui::dashboard::{DashboardState, Selection, render_dashboard};
use crate::ui::error_screen::render_error;
use crossterm::event::{self, Event, KeyCode};
use log::{debug, error, info, warn};
use ratatui::{Frame, Terminal, backend::Backend};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// City shown in the header.
    pub city: String,
    pub locale: DisplayLocale,
}

impl UIConfig {
    pub fn new(with_background_color: bool, city: String, locale: DisplayLocale) -> Self {
        Self {
            with_background_color,
            city,
            locale,
        }
    }
}

impl Default for UIConfig {
    fn default() -> Self {
        Self::new(false, DEFAULT_CITY.to_string(), DisplayLocale::default())
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// The data could not be loaded; holds the message shown to the user.
    Error(String),
    /// The full dashboard for the current selection.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App<S: DatasetSource> {
    /// Where the datasets are read from.
    source: S,

    /// Memoized result of the last successful load.
    cache: DatasetCache,

    /// User selection carried between render passes.
    selection: Selection,

    ui_config: UIConfig,

    /// The current screen being displayed in the application.
    screen: Screen,
}

impl<S: DatasetSource> App<S> {
    /// Creates the application and runs the first render pass.
    pub fn new(source: S, ui_config: UIConfig) -> Self {
        let mut app = Self {
            source,
            cache: DatasetCache::new(),
            selection: Selection::default(),
            ui_config,
            screen: Screen::Error(String::new()),
        };
        app.render_pass();
        app
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Rebuilds the screen from the (cached) datasets and the selection.
    pub fn render_pass(&mut self) {
        let built = self.cache.get_or_load(&self.source).and_then(|datasets| {
            DashboardState::build(datasets, self.selection, self.ui_config.clone())
        });

        self.screen = match built {
            Ok(state) => {
                self.selection = state.selection;
                Screen::Dashboard(Box::new(state))
            }
            Err(e) => {
                if e.is_missing_source() {
                    warn!("Data files missing: {}", e);
                } else {
                    error!("Dashboard unavailable: {}", e);
                }
                Screen::Error(e.user_message())
            }
        };
    }

    /// Forgets the cached datasets and reads the files again.
    pub fn reload(&mut self) {
        if self.cache.is_populated() {
            info!("Reloading data from {}", self.source.identity());
        } else {
            info!("Retrying load from {}", self.source.identity());
        }
        self.cache.clear();
        self.render_pass();
    }

    /// Applies a key press. Returns `true` when the application should exit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Char('r') | KeyCode::Char('R') => self.reload(),
            _ => {
                if let Screen::Dashboard(state) = &self.screen {
                    let selection = state.apply_key(key);
                    if selection != self.selection {
                        debug!("Selection changed: {:?}", selection);
                        self.selection = selection;
                    }
                }
                // an error screen retries the load, failures are never cached
                self.render_pass();
            }
        }
        false
    }
}

/// Runs the application UI in a loop, redrawing after every key press.
pub fn run<B: Backend, S: DatasetSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| render(f, &app.screen))?;

        if let Event::Key(key) = event::read()? {
            // Skip events that are not KeyEventKind::Press
            if key.kind == event::KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key.code) {
                return Ok(());
            }
        }
    }
}

/// Renders the current screen based on the application state.
pub fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Error(message) => render_error(f, message),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
