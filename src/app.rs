use std::time::Instant;

use tracing::{debug, info, warn};

use crate::challenge::{SNIPPETS, ScoreRecord, TypingChallenge};
use crate::config::Config;
use crate::console::{CommandInterpreter, SCROLL_WHEEL, Submission};
use crate::effects::{Debouncer, ParticleField, Rotator};
use crate::store::{JsonFileStore, KvStore, MemoryStore};
use crate::ui::components::hero::ROLES;
use crate::ui::components::menu::{HubAction, Menu};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Hub,
    Console,
    SnippetSelect,
    Challenge,
}

pub struct App {
    pub screen: AppScreen,
    pub config: Config,
    pub theme: &'static Theme,
    pub menu: Menu<'static>,
    pub interpreter: CommandInterpreter,
    pub challenge: TypingChallenge<Box<dyn KvStore>>,
    pub snippet_selected: usize,
    pub particles: Option<ParticleField>,
    pub roles: Rotator<&'static str>,
    resize: Debouncer<(u16, u16)>,
    pub should_quit: bool,
}

/// Scores go to the data directory; an unusable directory degrades to memory.
pub fn open_store(config: &Config) -> Box<dyn KvStore> {
    let dir = config.data_dir();
    match JsonFileStore::with_base_dir(dir.clone()) {
        Ok(store) => {
            debug!(dir = %store.base_dir().display(), "score store ready");
            Box::new(store)
        }
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "data directory unavailable, scores will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

impl App {
    pub fn new(config: Config, store: Box<dyn KvStore>, size: (u16, u16)) -> Self {
        let loaded_theme = Theme::load(&config.theme).unwrap_or_else(|| {
            warn!(
                theme = %config.theme,
                available = ?Theme::available_themes(),
                "unknown theme, using default"
            );
            Theme::default()
        });
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));
        let now = Instant::now();

        let particles = config.particles_enabled.then(|| {
            ParticleField::new(f64::from(size.0), f64::from(size.1), config.max_particles)
        });

        Self {
            screen: AppScreen::Hub,
            menu: Menu::new(theme),
            theme,
            interpreter: CommandInterpreter::new(),
            challenge: TypingChallenge::new(store).with_corrections(config.allow_corrections),
            snippet_selected: 0,
            particles,
            roles: Rotator::new(ROLES, config.role_interval(), now),
            resize: Debouncer::new(config.resize_debounce()),
            should_quit: false,
            config,
        }
    }

    pub fn role(&self) -> &'static str {
        self.roles.current().copied().unwrap_or_default()
    }

    pub fn go_to_hub(&mut self) {
        self.challenge.reset();
        self.screen = AppScreen::Hub;
    }

    pub fn activate(&mut self, action: HubAction) {
        if let Some(field) = self.particles.as_mut() {
            field.clear_pointer();
        }
        match action {
            HubAction::Console => self.open_console(),
            HubAction::Challenge => self.open_snippet_select(),
            HubAction::Quit => self.should_quit = true,
        }
    }

    /// Each visit starts a fresh terminal session.
    pub fn open_console(&mut self) {
        self.interpreter = CommandInterpreter::new();
        self.screen = AppScreen::Console;
        debug!("console opened");
    }

    pub fn on_console_submission(&mut self, submission: Submission) {
        if submission == Submission::Exit {
            debug!("console closed");
            self.screen = AppScreen::Hub;
        }
    }

    pub fn open_snippet_select(&mut self) {
        self.challenge.reset();
        self.screen = AppScreen::SnippetSelect;
    }

    pub fn select_next_snippet(&mut self) {
        self.snippet_selected = (self.snippet_selected + 1) % SNIPPETS.len();
    }

    pub fn select_prev_snippet(&mut self) {
        self.snippet_selected = self
            .snippet_selected
            .checked_sub(1)
            .unwrap_or(SNIPPETS.len() - 1);
    }

    pub fn start_challenge(&mut self) {
        if let Some(snippet) = SNIPPETS.get(self.snippet_selected) {
            info!(title = snippet.title, "typing challenge started");
            self.challenge.on_snippet_selected(*snippet);
            self.screen = AppScreen::Challenge;
        }
    }

    pub fn challenge_complete(&self) -> bool {
        self.challenge.session().is_some_and(|s| s.is_complete())
    }

    pub fn best_score(&self) -> Option<ScoreRecord> {
        self.challenge.best_score()
    }

    pub fn score_history(&self) -> Vec<ScoreRecord> {
        self.challenge.history()
    }

    pub fn on_resize(&mut self, width: u16, height: u16, now: Instant) {
        self.resize.push((width, height), now);
    }

    /// Wheel notches; positive scrolls the console back.
    pub fn on_scroll(&mut self, notches: i8) {
        if self.screen != AppScreen::Console {
            return;
        }
        let lines = SCROLL_WHEEL * usize::from(notches.unsigned_abs());
        if notches > 0 {
            self.interpreter.scroll_back(lines);
        } else {
            self.interpreter.scroll_forward(lines);
        }
    }

    /// Pointer position in terminal cells; only the hub background reacts.
    pub fn on_pointer(&mut self, column: u16, row: u16, now: Instant) {
        if self.screen != AppScreen::Hub {
            return;
        }
        if let Some(field) = self.particles.as_mut() {
            field.set_pointer(f64::from(column), f64::from(row), now);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.roles.tick(now);

        if let Some((width, height)) = self.resize.poll(now) {
            debug!(width, height, "applying resize");
            if let Some(field) = self.particles.as_mut() {
                field.resize(f64::from(width), f64::from(height));
            }
        }

        if self.screen == AppScreen::Hub {
            if let Some(field) = self.particles.as_mut() {
                field.step();
            }
        }
    }
}
