use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tracing::{error, info};

use termfolio::app::{App, AppScreen, open_store};
use termfolio::challenge::SNIPPETS;
use termfolio::challenge::scores::best_of;
use termfolio::config::Config;
use termfolio::event::{AppEvent, EventHandler};
use termfolio::logging;
use termfolio::ui::components::challenge_stats::{ChallengeStats, CompletionPanel};
use termfolio::ui::components::console_view::ConsoleView;
use termfolio::ui::components::hero::Hero;
use termfolio::ui::components::particle_canvas::ParticleCanvas;
use termfolio::ui::components::snippet_list::SnippetList;
use termfolio::ui::components::typing_area::TypingArea;
use termfolio::ui::layout::{ScreenLayout, centered_rect, pack_hint_lines};

#[derive(Parser)]
#[command(
    name = "termfolio",
    version,
    about = "Terminal portfolio with a command console and a code typing challenge"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Disable the animated particle background")]
    no_particles: bool,

    #[arg(long, help = "Allow backspace during typing challenges")]
    allow_corrections: bool,

    #[arg(long, help = "Directory for scores and logs")]
    data_dir: Option<PathBuf>,

    #[arg(long, help = "Print stored typing scores and exit")]
    scores: bool,

    #[arg(long, help = "Write the effective configuration file and exit")]
    init_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Ignoring unreadable config ({e}); using defaults");
        Config::default()
    });
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if cli.no_particles {
        config.particles_enabled = false;
    }
    if cli.allow_corrections {
        config.allow_corrections = true;
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir.to_string_lossy().into_owned());
    }

    if cli.init_config {
        config.save()?;
        println!("Wrote {}", Config::config_path().display());
        return Ok(());
    }

    if let Err(e) = logging::init(&config.data_dir(), &config.log_level) {
        eprintln!("Logging disabled: {e:#}");
    }

    let store = open_store(&config);
    let size = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(config, store, size);

    if cli.scores {
        print_scores(&app);
        return Ok(());
    }

    info!("starting termfolio");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(app.config.tick_rate());

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        error!(error = ?err, "event loop failed");
        eprintln!("Error: {err:?}");
    }
    info!("termfolio exited");

    Ok(())
}

fn print_scores(app: &App) {
    let history = app.score_history();
    if history.is_empty() {
        println!("No typing scores recorded yet.");
        return;
    }
    for record in &history {
        println!(
            "{}  {:>3} WPM  {:>3}%  {}",
            record.date.format("%Y-%m-%d %H:%M"),
            record.wpm,
            record.accuracy,
            record.language
        );
    }
    if let Some(best) = app.best_score() {
        println!("Best: {} WPM ({}, {}%)", best.wpm, best.language, best.accuracy);
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Mouse(column, row) => app.on_pointer(column, row, Instant::now()),
            AppEvent::Scroll(notches) => app.on_scroll(notches),
            AppEvent::Tick => app.tick(Instant::now()),
            AppEvent::Resize(w, h) => app.on_resize(w, h, Instant::now()),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Hub => handle_hub_key(app, key),
        AppScreen::Console => handle_console_key(app, key),
        AppScreen::SnippetSelect => handle_snippet_key(app, key),
        AppScreen::Challenge => handle_challenge_key(app, key),
    }
}

fn handle_hub_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.menu.prev(),
        KeyCode::Down | KeyCode::Char('j') => app.menu.next(),
        KeyCode::Enter => {
            if let Some(action) = app.menu.selected_action() {
                app.activate(action);
            }
        }
        KeyCode::Char(ch) => {
            if let Some(action) = app.menu.action_for_key(ch) {
                app.activate(action);
            }
        }
        _ => {}
    }
}

fn handle_console_key(app: &mut App, key: KeyEvent) {
    if let Some(submission) = app.interpreter.handle_key(key) {
        app.on_console_submission(submission);
    }
}

fn handle_snippet_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_to_hub(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev_snippet(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_snippet(),
        KeyCode::Enter => app.start_challenge(),
        _ => {}
    }
}

fn handle_challenge_key(app: &mut App, key: KeyEvent) {
    if app.challenge_complete() {
        match key.code {
            KeyCode::Char('r') | KeyCode::Enter => app.open_snippet_select(),
            KeyCode::Esc => app.go_to_hub(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.open_snippet_select(),
        KeyCode::Backspace => {
            app.challenge.backspace();
        }
        KeyCode::Enter => {
            app.challenge.type_char('\n');
        }
        KeyCode::Char(ch) => {
            app.challenge.type_char(ch);
        }
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = ScreenLayout::new(area);

    let hints: &[&str] = match app.screen {
        AppScreen::Hub => {
            render_hub(frame, app, area, layout.main);
            &["[\u{2191}\u{2193}] Move", "[Enter] Open", "[1-2] Jump", "[q] Quit"]
        }
        AppScreen::Console => {
            frame.render_widget(ConsoleView::new(&app.interpreter, app.theme), layout.main);
            &[
                "[Enter] Run",
                "[Tab] Complete",
                "[\u{2191}\u{2193}] History",
                "[PgUp/PgDn] Scroll",
                "[Esc] Close",
            ]
        }
        AppScreen::SnippetSelect => {
            render_snippet_select(frame, app, layout.main);
            &["[\u{2191}\u{2193}] Move", "[Enter] Start", "[Esc] Back"]
        }
        AppScreen::Challenge => {
            render_challenge(frame, app, layout.main);
            if app.config.allow_corrections {
                &["Type the snippet", "[Enter] Newline", "[Backspace] Fix", "[Esc] Abandon"]
            } else {
                &["Type the snippet", "[Enter] Newline", "[Esc] Abandon"]
            }
        }
    };

    // The hub background covers the whole frame, so chrome goes on top.
    render_header(frame, app, layout.header);

    let footer_text = pack_hint_lines(hints, layout.footer.width as usize)
        .into_iter()
        .next()
        .unwrap_or_default();
    let footer = Paragraph::new(Line::from(Span::styled(
        footer_text,
        Style::default().fg(colors.text_pending()),
    )));
    frame.render_widget(footer, layout.footer);
}

fn render_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let section = match app.screen {
        AppScreen::Hub => "home",
        AppScreen::Console => "terminal",
        AppScreen::SnippetSelect | AppScreen::Challenge => "typing challenge",
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " termfolio ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {section}"),
            Style::default()
                .fg(colors.text_pending())
                .bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

fn render_hub(frame: &mut ratatui::Frame, app: &App, full: Rect, main: Rect) {
    if let Some(field) = app.particles.as_ref() {
        frame.render_widget(ParticleCanvas::new(field, app.theme), full);
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(main);

    frame.render_widget(Hero::new(app.role(), app.theme), layout[0]);

    let menu_height = (app.menu.items.len() as u16) * 3 + 2;
    let width = (layout[2].width / 2).max(44).min(layout[2].width);
    let menu_area = Rect::new(
        layout[2].x + (layout[2].width - width) / 2,
        layout[2].y,
        width,
        menu_height.min(layout[2].height),
    );
    frame.render_widget(&app.menu, menu_area);
}

fn render_snippet_select(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let best = app.best_score();
    let history = app.score_history();
    let list = SnippetList::new(
        SNIPPETS,
        app.snippet_selected,
        best.as_ref(),
        &history,
        app.theme,
    );
    frame.render_widget(list, area);
}

fn render_challenge(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let Some(session) = app.challenge.session() else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    frame.render_widget(ChallengeStats::new(session, Utc::now(), app.theme), layout[0]);
    frame.render_widget(TypingArea::new(session, app.theme), layout[1]);

    if session.is_complete() {
        // The fresh record is already stored; compare against what came before it.
        let mut history = app.score_history();
        if app.challenge.last_record().is_some() {
            history.pop();
        }
        let prior_best = best_of(&history).cloned();
        let popup = centered_rect(40, 40, area);
        frame.render_widget(
            CompletionPanel::new(session, prior_best.as_ref(), app.theme),
            popup,
        );
    }
}
