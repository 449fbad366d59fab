//! Medalboard - a terminal dashboard over Danish Olympic medalists.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use medalboard::app::App;
use medalboard::controller::{Controller, ResetTarget};
use medalboard::data::DataReader;
use medalboard::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "medalboard")]
#[command(about = "A terminal dashboard over Danish Olympic medalists", long_about = None)]
struct Args {
    /// People CSV (id, name, gender, birth/death dates and places)
    #[arg(long, default_value = "First_clean.csv")]
    people: PathBuf,

    /// Medal CSV (id, sport, discipline, medal_color, year)
    #[arg(long, default_value = "Second_clean.csv")]
    medals: PathBuf,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print the unfiltered views as text and exit instead of starting the UI
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Medalboard");
    }

    let dataset = DataReader::load(&args.people, &args.medals)
        .context("Failed to load medalist data")?;
    let dataset = Arc::new(dataset);

    if args.print {
        let controller = Controller::new(dataset);
        print!("{}", controller.snapshot().to_text());
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(dataset);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Medalboard exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                return Ok(())
            },

            // Focus
            (KeyModifiers::NONE, KeyCode::Tab) => app.focus_next(),
            (KeyModifiers::SHIFT, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::BackTab) => {
                app.focus_prev()
            },

            // Cursor
            (KeyModifiers::NONE, KeyCode::Left)
            | (KeyModifiers::NONE, KeyCode::Up)
            | (KeyModifiers::NONE, KeyCode::Char('h'))
            | (KeyModifiers::NONE, KeyCode::Char('k')) => app.cursor_back(),
            (KeyModifiers::NONE, KeyCode::Right)
            | (KeyModifiers::NONE, KeyCode::Down)
            | (KeyModifiers::NONE, KeyCode::Char('l'))
            | (KeyModifiers::NONE, KeyCode::Char('j')) => app.cursor_forward(),

            // Click
            (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                app.activate()
            },

            // Reset buttons
            (KeyModifiers::NONE, KeyCode::Char('a')) => app.reset(ResetTarget::All),
            (KeyModifiers::NONE, KeyCode::Char('s')) => app.reset(ResetTarget::Sport),
            (KeyModifiers::NONE, KeyCode::Char('e')) => app.reset(ResetTarget::Year),

            // Features
            (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_focused_table(),
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
            (KeyModifiers::SHIFT, KeyCode::Char('?')) | (KeyModifiers::NONE, KeyCode::Char('?')) => {
                app.show_help()
            },

            _ => {},
        }
    }
}
