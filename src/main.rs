mod app;
mod domain;
mod input;
mod logging;
mod notifications;
mod persistence;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{catalog, find_plan, Plan};
use persistence::{ensure_app_dir, load_settings, save_settings, settings_file, Settings};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "fastclock")]
#[command(about = "A calm, terminal-based intermittent fasting timer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Plan to start with (e.g. 16-8, 18:6). Defaults to the one in settings.json
    #[arg(short, long)]
    plan: Option<String>,

    /// Current streak in days to display
    #[arg(long)]
    streak: Option<u32>,

    /// Number of completed fasts to display
    #[arg(long)]
    total_fasts: Option<u32>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available fasting plans
    Plans,
    /// Write a default settings.json to the fastclock directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Plans) => {
            print_plans();
            Ok(())
        }
        Some(Commands::Init) => {
            let dir = ensure_app_dir()?;
            let path = settings_file()?;
            if path.exists() {
                anyhow::bail!("Settings already exist: {}", path.display());
            }
            save_settings(&path, &Settings::default())?;
            println!("Initialized fastclock directory: {}", dir.display());
            println!("Edit {} to change the default plan and streak counters.", path.display());
            Ok(())
        }
        None => {
            let mut settings = load_settings(settings_file()?)?;
            if let Some(streak) = cli.streak {
                settings.streak_days = streak;
            }
            if let Some(total) = cli.total_fasts {
                settings.total_fasts = total;
            }
            let plan = match cli.plan.as_deref() {
                Some(key) => find_plan(key)?,
                None => settings.plan()?,
            };

            logging::init_logging(&persistence::log_file()?, cli.verbose)?;
            run_tui(plan, &settings)
        }
    }
}

fn print_plans() {
    for plan in catalog() {
        println!(
            "{:<6} {:<6} {:<13} {}",
            plan.id,
            plan.name,
            plan.difficulty.name(),
            plan.description
        );
    }
}

fn run_tui(plan: &'static Plan, settings: &Settings) -> Result<()> {
    info!(plan = plan.id, policy = ?settings.plan_change, "starting fastclock");

    let mut app = AppState::new(plan, settings)?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let snapshot = app.snapshot();
    info!(
        phase = snapshot.phase.to_tag(),
        remaining = snapshot.remaining_secs,
        running = snapshot.running,
        "exiting"
    );

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let refresh = ticker::refresh_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Wait for input, but never past the next scheduled tick
        let timeout = app.ticker().wait_time(Instant::now(), refresh);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key, Instant::now())? {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}
