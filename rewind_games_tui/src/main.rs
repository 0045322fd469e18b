//! Terminal UI for time-travel tic-tac-toe.

#![warn(missing_docs)]

mod app;
mod input;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "rewind_games_tui", about = "Time-travel tic-tac-toe in the terminal")]
struct Cli {
    /// Show the move list newest first.
    #[arg(long)]
    descending: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting Rewind Games TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(!cli.descending);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('r') => app.restart(),
                    KeyCode::Char('t') => app.toggle_order(),
                    KeyCode::Char('0') => app.jump_to_start(),
                    KeyCode::Char('[') => app.step_back(),
                    KeyCode::Char(']') => app.step_forward(),
                    KeyCode::Char(c @ '1'..='9') => {
                        app.play_square(c as usize - '1' as usize);
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => app.play_at_cursor(),
                    code @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down) => {
                        app.move_board_cursor(code);
                    }
                    _ => {}
                }
            }
        }
    }
}
