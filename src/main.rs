// src/main.rs

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use scano_client::app::{App, ScanOutcome};
use scano_client::config::{default_config_path, load_config};
use scano_client::core::presenter::{present, ReportView};
use scano_client::{logging, ui, ReportClient};
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

mod cli;

use cli::Args;

const TICK_RATE: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let log_file = logging::initialize_logging()?;

    let config_path = args.config.clone().or_else(default_config_path);
    let config = load_config(config_path.as_deref(), args.overrides())?;
    info!(
        base_url = %config.base_url,
        timeout_secs = config.timeout.as_secs(),
        config_file = ?config_path,
        "Starting scano client."
    );
    let client = ReportClient::new(config)?;

    let target = args.target.clone().unwrap_or_default();
    if args.pdf {
        let url = client.open_pdf(&target)?;
        println!("Opened {url}");
        return Ok(());
    }
    if args.print {
        return print_report(&client, &target).await;
    }
    let result = run_tui(client, target).await;
    if result.is_err() {
        eprintln!("Log written to {}", log_file.display());
    }
    result
}

/// One scan, one plain-text report on stdout.
async fn print_report(client: &ReportClient, target: &str) -> Result<()> {
    match client.scan(target).await {
        Ok(report) => {
            print!("{}", ui::render_text(&present(&report)));
            Ok(())
        }
        Err(e) if e.is_input_error() => Err(e.into()),
        Err(e) => {
            print!("{}", ui::render_text(&ReportView::failure(target.trim(), &e.to_string())));
            Err(e.into())
        }
    }
}

async fn run_tui(client: ReportClient, input: String) -> Result<()> {
    // --- Setup ---
    let panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        panic_hook(info);
    }));

    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, client, input).await;

    // --- Restore Terminal ---
    restore_terminal()?;
    if let Err(e) = &result {
        error!(error = %e, "UI loop ended with an error.");
    }
    result
}

fn restore_terminal() -> std::io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    client: ReportClient,
    input: String,
) -> Result<()> {
    let mut app = App::new(input);
    let (tx, mut rx) = mpsc::channel::<ScanOutcome>(8);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&app, frame))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, &client, &tx, key);
                }
            }
        } else {
            app.on_tick();
        }

        while let Ok(outcome) = rx.try_recv() {
            app.complete_scan(outcome);
        }
    }
    Ok(())
}

/// Keyboard handling. The input box is always live; control chords drive
/// everything else.
fn handle_key(app: &mut App, client: &ReportClient, tx: &mpsc::Sender<ScanOutcome>, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Char('p') if ctrl => open_pdf(app, client),
        KeyCode::Char('n') if ctrl => app.reset(),
        KeyCode::Char('u') if ctrl => app.clear_input(),
        KeyCode::Char(c) if !ctrl => app.push_char(c),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Enter => start_scan(app, client, tx),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
}

fn start_scan(app: &mut App, client: &ReportClient, tx: &mpsc::Sender<ScanOutcome>) {
    let Some(ticket) = app.begin_scan() else {
        return;
    };
    let client = client.clone();
    let tx = tx.clone();
    let handle = tokio::spawn(async move {
        let result = client.scan(&ticket.target).await;
        let _ = tx.send(ScanOutcome { id: ticket.id, result }).await;
    });
    app.track_in_flight(handle.abort_handle());
}

fn open_pdf(app: &mut App, client: &ReportClient) {
    let Some(target) = app.request_pdf() else {
        return;
    };
    let result = client.open_pdf(&target);
    app.pdf_opened(result);
}
