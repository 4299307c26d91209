use std::io;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;

use flashdeck_core::AnalyzerClient;

mod action;
mod app;
mod config_file;
mod input;
mod logging;
mod model;
mod theme;
mod tui_event;
mod view;

use app::App;
use tui_event::{BackendCommand, BackendEvent};

/// Flashdeck — turn a video link into discardable flashcards in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Video link to pre-fill the input with
    link: Option<String>,

    /// Analyzer base endpoint (e.g. http://localhost:8000)
    #[arg(long)]
    endpoint: Option<String>,

    /// Color theme: hacker (default) or modern
    #[arg(long)]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Guard must live as long as the process or buffered logs are dropped
    let _log_guard = logging::init();

    // Resolve config from CLI flags > env vars > config file > defaults
    let file_cfg = config_file::load_config();
    let endpoint = args
        .endpoint
        .or_else(|| std::env::var("FLASHDECK_ENDPOINT").ok())
        .or_else(|| file_cfg.endpoint())
        .unwrap_or_else(|| flashdeck_core::DEFAULT_ENDPOINT.to_string());
    let theme_name = args
        .theme
        .or_else(|| file_cfg.theme())
        .unwrap_or_else(|| "hacker".to_string());

    let theme = match theme_name.as_str() {
        "modern" => theme::Theme::modern(),
        _ => theme::Theme::hacker(),
    };

    tracing::info!(%endpoint, theme = %theme_name, "starting flashdeck");

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let backend_terminal = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_terminal)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(theme);
    if let Some(link) = args.link {
        app.session.link = link;
        app.session.cursor_end();
    }

    // Backend command/event channels
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<BackendEvent>();
    let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel::<BackendCommand>();
    app.backend_cmd_tx = Some(cmd_tx);

    // Spawn the backend task: performs analyze requests off the render loop.
    // Commands are handled one at a time; the inert submit trigger means at
    // most one is ever queued. Every command produces exactly one event.
    let client = AnalyzerClient::new(endpoint);
    tokio::spawn(async move {
        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                BackendCommand::Analyze { link } => {
                    let event = match client.analyze(&link).await {
                        Ok(concepts) => BackendEvent::AnalysisComplete { concepts },
                        Err(e) => BackendEvent::AnalysisFailed {
                            error: e.to_string(),
                        },
                    };
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
        }
    });

    // Main event loop
    let tick_rate = Duration::from_millis(100);

    loop {
        // Draw
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            // Backend events
            maybe_event = event_rx.recv() => {
                if let Some(backend_event) = maybe_event {
                    app.handle_backend_event(backend_event);
                    // Drain any additional queued backend events
                    while let Ok(evt) = event_rx.try_recv() {
                        app.handle_backend_event(evt);
                    }
                }
            }
            // Terminal input events
            _ = async {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let action = input::map_event(&evt, &app.effective_input_mode());
                        app.update(action);
                    }
                }
            } => {}
        }

        // Process tick
        app.update(action::Action::Tick);

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    Ok(())
}
