use std::fs::OpenOptions;
use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::client::RecommendClient;
use crate::config::Config;
use crate::controller::App;
use crate::error::ClientError;
use crate::models::Recommendation;
use crate::ui;

type SettledResult = Result<Recommendation, ClientError>;

/// Initialize tracing and logging for the application.
/// The TUI owns the terminal, so the fmt layer writes to a log file.
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rs_rag_ui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

/// Run the TUI: enable raw mode and the alternate screen, drive the event
/// loop, and restore the terminal on the way out.
pub async fn run_app(config: Config) -> anyhow::Result<()> {
    info!("Initializing recommendation client for {}", config.api_url);
    let client = RecommendClient::new(&config.api_url);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, client).await;

    restore_terminal(&mut terminal)?;
    result
}

/// One task owns the state: keyboard events are polled with a short budget
/// each frame, and the single in-flight request settles over the channel.
async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    client: RecommendClient,
) -> anyhow::Result<()> {
    let mut app = App::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<SettledResult>();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key.code, key.modifiers, &mut app, &client, &tx);
                }
            }
        }

        while let Ok(result) = rx.try_recv() {
            if let Err(e) = &result {
                error!("Request settled with error: {}", e);
            }
            app.complete(result);
        }

        if app.should_quit {
            break;
        }

        tokio::task::yield_now().await;
    }

    Ok(())
}

fn handle_key(
    code: KeyCode,
    modifiers: KeyModifiers,
    app: &mut App,
    client: &RecommendClient,
    tx: &mpsc::UnboundedSender<SettledResult>,
) {
    match code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => app.clear_query(),
        KeyCode::Enter => {
            // begin_submit refuses while a request is in flight, so at most
            // one call is ever outstanding
            if let Some(question) = app.begin_submit() {
                info!("Submitting question: {}", question);
                let client = client.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = client.ask(&question).await;
                    // receiver only goes away on shutdown
                    let _ = tx.send(result);
                });
            }
        }
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
