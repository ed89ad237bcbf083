//! Payment Form - terminal client for the payment service
//!
//! A Ratatui-based form that collects cardholder details, validates them
//! locally and submits them to the configured payment endpoint.

mod api;
mod app;
mod config;
mod headless;
mod session;
mod state;
mod ui;

use anyhow::Result;
use api::HttpPaymentClient;
use app::App;
use clap::Parser;
use config::FormConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use session::FormSession;
use std::io::{self, Read};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Event poll interval; also bounds how late a notification can expire
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Parser)]
#[command(name = "payment-form", version, about)]
struct Cli {
    /// Read field values as a JSON object from stdin, submit once and print a report
    #[arg(long)]
    headless: bool,

    /// Payment service address (overrides config and environment)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "payment_form=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = FormConfig::load()?.with_base_url(cli.base_url);

    let client = HttpPaymentClient::new(&config)?;
    tracing::info!("Payment endpoint: {}", client.url());
    let session = FormSession::new(config.notification_lifetime());

    if cli.headless {
        return run_headless(client, session).await;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(Arc::new(client), session);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_headless(client: HttpPaymentClient, session: FormSession) -> Result<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let result = headless::run(client, session, &input).await?;
    println!("{}", serde_json::to_string_pretty(&result.report)?);

    if !result.succeeded {
        std::process::exit(1);
    }
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App<HttpPaymentClient>,
) -> Result<()> {
    loop {
        // Apply finished submissions and expire notifications
        app.drain_events();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                app.handle_key(key);
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
