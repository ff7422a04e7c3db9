//! Ecoleta landing screen
//!
//! Lets the user pick a state and a city from the IBGE localities directory
//! and hands the pair to the collection points screen. The chosen route is
//! printed to stdout as JSON when the user submits.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::mpsc::UnboundedReceiver;

use ecoleta::application::App;
use ecoleta::domain::Route;
use ecoleta::infrastructure::{
    create_event_channel, init_logging, ChannelNavigator, Config, EventReceiver, Fetcher,
    IbgeDirectory,
};
use ecoleta::presentation::{render_ui, InputHandler};

const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Entry point for the landing screen.
///
/// Sets up logging and the terminal, runs the screen until the user submits
/// or quits, then restores the terminal.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or if terminal setup
/// fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    if let Err(err) = init_logging(&config.log_path()) {
        eprintln!("logging disabled: {err}");
    }

    let directory = IbgeDirectory::new(&config.api_url, config.timeout())?;
    tracing::info!(api_url = directory.base_url(), "starting");

    let (events_tx, mut events_rx) = create_event_channel();
    let mut fetcher = Fetcher::new(Arc::new(directory), events_tx);
    let (navigator, mut routes) = ChannelNavigator::channel();
    let mut app = App::new(Box::new(navigator));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &mut fetcher, &mut events_rx, &mut routes);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(route)) => println!("{}", serde_json::to_string(&route)?),
        Ok(None) => tracing::info!("left without choosing"),
        Err(err) => {
            tracing::error!(error = %err, "terminal failure");
            println!("{err:?}");
        }
    }

    Ok(())
}

/// Main event loop.
///
/// Runs queued fetches, applies their results, redraws and processes one key
/// per frame. Returns the route the screen navigated to, or `None` on quit.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    fetcher: &mut Fetcher,
    events: &mut EventReceiver,
    routes: &mut UnboundedReceiver<Route>,
) -> io::Result<Option<Route>> {
    app.initialize();

    loop {
        for request in app.take_requests() {
            fetcher.dispatch(request);
        }
        while let Ok(event) = events.try_recv() {
            app.apply(event);
        }
        if let Ok(route) = routes.try_recv() {
            return Ok(Some(route));
        }
        if app.should_quit {
            return Ok(None);
        }

        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(FRAME_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    InputHandler::handle_key_event(app, key.code, key.modifiers);
                }
            }
        }
    }
}
