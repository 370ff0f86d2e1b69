//! randuser — random user widget in the terminal.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use randuser::components::{Activation, App};
use randuser::config::Config;
use randuser::constants;
use randuser::env::Env;
use randuser::fetcher::{HttpUserSource, RandomIds};

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::LocalSet;
use tracing_subscriber::EnvFilter;

use cli::args::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let mut config = Config::load(cli.config.as_deref(), &Env::real())
        .context("failed to load configuration")?;
    config
        .apply_overrides(cli.base_url, cli.interval_ms)
        .context("invalid command-line option")?;
    tracing::debug!(?config, "configuration loaded");

    let source = HttpUserSource::new(&config.api).context("failed to build HTTP client")?;

    LocalSet::new()
        .run_until(run_widget(config, Arc::new(source)))
        .await
}

/// Install the stderr log subscriber. `RANDUSER_LOG` wins over `-v`.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_env(constants::ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Mount the widget and drive it from stdin until `q` or EOF.
async fn run_widget(config: Config, source: Arc<HttpUserSource>) -> Result<()> {
    let app = App::mount(
        source,
        Box::new(RandomIds::new(config.ids.min, config.ids.max)),
        config.throttle.interval(),
    );

    // Fetches finish outside the input loop; redraw when state changes.
    let (redraw_tx, mut redraw_rx) = mpsc::unbounded_channel();
    app.subscribe(move |_| {
        let _ = redraw_tx.send(());
    });

    draw(&app);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = line.context("failed to read input")?;
                match line.as_deref().map(str::trim) {
                    None | Some("q") | Some("quit") => break,
                    Some(_) => {
                        if let Activation::Throttled = app.click() {
                            println!("{}", cli::throttled_note());
                        }
                    }
                }
            }
            Some(()) = redraw_rx.recv() => draw(&app),
        }
    }

    app.unmount();
    Ok(())
}

fn draw(app: &App) {
    print!("{}", cli::style_view(&app.render()));
    println!("{}", cli::hint());
}
