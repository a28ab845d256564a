use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use style_advisor::{cli, client, config, error, rate, terminal};
use style_advisor_common::{FeedbackEvent, Session};
use cli::{Cli, Commands};
use client::{AdvisorClient, ImageUpload};
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "style_advisor=debug" } else { "style_advisor=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        if e.is_transport() {
            tracing::error!(error = ?e, "request failed");
        }
        eprintln!("✖ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    let server_url = cli.server.clone().unwrap_or_else(|| config.server_url());

    match cli.command {
        Commands::Analyze { image, style, rate } => {
            let style = style.unwrap_or(config.default_style);
            let upload = ImageUpload::from_path(&image)?;
            let client = AdvisorClient::new(&server_url, config.timeout())?;

            let mut session = Session::new();
            let ticket = session.begin_submit()?;

            let pb = spinner("Analyzing photo...");
            let outcome = client.analyze(&upload, style).await;
            pb.finish_and_clear();

            session.complete(ticket, outcome)?;

            if let Some(view) = session.view() {
                print!("{}", terminal::render_text(view));
            }

            if rate {
                println!();
                let statuses = rate::rate_cards(&client, &session, &mut rate::TerminalPrompt).await?;
                let saved = statuses.iter().filter(|(_, s)| s.is_success()).count();
                println!("\n✔ {} of {} ratings saved", saved, statuses.len());
            }
        }

        Commands::Feedback { shape, style, recommendation, rating } => {
            let client = AdvisorClient::new(&server_url, config.timeout())?;
            let event = FeedbackEvent { shape, style, recommendation, rating };
            let status = client.send_feedback(&event).await;
            println!("{}", status.note());
            if !status.is_success() {
                std::process::exit(1);
            }
        }

        Commands::TrainReward => {
            let client = AdvisorClient::new(&server_url, config.timeout())?;
            let pb = spinner("Training reward model...");
            let outcome = client.train_reward().await;
            pb.finish_and_clear();
            println!("✔ Reward model {}", outcome?);
        }

        Commands::Config { set_server, set_style, show } => {
            let mut changed = false;

            if let Some(url) = set_server {
                config.set_server_url(url)?;
                changed = true;
            }
            if let Some(style) = set_style {
                config.default_style = style;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ Settings saved");
            }

            if show || !changed {
                println!("Settings:");
                println!("  Server: {}", config.server_url());
                println!("  Default style: {}", config.default_style);
                match config.timeout_seconds {
                    Some(secs) => println!("  Timeout: {}s", secs),
                    None => println!("  Timeout: none"),
                }
            }
        }
    }

    Ok(())
}
