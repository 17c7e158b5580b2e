//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use seo_autopilot::{
    cli::{Autopilot, AuthCmd, Commands, ProjectsCmd},
    commands::{
        auth::{handle_login, handle_logout, handle_status},
        new_project::handle_new_project,
        projects::{handle_list, handle_show},
        CommandContext,
    },
    LOG_ENV_VAR,
};

/// Run the CLI.
#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // A missing .env is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    let app = Autopilot::parse();
    init_tracing(app.quiet, app.verbose)?;

    let ctx = CommandContext::new(&app.service).context("failed to load service configuration")?;

    match &app.command {
        Commands::Auth { cmd } => match cmd {
            AuthCmd::Login {
                email,
                password,
                sign_up,
            } => handle_login(&ctx, email, password, *sign_up).await?,
            AuthCmd::Logout => handle_logout(&ctx).await?,
            AuthCmd::Status => handle_status(&ctx).await?,
        },

        Commands::Projects { cmd } => match cmd {
            ProjectsCmd::List { json } => handle_list(&ctx, *json).await?,
            ProjectsCmd::Show { id, json } => handle_show(&ctx, *id, *json).await?,
            ProjectsCmd::New(args) => handle_new_project(&ctx, args).await?,
        },
    }

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
