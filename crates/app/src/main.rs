//! Gagso - schedule client
//!
//! Main entry point for the `gagso` command line.

use std::fmt::Display;
use std::process::ExitCode;

use clap::Parser;
use gagso_app::cli::resolve_month;
use gagso_app::commands::{self, RegisterReport};
use gagso_app::utils::logging::init_tracing;
use gagso_app::{AppContext, Cli, Command};
use gagso_domain::{GagsoError, Result};
use gagso_infra::config;
use serde::Serialize;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env before configuration; logged once tracing is up
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_from_file(Some(path.clone()))?,
        None => config::load()?,
    };
    cli.apply_overrides(&mut config);

    init_tracing(&config.logging)?;
    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => debug!(error = %e, "No .env file loaded"),
    }

    let ctx = AppContext::new(config)?;

    match run(&ctx, cli.command, cli.json).await {
        Ok(code) => Ok(code),
        Err(err) => {
            error!(error = %err, disposition = ?err.disposition(), "Command failed");
            eprintln!("error: {}", err.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(ctx: &AppContext, command: Command, json: bool) -> Result<ExitCode> {
    match command {
        Command::Month { year, month } => {
            let month = resolve_month(year, month, ctx.clock.today())?;
            emit(&commands::month_view(ctx, month).await?, json)?;
        }
        Command::Day { date } => emit(&commands::day_view(ctx, date).await?, json)?,
        Command::Show { schedule_id } => {
            emit(&commands::show_schedule(ctx, &schedule_id).await?, json)?;
        }
        Command::Register(args) => {
            let report = commands::register_schedule(ctx, &args.to_form()?).await?;
            emit(&report, json)?;
            if let RegisterReport::Rejected { .. } = report {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Search { keyword } => {
            emit(&commands::search_schedules(ctx, &keyword).await?, json)?;
        }
        Command::Today => emit(&commands::today_schedules(ctx).await?, json)?,
        Command::Upcoming => emit(&commands::upcoming_schedules(ctx).await?, json)?,
        Command::Stats => emit(&commands::schedule_statistics(ctx).await?, json)?,
        Command::Employees { keyword } => {
            let report = commands::search_employees(ctx, &keyword).await;
            emit(&report, json)?;
            if report.is_failure() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Access { schedule_id } => {
            emit(&commands::check_access(ctx, &schedule_id).await?, json)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[allow(clippy::print_stdout)]
fn emit<R: Serialize + Display>(report: &R, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(report)
            .map_err(|e| GagsoError::Internal(format!("Failed to render JSON: {e}")))?;
        println!("{rendered}");
    } else {
        println!("{report}");
    }
    Ok(())
}
