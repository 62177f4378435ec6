mod banner;
mod config;

use std::io::{self, IsTerminal, Write};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use platform_obs::ObsConfig;
use products_hr::{DbStore, Session, TerminalPrompter, seed_hr_demo};
use tracing::info;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "employee-tracker", version, about = "Manage employees, roles and departments")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive menu (default)
    Run,
    /// Apply or roll back the schema
    Migrate {
        #[arg(value_enum, default_value_t = MigrationDirection::Up)]
        direction: MigrationDirection,
    },
    /// Insert a small demo dataset
    Seed,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MigrationDirection {
    Up,
    Down,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    platform_obs::init_tracing(ObsConfig {
        ansi: io::stderr().is_terminal(),
        ..ObsConfig::default()
    })?;

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(config).await,
        Commands::Migrate { direction } => migrate(config, direction).await,
        Commands::Seed => seed(config).await,
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let pool = platform_db::connect(&config.database)
        .await
        .context("could not reach the database")?;

    let mut stdout = io::stdout();
    if config.show_banner {
        writeln!(stdout, "{}", banner::banner())?;
    }
    writeln!(stdout, "Connection successful")?;

    Session::new(DbStore::new(pool), TerminalPrompter::stdio(), stdout)
        .run()
        .await?;
    info!("goodbye");
    Ok(())
}

async fn migrate(config: AppConfig, direction: MigrationDirection) -> anyhow::Result<()> {
    let pool = platform_db::connect(&config.database).await?;
    match direction {
        MigrationDirection::Up => Migrator::up(&pool, None).await?,
        MigrationDirection::Down => Migrator::down(&pool, None).await?,
    }
    info!(?direction, "migrations applied");
    platform_db::disconnect(pool).await?;
    Ok(())
}

async fn seed(config: AppConfig) -> anyhow::Result<()> {
    let pool = platform_db::connect(&config.database).await?;
    let seeded = seed_hr_demo(&pool).await.context("seeding failed")?;
    info!(
        departments = seeded.departments.len(),
        roles = seeded.roles.len(),
        employees = seeded.employees.len(),
        "demo data inserted"
    );
    platform_db::disconnect(pool).await?;
    Ok(())
}
