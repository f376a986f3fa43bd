use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ledger_core::models::ExpenseRecord;
use ledger_core::traits::UserStore;
use ledger_db::{Database, DatabaseConfig};

#[derive(Parser)]
#[command(name = "ledger", version, about = "Expense ledger database tools")]
struct Cli {
    /// SQLite connection string
    #[arg(long, global = true, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database file (if missing) and both tables
    InitDb,

    /// List all expense records
    Records,

    /// List all user ids and names
    Users,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ledger=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db = connect_db(cli.database_url).await?;

    match cli.command {
        Commands::InitDb => cmd_init_db(&db).await?,
        Commands::Records => cmd_records(&db).await?,
        Commands::Users => cmd_users(&db).await?,
    }

    db.close().await;
    Ok(())
}

async fn connect_db(url: Option<String>) -> Result<Database> {
    let mut config = DatabaseConfig::from_env()?;
    if let Some(url) = url {
        config.url = url;
    }
    Database::connect(&config)
        .await
        .with_context(|| format!("Failed to open {}", config.url))
}

async fn cmd_init_db(db: &Database) -> Result<()> {
    db.migrate().await.context("Failed to create tables")?;
    tracing::info!("Database initialized");
    Ok(())
}

async fn cmd_records(db: &Database) -> Result<()> {
    let records = db.record_repo().list().await?;
    if records.is_empty() {
        println!("No records.");
        return Ok(());
    }

    println!("{:>6}  {:>10}  {:<25}  ITEM", "ID", "AMOUNT", "DATE");
    for record in &records {
        println!("{}", format_record(record));
    }
    Ok(())
}

async fn cmd_users(db: &Database) -> Result<()> {
    let users = db.user_repo().list_users().await?;
    if users.is_empty() {
        println!("No users.");
        return Ok(());
    }

    println!("{:>6}  NAME", "ID");
    for user in &users {
        println!("{:>6}  {}", user.id, user.name);
    }
    Ok(())
}

fn format_record(record: &ExpenseRecord) -> String {
    format!(
        "{:>6}  {:>10}  {:<25}  {}",
        record.id,
        record.amount,
        record.record_date.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        record.item
    )
}
