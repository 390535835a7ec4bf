//! CLI administration tool for the course directory.
//!
//! Provides commands for managing administrator accounts, viewing row counts,
//! and performing database checks without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create an administrator (prompts for missing values)
//! cargo run --bin admin -- user create --email admin@example.com
//!
//! # List administrators
//! cargo run --bin admin -- user list
//!
//! # View row counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use course_directory::application::services::hash_password;
use course_directory::domain::repositories::UserRepository;
use course_directory::infrastructure::persistence::PgUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the course directory.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage administrator accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create an administrator account
    Create {
        /// Sign-in email
        #[arg(short, long)]
        email: Option<String>,

        /// Password (generated if omitted and left empty at the prompt)
        #[arg(short, long)]
        password: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List administrator accounts
    List,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create {
            email,
            password,
            yes,
        } => create_user(repo, email, password, yes).await?,
        UserAction::List => list_users(repo).await?,
    }

    Ok(())
}

/// Creates an administrator account.
///
/// # Flow
///
/// 1. Prompt for email (or use provided)
/// 2. Prompt for password, generating one when left empty
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Store the bcrypt hash
///
/// A generated password is shown once and cannot be retrieved later.
async fn create_user(
    repo: Arc<PgUserRepository>,
    email: Option<String>,
    password: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create administrator".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let email = email.trim().to_string();
    if email.is_empty() {
        anyhow::bail!("Email must not be empty");
    }

    let (password, generated) = match password {
        Some(p) => (p, false),
        None if skip_confirm => (generate_password(), true),
        None => {
            let typed = Password::new()
                .with_prompt("Password (leave empty to generate)")
                .allow_empty_password(true)
                .interact()?;
            if typed.is_empty() {
                (generate_password(), true)
            } else {
                (typed, false)
            }
        }
    };

    println!();
    println!("{}", "Account details:".bright_white().bold());
    println!("  Email:    {}", email.cyan());
    if generated {
        println!("  Password: {}", password.bright_yellow().bold());
        println!();
        println!(
            "{}",
            "IMPORTANT: Save this password now! It is stored only as a hash."
                .red()
                .bold()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .context("Password hashing task failed")?
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

    let user = repo
        .create(&email, &hash)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "Account created successfully!".green().bold(),
        user.id.to_string().bright_white()
    );
    println!();
    println!("{}", "Sign in with:".bright_white());
    println!(
        "  curl -X POST -H \"Content-Type: application/json\" \
         -d '{{\"username\":\"{}\",\"password\":\"...\"}}' \
         http://localhost:4000/v1/account/signin",
        email.bright_yellow()
    );
    println!();

    Ok(())
}

async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "Administrators".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No accounts found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<40}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold()
    );
    println!("  {}", "-".repeat(46).bright_black());

    for user in &users {
        println!(
            "  {:<5} {}",
            user.id.to_string().bright_black(),
            user.email.cyan()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays row counts per table.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let tables = [
        ("Universities", "university"),
        ("Courses", "course"),
        ("Articles", "content"),
        ("Associations", "article"),
        ("Users", "gogermany_user"),
    ];

    for (label, table) in tables {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .with_context(|| format!("Failed to count {table}"))?;

        println!(
            "  {:<14} {}",
            format!("{label}:"),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let migrations: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM _sqlx_migrations WHERE success",
            )
            .fetch_one(pool)
            .await
            .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

/// Generates a random 20 character alphanumeric password.
fn generate_password() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const PASSWORD_LEN: usize = 20;

    let mut rng = rand::rng();

    (0..PASSWORD_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
