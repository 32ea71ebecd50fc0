//! CLI administration tool for pass-in.
//!
//! Runs the same services as the HTTP API directly against PostgreSQL, for
//! organizers working from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Create an event (prompts for missing fields)
//! cargo run --bin admin -- event create --title "Tech Summit" --max 2
//!
//! # List events, optionally filtered by title
//! cargo run --bin admin -- event list --query summit
//!
//! # Show one event with its attendee count
//! cargo run --bin admin -- event show <event-id>
//!
//! # List attendees of an event
//! cargo run --bin admin -- attendee list <event-id>
//!
//! # Print a badge / check an attendee in
//! cargo run --bin admin -- attendee badge <attendee-id>
//! cargo run --bin admin -- attendee check-in <attendee-id>
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `PUBLIC_BASE_URL` (optional): base of the check-in link on badges

use pass_in::application::dto::EventRegistration;
use pass_in::domain::identity::UuidGenerator;
use pass_in::infrastructure::Repositories;
use pass_in::state::AppState;
use pass_in::utils::badge_url::check_in_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;
use url::Url;

/// CLI tool for managing pass-in.
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
    /// Manage events
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Manage attendees
    Attendee {
        #[command(subcommand)]
        action: AttendeeAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum EventAction {
    /// Create a new event
    Create {
        #[arg(short, long)]
        title: Option<String>,

        /// URL-friendly identifier (e.g., "tech-summit")
        #[arg(short, long)]
        slug: Option<String>,

        #[arg(short, long)]
        details: Option<String>,

        /// Maximum number of attendees (unlimited if omitted)
        #[arg(short, long)]
        max: Option<i32>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List events, newest first
    List {
        /// Page index, starting at 0
        #[arg(short, long, default_value_t = 0)]
        page: u32,

        /// Case-insensitive title filter
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Show an event with its attendee count
    Show { event_id: String },
}

#[derive(Subcommand)]
enum AttendeeAction {
    /// List attendees of an event
    List {
        event_id: String,

        #[arg(short, long, default_value_t = 0)]
        page: u32,

        /// Case-insensitive name filter
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Print the badge of an attendee
    Badge { attendee_id: String },

    /// Check an attendee in
    CheckIn {
        attendee_id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
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

    let public_base_url = match std::env::var("PUBLIC_BASE_URL") {
        Ok(raw) => Some(Url::parse(&raw).context("PUBLIC_BASE_URL must be a valid URL")?),
        Err(_) => None,
    };

    let state = AppState::new(
        Repositories::postgres(pool.clone()),
        Arc::new(UuidGenerator),
        public_base_url,
    );

    match cli.command {
        Commands::Event { action } => handle_event_action(action, &state).await?,
        Commands::Attendee { action } => handle_attendee_action(action, &state).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_event_action(action: EventAction, state: &AppState) -> Result<()> {
    match action {
        EventAction::Create {
            title,
            slug,
            details,
            max,
            yes,
        } => create_event(state, title, slug, details, max, yes).await,
        EventAction::List { page, query } => list_events(state, page, &query).await,
        EventAction::Show { event_id } => show_event(state, &event_id).await,
    }
}

async fn handle_attendee_action(action: AttendeeAction, state: &AppState) -> Result<()> {
    match action {
        AttendeeAction::List {
            event_id,
            page,
            query,
        } => list_attendees(state, &event_id, page, &query).await,
        AttendeeAction::Badge { attendee_id } => print_badge(state, &attendee_id).await,
        AttendeeAction::CheckIn { attendee_id, yes } => {
            check_in(state, &attendee_id, yes).await
        }
    }
}

/// Creates an event, prompting for the title and slug when not given.
///
/// Validation runs before the confirmation prompt, so a rejected title or
/// slug never reaches the database.
async fn create_event(
    state: &AppState,
    title: Option<String>,
    slug: Option<String>,
    details: Option<String>,
    maximum_attendees: Option<i32>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🎫 Create Event".bright_blue().bold());
    println!();

    let title = match title {
        Some(t) => t,
        None => Input::new().with_prompt("Title").interact_text()?,
    };

    let slug = match slug {
        Some(s) => s,
        None => Input::new()
            .with_prompt("Slug")
            .with_initial_text(title.to_lowercase().replace(' ', "-"))
            .interact_text()?,
    };

    let registration = EventRegistration::new(title, slug, details, maximum_attendees)
        .map_err(|e| anyhow::anyhow!("Invalid event: {}", e))?;

    println!("{}", "Event details:".bright_white().bold());
    println!("  Title: {}", registration.title.cyan());
    println!("  Slug:  {}", registration.slug.cyan());
    println!(
        "  Max:   {}",
        registration
            .maximum_attendees
            .map_or_else(|| "unlimited".to_string(), |m| m.to_string())
            .cyan()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this event?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let event = state
        .event_service
        .create_event(registration)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create event: {}", e))?;

    println!();
    println!("{}", "✅ Event created successfully!".green().bold());
    println!("  ID: {}", event.event_id.bright_yellow().bold());
    println!();

    Ok(())
}

/// Lists one page of events.
///
/// # Output Format
///
/// ```text
/// 📋 Events (page 0)
///
///   ID                                    Title                          Max
///   ─────────────────────────────────────────────────────────────────────────
///   0f8fad5b-d9cb-469f-a165-70867728950e  Tech Summit                    2
/// ```
async fn list_events(state: &AppState, page: u32, query: &str) -> Result<()> {
    println!(
        "{}",
        format!("📋 Events (page {page})").bright_blue().bold()
    );
    println!();

    let events = state
        .event_service
        .list_events(page, query)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list events: {}", e))?;

    if events.is_empty() {
        println!("{}", "  No events found".yellow());
        return Ok(());
    }

    println!(
        "  {:<37} {:<30} {:<10}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Max".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for event in &events {
        println!(
            "  {:<37} {:<30} {}",
            event.event_id.bright_black(),
            event.title.cyan(),
            event
                .maximum_attendees
                .map_or_else(|| "-".to_string(), |m| m.to_string())
        );
    }

    println!();
    println!("  Shown: {}", events.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn show_event(state: &AppState, event_id: &str) -> Result<()> {
    let event = state
        .event_service
        .get_event_data(event_id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Event not found")?;

    println!("{}", "🎫 Event".bright_blue().bold());
    println!();
    println!("  ID:        {}", event.event_id.bright_black());
    println!("  Title:     {}", event.title.cyan().bold());
    println!("  Slug:      {}", event.slug);
    if let Some(ref details) = event.details {
        println!("  Details:   {}", details);
    }
    println!(
        "  Attendees: {} / {}",
        event
            .attendee_amount
            .unwrap_or_default()
            .to_string()
            .bright_green()
            .bold(),
        event
            .maximum_attendees
            .map_or_else(|| "unlimited".to_string(), |m| m.to_string())
    );
    println!(
        "  Created:   {}",
        event.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );
    println!();

    Ok(())
}

async fn list_attendees(state: &AppState, event_id: &str, page: u32, query: &str) -> Result<()> {
    let (attendees, total) = tokio::try_join!(
        state
            .attendee_service
            .get_event_attendees(event_id, query, page),
        state
            .attendee_service
            .get_total_attendees_in_event(event_id, query),
    )
    .map_err(|e| anyhow::anyhow!("Failed to list attendees: {}", e))?;

    println!(
        "{}",
        format!("👥 Attendees (page {page})").bright_blue().bold()
    );
    println!();

    if attendees.is_empty() {
        println!("{}", "  No attendees found".yellow());
        return Ok(());
    }

    println!(
        "  {:<30} {:<35} {:<10}",
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for attendee in &attendees {
        let status = if attendee.checked_in_at.is_some() {
            "CHECKED IN".green()
        } else {
            "REGISTERED".bright_black()
        };

        println!(
            "  {:<30} {:<35} {}",
            attendee.name.cyan(),
            attendee.email,
            status
        );
    }

    println!();
    println!("  Total: {}", total.to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn print_badge(state: &AppState, attendee_id: &str) -> Result<()> {
    let credential = state
        .attendee_service
        .get_attendee_event_credential(attendee_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load badge: {}", e))?;

    println!("{}", "🪪 Badge".bright_blue().bold());
    println!();
    println!("  {}", credential.name.bright_white().bold());
    println!("  {}", credential.email);
    println!("  {}", credential.event_title.cyan());

    if let Some(ref base) = state.public_base_url {
        let url = check_in_url(base, attendee_id)?;
        println!();
        println!("  Check-in: {}", url.to_string().bright_yellow());
    }
    println!();

    Ok(())
}

async fn check_in(state: &AppState, attendee_id: &str, skip_confirm: bool) -> Result<()> {
    let attendee = state
        .attendee_service
        .get_attendee_data(attendee_id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    if attendee.checked_in_at.is_some() {
        println!("{}", "⚠️  This attendee has already checked in".yellow());
        return Ok(());
    }

    println!("  Attendee: {}", attendee.name.cyan());
    println!("  Email:    {}", attendee.email.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Check this attendee in?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    state
        .check_in_service
        .make_event_check_in(attendee_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to check in: {}", e))?;

    println!("{}", "✅ Checked in!".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let events: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
                .fetch_one(pool)
                .await?;
            let attendees: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attendees")
                .fetch_one(pool)
                .await?;
            let check_ins: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM check_ins")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Events:     {}", events.to_string().bright_green().bold());
            println!("  Attendees:  {}", attendees.to_string().bright_green().bold());
            println!("  Check-ins:  {}", check_ins.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
