//! Labtrack CLI - research project tracking from the terminal

use anyhow::bail;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use labtrack_core::auth::Auth;
use labtrack_core::config::Config;
use labtrack_core::model::{DeadlineState, Project, ProjectDraft, ProjectStatus, StatusHistory};
use labtrack_core::reviews;
use labtrack_core::status::{deadline_color, status_color};
use labtrack_core::store::{DashboardStore, ProjectStore, StatusFilter};
use tracing::debug;

#[derive(Parser)]
#[command(name = "labtrack")]
#[command(author, version, about = "Research project tracking client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage projects
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Show the dashboard: stats, recent status changes, upcoming deadlines
    Dashboard,

    /// Browse and submit peer reviews
    Reviews {
        #[command(subcommand)]
        action: ReviewAction,
    },

    /// Log in (no session is kept; verifies credentials only)
    Login {
        username: String,
        password: String,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ProjectAction {
    /// List projects, optionally filtered by status and search term
    List {
        /// Status filter (PENDING, IN_PROGRESS, COMPLETED, ON_HOLD,
        /// CANCELLED or ALL)
        #[arg(short, long, default_value = "ALL")]
        status: StatusFilter,
        /// Case-insensitive search over title and description
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show one project
    Show { id: i64 },
    /// Create a new project
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value = "PENDING")]
        status: ProjectStatus,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        /// Optional deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<NaiveDate>,
    },
    /// Change a project's status
    UpdateStatus { id: i64, status: ProjectStatus },
    /// Delete a project
    Delete { id: i64 },
    /// Show a project's status history
    History { id: i64 },
}

#[derive(Subcommand)]
enum ReviewAction {
    /// List all reviews
    List,
    /// Show one review
    Show { id: i64 },
    /// Submit a review body as raw JSON
    Submit {
        id: i64,
        /// Review payload, e.g. '{"rating": 5, "comments": "..."}'
        body: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration
    Show,
    /// Print the config file path
    Path,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    debug!(base_url = %config.api.resolved_base_url(), "loaded configuration");

    match cli.command {
        Commands::Projects { action } => {
            let store = ProjectStore::new(config.gateway()?);
            run_project_action(&store, action, cli.format).await
        }
        Commands::Dashboard => {
            let store = DashboardStore::new(config.gateway()?, config.dashboard.user_id);
            run_dashboard(&store, cli.format).await
        }
        Commands::Reviews { action } => run_review_action(&config, action, cli.format).await,
        Commands::Login { username, password } => {
            let mut auth = Auth::new(config.gateway()?);
            auth.login(&username, &password).await?;
            println!("Logged in as {username}.");
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                match cli.format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
                    OutputFormat::Text => print!("{}", toml::to_string_pretty(&config)?),
                }
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", Config::config_path()?.display());
                Ok(())
            }
        },
    }
}

/// Bail with the store's recorded error, if any
fn check(error: &Option<String>) -> anyhow::Result<()> {
    match error {
        Some(message) => bail!(message.clone()),
        None => Ok(()),
    }
}

async fn run_project_action(
    store: &ProjectStore,
    action: ProjectAction,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match action {
        ProjectAction::List { status, search } => {
            store.set_status_filter(status).await;
            store.set_search_term(search).await;
            store.fetch_all().await;
            let state = store.snapshot().await;
            check(&state.error)?;
            print_projects(&store.filtered_projects().await, format)
        }
        ProjectAction::Show { id } => {
            store.fetch_by_id(id).await;
            let state = store.snapshot().await;
            check(&state.error)?;
            match state.find(id) {
                Some(project) => print_project(project, format),
                None => bail!("project {id} not found"),
            }
        }
        ProjectAction::Create {
            title,
            description,
            status,
            start,
            end,
            deadline,
        } => {
            let draft = ProjectDraft {
                title,
                description,
                status,
                start_date: start,
                end_date: end,
                deadline,
            };
            store.create(&draft).await;
            let state = store.snapshot().await;
            check(&state.error)?;
            // the store appends the backend's entity on success
            match state.items.last() {
                Some(project) => {
                    println!("Created project {}.", project.id);
                    print_project(project, format)
                }
                None => bail!("create did not return a project"),
            }
        }
        ProjectAction::UpdateStatus { id, status } => {
            store.fetch_by_id(id).await;
            store.update_status(id, status).await;
            let state = store.snapshot().await;
            check(&state.error)?;
            match state.find(id) {
                Some(project) => print_project(project, format),
                None => bail!("project {id} not found"),
            }
        }
        ProjectAction::Delete { id } => {
            store.delete(id).await;
            let state = store.snapshot().await;
            check(&state.error)?;
            println!("Deleted project {id}.");
            Ok(())
        }
        ProjectAction::History { id } => {
            let history = store.status_history(id).await?;
            print_history(&history, format)
        }
    }
}

async fn run_dashboard(store: &DashboardStore, format: OutputFormat) -> anyhow::Result<()> {
    store.fetch_dashboard_data().await;
    let state = store.snapshot().await;
    check(&state.error)?;

    let (Some(stats), Some(summary)) = (state.stats, state.user_summary) else {
        bail!("dashboard data missing from response");
    };

    if let OutputFormat::Json = format {
        let payload = serde_json::json!({ "stats": stats, "userSummary": summary });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!(
        "Users: {}  Active projects: {}  Pending reviews: {}",
        stats.total_users, stats.active_projects, stats.pending_reviews
    );
    println!(
        "\n{} {} ({} projects, {} reviews)",
        summary.user.first_name,
        summary.user.last_name,
        summary.project_count,
        summary.review_count
    );

    if !stats.recent_status_changes.is_empty() {
        println!("\nRecent status changes:");
        for change in &stats.recent_status_changes {
            println!(
                "  {} {} -> {} at {} by {}",
                change.project_title,
                change.old_status,
                change.new_status,
                change.changed_at,
                change.changed_by
            );
        }
    }

    if !stats.upcoming_deadlines.is_empty() {
        println!("\nUpcoming deadlines:");
        for deadline in &stats.upcoming_deadlines {
            println!(
                "  {} due {} ({} days, {})",
                deadline.project_title,
                deadline.deadline,
                deadline.days_until_deadline,
                deadline.status
            );
        }
    }

    Ok(())
}

async fn run_review_action(
    config: &Config,
    action: ReviewAction,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let gateway = config.gateway()?;
    match action {
        ReviewAction::List => {
            let all = reviews::list(&gateway).await?;
            if all.is_empty() {
                println!("No reviews found.");
                return Ok(());
            }
            print_json_values(&all, format)
        }
        ReviewAction::Show { id } => {
            let review = reviews::get(&gateway, id).await?;
            println!("{}", serde_json::to_string_pretty(&review)?);
            Ok(())
        }
        ReviewAction::Submit { id, body } => {
            let body: serde_json::Value = serde_json::from_str(&body)?;
            let updated = reviews::update(&gateway, id, &body).await?;
            println!("{}", serde_json::to_string_pretty(&updated)?);
            Ok(())
        }
    }
}

fn print_json_values(values: &[serde_json::Value], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(values)?),
        OutputFormat::Text => {
            for value in values {
                println!("{}", serde_json::to_string(value)?);
            }
        }
    }
    Ok(())
}

fn print_projects(projects: &[Project], format: OutputFormat) -> anyhow::Result<()> {
    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(projects)?);
        return Ok(());
    }
    if projects.is_empty() {
        println!("No projects found.");
        return Ok(());
    }
    for project in projects {
        println!(
            "#{:<4} {:<32} {:<12} {}",
            project.id,
            project.title,
            project.status,
            deadline_text(project)
        );
    }
    Ok(())
}

fn print_project(project: &Project, format: OutputFormat) -> anyhow::Result<()> {
    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(project)?);
        return Ok(());
    }
    println!("#{} {}", project.id, project.title);
    println!("  {}", project.description);
    println!(
        "  Status:   {} ({})",
        project.status,
        status_color(project.status).hex()
    );
    println!("  Dates:    {} -> {}", project.start_date, project.end_date);
    println!("  Deadline: {}", deadline_text(project));
    println!(
        "  Owner:    {} {} <{}>",
        project.owner.first_name, project.owner.last_name, project.owner.email
    );
    Ok(())
}

fn deadline_text(project: &Project) -> String {
    match project.deadline_state() {
        DeadlineState::NoDeadline => "no deadline".to_string(),
        DeadlineState::Tracked { date, status } => {
            format!("{date} {status} ({})", deadline_color(status).hex())
        }
    }
}

fn print_history(history: &[StatusHistory], format: OutputFormat) -> anyhow::Result<()> {
    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(history)?);
        return Ok(());
    }
    if history.is_empty() {
        println!("No status changes recorded.");
        return Ok(());
    }
    for entry in history {
        println!(
            "{}  {} -> {} by {}",
            entry.changed_at, entry.old_status, entry.new_status, entry.changed_by.username
        );
    }
    Ok(())
}
