mod api;
mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod runtime;
mod ui;
mod user;

use crate::api::{UserApi, UserApiClient};
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::runtime::start_api_worker;
use crate::user::{Role, User};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};
use tokio::sync::broadcast;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive user dashboard.
    Dashboard,
    /// Print all users.
    List,
    /// Create a new user.
    Add {
        /// Display name of the new user.
        #[arg(long)]
        name: String,

        /// Email address of the new user.
        #[arg(long)]
        email: String,

        /// Role of the new user.
        #[arg(long, value_enum, default_value_t = Role::User)]
        role: Role,
    },
    /// Update an existing user's name and/or role.
    Update {
        /// ID of the user to update.
        #[arg(long)]
        id: String,

        /// New display name. Keeps the current name when omitted.
        #[arg(long)]
        name: Option<String>,

        /// New role. Keeps the current role when omitted.
        #[arg(long, value_enum)]
        role: Option<Role>,
    },
    /// Delete a user by id.
    Delete {
        /// ID of the user to delete.
        #[arg(long)]
        id: String,
    },
    /// Point the CLI at a self-hosted backend origin.
    SetBackend {
        /// Backend origin, e.g. http://localhost:5000
        url: String,
    },
    /// Remove the backend override and fall back to the environment origin.
    ClearBackend,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment_str = std::env::var("USER_ADMIN_ENV").unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let config_path = get_config_path()?;
    // A configured backend override wins over the environment origin.
    let backend_override = Config::load_from_file(&config_path)
        .ok()
        .and_then(|config| config.base_url);

    let args = Args::parse();
    match args.command {
        Command::Dashboard => {
            let client = build_client(environment, backend_override);
            start_dashboard(environment, client).await
        }
        Command::List => {
            let client = build_client(environment, backend_override);
            let users = client.get_all_users().await?;
            print_user_table(&users);
            Ok(())
        }
        Command::Add { name, email, role } => {
            let client = build_client(environment, backend_override);
            match client.add_user(&name, &email, role).await {
                Ok(user) => {
                    println!("Created user {} ({})", user.name, user.id);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Failed to create user: {}", e);
                    Err(e.into())
                }
            }
        }
        Command::Update { id, name, role } => {
            let client = build_client(environment, backend_override);
            // The update endpoint requires both fields, so fill in whichever
            // the caller omitted from the current record.
            let users = client.get_all_users().await?;
            let current = users
                .iter()
                .find(|user| user.id == id)
                .ok_or_else(|| format!("No user with id {}", id))?;
            let name = name.unwrap_or_else(|| current.name.clone());
            let role = role.unwrap_or(current.role);
            match client.update_user(&id, &name, role).await {
                Ok(user) => {
                    println!("Updated user {} ({}), role: {}", user.name, user.id, user.role);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Failed to update user: {}", e);
                    Err(e.into())
                }
            }
        }
        Command::Delete { id } => {
            let client = build_client(environment, backend_override);
            match client.delete_user(&id).await {
                Ok(()) => {
                    println!("Deleted user {}", id);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Failed to delete user: {}", e);
                    Err(e.into())
                }
            }
        }
        Command::SetBackend { url } => {
            let config = Config::new(Some(url.clone()));
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!("Backend set to {}", url);
            Ok(())
        }
        Command::ClearBackend => {
            println!("Clearing backend override...");
            let config = Config::new(None);
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            Ok(())
        }
    }
}

/// Build the API client, honoring a configured backend override.
fn build_client(environment: Environment, backend_override: Option<String>) -> UserApiClient {
    match backend_override {
        Some(url) => UserApiClient::with_base_url(url),
        None => UserApiClient::new(environment),
    }
}

/// Starts the interactive dashboard.
///
/// # Arguments
/// * `environment` - The environment to connect to.
/// * `client` - API client against the resolved backend origin.
async fn start_dashboard(
    environment: Environment,
    client: UserApiClient,
) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Spawn the API worker and run the application.
    let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);
    let (action_sender, event_receiver, worker_handle) =
        start_api_worker(Box::new(client), shutdown_receiver);
    let app = ui::App::new(environment, action_sender, event_receiver, shutdown_sender);
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let _ = worker_handle.await;
    res?;
    Ok(())
}

/// Print users as a simple aligned table.
fn print_user_table(users: &[User]) {
    if users.is_empty() {
        println!("No users.");
        return;
    }

    let name_width = users
        .iter()
        .map(|user| user.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    let email_width = users
        .iter()
        .map(|user| user.email.len())
        .max()
        .unwrap_or(0)
        .max("EMAIL".len());

    println!(
        "{:<name_width$}  {:<email_width$}  {:<5}  ID",
        "NAME", "EMAIL", "ROLE"
    );
    for user in users {
        println!(
            "{:<name_width$}  {:<email_width$}  {:<5}  {}",
            user.name, user.email, user.role, user.id
        );
    }
}
