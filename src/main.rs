//! Fotovault admin CLI
//!
//! Maintenance commands for the account database. Talks to the same
//! store the application embeds, so it also works while the app is
//! offline.
//!
//! ```sh
//! # Create the admin account on a fresh install
//! fotovault-admin bootstrap
//!
//! # List accounts as JSON
//! fotovault-admin list-users --include-deleted
//!
//! # Rotate the admin password (prints the replacement)
//! fotovault-admin reset-admin-password
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use fotovault_accounts::config::AppConfig;
use fotovault_accounts::domain::{NewUser, UserListFilter, UserStore, UserView};
use fotovault_accounts::infrastructure::crypto::hash_password;
use fotovault_accounts::{
    default_config_path, ensure_schema, init_database, BcryptHasher, DatabaseConfig,
    SeaOrmUserStore, UserAccountService,
};

/// Fotovault accounts admin tool.
#[derive(Parser, Debug)]
#[command(
    name = "fotovault-admin",
    version,
    about = "Account maintenance for the Fotovault photo platform",
    long_about = "Maintenance commands for the Fotovault account database.\n\n\
                  Default config: ~/.config/fotovault/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "FOTOVAULT_CONFIG")]
    config: Option<PathBuf>,

    /// Override the database URL.
    #[arg(long)]
    database_url: Option<String>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the admin account if none exists.
    Bootstrap {
        /// Admin email (defaults to the [admin] config section).
        #[arg(long)]
        email: Option<String>,
        /// Admin password (defaults to the [admin] config section).
        #[arg(long)]
        password: Option<String>,
    },
    /// Print all accounts as JSON.
    ListUsers {
        /// Include soft-deleted accounts.
        #[arg(long)]
        include_deleted: bool,
    },
    /// Print the number of accounts.
    CountUsers {
        /// Count only admin accounts.
        #[arg(long)]
        admins: bool,
    },
    /// Replace the admin password and print the new one.
    ResetAdminPassword {
        /// Use this password instead of generating one.
        #[arg(long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ──────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let (mut config, load_err) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ─────────────────────────────────────
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_tracing(&config.logging.level);
    match load_err {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => warn!(
            "Failed to load config from {}: {}. Using defaults.",
            config_path.display(),
            e
        ),
    }

    // ── Database ────────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: config.database.url.clone(),
    };
    let db = init_database(&db_config).await?;
    ensure_schema(&db).await?;

    let store = Arc::new(SeaOrmUserStore::new(db.clone()));
    let service = UserAccountService::new(store.clone(), Arc::new(BcryptHasher));

    // ── Run command ─────────────────────────────────────────────
    match cli.command {
        Command::Bootstrap { email, password } => {
            bootstrap(&store, &config, email, password).await?;
        }
        Command::ListUsers { include_deleted } => {
            let filter = UserListFilter {
                include_deleted,
                ..UserListFilter::default()
            };
            let views: Vec<UserView> = store
                .get_list(&filter)
                .await?
                .into_iter()
                .map(UserView::from)
                .collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        Command::CountUsers { admins } => {
            let filter = UserListFilter {
                admins_only: admins,
                ..UserListFilter::default()
            };
            println!("{}", service.count(&filter).await?);
        }
        Command::ResetAdminPassword { password } => {
            let reset = service
                .reset_admin_password(move || async move { password })
                .await?;
            if !reset.provided {
                info!("No password supplied, generated a random one");
            }
            println!("New admin password: {}", reset.password);
        }
    }

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    }
    Ok(())
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

/// Create the admin account if none exists yet.
async fn bootstrap(
    store: &SeaOrmUserStore,
    config: &AppConfig,
    email: Option<String>,
    password: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(admin) = store.get_admin().await? {
        info!("Admin account already exists: {}", admin.email);
        return Ok(());
    }

    let password_from_config = password.is_none();
    let admin_email = email.unwrap_or_else(|| config.admin.email.clone());
    let admin_password = password.unwrap_or_else(|| config.admin.password.clone());

    let password_hash = hash_password(&admin_password)?;
    let admin = store
        .create(NewUser {
            email: admin_email,
            password_hash,
            first_name: config.admin.first_name.clone(),
            last_name: config.admin.last_name.clone(),
            is_admin: true,
            should_change_password: true,
        })
        .await?;

    info!("Admin account created: {}", admin.email);
    if password_from_config {
        warn!("⚠️  The admin password came from the config file. Change it immediately!");
    }
    Ok(())
}
