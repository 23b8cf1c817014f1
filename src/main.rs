use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

use azrm::models::security::{Alert, AlertAction};
use azrm::{AzureClient, Config, Credentials, Error};

/// Command line client for Azure management APIs
#[derive(Parser, Debug)]
#[command(name = "azrm", version, about, long_about = None)]
struct Args {
    /// Subscription to operate on (falls back to config / AZURE_SUBSCRIPTION_ID)
    #[arg(short, long)]
    subscription: Option<String>,

    /// Location for region-scoped calls (falls back to config / AZURE_DEFAULT_LOCATION)
    #[arg(short, long)]
    location: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Security Center alerts
    Alerts {
        #[command(subcommand)]
        action: AlertsCommand,
    },
    /// List the REST operations a provider exposes
    Operations {
        /// Provider to query
        #[arg(value_enum)]
        service: Service,
    },
    /// Key Vault management
    Vaults {
        #[command(subcommand)]
        action: VaultsCommand,
    },
    /// Recovery Services Backup
    Backup {
        #[command(subcommand)]
        action: BackupCommand,
    },
}

#[derive(Subcommand, Debug)]
enum AlertsCommand {
    /// List alerts at subscription scope, or one resource group's with -g
    List {
        #[arg(short = 'g', long)]
        resource_group: Option<String>,
        /// Restrict the listing to the selected location
        #[arg(long)]
        by_region: bool,
    },
    /// Show one alert
    Get {
        name: String,
        #[arg(short = 'g', long)]
        resource_group: Option<String>,
    },
    /// Dismiss one alert
    Dismiss {
        name: String,
        #[arg(short = 'g', long)]
        resource_group: Option<String>,
    },
    /// Reactivate one dismissed alert
    Reactivate {
        name: String,
        #[arg(short = 'g', long)]
        resource_group: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum VaultsCommand {
    /// List vaults at subscription scope, or one resource group's with -g
    List {
        #[arg(short = 'g', long)]
        resource_group: Option<String>,
    },
    /// Show one vault
    Get {
        resource_group: String,
        name: String,
    },
}

#[derive(Subcommand, Debug)]
enum BackupCommand {
    /// Fetch the security PIN of a Recovery Services vault
    Pin {
        #[arg(short = 'g', long)]
        resource_group: String,
        /// Recovery Services vault name
        #[arg(long)]
        vault: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Service {
    Security,
    Keyvault,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .expect("Failed to open log file");

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("azrm started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("azrm").join("azrm.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".azrm").join("azrm.log");
    }
    PathBuf::from("azrm.log")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    if let Err(err) = run(args).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let config = Config::load();

    let subscription = args
        .subscription
        .clone()
        .or_else(|| config.effective_subscription())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No subscription configured. Set AZURE_SUBSCRIPTION_ID or use --subscription"
            )
        })?;

    let credentials = Credentials::from_env().map_err(user_error)?;
    let mut client = AzureClient::new(credentials, &subscription).map_err(user_error)?;
    if let Some(endpoint) = config.effective_endpoint() {
        client = client.with_endpoint(&endpoint).map_err(user_error)?;
    }

    tracing::info!("Using subscription: {}", subscription);

    let location = args.location.clone().or_else(|| config.effective_location());

    match args.command {
        Command::Alerts { action } => run_alerts(&client, action, location).await,
        Command::Operations { service } => run_operations(&client, service).await,
        Command::Vaults { action } => run_vaults(&client, action).await,
        Command::Backup { action } => run_backup(&client, action).await,
    }
}

async fn run_alerts(
    client: &AzureClient,
    action: AlertsCommand,
    location: Option<String>,
) -> Result<()> {
    let alerts = client.alerts();

    match action {
        AlertsCommand::List {
            resource_group,
            by_region,
        } => {
            let pager = match (&resource_group, by_region) {
                (None, false) => alerts.list(),
                (Some(rg), false) => alerts.list_by_resource_group(rg),
                (None, true) => {
                    alerts.list_subscription_level_by_region(&require_location(&location)?)
                }
                (Some(rg), true) => {
                    alerts.list_resource_group_level_by_region(&require_location(&location)?, rg)
                }
            };
            let items = pager.all().await.map_err(user_error)?;
            print_alerts(&items);
        }
        AlertsCommand::Get {
            name,
            resource_group,
        } => {
            let loc = require_location(&location)?;
            let alert = match resource_group {
                Some(rg) => alerts.get_resource_group_level(&loc, &rg, &name).await,
                None => alerts.get_subscription_level(&loc, &name).await,
            }
            .map_err(user_error)?;
            print_alerts(std::slice::from_ref(&alert));
        }
        AlertsCommand::Dismiss {
            name,
            resource_group,
        } => {
            update_alert_state(&alerts, &location, resource_group, &name, AlertAction::Dismiss)
                .await?;
            println!("Alert {name} dismissed");
        }
        AlertsCommand::Reactivate {
            name,
            resource_group,
        } => {
            update_alert_state(
                &alerts,
                &location,
                resource_group,
                &name,
                AlertAction::Reactivate,
            )
            .await?;
            println!("Alert {name} reactivated");
        }
    }

    Ok(())
}

async fn update_alert_state(
    alerts: &azrm::security::Alerts,
    location: &Option<String>,
    resource_group: Option<String>,
    name: &str,
    action: AlertAction,
) -> Result<()> {
    let loc = require_location(location)?;
    match resource_group {
        Some(rg) => {
            alerts
                .update_resource_group_level_state(&loc, &rg, name, action)
                .await
        }
        None => {
            alerts
                .update_subscription_level_state(&loc, name, action)
                .await
        }
    }
    .map_err(user_error)
}

async fn run_operations(client: &AzureClient, service: Service) -> Result<()> {
    match service {
        Service::Security => {
            let operations = client
                .security_operations()
                .list()
                .all()
                .await
                .map_err(user_error)?;
            for op in operations {
                let description = op.display.and_then(|d| d.description).unwrap_or_default();
                println!("{:<60} {}", op.name.unwrap_or_default(), description);
            }
        }
        Service::Keyvault => {
            let operations = client
                .keyvault_operations()
                .list()
                .all()
                .await
                .map_err(user_error)?;
            for op in operations {
                let logs = op
                    .properties
                    .and_then(|p| p.service_specification)
                    .and_then(|s| s.log_specifications)
                    .map(|l| l.len())
                    .unwrap_or(0);
                println!(
                    "{:<60} {:<12} log specs: {}",
                    op.name.unwrap_or_default(),
                    op.origin.unwrap_or_default(),
                    logs
                );
            }
        }
    }
    Ok(())
}

async fn run_vaults(client: &AzureClient, action: VaultsCommand) -> Result<()> {
    let vaults = client.vaults();

    match action {
        VaultsCommand::List { resource_group } => {
            let pager = match &resource_group {
                Some(rg) => vaults.list_by_resource_group(rg),
                None => vaults.list_by_subscription(),
            };
            for vault in pager.all().await.map_err(user_error)? {
                println!(
                    "{:<30} {:<15} {}",
                    vault.name.unwrap_or_default(),
                    vault.location.unwrap_or_default(),
                    vault
                        .properties
                        .and_then(|p| p.vault_uri)
                        .unwrap_or_default()
                );
            }
        }
        VaultsCommand::Get {
            resource_group,
            name,
        } => {
            let vault = vaults
                .get(&resource_group, &name)
                .await
                .map_err(user_error)?;
            println!("{}", serde_json::to_string_pretty(&vault)?);
        }
    }
    Ok(())
}

async fn run_backup(client: &AzureClient, action: BackupCommand) -> Result<()> {
    match action {
        BackupCommand::Pin {
            resource_group,
            vault,
        } => {
            let info = client
                .backup()
                .security_pin(&resource_group, &vault)
                .await
                .map_err(user_error)?;
            println!("PIN: {}", info.security_pin.unwrap_or_default());
            if let Some(ticks) = info.expiry_time_in_utc_ticks {
                println!("Expires (UTC ticks): {ticks}");
            }
        }
    }
    Ok(())
}

fn require_location(location: &Option<String>) -> Result<String> {
    location.clone().ok_or_else(|| {
        anyhow::anyhow!("No location configured. Set AZURE_DEFAULT_LOCATION or use --location")
    })
}

fn print_alerts(alerts: &[Alert]) {
    for alert in alerts {
        let props = alert.properties.clone().unwrap_or_default();
        println!(
            "{:<45} {:<10} {:<20} {}",
            alert.name.clone().unwrap_or_default(),
            props.state.unwrap_or_default(),
            props
                .reported_time_utc
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
            props.alert_display_name.unwrap_or_default()
        );
    }
}

/// Render an SDK error with its user-facing message.
fn user_error(err: Error) -> anyhow::Error {
    anyhow::anyhow!("{}", err.user_message())
}
