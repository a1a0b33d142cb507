use std::net::SocketAddr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use money_flow::api::{app_router, AppState};
use money_flow::cli::{
    handle_category_command, handle_dashboard_command, handle_goal_command,
    handle_transaction_command, CategoryCommands, DashboardArgs, GoalCommands,
    TransactionCommands,
};
use money_flow::config::{paths::MoneyFlowPaths, settings::Settings};
use money_flow::storage::Storage;

#[derive(Parser)]
#[command(
    name = "money-flow",
    version,
    about = "Personal finance tracker with a JSON API and dashboard",
    long_about = "Money Flow records income and expense transactions, tracks \
                  savings goals, and summarizes them in a monthly dashboard. \
                  Run 'money-flow serve' to expose the JSON API."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Address to listen on (overrides settings and PORT)
        #[arg(short, long)]
        addr: Option<SocketAddr>,
    },

    /// Show the monthly dashboard
    Dashboard(DashboardArgs),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Initialize the data directory with default categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("money_flow=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(storage: Storage, settings: Settings) -> Result<()> {
    let addr = settings.listen_addr;
    let app = app_router(AppState::new(storage, settings));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = MoneyFlowPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Serve { addr }) => {
            settings.apply_env_overrides()?;
            if let Some(addr) = addr {
                settings.listen_addr = addr;
            }
            let storage = Storage::open(&paths)?;
            serve(storage, settings).await?;
        }
        Some(Commands::Dashboard(args)) => {
            let storage = Storage::open(&paths)?;
            handle_dashboard_command(&storage, &settings, args)?;
        }
        Some(Commands::Transaction(cmd)) => {
            let storage = Storage::open(&paths)?;
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            let storage = Storage::open(&paths)?;
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            let storage = Storage::open(&paths)?;
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Money Flow at: {}", paths.base_dir().display());
            money_flow::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default categories have been created:");
            println!("  - Income: Salary, Freelance, Investments, Gifts, Other Income");
            println!("  - Expense: Food & Dining, Transportation, Shopping, Bills & Utilities,");
            println!("             Entertainment, Health, Education, Other Expense");
            println!();
            println!("Run 'money-flow category list' to see all categories.");
        }
        Some(Commands::Config) => {
            println!("Money Flow Configuration");
            println!("========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Database file:  {}", paths.database_file().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Listen address:      {}", settings.listen_addr);
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Trend window:        {} months", settings.trend_window_months);
            println!("  Recent transactions: {}", settings.recent_transactions_limit);
            println!("  List limit:          {}", settings.transaction_list_limit);
        }
        None => {
            println!("Money Flow - personal finance tracker");
            println!();
            println!("Run 'money-flow --help' for usage information.");
            println!("Run 'money-flow serve' to start the API server.");
        }
    }

    Ok(())
}
