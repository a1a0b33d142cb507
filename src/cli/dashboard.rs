//! Dashboard CLI command

use chrono::Local;
use clap::Args;

use crate::config::Settings;
use crate::error::{MoneyFlowError, MoneyFlowResult};
use crate::models::Month;
use crate::reports::DashboardReport;
use crate::storage::Storage;

/// Dashboard options
#[derive(Args)]
pub struct DashboardArgs {
    /// Month to summarize (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Print the JSON payload instead of the terminal view
    #[arg(long)]
    pub json: bool,
}

/// Handle the dashboard command
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    args: DashboardArgs,
) -> MoneyFlowResult<()> {
    let today = Local::now().date_naive();
    let month = match args.month {
        Some(month) => month
            .parse::<Month>()
            .map_err(|e| MoneyFlowError::Validation(e.to_string()))?,
        None => Month::of(today),
    };

    let report = DashboardReport::generate_for_month(storage, settings, month)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.format_terminal(&settings.currency_symbol, today));
    }

    Ok(())
}
