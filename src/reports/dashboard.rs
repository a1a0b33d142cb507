//! Dashboard Report
//!
//! Composes the aggregations for one month into the dashboard payload:
//! monthly totals, all-time balance, recent activity, goals, the trailing
//! trend and the expense breakdown.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Settings;
use crate::display::{format_goal_row, format_transaction_row, progress_bar};
use crate::error::MoneyFlowResult;
use crate::models::{GoalProgress, Money, Month};
use crate::services::{
    AggregationService, CategoryTotal, GoalService, TransactionWithCategory, TrendPoint,
};
use crate::storage::Storage;

/// Dashboard Report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    /// Month the monthly figures cover
    pub month: Month,
    /// Income within the month
    pub monthly_income: Money,
    /// Expense within the month
    pub monthly_expense: Money,
    /// Income minus expense within the month
    pub monthly_balance: Money,
    /// Income minus expense over all time
    pub all_time_balance: Money,
    /// Latest transactions, newest first
    pub recent_transactions: Vec<TransactionWithCategory>,
    /// Goals with progress, newest first
    pub goals: Vec<GoalProgress>,
    /// Trailing monthly series ending at `month`
    pub monthly_trend: Vec<TrendPoint>,
    /// Expense per category within the month, largest first
    pub expense_by_category: Vec<CategoryTotal>,
}

impl DashboardReport {
    /// Generate the dashboard for the month containing `today`
    pub fn generate(storage: &Storage, settings: &Settings, today: NaiveDate) -> MoneyFlowResult<Self> {
        Self::generate_for_month(storage, settings, Month::of(today))
    }

    /// Generate the dashboard for a specific month
    pub fn generate_for_month(
        storage: &Storage,
        settings: &Settings,
        month: Month,
    ) -> MoneyFlowResult<Self> {
        let aggregation = AggregationService::new(storage);

        let totals = aggregation.monthly_totals(month)?;

        Ok(Self {
            month,
            monthly_income: totals.income,
            monthly_expense: totals.expense,
            monthly_balance: totals.balance,
            all_time_balance: aggregation.all_time_balance()?,
            recent_transactions: aggregation
                .recent_transactions(settings.recent_transactions_limit)?,
            goals: GoalService::new(storage).list_with_progress()?,
            monthly_trend: aggregation.trend(month, settings.trend_window_months)?,
            expense_by_category: aggregation.category_breakdown(month)?,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str, today: NaiveDate) -> String {
        let money = |m: Money| m.format_with_symbol(currency);
        let mut output = String::new();

        // Header
        output.push_str(&format!("Dashboard: {}\n", self.month));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("Income:            {:>14}\n", money(self.monthly_income)));
        output.push_str(&format!("Expense:           {:>14}\n", money(self.monthly_expense)));
        output.push_str(&format!("Balance:           {:>14}\n", money(self.monthly_balance)));
        output.push_str(&format!("All-time balance:  {:>14}\n", money(self.all_time_balance)));

        // Trend
        output.push_str("\nMonthly Trend\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!("{:<10} {:>14} {:>14}\n", "Month", "Income", "Expense"));
        for point in &self.monthly_trend {
            output.push_str(&format!(
                "{:<10} {:>14} {:>14}\n",
                point.month.to_string(),
                money(point.income),
                money(point.expense)
            ));
        }

        // Expense breakdown
        output.push_str("\nExpenses by Category\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.expense_by_category.is_empty() {
            output.push_str("No expenses this month.\n");
        } else {
            for entry in &self.expense_by_category {
                let share = if self.monthly_expense.is_zero() {
                    0.0
                } else {
                    entry.total.cents() as f64 / self.monthly_expense.cents() as f64 * 100.0
                };
                output.push_str(&format!(
                    "{} {:<24} {:>14} {} {:>5.1}%\n",
                    entry.icon,
                    entry.category,
                    money(entry.total),
                    progress_bar(share),
                    share
                ));
            }
        }

        // Goals
        output.push_str("\nGoals\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.goals.is_empty() {
            output.push_str("No goals yet.\n");
        } else {
            for goal in &self.goals {
                output.push_str(&format_goal_row(goal, currency, today));
                output.push('\n');
            }
        }

        // Recent activity
        output.push_str("\nRecent Transactions\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.recent_transactions.is_empty() {
            output.push_str("No transactions yet.\n");
        } else {
            for row in &self.recent_transactions {
                output.push_str(&format_transaction_row(row, currency));
                output.push('\n');
            }
        }

        output
    }
}
