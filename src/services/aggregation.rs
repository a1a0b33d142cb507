//! Aggregation service
//!
//! Read-only summaries over the stored transactions: per-month totals,
//! the all-time balance, a trailing monthly trend, the expense breakdown
//! by category, and the most recent transactions. Each query runs against
//! a single consistent snapshot of the store.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::MoneyFlowResult;
use crate::models::{
    Category, Money, Month, Transaction, TransactionType, FALLBACK_COLOR, FALLBACK_ICON,
    MAX_TREND_MONTHS,
};
use crate::storage::transactions::newest_first;
use crate::storage::Storage;

use super::transaction::{with_categories, TransactionWithCategory};

/// Service for dashboard aggregations
pub struct AggregationService<'a> {
    storage: &'a Storage,
}

/// Income and expense totals for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyTotals {
    pub month: Month,
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

impl MonthlyTotals {
    fn new(month: Month, income: Money, expense: Money) -> Self {
        Self {
            month,
            income,
            expense,
            balance: income - expense,
        }
    }
}

/// One month of the trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub month: Month,
    pub income: Money,
    pub expense: Money,
}

/// Expense total for one category within a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub icon: String,
    pub color: String,
    pub total: Money,
}

/// Sum income and expense amounts separately
fn sum_by_type<'t>(transactions: impl Iterator<Item = &'t Transaction>) -> (Money, Money) {
    transactions.fold((Money::zero(), Money::zero()), |(income, expense), t| match t.kind {
        TransactionType::Income => (income + t.amount, expense),
        TransactionType::Expense => (income, expense + t.amount),
    })
}

/// Totals for the transactions dated within `month`
pub fn monthly_totals(transactions: &[Transaction], month: Month) -> MonthlyTotals {
    let (income, expense) = sum_by_type(transactions.iter().filter(|t| month.contains(t.date)));
    MonthlyTotals::new(month, income, expense)
}

/// Income minus expense over every transaction
pub fn all_time_balance(transactions: &[Transaction]) -> Money {
    let (income, expense) = sum_by_type(transactions.iter());
    income - expense
}

/// Zero-filled monthly series for the `window` months ending at `anchor`
///
/// `window` is capped at [`MAX_TREND_MONTHS`].
pub fn trend(transactions: &[Transaction], anchor: Month, window: usize) -> Vec<TrendPoint> {
    let months = anchor.trailing(window.min(MAX_TREND_MONTHS));
    let Some(&first) = months.first() else {
        return Vec::new();
    };

    let mut buckets: HashMap<Month, (Money, Money)> = HashMap::new();
    for t in transactions {
        let month = Month::of(t.date);
        if month < first || month > anchor {
            continue;
        }

        let entry = buckets.entry(month).or_default();
        match t.kind {
            TransactionType::Income => entry.0 += t.amount,
            TransactionType::Expense => entry.1 += t.amount,
        }
    }

    months
        .into_iter()
        .map(|month| {
            let (income, expense) = buckets.get(&month).copied().unwrap_or_default();
            TrendPoint {
                month,
                income,
                expense,
            }
        })
        .collect()
}

/// Expense totals per category name for `month`, largest first
///
/// Categories without stored metadata get the fallback icon and color.
pub fn category_breakdown(
    transactions: &[Transaction],
    categories: &[Category],
    month: Month,
) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, Money> = HashMap::new();
    for t in transactions
        .iter()
        .filter(|t| t.is_expense() && month.contains(t.date))
    {
        *totals.entry(t.category.as_str()).or_default() += t.amount;
    }

    let mut breakdown: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(name, total)| {
            let category = categories.iter().find(|c| c.matches_name(name));
            CategoryTotal {
                category: name.to_string(),
                icon: category.map_or_else(|| FALLBACK_ICON.to_string(), |c| c.icon.clone()),
                color: category.map_or_else(|| FALLBACK_COLOR.to_string(), |c| c.color.clone()),
                total,
            }
        })
        .collect();

    breakdown.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    breakdown
}

impl<'a> AggregationService<'a> {
    /// Create a new aggregation service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Income, expense and balance for a month
    pub fn monthly_totals(&self, month: Month) -> MoneyFlowResult<MonthlyTotals> {
        self.storage.read(|db| monthly_totals(&db.transactions, month))
    }

    /// Balance over all recorded transactions
    pub fn all_time_balance(&self) -> MoneyFlowResult<Money> {
        self.storage.read(|db| all_time_balance(&db.transactions))
    }

    /// Monthly income/expense series ending at `anchor`, oldest first
    pub fn trend(&self, anchor: Month, window: usize) -> MoneyFlowResult<Vec<TrendPoint>> {
        self.storage.read(|db| trend(&db.transactions, anchor, window))
    }

    /// Expense totals per category for a month
    pub fn category_breakdown(&self, month: Month) -> MoneyFlowResult<Vec<CategoryTotal>> {
        self.storage
            .read(|db| category_breakdown(&db.transactions, &db.categories, month))
    }

    /// The latest `limit` transactions with category metadata
    pub fn recent_transactions(
        &self,
        limit: usize,
    ) -> MoneyFlowResult<Vec<TransactionWithCategory>> {
        let (recent, categories) = self.storage.read(|db| {
            let mut recent: Vec<&Transaction> = db.transactions.iter().collect();
            recent.sort_by(|a, b| newest_first(a, b));
            let recent: Vec<Transaction> = recent.into_iter().take(limit).cloned().collect();
            (recent, db.categories.clone())
        })?;

        Ok(with_categories(recent, &categories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::MoneyFlowPaths;
    use crate::models::TransactionId;
    use crate::services::transaction::{CreateTransactionInput, TransactionService};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyFlowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths).unwrap();
        (temp_dir, storage)
    }

    fn add(
        storage: &Storage,
        kind: &str,
        category: &str,
        amount: &str,
        date: &str,
    ) -> TransactionId {
        TransactionService::new(storage)
            .create(CreateTransactionInput {
                kind: Some(kind.into()),
                category: Some(category.into()),
                amount: Some(Money::parse(amount).unwrap()),
                description: None,
                date: Some(date.into()),
            })
            .unwrap()
            .id
    }

    fn month(y: i32, m: u32) -> Month {
        Month::new(y, m).unwrap()
    }

    fn txn(kind: TransactionType, cents: i64, date: (i32, u32, u32)) -> Transaction {
        Transaction::new(
            kind,
            "Shopping",
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        )
    }

    #[test]
    fn test_monthly_balance_example() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "income", "Salary", "1000", "2024-01-05");
        add(&storage, "expense", "Shopping", "200", "2024-01-10");

        let totals = AggregationService::new(&storage)
            .monthly_totals(month(2024, 1))
            .unwrap();

        assert_eq!(totals.income, Money::from_units(1000));
        assert_eq!(totals.expense, Money::from_units(200));
        assert_eq!(totals.balance, Money::from_units(800));
    }

    #[test]
    fn test_monthly_totals_ignore_other_months() {
        let transactions = vec![
            txn(TransactionType::Income, 100_00, (2023, 12, 31)),
            txn(TransactionType::Income, 50_00, (2024, 1, 1)),
            txn(TransactionType::Expense, 75_25, (2024, 1, 31)),
            txn(TransactionType::Expense, 10_00, (2024, 2, 1)),
        ];

        let totals = monthly_totals(&transactions, month(2024, 1));
        assert_eq!(totals.income, Money::from_cents(50_00));
        assert_eq!(totals.expense, Money::from_cents(75_25));
        assert_eq!(totals.balance, Money::from_cents(-25_25));
        assert_eq!(totals.income - totals.expense, totals.balance);

        let empty = monthly_totals(&transactions, month(2022, 6));
        assert!(empty.income.is_zero() && empty.expense.is_zero() && empty.balance.is_zero());
    }

    #[test]
    fn test_balance_identity_over_many_sets() {
        // Deterministic pseudo-random transaction sets
        let mut seed: u64 = 7;
        for _ in 0..50 {
            let mut transactions = Vec::new();
            for _ in 0..20 {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let kind = if seed % 2 == 0 {
                    TransactionType::Income
                } else {
                    TransactionType::Expense
                };
                let cents = (seed >> 33) as i64 % 100_000 + 1;
                let day = (seed >> 20) as u32 % 28 + 1;
                let m = (seed >> 40) as u32 % 3 + 1;
                transactions.push(txn(kind, cents, (2024, m, day)));
            }

            for m in 1..=3 {
                let totals = monthly_totals(&transactions, month(2024, m));
                assert_eq!(totals.income - totals.expense, totals.balance);
            }

            let per_month: Money = (1..=3)
                .map(|m| monthly_totals(&transactions, month(2024, m)).balance)
                .sum();
            assert_eq!(per_month, all_time_balance(&transactions));
        }
    }

    #[test]
    fn test_all_time_balance() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "income", "Salary", "1000", "2023-05-05");
        add(&storage, "expense", "Shopping", "200.50", "2024-01-10");
        add(&storage, "expense", "Health", "100", "2024-02-10");

        let balance = AggregationService::new(&storage).all_time_balance().unwrap();
        assert_eq!(balance, Money::from_cents(699_50));
    }

    #[test]
    fn test_trend_is_zero_filled_and_chronological() {
        let transactions = vec![
            txn(TransactionType::Income, 1000, (2024, 3, 2)),
            txn(TransactionType::Expense, 300, (2023, 11, 20)),
            txn(TransactionType::Expense, 999, (2023, 9, 30)),
            txn(TransactionType::Income, 999, (2024, 4, 1)),
        ];

        let points = trend(&transactions, month(2024, 3), 6);

        let months: Vec<String> = points.iter().map(|p| p.month.to_string()).collect();
        assert_eq!(
            months,
            vec!["2023-10", "2023-11", "2023-12", "2024-01", "2024-02", "2024-03"]
        );
        assert_eq!(points[1].expense, Money::from_cents(300));
        assert_eq!(points[5].income, Money::from_cents(1000));
        assert!(points[0].income.is_zero() && points[0].expense.is_zero());
        assert!(points[2..5]
            .iter()
            .all(|p| p.income.is_zero() && p.expense.is_zero()));
    }

    #[test]
    fn test_trend_always_has_window_entries() {
        assert_eq!(trend(&[], month(2024, 1), 6).len(), 6);
        assert_eq!(trend(&[], month(2024, 1), 12).len(), 12);
        assert!(trend(&[], month(2024, 1), 0).is_empty());
        assert_eq!(trend(&[], month(2024, 1), usize::MAX).len(), MAX_TREND_MONTHS);
    }

    #[test]
    fn test_category_breakdown() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "expense", "Shopping", "50", "2024-01-10");
        add(&storage, "expense", "Shopping", "25", "2024-01-11");
        add(&storage, "expense", "Health", "75", "2024-01-12");
        add(&storage, "expense", "Mystery", "100", "2024-01-13");
        add(&storage, "expense", "Health", "500", "2024-02-01");
        add(&storage, "income", "Salary", "1000", "2024-01-05");

        let breakdown = AggregationService::new(&storage)
            .category_breakdown(month(2024, 1))
            .unwrap();

        let names: Vec<&str> = breakdown.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Mystery", "Health", "Shopping"]);

        assert_eq!(breakdown[0].icon, FALLBACK_ICON);
        assert_eq!(breakdown[0].color, FALLBACK_COLOR);
        assert_eq!(breakdown[1].icon, "🏥");
        assert_eq!(breakdown[2].total, Money::from_units(75));
    }

    #[test]
    fn test_category_breakdown_ties_sort_by_name() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "expense", "Shopping", "40", "2024-01-10");
        add(&storage, "expense", "Health", "25", "2024-01-11");
        add(&storage, "expense", "Entertainment", "40", "2024-01-12");
        add(&storage, "expense", "Health", "15", "2024-01-13");

        let breakdown = AggregationService::new(&storage)
            .category_breakdown(month(2024, 1))
            .unwrap();

        let names: Vec<&str> = breakdown.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Entertainment", "Health", "Shopping"]);
        assert!(breakdown.iter().all(|c| c.total == Money::from_units(40)));
    }

    #[test]
    fn test_category_breakdown_matches_metadata_ignoring_case() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "expense", "health", "30", "2024-01-10");
        add(&storage, "expense", "Pet Care", "20", "2024-01-11");

        let breakdown = AggregationService::new(&storage)
            .category_breakdown(month(2024, 1))
            .unwrap();

        assert_eq!(breakdown[0].category, "health");
        assert_eq!(breakdown[0].icon, "🏥");
        assert_ne!(breakdown[0].color, FALLBACK_COLOR);

        assert_eq!(breakdown[1].category, "Pet Care");
        assert_eq!(breakdown[1].icon, FALLBACK_ICON);
        assert_eq!(breakdown[1].color, FALLBACK_COLOR);
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        // Rows like these can only come from a hand-edited database file
        let half = i64::MAX / 2 + 1;
        let transactions = vec![
            txn(TransactionType::Income, half, (2024, 1, 5)),
            txn(TransactionType::Income, half, (2024, 1, 6)),
            txn(TransactionType::Expense, half, (2024, 1, 7)),
            txn(TransactionType::Expense, half, (2024, 1, 8)),
        ];

        let totals = monthly_totals(&transactions, month(2024, 1));
        assert_eq!(totals.income, Money::from_cents(i64::MAX));
        assert_eq!(totals.expense, Money::from_cents(i64::MAX));
        assert!(totals.balance.is_zero());

        assert!(all_time_balance(&transactions).is_zero());

        let points = trend(&transactions, month(2024, 1), 6);
        assert_eq!(points[5].income, Money::from_cents(i64::MAX));

        let breakdown = category_breakdown(&transactions, &[], month(2024, 1));
        assert_eq!(breakdown[0].total, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_recent_transactions() {
        let (_temp_dir, storage) = create_test_storage();
        let first = add(&storage, "expense", "Shopping", "1", "2024-01-10");
        let second = add(&storage, "expense", "Shopping", "2", "2024-01-10");
        let latest = add(&storage, "income", "Salary", "3", "2024-01-20");
        add(&storage, "expense", "Shopping", "4", "2023-12-01");

        let recent = AggregationService::new(&storage)
            .recent_transactions(3)
            .unwrap();

        let ids: Vec<_> = recent.iter().map(|r| r.transaction.id).collect();
        assert_eq!(ids, vec![latest, second, first]);
        assert_eq!(recent[0].icon.as_deref(), Some("💼"));
    }

    #[test]
    fn test_deleted_transaction_leaves_aggregates() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "income", "Salary", "1000", "2024-01-05");
        let expense = add(&storage, "expense", "Shopping", "200", "2024-01-10");

        let service = AggregationService::new(&storage);
        assert_eq!(
            service.monthly_totals(month(2024, 1)).unwrap().balance,
            Money::from_units(800)
        );

        TransactionService::new(&storage).delete(expense).unwrap();

        let totals = service.monthly_totals(month(2024, 1)).unwrap();
        assert_eq!(totals.expense, Money::zero());
        assert_eq!(totals.balance, Money::from_units(1000));
        assert_eq!(service.all_time_balance().unwrap(), Money::from_units(1000));
        assert!(service.category_breakdown(month(2024, 1)).unwrap().is_empty());
        assert!(service
            .recent_transactions(10)
            .unwrap()
            .iter()
            .all(|r| r.transaction.id != expense));
    }
}
