//! TransactionsState - Transaction Filtering, Sorting and Paging
//!
//! A chain of independent predicate filters followed by one comparator from
//! a fixed set of sort keys. Filtering never mutates the source rows. Paging
//! is cursor-based: the screen asks the source for rows older than the
//! oldest loaded date.

use chrono::{DateTime, Utc};

use crate::domain::transaction::{Direction, Transaction, TransactionStatus};

/// Sort key for the transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionSort {
    #[default]
    DateDesc,
    DateAsc,
    AmountDesc,
    AmountAsc,
}

impl TransactionSort {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionSort::DateDesc => "Newest first",
            TransactionSort::DateAsc => "Oldest first",
            TransactionSort::AmountDesc => "Largest amount",
            TransactionSort::AmountAsc => "Smallest amount",
        }
    }

    pub fn all() -> &'static [TransactionSort] {
        &[
            TransactionSort::DateDesc,
            TransactionSort::DateAsc,
            TransactionSort::AmountDesc,
            TransactionSort::AmountAsc,
        ]
    }
}

/// Independent predicate filters; `None` means the predicate passes all rows
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub status: Option<TransactionStatus>,
    pub direction: Option<Direction>,
    /// Free-text match against description and category
    pub search: String,
}

impl TransactionFilter {
    fn matches(&self, t: &Transaction) -> bool {
        if self.status.is_some_and(|s| t.status != s) {
            return false;
        }
        if self.direction.is_some_and(|d| t.direction != d) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() {
            let in_description = t.description.to_lowercase().contains(&needle);
            let in_category = t
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&needle));
            if !in_description && !in_category {
                return false;
            }
        }
        true
    }
}

/// State for a transaction list screen
#[derive(Debug, Clone, Default)]
pub struct TransactionsState {
    /// Loaded rows, newest page first
    pub transactions: Vec<Transaction>,
    pub filter: TransactionFilter,
    pub sort: TransactionSort,
    pub loading: bool,
    pub loading_more: bool,
    /// The source has no rows older than the cursor
    pub exhausted: bool,
    pub error: Option<String>,
}

impl TransactionsState {
    /// Replace all rows (initial fetch)
    pub fn set_transactions(&mut self, rows: Vec<Transaction>, page_size: usize) {
        self.exhausted = rows.len() < page_size;
        self.transactions = rows;
        self.loading = false;
        self.error = None;
    }

    /// Append a page of older rows
    pub fn append_page(&mut self, rows: Vec<Transaction>, page_size: usize) {
        self.exhausted = rows.len() < page_size;
        self.transactions.extend(rows);
        self.loading_more = false;
    }

    /// Cursor for the next page: the oldest loaded date
    pub fn oldest_cursor(&self) -> Option<DateTime<Utc>> {
        self.transactions.iter().map(|t| t.date).min()
    }

    /// Apply the filter chain, then the selected comparator.
    /// The source rows are left untouched.
    pub fn filtered(&self) -> Vec<&Transaction> {
        let mut rows: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect();
        match self.sort {
            TransactionSort::DateDesc => rows.sort_by(|a, b| b.date.cmp(&a.date)),
            TransactionSort::DateAsc => rows.sort_by(|a, b| a.date.cmp(&b.date)),
            TransactionSort::AmountDesc => {
                rows.sort_by(|a, b| b.amount.total_cmp(&a.amount));
            }
            TransactionSort::AmountAsc => {
                rows.sort_by(|a, b| a.amount.total_cmp(&b.amount));
            }
        }
        rows
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.loading = false;
        self.loading_more = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn rows() -> Vec<Transaction> {
        let base = Utc::now();
        vec![
            Transaction {
                id: "1".into(),
                date: base,
                description: "Grocery Market".into(),
                amount: 84.12,
                status: TransactionStatus::Completed,
                direction: Direction::Debit,
                ..Default::default()
            },
            Transaction {
                id: "2".into(),
                date: base - Duration::days(1),
                description: "Payroll".into(),
                amount: 2400.0,
                status: TransactionStatus::Pending,
                direction: Direction::Credit,
                ..Default::default()
            },
            Transaction {
                id: "3".into(),
                date: base - Duration::days(2),
                description: "Coffee".into(),
                category: Some("Dining".into()),
                amount: 6.5,
                status: TransactionStatus::Completed,
                direction: Direction::Debit,
                ..Default::default()
            },
        ]
    }

    fn state_with(rows: Vec<Transaction>, sort: TransactionSort) -> TransactionsState {
        TransactionsState {
            transactions: rows,
            sort,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_filters_preserves_every_row() {
        // insertion order happens to be newest-first, matching the default sort
        let state = state_with(rows(), TransactionSort::DateDesc);
        let out = state.filtered();
        assert_eq!(out.len(), 3);
        let ids: Vec<&str> = out.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_status_filter_yields_exact_subset() {
        let mut state = state_with(rows(), TransactionSort::DateDesc);
        state.filter.status = Some(TransactionStatus::Completed);
        let out = state.filtered();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|t| t.status == TransactionStatus::Completed));

        state.filter.status = Some(TransactionStatus::Failed);
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn test_search_matches_description_and_category() {
        let mut state = state_with(rows(), TransactionSort::DateDesc);
        state.filter.search = "dining".into();
        let out = state.filtered();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "3");

        state.filter.search = "GROCERY".into();
        assert_eq!(state.filtered().len(), 1);
    }

    #[test]
    fn test_combined_filters_intersect() {
        let mut state = state_with(rows(), TransactionSort::DateDesc);
        state.filter.status = Some(TransactionStatus::Completed);
        state.filter.direction = Some(Direction::Credit);
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn test_amount_sort() {
        let state = state_with(rows(), TransactionSort::AmountDesc);
        let amounts: Vec<f64> = state.filtered().iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![2400.0, 84.12, 6.5]);
    }

    #[test]
    fn test_filtering_leaves_source_untouched() {
        let mut state = state_with(rows(), TransactionSort::AmountAsc);
        state.filter.status = Some(TransactionStatus::Pending);
        let _ = state.filtered();
        assert_eq!(state.transactions.len(), 3);
        assert_eq!(state.transactions[0].id, "1");
    }

    #[test]
    fn test_cursor_and_paging() {
        let mut state = TransactionsState::default();
        state.set_transactions(rows(), 3);
        assert!(!state.exhausted);
        let cursor = state.oldest_cursor().expect("cursor");
        assert_eq!(
            cursor,
            state.transactions.iter().map(|t| t.date).min().expect("min")
        );

        state.append_page(Vec::new(), 3);
        assert!(state.exhausted);
    }
}
