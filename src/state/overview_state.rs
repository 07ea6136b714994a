//! OverviewState - Account Selection State

use crate::domain::account::Account;

/// State for the overview screen
#[derive(Debug, Clone, Default)]
pub struct OverviewState {
    pub accounts: Vec<Account>,
    pub selected_account_id: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl OverviewState {
    /// Replace accounts from the host; a selection that disappeared is
    /// dropped
    pub fn set_accounts(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
        self.loading = false;
        self.error = None;
        if let Some(id) = &self.selected_account_id {
            if !self.accounts.iter().any(|a| &a.id == id) {
                self.selected_account_id = None;
            }
        }
    }

    /// Select an account card, or clear with `None` for "all accounts"
    pub fn select(&mut self, id: Option<String>) {
        self.selected_account_id = id;
    }

    pub fn selected_account(&self) -> Option<&Account> {
        let id = self.selected_account_id.as_deref()?;
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Sum of balances across all accounts
    pub fn total_balance(&self) -> f64 {
        self.accounts.iter().map(|a| a.balance).sum()
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: &str, balance: f64) -> Account {
        Account {
            id: id.to_string(),
            balance,
            ..Default::default()
        }
    }

    #[test]
    fn test_selection_survives_refresh_when_present() {
        let mut state = OverviewState::default();
        state.set_accounts(vec![account("a", 10.0), account("b", 20.0)]);
        state.select(Some("b".into()));
        state.set_accounts(vec![account("b", 25.0)]);
        assert_eq!(state.selected_account().map(|a| a.balance), Some(25.0));
    }

    #[test]
    fn test_vanished_selection_cleared() {
        let mut state = OverviewState::default();
        state.set_accounts(vec![account("a", 10.0)]);
        state.select(Some("a".into()));
        state.set_accounts(vec![account("b", 20.0)]);
        assert_eq!(state.selected_account_id, None);
    }

    #[test]
    fn test_total_balance() {
        let mut state = OverviewState::default();
        state.set_accounts(vec![account("a", 10.0), account("b", -2.5)]);
        assert_eq!(state.total_balance(), 7.5);
    }
}
