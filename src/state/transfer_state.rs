//! TransferState - Transfer Form Validation State Machine
//!
//! Phases: idle -> (validate on submit) -> rejected(errors) or submitting ->
//! succeeded or failed. Validation is synchronous and field-level; any error
//! blocks the source call entirely.

use ahash::AHashMap;

use crate::data::sources::TransferRequest;
use crate::domain::account::Account;
use crate::domain::contact::Contact;
use crate::utils::format::format_money;

/// Between own accounts, or out to a saved contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransferKind {
    #[default]
    BetweenAccounts,
    External,
}

impl TransferKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransferKind::BetweenAccounts => "Between accounts",
            TransferKind::External => "To someone else",
        }
    }
}

/// Submission phase
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TransferPhase {
    #[default]
    Idle,
    /// Validation produced errors; nothing was submitted
    Rejected,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Fields that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferField {
    FromAccount,
    ToAccount,
    Contact,
    Amount,
    Description,
}

/// State for the transfer form
#[derive(Debug, Clone, Default)]
pub struct TransferState {
    pub kind: TransferKind,
    pub from_account_id: Option<String>,
    pub to_account_id: Option<String>,
    pub contact_id: Option<String>,
    /// Raw amount text as typed
    pub amount: String,
    pub description: String,
    pub errors: AHashMap<TransferField, String>,
    pub phase: TransferPhase,
    /// Host-owned reference data
    pub accounts: Vec<Account>,
    pub contacts: Vec<Contact>,
}

impl TransferState {
    /// Replace reference data from the host
    pub fn set_reference_data(&mut self, accounts: Vec<Account>, contacts: Vec<Contact>) {
        self.accounts = accounts;
        self.contacts = contacts;
    }

    /// Switch the transfer kind. Selecting a kind fully resets the form:
    /// destination, contact, amount, description and all validation errors.
    pub fn set_kind(&mut self, kind: TransferKind) {
        self.kind = kind;
        self.from_account_id = None;
        self.to_account_id = None;
        self.contact_id = None;
        self.amount.clear();
        self.description.clear();
        self.errors.clear();
        self.phase = TransferPhase::Idle;
    }

    pub fn set_from_account(&mut self, id: Option<String>) {
        self.from_account_id = id;
        self.errors.remove(&TransferField::FromAccount);
    }

    pub fn set_to_account(&mut self, id: Option<String>) {
        self.to_account_id = id;
        self.errors.remove(&TransferField::ToAccount);
    }

    pub fn set_contact(&mut self, id: Option<String>) {
        self.contact_id = id;
        self.errors.remove(&TransferField::Contact);
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
        self.errors.remove(&TransferField::Amount);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.errors.remove(&TransferField::Description);
    }

    /// The selected source account, when valid
    pub fn from_account(&self) -> Option<&Account> {
        let id = self.from_account_id.as_deref()?;
        self.accounts.iter().find(|a| a.id == id)
    }

    fn selected_contact(&self) -> Option<&Contact> {
        let id = self.contact_id.as_deref()?;
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Synchronous field validation. Returns a map of per-field messages;
    /// an empty map means the form may be submitted.
    pub fn validate(&self) -> AHashMap<TransferField, String> {
        let mut errors = AHashMap::new();

        let from = self.from_account();
        if from.is_none() {
            errors.insert(
                TransferField::FromAccount,
                "Select an account to transfer from".to_string(),
            );
        }

        match self.kind {
            TransferKind::BetweenAccounts => {
                match self.to_account_id.as_deref() {
                    None => {
                        errors.insert(
                            TransferField::ToAccount,
                            "Select an account to transfer to".to_string(),
                        );
                    }
                    Some(to) if Some(to) == self.from_account_id.as_deref() => {
                        errors.insert(
                            TransferField::ToAccount,
                            "Choose a different destination account".to_string(),
                        );
                    }
                    Some(_) => {}
                }
            }
            TransferKind::External => {
                if self.selected_contact().is_none() {
                    errors.insert(TransferField::Contact, "Select a recipient".to_string());
                }
            }
        }

        let amount_text = self.amount.trim();
        if amount_text.is_empty() {
            errors.insert(TransferField::Amount, "Amount is required".to_string());
        } else {
            match amount_text.parse::<f64>() {
                Err(_) => {
                    errors.insert(TransferField::Amount, "Enter a valid amount".to_string());
                }
                // "NaN" and "inf" parse as f64 but are not amounts
                Ok(amount) if !amount.is_finite() => {
                    errors.insert(TransferField::Amount, "Enter a valid amount".to_string());
                }
                Ok(amount) if amount <= 0.0 => {
                    errors.insert(
                        TransferField::Amount,
                        "Amount must be greater than zero".to_string(),
                    );
                }
                Ok(amount) => {
                    if let Some(from) = from {
                        let limit = from.spendable();
                        if amount > limit {
                            errors.insert(
                                TransferField::Amount,
                                format!(
                                    "Amount exceeds available balance of {}",
                                    format_money(limit)
                                ),
                            );
                        }
                    }
                }
            }
        }

        if self.description.trim().is_empty() {
            errors.insert(
                TransferField::Description,
                "Description is required".to_string(),
            );
        }

        errors
    }

    /// Validate and, when clean, move to `Submitting` and hand back the
    /// request for the bank source. On any error the state moves to
    /// `Rejected` and nothing is submitted.
    pub fn begin_submit(&mut self) -> Option<TransferRequest> {
        if self.phase == TransferPhase::Submitting {
            return None;
        }

        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            self.phase = TransferPhase::Rejected;
            return None;
        }

        // validate() guarantees these parse/resolve
        let amount = self.amount.trim().parse::<f64>().ok()?;
        let from_account_id = self.from_account_id.clone()?;

        self.errors.clear();
        self.phase = TransferPhase::Submitting;
        Some(TransferRequest {
            from_account_id,
            to_account_id: self.to_account_id.clone(),
            contact_id: self.contact_id.clone(),
            amount,
            description: self.description.trim().to_string(),
        })
    }

    /// The source accepted the transfer: clear the form and record success
    pub fn submit_succeeded(&mut self) {
        let kind = self.kind;
        *self = Self {
            kind,
            accounts: std::mem::take(&mut self.accounts),
            contacts: std::mem::take(&mut self.contacts),
            phase: TransferPhase::Succeeded,
            ..Default::default()
        };
    }

    /// The source rejected the transfer
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.phase = TransferPhase::Failed(message.into());
    }

    /// Clear the success/failure outcome (banner timer expiry or edit)
    pub fn clear_outcome(&mut self) {
        if matches!(self.phase, TransferPhase::Succeeded | TransferPhase::Failed(_)) {
            self.phase = TransferPhase::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == TransferPhase::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: &str, balance: f64, available: Option<f64>) -> Account {
        Account {
            id: id.to_string(),
            name: format!("Account {id}"),
            balance,
            available,
            ..Default::default()
        }
    }

    fn filled_state() -> TransferState {
        let mut state = TransferState::default();
        state.set_reference_data(
            vec![account("a1", 100.0, Some(80.0)), account("a2", 50.0, None)],
            vec![Contact {
                id: "c1".into(),
                name: "Maria".into(),
                account_number: "1".into(),
                ..Default::default()
            }],
        );
        state.set_from_account(Some("a1".into()));
        state.set_to_account(Some("a2".into()));
        state.set_amount("10");
        state.set_description("rent");
        state
    }

    #[test]
    fn test_clean_form_submits() {
        let mut state = filled_state();
        let request = state.begin_submit().expect("request");
        assert_eq!(request.from_account_id, "a1");
        assert_eq!(request.amount, 10.0);
        assert_eq!(state.phase, TransferPhase::Submitting);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut state = filled_state();
        state.set_amount("0");
        assert!(state.begin_submit().is_none());
        assert_eq!(state.phase, TransferPhase::Rejected);
        assert!(state.errors.contains_key(&TransferField::Amount));
    }

    #[test]
    fn test_amount_over_available_rejected_with_exact_message() {
        // accounts = [{id:"a1", balance:100, available:80}], amount = "90"
        let mut state = filled_state();
        state.set_amount("90");
        assert!(state.begin_submit().is_none());
        assert_eq!(
            state.errors.get(&TransferField::Amount).map(String::as_str),
            Some("Amount exceeds available balance of $80.00")
        );
    }

    #[test]
    fn test_balance_is_limit_when_available_absent() {
        let mut state = filled_state();
        state.set_from_account(Some("a2".into()));
        state.set_to_account(Some("a1".into()));
        state.set_amount("60");
        assert!(state.begin_submit().is_none());
        assert_eq!(
            state.errors.get(&TransferField::Amount).map(String::as_str),
            Some("Amount exceeds available balance of $50.00")
        );
    }

    #[test]
    fn test_unparsable_amount_rejected() {
        let mut state = filled_state();
        state.set_amount("ninety");
        assert!(state.begin_submit().is_none());
        assert!(state.errors.contains_key(&TransferField::Amount));
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        // f64::from_str accepts these spellings; none may reach the source
        for text in ["NaN", "nan", "inf", "-inf", "infinity"] {
            let mut state = filled_state();
            state.set_amount(text);
            assert!(state.begin_submit().is_none(), "{text} must be rejected");
            assert_eq!(state.phase, TransferPhase::Rejected);
            assert!(state.errors.contains_key(&TransferField::Amount));
        }
    }

    #[test]
    fn test_empty_description_rejected() {
        let mut state = filled_state();
        state.set_description("   ");
        assert!(state.begin_submit().is_none());
        assert!(state.errors.contains_key(&TransferField::Description));
    }

    #[test]
    fn test_same_destination_rejected() {
        let mut state = filled_state();
        state.set_to_account(Some("a1".into()));
        assert!(state.begin_submit().is_none());
        assert!(state.errors.contains_key(&TransferField::ToAccount));
    }

    #[test]
    fn test_external_requires_contact() {
        let mut state = filled_state();
        state.set_kind(TransferKind::External);
        state.set_from_account(Some("a1".into()));
        state.set_amount("10");
        state.set_description("rent");
        assert!(state.begin_submit().is_none());
        assert!(state.errors.contains_key(&TransferField::Contact));

        state.set_contact(Some("c1".into()));
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn test_kind_switch_resets_form() {
        let mut state = filled_state();
        state.set_kind(TransferKind::External);
        state.set_contact(Some("c1".into()));
        // trigger validation errors, then switch back
        state.set_amount("");
        state.set_description("");
        assert!(state.begin_submit().is_none());
        assert!(!state.errors.is_empty());

        state.set_kind(TransferKind::BetweenAccounts);
        assert_eq!(state.contact_id, None);
        assert_eq!(state.to_account_id, None);
        assert!(state.errors.is_empty());
        assert!(state.amount.is_empty());
        assert_eq!(state.phase, TransferPhase::Idle);
    }

    #[test]
    fn test_success_resets_form_and_keeps_reference_data() {
        let mut state = filled_state();
        let _ = state.begin_submit().expect("request");
        state.submit_succeeded();
        assert_eq!(state.phase, TransferPhase::Succeeded);
        assert!(state.amount.is_empty());
        assert_eq!(state.from_account_id, None);
        assert_eq!(state.accounts.len(), 2);

        state.clear_outcome();
        assert_eq!(state.phase, TransferPhase::Idle);
    }

    #[test]
    fn test_reentrant_submit_blocked() {
        let mut state = filled_state();
        let _ = state.begin_submit().expect("request");
        assert!(state.begin_submit().is_none());
        assert_eq!(state.phase, TransferPhase::Submitting);
    }
}
