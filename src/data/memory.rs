//! Memory - In-Memory Sample Sources
//!
//! Backing data for the demo workspace and for tests. State lives in an
//! `Rc<RefCell<..>>` shared with the returned futures, which resolve
//! immediately on the foreground executor.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Duration, Utc};
use futures::future::LocalBoxFuture;
use uuid::Uuid;

use crate::domain::account::{Account, AccountKind};
use crate::domain::contact::Contact;
use crate::domain::message::{Folder, Message, OutgoingMessage};
use crate::domain::task::{Task, TaskDraft, TaskPriority, TaskStatus};
use crate::domain::transaction::{Direction, Transaction, TransactionStatus};
use crate::domain::user::UserProfile;
use crate::error::{Error, Result};

use super::sources::{BankSource, MailQuery, MailSource, TaskSource, TransactionQuery, TransferRequest};

const DEFAULT_PAGE: usize = 20;

#[derive(Default)]
struct BankData {
    accounts: Vec<Account>,
    contacts: Vec<Contact>,
    transactions: Vec<Transaction>,
    profile: UserProfile,
}

/// In-memory bank source
#[derive(Clone, Default)]
pub struct MemoryBank {
    data: Rc<RefCell<BankData>>,
}

impl MemoryBank {
    pub fn new(
        accounts: Vec<Account>,
        contacts: Vec<Contact>,
        transactions: Vec<Transaction>,
        profile: UserProfile,
    ) -> Self {
        Self {
            data: Rc::new(RefCell::new(BankData {
                accounts,
                contacts,
                transactions,
                profile,
            })),
        }
    }

    /// Demo data set
    pub fn sample() -> Self {
        let now = Utc::now();
        let accounts = vec![
            Account {
                id: "acc-checking".into(),
                name: "Everyday Checking".into(),
                kind: AccountKind::Checking,
                balance: 4_820.33,
                currency: "USD".into(),
                number: "****1234".into(),
                available: Some(4_620.33),
                ..Default::default()
            },
            Account {
                id: "acc-savings".into(),
                name: "Rainy Day Savings".into(),
                kind: AccountKind::Savings,
                balance: 12_400.00,
                currency: "USD".into(),
                number: "****5678".into(),
                interest_rate: Some(3.1),
                ..Default::default()
            },
            Account {
                id: "acc-credit".into(),
                name: "Travel Card".into(),
                kind: AccountKind::Credit,
                balance: -642.19,
                currency: "USD".into(),
                number: "****9012".into(),
                limit: Some(5_000.0),
                ..Default::default()
            },
        ];
        let contacts = vec![
            Contact {
                id: "ct-1".into(),
                name: "Maria Santos".into(),
                account_number: "4402-7781".into(),
                bank: Some("First National".into()),
                avatar: None,
            },
            Contact {
                id: "ct-2".into(),
                name: "Oliver Grant".into(),
                account_number: "9310-0024".into(),
                bank: None,
                avatar: None,
            },
        ];
        let descriptions = [
            ("Grocery Market", Direction::Debit, 84.12),
            ("Payroll Deposit", Direction::Credit, 2_400.00),
            ("Coffee Shop", Direction::Debit, 6.50),
            ("Utility Bill", Direction::Debit, 132.40),
            ("Refund - Online Store", Direction::Credit, 29.99),
            ("Streaming Service", Direction::Debit, 14.99),
        ];
        let mut transactions = Vec::new();
        for (i, (desc, direction, amount)) in descriptions.iter().cycle().take(30).enumerate() {
            transactions.push(Transaction {
                id: format!("tx-{i}"),
                date: now - Duration::hours(6 * i as i64),
                description: (*desc).to_string(),
                category: None,
                amount: *amount,
                direction: *direction,
                status: if i % 7 == 0 {
                    TransactionStatus::Pending
                } else {
                    TransactionStatus::Completed
                },
                account_id: if i % 3 == 2 {
                    "acc-savings".into()
                } else {
                    "acc-checking".into()
                },
            });
        }
        let profile = UserProfile {
            id: "user-1".into(),
            name: "Jordan Reyes".into(),
            email: "jordan@example.com".into(),
            phone: "555-0142".into(),
            address: "18 Harbor Lane".into(),
            avatar: None,
        };
        Self::new(accounts, contacts, transactions, profile)
    }
}

impl BankSource for MemoryBank {
    fn accounts(&self) -> LocalBoxFuture<'static, Result<Vec<Account>>> {
        let data = self.data.clone();
        Box::pin(async move { Ok(data.borrow().accounts.clone()) })
    }

    fn contacts(&self) -> LocalBoxFuture<'static, Result<Vec<Contact>>> {
        let data = self.data.clone();
        Box::pin(async move { Ok(data.borrow().contacts.clone()) })
    }

    fn transactions(
        &self,
        query: TransactionQuery,
    ) -> LocalBoxFuture<'static, Result<Vec<Transaction>>> {
        let data = self.data.clone();
        Box::pin(async move {
            let limit = if query.limit == 0 { DEFAULT_PAGE } else { query.limit };
            let mut rows: Vec<Transaction> = data
                .borrow()
                .transactions
                .iter()
                .filter(|t| {
                    query
                        .account_id
                        .as_ref()
                        .is_none_or(|id| &t.account_id == id)
                })
                .filter(|t| query.before.is_none_or(|cursor| t.date < cursor))
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.date.cmp(&a.date));
            rows.truncate(limit);
            Ok(rows)
        })
    }

    fn transfer(&self, request: TransferRequest) -> LocalBoxFuture<'static, Result<()>> {
        let data = self.data.clone();
        Box::pin(async move {
            if !request.amount.is_finite() || request.amount <= 0.0 {
                return Err(Error::validation("amount", "Amount must be a positive number"));
            }
            let mut data = data.borrow_mut();
            let from = data
                .accounts
                .iter_mut()
                .find(|a| a.id == request.from_account_id)
                .ok_or_else(|| Error::operation("Unknown source account"))?;
            from.balance -= request.amount;
            if let Some(available) = from.available.as_mut() {
                *available -= request.amount;
            }
            if let Some(to_id) = &request.to_account_id {
                if let Some(to) = data.accounts.iter_mut().find(|a| &a.id == to_id) {
                    to.balance += request.amount;
                }
            }
            data.transactions.insert(
                0,
                Transaction {
                    id: Uuid::new_v4().to_string(),
                    date: Utc::now(),
                    description: request.description,
                    amount: request.amount,
                    direction: Direction::Debit,
                    status: TransactionStatus::Pending,
                    account_id: request.from_account_id,
                    ..Default::default()
                },
            );
            Ok(())
        })
    }

    fn profile(&self) -> LocalBoxFuture<'static, Result<UserProfile>> {
        let data = self.data.clone();
        Box::pin(async move { Ok(data.borrow().profile.clone()) })
    }

    fn save_profile(&self, profile: UserProfile) -> LocalBoxFuture<'static, Result<()>> {
        let data = self.data.clone();
        Box::pin(async move {
            data.borrow_mut().profile = profile;
            Ok(())
        })
    }
}

/// In-memory mail source
#[derive(Clone, Default)]
pub struct MemoryMail {
    messages: Rc<RefCell<Vec<Message>>>,
}

impl MemoryMail {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages: Rc::new(RefCell::new(messages)),
        }
    }

    /// Demo data set spanning mail folders and notice categories
    pub fn sample() -> Self {
        let now = Utc::now();
        let seed = [
            (Folder::Inbox, "Maria Santos", "Lunch on Thursday?", false),
            (Folder::Inbox, "Acme Support", "Your ticket was updated", false),
            (Folder::Inbox, "Oliver Grant", "Q3 numbers attached", true),
            (Folder::Sent, "me", "Re: Lunch on Thursday?", true),
            (Folder::Archive, "Newsletter", "Weekly digest", true),
            (Folder::Alerts, "Ledger Bank", "Low balance alert", false),
            (Folder::Alerts, "Ledger Bank", "New sign-in detected", true),
            (Folder::Statements, "Ledger Bank", "Your March statement is ready", true),
            (Folder::Offers, "Ledger Bank", "Preferred rate on savings", false),
        ];
        let messages = seed
            .iter()
            .enumerate()
            .map(|(i, (folder, sender, subject, read))| Message {
                id: format!("msg-{i}"),
                sender: (*sender).to_string(),
                subject: (*subject).to_string(),
                body: format!("{subject}\n\n(sample message body)"),
                timestamp: now - Duration::hours(3 * i as i64),
                read: *read,
                starred: i == 2,
                attachments: Vec::new(),
                folder: *folder,
            })
            .collect();
        Self::new(messages)
    }
}

impl MailSource for MemoryMail {
    fn list(
        &self,
        folder: Folder,
        query: MailQuery,
    ) -> LocalBoxFuture<'static, Result<Vec<Message>>> {
        let messages = self.messages.clone();
        Box::pin(async move {
            let needle = query.search.as_deref().map(str::to_lowercase);
            let mut rows: Vec<Message> = messages
                .borrow()
                .iter()
                .filter(|m| m.folder == folder)
                .filter(|m| {
                    needle.as_deref().is_none_or(|n| {
                        m.subject.to_lowercase().contains(n)
                            || m.sender.to_lowercase().contains(n)
                            || m.body.to_lowercase().contains(n)
                    })
                })
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            Ok(rows)
        })
    }

    fn fetch(&self, id: &str) -> Option<LocalBoxFuture<'static, Result<Message>>> {
        let messages = self.messages.clone();
        let id = id.to_string();
        Some(Box::pin(async move {
            messages
                .borrow()
                .iter()
                .find(|m| m.id == id)
                .cloned()
                .ok_or_else(|| Error::operation(format!("No such message: {id}")))
        }))
    }

    fn mark_read(&self, id: &str) -> LocalBoxFuture<'static, Result<()>> {
        let messages = self.messages.clone();
        let id = id.to_string();
        Box::pin(async move {
            if let Some(message) = messages.borrow_mut().iter_mut().find(|m| m.id == id) {
                message.read = true;
            }
            Ok(())
        })
    }

    fn send(&self, outgoing: OutgoingMessage) -> LocalBoxFuture<'static, Result<()>> {
        let messages = self.messages.clone();
        Box::pin(async move {
            messages.borrow_mut().insert(
                0,
                Message {
                    id: Uuid::new_v4().to_string(),
                    sender: "me".into(),
                    subject: outgoing.subject,
                    body: outgoing.body,
                    timestamp: Utc::now(),
                    read: true,
                    folder: Folder::Sent,
                    ..Default::default()
                },
            );
            Ok(())
        })
    }
}

/// In-memory task source
#[derive(Clone, Default)]
pub struct MemoryTasks {
    tasks: Rc<RefCell<Vec<Task>>>,
}

impl MemoryTasks {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Rc::new(RefCell::new(tasks)),
        }
    }

    /// Demo data set
    pub fn sample() -> Self {
        let now = Utc::now();
        let tasks = vec![
            Task {
                id: "task-1".into(),
                title: "Review loan application".into(),
                notes: "Waiting on income docs".into(),
                status: TaskStatus::InProgress,
                priority: TaskPriority::High,
                due_date: Some(now + Duration::days(1)),
                ..Default::default()
            },
            Task {
                id: "task-2".into(),
                title: "Call Maria about the statement".into(),
                status: TaskStatus::ToDo,
                priority: TaskPriority::Medium,
                due_date: Some(now + Duration::days(3)),
                ..Default::default()
            },
            Task {
                id: "task-3".into(),
                title: "Archive closed accounts".into(),
                status: TaskStatus::ToDo,
                priority: TaskPriority::Low,
                due_date: None,
                ..Default::default()
            },
            Task {
                id: "task-4".into(),
                title: "File quarterly report".into(),
                status: TaskStatus::Completed,
                priority: TaskPriority::Urgent,
                due_date: Some(now - Duration::days(2)),
                ..Default::default()
            },
        ];
        Self::new(tasks)
    }
}

impl TaskSource for MemoryTasks {
    fn tasks(&self) -> LocalBoxFuture<'static, Result<Vec<Task>>> {
        let tasks = self.tasks.clone();
        Box::pin(async move { Ok(tasks.borrow().clone()) })
    }

    fn create(&self, draft: TaskDraft) -> LocalBoxFuture<'static, Result<Task>> {
        let tasks = self.tasks.clone();
        Box::pin(async move {
            if draft.title.trim().is_empty() {
                return Err(Error::validation("title", "Task title is required"));
            }
            let task = Task {
                id: Uuid::new_v4().to_string(),
                title: draft.title,
                notes: draft.notes,
                status: TaskStatus::ToDo,
                priority: draft.priority,
                due_date: draft.due_date,
                link: None,
            };
            tasks.borrow_mut().push(task.clone());
            Ok(task)
        })
    }

    fn set_status(&self, id: &str, status: TaskStatus) -> LocalBoxFuture<'static, Result<()>> {
        let tasks = self.tasks.clone();
        let id = id.to_string();
        Box::pin(async move {
            let mut tasks = tasks.borrow_mut();
            let task = tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| Error::operation(format!("No such task: {id}")))?;
            task.status = status;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_transactions_respect_cursor() {
        let bank = MemoryBank::sample();
        let first = block_on(bank.transactions(TransactionQuery {
            limit: 5,
            ..Default::default()
        }))
        .expect("page");
        assert_eq!(first.len(), 5);
        let cursor = first.last().map(|t| t.date).expect("cursor");

        let next = block_on(bank.transactions(TransactionQuery {
            before: Some(cursor),
            limit: 5,
            ..Default::default()
        }))
        .expect("page");
        assert!(next.iter().all(|t| t.date < cursor));
    }

    #[test]
    fn test_mail_list_filters_folder_and_search() {
        let mail = MemoryMail::sample();
        let alerts = block_on(mail.list(Folder::Alerts, MailQuery::default())).expect("list");
        assert!(alerts.iter().all(|m| m.folder == Folder::Alerts));

        let hits = block_on(mail.list(
            Folder::Inbox,
            MailQuery {
                search: Some("lunch".into()),
            },
        ))
        .expect("list");
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|m| m.subject.to_lowercase().contains("lunch")));
    }

    #[test]
    fn test_mark_read_is_visible_on_next_fetch() {
        let mail = MemoryMail::sample();
        block_on(mail.mark_read("msg-0")).expect("mark");
        let fetch = mail.fetch("msg-0").expect("single fetch supported");
        let message = block_on(fetch).expect("message");
        assert!(message.read);
    }

    #[test]
    fn test_create_task_rejects_empty_title() {
        let tasks = MemoryTasks::sample();
        let result = block_on(tasks.create(TaskDraft::default()));
        assert!(matches!(
            result,
            Err(Error::Validation { ref field, .. }) if field == "title"
        ));
    }

    #[test]
    fn test_transfer_rejects_non_positive_and_non_finite_amounts() {
        let bank = MemoryBank::sample();
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = block_on(bank.transfer(TransferRequest {
                from_account_id: "acc-checking".into(),
                to_account_id: Some("acc-savings".into()),
                contact_id: None,
                amount,
                description: "rent".into(),
            }));
            assert!(matches!(
                result,
                Err(Error::Validation { ref field, .. }) if field == "amount"
            ));
        }
    }
}
