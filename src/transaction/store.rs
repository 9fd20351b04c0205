//! The in-memory store that owns the list of transactions.

use time::Date;

use crate::transaction::core::{
    Amount, Brand, Transaction, TransactionDraft, TransactionId, TransactionType,
};

/// The ordered collection of transactions.
///
/// Transactions are kept in insertion order. The store uses value semantics:
/// [TransactionStore::add], [TransactionStore::update] and
/// [TransactionStore::remove] leave `self` untouched and return the next
/// store, which the caller swaps in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    /// The ID for the next added transaction. Never decreases, so IDs of
    /// deleted transactions are not handed out again.
    next_id: TransactionId,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore {
    /// Create an empty store whose first transaction gets the ID 1.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding `transactions`.
    ///
    /// The IDs in `transactions` must be unique. The next ID is one past the
    /// largest ID in `transactions`, or 1 if there are none.
    ///
    /// IDs stop at [TransactionId::MAX] instead of overflowing.
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        let next_id = transactions
            .iter()
            .map(|transaction| transaction.id)
            .max()
            .map_or(1, |max_id| max_id.saturating_add(1));

        Self {
            transactions,
            next_id,
        }
    }

    /// Create a store with the two sample transactions shown on first launch.
    pub fn sample(today: Date) -> Self {
        Self::with_transactions(vec![
            Transaction {
                id: 1,
                date: today,
                amount: Amount::new_unchecked("100"),
                type_: TransactionType::Income,
                brand: Brand::Nike,
            },
            Transaction {
                id: 2,
                date: today,
                amount: Amount::new_unchecked("200"),
                type_: TransactionType::Expense,
                brand: Brand::Adidas,
            },
        ])
    }

    /// The transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Get the transaction with `id`, if there is one.
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    /// The number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether there are no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Append `draft` to the end of the list with a freshly assigned ID.
    ///
    /// Any ID already set on `draft` is ignored.
    pub fn add(&self, draft: TransactionDraft) -> (Self, Transaction) {
        let transaction = draft.with_id(self.next_id);

        let mut transactions = self.transactions.clone();
        transactions.push(transaction.clone());

        tracing::info!("Added transaction {}", transaction.id);

        (
            Self {
                transactions,
                next_id: self.next_id.saturating_add(1),
            },
            transaction,
        )
    }

    /// Replace the transaction with the same ID as `record`, keeping its
    /// position.
    ///
    /// Does nothing if no transaction has that ID.
    pub fn update(&self, record: Transaction) -> Self {
        if self.get(record.id).is_none() {
            tracing::debug!("Ignoring update for missing transaction {}", record.id);
            return self.clone();
        }

        tracing::info!("Updated transaction {}", record.id);

        let transactions = self
            .transactions
            .iter()
            .map(|transaction| {
                if transaction.id == record.id {
                    record.clone()
                } else {
                    transaction.clone()
                }
            })
            .collect();

        Self {
            transactions,
            next_id: self.next_id,
        }
    }

    /// Remove the transaction with `id`.
    ///
    /// Does nothing if no transaction has that ID.
    pub fn remove(&self, id: TransactionId) -> Self {
        let transactions: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|transaction| transaction.id != id)
            .cloned()
            .collect();

        if transactions.len() == self.transactions.len() {
            tracing::debug!("Ignoring removal of missing transaction {id}");
        } else {
            tracing::info!("Removed transaction {id}");
        }

        Self {
            transactions,
            next_id: self.next_id,
        }
    }
}
