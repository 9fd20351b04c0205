//! Defines the core data models for sneaker transactions.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The format used for transaction dates in forms and tables, e.g. "2024-01-31".
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Identifier for a transaction, assigned by the store.
pub type TransactionId = i64;

/// Whether money was earned (a sale) or spent (a purchase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionType {
    #[default]
    Income,
    Expense,
}

impl TransactionType {
    /// All transaction types in the order they are offered in the form.
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(TransactionType::Income),
            "Expense" => Ok(TransactionType::Expense),
            other => Err(Error::InvalidTransactionType(other.to_owned())),
        }
    }
}

/// The sneaker brands that can be traded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Brand {
    #[default]
    Nike,
    Adidas,
    Puma,
    Reebok,
}

impl Brand {
    /// All brands in the order they are offered in the form.
    pub const ALL: [Brand; 4] = [Brand::Nike, Brand::Adidas, Brand::Puma, Brand::Reebok];

    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Nike => "Nike",
            Brand::Adidas => "Adidas",
            Brand::Puma => "Puma",
            Brand::Reebok => "Reebok",
        }
    }
}

impl Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Brand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Brand::ALL
            .into_iter()
            .find(|brand| brand.as_str() == s)
            .ok_or_else(|| Error::InvalidBrand(s.to_owned()))
    }
}

/// The amount of a transaction exactly as the user entered it.
///
/// The text is not parsed as a number, the only guarantee is that it is not
/// empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount(String);

impl Amount {
    /// Create an amount from user input.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::MissingField] if `text` is empty
    /// or only whitespace.
    pub fn new(text: &str) -> Result<Self, Error> {
        let text = text.trim();

        if text.is_empty() {
            Err(Error::MissingField("amount"))
        } else {
            Ok(Self(text.to_owned()))
        }
    }

    /// Create an amount without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl AsRef<str> for Amount {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sneaker bought or sold on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened.
    pub date: Date,
    /// How much money changed hands.
    pub amount: Amount,
    /// Whether the transaction was income or an expense.
    pub type_: TransactionType,
    /// The brand of the sneakers.
    pub brand: Brand,
}

/// A transaction produced by the transaction form.
///
/// New transactions do not have an ID yet, the store assigns one when the
/// draft is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub id: Option<TransactionId>,
    pub date: Date,
    pub amount: Amount,
    pub type_: TransactionType,
    pub brand: Brand,
}

impl TransactionDraft {
    /// Turn the draft into a transaction with `id`.
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            type_: self.type_,
            brand: self.brand,
        }
    }
}

/// Format `date` as "YYYY-MM-DD".
pub fn format_date(date: Date) -> String {
    // The format has no components that can fail for a valid `Date`.
    date.format(DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

/// Parse a date in the "YYYY-MM-DD" format.
///
/// # Errors
///
/// Returns an [Error::InvalidDate] if `text` is not a valid date.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text, DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}
