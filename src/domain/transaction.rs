use crate::error::LedgerError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Opaque unique identifier for a transaction, assigned at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(String);

impl TxId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether money came in from the partner or went out to them.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Received,
    Given,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Received => f.write_str("received"),
            Direction::Given => f.write_str("given"),
        }
    }
}

impl FromStr for Direction {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "received" => Ok(Direction::Received),
            "given" => Ok(Direction::Given),
            other => Err(LedgerError::InvalidDirection(other.to_string())),
        }
    }
}

/// A strictly positive monetary amount.
///
/// Wraps `rust_decimal::Decimal` so a zero or negative amount cannot enter the
/// ledger. On the wire it is a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, LedgerError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(LedgerError::NonPositiveAmount)
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = rust_decimal::serde::float::deserialize(deserializer)?;
        Amount::new(value).map_err(serde::de::Error::custom)
    }
}

/// A recorded partner transaction.
///
/// Persisted as `{"id", "partnerName", "type", "amount", "date",
/// "description"}` with a lowercase `type` and `amount` as a JSON number.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TxId,
    pub partner_name: String,
    #[serde(rename = "type")]
    pub direction: Direction,
    pub amount: Amount,
    pub date: NaiveDate,
    pub description: String,
}

/// Raw form input for a transaction, before validation.
///
/// `amount` and `date` stay as entered text so the validator can report every
/// bad field at once instead of failing on the first parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub partner_name: String,
    pub direction: Direction,
    pub amount: String,
    pub date: String,
    pub description: String,
}
