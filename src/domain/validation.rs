use crate::domain::transaction::{Amount, Direction, TransactionDraft};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;

/// Every failing field from one validation pass, keyed by wire field name.
///
/// Never empty: success is represented by `Ok(ValidatedTransaction)` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// A draft that passed every field rule, with parsed, trimmed values.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTransaction {
    pub partner_name: String,
    pub direction: Direction,
    pub amount: Amount,
    pub date: NaiveDate,
    pub description: String,
}

/// Checks a candidate transaction against the field rules.
///
/// Pure: collects all violations rather than stopping at the first, so a form
/// can surface every inline message in one pass.
pub fn validate(draft: &TransactionDraft) -> Result<ValidatedTransaction, FieldErrors> {
    let mut errors = FieldErrors::default();

    let partner_name = draft.partner_name.trim();
    if partner_name.is_empty() {
        errors.insert("partnerName", "Partner name is required");
    }

    let amount = draft
        .amount
        .trim()
        .parse::<Decimal>()
        .ok()
        .and_then(|value| Amount::new(value).ok());
    if amount.is_none() {
        errors.insert("amount", "Amount must be greater than 0");
    }

    let date_raw = draft.date.trim();
    let date = if date_raw.is_empty() {
        errors.insert("date", "Date is required");
        None
    } else {
        match NaiveDate::parse_from_str(date_raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.insert("date", "Date must be a valid date (YYYY-MM-DD)");
                None
            }
        }
    };

    let description = draft.description.trim();
    if description.is_empty() {
        errors.insert("description", "Description is required");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedTransaction {
        partner_name: partner_name.to_string(),
        direction: draft.direction,
        // None cases returned above
        amount: amount.unwrap(),
        date: date.unwrap(),
        description: description.to_string(),
    })
}
