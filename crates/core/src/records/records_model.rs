//! Financial record domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{ALERT_TAG_EXPENSE, ALERT_TAG_INCOME, ALERT_TAG_SAVINGS};
use crate::errors::{Result, ValidationError};
use crate::money::parse_amount;

/// Kind of a financial record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordKind {
    Income,
    Expense,
    Savings,
}

impl RecordKind {
    /// Stable string form used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Income => "INCOME",
            RecordKind::Expense => "EXPENSE",
            RecordKind::Savings => "SAVINGS",
        }
    }

    pub fn from_str_loose(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "INCOME" | "INGRESO" => Some(RecordKind::Income),
            "EXPENSE" | "GASTO" => Some(RecordKind::Expense),
            "SAVINGS" | "AHORRO" => Some(RecordKind::Savings),
            _ => None,
        }
    }

    /// User-facing name, as the screens label these records.
    pub fn display_name(&self) -> &'static str {
        match self {
            RecordKind::Income => "Ingreso",
            RecordKind::Expense => "Gasto",
            RecordKind::Savings => "Ahorro",
        }
    }

    /// Category tag stamped on alerts spawned by this kind.
    pub fn alert_tag(&self) -> &'static str {
        match self {
            RecordKind::Income => ALERT_TAG_INCOME,
            RecordKind::Expense => ALERT_TAG_EXPENSE,
            RecordKind::Savings => ALERT_TAG_SAVINGS,
        }
    }
}

/// Domain model representing a financial record owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub id: String,
    pub owner_user_id: String,
    pub kind: RecordKind,
    pub name: String,
    pub amount: Decimal,
    /// User-entered day/month/year string, kept as the app stores it.
    pub date: String,
    pub category: String,
    /// Savings goal target ("meta"). Present only for `Savings` records.
    /// The stored amount may exceed it; clamping is display-only.
    pub target_amount: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw form input for creating a record, amounts still unparsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub kind: RecordKind,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub category: String,
    pub target_amount: Option<String>,
}

/// Validated input ready for insertion. The repository assigns the id
/// and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    pub kind: RecordKind,
    pub name: String,
    pub amount: Decimal,
    pub date: String,
    pub category: String,
    pub target_amount: Option<Decimal>,
}

impl RecordDraft {
    /// Validates the draft: no empty required fields, a strictly positive
    /// finite amount, and a target for savings records.
    pub fn validate(self) -> Result<NewRecord> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("nombre".to_string()).into());
        }
        if self.date.trim().is_empty() {
            return Err(ValidationError::MissingField("fecha".to_string()).into());
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingField("categoria".to_string()).into());
        }

        let amount = parse_amount(&self.amount)?;
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount(self.amount).into());
        }

        let target_amount = match self.kind {
            RecordKind::Savings => {
                let raw = self
                    .target_amount
                    .as_deref()
                    .filter(|t| !t.trim().is_empty())
                    .ok_or_else(|| ValidationError::MissingField("meta".to_string()))?;
                let target = parse_amount(raw)?;
                if target <= Decimal::ZERO {
                    return Err(ValidationError::InvalidAmount(raw.to_string()).into());
                }
                Some(target)
            }
            _ => None,
        };

        Ok(NewRecord {
            kind: self.kind,
            name: self.name.trim().to_string(),
            amount,
            date: self.date.trim().to_string(),
            category: self.category.trim().to_string(),
            target_amount,
        })
    }
}
