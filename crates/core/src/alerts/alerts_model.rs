//! Alert domain models and message templates.

use chrono::serde::ts_milliseconds_option;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{ALERT_TAG_EXPENSE, ALERT_TAG_INCOME, ALERT_TAG_SAVINGS};
use crate::money::format_cop;
use crate::records::RecordKind;

/// Domain model representing a stored alert.
///
/// `created_at` is optional because rows written by early app versions
/// can miss the timestamp; such alerts are excluded from ordered feeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub owner_user_id: String,
    pub title: String,
    pub message: String,
    pub category_tag: String,
    #[serde(with = "ts_milliseconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    pub read: bool,
}

/// Input model for a new alert. The repository assigns the id and the
/// creation timestamp; `read` always starts false.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    pub title: String,
    pub message: String,
    pub category_tag: String,
}

impl NewAlert {
    /// Alert for a freshly created record. The wording per kind matches
    /// what the entry screens have always written.
    pub fn record_created(kind: RecordKind, name: &str, amount: Decimal, category: &str, target: Option<Decimal>) -> Self {
        match kind {
            RecordKind::Income => Self {
                title: "Nuevo ingreso registrado".to_string(),
                message: format!(
                    "Has registrado un ingreso de {} en la categoría {}.",
                    format_cop(amount),
                    category
                ),
                category_tag: ALERT_TAG_INCOME.to_string(),
            },
            RecordKind::Expense => Self {
                title: "Nuevo Gasto".to_string(),
                message: format!(
                    "Has registrado un gasto de {} en {}.",
                    format_cop(amount),
                    category
                ),
                category_tag: ALERT_TAG_EXPENSE.to_string(),
            },
            RecordKind::Savings => Self {
                title: "Nuevo ahorro".to_string(),
                message: format!(
                    "Has creado el ahorro '{}' con meta {}.",
                    name,
                    format_cop(target.unwrap_or(amount))
                ),
                category_tag: ALERT_TAG_SAVINGS.to_string(),
            },
        }
    }

    /// Alert for a top-up. The message references the added amount, never
    /// the new total.
    pub fn amount_added(kind: RecordKind, name: &str, delta: Decimal) -> Self {
        match kind {
            RecordKind::Savings => Self {
                title: "Ahorro actualizado".to_string(),
                message: format!("Agregaste {} al ahorro '{}'.", format_cop(delta), name),
                category_tag: ALERT_TAG_SAVINGS.to_string(),
            },
            RecordKind::Income => Self {
                title: "Ingreso actualizado".to_string(),
                message: format!("Agregaste {} al ingreso '{}'.", format_cop(delta), name),
                category_tag: ALERT_TAG_INCOME.to_string(),
            },
            RecordKind::Expense => Self {
                title: "Gasto actualizado".to_string(),
                message: format!("Agregaste {} al gasto '{}'.", format_cop(delta), name),
                category_tag: ALERT_TAG_EXPENSE.to_string(),
            },
        }
    }

    /// Alert for a deleted record.
    pub fn record_deleted(kind: RecordKind, name: &str) -> Self {
        Self {
            title: format!("{} eliminado", kind.display_name()),
            message: format!(
                "El {} '{}' fue eliminado correctamente.",
                kind.display_name().to_lowercase(),
                name
            ),
            category_tag: kind.alert_tag().to_string(),
        }
    }
}

/// Number of alerts still unread.
pub fn unread_count(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|a| !a.read).count()
}

/// Orders a snapshot for feed delivery: newest first, alerts without a
/// creation timestamp dropped.
pub fn ordered_feed(alerts: Vec<Alert>) -> Vec<Alert> {
    let mut with_ts: Vec<Alert> = alerts.into_iter().filter(|a| a.created_at.is_some()).collect();
    with_ts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    with_ts
}
