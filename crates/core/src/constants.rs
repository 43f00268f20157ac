//! Shared constants: alert category tags, default record categories,
//! and date formats. The Spanish values are the labels the mobile app
//! has always stored, kept for data compatibility.

/// Alert spawned by an income mutation.
pub const ALERT_TAG_INCOME: &str = "ingreso";

/// Alert spawned by an expense mutation.
pub const ALERT_TAG_EXPENSE: &str = "gasto";

/// Alert spawned by a savings mutation.
pub const ALERT_TAG_SAVINGS: &str = "ahorro";

/// Default categories offered for income records.
pub const INCOME_CATEGORIES: &[&str] = &[
    "Salario",
    "Negocio",
    "Inversiones",
    "Regalo",
    "Otro",
];

/// Default categories offered for expense records.
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Comida",
    "Transporte",
    "Servicios",
    "Alquiler",
    "Entretenimiento",
    "Otro",
];

/// Fallback category when a stored record carries none.
pub const CATEGORY_UNSET: &str = "Sin Categoría";

/// Display format for record dates.
pub const RECORD_DATE_FORMAT: &str = "%d/%m/%Y";
