//! Records module - financial record models, services, and traits.

mod records_model;
mod records_service;
mod records_traits;


pub use records_model::{FinancialRecord, NewRecord, RecordDraft, RecordKind};
pub use records_service::{sort_by_date_desc, RecordService};
pub use records_traits::{RecordRepositoryTrait, RecordServiceTrait};
