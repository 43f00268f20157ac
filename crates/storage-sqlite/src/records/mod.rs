pub mod model;
pub mod repository;

pub use model::{NewRecordDB, RecordDB};
pub use repository::RecordRepository;
