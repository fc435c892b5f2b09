pub mod chart_service;
pub mod import_service;
pub mod record_service;
pub mod validation;

pub use chart_service::{ChartOutput, ChartService};
pub use import_service::{ImportService, ImportSummary};
pub use record_service::RecordService;
pub use validation::ValidationService;
