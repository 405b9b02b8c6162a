pub mod availability;
pub mod calendar;
pub mod engine;
pub mod feasibility;
pub mod holidays;
pub mod pipeline;

pub use crate::domain::model::{ReportInput, ReportOutput};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
