//! Services for salary estimation, aggregation and report rendering

pub mod estimator;
pub mod report;
pub mod survey;

pub use estimator::{predict_salary, SalaryRange};
pub use report::{render_json, render_table};
pub use survey::{collect_language, run_survey};
