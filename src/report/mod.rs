pub mod json;
pub mod table;

use crate::error::AnalysisError;
use crate::types::report::ResultRecord;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Table,
    Json,
}

pub fn render(results: &[ResultRecord], format: OutputFormat) -> Result<String, AnalysisError> {
    match format {
        OutputFormat::Table => Ok(table::format_results(results)),
        OutputFormat::Json => json::to_json(results).map_err(AnalysisError::Json),
    }
}
