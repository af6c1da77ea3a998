pub mod json;
pub mod md;

use crate::error::MatchError;
use crate::types::result::QuizResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(result: &QuizResult, format: OutputFormat) -> Result<String, MatchError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(MatchError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
    }
}
