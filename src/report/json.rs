use crate::types::result::QuizResult;

pub fn to_json(result: &QuizResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
