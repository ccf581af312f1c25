//! Answers-file parsing for the questionnaire commands.
//!
//! An answers file is a JSON object mapping section ids to arrays of 1-4
//! answers in question order:
//!
//! ```json
//! { "1": [1, 2, 3, 4, 1, 2, 3, 4, 1, 2], "2": [...], ... }
//! ```

use monterrey_profile::{QuestionnaireResponse, sections};
use std::collections::HashMap;
use std::path::Path;

/// Parse answers JSON into a recorded questionnaire response.
pub(crate) fn parse_answers(text: &str) -> Result<QuestionnaireResponse, Box<dyn std::error::Error>> {
    let by_section: HashMap<String, Vec<u8>> = serde_json::from_str(text)?;

    let mut response = QuestionnaireResponse::new();
    for section in sections() {
        let answers = by_section
            .get(&section.id.to_string())
            .ok_or_else(|| format!("Missing answers for section {}", section.id))?;

        if answers.len() != section.questions.len() {
            return Err(format!(
                "Section {} expects {} answers, got {}",
                section.id,
                section.questions.len(),
                answers.len()
            )
            .into());
        }

        for (question, &answer) in section.questions.iter().zip(answers) {
            response.record(section.id, question, answer)?;
        }
    }

    Ok(response)
}

/// Load and parse an answers file.
pub(crate) fn load_answers(path: &Path) -> Result<QuestionnaireResponse, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    parse_answers(&text)
}

/// A blank answers template covering every section.
pub(crate) fn template_json() -> String {
    let by_section: serde_json::Map<String, serde_json::Value> = sections()
        .iter()
        .map(|section| {
            (
                section.id.to_string(),
                serde_json::Value::from(vec![0u8; section.questions.len()]),
            )
        })
        .collect();

    serde_json::to_string_pretty(&serde_json::Value::Object(by_section))
        .expect("template serializes")
}
