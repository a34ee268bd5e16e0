pub mod format;
pub mod prompt;

pub use format::post_process;
pub use prompt::build_prompt;

use crate::error::AppError;
use crate::llm::LanguageModel;
use crate::results::ContentMap;

/// Answers `question` from previously fetched `content`
///
/// Validation happens before the model is contacted, so bad input never
/// costs a model call.
pub async fn ask_question(
    model: &dyn LanguageModel,
    content: &ContentMap,
    question: &str,
) -> Result<String, AppError> {
    ::log::info!("Processing question: '{}'", question.trim());
    ::log::info!("Content sources: {} URLs", content.len());

    let prompt = build_prompt(content, question)?;

    ::log::info!("Sending request to language model");
    let raw = model.generate(&prompt).await?;

    post_process(&raw).map_err(|e| {
        ::log::error!("No response generated from language model");
        AppError::from(e)
    })
}
