use crate::error::AppError;
use crate::parsers::text::truncate_chars;
use crate::results::ContentMap;

/// Characters of page content sent per source
pub const MAX_SOURCE_CHARS: usize = 1500;

const SOURCE_SEPARATOR: &str = "\n\n---\n\n";

fn render(question: &str, context: &str) -> String {
    format!(
        "You are a knowledgeable and thorough research assistant. Analyze the provided content and answer the question comprehensively.

Question: {question}

Reference Content:
{context}

Please provide a detailed response following this structure:

1. Direct Answer:
   - Begin with a clear, direct answer to the question
   - Highlight key points and main findings

2. Supporting Evidence:
   - Quote relevant passages from the source material using quotation marks
   - Cite the specific source URL for each quote
   - Explain how each piece of evidence supports the answer

3. Analysis & Context:
   - Provide additional context or background information
   - Explain any important relationships or implications
   - Address any potential limitations or caveats

4. Summary:
   - Conclude with a brief summary of the key points
   - Highlight any remaining uncertainties or areas needing clarification

If the provided content doesn't contain sufficient information to answer the question:
- Clearly state what information is missing
- Explain what additional information would be needed
- Note any partial insights that can be drawn from the available content

Format your response using clear headings and bullet points for readability."
    )
}

/// Builds the research-assistant prompt for `question` over `content`
///
/// Records without a page (failures or foreign JSON) are skipped; each page
/// contributes at most [`MAX_SOURCE_CHARS`] characters of content.
pub fn build_prompt(content: &ContentMap, question: &str) -> Result<String, AppError> {
    let question = question.trim();

    if content.is_empty() {
        ::log::warn!("No content provided in request");
        return Err(AppError::validation("No content provided"));
    }
    if question.is_empty() {
        ::log::warn!("No question provided in request");
        return Err(AppError::validation("No question provided"));
    }

    let context = content
        .iter()
        .filter_map(|(url, record)| record.as_page().map(|page| (url, page)))
        .map(|(url, page)| {
            format!(
                "Source: {}\nTitle: {}\nContent:\n{}",
                url,
                page.title,
                truncate_chars(&page.content, MAX_SOURCE_CHARS)
            )
        })
        .collect::<Vec<_>>()
        .join(SOURCE_SEPARATOR);

    Ok(render(question, &context))
}
