use crate::error::ModelError;
use regex::Regex;
use std::sync::LazyLock;

static NUMBERED_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(\d+)\.\s+([^\n]+)").unwrap());
static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]*)""#).unwrap());
static DASH_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^-\s+").unwrap());

/// Rewrites a raw model answer into the markup the client renders
///
/// Rules run in a fixed order, each on the output of the previous one:
/// numbered lines become `<h3>` headings, blank lines become `<br><br>`,
/// quoted spans are bolded with their quotes, and leading dashes become
/// bullets.
pub fn post_process(raw: &str) -> Result<String, ModelError> {
    let answer = raw.trim();
    if answer.is_empty() {
        return Err(ModelError::EmptyResponse);
    }

    let answer = NUMBERED_HEADING.replace_all(answer, "<h3>${1}. ${2}</h3>");
    let answer = answer.replace("\n\n", "<br><br>");
    let answer = QUOTED.replace_all(&answer, "<b>\"${1}\"</b>");
    let answer = DASH_BULLET.replace_all(&answer, "• ");

    Ok(answer.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_answer() {
        let out = post_process("1. Hello\n\nWorld says \"hi\" and\n- a bullet").unwrap();
        assert_eq!(
            out,
            "<h3>1. Hello</h3><br><br>World says <b>\"hi\"</b> and\n• a bullet"
        );
    }

    #[test]
    fn test_headings_only_at_line_start() {
        let out = post_process("Step 2. not a heading\n10. Summary:").unwrap();
        assert_eq!(out, "Step 2. not a heading\n<h3>10. Summary:</h3>");
    }

    #[test]
    fn test_multiple_quotes_are_non_greedy() {
        let out = post_process("\"a\" and \"b\"").unwrap();
        assert_eq!(out, "<b>\"a\"</b> and <b>\"b\"</b>");
    }

    #[test]
    fn test_blank_line_runs() {
        let out = post_process("a\n\n\n\nb").unwrap();
        assert_eq!(out, "a<br><br><br><br>b");
    }

    #[test]
    fn test_indented_dash_is_not_a_bullet() {
        let out = post_process("x\n   - nested\n- top").unwrap();
        assert_eq!(out, "x\n   - nested\n• top");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(post_process("  \n plain \n").unwrap(), "plain");
    }

    #[test]
    fn test_empty_answer() {
        assert!(matches!(post_process(""), Err(ModelError::EmptyResponse)));
        assert!(matches!(post_process(" \n\t"), Err(ModelError::EmptyResponse)));
    }
}
