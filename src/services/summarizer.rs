/// Maximum number of sentences kept in a summary
const SUMMARY_SENTENCES: usize = 2;

/// Length of the raw-text fallback, in characters
const FALLBACK_CHARS: usize = 160;

/// Naive extractive summary: the first two sentences of the text
///
/// Sentences are split on periods. When nothing can be extracted the first
/// 160 characters of the input are returned instead.
pub fn summarize(text: &str) -> String {
    let flattened = text.replace('\n', " ");
    let sentences: Vec<&str> = flattened
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(SUMMARY_SENTENCES)
        .collect();

    let mut summary = sentences.join(". ");
    if summary.is_empty() {
        return text.chars().take(FALLBACK_CHARS).collect();
    }
    if !summary.ends_with('.') {
        summary.push('.');
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_two_sentences() {
        let text = "Rust is fast. It is memory safe. It has great tooling.";
        assert_eq!(summarize(text), "Rust is fast. It is memory safe.");
    }

    #[test]
    fn test_single_sentence_gets_period() {
        assert_eq!(summarize("Ownership is the core idea"), "Ownership is the core idea.");
    }

    #[test]
    fn test_newlines_flattened() {
        let text = "Borrowing\nis checked at compile time. Lifetimes name scopes.\nMore here.";
        assert_eq!(
            summarize(text),
            "Borrowing is checked at compile time. Lifetimes name scopes."
        );
    }

    #[test]
    fn test_empty_fragments_skipped() {
        assert_eq!(summarize("...First point... Second point."), "First point. Second point.");
    }

    #[test]
    fn test_fallback_to_prefix() {
        assert_eq!(summarize("...."), "....");

        let dots = ".".repeat(200);
        assert_eq!(summarize(&dots).chars().count(), 160);
    }
}
