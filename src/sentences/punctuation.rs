//! Punctuation-driven sentence splitting.
use super::splitter::SentenceSplit;

/// Rule-based splitter tuned for Japanese Wikipedia text.
///
/// A sentence ends after a fullwidth terminator (`。`, `！`, `？`), or after an
/// ASCII terminator (`.`, `!`, `?`) that is followed by whitespace or the end
/// of the text, so decimals and inline abbreviations survive. Closing quotes
/// and brackets directly after a terminator stay attached to the sentence they
/// close.
#[derive(Debug, Default, Clone, Copy)]
pub struct PunctuationSplitter;

impl SentenceSplit for PunctuationSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((idx, c)) = chars.next() {
            if !ends_sentence(c, chars.peek().map(|&(_, next)| next)) {
                continue;
            }

            let mut end = idx + c.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if is_closing(next) {
                    chars.next();
                    end = next_idx + next.len_utf8();
                } else {
                    break;
                }
            }

            sentences.push(&text[start..end]);
            start = end;
        }

        if start < text.len() {
            sentences.push(&text[start..]);
        }

        sentences
    }
}

fn ends_sentence(c: char, next: Option<char>) -> bool {
    match c {
        '。' | '！' | '？' => true,
        '.' | '!' | '?' => next.map_or(true, |n| n.is_whitespace()),
        _ => false,
    }
}

fn is_closing(c: char) -> bool {
    matches!(
        c,
        '」' | '』' | '）' | '】' | '〉' | '》' | ')' | ']' | '"' | '\'' | '”' | '’'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullwidth_terminators() {
        let text = "今日は晴れ。明日は雨。";
        let sentences = PunctuationSplitter.split(text);
        assert_eq!(sentences, vec!["今日は晴れ。", "明日は雨。"]);
    }

    #[test]
    fn test_ascii_terminator_needs_whitespace() {
        let text = "Pi is 3.14 exactly. Almost.";
        let sentences = PunctuationSplitter.split(text);
        assert_eq!(sentences, vec!["Pi is 3.14 exactly.", " Almost."]);
    }

    #[test]
    fn test_closing_quote_stays_attached() {
        let text = "彼は「行く。」と言った。終わり。";
        let sentences = PunctuationSplitter.split(text);
        assert_eq!(sentences, vec!["彼は「行く。」", "と言った。", "終わり。"]);
    }

    #[test]
    fn test_trailing_text_without_terminator() {
        let text = "最初の文。終端なし";
        let sentences = PunctuationSplitter.split(text);
        assert_eq!(sentences, vec!["最初の文。", "終端なし"]);
    }

    #[test]
    fn test_concatenation_restores_input() {
        let text = "一文目。二文目！ Mixed english text? 最後";
        let sentences = PunctuationSplitter.split(text);
        assert_eq!(sentences.concat(), text);
    }

    #[test]
    fn test_empty_input() {
        assert!(PunctuationSplitter.split("").is_empty());
    }
}
