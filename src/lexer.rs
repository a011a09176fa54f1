//! Lightweight Python lexer.
//!
//! This is not a tokenizer in the grammar sense: it only tracks enough state
//! (strings, comments, numeric literals) to tell which lines carry a `#`
//! comment token and which names appear in code. Anything inside a string
//! literal, f-strings included, is skipped.

use std::collections::BTreeSet;

/// Python's hard keywords (`keyword.kwlist`); soft keywords are not included.
pub const KEYWORDS: [&str; 35] = [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

const STRING_PREFIXES: [&str; 8] = ["r", "b", "u", "f", "rb", "br", "fr", "rf"];

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Lexed {
    /// 1-based numbers of the lines holding a comment token.
    pub comment_lines: BTreeSet<usize>,
    /// Name tokens found in code, keywords included, in source order.
    pub names: Vec<String>,
}

impl Lexed {
    /// Names that are not keywords.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| !is_keyword(name))
    }

    /// Distinct keywords used, in lexical order.
    pub fn keywords_used(&self) -> BTreeSet<&str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| is_keyword(name))
            .collect()
    }

    pub fn count_of(&self, name: &str) -> usize {
        self.names.iter().filter(|n| *n == name).count()
    }
}

fn is_name_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_name_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Line boundaries recognised by Python's `str.splitlines`.
pub fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Width in chars of the line break at `i`, counting `\r\n` as one break.
fn line_break_at(chars: &[char], i: usize) -> Option<usize> {
    match chars.get(i) {
        Some('\r') if chars.get(i + 1) == Some(&'\n') => Some(2),
        Some(&c) if is_line_boundary(c) => Some(1),
        _ => None,
    }
}

/// Split text into lines without their terminators. A trailing break does
/// not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_string_prefix(word: &str) -> bool {
    STRING_PREFIXES
        .iter()
        .any(|prefix| prefix.eq_ignore_ascii_case(word))
}

pub fn scan(text: &str) -> Lexed {
    let chars: Vec<char> = text.chars().collect();
    let mut lexed = Lexed::default();
    let mut line = 1;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if let Some(width) = line_break_at(&chars, i) {
            line += 1;
            i += width;
        } else if c == '#' {
            lexed.comment_lines.insert(line);
            while i < chars.len() && !is_line_boundary(chars[i]) {
                i += 1;
            }
        } else if c == '"' || c == '\'' {
            i = skip_string(&chars, i, &mut line);
        } else if is_name_start(c) {
            let start = i;
            while i < chars.len() && is_name_continue(chars[i]) {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let quoted = matches!(chars.get(i), Some('"') | Some('\''));
            if quoted && is_string_prefix(&word) {
                i = skip_string(&chars, i, &mut line);
            } else {
                lexed.names.push(word);
            }
        } else if c.is_ascii_digit() {
            // Consume the whole literal so `1e5` or `0xff` never yields a name.
            while i < chars.len() && (is_name_continue(chars[i]) || chars[i] == '.') {
                i += 1;
            }
        } else {
            i += 1;
        }
    }

    lexed
}

/// Skip a string literal starting at the opening quote and return the index
/// just past it. A single-quoted literal left open stops before the line break;
/// an open triple-quoted literal runs to end of input.
fn skip_string(chars: &[char], start: usize, line: &mut usize) -> usize {
    let quote = chars[start];
    let triple = chars.get(start + 1) == Some(&quote) && chars.get(start + 2) == Some(&quote);
    let mut i = start + if triple { 3 } else { 1 };

    while i < chars.len() {
        let c = chars[i];
        if c == '\\' {
            match line_break_at(chars, i + 1) {
                Some(width) => {
                    *line += 1;
                    i += 1 + width;
                }
                None => i += 2,
            }
        } else if let Some(width) = line_break_at(chars, i) {
            if !triple {
                return i;
            }
            *line += 1;
            i += width;
        } else if c == quote {
            if !triple {
                return i + 1;
            }
            if chars.get(i + 1) == Some(&quote) && chars.get(i + 2) == Some(&quote) {
                return i + 3;
            }
            i += 1;
        } else {
            i += 1;
        }
    }

    chars.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(lexed: &Lexed) -> Vec<usize> {
        lexed.comment_lines.iter().copied().collect()
    }

    #[test]
    fn test_scan_finds_full_line_and_trailing_comments() {
        let lexed = scan("# header\nx = 1  # trailing\ny = 2\n");
        assert_eq!(lines(&lexed), vec![1, 2]);
        assert_eq!(lexed.names, vec!["x", "y"]);
    }

    #[test]
    fn test_scan_ignores_hash_inside_strings() {
        let lexed = scan("s = \"# not a comment\"\nt = '#nor this'\n");
        assert!(lexed.comment_lines.is_empty(), "got {:?}", lexed.comment_lines);
        assert_eq!(lexed.names, vec!["s", "t"]);
    }

    #[test]
    fn test_scan_skips_triple_quoted_blocks_across_lines() {
        let source = "def f():\n    \"\"\"Doc # hash\n    more words\n    \"\"\"\n    return 1  # done\n";
        let lexed = scan(source);
        assert_eq!(lines(&lexed), vec![5]);
        assert_eq!(lexed.names, vec!["def", "f", "return"]);
    }

    #[test]
    fn test_scan_treats_prefixed_literals_as_strings() {
        let lexed = scan("a = f\"{value} #x\"\nb = rb'raw'\nc = Rf\"{other}\"\n");
        assert!(lexed.comment_lines.is_empty());
        assert_eq!(lexed.names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_scan_prefix_letters_without_quote_are_names() {
        let lexed = scan("f = r + b\n");
        assert_eq!(lexed.names, vec!["f", "r", "b"]);
    }

    #[test]
    fn test_scan_numeric_literals_do_not_produce_names() {
        let lexed = scan("x = 1e5 + 0xff + 3.14j + 1_000\n");
        assert_eq!(lexed.names, vec!["x"]);
    }

    #[test]
    fn test_scan_escaped_quotes_stay_inside_string() {
        let lexed = scan("s = 'it\\'s # fine'\n# real\n");
        assert_eq!(lines(&lexed), vec![2]);
        assert_eq!(lexed.names, vec!["s"]);
    }

    #[test]
    fn test_scan_unterminated_single_quote_stops_at_line_end() {
        let lexed = scan("s = 'open\nname = 2 # c\n");
        assert_eq!(lines(&lexed), vec![2]);
        assert_eq!(lexed.names, vec!["s", "name"]);
    }

    #[test]
    fn test_scan_unterminated_triple_quote_runs_to_end() {
        let lexed = scan("x = '''open\n# inside\ny = 1\n");
        assert!(lexed.comment_lines.is_empty());
        assert_eq!(lexed.names, vec!["x"]);
    }

    #[test]
    fn test_scan_crlf_line_numbers() {
        let lexed = scan("a = 1\r\n# two\r\nb = 2 # three\r\n");
        assert_eq!(lines(&lexed), vec![2, 3]);
    }

    #[test]
    fn test_scan_backslash_crlf_continues_string() {
        let lf = scan("s = 'ab\\\ndef'\nx = 1\n");
        let crlf = scan("s = 'ab\\\r\ndef'\r\nx = 1\r\n");
        assert_eq!(lf.names, vec!["s", "x"]);
        assert_eq!(crlf, lf);
    }

    #[test]
    fn test_scan_lone_carriage_return_ends_comment() {
        let lexed = scan("import os\r# note\rdef f():\r    return os\r");
        assert_eq!(lines(&lexed), vec![2]);
        assert_eq!(lexed.names, vec!["import", "os", "def", "f", "return", "os"]);
    }

    #[test]
    fn test_scan_form_feed_is_a_line_break() {
        let lexed = scan("x = 1\x0c# after feed\n");
        assert_eq!(lines(&lexed), vec![2]);
    }

    #[test]
    fn test_split_lines_boundaries() {
        assert_eq!(split_lines(""), Vec::<&str>::new());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\x0c\nb\n"), vec!["a", "", "", "b"]);
        assert_eq!(split_lines("a\u{2028}b\u{85}c\x0bd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\r\n\r\n"), vec!["a", ""]);
    }

    #[test]
    fn test_scan_unicode_identifiers() {
        let lexed = scan("größe = 1\n_privé = größe\n");
        assert_eq!(lexed.names, vec!["größe", "_privé", "größe"]);
    }

    #[test]
    fn test_keywords_used_and_identifiers() {
        let lexed = scan("if x and not y:\n    return None\nif z:\n    pass\n");
        let used: Vec<&str> = lexed.keywords_used().into_iter().collect();
        assert_eq!(used, vec!["None", "and", "if", "not", "pass", "return"]);
        let idents: Vec<&str> = lexed.identifiers().collect();
        assert_eq!(idents, vec!["x", "y", "z"]);
        assert_eq!(lexed.count_of("if"), 2);
    }

    #[test]
    fn test_soft_keywords_are_identifiers() {
        assert!(!is_keyword("match"));
        assert!(!is_keyword("case"));
        assert!(is_keyword("nonlocal"));
        assert_eq!(KEYWORDS.len(), 35);
    }

    #[test]
    fn test_scan_empty_input() {
        assert_eq!(scan(""), Lexed::default());
    }
}
