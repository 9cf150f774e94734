use std::fmt;

use serde::{Deserialize, Serialize};

pub const SEPARATOR: char = ';';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type", content = "content")]
pub enum TitleToken {
    Value(String),
    Separator, // ;
}

impl TitleToken {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Value(value) => value,
            Self::Separator => ";",
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }
}

impl fmt::Display for TitleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Bare,
    InSingleQuote,
    InDoubleQuote,
}

// JS の \s に合わせる (U+0085 は含まず U+FEFF は含む)
fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{feff}'
}

// 字句解析
//
// - 引用符は token に含めない
// - \' \" は引用を閉じないが，バックスラッシュはそのまま残す
// - 連続する ; は 1 つにまとめる
pub fn tokenize_title(title: &str) -> Vec<TitleToken> {
    let mut tokens = Vec::new();

    let mut state = QuoteState::Bare;
    let mut buffer = String::new();
    let mut prev = None;

    let flush = |tokens: &mut Vec<TitleToken>, buffer: &mut String| {
        if !buffer.is_empty() {
            tokens.push(TitleToken::Value(std::mem::take(buffer)));
        }
    };

    for c in title.chars() {
        let escaped = prev == Some('\\');

        match (c, state) {
            ('\'', QuoteState::Bare) if !escaped => state = QuoteState::InSingleQuote,
            ('\'', QuoteState::InSingleQuote) if !escaped => {
                flush(&mut tokens, &mut buffer);
                state = QuoteState::Bare;
            }

            ('"', QuoteState::Bare) if !escaped => state = QuoteState::InDoubleQuote,
            ('"', QuoteState::InDoubleQuote) if !escaped => {
                flush(&mut tokens, &mut buffer);
                state = QuoteState::Bare;
            }

            (SEPARATOR, QuoteState::Bare) => {
                flush(&mut tokens, &mut buffer);
                if !matches!(tokens.last(), Some(TitleToken::Separator)) {
                    tokens.push(TitleToken::Separator);
                }
            }

            (c, QuoteState::Bare) if is_whitespace(c) => flush(&mut tokens, &mut buffer),

            (c, _) => buffer.push(c),
        }

        prev = Some(c);
    }

    flush(&mut tokens, &mut buffer);

    tokens
}
