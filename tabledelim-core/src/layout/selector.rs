//! Element selectors understood by [`crate::layout::page::Page`].
//!
//! ```text
//! selector  := kind filter*
//! kind      := "char" | "text" | "line" | "rect" | "*"
//! filter    := ":contains(" quoted ")" | ":regex(" quoted ")"
//! quoted    := '"' ... '"' | "'" ... "'"      (backslash escapes the quote)
//! ```
//!
//! `contains` is a plain substring test and `regex` an unanchored search.
//! Elements without text never pass a filter.

use std::str::FromStr;

use regex::Regex;
use snafu::ResultExt;

use crate::{
    analysis::kind::ElementKind,
    error::{InvalidSelectorSnafu, PatternSnafu, TabledelimError},
};

use super::TextElement;

#[derive(Debug, Clone)]
pub struct Selector {
    /// `None` matches every kind.
    pub kind: Option<ElementKind>,
    pub contains: Vec<String>,
    pub patterns: Vec<Regex>,
}

impl Selector {
    pub fn parse(selector: &str) -> Result<Self, TabledelimError> {
        let trimmed = selector.trim();
        let (kind, mut rest) = match trimmed.find(':') {
            Some(idx) => trimmed.split_at(idx),
            None => (trimmed, ""),
        };

        let kind = match kind {
            "*" => None,
            name => Some(ElementKind::from_name(name).ok_or_else(|| {
                invalid(selector, format!("unknown element kind `{}`", name))
            })?),
        };

        let mut contains = Vec::new();
        let mut patterns = Vec::new();

        while !rest.is_empty() {
            let body = rest
                .strip_prefix(':')
                .ok_or_else(|| invalid(selector, format!("unexpected `{}`", rest)))?;
            let open = body
                .find('(')
                .ok_or_else(|| invalid(selector, "missing `(` after filter name"))?;
            let name = &body[..open];
            let (argument, remain) = parse_quoted(selector, &body[open + 1..])?;
            rest = remain
                .strip_prefix(')')
                .ok_or_else(|| invalid(selector, "missing `)` after filter argument"))?;

            match name {
                "contains" => contains.push(argument),
                "regex" => {
                    let pattern = Regex::new(&argument).context(PatternSnafu {
                        pattern: argument.as_str(),
                    })?;
                    patterns.push(pattern);
                }
                other => return Err(invalid(selector, format!("unknown filter `{}`", other))),
            }
        }

        Ok(Self {
            kind,
            contains,
            patterns,
        })
    }

    pub fn matches<E: TextElement>(&self, element: &E) -> bool {
        if self.kind.is_some_and(|kind| kind != element.kind()) {
            return false;
        }

        if self.contains.is_empty() && self.patterns.is_empty() {
            return true;
        }

        let Some(text) = element.text() else {
            return false;
        };

        self.contains.iter().all(|needle| text.contains(needle.as_str()))
            && self.patterns.iter().all(|pattern| pattern.is_match(text))
    }
}

impl FromStr for Selector {
    type Err = TabledelimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn invalid(selector: &str, message: impl Into<String>) -> TabledelimError {
    InvalidSelectorSnafu {
        selector,
        message: message.into(),
    }
    .build()
}

// Returns the unescaped argument and whatever follows its closing quote.
fn parse_quoted<'a>(selector: &str, input: &'a str) -> Result<(String, &'a str), TabledelimError> {
    let mut chars = input.char_indices();
    let quote = match chars.next() {
        Some((_, q @ ('"' | '\''))) => q,
        _ => return Err(invalid(selector, "filter argument must be quoted")),
    };

    let mut argument = String::new();
    let mut escaped = false;
    for (idx, ch) in chars {
        if escaped {
            if ch != quote && ch != '\\' {
                argument.push('\\');
            }
            argument.push(ch);
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == quote {
            return Ok((argument, &input[idx + ch.len_utf8()..]));
        } else {
            argument.push(ch);
        }
    }

    Err(invalid(selector, "unterminated quoted argument"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analysis::bbox::Bbox, layout::element::Layout};

    fn word(text: &str) -> Layout {
        Layout::new_text(Bbox::from_ltrb(0.0, 0.0, 10.0, 10.0), text)
    }

    #[test]
    fn test_parse_kind_only() {
        let selector = Selector::parse("text").unwrap();
        assert_eq!(selector.kind, Some(ElementKind::Text));
        assert!(selector.contains.is_empty());
        assert!(selector.patterns.is_empty());

        let any = Selector::parse(" * ").unwrap();
        assert_eq!(any.kind, None);
    }

    #[test]
    fn test_parse_filters() {
        let selector = Selector::parse(r#"text:contains("Total"):regex('\d+')"#).unwrap();
        assert_eq!(selector.contains, vec!["Total".to_string()]);
        assert_eq!(selector.patterns.len(), 1);
        assert_eq!(selector.patterns[0].as_str(), r"\d+");

        let escaped = Selector::parse(r#"text:contains("say \"hi\"")"#).unwrap();
        assert_eq!(escaped.contains, vec![r#"say "hi""#.to_string()]);
    }

    #[test]
    fn test_matches() {
        let selector = Selector::parse(r#"text:contains("Total")"#).unwrap();
        assert!(selector.matches(&word("Grand Total")));
        assert!(!selector.matches(&word("Subtotal")));

        let line = Layout::new_line(Bbox::from_ltrb(0.0, 0.0, 100.0, 0.5));
        assert!(!selector.matches(&line));
        assert!(Selector::parse("line").unwrap().matches(&line));
        assert!(Selector::parse("*").unwrap().matches(&line));
        assert!(!Selector::parse("*:regex('.')").unwrap().matches(&line));

        let digits = Selector::parse(r"text:regex('\d{4}')").unwrap();
        assert!(digits.matches(&word("FY 2024")));
        assert!(!digits.matches(&word("FY 24")));
    }

    #[test]
    fn test_parse_errors() {
        for bad in [
            "image",
            "text:contains(Total)",
            "text:contains(\"Total\"",
            "text:contains(\"Total",
            "text:starts(\"T\")",
            "text:contains",
            "text contains",
        ] {
            let err = Selector::parse(bad).unwrap_err();
            assert!(
                matches!(err, TabledelimError::InvalidSelector { .. }),
                "{bad} -> {err}"
            );
        }

        let err = Selector::parse("text:regex('(')").unwrap_err();
        assert!(matches!(err, TabledelimError::Pattern { .. }));
    }
}
