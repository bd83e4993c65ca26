use regex::Regex;
use snafu::ResultExt;

use crate::{
    error::{PatternSnafu, TabledelimError},
    layout::{TextElement, TextRegion},
};

/// Text elements of `region` whose text matches `pattern` at its start.
///
/// The match is anchored at the beginning only: a pattern matching a prefix
/// of the text is enough. The pattern is compiled as given, so inline flags
/// and comments keep their meaning. Elements without text are skipped.
pub fn find_by_regex<R>(region: &R, pattern: &str) -> Result<Vec<R::Element>, TabledelimError>
where
    R: TextRegion,
{
    let re = Regex::new(pattern).context(PatternSnafu { pattern })?;

    Ok(region
        .find_all("text")?
        .into_iter()
        .filter(|element| {
            // leftmost-first: some match starts at 0 iff the first one does
            element
                .text()
                .and_then(|text| re.find(text))
                .is_some_and(|m| m.start() == 0)
        })
        .collect())
}
