//! Functional restatement
//!
//! Rewrites a statement by substituting each detected term with its
//! functional form, one match at a time over the progressively rewritten
//! text.

use crate::models::DetectionMatch;
use regex::{NoExpand, RegexBuilder};

/// Replace each matched term with its functional form.
///
/// For every match, in order, the first whole-word case-insensitive
/// occurrence of the term is replaced verbatim with the functional form.
/// Detection can fire on a variant phrase whose bare term never appears in
/// the text; that substitution is a silent no-op. An empty match list
/// returns the statement unchanged.
pub fn restate(statement: &str, matches: &[DetectionMatch]) -> String {
    let mut restated = statement.to_string();

    for m in matches {
        let pattern = format!(r"\b{}\b", regex::escape(&m.term));
        let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(re) => re,
            // An escaped literal always compiles; skip the term if it somehow doesn't.
            Err(_) => continue,
        };
        restated = re
            .replace(&restated, NoExpand(m.functional_form.as_str()))
            .into_owned();
    }

    restated
}
