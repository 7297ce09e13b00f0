//! Free-form list/array rewrapper.
//!
//! Splits the input on a user-supplied separator, wraps each piece and the
//! whole result in optional bounds, and rejoins. This is the engine behind
//! "turn these lines into a quoted, comma-separated array" style actions.

use crate::error::{Error, Result};

/// Configuration strings for [`rewrap`]. All fields come straight from UI
/// text boxes; escape sequences and bound syntax are interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewrapOptions {
    /// Separator to split the input on. `\n` and `\t` escape sequences are
    /// expanded before use.
    pub split: String,
    /// Separator to join the transformed tokens with. Same escape rules.
    pub join: String,
    /// Optional `front.end` pair wrapped around the entire output.
    pub bound_all: String,
    /// Optional `front.end` pair wrapped around each token.
    pub bound_each: String,
    /// When set, tokens that look like integers or `null` are emitted bare.
    pub literal_mode: bool,
    /// When set, transformed tokens are sorted lexicographically before
    /// joining.
    pub sort_mode: bool,
}

/// One of the four user-editable separator/bound fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewrapField {
    Split,
    Join,
    BoundAll,
    BoundEach,
}

impl RewrapOptions {
    /// Reset a single field to its default. Explicit mapping instead of
    /// name-based field lookup.
    pub fn clear(&mut self, field: RewrapField) {
        match field {
            RewrapField::Split => self.split.clear(),
            RewrapField::Join => self.join.clear(),
            RewrapField::BoundAll => self.bound_all.clear(),
            RewrapField::BoundEach => self.bound_each.clear(),
        }
    }
}

/// Rewrap `input` according to `options`.
///
/// The only rejected input is a malformed bound spec; everything else
/// degrades gracefully (an empty input produces just the outer bounds).
pub fn rewrap(input: &str, options: &RewrapOptions) -> Result<String> {
    let (front_all, end_all) = parse_bound("Bound-All", &options.bound_all)?;
    let (front_each, end_each) = parse_bound("Bound-Each", &options.bound_each)?;
    let split = expand_escapes(&options.split);
    let join = expand_escapes(&options.join);

    let tokens: Vec<&str> = if input.is_empty() {
        Vec::new()
    } else if split.is_empty() {
        vec![input]
    } else {
        input.split(split.as_str()).collect()
    };

    let mut transformed: Vec<String> = tokens
        .into_iter()
        .map(|token| {
            if options.literal_mode && is_literal(token) {
                token.to_string()
            } else {
                format!("{front_each}{token}{end_each}")
            }
        })
        .collect();

    if options.sort_mode {
        transformed.sort();
    }

    Ok(format!("{front_all}{}{end_all}", transformed.join(&join)))
}

/// Integer-looking or `null`-looking tokens stay unwrapped in literal mode.
fn is_literal(token: &str) -> bool {
    token.trim().parse::<i64>().is_ok() || token.eq_ignore_ascii_case("null")
}

/// Users type `\n` / `\t` as two characters; expand them to the real thing.
fn expand_escapes(separator: &str) -> String {
    separator.replace("\\n", "\n").replace("\\t", "\t")
}

/// A bound spec is `front.end`; an empty spec means no bounds at all.
fn parse_bound(label: &str, bound: &str) -> Result<(String, String)> {
    if bound.is_empty() {
        return Ok((String::new(), String::new()));
    }
    let parts: Vec<&str> = bound.split('.').collect();
    if parts.len() != 2 {
        return Err(Error::configuration(format!(
            "{label} must be separated by a period(.)"
        )));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_when_split_equals_join() {
        for separator in [",", "|", "\\n", "\\t", ";"] {
            let options = RewrapOptions {
                split: separator.to_string(),
                join: separator.to_string(),
                ..Default::default()
            };
            let expanded = expand_escapes(separator);
            let input = format!("a{expanded}b");
            assert_eq!(rewrap(&input, &options).unwrap(), input);
        }
    }

    #[test]
    fn wraps_tokens_and_whole_output() {
        let options = RewrapOptions {
            split: "\\n".to_string(),
            join: ", ".to_string(),
            bound_all: "[.]".to_string(),
            bound_each: "'.'".to_string(),
            ..Default::default()
        };
        assert_eq!(rewrap("a\nb\nc", &options).unwrap(), "['a', 'b', 'c']");
    }

    #[test]
    fn literal_mode_leaves_numbers_and_null_bare() {
        let options = RewrapOptions {
            split: ",".to_string(),
            join: ",".to_string(),
            bound_each: "'.'".to_string(),
            literal_mode: true,
            ..Default::default()
        };
        assert_eq!(
            rewrap("1,two,NULL,-3", &options).unwrap(),
            "1,'two',NULL,-3"
        );
    }

    #[test]
    fn sort_mode_orders_transformed_tokens() {
        let options = RewrapOptions {
            split: ",".to_string(),
            join: ",".to_string(),
            sort_mode: true,
            ..Default::default()
        };
        assert_eq!(rewrap("c,a,b", &options).unwrap(), "a,b,c");
    }

    #[test]
    fn malformed_bound_is_a_configuration_error() {
        let options = RewrapOptions {
            bound_all: "[".to_string(),
            ..Default::default()
        };
        let err = rewrap("a", &options).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("period"));

        let options = RewrapOptions {
            bound_each: "a.b.c".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            rewrap("a", &options),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn empty_input_yields_only_outer_bounds() {
        let options = RewrapOptions {
            split: ",".to_string(),
            join: ",".to_string(),
            bound_all: "{.}".to_string(),
            bound_each: "<.>".to_string(),
            ..Default::default()
        };
        assert_eq!(rewrap("", &options).unwrap(), "{}");
    }

    #[test]
    fn empty_split_keeps_input_as_one_token() {
        let options = RewrapOptions {
            bound_each: "(.)".to_string(),
            ..Default::default()
        };
        assert_eq!(rewrap("abc", &options).unwrap(), "(abc)");
    }

    #[test]
    fn clear_resets_exactly_one_field() {
        let mut options = RewrapOptions {
            split: ",".to_string(),
            join: ";".to_string(),
            bound_all: "[.]".to_string(),
            bound_each: "'.'".to_string(),
            ..Default::default()
        };
        options.clear(RewrapField::BoundAll);
        assert!(options.bound_all.is_empty());
        assert_eq!(options.split, ",");
        assert_eq!(options.join, ";");
        assert_eq!(options.bound_each, "'.'");
    }
}
