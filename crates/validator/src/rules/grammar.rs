//! Rule annotation grammar
//!
//! A rule annotation is a comma-separated list of tokens, each either a bare
//! `name` or `name=value`:
//!
//! ```text
//! required,minlength=2,enum=red|green|blue
//! ```
//!
//! Whitespace around commas is trimmed, empty tokens are skipped, and names
//! are not checked here. Only the first `=` splits a token, so a pattern
//! argument may itself contain `=`; it may not contain a comma.

use std::fmt;

/// One parsed rule token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    /// Rule name as written (`minlength`, `enum`, ...).
    pub name: String,
    /// Literal argument, if the token had `=`.
    pub arg: Option<String>,
}

impl Rule {
    /// Creates a rule from its parts.
    pub fn new(name: impl Into<String>, arg: Option<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            arg: arg.map(Into::into),
        }
    }

    /// The argument, or `""` for bare rules.
    #[must_use]
    pub fn arg_or_empty(&self) -> &str {
        self.arg.as_deref().unwrap_or_default()
    }

    /// Pipe-separated alternatives of an `enum` argument.
    pub fn alternatives(&self) -> impl Iterator<Item = &str> {
        self.arg_or_empty()
            .split('|')
            .map(str::trim)
            .filter(|alt| !alt.is_empty())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arg {
            Some(arg) => write!(f, "{}={arg}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Splits a rule annotation into rules, preserving declaration order.
///
/// # Examples
///
/// ```
/// use fieldmark_validator::rules::parse_rules;
///
/// let rules = parse_rules("required, minlength=2,,enum=a|b");
/// assert_eq!(rules.len(), 3);
/// assert_eq!(rules[1].name, "minlength");
/// assert_eq!(rules[1].arg.as_deref(), Some("2"));
/// ```
#[must_use]
pub fn parse_rules(annotation: &str) -> Vec<Rule> {
    annotation
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token.split_once('=') {
            Some((name, arg)) => Rule {
                name: name.trim().to_owned(),
                arg: Some(arg.trim().to_owned()),
            },
            None => Rule {
                name: token.to_owned(),
                arg: None,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_and_valued_tokens() {
        assert_eq!(
            parse_rules("required,min=10,max=20"),
            vec![
                Rule::new("required", None::<String>),
                Rule::new("min", Some("10")),
                Rule::new("max", Some("20")),
            ]
        );
    }

    #[test]
    fn empty_tokens_are_skipped() {
        let rules = parse_rules(",required,, ,minlength=3,");
        let names: Vec<_> = rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["required", "minlength"]);
        assert!(parse_rules("").is_empty());
    }

    #[test]
    fn only_first_equals_splits() {
        let rules = parse_rules("pattern=^a=b$");
        assert_eq!(rules[0].arg.as_deref(), Some("^a=b$"));
    }

    #[test]
    fn enum_alternatives_are_pipe_delimited() {
        let rule = &parse_rules("enum=red|green| blue")[0];
        let alts: Vec<_> = rule.alternatives().collect();
        assert_eq!(alts, ["red", "green", "blue"]);
    }

    #[test]
    fn unknown_names_pass_through() {
        let rules = parse_rules("bogus=1");
        assert_eq!(rules[0].name, "bogus");
    }

    #[test]
    fn display_round_trips_token() {
        assert_eq!(Rule::new("minItems", Some("1")).to_string(), "minItems=1");
        assert_eq!(Rule::new("uniqueItems", None::<String>).to_string(), "uniqueItems");
    }
}
