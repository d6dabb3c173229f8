use serde_json::{Number, Value};

/// How an equality filter literal is compared with the value its sub-query resolves to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LiteralMatch {
    /// Only string values can match, and only when equal to the literal
    #[default]
    Strict,
    /// String values match as in `Strict`; booleans and `null` also match
    /// the literal spelling them (`true`, `null`).
    ///
    /// An integer literal (`2`, `-7`) matches an integer number of the same
    /// value exactly. Any other numeric literal (`2.0`, `1e3`) is compared
    /// with the number as `f64`.
    Lenient,
}

impl LiteralMatch {
    pub fn matches(self, value: &Value, literal: &str) -> bool {
        match (self, value) {
            (_, Value::String(s)) => s == literal,
            (LiteralMatch::Lenient, Value::Number(n)) => number_matches(n, literal),
            (LiteralMatch::Lenient, Value::Bool(b)) => literal.parse::<bool>() == Ok(*b),
            (LiteralMatch::Lenient, Value::Null) => literal == "null",
            _ => false,
        }
    }
}

fn number_matches(n: &Number, literal: &str) -> bool {
    if let Ok(literal) = literal.parse::<i64>() {
        return n.as_i64() == Some(literal);
    }
    if let Ok(literal) = literal.parse::<u64>() {
        return n.as_u64() == Some(literal);
    }
    match (n.as_f64(), literal.parse::<f64>()) {
        (Some(n), Ok(literal)) => n == literal,
        _ => false,
    }
}

/// Resolution settings of a [`Resolver`](crate::Resolver)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    literal_match: LiteralMatch,
}

impl Options {
    #[inline]
    pub fn with_literal_match(mut self, literal_match: LiteralMatch) -> Self {
        self.literal_match = literal_match;
        self
    }

    #[inline]
    pub fn literal_match(&self) -> LiteralMatch {
        self.literal_match
    }
}
