use std::{fmt, slice};

/// One unit of a path expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Bare field name
    Key(&'a str),
    /// Raw bracket text, enclosing brackets included (`[2]`, `[.name=a]`)
    Index(&'a str),
}

impl<'a> Token<'a> {
    /// Text between the enclosing brackets of an `Index` token
    pub fn bracket_body(&self) -> Option<&'a str> {
        match self {
            Token::Index(raw) => raw.strip_prefix('[')?.strip_suffix(']'),
            Token::Key(_) => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Key(key) => f.write_str(key),
            Token::Index(raw) => f.write_str(raw),
        }
    }
}

/// A tokenized path expression
///
/// Tokens borrow from the parsed string and never from a document.
/// The `Display` rendering is canonical: tokenizing it again yields the same tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path<'a>(Vec<Token<'a>>);

impl<'a> Path<'a> {
    #[inline]
    pub(crate) fn new(tokens: Vec<Token<'a>>) -> Self {
        Self(tokens)
    }

    /// Tokenizes `path`, see [`tokenize`](crate::tokenize)
    #[inline]
    pub fn parse(path: &'a str) -> Result<Self, crate::ParseError> {
        crate::tokenize(path)
    }

    #[inline]
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Token<'a>> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for Path<'a> {
    type Item = Token<'a>;
    type IntoIter = std::vec::IntoIter<Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'p, 'a> IntoIterator for &'p Path<'a> {
    type Item = &'p Token<'a>;
    type IntoIter = slice::Iter<'p, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(&self.0, f)
    }
}

/// Renders the first tokens of a path, used for error diagnostics
pub(crate) fn prefix(tokens: &[Token], end: usize) -> String {
    struct Prefix<'t, 'a>(&'t [Token<'a>]);

    impl fmt::Display for Prefix<'_, '_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            render(self.0, f)
        }
    }

    Prefix(&tokens[..end]).to_string()
}

fn render(tokens: &[Token], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 && matches!(token, Token::Key(_)) {
            f.write_str(".")?;
        }
        write!(f, "{token}")?;
    }
    Ok(())
}
