use crate::{ParseError, Path, Token};
use log::trace;
use memchr::memchr2;

/// Splits a path expression into its tokens
///
/// Leading dots are insignificant. An empty (or all-dots) path yields an empty
/// [`Path`], which designates the root of the document.
///
/// Bracket groups may nest, so `a[.name[0]=fish].b` yields the three tokens
/// `a`, `[.name[0]=fish]` and `b`.
pub fn tokenize(path: &str) -> Result<Path<'_>, ParseError> {
    let mut rest = path.trim_start_matches('.');
    let mut tokens = Vec::new();

    while !rest.is_empty() {
        let Some(i) = memchr2(b'.', b'[', rest.as_bytes()) else {
            tokens.push(Token::Key(rest));
            break;
        };

        if i > 0 {
            tokens.push(Token::Key(&rest[..i]));
        }

        if rest.as_bytes()[i] == b'[' {
            let Some(close) = find_closing_bracket(&rest[i + 1..]) else {
                return Err(ParseError::UnbalancedBrackets {
                    position: path.len() - rest.len() + i,
                });
            };
            let end = i + 1 + close;
            tokens.push(Token::Index(&rest[i..=end]));
            rest = &rest[end + 1..];
        } else {
            rest = &rest[i + 1..];
        }
    }

    trace!("tokenized `{path}` into {tokens:?}");
    Ok(Path::new(tokens))
}

/// Finds the `]` closing a group whose `[` immediately precedes `text`
///
/// Nested bracket pairs are skipped over.
/// # Return
/// The byte offset of the closing bracket within `text`, or `None` if the group is never closed
pub fn find_closing_bracket(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut offset = 0;
    let mut depth = 0usize;
    loop {
        let i = offset + memchr2(b'[', b']', &bytes[offset..])?;
        match bytes[i] {
            b'[' => depth += 1,
            _ if depth == 0 => return Some(i),
            _ => depth -= 1,
        }
        offset = i + 1;
    }
}
