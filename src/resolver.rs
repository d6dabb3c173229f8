use crate::{path::prefix, tokenize, Options, QueryError, Token};
use log::{debug, trace, warn};
use serde_json::Value;

/// Resolves path expressions against JSON documents
///
/// The path string is tokenized again on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolver {
    options: Options,
}

impl Resolver {
    #[inline]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Locates the node designated by `path`
    /// # Return
    /// A reference into `root`; an empty path designates `root` itself
    pub fn get<'v>(&self, root: &'v Value, path: &str) -> Result<&'v Value, QueryError> {
        let path = tokenize(path)?;
        self.resolve(root, path.tokens())
    }

    /// Locates the node designated by `path` for in-place modification
    pub fn get_mut<'v>(
        &self,
        root: &'v mut Value,
        path: &str,
    ) -> Result<&'v mut Value, QueryError> {
        let path = tokenize(path)?;
        self.resolve_mut(root, path.tokens())
    }

    /// Writes `value` at the location designated by `path`
    ///
    /// A missing key is inserted in its parent object, but an array is never
    /// extended: an index past its end fails with [`QueryError::IndexOutOfRange`].
    /// Nothing is written unless the whole path resolves.
    ///
    /// Setting the root (empty path) is a no-op.
    pub fn set(&self, root: &mut Value, path: &str, value: Value) -> Result<(), QueryError> {
        let path = tokenize(path)?;
        let tokens = path.tokens();

        let Some((last, parents)) = tokens.split_last() else {
            warn!("ignoring set on the document root");
            return Ok(());
        };

        let i = parents.len();
        match (last, self.resolve_mut(root, parents)?) {
            (Token::Key(key), Value::Object(map)) => {
                map.insert((*key).to_owned(), value);
            }
            (Token::Index(_), Value::Array(array)) => {
                let index = self.element_index(array, tokens, i)?;
                array[index] = value;
            }
            (_, target) => return Err(type_mismatch(tokens, i, target)),
        }

        debug!("set `{path}`");
        Ok(())
    }

    fn resolve<'v>(&self, root: &'v Value, tokens: &[Token]) -> Result<&'v Value, QueryError> {
        let mut current = root;
        for (i, token) in tokens.iter().enumerate() {
            current = match (token, current) {
                (Token::Key(key), Value::Object(map)) => map
                    .get(*key)
                    .ok_or_else(|| QueryError::KeyNotFound {
                        path: prefix(tokens, i + 1),
                    })?,
                (Token::Index(_), Value::Array(array)) => {
                    let index = self.element_index(array, tokens, i)?;
                    &array[index]
                }
                (_, value) => return Err(type_mismatch(tokens, i, value)),
            };
        }
        Ok(current)
    }

    fn resolve_mut<'v>(
        &self,
        root: &'v mut Value,
        tokens: &[Token],
    ) -> Result<&'v mut Value, QueryError> {
        let mut current = root;
        for (i, token) in tokens.iter().enumerate() {
            current = match (token, current) {
                (Token::Key(key), Value::Object(map)) => {
                    map.get_mut(*key).ok_or_else(|| QueryError::KeyNotFound {
                        path: prefix(tokens, i + 1),
                    })?
                }
                (Token::Index(_), Value::Array(array)) => {
                    let index = self.element_index(array, tokens, i)?;
                    &mut array[index]
                }
                (_, value) => return Err(type_mismatch(tokens, i, value)),
            };
        }
        Ok(current)
    }

    /// Interprets the bracket token `tokens[i]` against `array`
    /// # Return
    /// An index guaranteed to be within the bounds of `array`
    fn element_index(
        &self,
        array: &[Value],
        tokens: &[Token],
        i: usize,
    ) -> Result<usize, QueryError> {
        let path = || prefix(tokens, i + 1);
        let body = tokens[i].bracket_body().unwrap_or_default();

        if body.is_empty() {
            return Err(QueryError::UnsupportedQuery { path: path() });
        }

        let index = match body.split_once('=') {
            Some((_, literal)) if literal.contains('=') => {
                return Err(QueryError::MalformedFilter { path: path() });
            }
            Some((subquery, literal)) => self
                .match_child(array, subquery.trim(), literal.trim())
                .ok_or_else(|| QueryError::NoMatchingElement { path: path() })?,
            None => body.parse::<usize>().map_err(|_| QueryError::InvalidIndex {
                path: path(),
                index: body.to_owned(),
            })?,
        };

        if index >= array.len() {
            return Err(QueryError::IndexOutOfRange {
                path: path(),
                index,
                len: array.len(),
            });
        }

        Ok(index)
    }

    /// Position of the first element whose `subquery` resolves to a value matching `literal`
    fn match_child(&self, array: &[Value], subquery: &str, literal: &str) -> Option<usize> {
        let query = match tokenize(subquery) {
            Ok(query) => query,
            Err(e) => {
                trace!("filter sub-query `{subquery}` cannot match: {e}");
                return None;
            }
        };

        let literal_match = self.options.literal_match();
        let position = array.iter().position(|element| {
            self.resolve(element, query.tokens())
                .map(|value| literal_match.matches(value, literal))
                .unwrap_or(false)
        });

        if let Some(position) = position {
            trace!("filter `{subquery}={literal}` matched element {position}");
        }
        position
    }
}

fn type_mismatch(tokens: &[Token], i: usize, found: &Value) -> QueryError {
    let expected = match tokens.get(i) {
        Some(Token::Index(_)) => "an array",
        _ => "an object",
    };
    QueryError::TypeMismatch {
        path: prefix(tokens, i + 1),
        expected,
        found: kind(found),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Locates the node designated by `path` in `root`
///
/// ```
/// let document = serde_json::json!({"a": [1, 2, 3, 4]});
/// assert_eq!(&serde_json::json!(3), dotpath::get(&document, "a[2]").unwrap());
/// ```
#[inline]
pub fn get<'v>(root: &'v Value, path: &str) -> Result<&'v Value, QueryError> {
    Resolver::default().get(root, path)
}

/// Locates the node designated by `path` in `root` for in-place modification
#[inline]
pub fn get_mut<'v>(root: &'v mut Value, path: &str) -> Result<&'v mut Value, QueryError> {
    Resolver::default().get_mut(root, path)
}

/// Writes `value` at the location designated by `path` in `root`, see [`Resolver::set`]
///
/// ```
/// let mut document = serde_json::json!([{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]);
/// dotpath::set(&mut document, "[.name=b].id", serde_json::json!(7)).unwrap();
/// assert_eq!(serde_json::json!(7), document[1]["id"]);
/// ```
#[inline]
pub fn set(root: &mut Value, path: &str, value: Value) -> Result<(), QueryError> {
    Resolver::default().set(root, path, value)
}
