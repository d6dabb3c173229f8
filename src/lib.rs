#![cfg_attr(docsrs, feature(doc_cfg))]
/*!
dotpath reads and writes locations of a JSON document designated by a path expression.

A path is made of dotted keys and bracketed expressions:
* `a.b` designates the entry `b` of the object found under `a`
* `a[2]` designates the third element of the array found under `a`
* `a[.name=fish].id` designates the `id` of the first element of `a` whose `name` is `"fish"`

Leading dots are insignificant and an empty path designates the document itself.

```
use serde_json::json;

let mut document = json!({"a": [{"id": 1, "name": "x"}, {"id": 2, "name": "y"}]});
assert_eq!(&json!(2), dotpath::get(&document, "a[.name=y].id")?);

dotpath::set(&mut document, "a[0].name", json!("z"))?;
assert_eq!(&json!("z"), dotpath::get(&document, ".a[0].name")?);
# Ok::<(), dotpath::QueryError>(())
```
*/

mod error;
mod options;
mod parsing;
mod path;
mod resolver;

pub use error::*;
pub use options::*;
pub use parsing::*;
pub use path::{Path, Token};
pub use resolver::*;

#[cfg(test)]
mod tests;
