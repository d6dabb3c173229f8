use crate::{get, set, tests::util::parse_json, ParseError, QueryError};
use serde_json::{json, Value};

#[test]
fn new_key() -> Result<(), QueryError> {
    let mut value = parse_json(r#"{}"#);

    set(&mut value, "a", json!("hello"))?;

    assert_eq!(&json!("hello"), get(&value, "a")?);
    Ok(())
}

#[test]
fn simple_map() -> Result<(), QueryError> {
    let mut value = parse_json(r#"{"a": 1, "b": 2}"#);

    set(&mut value, "b", json!(3))?;

    assert_eq!(json!({"a": 1, "b": 3}), value);
    Ok(())
}

#[test]
fn simple_array() -> Result<(), QueryError> {
    let mut value = parse_json(r#"["a", "b", "c"]"#);

    set(&mut value, "[1]", json!("d"))?;

    assert_eq!(json!(["a", "d", "c"]), value);
    Ok(())
}

#[test]
fn map() -> Result<(), QueryError> {
    let mut value = parse_json(r#"{"foo": {"a": {"b": 1}, "c": 2}}"#);

    set(&mut value, "foo.a", json!(12))?;

    assert_eq!(json!({"foo": {"a": 12, "c": 2}}), value);
    Ok(())
}

#[test]
fn nested_array() -> Result<(), QueryError> {
    let mut value = parse_json(r#"{"a": [1, 2, 3, 4]}"#);

    set(&mut value, "a[2]", json!(5))?;

    assert_eq!(json!({"a": [1, 2, 5, 4]}), value);
    Ok(())
}

#[test]
fn store() -> Result<(), QueryError> {
    let mut value = parse_json(
        r#"
    {
      "store": {
        "book": [
          { "category": "reference",
            "author": "Nigel Rees",
            "title": "Sayings of the Century",
            "price": 8.95
          },
          { "category": "fiction",
            "author": "Herman Melville",
            "title": "Moby Dick",
            "isbn": "0-553-21311-3",
            "price": 8.99
          }
        ],
        "bicycle": {
          "color": "red",
          "price": 399
        }
      }
    }"#,
    );

    set(&mut value, "store.book[.title=Moby Dick].price", json!(9.5))?;
    set(&mut value, "store.bicycle.color", json!("blue"))?;
    set(&mut value, "store.book[0].isbn", json!("0-000-00000-0"))?;

    assert_eq!(&json!(9.5), get(&value, "store.book[1].price")?);
    assert_eq!(&json!(8.95), get(&value, "store.book[0].price")?);
    assert_eq!(&json!("blue"), get(&value, "store.bicycle.color")?);
    assert_eq!(
        &json!("0-000-00000-0"),
        get(&value, "store.book[.author=Nigel Rees].isbn")?
    );
    Ok(())
}

#[test]
fn get_after_set() -> Result<(), QueryError> {
    let cases = [
        (r#"{}"#, "a", json!("hello")),
        (r#"{"a": 1}"#, "a", json!(3)),
        (r#"{"a": [1, 2, 3, 4]}"#, "a[2]", json!(5)),
        (r#"[1, 2, 3]"#, "[1]", json!(5)),
        (r#"[1, 2, 3]"#, "[1]", json!({"x": [null]})),
        (
            r#"[{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]"#,
            "[.name=a].id",
            json!(3),
        ),
        (r#"{"a": {"b": [{"c": 1}]}}"#, ".a.b[0].d", json!(false)),
    ];

    for (text, path, new_value) in cases {
        let mut value = parse_json(text);
        set(&mut value, path, new_value.clone())?;
        assert_eq!(&new_value, get(&value, path)?, "{text} @ {path}");
    }

    Ok(())
}

#[test]
fn index_out_of_range() {
    let mut value = parse_json(r#"[1, 2]"#);

    let result = set(&mut value, "[5]", json!(5));

    assert_eq!(
        Err(QueryError::IndexOutOfRange {
            path: "[5]".to_owned(),
            index: 5,
            len: 2,
        }),
        result
    );
    assert_eq!(json!([1, 2]), value);
}

#[test]
fn missing_parent() {
    let mut value = parse_json(r#"{}"#);

    let result = set(&mut value, "a.b", json!(1));

    assert_eq!(
        Err(QueryError::KeyNotFound {
            path: "a".to_owned()
        }),
        result
    );
    assert_eq!(json!({}), value);
}

#[test]
fn type_mismatch() {
    let mut value = parse_json(r#"{"a": 1, "b": [1], "c": {}}"#);

    assert_eq!(
        Err(QueryError::TypeMismatch {
            path: "a.x".to_owned(),
            expected: "an object",
            found: "a number",
        }),
        set(&mut value, "a.x", json!(2))
    );
    assert_eq!(
        Err(QueryError::TypeMismatch {
            path: "b.x".to_owned(),
            expected: "an object",
            found: "an array",
        }),
        set(&mut value, "b.x", json!(2))
    );
    assert_eq!(
        Err(QueryError::TypeMismatch {
            path: "c[0]".to_owned(),
            expected: "an array",
            found: "an object",
        }),
        set(&mut value, "c[0]", json!(2))
    );
    assert_eq!(json!({"a": 1, "b": [1], "c": {}}), value);
}

#[test]
fn failed_filter() {
    let mut value = parse_json(r#"[{"id": 1, "name": "a"}]"#);

    assert_eq!(
        Err(QueryError::NoMatchingElement {
            path: "[.name=b]".to_owned()
        }),
        set(&mut value, "[.name=b].id", json!(2))
    );
    assert_eq!(
        Err(QueryError::MalformedFilter {
            path: "[.name=a=b]".to_owned()
        }),
        set(&mut value, "[.name=a=b]", json!(2))
    );
    assert_eq!(json!([{"id": 1, "name": "a"}]), value);
}

#[test]
fn root_is_left_untouched() -> Result<(), QueryError> {
    let mut value = parse_json(r#"{"a": 1}"#);

    set(&mut value, "", json!(12))?;
    set(&mut value, "..", Value::Null)?;

    assert_eq!(json!({"a": 1}), value);
    Ok(())
}

#[test]
fn unbalanced_brackets() {
    let mut value = parse_json(r#"{"a": [1]}"#);

    assert_eq!(
        Err(QueryError::Parse(ParseError::UnbalancedBrackets {
            position: 1
        })),
        set(&mut value, "a[0", json!(2))
    );
}
