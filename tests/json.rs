//! JSON grammar built from the engine's combinators.
//!
//! Exercises the whole engine at once: forward references (values nest),
//! alternation, repetition with separators, structures with discard
//! fields, and value transforms. Parsed values are re-serialized and
//! compared against the input, and cross-checked against serde_json.

use specomb::{
    convert, eof, maybe, options, resolve, separated, Cursor, Forward, Matcher, MatcherRef,
    Outcome, Spec, Value,
};

fn ws() -> Spec {
    Spec::Ready(specomb::ignore(Spec::pattern(r"[ \t\r\n]*")).unwrap())
}

fn unescape(value: Value) -> Value {
    let raw = value.as_text().expect("string pattern yields text");
    let inner = &raw[1..raw.len() - 1];
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    Value::Text(out)
}

fn to_number(value: Value) -> Value {
    let text = value.as_text().expect("number pattern yields text");
    Value::Number(text.parse().expect("number pattern is parseable"))
}

/// Matcher for a complete JSON document (value with surrounding
/// whitespace, anchored to end of input).
fn json_document() -> MatcherRef {
    let value = Forward::new();

    let string = convert(Spec::pattern(r#""(?:[^"\\]|\\.)*""#), unescape).unwrap();
    let number = convert(
        Spec::pattern(r"-?(?:0|[1-9]\d*)(?:\.\d+)?(?:[eE][+-]?\d+)?"),
        to_number,
    )
    .unwrap();
    let null = convert("null", |_| Value::Null).unwrap();
    let truth = convert("true", |_| Value::Bool(true)).unwrap();
    let falsity = convert("false", |_| Value::Bool(false)).unwrap();

    let element = Spec::List(vec![ws(), value.spec(), ws()]);
    let elements = separated(element, ",").unwrap();
    let array = convert(
        Spec::List(vec![
            "[".into(),
            Spec::Ready(maybe(Spec::Ready(elements)).unwrap()),
            ws(),
            "]".into(),
        ]),
        |v| match v {
            Value::Empty => Value::List(vec![]),
            other => other,
        },
    )
    .unwrap();

    let member = Spec::map(vec![
        ("_", ws()),
        ("key", Spec::Ready(string.clone())),
        ("_", ws()),
        ("_", ":".into()),
        ("value", Spec::List(vec![ws(), value.spec(), ws()])),
    ]);
    let members = separated(member, ",").unwrap();
    let object = convert(
        Spec::List(vec![
            "{".into(),
            Spec::Ready(maybe(Spec::Ready(members)).unwrap()),
            ws(),
            "}".into(),
        ]),
        |v| match v {
            Value::Empty => Value::Record(vec![]),
            Value::List(members) => Value::Record(
                members
                    .into_iter()
                    .map(|member| {
                        let key = member
                            .field("key")
                            .and_then(Value::as_text)
                            .expect("member has a key")
                            .to_string();
                        let value = member.field("value").expect("member has a value").clone();
                        (key, value)
                    })
                    .collect(),
            ),
            other => other,
        },
    )
    .unwrap();

    value
        .bind(Spec::Ready(
            options(vec![
                Spec::Ready(object),
                Spec::Ready(array),
                Spec::Ready(string),
                Spec::Ready(number),
                Spec::Ready(truth),
                Spec::Ready(falsity),
                Spec::Ready(null),
            ])
            .unwrap(),
        ))
        .unwrap();

    resolve(&Spec::List(vec![
        ws(),
        value.spec(),
        ws(),
        Spec::Ready(eof()),
    ]))
    .unwrap()
}

fn parse(input: &str) -> Option<Value> {
    let matcher = json_document();
    let mut cursor = Cursor::new(input);
    matcher.apply(&mut cursor).into_value()
}

/// Compact re-serialization of a parsed value.
fn render(value: &Value) -> String {
    match value {
        Value::Empty => String::new(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                n.to_string()
            }
        }
        Value::Text(text) => {
            let mut out = String::from('"');
            for ch in text.chars() {
                match ch {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    '\n' => out.push_str("\\n"),
                    '\t' => out.push_str("\\t"),
                    '\r' => out.push_str("\\r"),
                    other => out.push(other),
                }
            }
            out.push('"');
            out
        }
        Value::List(items) => {
            let rendered: Vec<String> = items.iter().map(render).collect();
            format!("[{}]", rendered.join(","))
        }
        Value::Record(fields) => {
            let rendered: Vec<String> = fields
                .iter()
                .map(|(name, value)| {
                    format!("{}:{}", render(&Value::Text(name.clone())), render(value))
                })
                .collect();
            format!("{{{}}}", rendered.join(","))
        }
    }
}

#[test]
fn round_trips_compact_input() {
    let input = r#"{"a":[1,2,null,true]}"#;
    let parsed = parse(input).expect("input parses");
    assert_eq!(
        parsed,
        Value::Record(vec![(
            "a".to_string(),
            Value::List(vec![
                Value::Number(1.0),
                Value::Number(2.0),
                Value::Null,
                Value::Bool(true),
            ])
        )])
    );
    assert_eq!(render(&parsed), input);
}

#[test]
fn agrees_with_serde_json() {
    let inputs = [
        r#"{"a":[1,2,null,true]}"#,
        r#"[{"x":-3.5},{"y":"hi"},false]"#,
        r#"{"nested":{"deep":[[],{}]}}"#,
    ];
    for input in inputs {
        let parsed = parse(input).expect("input parses");
        let ours: serde_json::Value = serde_json::from_str(&render(&parsed)).unwrap();
        let reference: serde_json::Value = serde_json::from_str(input).unwrap();
        assert_eq!(ours, reference, "mismatch for {input}");
    }
}

#[test]
fn tolerates_whitespace() {
    let input = "{ \"a\" : [ 1 , 2 ] ,\n  \"b\" : { } }";
    let parsed = parse(input).expect("input parses");
    assert_eq!(render(&parsed), r#"{"a":[1,2],"b":{}}"#);
}

#[test]
fn parses_scalars_and_empties() {
    assert_eq!(parse("null"), Some(Value::Null));
    assert_eq!(parse("true"), Some(Value::Bool(true)));
    assert_eq!(parse("-42"), Some(Value::Number(-42.0)));
    assert_eq!(parse("[]"), Some(Value::List(vec![])));
    assert_eq!(parse("{}"), Some(Value::Record(vec![])));
    assert_eq!(
        parse(r#""he said \"hi\"""#),
        Some(Value::Text("he said \"hi\"".to_string()))
    );
}

#[test]
fn object_fields_keep_declaration_order() {
    let parsed = parse(r#"{"z":1,"a":2}"#).expect("input parses");
    assert_eq!(render(&parsed), r#"{"z":1,"a":2}"#);
}

#[test]
fn rejects_malformed_input() {
    for input in ["{", "[1,", r#"{"a" 1}"#, "truex", "[1] []"] {
        let matcher = json_document();
        let mut cursor = Cursor::new(input);
        assert_eq!(
            matcher.apply(&mut cursor),
            Outcome::NoMatch,
            "should reject {input:?}"
        );
    }
}
