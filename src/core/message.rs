//! Message payloads accepted by the logger

use super::error::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Something to be logged: plain text or a structured value.
///
/// Objects and arrays are printed on the lines following the header,
/// pretty-printed with a four-space indent.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text(String),
    Value(Value),
}

impl Message {
    /// Capture any serializable value as a structured message
    pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Message::Value(serde_json::to_value(value)?))
    }

    /// Render the message body as it appears after the level tag
    pub fn render(&self) -> String {
        match self {
            Message::Text(text) => text.clone(),
            Message::Value(Value::String(text)) => text.clone(),
            Message::Value(value @ (Value::Object(_) | Value::Array(_))) => {
                format!("\n{}", pretty(value))
            }
            Message::Value(value) => value.to_string(),
        }
    }
}

fn pretty(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    match value.serialize(&mut ser) {
        // serde_json only emits valid UTF-8
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => value.to_string(),
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Message::Text(text.clone())
    }
}

impl From<std::fmt::Arguments<'_>> for Message {
    fn from(args: std::fmt::Arguments<'_>) -> Self {
        Message::Text(args.to_string())
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        Message::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_renders_verbatim() {
        assert_eq!(Message::from("hello").render(), "hello");
        assert_eq!(Message::from(String::from("line\nbreak")).render(), "line\nbreak");
    }

    #[test]
    fn test_object_pretty_printed_with_four_spaces() {
        let message = Message::from(json!({ "str": "string" }));
        assert_eq!(message.render(), "\n{\n    \"str\": \"string\"\n}");
    }

    #[test]
    fn test_nested_object() {
        let message = Message::from(json!({ "outer": { "num": 100 } }));
        assert_eq!(
            message.render(),
            "\n{\n    \"outer\": {\n        \"num\": 100\n    }\n}"
        );
    }

    #[test]
    fn test_array_pretty_printed() {
        let message = Message::from(json!([1, 2]));
        assert_eq!(message.render(), "\n[\n    1,\n    2\n]");
    }

    #[test]
    fn test_scalars_render_plain() {
        assert_eq!(Message::from(json!("quoted")).render(), "quoted");
        assert_eq!(Message::from(json!(42)).render(), "42");
        assert_eq!(Message::from(json!(false)).render(), "false");
        assert_eq!(Message::from(json!(null)).render(), "null");
    }

    #[test]
    fn test_serialize_struct() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let message = Message::serialize(&Point { x: 1, y: -2 }).unwrap();
        assert_eq!(message.render(), "\n{\n    \"x\": 1,\n    \"y\": -2\n}");
    }

    #[test]
    fn test_object_keeps_insertion_order() {
        let message = Message::from(json!({
            "str": "string",
            "num": 100,
            "bool": false,
            "obj": {}
        }));
        assert_eq!(
            message.render(),
            "\n{\n    \"str\": \"string\",\n    \"num\": 100,\n    \"bool\": false,\n    \"obj\": {}\n}"
        );
    }

    #[test]
    fn test_struct_keeps_field_order() {
        #[derive(Serialize)]
        struct Request {
            zone: u32,
            id: u32,
        }

        let message = Message::serialize(&Request { zone: 1, id: 2 }).unwrap();
        assert_eq!(message.render(), "\n{\n    \"zone\": 1,\n    \"id\": 2\n}");
    }
}
