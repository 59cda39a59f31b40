use serde_json::{Map, Value, json};

/// JSON type a parameter is advertised (and bound) as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Boolean,
    Integer,
}

impl ParamKind {
    fn schema_type(self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Boolean => "boolean",
            ParamKind::Integer => "integer",
        }
    }
}

/// Where a bound parameter travels in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
    Body,
}

/// One row of a tool's parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub location: ParamLocation,
    pub description: &'static str,
    pub required: bool,
}

impl Param {
    pub const fn new(
        name: &'static str,
        kind: ParamKind,
        location: ParamLocation,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            location,
            description,
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Builds the JSON schema advertised for a parameter table.
pub fn input_schema(params: &[Param]) -> Value {
    let mut properties = Map::new();
    for param in params {
        properties.insert(
            param.name.to_string(),
            json!({
                "type": param.kind.schema_type(),
                "description": param.description,
            }),
        );
    }

    let mut schema = Map::new();
    schema.insert("type".into(), json!("object"));
    schema.insert("properties".into(), Value::Object(properties));

    let required: Vec<&str> = params
        .iter()
        .filter(|param| param.required)
        .map(|param| param.name)
        .collect();
    if !required.is_empty() {
        schema.insert("required".into(), json!(required));
    }

    Value::Object(schema)
}

/// Textual form of a scalar argument for a path segment or query value.
/// `null` means "not given".
pub fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: &[Param] = &[
        Param::new("ticketId", ParamKind::String, ParamLocation::Path, "Ticket id").required(),
        Param::new("closed", ParamKind::Boolean, ParamLocation::Query, "Closed?"),
    ];

    #[test]
    fn schema_lists_properties_and_required() {
        let schema = input_schema(PARAMS);

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["closed"]["type"], "boolean");
        assert_eq!(schema["properties"]["ticketId"]["description"], "Ticket id");
        assert_eq!(schema["required"], json!(["ticketId"]));
    }

    #[test]
    fn schema_without_required_fields_omits_the_list() {
        let schema = input_schema(&PARAMS[1..]);
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn renders_scalars_without_quotes() {
        assert_eq!(render_value(&json!("spam")).as_deref(), Some("spam"));
        assert_eq!(render_value(&json!(false)).as_deref(), Some("false"));
        assert_eq!(render_value(&json!(10)).as_deref(), Some("10"));
        assert_eq!(render_value(&Value::Null), None);
    }
}
