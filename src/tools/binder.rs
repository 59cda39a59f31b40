use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ToolError;

/// Accepts the raw `arguments` of a tool call.
/// Absent arguments arrive as `null` and count as an empty mapping.
pub fn arguments_object(arguments: Value) -> Result<Map<String, Value>, ToolError> {
    match arguments {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => Err(ToolError::InvalidArguments),
    }
}

/// Decodes an argument mapping into the request schema `T`.
///
/// Keys `T` doesn't know are dropped and absent optional fields stay unset.
/// A value of the wrong JSON type is rejected (no string-to-bool coercion),
/// and the error names the offending field.
pub fn bind<T: DeserializeOwned>(arguments: Map<String, Value>) -> Result<T, ToolError> {
    let request = serde_path_to_error::deserialize(Value::Object(arguments))?;
    Ok(request)
}
