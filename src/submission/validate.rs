use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::models::NewContact;

/// Coerce an untyped request document into a [`NewContact`].
///
/// Keys other than `name`, `email` and `message` are ignored.
pub fn contact(raw: &Value) -> Result<NewContact, ValidationError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| ValidationError::MalformedBody("expected a key/value object".to_string()))?;

    let name = required_str(obj, "name")?;
    let email = required_str(obj, "email")?;
    let message = optional_str(obj, "message")?;

    NewContact::new(name, email, message.map(str::to_string))
}

fn required_str<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    optional_str(obj, field)?.ok_or(ValidationError::MissingField(field))
}

fn optional_str<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> Result<Option<&'a str>, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ValidationError::NotAString(field)),
    }
}
