//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{Error, PersonName};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    BlankField,
    IdMismatch,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::BlankField => "blank_field",
            ErrorCode::IdMismatch => "id_mismatch",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn field_error(field: FieldName, message: String, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let message = format!("missing required field: {}", field.as_str());
    field_error(field, message, ErrorCode::MissingField)
}

pub(crate) fn blank_field_error(field: FieldName) -> Error {
    let message = format!("{} must contain a non-blank string value", field.as_str());
    field_error(field, message, ErrorCode::BlankField)
}

pub(crate) fn id_mismatch_error(field: FieldName) -> Error {
    field_error(
        field,
        "id in the request body must match the id in the path".to_owned(),
        ErrorCode::IdMismatch,
    )
}

/// Require a field to be present, then validate it as a [`PersonName`].
pub(crate) fn parse_person_name(
    value: Option<String>,
    field: FieldName,
) -> Result<PersonName, Error> {
    let value = value.ok_or_else(|| missing_field_error(field))?;
    PersonName::new(value).map_err(|_| blank_field_error(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::Value;

    const FIELD: FieldName = FieldName::new("firstName");

    fn detail(error: &Error, key: &str) -> Option<String> {
        error
            .details()
            .and_then(|details| details.get(key))
            .and_then(Value::as_str)
            .map(str::to_owned)
    }

    #[rstest]
    #[case(None, "missing_field")]
    #[case(Some("   ".to_owned()), "blank_field")]
    fn parse_person_name_rejects_missing_and_blank_values(
        #[case] value: Option<String>,
        #[case] expected_code: &str,
    ) {
        let error = parse_person_name(value, FIELD).expect_err("invalid name");

        assert_eq!(error.code(), crate::domain::ErrorCode::InvalidRequest);
        assert_eq!(detail(&error, "field").as_deref(), Some("firstName"));
        assert_eq!(detail(&error, "code").as_deref(), Some(expected_code));
    }

    #[rstest]
    fn parse_person_name_accepts_valid_values() {
        let name = parse_person_name(Some("Ada".to_owned()), FIELD).expect("valid name");
        assert_eq!(name.as_ref(), "Ada");
    }

    #[rstest]
    fn id_mismatch_error_carries_field_context() {
        let error = id_mismatch_error(FieldName::new("id"));
        assert_eq!(detail(&error, "field").as_deref(), Some("id"));
        assert_eq!(detail(&error, "code").as_deref(), Some("id_mismatch"));
    }
}
