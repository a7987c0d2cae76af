//! Request body schema for the relay endpoint
//!
//! Validation runs before any datastore or provider call; a request that
//! fails here causes no side effects at all. Fields are captured leniently
//! so a wrong-typed value surfaces as that field's violation rather than
//! a whole-body parse failure.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

/// Default sampling temperature when the caller omits one
const DEFAULT_TEMPERATURE: f64 = 0.5;

const REQUIRED_MESSAGE: &str = "Required";
const UUID_MESSAGE: &str = "must be a valid UUID";

/// Length of the hyphenated 8-4-4-4-12 UUID spelling
const HYPHENATED_UUID_LEN: usize = 36;

/// Raw `POST /ai/result` body
///
/// Unknown fields are ignored; absent, null, and wrong-typed fields all
/// surface as field-level violations rather than deserialization
/// failures.
#[derive(Debug, Deserialize, Validate)]
pub(crate) struct GenerateResultBody {
    #[serde(rename = "videoId", default, deserialize_with = "raw_field")]
    #[validate(custom(function = video_id_rule))]
    video_id: RawField<String>,

    #[serde(default, deserialize_with = "raw_field")]
    #[validate(custom(function = template_rule))]
    template: RawField<String>,

    #[serde(default, deserialize_with = "raw_field")]
    #[validate(custom(function = temperature_rule))]
    temperature: RawField<f64>,
}

/// A field as it appeared on the wire
///
/// `Null` and `Mistyped` stay distinct from `Missing` so an explicit
/// `null` or a wrong-typed value fails validation instead of silently
/// reading as absent.
#[derive(Debug, Default, Serialize)]
enum RawField<T> {
    #[default]
    Missing,
    Null,
    Mistyped,
    Value(T),
}

/// Capture one field without failing body deserialization on type errors
fn raw_field<'de, D, T>(deserializer: D) -> Result<RawField<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => RawField::Null,
        other => serde_json::from_value(other).map_or(RawField::Mistyped, RawField::Value),
    })
}

/// Validated relay parameters
#[derive(Debug)]
pub(crate) struct ResultParams {
    pub video_id: Uuid,
    pub template: String,
    pub temperature: f64,
}

/// One field-level constraint violation
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub(crate) struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl GenerateResultBody {
    /// Validate the raw body and produce typed parameters
    ///
    /// Violations are reported per field, all at once, sorted by path so
    /// the response shape is deterministic.
    pub fn into_params(self) -> Result<ResultParams, Vec<FieldError>> {
        self.validate().map_err(|errors| field_errors(&errors))?;

        // The rules above only let well-typed values through
        let video_id = match &self.video_id {
            RawField::Value(id) => {
                Uuid::try_parse(id).map_err(|_| vec![FieldError::new("videoId", UUID_MESSAGE)])?
            }
            _ => return Err(vec![FieldError::new("videoId", REQUIRED_MESSAGE)]),
        };

        let template = match self.template {
            RawField::Value(text) => text,
            _ => return Err(vec![FieldError::new("template", REQUIRED_MESSAGE)]),
        };

        let temperature = match self.temperature {
            RawField::Value(value) => value,
            _ => DEFAULT_TEMPERATURE,
        };

        Ok(ResultParams {
            video_id,
            template,
            temperature,
        })
    }
}

fn rule_violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn video_id_rule(value: &RawField<String>) -> Result<(), ValidationError> {
    match value {
        RawField::Missing => Err(rule_violation("required", REQUIRED_MESSAGE)),
        RawField::Null | RawField::Mistyped => {
            Err(rule_violation("invalid_type", "must be a string"))
        }
        RawField::Value(id) if is_canonical_uuid(id) => Ok(()),
        RawField::Value(_) => Err(rule_violation("uuid", UUID_MESSAGE)),
    }
}

fn template_rule(value: &RawField<String>) -> Result<(), ValidationError> {
    match value {
        RawField::Missing => Err(rule_violation("required", REQUIRED_MESSAGE)),
        RawField::Null | RawField::Mistyped => {
            Err(rule_violation("invalid_type", "must be a string"))
        }
        RawField::Value(text) if text.is_empty() => {
            Err(rule_violation("length", "must not be empty"))
        }
        RawField::Value(_) => Ok(()),
    }
}

fn temperature_rule(value: &RawField<f64>) -> Result<(), ValidationError> {
    match value {
        RawField::Missing => Ok(()),
        RawField::Null | RawField::Mistyped => {
            Err(rule_violation("invalid_type", "must be a number"))
        }
        RawField::Value(t) if (0.0..=1.0).contains(t) => Ok(()),
        RawField::Value(_) => Err(rule_violation("range", "must be between 0 and 1")),
    }
}

/// Hyphenated UUID syntax, case-insensitive
///
/// `Uuid::try_parse` also tolerates simple, braced, and urn spellings;
/// only the 36-character hyphenated form is valid on this API.
fn is_canonical_uuid(value: &str) -> bool {
    value.len() == HYPHENATED_UUID_LEN && Uuid::try_parse(value).is_ok()
}

/// Flatten `validator` output into ordered `{path, message}` entries
fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, violations)| {
            violations.iter().map(move |violation| {
                let message = violation
                    .message
                    .as_ref()
                    .map_or_else(|| violation.code.to_string(), ToString::to_string);
                FieldError::new(client_path(field.as_ref()), message)
            })
        })
        .collect();

    out.sort();
    out
}

/// Map struct field names back to their wire spelling
fn client_path(field: &str) -> &str {
    match field {
        "video_id" => "videoId",
        other => other,
    }
}
