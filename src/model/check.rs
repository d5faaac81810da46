//! Data model for brand check results and response normalization

use serde::Deserialize;
use serde_json::Value;

/// Tri-state mention indicator
///
/// The check endpoint may report `mentioned` as a boolean, as the literal
/// string token `"Yes"`, as null, or not at all. Anything affirmative maps
/// to `Yes`, null/absent maps to `Unknown`, everything else to `No`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mentioned {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Mentioned {
    /// Display label used in both the table and the CSV export
    pub fn label(&self) -> &'static str {
        match self {
            Mentioned::Yes => "Yes",
            Mentioned::No => "No",
            Mentioned::Unknown => "N/A",
        }
    }
}

/// A single normalized check outcome
///
/// Immutable once created; the results list is append-only for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandCheckResult {
    pub prompt: String,
    pub brand: String,
    pub mentioned: Mentioned,
    /// Rank reported by the endpoint; absent renders as blank
    pub position: Option<i64>,
}

impl BrandCheckResult {
    pub fn position_label(&self) -> String {
        self.position.map(|p| p.to_string()).unwrap_or_default()
    }
}

/// Raw response body from the check endpoint
///
/// Every field is optional so that unexpected shapes degrade gracefully
/// instead of failing the whole check.
#[derive(Debug, Deserialize)]
pub struct CheckResponse {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub mentioned: Value,
    #[serde(default)]
    pub position: Option<i64>,
}

impl CheckResponse {
    /// Normalize the raw response into a result record
    ///
    /// `prompt` and `brand` are the values the user submitted; they are used
    /// as fallbacks when the endpoint does not echo them back.
    pub fn into_result(self, prompt: &str, brand: &str) -> BrandCheckResult {
        let mentioned = normalize_mentioned(&self.mentioned);
        BrandCheckResult {
            prompt: self.prompt.unwrap_or_else(|| prompt.to_string()),
            brand: self.brand.unwrap_or_else(|| brand.to_string()),
            mentioned,
            position: self.position,
        }
    }
}

/// Map the endpoint's `mentioned` value onto the tri-state indicator
fn normalize_mentioned(value: &Value) -> Mentioned {
    match value {
        Value::Null => Mentioned::Unknown,
        Value::Bool(true) => Mentioned::Yes,
        Value::String(s) if s == "Yes" => Mentioned::Yes,
        _ => Mentioned::No,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CheckResponse {
        serde_json::from_str(json).expect("Failed to parse response")
    }

    #[test]
    fn test_affirmative_token_is_yes() {
        let response = parse(
            r#"{"prompt":"Best laptops?","brand":"Acme","mentioned":"Yes","position":3}"#,
        );
        let result = response.into_result("Best laptops?", "Acme");

        assert_eq!(result.mentioned, Mentioned::Yes);
        assert_eq!(result.position, Some(3));
        assert_eq!(result.prompt, "Best laptops?");
        assert_eq!(result.brand, "Acme");
    }

    #[test]
    fn test_native_boolean_true_is_yes() {
        let response = parse(r#"{"mentioned":true,"position":1}"#);
        assert_eq!(response.into_result("p", "b").mentioned, Mentioned::Yes);
    }

    #[test]
    fn test_boolean_false_is_no() {
        let response = parse(r#"{"mentioned":false,"position":0}"#);
        let result = response.into_result("p", "b");
        assert_eq!(result.mentioned, Mentioned::No);
        assert_eq!(result.mentioned.label(), "No");
    }

    #[test]
    fn test_other_tokens_are_no() {
        // Non-affirmative strings and numbers are treated as falsy
        let response = parse(r#"{"mentioned":"yes"}"#);
        assert_eq!(response.into_result("p", "b").mentioned, Mentioned::No);

        let response = parse(r#"{"mentioned":"maybe"}"#);
        assert_eq!(response.into_result("p", "b").mentioned, Mentioned::No);

        let response = parse(r#"{"mentioned":1}"#);
        assert_eq!(response.into_result("p", "b").mentioned, Mentioned::No);
    }

    #[test]
    fn test_null_mentioned_is_unknown() {
        let response = parse(r#"{"mentioned":null,"position":2}"#);
        let result = response.into_result("p", "b");
        assert_eq!(result.mentioned, Mentioned::Unknown);
        assert_eq!(result.mentioned.label(), "N/A");
    }

    #[test]
    fn test_absent_mentioned_is_unknown() {
        let response = parse(r#"{"position":2}"#);
        assert_eq!(response.into_result("p", "b").mentioned, Mentioned::Unknown);
    }

    #[test]
    fn test_missing_position_renders_blank() {
        let response = parse(r#"{"mentioned":"Yes"}"#);
        let result = response.into_result("p", "b");
        assert_eq!(result.position, None);
        assert_eq!(result.position_label(), "");
    }

    #[test]
    fn test_missing_echo_falls_back_to_submitted_values() {
        let response = parse(r#"{"mentioned":true}"#);
        let result = response.into_result("Best laptops?", "Acme");
        assert_eq!(result.prompt, "Best laptops?");
        assert_eq!(result.brand, "Acme");
    }
}
