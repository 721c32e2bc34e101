//! Tolerant extraction of one JSON object from free-form model output.
//!
//! Models wrap their JSON in prose, markdown fences, or trailing chatter
//! despite being told not to. The scanner walks the response and returns
//! the first balanced `{ ... }` span, tracking string literals so braces
//! inside quoted values do not confuse the count. A greedy first-to-last
//! brace slice would glue two objects together; this never does.

use serde_json::Value;

use super::types::Decision;
use super::DecisionError;

/// Locate the first balanced JSON object in `text`, or `None` when no
/// opening brace exists or the braces never balance.
pub fn extract_first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let bytes = text.as_bytes();

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse a decision out of raw model output.
///
/// Field values are read permissively: JSON null and absent fields both map
/// to `None`, and a numeric amount is accepted and stringified, since models
/// emit `"amount": 5000` about as often as `"amount": "5000"`.
pub fn parse_decision(raw: &str) -> Result<Decision, DecisionError> {
    let json = extract_first_json_object(raw).ok_or_else(|| DecisionError::NoStructuredOutput {
        raw: raw.to_string(),
    })?;

    let value: Value =
        serde_json::from_str(json).map_err(|e| DecisionError::MalformedStructuredOutput {
            reason: e.to_string(),
            raw: raw.to_string(),
        })?;

    let object = value
        .as_object()
        .ok_or_else(|| DecisionError::MalformedStructuredOutput {
            reason: "structured output is not a JSON object".to_string(),
            raw: raw.to_string(),
        })?;

    Ok(Decision {
        decision: field_as_string(object.get("decision")),
        amount: field_as_string(object.get("amount")),
        justification: field_as_string(object.get("justification")),
    })
}

fn field_as_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_surrounded_by_prose() {
        let raw = "Sure! Here is the result:\n{\"decision\": \"approved\"}\nHope that helps.";
        assert_eq!(
            extract_first_json_object(raw),
            Some("{\"decision\": \"approved\"}")
        );
    }

    #[test]
    fn braces_inside_strings_do_not_end_the_object() {
        let raw = r#"{"justification": "clause {4.2} applies", "decision": "rejected"}"#;
        assert_eq!(extract_first_json_object(raw), Some(raw));
    }

    #[test]
    fn escaped_quotes_inside_strings_are_handled() {
        let raw = r#"{"justification": "the \"waiting period\" clause"}"#;
        assert_eq!(extract_first_json_object(raw), Some(raw));
    }

    #[test]
    fn nested_objects_are_returned_whole() {
        let raw = r#"prefix {"outer": {"inner": 1}} suffix"#;
        assert_eq!(
            extract_first_json_object(raw),
            Some(r#"{"outer": {"inner": 1}}"#)
        );
    }

    #[test]
    fn first_object_wins_over_later_ones() {
        let raw = r#"{"decision": "approved"} and also {"decision": "rejected"}"#;
        assert_eq!(
            extract_first_json_object(raw),
            Some(r#"{"decision": "approved"}"#)
        );
    }

    #[test]
    fn unbalanced_braces_yield_none() {
        assert_eq!(extract_first_json_object(r#"{"decision": "approved""#), None);
        assert_eq!(extract_first_json_object("no braces at all"), None);
    }

    #[test]
    fn parses_full_decision_with_prose_wrapper() {
        let raw = "Here you go:\n{\"decision\": \"approved\", \"amount\": \"5000\", \
                   \"justification\": \"covered under section 2\"}";
        let decision = parse_decision(raw).unwrap();
        assert_eq!(decision.decision.as_deref(), Some("approved"));
        assert_eq!(decision.amount.as_deref(), Some("5000"));
        assert_eq!(decision.justification.as_deref(), Some("covered under section 2"));
    }

    #[test]
    fn numeric_amount_is_stringified() {
        let decision =
            parse_decision(r#"{"decision": "approved", "amount": 5000}"#).unwrap();
        assert_eq!(decision.amount.as_deref(), Some("5000"));
    }

    #[test]
    fn null_and_missing_fields_map_to_none() {
        let decision = parse_decision(r#"{"decision": "rejected", "amount": null}"#).unwrap();
        assert_eq!(decision.decision.as_deref(), Some("rejected"));
        assert!(decision.amount.is_none());
        assert!(decision.justification.is_none());
    }

    #[test]
    fn response_without_json_reports_no_structured_output() {
        let result = parse_decision("The claim should probably be approved.");
        match result {
            Err(DecisionError::NoStructuredOutput { raw }) => {
                assert!(raw.contains("probably be approved"));
            }
            other => panic!("Expected NoStructuredOutput, got {other:?}"),
        }
    }

    #[test]
    fn invalid_json_reports_malformed_output() {
        let result = parse_decision("{decision: approved}");
        match result {
            Err(DecisionError::MalformedStructuredOutput { raw, .. }) => {
                assert_eq!(raw, "{decision: approved}");
            }
            other => panic!("Expected MalformedStructuredOutput, got {other:?}"),
        }
    }
}
