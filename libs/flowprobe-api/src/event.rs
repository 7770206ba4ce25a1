use serde_json::Value;

use crate::error::ClassifyError;
use crate::record::StreamRecord;

/// Lifecycle element kind reported by the engine's exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Start,
    End,
    Other,
}

impl ElementType {
    fn from_wire(s: &str) -> Self {
        match s {
            "START_EVENT" => ElementType::Start,
            "END_EVENT" => ElementType::End,
            _ => ElementType::Other,
        }
    }
}

/// One classified lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub element_type: ElementType,
    pub process_id: String,
}

/// Classify a raw record into a lifecycle event.
///
/// The exporter wraps each event in an envelope; the fields of interest live
/// in a nested `value` object. `null` or absent sub-fields normalize to the
/// empty string — partially populated events are classified, not rejected.
/// Unknown envelope fields are ignored.
pub fn classify(record: &StreamRecord) -> Result<LifecycleEvent, ClassifyError> {
    let envelope: Value = serde_json::from_str(&record.value)
        .map_err(|e| ClassifyError::NotAnObject(e.to_string()))?;
    let envelope = envelope
        .as_object()
        .ok_or_else(|| ClassifyError::NotAnObject(json_type_name(&envelope).to_string()))?;
    let payload = envelope
        .get("value")
        .and_then(Value::as_object)
        .ok_or(ClassifyError::MissingPayload)?;

    let element_type = payload
        .get("bpmnElementType")
        .and_then(Value::as_str)
        .map(ElementType::from_wire)
        .unwrap_or(ElementType::Other);
    let process_id = payload
        .get("bpmnProcessId")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(LifecycleEvent {
        element_type,
        process_id,
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(value: &str) -> StreamRecord {
        StreamRecord {
            offset: 0,
            key: None,
            value: value.to_string(),
        }
    }

    #[test]
    fn classifies_start_and_end_events() {
        let start = classify(&record(
            r#"{"value":{"bpmnElementType":"START_EVENT","bpmnProcessId":"zeebe-test"}}"#,
        ))
        .unwrap();
        assert_eq!(start.element_type, ElementType::Start);
        assert_eq!(start.process_id, "zeebe-test");

        let end = classify(&record(
            r#"{"value":{"bpmnElementType":"END_EVENT","bpmnProcessId":"zeebe-test"}}"#,
        ))
        .unwrap();
        assert_eq!(end.element_type, ElementType::End);
    }

    #[test]
    fn unknown_element_type_maps_to_other() {
        let event = classify(&record(
            r#"{"value":{"bpmnElementType":"SERVICE_TASK","bpmnProcessId":"zeebe-test"}}"#,
        ))
        .unwrap();
        assert_eq!(event.element_type, ElementType::Other);
    }

    #[test]
    fn null_fields_normalize_to_empty() {
        let event = classify(&record(
            r#"{"value":{"bpmnElementType":null,"bpmnProcessId":null}}"#,
        ))
        .unwrap();
        assert_eq!(event.element_type, ElementType::Other);
        assert_eq!(event.process_id, "");
    }

    #[test]
    fn absent_fields_normalize_to_empty() {
        let event = classify(&record(r#"{"value":{}}"#)).unwrap();
        assert_eq!(event.element_type, ElementType::Other);
        assert_eq!(event.process_id, "");
    }

    #[test]
    fn extra_envelope_fields_are_ignored() {
        let event = classify(&record(
            r#"{"key":7,"partition":1,"value":{"bpmnElementType":"START_EVENT","bpmnProcessId":"p","version":3}}"#,
        ))
        .unwrap();
        assert_eq!(event.element_type, ElementType::Start);
        assert_eq!(event.process_id, "p");
    }

    #[test]
    fn invalid_json_is_not_an_object() {
        let err = classify(&record("not json")).unwrap_err();
        assert!(matches!(err, ClassifyError::NotAnObject(_)));
    }

    #[test]
    fn non_object_json_is_not_an_object() {
        let err = classify(&record("[1,2,3]")).unwrap_err();
        assert!(matches!(err, ClassifyError::NotAnObject(ref t) if t == "array"));
    }

    #[test]
    fn missing_payload_is_rejected() {
        let err = classify(&record(r#"{"position":42}"#)).unwrap_err();
        assert!(matches!(err, ClassifyError::MissingPayload));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = classify(&record(r#"{"value":"START_EVENT"}"#)).unwrap_err();
        assert!(matches!(err, ClassifyError::MissingPayload));
    }

    #[test]
    fn classification_is_idempotent() {
        let rec = record(r#"{"value":{"bpmnElementType":"END_EVENT","bpmnProcessId":"zeebe-test"}}"#);
        assert_eq!(classify(&rec).unwrap(), classify(&rec).unwrap());
    }
}
