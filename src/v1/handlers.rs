use serde_json::{json, Value};

use super::diagnostics::Diagnostics;
use super::envelope::Envelope;
use super::errors::HandlerError;
use super::request::{client_id, opt_str};

/// Echo handler: reports the runtime environment alongside the event.
pub fn echo(diagnostics: &Diagnostics, event: &Value) -> Envelope {
    let env = diagnostics.runtime_environment(event);
    match serde_json::to_value(env) {
        Ok(payload) => Envelope::ok(&payload),
        Err(e) => Envelope::from_error(&e),
    }
}

/// Partner handler: confirms the call and describes who made it.
pub fn partner(event: &Value) -> Envelope {
    let response = match partner_payload(event) {
        Ok(payload) => Envelope::ok(&payload),
        Err(e) => Envelope::from_error(&e),
    };
    tracing::info!(status = response.status_code, body = %response.body, "Response");
    response
}

fn partner_payload(event: &Value) -> Result<Value, HandlerError> {
    Ok(json!({
        "code": "itWorked",
        "clientId": client_id(event),
        "resource": opt_str(event, "resource")?,
        "method": opt_str(event, "httpMethod")?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_wraps_diagnostics_in_envelope() {
        let root = tempfile::tempdir().unwrap();
        let diagnostics = Diagnostics::new(root.path(), 4);
        let envelope = echo(&diagnostics, &json!({"foo": "hi"}));

        assert_eq!(envelope.status_code, 200);
        let body = envelope.body_json().unwrap();
        assert_eq!(body["event"]["foo"], "hi");
        assert_eq!(
            body["directories"],
            json!([root.path().display().to_string()])
        );
        assert!(body["searchPaths"].is_array());
        assert!(body["path"].is_string());
    }

    #[test]
    fn partner_reports_caller() {
        let event = json!({
            "resource": "/orders/{id}",
            "httpMethod": "GET",
            "pathParameters": {"id": "1"},
            "requestContext": {"authorizer": {"claims": {"sub": "client-9"}}}
        });
        let envelope = partner(&event);

        assert_eq!(envelope.status_code, 200);
        assert_eq!(
            envelope.body_json().unwrap(),
            json!({
                "code": "itWorked",
                "clientId": "client-9",
                "resource": "/orders/{id}",
                "method": "GET"
            })
        );
    }

    #[test]
    fn partner_without_authorizer_has_empty_client_id() {
        let envelope = partner(&json!({"resource": "/ping"}));
        let body = envelope.body_json().unwrap();
        assert_eq!(body["clientId"], "");
        assert_eq!(body["method"], Value::Null);
    }

    #[test]
    fn partner_rejects_malformed_fields() {
        let envelope = partner(&json!({"resource": ["/orders"], "httpMethod": "GET"}));
        assert_eq!(envelope.status_code, 400);
        assert_eq!(envelope.body, "{}");
    }
}
