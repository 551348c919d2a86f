use serde_json::Value;

use super::errors::HandlerError;

pub const CLIENT_ID_PATH: &str = "requestContext.authorizer.claims.sub";
pub const PATH_PARAMETERS: &str = "pathParameters";

/// Follows a dotted path (`a.b.c`) through nested JSON objects.
pub fn lookup<'a>(request: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(request, |value, key| value.as_object()?.get(key))
}

/// String field at `path`, `None` when absent or null.
pub fn opt_str<'a>(request: &'a Value, path: &str) -> Result<Option<&'a str>, HandlerError> {
    match lookup(request, path) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(HandlerError::Parameter(path.to_string())),
    }
}

/// Values of the named path parameters, in order. A request without
/// `pathParameters` behaves as if it had none set.
pub fn path_params<'a>(request: &'a Value, names: &[&str]) -> Vec<Option<&'a str>> {
    let params = request.get(PATH_PARAMETERS).and_then(Value::as_object);
    names
        .iter()
        .map(|name| params.and_then(|p| p.get(*name)).and_then(Value::as_str))
        .collect()
}

/// Subject claim of the authorizer, which carries the client id.
pub fn client_id(request: &Value) -> &str {
    lookup(request, CLIENT_ID_PATH)
        .and_then(Value::as_str)
        .unwrap_or_default()
}
