use tracing::debug;

use super::*;

pub(super) fn lookup_error(err: LookupError) -> Response {
    let status = match &err {
        LookupError::UnknownChannel(_) => StatusCode::BAD_REQUEST,
        LookupError::UnknownCentralId(_) => StatusCode::NOT_FOUND,
        LookupError::MalformedRow { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    debug!(kind = err.kind(), error = %err, "lookup failed");
    (
        status,
        Json(serde_json::json!({"error": err.to_string(), "kind": err.kind()})),
    )
        .into_response()
}
