use http_body_util::BodyExt;

use super::*;

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn status_mapping() {
    assert_eq!(ApiError::BadRequest(String::new()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::Unauthorized(String::new()).status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ApiError::Upstream(String::new()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ApiError::Unavailable(String::new()).status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ApiError::Internal(String::new()).status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn internal_details_are_hidden() {
    let err = ApiError::Internal("pool exhausted".to_owned());
    assert_eq!(err.public_message(), "Internal server error");
    let err = ApiError::Upstream("connection refused".to_owned());
    assert_eq!(err.public_message(), "Upstream service request failed");
}

#[test]
fn mapping_error_is_bad_request() {
    let err: ApiError = MappingError::Empty.into();
    assert!(matches!(err, ApiError::BadRequest(ref msg) if msg == "mappings must not be empty"));
}

#[test]
fn theme_error_is_bad_request() {
    let err: ApiError = ThemeError::UnknownFont("comic".to_owned()).into();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn backend_rejection_is_unauthorized() {
    let err: ApiError = BackendError::Rejected("bad password".to_owned()).into();
    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    let err: ApiError = BackendError::Transport("timeout".to_owned()).into();
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn require_trims_and_rejects_blank() {
    assert_eq!(require(Some("  expo "), "identifier").unwrap(), "expo");
    let err = require(Some("   "), "identifier").unwrap_err();
    assert_eq!(err.public_message(), "identifier is required");
    assert!(require(None, "file").is_err());
}

#[tokio::test]
async fn into_response_renders_error_envelope() {
    let response = ApiError::BadRequest("identifier is required".to_owned()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["isError"], true);
    assert_eq!(json["statusCode"], 400);
    assert_eq!(json["message"], "identifier is required");
    assert_eq!(json["result"], serde_json::Value::Null);
}

#[tokio::test]
async fn internal_response_is_500_with_generic_message() {
    let response = ApiError::Internal("secret".to_owned()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Internal server error");
}
