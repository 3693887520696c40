use super::*;

#[test]
fn user_message_prefers_server_text() {
    let err = ApiError::Status { status: 400, message: Some("File too large".to_owned()) };
    assert_eq!(err.user_message("Upload failed"), "File too large");
}

#[test]
fn user_message_falls_back_without_server_text() {
    let status = ApiError::Status { status: 500, message: None };
    assert_eq!(status.user_message("Upload failed"), "Upload failed");
    assert_eq!(ApiError::Transport("offline".to_owned()).user_message("Upload failed"), "Upload failed");
}

#[test]
fn display_includes_status() {
    let err = ApiError::Status { status: 401, message: None };
    assert_eq!(err.to_string(), "request rejected: status 401");
}
