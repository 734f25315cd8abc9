/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::extract::State;
use axum::Json;
use entity::test_case::TestCaseKind;
use web::endpoints::test_cases::*;
use web::error::WebError;

#[test]
fn test_make_test_case_request_uses_type_field() {
    let request: MakeTestCaseRequest = serde_json::from_str(
        r#"{"module_id": 7, "name": "Declined card", "type": "requirements", "content": "..."}"#,
    )
    .unwrap();

    assert_eq!(request.kind, TestCaseKind::Requirements);

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["type"], "requirements");
    assert!(json.get("kind").is_none());
}

#[test]
fn test_generate_request_images_wire_format() {
    let request = GenerateTestCasesRequest::Images(ImagesPayload {
        image_urls: vec!["https://example.com/checkout.png".to_string()],
    });

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["type"], "images");
    assert_eq!(json["data"]["image_urls"][0], "https://example.com/checkout.png");

    assert_eq!(request.kind(), TestCaseKind::Images);
}

#[test]
fn test_generate_request_requirements_wire_format() {
    let request: GenerateTestCasesRequest = serde_json::from_str(
        r#"{"type": "requirements", "data": {"text": "The user must be able to log in."}}"#,
    )
    .unwrap();

    assert_eq!(request.kind(), TestCaseKind::Requirements);
    match request {
        GenerateTestCasesRequest::Requirements(payload) => {
            assert_eq!(payload.text, "The user must be able to log in.");
        }
        GenerateTestCasesRequest::Images(_) => panic!("parsed wrong generation kind"),
    }
}

#[test]
fn test_generate_request_rejects_unknown_kind() {
    let res = serde_json::from_str::<GenerateTestCasesRequest>(
        r#"{"type": "video", "data": {"text": "x"}}"#,
    );

    assert!(res.is_err());
}

#[test]
fn test_generate_request_validation() {
    let empty_images = GenerateTestCasesRequest::Images(ImagesPayload { image_urls: vec![] });
    assert!(empty_images.validate().is_err());

    let blank_url = GenerateTestCasesRequest::Images(ImagesPayload {
        image_urls: vec!["  ".to_string()],
    });
    assert!(blank_url.validate().is_err());

    let empty_text = GenerateTestCasesRequest::Requirements(RequirementsPayload {
        text: "\n".to_string(),
    });
    assert!(empty_text.validate().is_err());

    let valid = GenerateTestCasesRequest::Requirements(RequirementsPayload {
        text: "The user must be able to log in.".to_string(),
    });
    assert!(valid.validate().is_ok());
}

#[tokio::test]
async fn test_post_test_case_rejects_empty_name() {
    let state = common::create_mock_state();

    let res = post(
        State(state),
        Json(MakeTestCaseRequest {
            module_id: 7,
            name: "".to_string(),
            kind: TestCaseKind::Images,
            content: "".to_string(),
        }),
    )
    .await;

    assert!(matches!(res, Err(WebError::BadRequest(_))));
}
