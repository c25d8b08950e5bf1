use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use compass_client::api::CompassApi;
use compass_client::config::ClientConfig;
use compass_client::error::ClientError;
use compass_client::http::HttpClient;
use compass_core::models::generation::GenerationRequest;

fn client(server: &MockServer) -> HttpClient {
    HttpClient::new(ClientConfig::new(server.uri()).with_token("session-token")).unwrap()
}

fn request() -> GenerationRequest {
    GenerationRequest {
        date: "2024-01-01".to_string(),
        free_text: "Today I felt...".to_string(),
    }
}

#[tokio::test]
async fn generate_question_posts_camel_case_body_with_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-question"))
        .and(header("authorization", "Bearer session-token"))
        .and(body_json(json!({ "date": "2024-01-01", "freeText": "Today I felt..." })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "summary": "What went well?" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).generate_question(&request()).await.unwrap();
    assert_eq!(response.summary, "What went well?");
}

#[tokio::test]
async fn delete_user_uses_explicit_token() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/user/u1"))
        .and(header("authorization", "Bearer admin-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "deleted", "deletedUserId": "u1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).delete_user("u1", "admin-token").await.unwrap();
    assert_eq!(response.deleted_user_id, "u1");
    assert_eq!(response.message, "deleted");
}

#[tokio::test]
async fn status_codes_map_to_error_kinds() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/user/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/daily-summary"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/generate-question"))
        .respond_with(
            ResponseTemplate::new(502).set_body_json(json!({ "error": "generation failed" })),
        )
        .mount(&server)
        .await;

    let api = client(&server);
    assert!(matches!(
        api.delete_user("ghost", "t").await,
        Err(ClientError::NotFound)
    ));
    assert!(matches!(
        api.daily_summary(&request()).await,
        Err(ClientError::Unauthorized)
    ));
    match api.generate_question(&request()).await {
        Err(ClientError::Status { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "generation failed");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn server_field_errors_become_validation_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mentor-interest"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "validation failed",
            "fields": [{ "field": "email", "message": "Invalid email address" }]
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .submit_mentor_interest(&Default::default())
        .await
        .unwrap_err();
    let ClientError::Validation(fields) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert!(fields.has("email"));
}

#[tokio::test]
async fn mentor_questions_pass_pillar_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mentor-questions"))
        .and(query_param("pillar", "Health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "6f1c1c52-2d0f-4a8e-9d53-3a7c6b3c9a11",
            "question": "What drains you?",
            "pillar": "Health",
            "subTags": ["energy"],
            "dateAdded": "2024-01-01T00:00:00Z"
        }])))
        .mount(&server)
        .await;

    let questions = client(&server)
        .list_mentor_questions(Some("Health"))
        .await
        .unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].sub_tags, vec!["energy"]);
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    assert!(matches!(
        client(&server).list_users().await,
        Err(ClientError::Decode(_))
    ));
}
