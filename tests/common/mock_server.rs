use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path_regex},
};

// Matches both `/chat/completions` and prefixed paths such as
// `/deepseek.com/v1/chat/completions`.
const CHAT_COMPLETIONS: &str = r"/chat/completions$";

pub async fn setup_chat_completion_mock(status: u16, body: impl Into<Value>) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(CHAT_COMPLETIONS))
        .respond_with(ResponseTemplate::new(status).set_body_json(body.into()))
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn setup_flaky_mocks(first_status: u16, answer: Value) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(CHAT_COMPLETIONS))
        .respond_with(ResponseTemplate::new(first_status).set_body_json(json!({
            "error": {"message": "try again", "type": "server_error"}
        })))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path_regex(CHAT_COMPLETIONS))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer))
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn setup_error_mock(
    status_code: u16,
    error_message: &str,
    error_type: &str,
    expected_calls: u64,
) -> MockServer {
    let mock_server = MockServer::start().await;

    let error_body = json!({
        "error": {
            "message": error_message,
            "type": error_type
        }
    });

    Mock::given(method("POST"))
        .and(path_regex(CHAT_COMPLETIONS))
        .respond_with(ResponseTemplate::new(status_code).set_body_json(error_body))
        .expect(expected_calls)
        .mount(&mock_server)
        .await;

    mock_server
}
