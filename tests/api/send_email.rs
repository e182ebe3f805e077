use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Paragraph;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::json;
use wiremock::{
    matchers::{any, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::spawn_app;

fn valid_body() -> serde_json::Value {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    let idea: String = Paragraph(1..3).fake();
    json!({ "name": name, "email": email, "idea": idea })
}

#[tokio::test]
async fn send_email_returns_a_200_for_a_complete_submission() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_send_email(valid_body().to_string()).await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Email sent successfully" }));
}

#[tokio::test]
async fn send_email_delivers_the_hebrew_scenario_to_the_fixed_recipient() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let body = json!({
        "name": "דנה",
        "email": "dana@example.com",
        "idea": "אפליקציית כושר"
    });
    let response = app.post_send_email(body.to_string()).await;

    assert_eq!(response.status().as_u16(), 200);
    let sent = app.sent_emails().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, app.recipient_email);
    assert!(sent[0].subject.contains("דנה"));
    assert!(sent[0].html.contains("dana@example.com"));
    assert!(sent[0].html.contains("אפליקציית כושר"));
}

#[tokio::test]
async fn send_email_converts_newlines_only_in_the_html_body() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    let idea = "An app for runners\nwith weekly plans\nand reminders";
    let body = json!({ "name": "Dana", "email": "dana@example.com", "idea": idea });
    app.post_send_email(body.to_string()).await;

    let sent = app.sent_emails().await;
    assert!(sent[0]
        .html
        .contains("An app for runners<br>with weekly plans<br>and reminders"));
    assert!(sent[0].text.contains(idea));
}

#[tokio::test]
async fn send_email_returns_a_400_when_a_field_is_missing_or_empty() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (json!({"name": "", "email": "x@x.com", "idea": "test"}), "empty name"),
        (json!({"email": "x@x.com", "idea": "test"}), "missing name"),
        (json!({"name": "Dana", "email": "", "idea": "test"}), "empty email"),
        (json!({"name": "Dana", "idea": "test"}), "missing email"),
        (json!({"name": "Dana", "email": "x@x.com", "idea": ""}), "empty idea"),
        (json!({"name": "Dana", "email": "x@x.com", "idea": null}), "null idea"),
        (json!({}), "empty object"),
    ];
    for (body, description) in test_cases {
        let response = app.post_send_email(body.to_string()).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "The API did not fail with 400 Bad Request when the payload had {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "All fields are required" }));
    }
}

#[tokio::test]
async fn send_email_returns_a_500_for_a_body_that_is_not_json() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        ("{not json".to_string(), "truncated JSON"),
        ("name=Dana&email=x".to_string(), "form encoding"),
    ];
    for (body, description) in test_cases {
        let response = app.post_send_email(body).await;

        assert_eq!(
            response.status().as_u16(),
            500,
            "The API did not fail with 500 when the body was {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Failed to send email" }));
    }
}

#[tokio::test]
async fn send_email_returns_a_500_for_a_non_json_content_type() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = reqwest::Client::new()
        .post(&format!("{}/api/send-email", &app.address))
        .header("Content-Type", "text/plain")
        .body(r#"{"name": "Dana", "email": "x@x.com", "idea": "test"}"#)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Failed to send email" }));
}

#[tokio::test]
async fn send_email_delivers_fields_that_are_only_whitespace() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let body = json!({ "name": "   ", "email": "x@x.com", "idea": "test" });
    let response = app.post_send_email(body.to_string()).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(app.sent_emails().await.len(), 1);
}

#[tokio::test]
async fn send_email_returns_a_500_without_details_if_delivery_fails() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid server token"))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_send_email(valid_body().to_string()).await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Failed to send email" }));
}
