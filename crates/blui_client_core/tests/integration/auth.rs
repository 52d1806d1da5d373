use crate::common::fixtures;
use crate::common::stub_backend::{Rule, StubBackend};
use axum::http::Method;
use blui_client_core::ProfileUpdate;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn login_starts_a_session_used_by_later_calls() {
    let stub = StubBackend::start(vec![
        Rule::post("/api/auth/login").json(fixtures::auth("jwt-123")),
        Rule::get("/api/categories")
            .requires_bearer("jwt-123")
            .json(json!({ "categories": [] })),
    ])
    .await;
    let client = stub.client();

    let user = client.login("siti@example.com", "rahasia").await.expect("login");
    assert_eq!(user.full_name, "Siti Rahma");
    assert!(client.is_logged_in());
    assert_eq!(client.session().user_id().map(String::from).as_deref(), Some("user-1"));

    let categories = client.categories().await.expect("categories");
    assert!(categories.is_empty());

    let requests = stub.requests();
    assert_eq!(
        requests[0].json_body(),
        json!({ "email": "siti@example.com", "password": "rahasia" })
    );
    assert_eq!(requests[0].authorization, None);
    assert_eq!(requests[1].authorization.as_deref(), Some("Bearer jwt-123"));
}

#[tokio::test]
async fn register_sends_camel_case_body() {
    let stub = StubBackend::start(vec![
        Rule::post("/api/auth/register").json(fixtures::auth("jwt-new")),
    ])
    .await;
    let client = stub.client();

    client
        .register("Siti Rahma", "siti@example.com", "rahasia", "1999-04-12")
        .await
        .expect("register");

    assert_eq!(client.session().token().as_deref(), Some("jwt-new"));
    assert_eq!(
        stub.requests()[0].json_body(),
        json!({
            "fullName": "Siti Rahma",
            "email": "siti@example.com",
            "password": "rahasia",
            "dateOfBirth": "1999-04-12"
        })
    );
}

#[tokio::test]
async fn rejected_credentials_leave_the_session_empty() {
    let stub = StubBackend::start(vec![
        Rule::post("/api/auth/login").raw(401, r#"{"error":"invalid credentials"}"#),
    ])
    .await;
    let client = stub.client();

    let err = client.login("siti@example.com", "salah").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn profile_without_token_is_unauthorized_and_logout_drops_the_header() {
    let stub = StubBackend::start(vec![
        Rule::get("/api/user/profile")
            .requires_bearer("jwt-1")
            .json(fixtures::user()),
        Rule::new(Method::PUT, "/api/user/profile")
            .requires_bearer("jwt-1")
            .json(fixtures::user()),
    ])
    .await;
    let client = stub.client();

    assert!(client.profile().await.unwrap_err().is_unauthorized());

    client.session().set_token("jwt-1");
    let user = client.profile().await.expect("profile");
    assert_eq!(user.email, "siti@example.com");

    client
        .update_profile(ProfileUpdate {
            full_name: Some("Siti R.".to_string()),
            ..ProfileUpdate::default()
        })
        .await
        .expect("update profile");
    assert_eq!(
        stub.requests()[2].json_body(),
        json!({ "fullName": "Siti R.", "dateOfBirth": null, "photoUrl": null })
    );

    client.logout();
    assert!(client.profile().await.unwrap_err().is_unauthorized());
    assert_eq!(stub.requests()[3].authorization, None);
}
