use super::*;
use axum::{http::StatusCode, routing::post, Json, Router};
use tokio::net::TcpListener;

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "A".into(),
        email: "a@b.com".into(),
        subject: "S".into(),
        message: "M".into(),
    }
}

async fn spawn_server(router: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}/contact")
}

#[tokio::test]
async fn created_status_counts_as_success() {
    let endpoint = spawn_server(Router::new().route(
        "/contact",
        post(|Json(_): Json<ContactSubmission>| async { StatusCode::CREATED }),
    ))
    .await;

    HttpContactTransport::new()
        .deliver(&endpoint, &submission())
        .await
        .expect("delivered");
}

#[tokio::test]
async fn non_success_status_carries_body() {
    let endpoint = spawn_server(Router::new().route(
        "/contact",
        post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, "email looks wrong") }),
    ))
    .await;

    let err = HttpContactTransport::new()
        .deliver(&endpoint, &submission())
        .await
        .expect_err("rejected");
    assert_eq!(err, SubmissionError::rejected(422, "email looks wrong"));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_failure() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = HttpContactTransport::new()
        .deliver(&format!("http://{addr}/contact"), &submission())
        .await
        .expect_err("refused");
    assert_eq!(err.kind(), shared::error::FailureKind::Transport);
}
