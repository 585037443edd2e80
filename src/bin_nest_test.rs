use axum::{routing::get, Router};
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

#[tokio::main]
async fn main() {
    let child = Router::new().route("/", get(|| async { "hi" }));
    let app = Router::new().nest("/user", child);
    let resp = app.oneshot(Request::builder().uri("/user/").body(Body::empty()).unwrap()).await.unwrap();
    println!("{:?}", resp.status());
}
