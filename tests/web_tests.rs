use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use hallpass::web::{self, state::AppState};
use http_body_util::BodyExt;
use tower::ServiceExt;

mod common;
use common::{add, test_pool};

/// Router over a fresh in-memory database, plus the ids of two seeded
/// students.
fn test_app() -> (Router, i64, i64) {
    let pool = test_pool();
    let alice = add(&pool, "Alice");
    let bob = add(&pool, "Bob");
    (web::router(AppState::new(pool)), alice, bob)
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("send request")
}

async fn post_form(app: &Router, uri: &str, form: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .expect("build request"),
        )
        .await
        .expect("send request")
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

fn location(resp: &axum::response::Response) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .expect("ascii Location")
}

#[tokio::test]
async fn kiosk_page_lists_students_and_occupancy() {
    let (app, _, _) = test_app();

    let resp = get(&app, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Alice"));
    assert!(body.contains("Bob"));
    assert!(body.contains("0 of 2 out"));
}

#[tokio::test]
async fn sign_out_redirects_to_the_kiosk() {
    let (app, alice, _) = test_app();

    let resp = get(&app, &format!("/sign_out/{alice}")).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");

    let body = body_text(get(&app, "/").await).await;
    assert!(body.contains("1 of 2 out"));
    assert!(body.contains(&format!("/sign_in/{alice}")));
}

#[tokio::test]
async fn sign_out_of_unknown_student_is_404() {
    let (app, _, _) = test_app();

    let resp = get(&app, "/sign_out/999").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn full_room_sign_out_still_redirects() {
    let (app, alice, bob) = test_app();

    get(&app, &format!("/sign_out/{alice}")).await;
    get(&app, &format!("/sign_out/{bob}")).await;

    // full room plus an unknown id: capacity is checked first, so no 404
    let resp = get(&app, "/sign_out/999").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let body = body_text(get(&app, "/").await).await;
    assert!(body.contains("Room full"));
}

#[tokio::test]
async fn sign_in_closes_the_absence() {
    let (app, alice, _) = test_app();

    get(&app, &format!("/sign_out/{alice}")).await;
    let resp = get(&app, &format!("/sign_in/{alice}")).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");

    let body = body_text(get(&app, "/").await).await;
    assert!(body.contains("0 of 2 out"));
}

#[tokio::test]
async fn admin_can_add_a_student() {
    let (app, _, _) = test_app();

    let resp = post_form(&app, "/admin/add_student", "name=Carol").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin");

    let body = body_text(get(&app, "/admin").await).await;
    assert!(body.contains("Carol"));
}

#[tokio::test]
async fn admin_add_escapes_html_in_names() {
    let (app, _, _) = test_app();

    post_form(&app, "/admin/add_student", "name=%3Cb%3EEve%3C%2Fb%3E").await;

    let body = body_text(get(&app, "/admin").await).await;
    assert!(body.contains("&lt;b&gt;Eve&lt;/b&gt;"));
    assert!(!body.contains("<b>Eve</b>"));
}

#[tokio::test]
async fn admin_remove_unknown_student_is_404() {
    let (app, _, _) = test_app();

    let resp = get(&app, "/admin/remove_student/999").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_can_change_capacity() {
    let (app, _, _) = test_app();

    let resp = post_form(&app, "/admin/set_max_students", "max_students=5").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let body = body_text(get(&app, "/").await).await;
    assert!(body.contains("0 of 5 out"));
}

#[tokio::test]
async fn history_page_renders_and_filters() {
    let (app, alice, bob) = test_app();

    get(&app, &format!("/sign_out/{alice}")).await;
    get(&app, &format!("/sign_in/{alice}")).await;
    get(&app, &format!("/sign_out/{bob}")).await;

    let resp = get(&app, "/admin/history").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Alice"));
    assert!(body.contains("Bob"));
    assert!(body.contains("Still out"));

    let body = body_text(get(&app, "/admin/history?search=Alice").await).await;
    assert!(body.contains("Alice"));
    assert!(!body.contains("<td>Bob</td>"));
}
