use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{
        HeaderMap, Request, StatusCode,
        header::{CONTENT_TYPE, LOCATION},
    },
};
use chrono::Utc;
use pretty_assertions::assert_eq;
use roster::{Contact, ContactStore, MemoryStore, payloads::RootData};
use server::{build_router, config::Config, state::AppState};
use tower::ServiceExt;

fn person(id: &str, first: &str, last: &str) -> Contact {
    let mut contact = Contact::new(id.to_string(), Utc::now());
    contact.first = Some(first.to_string());
    contact.last = Some(last.to_string());
    contact
}

fn fixture() -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::with_contacts([
        person("shelby", "Shelby", "Flores"),
        person("jim", "Jim", "Beam"),
    ]));
    let app = build_router(AppState::new(Config::default(), store.clone()));

    (store, app)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");

    (status, headers, String::from_utf8(body.to_vec()).expect("utf8 body"))
}

fn location(headers: &HeaderMap) -> &str {
    headers
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header")
}

#[tokio::test]
async fn root_page_filters_and_echoes_search() {
    let (_, app) = fixture();

    let (status, _, body) = send(&app, get("/?q=sh")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Shelby Flores"));
    assert!(!body.contains("Jim Beam"));
    assert!(body.contains(r#"name="q" value="sh""#));
}

#[tokio::test]
async fn root_data_keeps_absent_and_empty_q_apart() {
    let (_, app) = fixture();

    let (_, _, body) = send(&app, get("/_data/root")).await;
    let absent: RootData = serde_json::from_str(&body).expect("root json");
    assert_eq!(absent.q, None);
    assert_eq!(absent.contacts.len(), 2);

    let (_, _, body) = send(&app, get("/_data/root?q=")).await;
    let empty: RootData = serde_json::from_str(&body).expect("root json");
    assert_eq!(empty.q.as_deref(), Some(""));
    assert_eq!(empty.contacts.len(), 2);

    let (_, _, body) = send(&app, get("/_data/root?q=BEA")).await;
    let filtered: RootData = serde_json::from_str(&body).expect("root json");
    assert_eq!(filtered.q.as_deref(), Some("BEA"));
    assert_eq!(filtered.contacts.len(), 1);
    assert_eq!(filtered.contacts[0].id, "jim");
}

#[tokio::test]
async fn new_redirects_to_edit_of_an_empty_contact() {
    let (_, app) = fixture();

    let (status, headers, _) = send(&app, post_form("/", "")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let target = location(&headers).to_string();
    let id = target
        .strip_prefix("/contacts/")
        .and_then(|rest| rest.strip_suffix("/edit"))
        .expect("edit location");

    let (status, _, body) = send(&app, get(&format!("/_data/contacts/{id}"))).await;
    assert_eq!(status, StatusCode::OK);

    let contact: Contact = serde_json::from_str(&body).expect("contact json");
    assert_eq!(contact.id, id);
    assert_eq!(contact.first, None);
    assert_eq!(contact.last, None);
    assert_eq!(contact.twitter, None);
    assert_eq!(contact.avatar, None);
    assert_eq!(contact.notes, None);
    assert!(!contact.favorite);

    let (status, _, body) = send(&app, get(&target)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("contact-form"));
}

#[tokio::test]
async fn edit_submit_updates_only_submitted_fields() {
    let (store, app) = fixture();

    let (status, headers, _) = send(
        &app,
        post_form("/contacts/shelby/edit", "twitter=%40shelby&notes=hi"),
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location(&headers), "/contacts/shelby");

    send(&app, post_form("/contacts/shelby/edit", "first=Ada")).await;

    let contact = store.get("shelby").await.expect("contact");
    assert_eq!(contact.first.as_deref(), Some("Ada"));
    assert_eq!(contact.last.as_deref(), Some("Flores"));
    assert_eq!(contact.twitter.as_deref(), Some("@shelby"));
    assert_eq!(contact.notes.as_deref(), Some("hi"));

    let (_, _, body) = send(&app, get("/contacts/shelby")).await;
    assert!(body.contains("Ada Flores"));
    assert!(body.contains("@shelby"));
}

#[tokio::test]
async fn missing_contact_renders_not_found_in_place() {
    let (_, app) = fixture();

    let (status, _, body) = send(&app, get("/contacts/ghost")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("No contact found for ghost"));
    assert!(body.contains("Shelby Flores"));

    let (status, _, body) = send(&app, get("/contacts/ghost/edit")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("No contact found for ghost"));

    let (status, _, _) = send(&app, get("/_data/contacts/ghost")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = send(&app, post_form("/contacts/ghost/edit", "first=Ada")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_id_on_write_is_a_hard_failure() {
    let (_, app) = fixture();

    let (status, _, _) = send(&app, post_form("/contacts/%20/edit", "first=Ada")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn favorite_toggles_and_redirects_back() {
    let (store, app) = fixture();

    let (status, headers, _) = send(&app, post_form("/contacts/jim", "favorite=true")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location(&headers), "/contacts/jim");
    assert!(store.get("jim").await.expect("contact").favorite);

    let (_, _, body) = send(&app, get("/contacts/jim")).await;
    assert!(body.contains("Remove from favorites"));

    send(&app, post_form("/contacts/jim", "favorite=false")).await;
    assert!(!store.get("jim").await.expect("contact").favorite);

    let (status, _, _) = send(&app, post_form("/contacts/jim", "favorite=maybe")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn destroy_redirects_home_and_drops_from_sidebar() {
    let (_, app) = fixture();

    let (status, headers, _) = send(&app, post_form("/contacts/jim/destroy", "")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location(&headers), "/");

    let (_, _, body) = send(&app, get("/")).await;
    assert!(!body.contains("Jim Beam"));
    assert!(body.contains("Shelby Flores"));

    let (status, _, _) = send(&app, post_form("/contacts/jim/destroy", "")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
