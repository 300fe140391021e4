// src/tests/router_tests/catalog_tests.rs

use crate::db::shoes::insert_shoe;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{days_ago, make_db, test_shoe};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

fn get(path: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .unwrap();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn catalog_lists_every_shoe_with_links() {
    let db = make_db();
    insert_shoe(&db, &test_shoe("alpha")).unwrap();
    insert_shoe(&db, &test_shoe("beta")).unwrap();

    let mut resp = handle(get("/"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Test Shoe alpha"));
    assert!(body.contains("Test Shoe beta"));
    assert!(body.contains(r#"href="/shoe/alpha""#));
    assert!(body.contains(r#"href="/shoe/beta""#));
}

#[test]
fn catalog_badges_discounted_and_recent_shoes() {
    let db = make_db();

    let mut discounted = test_shoe("discounted");
    discounted.sale_price = Some(7500);
    insert_shoe(&db, &discounted).unwrap();

    let mut recent = test_shoe("recent");
    recent.release_date = days_ago(10);
    insert_shoe(&db, &recent).unwrap();

    let mut resp = handle(get("/"), &db).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains(">Sale<"));
    assert!(body.contains("Just released!"));
}

#[test]
fn shoe_page_resolves_the_card_link_target() {
    let db = make_db();
    insert_shoe(&db, &test_shoe("gamma")).unwrap();

    let mut resp = handle(get("/shoe/gamma"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Test Shoe gamma"));
    assert!(body.contains("$100.00"));
}

#[test]
fn unknown_slug_is_not_found() {
    let db = make_db();

    let err = match handle(get("/shoe/missing"), &db) {
        Err(e) => e,
        Ok(_) => panic!("expected an error for a missing slug"),
    };
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn unknown_route_is_not_found() {
    let db = make_db();

    let err = match handle(get("/checkout"), &db) {
        Err(e) => e,
        Ok(_) => panic!("expected an error for an unknown route"),
    };
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn stylesheet_is_served_with_css_content_type() {
    let db = make_db();

    let resp = handle(get("/static/main.css"), &db).unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("Content-Type")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(content_type, "text/css; charset=utf-8");
}
