#![allow(clippy::unwrap_used)]

use serde_json::json;

use super::app::*;
use crate::backend::StaticBackend;

// ── Props ─────────────────────────────────────────────────────

#[test]
fn test_props_set_replaces_in_place() {
    let props = Props::new().with("a", "1").with("b", "2").with("a", "3");
    let pairs: Vec<_> = props.iter().collect();
    assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
}

#[test]
fn test_props_from_query_string() {
    let props = Props::from_query_string("joinparent=institution&desc=hydro+bill&x=%2Fy&flag");
    assert_eq!(props.get("joinparent"), Some("institution"));
    assert_eq!(props.get("desc"), Some("hydro bill"));
    assert_eq!(props.get("x"), Some("/y"));
    assert_eq!(props.get("flag"), Some(""));
}

#[test]
fn test_props_skip_empty_pairs() {
    let props = Props::from_query_string("&&a=1&=orphan");
    assert_eq!(props.iter().count(), 1);
    assert_eq!(Props::from_query_string(""), Props::new());
}

#[test]
fn test_props_form_decoding() {
    let props = Props::from_query_string("desc=caf%C3%A9+bar&rate=100%&desc=tea");
    assert_eq!(props.get("desc"), Some("tea"));
    assert_eq!(props.get("rate"), Some("100%"));
    assert_eq!(props.iter().count(), 2);
}

#[test]
fn test_props_id() {
    assert_eq!(Props::new().with("id", "42").id(), Some(42));
    assert_eq!(Props::new().with("id", "x").id(), None);
    assert_eq!(Props::new().id(), None);
}

// ── Route ─────────────────────────────────────────────────────

#[test]
fn test_route_with_integer_id() {
    let route = Route::parse("/account/42", None);
    assert_eq!(route.kind, "account");
    assert_eq!(route.props, Props::new().with("id", "42"));
}

#[test]
fn test_route_id_wins_over_query() {
    let route = Route::parse("/category/7", Some("ignored=1"));
    assert_eq!(route.props, Props::new().with("id", "7"));
}

#[test]
fn test_route_with_query() {
    let route = Route::parse("/accounts", Some("joinparent=institution"));
    assert_eq!(route.kind, "accounts");
    assert_eq!(route.props, Props::new().with("joinparent", "institution"));
}

#[test]
fn test_route_id_must_be_whole_segment() {
    let route = Route::parse("/account/42abc", None);
    assert_eq!(route.kind, "account");
    assert_eq!(route.props.id(), None);
    let err = Page::build(route).unwrap_err();
    assert_eq!(err, NotFound { kind: "account".into() });
}

#[test]
fn test_route_trailing_slash() {
    let route = Route::parse("/account/42/", None);
    assert_eq!(route.kind, "account");
    assert_eq!(route.props.id(), Some(42));
}

#[test]
fn test_route_root() {
    let route = Route::parse("/", None);
    assert_eq!(route.kind, "");
    assert_eq!(route.props, Props::new());
}

#[test]
fn test_parse_target() {
    let route = Route::parse_target("/accounts?currency=CAD");
    assert_eq!(route.kind, "accounts");
    assert_eq!(route.props.get("currency"), Some("CAD"));
}

// ── PageKind / Page::build ────────────────────────────────────

#[test]
fn test_page_kind_registry() {
    for kind in PageKind::all() {
        assert_eq!(PageKind::parse(kind.as_str()), Some(*kind));
    }
    assert_eq!(PageKind::parse("institution"), None);
    assert!(PageKind::Account.needs_id());
    assert!(!PageKind::Accounts.needs_id());
}

#[test]
fn test_build_account_page() {
    let page = Page::build(Route::parse("/account/42", None)).unwrap();
    assert_eq!(page.kind(), PageKind::Account);
    assert_eq!(page.title(), "Account 42");
}

#[test]
fn test_build_accounts_page() {
    let page = Page::build(Route::parse("/accounts", Some("joinparent=institution"))).unwrap();
    assert_eq!(page.kind(), PageKind::Accounts);
}

#[test]
fn test_build_unknown_is_not_found() {
    let err = Page::build(Route::parse("/unknown/1", None)).unwrap_err();
    assert_eq!(err, NotFound { kind: "unknown".into() });
    assert_eq!(err.to_string(), "no page for /unknown");
}

#[test]
fn test_build_detail_without_id_is_not_found() {
    assert!(Page::build(Route::parse("/account/new", None)).is_err());
    assert!(Page::build(Route::parse("/category", None)).is_err());
}

// ── App ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_navigate_mounts_page() {
    let backend = StaticBackend::new()
        .respond("/json/account/42", json!({"Ident": 42, "AccName": "Savings"}))
        .respond("/json/transaction?accountid=42", json!([]));
    let mut app = App::new();
    assert!(app.page().is_none());

    app.navigate(&backend, Route::parse("/account/42", None))
        .await
        .unwrap();
    assert_eq!(app.page().map(Page::kind), Some(PageKind::Account));

    let html = app.render(Some("/css/finn.css"));
    let html = html.as_str();
    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(html.contains("<title>Savings - Finn</title>"));
    assert!(html.contains(r#"<link rel="stylesheet" href="/css/finn.css">"#));
    assert!(html.contains(r#"<div id="mainpage" class="mainpage"><div><div><h1>Savings</h1>"#));
    assert!(html.contains(r#"<a href="/accounts">Accounts</a>"#));
    assert!(html.contains("<h1>Savings</h1>"));
}

#[tokio::test]
async fn test_navigate_unknown_leaves_nothing_mounted() {
    let backend = StaticBackend::new()
        .respond("/json/category/1", json!({"Name": "Food"}))
        .respond("/json/transaction?categoryid=1", json!([]));
    let mut app = App::new();
    app.navigate(&backend, Route::parse("/category/1", None))
        .await
        .unwrap();
    assert!(app.page().is_some());

    let err = app
        .navigate(&backend, Route::parse("/unknown/1", None))
        .await
        .unwrap_err();
    assert_eq!(err.kind, "unknown");
    assert!(app.page().is_none());
    assert!(app.render(None).as_str().contains("Not found"));
}

#[tokio::test]
async fn test_navigate_accounts_list_uses_query_props() {
    let backend = StaticBackend::new().respond("/json/account?joinparent=institution", json!([]));
    let mut app = App::new();
    app.navigate(
        &backend,
        Route::parse("/accounts", Some("joinparent=institution")),
    )
    .await
    .unwrap();
    assert_eq!(
        backend.requests(),
        vec!["/json/account?joinparent=institution".to_string()]
    );
    assert!(app.render(None).as_str().contains("<h2>Accounts</h2>"));
}
