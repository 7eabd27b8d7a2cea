//! Integration tests for the route table.
//!
//! Covers tree flattening, priority ordering, parameter extraction,
//! index chains, redirects, and malformed-table reporting.

use pretty_assertions::assert_eq;
use router_resolver_routes::{PathMatch, Route, RouteError, RouteTable};

fn expect_route(table: &RouteTable, path: &str) -> router_resolver_routes::RouteMatch {
    match table.match_path(path).unwrap() {
        PathMatch::Route(m) => m,
        other => panic!("expected a route match for {path}, got {other:?}"),
    }
}

fn expect_redirect(table: &RouteTable, path: &str) -> String {
    match table.match_path(path).unwrap() {
        PathMatch::Redirect { location } => location,
        other => panic!("expected a redirect for {path}, got {other:?}"),
    }
}

#[test]
fn static_route_matches_exactly() {
    let table = RouteTable::new(vec![Route::new("/about").with_component("About")]);

    let m = expect_route(&table, "/about");
    assert_eq!(m.leaf().pattern(), "/about");
    assert_eq!(m.leaf().component(), Some("About"));
    assert!(m.params().is_empty());

    assert!(matches!(table.match_path("/other").unwrap(), PathMatch::None));
}

#[test]
fn paths_are_normalized_before_matching() {
    let table = RouteTable::new(vec![Route::new("/about").with_component("About")]);

    assert!(matches!(table.match_path("about").unwrap(), PathMatch::Route(_)));
    assert!(matches!(table.match_path("/about/").unwrap(), PathMatch::Route(_)));
    assert!(matches!(table.match_path("//about").unwrap(), PathMatch::Route(_)));
}

#[test]
fn dynamic_route_extracts_params() {
    let table = RouteTable::new(vec![Route::new("/users/:id").with_component("UserPage")]);

    let m = expect_route(&table, "/users/123");
    assert_eq!(m.params().get("id"), Some(&"123".to_string()));
}

#[test]
fn static_wins_over_dynamic_regardless_of_declaration_order() {
    let table = RouteTable::new(vec![
        Route::new("/users/:id").with_component("UserPage"),
        Route::new("/users/new").with_component("NewUser"),
    ]);

    let m = expect_route(&table, "/users/new");
    assert_eq!(m.leaf().component(), Some("NewUser"));

    let m = expect_route(&table, "/users/7");
    assert_eq!(m.leaf().component(), Some("UserPage"));
}

#[test]
fn catch_all_collects_remaining_segments() {
    let table = RouteTable::new(vec![Route::new("/docs/*rest").with_component("Docs")]);

    let m = expect_route(&table, "/docs/guide/intro");
    assert_eq!(m.params().get("rest"), Some(&"guide/intro".to_string()));

    // A catch-all needs at least one segment.
    assert!(matches!(table.match_path("/docs").unwrap(), PathMatch::None));
}

#[test]
fn nested_children_join_onto_parent_and_build_the_chain() {
    let table = RouteTable::new(vec![Route::new("/dashboard")
        .with_component("Dashboard")
        .with_child(Route::new("settings").with_component("Settings"))]);

    let m = expect_route(&table, "/dashboard/settings");
    let chain: Vec<_> = m.chain().iter().map(|n| n.pattern().to_string()).collect();
    assert_eq!(chain, vec!["/dashboard", "/dashboard/settings"]);
    assert_eq!(m.leaf().component(), Some("Settings"));
}

#[test]
fn exact_match_on_parent_appends_the_index_child() {
    let table = RouteTable::new(vec![Route::new("/test")
        .with_component("Page")
        .with_index(Route::index("Home"))]);

    let m = expect_route(&table, "/test");
    let components: Vec<_> = m.chain().iter().map(|n| n.component()).collect();
    assert_eq!(components, vec![Some("Page"), Some("Home")]);
}

#[test]
fn redirect_routes_resolve_to_their_target() {
    let table = RouteTable::new(vec![Route::redirect("source", "target")]);

    assert_eq!(expect_redirect(&table, "source"), "target");
    assert_eq!(expect_redirect(&table, "/source"), "target");
}

#[test]
fn redirect_targets_substitute_params() {
    let table = RouteTable::new(vec![Route::redirect("/blog/:slug", "/articles/:slug")]);

    assert_eq!(expect_redirect(&table, "/blog/hello-world"), "/articles/hello-world");
}

#[test]
fn malformed_table_reports_from_match_path() {
    let table = RouteTable::new(vec![Route::new("/docs/*rest/extra")]);

    let err = table.match_path("/docs/a").unwrap_err();
    assert!(matches!(err, RouteError::InvalidPattern { .. }));

    // Every call reports the same error; the table never panics.
    assert!(table.match_path("/other").is_err());
}

#[test]
fn root_route_matches_the_root_path() {
    let table = RouteTable::new(vec![Route::new("/").with_component("App")]);

    let m = expect_route(&table, "/");
    assert_eq!(m.leaf().pattern(), "/");
}
