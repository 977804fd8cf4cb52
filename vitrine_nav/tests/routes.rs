// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing round trips through the links the site itself generates.

use vitrine_nav::{Route, RouteError};

#[test]
fn generated_links_route_back() {
    for id in ["salt-flats", "harbour-nights", "ünïcode", "with space", "a/b?c=d"] {
        for route in [
            Route::Project { id: id.to_owned() },
            Route::Gallery { id: id.to_owned() },
        ] {
            let href = route.href();
            assert_eq!(Route::parse(&href).as_ref(), Ok(&route), "via {href}");
            let absolute = format!("https://photos.example.org/portfolio/{href}");
            assert_eq!(Route::parse(&absolute), Ok(route), "via {absolute}");
        }
    }
}

#[test]
fn routing_rejects_a_missing_project_id() {
    let err = Route::parse("https://photos.example.org/project.html").unwrap_err();
    assert!(matches!(err, RouteError::MissingProject { page: "project.html" }));
    assert_eq!(err.to_string(), "no project id in project.html");
}

#[test]
fn non_urls_are_invalid() {
    assert!(matches!(
        Route::parse("http://[::1"),
        Err(RouteError::InvalidUrl(_))
    ));
}
