use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Article,
}

fn table(base: &str) -> RouteTable<Page> {
    RouteTable::new(
        BasePath::new(base),
        vec![
            Route::new("/", "Home", Page::Home).expect("home"),
            Route::new("/article/:id", "Article", Page::Article)
                .expect("article")
                .with_props(),
        ],
    )
    .expect("table")
}

fn id_param(id: &str) -> Params {
    let mut params = Params::new();
    params.insert("id".to_string(), id.to_string());
    params
}

#[test]
fn root_resolves_to_home_without_props() {
    let table = table("/");
    let Resolution::Matched(found) = table.resolve("/") else {
        panic!("expected a match");
    };
    assert_eq!(*found.view(), Page::Home);
    assert_eq!(found.route.name(), "Home");
    assert!(found.props().is_none());
}

#[test]
fn article_resolves_with_forwarded_id() {
    let table = table("/");
    let Resolution::Matched(found) = table.resolve("/article/42") else {
        panic!("expected a match");
    };
    assert_eq!(*found.view(), Page::Article);
    assert_eq!(found.props(), Some(&id_param("42")));
}

#[test]
fn query_fragment_and_trailing_slash_are_ignored() {
    let table = table("/");
    for location in [
        "/article/42/",
        "/article/42?ref=home",
        "/article/42#top",
        "https://example.org/article/42",
        "/other/../article/42",
    ] {
        let Resolution::Matched(found) = table.resolve(location) else {
            panic!("{location} should match");
        };
        assert_eq!(found.params, id_param("42"), "{location}");
    }
}

#[test]
fn unknown_path_is_not_found() {
    let table = table("/");
    match table.resolve("/nonexistent") {
        Resolution::NotFound { path } => assert_eq!(path, "/nonexistent"),
        Resolution::Matched(found) => panic!("unexpected match {}", found.route.name()),
    }
    assert!(matches!(
        table.resolve("/article/1/comments"),
        Resolution::NotFound { .. }
    ));
}

#[test]
fn base_path_prefixes_generated_urls() {
    let blog = table("/Blog/");
    assert_eq!(blog.href("Home", &Params::new()).expect("home"), "/Blog/");
    assert_eq!(
        blog.href("Article", &id_param("42")).expect("article"),
        "/Blog/article/42"
    );

    let root = table("/");
    assert_eq!(root.href("Home", &Params::new()).expect("home"), "/");
}

#[test]
fn base_path_is_required_on_matched_locations() {
    let table = table("/Blog/");
    let Resolution::Matched(found) = table.resolve("/Blog/") else {
        panic!("expected home");
    };
    assert_eq!(*found.view(), Page::Home);

    let Resolution::Matched(found) = table.resolve("/Blog/article/7") else {
        panic!("expected article");
    };
    assert_eq!(found.props(), Some(&id_param("7")));

    assert!(matches!(
        table.resolve("/article/7"),
        Resolution::NotFound { .. }
    ));
}

#[test]
fn href_and_resolve_agree_on_encoded_ids() {
    let table = table("/Blog/");
    let href = table.href("Article", &id_param("乐园 NOISE")).expect("href");
    let Resolution::Matched(found) = table.resolve(&href) else {
        panic!("{href} should match");
    };
    assert_eq!(found.params, id_param("乐园 NOISE"));
}

#[test]
fn href_reports_unknown_route_and_missing_param() {
    let table = table("/");
    assert_eq!(
        table.href("Missing", &Params::new()),
        Err(RouteError::UnknownRoute {
            name: "Missing".into()
        })
    );
    assert!(matches!(
        table.href("Article", &Params::new()),
        Err(RouteError::MissingParam { .. })
    ));
}

#[test]
fn overlapping_patterns_are_rejected() {
    let err = RouteTable::new(
        BasePath::root(),
        vec![
            Route::new("/article/:id", "Article", Page::Article).expect("a"),
            Route::new("/Article/:slug", "Post", Page::Article).expect("b"),
        ],
    )
    .expect_err("duplicate");
    assert_eq!(
        err,
        RouteError::DuplicatePattern {
            pattern: "/Article/:slug".into(),
            existing: "/article/:id".into(),
        }
    );
}

#[test]
fn repeated_names_are_rejected() {
    let err = RouteTable::new(
        BasePath::root(),
        vec![
            Route::new("/", "Home", Page::Home).expect("a"),
            Route::new("/index", "Home", Page::Home).expect("b"),
        ],
    )
    .expect_err("duplicate");
    assert_eq!(err, RouteError::DuplicateName { name: "Home".into() });
}

#[test]
fn first_match_wins_for_distinct_shapes() {
    let table = RouteTable::new(
        BasePath::root(),
        vec![
            Route::new("/article/latest", "Latest", Page::Home).expect("a"),
            Route::new("/article/:id", "Article", Page::Article).expect("b"),
        ],
    )
    .expect("table");
    let Resolution::Matched(found) = table.resolve("/article/latest") else {
        panic!("expected a match");
    };
    assert_eq!(found.route.name(), "Latest");
}

#[test]
fn dot_segment_ids_are_rejected_by_href() {
    let blog = table("/Blog/");
    for id in [".", ".."] {
        let err = blog.href("Article", &id_param(id)).expect_err(id);
        assert_eq!(
            err,
            RouteError::InvalidParam {
                route: "Article".into(),
                param: "id".into(),
                value: id.into(),
            }
        );
    }
    let href = blog.href("Article", &id_param("...")).expect("three dots");
    let Resolution::Matched(found) = blog.resolve(&href) else {
        panic!("{href} should match");
    };
    assert_eq!(found.params, id_param("..."));
}

#[test]
fn leading_double_slash_is_a_path_not_a_host() {
    let blog = table("/Blog/");
    let Resolution::Matched(found) = blog.resolve("//Blog/article/1") else {
        panic!("expected a match");
    };
    assert_eq!(found.params, id_param("1"));

    let root = table("/");
    let Resolution::Matched(found) = root.resolve("///") else {
        panic!("expected home");
    };
    assert_eq!(*found.view(), Page::Home);
}
