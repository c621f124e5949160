use super::*;

#[test]
fn parses_root_and_param_patterns() {
    let root = PathPattern::parse("/").expect("root");
    assert_eq!(root.as_str(), "/");
    assert_eq!(root.param_names().count(), 0);

    let article = PathPattern::parse("/article/:id").expect("article");
    assert_eq!(article.param_names().collect::<Vec<_>>(), ["id"]);
    assert_eq!(article.shape(), "/article/:");
}

#[test]
fn rejects_malformed_patterns() {
    for raw in [
        "article",
        "/article//x",
        "/article/:",
        "/a/:id/:id",
        "/a/:b-c",
        "/a?b",
        "/a/../b",
    ] {
        let err = PathPattern::parse(raw).expect_err(raw);
        assert!(
            matches!(err, RouteError::InvalidPattern { .. }),
            "{raw}: {err}"
        );
    }
}

#[test]
fn param_names_do_not_change_shape() {
    let a = PathPattern::parse("/Article/:id").expect("a");
    let b = PathPattern::parse("/article/:slug").expect("b");
    assert_eq!(a.shape(), b.shape());
}

#[test]
fn matches_decode_params_and_ignore_static_case() {
    let pattern = PathPattern::parse("/article/:id").expect("pattern");
    let params = pattern
        .matches(&["ARTICLE", "%E4%B9%90%E5%9B%AD"])
        .expect("match");
    assert_eq!(params.get("id").map(String::as_str), Some("乐园"));

    assert!(pattern.matches(&["article"]).is_none());
    assert!(pattern.matches(&["article", ""]).is_none());
    assert!(pattern.matches(&["post", "1"]).is_none());
}

#[test]
fn build_encodes_params_and_requires_them() {
    let pattern = PathPattern::parse("/article/:id").expect("pattern");
    let mut params = Params::new();
    params.insert("id".into(), "a b/c".into());
    assert_eq!(
        pattern.build("Article", &params).expect("build"),
        "/article/a%20b%2Fc"
    );

    let err = pattern.build("Article", &Params::new()).expect_err("missing");
    assert_eq!(
        err,
        RouteError::MissingParam {
            route: "Article".into(),
            param: "id".into(),
        }
    );
}

#[test]
fn malformed_escapes_are_kept_literally() {
    let pattern = PathPattern::parse("/:id").expect("pattern");
    let params = pattern.matches(&["100%zz"]).expect("match");
    assert_eq!(params["id"], "100%zz");
}
