#[cfg(feature = "http-router")]
#[test]
fn method_router_macro() {
    use path_dispatch::{method_router, Method, MethodRouter};

    let router = method_router! {
        GET "/u/:uid/p/:pid" => |p| format!("get {} {}", p.get("uid").unwrap(), p.get("pid").unwrap()),
        POST "/u/:uid/p" => |p| format!("post {}", p.get("uid").unwrap()),
        GET "/v1/info" => |_| "info".to_owned(),
        POST "/v1/info" => |_| "update".to_owned(),
    };
    let _: &MethodRouter<_> = &router;

    let not_found = || "404".to_owned();
    let cases: &[(Method, &str, &str)] = &[
        (Method::GET, "/u/asd/p/qwe", "get asd qwe"),
        (Method::POST, "/u/asd/p", "post asd"),
        (Method::GET, "/v1/info/", "info"),
        (Method::POST, "v1/info", "update"),
        (Method::GET, "/u/asd/p", "404"),
        (Method::DELETE, "/v1/info", "404"),
    ];

    for (method, path, expected) in cases {
        let ret = router.dispatch(method, path, not_found).unwrap();
        assert_eq!(&ret, expected, "{:?} {}", method, path);
    }
}

#[cfg(feature = "http-router")]
#[test]
fn method_router_find() {
    use path_dispatch::{Method, MethodRouter};

    let mut router: MethodRouter<usize> = MethodRouter::new();
    router
        .insert(Method::GET, "/hello/:name", 1)
        .insert(Method::PUT, "/hello/:name", 2);
    assert!(router.try_insert(Method::GET, "hello", 3).is_err());

    let (data, params) = router.find(&Method::PUT, "/hello/world").unwrap().unwrap();
    assert_eq!(*data, 2);
    assert_eq!(params.get("name"), Some("world"));

    assert!(router.find(&Method::POST, "/hello/world").unwrap().is_none());
    assert_eq!(router.get_router(&Method::GET).map(|r| r.len()), Some(1));
}

#[cfg(feature = "http-router")]
#[test]
fn dispatch_from_request() {
    use path_dispatch::{BoxHandler, MethodRouter, Router};

    let mut router: MethodRouter<BoxHandler<String>> = MethodRouter::new();
    router
        .get("/search/:term", |p| format!("search {}", p.get("term").unwrap()))
        .delete("/item/:id", |p| format!("delete {}", p.get("id").unwrap()));

    let req = http::Request::get("https://example.com/search/rust/?page=2")
        .body(())
        .unwrap();
    let ret = router.dispatch_request(&req, || "404".to_owned()).unwrap();
    assert_eq!(ret, "search rust");

    let req = http::Request::delete("/item/7").body(()).unwrap();
    let ret = router.dispatch_request(&req, || "404".to_owned()).unwrap();
    assert_eq!(ret, "delete 7");

    let mut pages: Router<BoxHandler<String>> = Router::new();
    pages.route("/docs/:page", |p| p.get("page").unwrap().to_owned());
    let uri: http::Uri = "/docs/intro?lang=en".parse().unwrap();
    assert_eq!(pages.dispatch_uri(&uri, String::new).unwrap(), "intro");
}
