/// Builds a `Router<BoxHandler<_>>` from `pattern => handler` pairs.
///
/// ```
/// use path_dispatch::router;
///
/// let router = router! {
///     "/" => |_| "main page".to_owned(),
///     "/user/:id" => |p| format!("user page of {}", p.get("id").unwrap())
/// };
///
/// let page = router.dispatch("user/jjg/", || "Not found".to_owned()).unwrap();
/// assert_eq!(page, "user page of jjg");
/// ```
#[macro_export]
macro_rules! router {
    {$($pattern:expr => $handler:expr),+ $(,)?} => {{
        let mut __router: $crate::Router<$crate::BoxHandler<_>> = $crate::Router::new();
        $(__router.route($pattern, $handler);)+
        __router
    }};
}

#[cfg(feature = "http-router")]
#[macro_export]
macro_rules! method_router {
    {$($method:tt $pattern:expr => $handler:expr),+ $(,)?} => {{
        let mut __router: $crate::MethodRouter<$crate::BoxHandler<_>> = $crate::MethodRouter::new();
        $(__router.route($crate::Method::$method, $pattern, $handler);)+
        __router
    }};
}
