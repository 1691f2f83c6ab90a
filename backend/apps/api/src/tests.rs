//! Full-stack tests: the assembled router over the in-memory repository

#[cfg(test)]
mod app_tests {
    use std::sync::Arc;

    use auth::{AuthConfig, InMemoryAuthRepository, LogResetNotifier};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{HeaderValue, Request, Response, StatusCode, header};
    use tower::ServiceExt;
    use web::GuardConfig;

    use crate::app::build_router;

    const UA: &str = "Mozilla/5.0 (Macintosh) TestBrowser/2.0";
    const ORIGIN: &str = "http://localhost:40922";

    async fn app() -> (Router, Arc<InMemoryAuthRepository>) {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = Arc::new(AuthConfig::development());
        repo.insert_user("grace@example.com", "hopper-1906", config.pepper())
            .await
            .unwrap();

        let router = build_router(
            Arc::clone(&repo),
            Arc::new(LogResetNotifier),
            config,
            GuardConfig::default(),
            vec![HeaderValue::from_static(ORIGIN)],
        );
        (router, repo)
    }

    fn request(method: &str, uri: &str, cookie: Option<&str>, body: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::USER_AGENT, UA);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    fn location(response: &Response<Body>) -> Option<&str> {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    async fn sign_in(router: &Router) -> String {
        let response = router
            .clone()
            .oneshot(request(
                "POST",
                "/api/auth/login",
                None,
                Some(r#"{"email":"grace@example.com","password":"hopper-1906"}"#),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_settings_requires_session() {
        let (router, _) = app().await;
        let response = router
            .oneshot(request("GET", "/settings", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            location(&response),
            Some("/auth/login?callbackUrl=%2Fsettings")
        );
    }

    #[tokio::test]
    async fn test_login_then_settings_then_logout() {
        let (router, repo) = app().await;
        let cookie = sign_in(&router).await;

        let response = router
            .clone()
            .oneshot(request("GET", "/settings", Some(&cookie), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .clone()
            .oneshot(request("GET", "/auth/login", Some(&cookie), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), Some("/"));

        let response = router
            .clone()
            .oneshot(request("POST", "/api/auth/logout", Some(&cookie), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(repo.session_count().await, 0);

        let response = router
            .oneshot(request("GET", "/settings", Some(&cookie), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    }

    #[tokio::test]
    async fn test_api_routes_are_not_redirected() {
        let (router, _) = app().await;
        let response = router
            .oneshot(request("POST", "/api/auth/reset-password", None, Some(r#"{"email":"x@example.com"}"#)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_login_page_is_public() {
        let (router, _) = app().await;
        let response = router
            .oneshot(request("GET", "/auth/login", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let (router, _) = app().await;
        let mut req = request("GET", "/", None, None);
        req.headers_mut()
            .insert(header::ORIGIN, HeaderValue::from_static(ORIGIN));

        let response = router.oneshot(req).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            ORIGIN
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }
}
