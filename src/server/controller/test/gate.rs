use super::*;

/// Tests that the health check needs no session.
///
/// Expected: 200 with {"status": "ok"}
#[tokio::test]
async fn serves_health_anonymously() {
    let test = TestBuilder::new().with_garage_tables().build().await.unwrap();
    let mut app = TestApp::new(test.db.as_ref().unwrap());

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

/// Tests anonymous access to API endpoints.
///
/// Expected: 401 with a JSON error and no entity data
#[tokio::test]
async fn rejects_anonymous_api_requests() {
    let test = TestBuilder::new().with_garage_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_car_with_owner(db).await.unwrap();
    let mut app = TestApp::new(db);

    for uri in ["/users", "/cars", "/cars/1", "/services", "/documents", "/api/auth/me"] {
        let response = app.get(uri).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Authentication required" })
        );
    }
}

/// Tests anonymous writes are rejected before the body is read.
///
/// Expected: 401 and no car inserted
#[tokio::test]
async fn rejects_anonymous_create() {
    let test = TestBuilder::new().with_garage_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let mut app = TestApp::new(db);

    let response = app
        .json(
            Method::POST,
            "/cars",
            json!({ "user_id": user.id, "brand": "Toyota", "model": "Yaris", "year": 2020 }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let mut app = TestApp::new(db);
    app.sign_in("Ana", "ana@x.com", "p1").await;
    let cars = body_json(app.get("/cars").await).await;
    assert_eq!(cars, json!([]));
}

/// Tests anonymous access to browsing pages.
///
/// Expected: 303 redirect to /login
#[tokio::test]
async fn redirects_anonymous_pages_to_login() {
    let test = TestBuilder::new().with_garage_tables().build().await.unwrap();
    let mut app = TestApp::new(test.db.as_ref().unwrap());

    for uri in ["/", "/view/cars", "/view/documents"] {
        let response = app.get(uri).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", uri);
        assert_eq!(location(&response), "/login");
    }
}

/// Tests that the login page is reachable anonymously.
///
/// Expected: 200 HTML
#[tokio::test]
async fn serves_login_page_anonymously() {
    let test = TestBuilder::new().with_garage_tables().build().await.unwrap();
    let mut app = TestApp::new(test.db.as_ref().unwrap());

    let response = app.get("/login").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("data-template=\"login\""));
}

/// Tests unmatched routes reach the fallback without a session check.
///
/// Expected: 404 rather than 401
#[tokio::test]
async fn unmatched_route_is_not_found() {
    let test = TestBuilder::new().with_garage_tables().build().await.unwrap();
    let mut app = TestApp::new(test.db.as_ref().unwrap());

    let response = app.get("/no/such/route").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tests that a session whose user was deleted stops authenticating.
///
/// Expected: 401 after the user deletes their own account
#[tokio::test]
async fn session_of_deleted_user_is_rejected() {
    let test = TestBuilder::new().with_garage_tables().build().await.unwrap();
    let mut app = TestApp::new(test.db.as_ref().unwrap());

    let id = app.sign_in("Ana", "ana@x.com", "p1").await;

    let response = app.delete(&format!("/users/{}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.get("/api/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests logging out ends the session.
///
/// Expected: /api/auth/me succeeds before logout and returns 401 after
#[tokio::test]
async fn logout_ends_session() {
    let test = TestBuilder::new().with_garage_tables().build().await.unwrap();
    let mut app = TestApp::new(test.db.as_ref().unwrap());

    app.sign_in("Ana", "ana@x.com", "p1").await;
    assert_eq!(app.get("/api/auth/me").await.status(), StatusCode::OK);

    let response = app.json(Method::POST, "/logout", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        app.get("/api/auth/me").await.status(),
        StatusCode::UNAUTHORIZED
    );
}
