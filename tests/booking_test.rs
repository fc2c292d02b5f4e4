//! Integration tests for booking creation, listing, and deletion.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use dormhotel_database::store::BookingStore;
use helpers::{Auth, TestApp};

#[tokio::test]
async fn test_end_to_end_booking_lifecycle() {
    let app = TestApp::new().await;

    assert_eq!(
        app.register("traveller@example.com", "pw").await.status,
        StatusCode::CREATED
    );
    let login = app.login("traveller@example.com", "pw").await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.body["role"], "user");
    let token = login.token().unwrap();

    let created = app
        .request(
            "POST",
            "/api/bookings",
            Some(app.booking_body(1, 2, "double")),
            Auth::Cookie(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["message"], "Booking confirmed");
    let id = created.body["id"].as_i64().expect("numeric id");

    let listed = app
        .request("GET", "/api/bookings", None, Auth::Cookie(&token))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    let bookings = listed.body.as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["id"], id);
    assert_eq!(bookings[0]["check_in"], app.date(1));
    assert_eq!(bookings[0]["check_out"], app.date(3));
    assert_eq!(bookings[0]["room_type"], "double");

    let deleted = app
        .request("DELETE", &format!("/api/bookings/{id}"), None, Auth::Cookie(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let listed = app
        .request("GET", "/api/bookings", None, Auth::Cookie(&token))
        .await;
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
async fn test_validation_messages() {
    let app = TestApp::new().await;
    let token = app.guest_token("guest@example.com").await;

    let mut missing = app.booking_body(1, 1, "single");
    missing["name"] = json!("");
    let past = app.booking_body(-1, 3, "single");
    let same_day = app.booking_body(1, 0, "single");
    let bad_room = app.booking_body(1, 1, "penthouse");

    let cases = [
        (missing, "All fields are required"),
        (past, "Check-in date cannot be in the past"),
        (same_day, "Check-out date must be after check-in date"),
    ];

    for (body, message) in cases {
        let response = app
            .request("POST", "/api/bookings", Some(body), Auth::Cookie(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error(), message);
    }

    let response = app
        .request("POST", "/api/bookings", Some(bad_room), Auth::Cookie(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.bookings.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_check_in_today_and_one_night_accepted() {
    let app = TestApp::new().await;
    let token = app.guest_token("guest@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(app.booking_body(0, 1, "suite")),
            Auth::Cookie(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_requires_authentication() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(app.booking_body(1, 1, "single")),
            Auth::None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_cannot_create_booking() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(app.booking_body(1, 1, "single")),
            Auth::Cookie(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error(), "Insufficient permissions");
}

#[tokio::test]
async fn test_non_owner_delete_forbidden() {
    let app = TestApp::new().await;
    let alice = app.guest_token("alice@example.com").await;
    let bob = app.guest_token("bob@example.com").await;
    let id = app.create_booking(&alice, "single").await;

    let response = app
        .request("DELETE", &format!("/api/bookings/{id}"), None, Auth::Cookie(&bob))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error(), "You can only delete your own bookings");
    assert!(app.bookings.find_by_id(id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_admin_deletes_any_booking() {
    let app = TestApp::new().await;
    let alice = app.guest_token("alice@example.com").await;
    let admin = app.admin_token().await;
    let id = app.create_booking(&alice, "suite").await;

    let response = app
        .request("DELETE", &format!("/api/bookings/{id}"), None, Auth::Cookie(&admin))
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(app.bookings.find_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_nonexistent_booking() {
    let app = TestApp::new().await;
    let token = app.guest_token("guest@example.com").await;
    app.create_booking(&token, "single").await;

    let response = app
        .request("DELETE", "/api/bookings/999", None, Auth::Cookie(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error(), "Booking not found");
    assert_eq!(app.bookings.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_unparseable_id_is_not_found() {
    let app = TestApp::new().await;
    let token = app.guest_token("guest@example.com").await;
    app.create_booking(&token, "suite").await;

    for path in ["/api/bookings/abc", "/api/bookings/99999999999999999999"] {
        let response = app.request("DELETE", path, None, Auth::Cookie(&token)).await;

        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(response.error(), "Booking not found");
    }
    assert_eq!(app.bookings.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_listing_scoped_by_role() {
    let app = TestApp::new().await;
    let alice = app.guest_token("alice@example.com").await;
    let bob = app.guest_token("bob@example.com").await;
    let admin = app.admin_token().await;

    let first = app.create_booking(&alice, "single").await;
    app.create_booking(&bob, "double").await;
    let third = app.create_booking(&alice, "suite").await;

    let mine = app
        .request("GET", "/api/bookings", None, Auth::Cookie(&alice))
        .await;
    let ids: Vec<i64> = mine
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![third, first]);

    let all = app
        .request("GET", "/api/bookings", None, Auth::Cookie(&admin))
        .await;
    assert_eq!(all.body.as_array().unwrap().len(), 3);
}
