///! Admin routes and extractor errors driven through the real route table,
///! backed by SeaORM's mock connection instead of Postgres.
///!
///! Run with: `cargo test --test admin_test`
use std::sync::Arc;
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, test, web};
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, MockExecResult, Transaction};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use yatra_backend::auth::jwt::{Claims, issue_token};
use yatra_backend::auth::middleware::JwtConfig;
use yatra_backend::cache::StatsCache;
use yatra_backend::db::{packages as package_db, users as user_db};
use yatra_backend::error::ApiError;
use yatra_backend::handlers::{self, duplicate_or_internal};
use yatra_backend::models::users::{self, Roles};

const SECRET: &str = "admin-route-test-secret";

fn user(role: Roles) -> users::Model {
    users::Model {
        id: Uuid::new_v4(),
        name: "Asha Rao".to_string(),
        email: format!("{}@example.com", Uuid::new_v4()),
        password_hash: "not-a-real-hash".to_string(),
        phone: None,
        role,
        created_at: chrono::Utc::now(),
        updated_at: None,
    }
}

fn bearer(user: &users::Model) -> (&'static str, String) {
    let claims = Claims::new(user.id, user.role.clone(), 3600);
    let token = issue_token(&claims, SECRET).unwrap();
    ("Authorization", format!("Bearer {token}"))
}

fn exec(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

#[derive(Deserialize)]
struct PageOnly {
    #[allow(dead_code)]
    page: u64,
}

async fn typed_query(_query: web::Query<PageOnly>) -> HttpResponse {
    HttpResponse::Ok().finish()
}

macro_rules! app {
    ($db:expr) => {
        test::init_service(
            App::new()
                .configure(handlers::extractor_config)
                .app_data(web::Data::new($db))
                .app_data(web::Data::new(JwtConfig {
                    secret: SECRET.to_string(),
                    ttl_secs: 3600,
                }))
                .app_data(web::Data::new(Arc::new(StatsCache::new(Duration::from_secs(30)))))
                .route("/typed", web::get().to(typed_query))
                .service(web::scope("/api").configure(handlers::init_routes)),
        )
        .await
    };
}

fn mock() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

// ── Admin guard ──

#[actix_web::test]
async fn test_admin_route_without_token_is_401() {
    let app = app!(mock().into_connection());

    let req = test::TestRequest::get().uri("/api/admin/dashboard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": false, "message": "Not authorized, no token" }));
}

#[actix_web::test]
async fn test_admin_route_rejects_regular_user() {
    let customer = user(Roles::User);
    let app = app!(mock().append_query_results([vec![customer.clone()]]).into_connection());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/users/{}", Uuid::new_v4()))
        .insert_header(bearer(&customer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Not authorized as an admin");
}

#[actix_web::test]
async fn test_token_for_deleted_user_is_401() {
    let gone = user(Roles::Admin);
    let app = app!(mock().append_query_results([Vec::<users::Model>::new()]).into_connection());

    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .insert_header(bearer(&gone))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User no longer exists");
}

// ── DELETE /api/admin/users/{id} ──

#[actix_web::test]
async fn test_admin_cannot_delete_self() {
    let admin = user(Roles::Admin);
    let app = app!(mock().append_query_results([vec![admin.clone()]]).into_connection());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/users/{}", admin.id))
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "You cannot delete your own account");
}

#[actix_web::test]
async fn test_deleting_unknown_user_is_404() {
    let admin = user(Roles::Admin);
    let db = mock()
        .append_query_results([vec![admin.clone()]])
        .append_exec_results([exec(0), exec(0)])
        .into_connection();
    let app = app!(db);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/users/{}", Uuid::new_v4()))
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User not found");
}

#[actix_web::test]
async fn test_deleting_user_removes_them() {
    let admin = user(Roles::Admin);
    let db = mock()
        .append_query_results([vec![admin.clone()]])
        .append_exec_results([exec(3), exec(1)])
        .into_connection();
    let app = app!(db);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/users/{}", Uuid::new_v4()))
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true, "message": "User removed" }));
}

#[actix_web::test]
async fn test_empty_booking_update_is_400() {
    let admin = user(Roles::Admin);
    let app = app!(mock().append_query_results([vec![admin.clone()]]).into_connection());

    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/bookings/{}", Uuid::new_v4()))
        .insert_header(bearer(&admin))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Provide bookingStatus or paymentStatus");
}

// ── Extractor errors use the API envelope ──

#[actix_web::test]
async fn test_malformed_path_id_is_enveloped() {
    let app = app!(mock().into_connection());

    let req = test::TestRequest::get().uri("/api/destinations/not-a-uuid").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": false, "message": "Invalid resource id" }));
}

#[actix_web::test]
async fn test_malformed_json_body_is_enveloped() {
    let app = app!(mock().into_connection());

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn test_malformed_query_string_is_enveloped() {
    let app = app!(mock().into_connection());

    let req = test::TestRequest::get().uri("/typed?page=abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}

// ── Statements issued by the write helpers ──

#[actix_web::test]
async fn test_user_delete_removes_bookings_first() {
    let id = Uuid::new_v4();
    let db: DatabaseConnection = mock()
        .append_exec_results([exec(2), exec(1)])
        .into_connection();

    let removed = user_db::delete_user_cascade(&db, id).await.unwrap();
    assert_eq!(removed, 1);

    assert_eq!(
        db.into_transaction_log(),
        [
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"DELETE FROM "bookings" WHERE "bookings"."user_id" = $1"#,
                [id.into()],
            ),
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"DELETE FROM "users" WHERE "users"."id" = $1"#,
                [id.into()],
            ),
        ]
    );
}

#[actix_web::test]
async fn test_bookings_count_decrement_is_floored() {
    let id = Uuid::new_v4();
    let db: DatabaseConnection = mock().append_exec_results([exec(1)]).into_connection();

    package_db::decrement_bookings_count(&db, id).await.unwrap();

    assert_eq!(
        db.into_transaction_log(),
        [Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"UPDATE "packages" SET "bookings_count" = GREATEST(bookings_count - 1, 0) WHERE "packages"."id" = $1"#,
            [id.into()],
        )]
    );
}

#[::core::prelude::v1::test]
fn test_non_unique_insert_failure_stays_internal() {
    let to_api = duplicate_or_internal("User already exists", "Error registering user");
    match to_api(DbErr::Custom("connection reset".to_string())) {
        ApiError::Internal { message, error } => {
            assert_eq!(message, "Error registering user");
            assert!(error.contains("connection reset"));
        }
        other => panic!("expected an internal error, got {other:?}"),
    }
}
