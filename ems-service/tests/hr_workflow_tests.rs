mod common;

use common::TestApp;
use serde_json::json;
use serde_json::Value;

async fn employee_id(app: &TestApp, token: &str) -> i64 {
    app.create_employee(
        token,
        json!({
            "first_name": "Bob",
            "last_name": "Stone",
            "email": "bob@example.com"
        }),
    )
    .await["id"]
        .as_i64()
        .unwrap()
}

#[tokio::test]
async fn leave_request_is_decided_once() {
    let app = TestApp::spawn().await;
    let admin = app.admin_token().await;
    let hr = app.hr_token(&admin, "hana@example.com").await;
    let employee = employee_id(&app, &admin).await;

    let created = app
        .post_authenticated("/api/hrs/leaves", &hr)
        .json(&json!({
            "employee_id": employee,
            "reason": "  Family trip ",
            "start_date": "2024-07-01",
            "end_date": "2024-07-05"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), 201);
    let created: Value = created.json().await.unwrap();
    assert_eq!(created["data"]["status"], "PENDING");
    assert_eq!(created["data"]["reason"], "Family trip");
    let leave_id = created["data"]["id"].as_i64().unwrap();

    let listed: Value = app
        .get_authenticated("/api/hrs/leaves", &hr)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
    assert_eq!(listed["data"][0]["employee_id"], employee);

    let status_path = format!("/api/hrs/leaves/{}/status", leave_id);
    let approved = app
        .put_authenticated(&status_path, &hr)
        .json(&json!({ "status": "approved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(approved.status(), 200);
    let approved: Value = approved.json().await.unwrap();
    assert_eq!(approved["data"]["status"], "APPROVED");

    let second = app
        .put_authenticated(&status_path, &hr)
        .json(&json!({ "status": "REJECTED" }))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), 409);
}

#[tokio::test]
async fn leave_rejects_bad_input() {
    let app = TestApp::spawn().await;
    let admin = app.admin_token().await;
    let employee = employee_id(&app, &admin).await;

    let unknown_employee = app
        .post_authenticated("/api/hrs/leaves", &admin)
        .json(&json!({
            "employee_id": 999,
            "reason": "Trip",
            "start_date": "2024-07-01",
            "end_date": "2024-07-02"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown_employee.status(), 422);

    let reversed = app
        .post_authenticated("/api/hrs/leaves", &admin)
        .json(&json!({
            "employee_id": employee,
            "reason": "Trip",
            "start_date": "2024-07-05",
            "end_date": "2024-07-01"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(reversed.status(), 422);

    let created: Value = app
        .post_authenticated("/api/hrs/leaves", &admin)
        .json(&json!({
            "employee_id": employee,
            "reason": "Trip",
            "start_date": "2024-07-01",
            "end_date": "2024-07-01"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let status_path = format!("/api/hrs/leaves/{}/status", created["data"]["id"]);

    for status in ["PENDING", "CANCELLED"] {
        let response = app
            .put_authenticated(&status_path, &admin)
            .json(&json!({ "status": status }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 422, "status {}", status);
    }

    let missing = app
        .put_authenticated("/api/hrs/leaves/404/status", &admin)
        .json(&json!({ "status": "APPROVED" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
}

#[tokio::test]
async fn attendance_keeps_one_mark_per_day() {
    let app = TestApp::spawn().await;
    let admin = app.admin_token().await;
    let hr = app.hr_token(&admin, "hana@example.com").await;
    let employee = employee_id(&app, &admin).await;
    let path = format!("/api/hrs/attendance/{}", employee);

    for present in [true, false] {
        let response = app
            .post_authenticated(&path, &hr)
            .json(&json!({ "present": present, "date": "2024-07-01" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }

    let today = app
        .post_authenticated(&path, &hr)
        .json(&json!({ "present": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(today.status(), 200);

    let records: Value = app
        .get_authenticated("/api/hrs/attendance", &hr)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let records = records["data"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    // Most recent day first
    assert_eq!(records[0]["present"], true);
    assert_eq!(records[1]["date"], "2024-07-01");
    assert_eq!(records[1]["present"], false);
}

#[tokio::test]
async fn attendance_for_unknown_employee_is_not_found() {
    let app = TestApp::spawn().await;
    let admin = app.admin_token().await;

    let response = app
        .post_authenticated("/api/hrs/attendance/77", &admin)
        .json(&json!({ "present": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let bad_id = app
        .post_authenticated("/api/hrs/attendance/abc", &admin)
        .json(&json!({ "present": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_id.status(), 400);
}

#[tokio::test]
async fn applicant_moves_through_pipeline() {
    let app = TestApp::spawn().await;
    let admin = app.admin_token().await;
    let hr = app.hr_token(&admin, "hana@example.com").await;

    let created = app
        .post_authenticated("/api/hrs/recruitments", &hr)
        .json(&json!({
            "first_name": "Sam",
            "last_name": "Lee",
            "email": "sam@example.com",
            "job_title": "Backend Engineer"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), 201);
    let created: Value = created.json().await.unwrap();
    assert_eq!(created["data"]["status"], "PENDING");
    let status_path = format!("/api/hrs/recruitments/{}/status", created["data"]["id"]);

    for status in ["ON_HOLD", "REVIEWED", "APPROVED"] {
        let response = app
            .put_authenticated(&status_path, &hr)
            .json(&json!({ "status": status }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["data"]["status"], status);
    }

    let back_to_pending = app
        .put_authenticated(&status_path, &hr)
        .json(&json!({ "status": "PENDING" }))
        .send()
        .await
        .unwrap();
    assert_eq!(back_to_pending.status(), 422);

    let listed: Value = app
        .get_authenticated("/api/hrs/recruitments", &hr)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed["data"][0]["status"], "APPROVED");
    assert_eq!(listed["data"][0]["job_title"], "Backend Engineer");
}

#[tokio::test]
async fn applicant_with_invalid_email_is_rejected() {
    let app = TestApp::spawn().await;
    let admin = app.admin_token().await;

    let response = app
        .post_authenticated("/api/hrs/recruitments", &admin)
        .json(&json!({
            "first_name": "Sam",
            "last_name": "Lee",
            "email": "not-an-email"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn hr_desks_are_closed_to_employee_tokens() {
    let app = TestApp::spawn().await;
    let token = app.employee_token("jane").await;

    for path in [
        "/api/hrs/leaves",
        "/api/hrs/attendance",
        "/api/hrs/recruitments",
    ] {
        let response = app.get_authenticated(path, &token).send().await.unwrap();
        assert_eq!(response.status(), 403, "GET {}", path);
    }

    let response = app
        .post_authenticated("/api/hrs/attendance/1", &token)
        .json(&json!({ "present": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 403);

    let anonymous = app.get("/api/hrs/leaves").send().await.unwrap();
    assert_eq!(anonymous.status(), 401);
}
