use axum::http::{Method, StatusCode};
use serde_json::Value;

use crate::support::{read_json, send, setup_test_app};

#[tokio::test]
async fn updates_lists_repositories_by_name() {
    let app = setup_test_app().await;
    for (name, title, errors) in [("freebsd", "FreeBSD Ports", 0), ("arch", "Arch Linux", 2)] {
        sqlx::query(
            "INSERT INTO repositories (name, title, num_packages, update_errors, fetch_duration_ms) \
             VALUES ($1, $2, 100, $3, 1500)",
        )
        .bind(name)
        .bind(title)
        .bind(errors)
        .execute(app.pool())
        .await
        .unwrap();
    }
    let cookie = app.login().await;

    let response = send(&app, Method::GET, "/admin/updates", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let view: Value = read_json(response).await;
    let repositories = view["repositories"].as_array().unwrap();
    assert_eq!(repositories.len(), 2);
    assert_eq!(repositories[0]["name"], "arch");
    assert_eq!(repositories[0]["update_errors"], 2);
    assert_eq!(repositories[1]["title"], "FreeBSD Ports");
    assert_eq!(repositories[1]["fetch_duration_ms"], 1500);
}

#[tokio::test]
async fn name_samples_grouped_by_first_appearance() {
    let app = setup_test_app().await;
    for (repo, name) in [("A", "a1"), ("A", "a2"), ("B", "b1")] {
        sqlx::query("INSERT INTO name_samples (repo, name, effname) VALUES ($1, $2, $2)")
            .bind(repo)
            .bind(name)
            .execute(app.pool())
            .await
            .unwrap();
    }
    let cookie = app.login().await;

    let response = send(&app, Method::GET, "/admin/name_samples", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let view: Value = read_json(response).await;
    let groups = view["samples_by_repo"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["repo"], "A");
    assert_eq!(groups[0]["samples"].as_array().unwrap().len(), 2);
    assert_eq!(groups[0]["samples"][1]["name"], "a2");
    assert_eq!(groups[1]["repo"], "B");
}

#[tokio::test]
async fn name_samples_limited_to_one_batch() {
    let app = setup_test_app().await;
    for i in 0..15 {
        sqlx::query("INSERT INTO name_samples (repo, name, effname) VALUES ('R', $1, $1)")
            .bind(format!("pkg{}", i))
            .execute(app.pool())
            .await
            .unwrap();
    }
    let cookie = app.login().await;

    let response = send(&app, Method::GET, "/admin/name_samples", Some(&cookie)).await;
    let view: Value = read_json(response).await;
    assert_eq!(view["samples_by_repo"][0]["samples"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn health_is_public() {
    let app = setup_test_app().await;

    let response = send(&app, Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = read_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}
