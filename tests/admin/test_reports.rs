use axum::http::{Method, StatusCode};
use repology_admin::{config::AppConfig, storage::SqlxReportRepository};
use serde_json::Value;

use crate::support::{
    flash_messages, location, read_json, send, send_form, setup_test_app, setup_test_app_with,
    ADMIN_PASSWORD,
};

#[tokio::test]
async fn accept_moves_report_to_recent_listing() {
    let app = setup_test_app().await;
    let id = app.add_report("firefox").await;
    let cookie = app.login().await;

    let response = send_form(
        &app,
        "/admin/reports/unprocessed/",
        Some(&cookie),
        &format!("id={}&reply=Fixed%2C+thanks&action=accept", id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("/admin/reports/unprocessed/"));

    let response = send(&app, Method::GET, "/admin/reports/unprocessed/", Some(&cookie)).await;
    let view: Value = read_json(response).await;
    assert_eq!(view["listing"], "unprocessed");
    assert!(view["reports"].as_array().unwrap().is_empty());
    assert_eq!(
        flash_messages(&view),
        vec!["Logged in successfully", "Report updated successfully"]
    );

    let response = send(&app, Method::GET, "/admin/reports/recent/", Some(&cookie)).await;
    let view: Value = read_json(response).await;
    assert_eq!(view["reports"][0]["id"], id);
    assert_eq!(view["reports"][0]["accepted"], true);
    assert_eq!(view["reports"][0]["reply"], "Fixed, thanks");
    assert!(flash_messages(&view).is_empty());
}

#[tokio::test]
async fn reject_and_plain_reply() {
    let app = setup_test_app().await;
    let id = app.add_report("chromium").await;
    let cookie = app.login().await;
    let repo = SqlxReportRepository::new(app.pool().clone());

    send_form(&app, "/admin/reports/recent/", Some(&cookie), &format!("id={}&action=reject", id))
        .await;
    let stored = repo.get_report(id).await.unwrap();
    assert_eq!(stored.accepted, Some(false));
    assert_eq!(stored.reply.as_deref(), Some(""));

    send_form(
        &app,
        "/admin/reports/recent/",
        Some(&cookie),
        &format!("id={}&reply=see+upstream&action=bogus", id),
    )
    .await;
    let stored = repo.get_report(id).await.unwrap();
    assert_eq!(stored.accepted, None);
    assert_eq!(stored.reply.as_deref(), Some("see upstream"));
}

#[tokio::test]
async fn delete_redirects_to_same_listing() {
    let app = setup_test_app().await;
    let id = app.add_report("vim").await;
    let cookie = app.login().await;

    let response = send_form(
        &app,
        "/admin/reports/recent/",
        Some(&cookie),
        &format!("id={}&action=delete", id),
    )
    .await;
    assert_eq!(location(&response), Some("/admin/reports/recent/"));

    let response = send(&app, Method::GET, "/admin/reports/recent/", Some(&cookie)).await;
    let view: Value = read_json(response).await;
    assert!(view["reports"].as_array().unwrap().is_empty());
    assert!(flash_messages(&view).contains(&"Report removed successfully".to_string()));
}

#[tokio::test]
async fn missing_or_bad_id_is_silently_ignored() {
    let app = setup_test_app().await;
    app.add_report("emacs").await;
    let cookie = app.login().await;
    send(&app, Method::GET, "/admin/reports/unprocessed/", Some(&cookie)).await;

    for form in ["action=delete", "id=&action=delete", "id=abc&action=delete"] {
        let response = send_form(&app, "/admin/reports/unprocessed/", Some(&cookie), form).await;
        assert_eq!(location(&response), Some("/admin/reports/unprocessed/"));
    }

    let response = send(&app, Method::GET, "/admin/reports/unprocessed/", Some(&cookie)).await;
    let view: Value = read_json(response).await;
    assert_eq!(view["reports"].as_array().unwrap().len(), 1);
    assert!(flash_messages(&view).is_empty());
}

#[tokio::test]
async fn listing_respects_reports_per_page() {
    let mut config = AppConfig::default();
    config.admin.password = Some(ADMIN_PASSWORD.to_string());
    config.admin.reports_per_page = 2;
    let app = setup_test_app_with(config).await;
    for name in ["a", "b", "c"] {
        app.add_report(name).await;
    }
    let cookie = app.login().await;

    let response = send(&app, Method::GET, "/admin/reports/unprocessed/", Some(&cookie)).await;
    let view: Value = read_json(response).await;
    assert_eq!(view["reports"].as_array().unwrap().len(), 2);
}
