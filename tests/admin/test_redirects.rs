use axum::http::{Method, StatusCode};
use serde_json::Value;

use crate::support::{flash_messages, read_json, send, send_form, setup_test_app, TestApp};

async fn seed_project(app: &TestApp, effname: &str, packages: &[(&str, &str, i64)]) {
    sqlx::query("INSERT INTO metapackages (effname, num_repos, num_families) VALUES ($1, $2, $2)")
        .bind(effname)
        .bind(packages.len() as i64)
        .execute(app.pool())
        .await
        .unwrap();

    for &(repo, version, class) in packages {
        sqlx::query(
            "INSERT INTO packages (effname, repo, family, visiblename, version, versionclass) \
             VALUES ($1, $2, $2, $1, $3, $4)",
        )
        .bind(effname)
        .bind(repo)
        .bind(version)
        .bind(class)
        .execute(app.pool())
        .await
        .unwrap();
    }
}

fn targets(view: &Value, generation: &str) -> Vec<String> {
    view[generation]["targets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t.as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn add_renders_lookup_directly() {
    let app = setup_test_app().await;
    seed_project(&app, "gtk3", &[("arch", "3.24.41", 1), ("debian", "3.24.38", 2)]).await;
    let cookie = app.login().await;
    send(&app, Method::GET, "/admin/redirects", Some(&cookie)).await;

    let response =
        send_form(&app, "/admin/redirects", Some(&cookie), "oldname=gtk%2B3&newname=gtk3").await;
    assert_eq!(response.status(), StatusCode::OK);

    let view: Value = read_json(response).await;
    assert_eq!(view["oldname"], "gtk+3");
    assert_eq!(targets(&view, "v1"), vec!["gtk3"]);
    assert_eq!(view["v1"]["metapackages"][0]["effname"], "gtk3");
    assert_eq!(view["v1"]["summaries"][0]["effname"], "gtk3");
    assert_eq!(view["v1"]["summaries"][0]["newest"][0]["version"], "3.24.41");
    assert_eq!(view["v1"]["summaries"][0]["outdated"][0]["families"][0], "debian");
    assert!(targets(&view, "v2").is_empty());
    assert_eq!(flash_messages(&view), vec!["Redirect added successfully"]);
}

#[tokio::test]
async fn adding_twice_keeps_single_mapping() {
    let app = setup_test_app().await;
    let cookie = app.login().await;

    send_form(&app, "/admin/redirects", Some(&cookie), "oldname=a&newname=b").await;
    let response = send_form(&app, "/admin/redirects", Some(&cookie), "oldname=a&newname=b").await;

    let view: Value = read_json(response).await;
    assert_eq!(targets(&view, "v1"), vec!["b"]);
}

#[tokio::test]
async fn remove_only_deletes_named_pair() {
    let app = setup_test_app().await;
    let cookie = app.login().await;

    send_form(&app, "/admin/redirects", Some(&cookie), "oldname=a&newname=b").await;
    send_form(&app, "/admin/redirects", Some(&cookie), "oldname=a&newname=c").await;
    let response = send_form(
        &app,
        "/admin/redirects",
        Some(&cookie),
        "oldname=a&newname=b&action=remove",
    )
    .await;

    let view: Value = read_json(response).await;
    assert_eq!(targets(&view, "v1"), vec!["c"]);
    assert_eq!(flash_messages(&view), vec!["Redirect removed successfully"]);
}

#[tokio::test]
async fn second_generation_resolved_independently() {
    let app = setup_test_app().await;
    sqlx::query(
        "INSERT INTO project_redirects2 (oldname, newname, repository) VALUES ('x', 'y', 'freebsd')",
    )
    .execute(app.pool())
    .await
    .unwrap();
    let cookie = app.login().await;
    send(&app, Method::GET, "/admin/redirects", Some(&cookie)).await;

    let response = send(&app, Method::GET, "/admin/redirects?oldname=x", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let view: Value = read_json(response).await;
    assert_eq!(view["oldname"], "x");
    assert!(targets(&view, "v1").is_empty());
    assert_eq!(targets(&view, "v2"), vec!["y"]);
    assert!(view["v2"]["metapackages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn oldname_alone_only_looks_up() {
    let app = setup_test_app().await;
    let cookie = app.login().await;
    send_form(&app, "/admin/redirects", Some(&cookie), "oldname=a&newname=b").await;

    let response =
        send_form(&app, "/admin/redirects", Some(&cookie), "oldname=a&action=remove").await;
    let view: Value = read_json(response).await;

    assert_eq!(targets(&view, "v1"), vec!["b"]);
    assert!(flash_messages(&view).is_empty());
}

#[tokio::test]
async fn empty_submission_renders_empty_page() {
    let app = setup_test_app().await;
    let cookie = app.login().await;
    send(&app, Method::GET, "/admin/redirects", Some(&cookie)).await;

    let response = send_form(&app, "/admin/redirects", Some(&cookie), "newname=b").await;
    let view: Value = read_json(response).await;

    assert_eq!(view["oldname"], "");
    assert!(targets(&view, "v1").is_empty());
    assert!(targets(&view, "v2").is_empty());
    assert!(flash_messages(&view).is_empty());
}
