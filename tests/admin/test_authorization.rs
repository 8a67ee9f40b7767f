use axum::http::{Method, StatusCode};

use crate::support::{location, send, send_form, session_cookie, setup_recording_app};

const GET_PAGES: &[&str] = &[
    "/admin/reports/unprocessed/",
    "/admin/reports/recent/",
    "/admin/updates",
    "/admin/redirects",
    "/admin/redirects?oldname=firefox",
    "/admin/name_samples",
];

const POST_FORMS: &[(&str, &str)] = &[
    ("/admin/reports/unprocessed/", "id=1&reply=spam&action=delete"),
    ("/admin/reports/recent/", "id=1&reply=ok&action=accept"),
    ("/admin/redirects", "oldname=a&newname=b"),
    ("/admin/redirects", "oldname=a&newname=b&action=remove"),
];

#[tokio::test]
async fn anonymous_requests_are_redirected_without_gateway_calls() {
    let (app, gateway) = setup_recording_app();

    for path in GET_PAGES {
        let response = send(&app, Method::GET, path, None).await;
        assert_eq!(response.status(), StatusCode::FOUND, "GET {}", path);
        assert_eq!(location(&response), Some("/admin"), "GET {}", path);
    }

    for (path, form) in POST_FORMS {
        let response = send_form(&app, path, None, form).await;
        assert_eq!(response.status(), StatusCode::FOUND, "POST {}", path);
        assert_eq!(location(&response), Some("/admin"), "POST {}", path);
    }

    assert!(gateway.calls().is_empty(), "unexpected calls: {:?}", gateway.calls());
}

#[tokio::test]
async fn failed_login_session_cannot_mutate() {
    let (app, gateway) = setup_recording_app();

    let response = send_form(&app, "/admin", None, "password=wrong").await;
    let cookie = session_cookie(&response).expect("session cookie");

    for (path, form) in POST_FORMS {
        let response = send_form(&app, path, Some(&cookie), form).await;
        assert_eq!(location(&response), Some("/admin"), "POST {}", path);
    }

    assert!(gateway.calls().is_empty(), "unexpected calls: {:?}", gateway.calls());
}

#[tokio::test]
async fn admin_session_reaches_gateway() {
    let (app, gateway) = setup_recording_app();
    let cookie = app.login().await;

    let response =
        send_form(&app, "/admin/reports/unprocessed/", Some(&cookie), "id=3&action=reject").await;
    assert_eq!(location(&response), Some("/admin/reports/unprocessed/"));

    let response = send_form(&app, "/admin/reports/recent/", Some(&cookie), "reply=x").await;
    assert_eq!(location(&response), Some("/admin/reports/recent/"));

    let response = send(&app, Method::GET, "/admin/updates", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(gateway.calls(), vec!["update_report", "get_repositories_update_diagnostics"]);
}
