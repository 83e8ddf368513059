//! HTTP-level tests against fixture timing directories

use std::fs;
use std::path::Path;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use q1report::{
    constants::{ABBREVIATIONS_FILE, END_LOG_FILE, START_LOG_FILE},
    handlers, AppState, Config,
};

const START: &str = "\
SVF2018-05-24_12:02:58.917
NHR2018-05-24_12:02:49.914
DRR2018-05-24_12:14:12.054
XYZ_not_a_timestamp
LHM2018-05-24_12:18:20.125
";

const END: &str = "\
SVF2018-05-24_12:04:03.332
NHR2018-05-24_12:04:02.979
DRR2018-05-24_12:11:24.067
LHM2018-05-24_12:19:32.585
";

const ABBREVIATIONS: &str = "\
DRR_Daniel Ricciardo_RED BULL RACING TAG HEUER
SVF_Sebastian Vettel_FERRARI
LHM_Lewis Hamilton_MERCEDES
NHR_Nico Hulkenberg_RENAULT
";

fn fixture(start: Option<&str>, end: Option<&str>, abbreviations: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_if(dir.path(), START_LOG_FILE, start);
    write_if(dir.path(), END_LOG_FILE, end);
    write_if(dir.path(), ABBREVIATIONS_FILE, abbreviations);
    dir
}

fn write_if(dir: &Path, file: &str, contents: Option<&str>) {
    if let Some(contents) = contents {
        fs::write(dir.join(file), contents).unwrap();
    }
}

async fn app_for(dir: &TempDir) -> Router {
    let state = AppState::load(Config::with_data_dir(dir.path())).await.unwrap();
    handlers::app(state)
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri).await
}

fn driver_codes(body: &Value) -> Vec<String> {
    body["drivers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["code"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn ranked_report_ascending_by_default() {
    let dir = fixture(Some(START), Some(END), Some(ABBREVIATIONS));
    let app = app_for(&dir).await;

    let (status, body) = get(&app, "/report/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"], "asc");
    assert_eq!(driver_codes(&body), vec!["SVF", "LHM", "NHR", "DRR"]);

    let first = &body["drivers"][0];
    assert_eq!(first["position"], 1);
    assert_eq!(first["name"], "Sebastian Vettel");
    assert_eq!(first["team"], "FERRARI");
    assert_eq!(first["lap_time"], "0:01:04.415000");
    assert_eq!(body["drivers"][2]["lap_time"], "0:01:13.065000");
    assert_eq!(first["eliminated"], false);

    assert_eq!(body["drivers"][3]["lap_time"], "NO TIME");
}

#[tokio::test]
async fn descending_keeps_invalid_laps_last() {
    let dir = fixture(Some(START), Some(END), Some(ABBREVIATIONS));
    let app = app_for(&dir).await;

    let (_, body) = get(&app, "/report/?order=desc").await;
    assert_eq!(body["order"], "desc");
    assert_eq!(driver_codes(&body), vec!["NHR", "LHM", "SVF", "DRR"]);
}

#[tokio::test]
async fn unrecognized_order_falls_back_to_ascending() {
    let dir = fixture(Some(START), Some(END), Some(ABBREVIATIONS));
    let app = app_for(&dir).await;

    let (status, body) = get(&app, "/report?order=sideways").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"], "asc");
    assert_eq!(driver_codes(&body)[0], "SVF");
}

#[tokio::test]
async fn driver_list_in_start_order() {
    let dir = fixture(Some(START), Some(END), Some(ABBREVIATIONS));
    let app = app_for(&dir).await;

    let (status, body) = get(&app, "/report/drivers/?order=desc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
    assert_eq!(driver_codes(&body), vec!["SVF", "NHR", "DRR", "LHM"]);
}

#[tokio::test]
async fn driver_lookup_known_and_unknown() {
    let dir = fixture(Some(START), Some(END), Some(ABBREVIATIONS));
    let app = app_for(&dir).await;

    let (status, body) = get(&app, "/report/drivers/SVF").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["driver_id"], "SVF");
    assert_eq!(body["name"], "Sebastian Vettel");
    assert_eq!(body["lap_time"], "0:01:04.415000");

    let (status, body) = get(&app, "/report/drivers/XYZ").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["driver_id"], "XYZ");
    assert_eq!(body["name"], "Not Found");
    assert_eq!(body["team"], "N/A");
    assert_eq!(body["lap_time"], "N/A");
}

#[tokio::test]
async fn missing_end_log_ranks_everyone_without_time() {
    let dir = fixture(Some(START), None, Some(ABBREVIATIONS));
    let app = app_for(&dir).await;

    let (_, body) = get(&app, "/report/?order=desc").await;
    assert_eq!(driver_codes(&body), vec!["SVF", "NHR", "DRR", "LHM"]);
    for driver in body["drivers"].as_array().unwrap() {
        assert_eq!(driver["lap_time"], "NO TIME");
        // four drivers fit under the cutoff
        assert_eq!(driver["eliminated"], false);
    }

    let (_, summary) = get(&app, "/report/summary").await;
    assert_eq!(summary["end"]["loaded"], false);
    assert_eq!(summary["start"]["skipped"], 1);
    assert_eq!(summary["timed"], 0);
}

#[tokio::test]
async fn twenty_drivers_cutoff() {
    let mut start = String::new();
    let mut end = String::new();
    for i in 0..20u8 {
        let code = format!("D{}X", (b'A' + i) as char);
        start.push_str(&format!("{code}2018-05-24_12:00:00.000\n"));
        end.push_str(&format!("{code}2018-05-24_12:01:{:02}.500\n", i));
    }
    let dir = fixture(Some(&start), Some(&end), None);
    let app = app_for(&dir).await;

    let (_, asc) = get(&app, "/report/").await;
    for driver in asc["drivers"].as_array().unwrap() {
        let position = driver["position"].as_u64().unwrap();
        assert_eq!(driver["eliminated"], position > 15);
    }

    let (_, desc) = get(&app, "/report/?order=desc").await;
    for driver in desc["drivers"].as_array().unwrap() {
        let position = driver["position"].as_u64().unwrap();
        assert_eq!(driver["eliminated"], position <= 5);
    }
}

#[tokio::test]
async fn text_report_is_plain_text() {
    let dir = fixture(Some(START), Some(END), Some(ABBREVIATIONS));
    let app = app_for(&dir).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/report/text")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.starts_with("Formula 1 - Qualifying Q1 Results"));
    assert!(text.contains("1. Sebastian Vettel"));
    assert!(text.contains("NO TIME COULD BE DETERMINED BASED ON INPUT FILES"));
}

#[tokio::test]
async fn reload_picks_up_changed_files() {
    let dir = fixture(Some(START), None, Some(ABBREVIATIONS));
    let app = app_for(&dir).await;

    let (_, before) = get(&app, "/report/drivers/SVF").await;
    assert_eq!(before["lap_time"], "NO TIME");

    fs::write(dir.path().join(END_LOG_FILE), END).unwrap();

    let (status, summary) = send(&app, Method::POST, "/report/reload").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["end"]["loaded"], true);
    assert_eq!(summary["timed"], 3);
    assert_eq!(summary["anomalies"], 1);

    let (_, after) = get(&app, "/report/drivers/SVF").await;
    assert_eq!(after["lap_time"], "0:01:04.415000");
}

#[tokio::test]
async fn root_redirects_to_report() {
    let dir = fixture(None, None, None);
    let app = app_for(&dir).await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[header::LOCATION], "/report/");
}

#[tokio::test]
async fn health_and_unknown_route() {
    let dir = fixture(None, None, None);
    let app = app_for(&dir).await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["participants"], 0);

    let (status, body) = get(&app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
