use axum::routing::get;
use axum::{Json, Router};
use digest_core::Summary;
use fetcher::FetchConfig;
use postdigest::{run, Config};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

fn spawn_api(posts: Value) -> String {
    let app = Router::new().route("/posts", get(move || async move { Json(posts) }));
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    format!("http://{addr}/posts")
}

fn config_in(dir: &Path, url: String) -> Config {
    Config {
        fetch: FetchConfig { url, timeout: Duration::from_secs(2), ..Default::default() },
        dataset_path: dir.join("data.json"),
        mock_path: dir.join("mock.json"),
        summary_path: dir.join("summary.txt"),
    }
}

fn unreachable_url() -> String {
    let port = {
        let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };
    format!("http://127.0.0.1:{port}/posts")
}

#[test]
fn run_against_live_api() {
    let posts = json!([
        {"userId": 1, "id": 1, "title": "a", "body": "one two three"},
        {"userId": 2, "id": 2, "title": "b", "body": "four five"},
        {"userId": 2, "id": 3, "title": "c", "body": "six"}
    ]);
    let dir = tempdir().unwrap();
    let config = config_in(dir.path(), spawn_api(posts.clone()));

    let summary = run(&config);
    assert_eq!(summary, Summary::new(3, 2, 2.0));
    let written: Value = serde_json::from_str(&fs::read_to_string(&config.dataset_path).unwrap()).unwrap();
    assert_eq!(written, posts);
    assert_eq!(
        fs::read_to_string(&config.summary_path).unwrap(),
        "Total Posts: 3\nUnique Users: 2\nAverage Words per Post: 2.00\n"
    );
}

#[test]
fn run_falls_back_to_mock_when_api_is_down() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path(), unreachable_url());
    fs::write(&config.mock_path, r#"[{"userId": 1, "id": 1, "title": "test", "body": "Test body"}]"#).unwrap();

    let summary = run(&config);
    assert_eq!(summary, Summary::new(1, 1, 2.0));
    assert_eq!(
        fs::read_to_string(&config.summary_path).unwrap(),
        "Total Posts: 1\nUnique Users: 1\nAverage Words per Post: 2.00\n"
    );
}

#[test]
fn run_with_nothing_available_reports_zero() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path(), unreachable_url());

    let summary = run(&config);
    assert!(summary.is_zero());
    assert!(!config.dataset_path.exists());
    assert_eq!(
        fs::read_to_string(&config.summary_path).unwrap(),
        "Total Posts: 0\nUnique Users: 0\nAverage Words per Post: 0.00\n"
    );
}
