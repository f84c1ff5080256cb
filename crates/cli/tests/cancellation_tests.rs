//! Integration tests for Ctrl+C/SIGINT handling.
//!
//! Unix-only because they send SIGINT to the child process. We assert:
//! - exit code is 130
//! - stderr contains the cancellation message
//! - nothing is written to stdout or the output file

#![cfg(unix)]

mod common;

use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use common::{SEARCH_PATH, mount_login};
use tokio::sync::Notify;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ffs_search_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("ffs-search")
}

fn send_sigint(pid: u32) {
    // SAFETY: standard Unix kill syscall
    unsafe {
        libc::kill(pid as i32, libc::SIGINT);
    }
}

#[tokio::test]
async fn test_ctrl_c_during_search_exits_130_with_message() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    // Hold the search response long enough to interrupt it.
    let request_seen = Arc::new(Notify::new());
    let request_seen_clone = Arc::clone(&request_seen);

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(move |_req: &wiremock::Request| {
            request_seen_clone.notify_one();
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(60))
                .set_body_json(ffs_client::testing::event_page(0, 1, 1))
        })
        .mount(&server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let out_file = dir.path().join("results.json");

    let child = tokio::process::Command::new(ffs_search_bin())
        .env("DOTENV_DISABLED", "1")
        .env("FFS_STS_URL", server.uri())
        .env("FFS_BASE_URL", server.uri())
        .env("FFS_USERNAME", "analyst@example.com")
        .env("FFS_PASSWORD", "test-password")
        .env_remove("FFS_PROFILE")
        .env_remove("FFS_CONFIG_PATH")
        .args(["--quiet", "--search_type", "md5", "--values", "abc", "--out_file"])
        .arg(&out_file)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn ffs-search");

    let pid = child.id().expect("child pid");
    tokio::time::timeout(Duration::from_secs(10), request_seen.notified())
        .await
        .expect("expected search request before SIGINT");
    send_sigint(pid);

    let output = tokio::time::timeout(Duration::from_secs(5), child.wait_with_output())
        .await
        .expect("process should exit promptly")
        .expect("wait_with_output ok");

    assert_eq!(output.status.code(), Some(130));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Operation cancelled by user"));
    assert!(output.stdout.is_empty());
    assert!(!out_file.exists());
}
