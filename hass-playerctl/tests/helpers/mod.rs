//! Test helpers for hass-playerctl integration tests
//!
//! Provides a stand-in for the playerctl executable: a shell script in a
//! temporary directory that records each invocation and then behaves as
//! scripted (print, fail, hang).

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

use hass_playerctl::{build_router, AppState, Playerctl};

/// Scripted replacement for playerctl
pub struct MockPlayerctl {
    temp_dir: TempDir,
    script: PathBuf,
    log: PathBuf,
}

impl MockPlayerctl {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let script = temp_dir.path().join("playerctl");
        let log = temp_dir.path().join("invocations.log");
        Self {
            temp_dir,
            script,
            log,
        }
    }

    /// Script that logs its arguments and then runs `body`
    pub fn with_body(body: &str) -> Self {
        Self::new().install(body)
    }

    /// Exits 0 after writing `stdout` verbatim
    pub fn succeeding(stdout: &str) -> Self {
        let mock = Self::new();
        let out = mock.write_fixture("stdout.txt", stdout);
        mock.install(&format!("cat '{}'\nexit 0", out.display()))
    }

    /// Exits with `code` after writing `stderr` verbatim
    pub fn failing(code: i32, stderr: &str) -> Self {
        let mock = Self::new();
        let err = mock.write_fixture("stderr.txt", stderr);
        mock.install(&format!("cat '{}' >&2\nexit {}", err.display(), code))
    }

    /// Never exits on its own
    pub fn hanging() -> Self {
        Self::with_body("exec sleep 60")
    }

    pub fn path(&self) -> &Path {
        &self.script
    }

    /// Runner pointing at this script with the standard timeout
    pub fn playerctl(&self) -> Playerctl {
        Playerctl::new(&self.script)
    }

    /// Router wired to this script with the standard timeout
    pub fn router(&self) -> Router {
        build_router(AppState::new(self.playerctl()))
    }

    /// Router wired to this script with a custom timeout
    pub fn router_with_timeout(&self, timeout: Duration) -> Router {
        build_router(AppState::new(self.playerctl().with_timeout(timeout)))
    }

    /// One entry per invocation, formatted as `{argc}:{args}`
    pub fn invocations(&self) -> Vec<String> {
        match fs::read_to_string(&self.log) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    fn write_fixture(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    fn install(self, body: &str) -> Self {
        let content = format!(
            "#!/bin/sh\necho \"$#:$*\" >> '{}'\n{}\n",
            self.log.display(),
            body
        );
        fs::write(&self.script, content).expect("Failed to write mock script");
        fs::set_permissions(&self.script, fs::Permissions::from_mode(0o755))
            .expect("Failed to make mock script executable");
        self
    }
}

/// Response fields the tests look at
pub struct TextResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TextResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Send one request through `app` and collect the response
pub async fn send(app: &Router, method: Method, uri: &str) -> TextResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body")
        .to_vec();

    TextResponse {
        status,
        content_type,
        body,
    }
}
