//! Common test utilities for integration and scenario tests.
//!
//! [`FakeBackend`] serves a small scripted repository from memory and
//! records every request, so tests can drive [`App`] without a server.
//! Requests run on the app's worker threads; [`FakeBackend::hold`] keeps one
//! in flight until the test releases it.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use grove::api::{ApiError, Backend};
use grove::app::App;
use grove::model::{
    BranchSet, CommitRequest, FileInfo, FilesResponse, RepositoryInfo, RepositoryLocation, Route,
};

/// Scripted repository contents and request log
#[derive(Debug, Default)]
pub struct FakeRepo {
    pub info: RepositoryInfo,
    pub branches: Vec<String>,
    /// Listings keyed by `branch:path`
    pub trees: HashMap<String, FilesResponse>,
    /// File contents keyed by `branch:path`
    pub blobs: HashMap<String, String>,
    /// Status returned by pushes; `None` accepts them
    pub push_status: Option<u16>,
    /// Accepted and rejected pushes, in order
    pub pushes: Vec<(RepositoryLocation, CommitRequest)>,
    /// Request log, e.g. `GET /tree/main/src`
    pub calls: Vec<String>,
    /// Requests that wait for a [`Gate`] release, keyed like `calls`
    pub gates: HashMap<String, Receiver<()>>,
}

/// Releases a request held by [`FakeBackend::hold`]
pub struct Gate(Sender<()>);

impl Gate {
    pub fn release(self) {
        let _ = self.0.send(());
    }
}

fn key_of(location: &RepositoryLocation) -> String {
    format!("{}:{}", location.branch(), location.splat())
}

/// In-memory [`Backend`] sharing its state with the test
#[derive(Debug, Clone, Default)]
pub struct FakeBackend(pub Arc<Mutex<FakeRepo>>);

impl FakeBackend {
    pub fn repo(&self) -> MutexGuard<'_, FakeRepo> {
        self.0.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<String> {
        self.repo().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.repo().calls.clear();
    }

    /// Make the next `call` (e.g. `GET /tree/main/src`) wait for the gate
    pub fn hold(&self, call: &str) -> Gate {
        let (tx, rx) = mpsc::channel();
        self.repo().gates.insert(call.to_string(), rx);
        Gate(tx)
    }

    /// Log `call` and wait if it is held; the lock is released meanwhile
    fn enter(&self, call: String) {
        let gate = {
            let mut repo = self.repo();
            let gate = repo.gates.remove(&call);
            repo.calls.push(call);
            gate
        };
        if let Some(gate) = gate {
            let _ = gate.recv();
        }
    }

    pub fn set_tree(&self, branch: &str, path: &str, trees: &[&str], blobs: &[&str]) {
        let files = FilesResponse {
            trees: trees.iter().map(|name| file_info(name, "1700000000")).collect(),
            blobs: blobs.iter().map(|name| file_info(name, "1700000000")).collect(),
        };
        self.repo().trees.insert(format!("{branch}:{path}"), files);
    }

    pub fn set_blob(&self, branch: &str, path: &str, content: &str) {
        self.repo()
            .blobs
            .insert(format!("{branch}:{path}"), content.to_string());
    }

    pub fn reject_pushes(&self, status: u16) {
        self.repo().push_status = Some(status);
    }
}

fn not_found(what: String) -> ApiError {
    ApiError::Status {
        status: 404,
        body: format!("{what} not found"),
    }
}

impl Backend for FakeBackend {
    fn info(&self) -> Result<RepositoryInfo, ApiError> {
        self.enter("GET /info".to_string());
        Ok(self.repo().info.clone())
    }

    fn branches(&self) -> Result<BranchSet, ApiError> {
        self.enter("GET /branches".to_string());
        Ok(BranchSet::new(self.repo().branches.clone()))
    }

    fn tree(&self, location: &RepositoryLocation) -> Result<FilesResponse, ApiError> {
        self.enter(format!("GET /tree/{}/{}", location.branch(), location.splat()));
        let key = key_of(location);
        self.repo().trees.get(&key).cloned().ok_or_else(|| not_found(key))
    }

    fn blob(&self, location: &RepositoryLocation) -> Result<String, ApiError> {
        self.enter(format!("GET /blob/{}/{}", location.branch(), location.splat()));
        let key = key_of(location);
        self.repo().blobs.get(&key).cloned().ok_or_else(|| not_found(key))
    }

    fn push_blob(
        &self,
        location: &RepositoryLocation,
        request: &CommitRequest,
    ) -> Result<(), ApiError> {
        self.enter(format!("POST /blob/{}/{}", location.branch(), location.splat()));
        let mut repo = self.repo();
        repo.pushes.push((location.clone(), request.clone()));
        match repo.push_status {
            None => {
                let key = key_of(location);
                repo.blobs.insert(key, request.content.clone());
                Ok(())
            }
            Some(status) => Err(ApiError::Status {
                status,
                body: "push rejected".to_string(),
            }),
        }
    }
}

pub fn file_info(name: &str, timestamp: &str) -> FileInfo {
    FileInfo {
        name: name.to_string(),
        last_commit_message: format!("update {name}"),
        last_commit_timestamp: timestamp.to_string(),
        last_commit_id: "0123abcd".to_string(),
    }
}

/// Repository "demo" with branches `main` and `dev`
///
/// ```text
/// main: README.md, src/app.ts, src/components/
/// dev:  README.md
/// ```
pub fn sample_backend() -> FakeBackend {
    let backend = FakeBackend::default();
    {
        let mut repo = backend.repo();
        repo.info = RepositoryInfo {
            name: "demo".to_string(),
            main_branch: Some("main".to_string()),
        };
        repo.branches = vec!["main".to_string(), "dev".to_string()];
    }
    backend.set_tree("main", "", &["src"], &["README.md"]);
    backend.set_tree("main", "src", &["components"], &["app.ts"]);
    backend.set_tree("main", "src/components", &[], &[]);
    backend.set_tree("dev", "", &[], &["README.md"]);
    backend.set_blob("main", "README.md", "# demo\n");
    backend.set_blob("main", "src/app.ts", "export const x = 1;\n");
    backend.set_blob("dev", "README.md", "# demo (dev)\n");
    backend
}

/// App showing `path` before anything was dispatched
pub fn new_app(backend: &FakeBackend, path: &str) -> App {
    let route = Route::parse(path).expect("valid route");
    App::new(Arc::new(backend.clone()), route)
}

/// App opened at `path` with every queued fetch resolved
pub fn open_app(backend: &FakeBackend, path: &str) -> App {
    let mut app = new_app(backend, path);
    settle(&mut app);
    app
}

/// Dispatch everything queued and apply every result
pub fn settle(app: &mut App) {
    assert!(
        app.wait_for_fetches(Duration::from_secs(5)),
        "fetches still in flight"
    );
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(key(code));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Route path of `app`
pub fn path(app: &App) -> String {
    app.route.to_path()
}

/// Select the tree row named `name` and activate it
pub fn open_row(app: &mut App, name: &str) {
    let index = app
        .tree_view
        .as_ref()
        .and_then(|view| view.rows())
        .and_then(|rows| rows.iter().position(|row| row.name == name))
        .expect("row present");
    press(app, KeyCode::Char('g'));
    for _ in 0..index {
        press(app, KeyCode::Char('j'));
    }
    press(app, KeyCode::Enter);
    settle(app);
}
