//! Route-tagged fetch queue
//!
//! Navigation queues fetches tagged with the [`RouteTicket`] current at that
//! moment. The main loop dispatches the queue to worker threads and applies
//! results as they come back over a channel; a result whose ticket no longer
//! matches the shown route is dropped.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::state::App;
use crate::api::{ApiError, Backend};
use crate::model::{
    BranchSet, CommitRequest, FilesResponse, LoadState, RepositoryInfo, RepositoryLocation, Route,
};

/// Identity of one navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTicket {
    pub generation: u64,
    pub route: Route,
}

/// A backend request waiting to be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingFetch {
    /// `/info` and `/branches`
    Repository,
    /// Directory listing of a tree route
    Listing(RouteTicket),
    /// Contents of a blob route
    Blob(RouteTicket),
}

impl PendingFetch {
    pub fn ticket(&self) -> Option<&RouteTicket> {
        match self {
            PendingFetch::Repository => None,
            PendingFetch::Listing(ticket) | PendingFetch::Blob(ticket) => Some(ticket),
        }
    }
}

/// Outcome of a [`PendingFetch`] or of a commit push
#[derive(Debug)]
pub enum FetchResult {
    Repository(Result<(RepositoryInfo, BranchSet), ApiError>),
    Listing(RouteTicket, Result<FilesResponse, ApiError>),
    Blob(RouteTicket, Result<String, ApiError>),
    /// Push of `content` for the route the session was bound to
    Push {
        ticket: RouteTicket,
        content: String,
        result: Result<(), ApiError>,
    },
}

/// Worker side of the backend
///
/// Every request runs on its own thread with a shared handle to the backend;
/// results come back tagged on one channel drained by the UI thread.
pub(crate) struct Fetcher {
    backend: Arc<dyn Backend>,
    tx: Sender<FetchResult>,
    rx: Receiver<FetchResult>,
    in_flight: usize,
}

impl Fetcher {
    pub(crate) fn new(backend: Arc<dyn Backend>) -> Self {
        let (tx, rx) = channel();
        Self {
            backend,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub(crate) fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Run `job` against the backend on a worker thread
    fn spawn<F>(&mut self, name: &str, job: F) -> io::Result<()>
    where
        F: FnOnce(&dyn Backend) -> FetchResult + Send + 'static,
    {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        thread::Builder::new()
            .name(format!("grove-{name}"))
            .spawn(move || {
                // The receiver lives as long as the app
                let _ = tx.send(job(backend.as_ref()));
            })?;
        self.in_flight += 1;
        Ok(())
    }

    fn dispatch(&mut self, fetch: PendingFetch) -> io::Result<()> {
        match fetch {
            PendingFetch::Repository => self.spawn("repository", |backend| {
                let result = backend
                    .info()
                    .and_then(|info| Ok((info, backend.branches()?)));
                FetchResult::Repository(result)
            }),
            PendingFetch::Listing(ticket) => self.spawn("listing", move |backend| {
                let result = match ticket.route.location() {
                    Some(location) => backend.tree(location),
                    None => Err(ApiError::Decode("listing requested for /".to_string())),
                };
                FetchResult::Listing(ticket, result)
            }),
            PendingFetch::Blob(ticket) => self.spawn("blob", move |backend| {
                let result = match ticket.route.location() {
                    Some(location) => backend.blob(location),
                    None => Err(ApiError::Decode("blob requested for /".to_string())),
                };
                FetchResult::Blob(ticket, result)
            }),
        }
    }

    fn push(
        &mut self,
        ticket: RouteTicket,
        location: RepositoryLocation,
        request: CommitRequest,
    ) -> io::Result<()> {
        self.spawn("push", move |backend| FetchResult::Push {
            result: backend.push_blob(&location, &request),
            content: request.content,
            ticket,
        })
    }

    fn try_recv(&mut self) -> Option<FetchResult> {
        let result = self.rx.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(result)
    }

    fn recv_timeout(&mut self, timeout: Duration) -> Option<FetchResult> {
        let result = self.rx.recv_timeout(timeout).ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(result)
    }
}

impl App {
    /// Queue the fetch that fills the current route's view
    pub(crate) fn queue_route_fetch(&mut self) {
        let ticket = self.current_ticket();
        let fetch = match &self.route {
            Route::Root => return,
            Route::Tree(_) => PendingFetch::Listing(ticket),
            Route::Blob(_) => PendingFetch::Blob(ticket),
        };
        debug!(?fetch, "queued");
        self.pending.push_back(fetch);
    }

    /// Requests issued and not yet applied
    pub fn fetches_in_flight(&self) -> usize {
        self.fetcher.in_flight()
    }

    /// Dispatch queued fetches and apply every result that has arrived
    ///
    /// Never waits for the backend; called on every pass of the main loop.
    pub fn resolve_pending_fetches(&mut self) {
        self.dispatch_pending();
        while let Some(result) = self.fetcher.try_recv() {
            self.apply_fetch_result(result);
        }
    }

    /// Dispatch queued fetches, then wait up to `timeout` for one result
    ///
    /// Returns false when nothing arrived in time.
    pub fn wait_for_fetch_result(&mut self, timeout: Duration) -> bool {
        self.dispatch_pending();
        match self.fetcher.recv_timeout(timeout) {
            Some(result) => {
                self.apply_fetch_result(result);
                true
            }
            None => false,
        }
    }

    /// Keep resolving until no request is queued or in flight
    ///
    /// Returns false if `timeout` passed first.
    pub fn wait_for_fetches(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.resolve_pending_fetches();
            if self.pending.is_empty() && self.fetcher.in_flight() == 0 {
                return true;
            }
            let Some(left) = deadline.checked_duration_since(Instant::now()) else {
                return false;
            };
            if !self.wait_for_fetch_result(left) {
                return false;
            }
        }
    }

    /// Hand queued fetches to workers; fetches for a route already left are
    /// never issued
    fn dispatch_pending(&mut self) {
        while let Some(fetch) = self.pending.pop_front() {
            if let Some(ticket) = fetch.ticket()
                && *ticket != self.current_ticket()
            {
                debug!(route = %ticket.route, generation = ticket.generation, "skipping stale fetch");
                continue;
            }
            if let Err(e) = self.fetcher.dispatch(fetch) {
                warn!(error = %e, "failed to start request");
                self.error_message = Some(format!("Failed to start request: {}", e));
            }
        }
    }

    /// Push a commit for the current route on a worker
    pub(crate) fn dispatch_push(
        &mut self,
        location: RepositoryLocation,
        request: CommitRequest,
    ) -> io::Result<()> {
        let ticket = self.current_ticket();
        info!(route = %ticket.route, "pushing commit");
        self.fetcher.push(ticket, location, request)
    }

    /// Apply a fetch result to the view it was issued for
    ///
    /// Listing, blob and push results for any route other than the current
    /// one are discarded.
    pub fn apply_fetch_result(&mut self, result: FetchResult) {
        match result {
            FetchResult::Repository(Ok((info, branches))) => {
                info!(name = %info.name, branches = branches.len(), "repository loaded");
                self.info = LoadState::Loaded(info);
                self.branches = branches;
                if self.route == Route::Root {
                    self.redirect_root();
                }
            }
            FetchResult::Repository(Err(e)) => {
                warn!(error = %e, "repository info failed");
                if self.info.loaded().is_none() {
                    self.info = LoadState::Failed(e.to_string());
                }
                self.error_message = Some(format!("Failed to load repository: {}", e));
            }
            FetchResult::Listing(ticket, result) => {
                if !self.is_current(&ticket) {
                    return;
                }
                let Some(view) = self.tree_view.as_mut() else {
                    return;
                };
                match result {
                    Ok(files) => view.set_listing(files),
                    Err(e) => {
                        warn!(route = %ticket.route, error = %e, "listing failed");
                        view.set_error(e.to_string());
                    }
                }
            }
            FetchResult::Blob(ticket, result) => {
                if !self.is_current(&ticket) {
                    return;
                }
                let Some(view) = self.blob_view.as_mut() else {
                    return;
                };
                let has_editor = view.session().is_some();
                match result {
                    Ok(text) if has_editor => {
                        if !view.refresh_content(text) {
                            debug!(route = %ticket.route, "kept pending edits over refetch");
                        }
                    }
                    Ok(text) => view.set_content(text),
                    Err(e) => {
                        warn!(route = %ticket.route, error = %e, "blob fetch failed");
                        if has_editor {
                            self.error_message = Some(format!("Failed to reload file: {}", e));
                        } else {
                            view.set_error(e.to_string());
                        }
                    }
                }
                self.sync_guard();
            }
            FetchResult::Push {
                ticket,
                content,
                result,
            } => self.apply_push_result(ticket, content, result),
        }
    }

    pub(crate) fn is_current(&self, ticket: &RouteTicket) -> bool {
        let current = *ticket == self.current_ticket();
        if !current {
            debug!(
                route = %ticket.route,
                generation = ticket.generation,
                current = self.generation,
                "discarding stale result"
            );
        }
        current
    }
}
