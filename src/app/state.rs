//! Application state and view management

use std::cell::Cell;
use std::collections::VecDeque;
use std::sync::Arc;

use super::guard::NavigationGuard;
use super::loader::{Fetcher, PendingFetch, RouteTicket};
use super::navigation::HistoryMode;
use crate::api::Backend;
use crate::model::{BranchSet, LoadState, Notification, RepositoryInfo, Route};
use crate::ui::components::{CommitForm, Dialog};
use crate::ui::views::{BlobView, TreeView};

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Tree,
    Blob,
    Help,
}

/// The main application state
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// View to return to when help closes
    pub(crate) previous_view: Option<View>,
    /// Worker threads running backend requests
    pub(crate) fetcher: Fetcher,
    /// Repository name and main branch
    pub info: LoadState<RepositoryInfo>,
    /// Branches offered by the branch selector
    pub branches: BranchSet,
    /// Route currently shown
    pub route: Route,
    /// Incremented on every navigation; tags fetches
    pub(crate) generation: u64,
    /// Routes left through navigation (most recent last)
    pub(crate) history_back: Vec<Route>,
    /// Routes left through "back" (most recent last)
    pub(crate) history_forward: Vec<Route>,
    /// Tree view state (when a tree route is shown)
    pub tree_view: Option<TreeView>,
    /// Blob view state, owns the edit session (when a blob route is shown)
    pub blob_view: Option<BlobView>,
    /// Fetches to hand to workers on the next loop pass
    pub(crate) pending: VecDeque<PendingFetch>,
    /// Active dialog (blocks other input when Some)
    pub active_dialog: Option<Dialog>,
    /// Commit form (blocks view input when Some)
    pub commit_form: Option<CommitForm>,
    /// Exit guard
    pub guard: NavigationGuard,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Help panel scroll offset
    pub(crate) help_scroll: u16,
    /// Last known frame height (updated during render)
    pub(crate) last_frame_height: Cell<u16>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("running", &self.running)
            .field("current_view", &self.current_view)
            .field("route", &self.route)
            .field("generation", &self.generation)
            .field("pending", &self.pending)
            .field("in_flight", &self.fetcher.in_flight())
            .finish_non_exhaustive()
    }
}

impl App {
    /// Create the app showing `start`
    ///
    /// Nothing is fetched here; repository data and the first route are
    /// queued and dispatched on the first loop pass.
    pub fn new(backend: Arc<dyn Backend>, start: Route) -> Self {
        let mut app = Self {
            running: true,
            current_view: View::Tree,
            previous_view: None,
            fetcher: Fetcher::new(backend),
            info: LoadState::Loading,
            branches: BranchSet::default(),
            route: Route::Root,
            generation: 0,
            history_back: Vec::new(),
            history_forward: Vec::new(),
            tree_view: None,
            blob_view: None,
            pending: VecDeque::new(),
            active_dialog: None,
            commit_form: None,
            guard: NavigationGuard::default(),
            error_message: None,
            notification: None,
            help_scroll: 0,
            last_frame_height: Cell::new(24),
        };

        app.pending.push_back(PendingFetch::Repository);
        app.navigate(start, HistoryMode::Replace);
        app
    }

    /// Ticket of the route currently shown
    pub fn current_ticket(&self) -> RouteTicket {
        RouteTicket {
            generation: self.generation,
            route: self.route.clone(),
        }
    }

    /// Name shown in the title bar and breadcrumb root
    pub fn repo_name(&self) -> &str {
        self.info
            .loaded()
            .map(|info| info.name.as_str())
            .unwrap_or("repository")
    }

    /// Fetches queued and not yet dispatched
    pub fn pending_fetches(&self) -> impl Iterator<Item = &PendingFetch> {
        self.pending.iter()
    }

    pub fn can_go_back(&self) -> bool {
        !self.history_back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.history_forward.is_empty()
    }

    pub(crate) fn show_help(&mut self) {
        if self.current_view != View::Help {
            self.previous_view = Some(self.current_view);
            self.current_view = View::Help;
            self.help_scroll = 0;
        }
    }

    pub(crate) fn close_help(&mut self) {
        self.current_view = self.previous_view.take().unwrap_or(View::Tree);
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    pub(crate) fn notify_success(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::success(msg));
    }

    pub(crate) fn notify_info(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::info(msg));
    }

    pub(crate) fn notify_warning(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::warning(msg));
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
