//! Route changes and history
//!
//! Every screen change goes through [`App::navigate`]: a new generation is
//! started, the view for the route is created in its loading state, and the
//! fetch that fills it is queued.

use tracing::{debug, info};

use super::state::{App, View};
use crate::model::{LoadState, Route, default_route};
use crate::ui::components::{Dialog, DialogCallback, SelectItem};
use crate::ui::views::{BlobView, TreeView};

/// How a navigation affects history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HistoryMode {
    /// New entry; the forward stack is cleared
    Push,
    /// History is left alone (redirects, traversal, reload)
    Replace,
}

impl App {
    /// Navigate to `target` unless unsaved changes need confirmation first
    pub fn request_navigation(&mut self, target: Route) {
        if self.has_unsaved_changes() {
            self.confirm_discard(DialogCallback::DiscardAndNavigate { target });
            return;
        }
        self.navigate_to(target);
    }

    /// Navigate without asking; the current route is reloaded in place
    pub(crate) fn navigate_to(&mut self, target: Route) {
        let mode = if target == self.route {
            HistoryMode::Replace
        } else {
            HistoryMode::Push
        };
        self.navigate(target, mode);
    }

    pub(crate) fn navigate(&mut self, target: Route, mode: HistoryMode) {
        if mode == HistoryMode::Push && self.route != Route::Root {
            self.history_back.push(self.route.clone());
            self.history_forward.clear();
        }

        self.generation += 1;
        self.commit_form = None;
        info!(route = %target, generation = self.generation, "navigate");

        match &target {
            Route::Root => {
                self.tree_view = None;
                self.blob_view = None;
                self.current_view = View::Tree;
            }
            Route::Tree(location) => {
                self.tree_view = Some(TreeView::new(location.clone()));
                self.blob_view = None;
                self.current_view = View::Tree;
            }
            Route::Blob(location) => {
                self.blob_view = Some(BlobView::new(location.clone()));
                self.tree_view = None;
                self.current_view = View::Blob;
            }
        }
        self.route = target;
        self.sync_guard();

        if self.route == Route::Root {
            self.redirect_root();
        } else {
            self.queue_route_fetch();
        }
    }

    /// Replace `/` with the main branch's tree root once it is known
    pub(crate) fn redirect_root(&mut self) {
        let LoadState::Loaded(info) = &self.info else {
            // Redirected when the repository fetch completes
            return;
        };
        match default_route(info, &self.branches) {
            Some(route) => {
                debug!(to = %route, "redirecting /");
                self.navigate(route, HistoryMode::Replace);
            }
            None => {
                self.error_message = Some("Repository has no branches".to_string());
            }
        }
    }

    pub fn go_back(&mut self) {
        self.request_traverse(false);
    }

    pub fn go_forward(&mut self) {
        self.request_traverse(true);
    }

    fn request_traverse(&mut self, forward: bool) {
        let available = if forward {
            self.can_go_forward()
        } else {
            self.can_go_back()
        };
        if !available {
            return;
        }
        if self.has_unsaved_changes() {
            self.confirm_discard(DialogCallback::DiscardAndTraverse { forward });
            return;
        }
        self.traverse(forward);
    }

    /// Move one step through history without asking
    pub(crate) fn traverse(&mut self, forward: bool) {
        let (from, to) = if forward {
            (&mut self.history_forward, &mut self.history_back)
        } else {
            (&mut self.history_back, &mut self.history_forward)
        };
        let Some(target) = from.pop() else {
            return;
        };
        to.push(self.route.clone());
        self.navigate(target, HistoryMode::Replace);
    }

    /// Branch selector with the current branch preselected
    pub(crate) fn open_branch_selector(&mut self) {
        if self.branches.is_empty() {
            self.notify_warning("Branches not loaded yet");
            return;
        }
        let current = self.route.location().map(|loc| loc.branch().to_string());
        let items: Vec<SelectItem> = self
            .branches
            .iter()
            .map(|branch| SelectItem::new(branch, branch))
            .collect();
        let initial = self
            .branches
            .iter()
            .position(|branch| Some(branch) == current.as_deref())
            .unwrap_or(0);

        self.active_dialog = Some(Dialog::select(
            "Branch",
            "Switch to branch:",
            items,
            initial,
            DialogCallback::SwitchBranch,
        ));
    }

    /// Show the current route on another branch
    ///
    /// The path is kept even if the branch lacks it; the fetch then fails
    /// and the view shows the error.
    pub(crate) fn switch_branch(&mut self, branch: &str) {
        if self.route.location().map(|loc| loc.branch()) == Some(branch) {
            return;
        }
        let target = self.route.with_branch(branch);
        self.request_navigation(target);
    }

    /// Breadcrumb jump: ancestors of the current location
    pub(crate) fn open_path_selector(&mut self) {
        let Some(location) = self.route.location() else {
            return;
        };
        let items: Vec<SelectItem> = location
            .breadcrumbs(self.repo_name())
            .into_iter()
            .filter(|crumb| crumb.navigable)
            .enumerate()
            .map(|(depth, crumb)| {
                let label = format!("{}{}", "  ".repeat(depth), crumb.label);
                SelectItem::new(label, Route::Tree(crumb.location).to_path())
            })
            .collect();
        if items.is_empty() {
            self.notify_info("Already at the repository root");
            return;
        }

        let initial = items.len() - 1;
        self.active_dialog = Some(Dialog::select(
            "Path",
            "Jump to:",
            items,
            initial,
            DialogCallback::JumpToPath,
        ));
    }

    pub(crate) fn jump_to_path(&mut self, path: &str) {
        match Route::parse(path) {
            Ok(route) => self.request_navigation(route),
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }
}
