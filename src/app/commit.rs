//! Commit form handling and push

use tracing::{info, warn};

use super::loader::{PendingFetch, RouteTicket};
use super::state::App;
use crate::api::ApiError;
use crate::model::EditSession;
use crate::ui::components::{CommitForm, CommitFormAction};

impl App {
    /// Open the commit form; only offered while there are unsaved changes
    pub(crate) fn open_commit_form(&mut self) {
        if self.has_unsaved_changes() {
            self.commit_form = Some(CommitForm::new());
        }
    }

    pub(crate) fn handle_commit_form_action(&mut self, action: CommitFormAction) {
        match action {
            CommitFormAction::Submit => {
                self.submit_commit();
            }
            CommitFormAction::Cancel => self.commit_form = None,
        }
    }

    /// Start pushing the edited file with the form's draft
    ///
    /// Returns true when the push was handed to a worker. The form stays
    /// open and frozen until the result comes back.
    pub fn submit_commit(&mut self) -> bool {
        let Some(form) = &self.commit_form else {
            return false;
        };
        if form.submitting || !form.can_submit() {
            return false;
        }
        let Some(view) = &self.blob_view else {
            return false;
        };
        let Some(content) = view
            .session()
            .and_then(EditSession::pending)
            .map(str::to_string)
        else {
            return false;
        };

        let location = view.location().clone();
        let request = form.draft.to_request(content);
        if let Err(e) = self.dispatch_push(location, request) {
            warn!(error = %e, "failed to start push");
            self.error_message = Some(format!("Commit failed: {}", e));
            return false;
        }
        if let Some(form) = self.commit_form.as_mut() {
            form.submitting = true;
        }
        true
    }

    /// Apply the outcome of a push
    ///
    /// On failure the form stays open with its draft and the session stays
    /// dirty. A result for a route already left only unfreezes the form.
    pub(crate) fn apply_push_result(
        &mut self,
        ticket: RouteTicket,
        content: String,
        result: Result<(), ApiError>,
    ) {
        if let Some(form) = self.commit_form.as_mut() {
            form.submitting = false;
        }
        if !self.is_current(&ticket) {
            return;
        }

        match result {
            Ok(()) => {
                let mut file_name = String::new();
                if let Some(view) = self.blob_view.as_mut() {
                    view.commit_succeeded(&content);
                    file_name = view.location().file_name().unwrap_or_default().to_string();
                }
                info!(route = %ticket.route, "commit pushed");
                self.commit_form = None;
                self.sync_guard();
                self.notify_success(format!("Committed {}", file_name));
                self.pending.push_back(PendingFetch::Blob(ticket));
            }
            Err(e) => {
                warn!(route = %ticket.route, error = %e, "commit rejected");
                self.error_message = Some(format!("Commit failed: {}", e));
            }
        }
    }
}
