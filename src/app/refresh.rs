//! Manual reload of the current route

use super::loader::PendingFetch;
use super::state::App;

impl App {
    /// Re-fetch repository data and the current route
    ///
    /// Reloading a blob with unsaved changes asks first, like any other
    /// navigation.
    pub fn refresh(&mut self) {
        if !self.pending.contains(&PendingFetch::Repository) {
            self.pending.push_back(PendingFetch::Repository);
        }
        let route = self.route.clone();
        self.request_navigation(route);
    }
}
