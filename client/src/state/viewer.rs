//! Signed-in user shown in the navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loaded once from `/api/users/me` when the app mounts. The backend enforces
//! access; this state only drives the label and the role notice.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use records::{ApiFailure, User};

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl ViewerState {
    pub fn finish(&mut self, result: Result<User, ApiFailure>) {
        self.loading = false;
        self.user = result.ok();
    }

    #[must_use]
    pub fn label(&self) -> String {
        match (&self.user, self.loading) {
            (Some(user), _) => format!("{} ({})", user.display_name(), user.role().as_str()),
            (None, true) => "Loading...".to_owned(),
            (None, false) => "Not signed in".to_owned(),
        }
    }

    /// True when the viewer is known and lacks an admin or moderator role.
    #[must_use]
    pub fn lacks_admin_role(&self) -> bool {
        self.user.as_ref().is_some_and(|u| !u.role().can_administer())
    }
}
