//! Login surface view-model.
//!
//! Holds the observable username/password inputs and the two derived
//! views the UI binds to: whether the login action is enabled and
//! whether a spinner should be visible. Both are pure functions of
//! their inputs, recomputed on every input or state change.

use std::sync::{Arc, Weak};

use tokio::sync::watch;

use crate::session::AuthenticationController;

/// View-model for a credential form driving an [`AuthenticationController`].
pub struct LoginForm {
    controller: Arc<AuthenticationController>,
    username: watch::Sender<String>,
    password: watch::Sender<String>,
    login_enabled: watch::Sender<bool>,
    in_progress: watch::Sender<bool>,
}

impl LoginForm {
    /// Create the form and start mirroring the controller's state into
    /// the derived views.
    #[must_use]
    pub fn new(controller: Arc<AuthenticationController>) -> Arc<Self> {
        let (username, _) = watch::channel(String::new());
        let (password, _) = watch::channel(String::new());
        let (login_enabled, _) = watch::channel(false);
        let (in_progress, _) = watch::channel(controller.state().is_in_progress());

        let form = Arc::new(Self {
            controller,
            username,
            password,
            login_enabled,
            in_progress,
        });

        Self::watch_state(Arc::downgrade(&form));
        form
    }

    /// Recompute the derived views whenever the controller's state moves.
    fn watch_state(form: Weak<Self>) {
        let Some(mut state_rx) = form.upgrade().map(|f| f.controller.subscribe()) else {
            return;
        };
        tokio::spawn(async move {
            while state_rx.changed().await.is_ok() {
                let Some(form) = form.upgrade() else { break };
                form.recompute();
            }
        });
    }

    /// Replace the username input.
    pub fn set_username(&self, value: impl Into<String>) {
        self.username.send_replace(value.into());
        self.recompute();
    }

    /// Replace the password input.
    pub fn set_password(&self, value: impl Into<String>) {
        self.password.send_replace(value.into());
        self.recompute();
    }

    /// Observable username input.
    #[must_use]
    pub fn username(&self) -> watch::Receiver<String> {
        self.username.subscribe()
    }

    /// Observable password input.
    #[must_use]
    pub fn password(&self) -> watch::Receiver<String> {
        self.password.subscribe()
    }

    /// Observable "login action enabled" view: true only when no attempt
    /// is in flight and both inputs are non-blank.
    #[must_use]
    pub fn login_enabled(&self) -> watch::Receiver<bool> {
        self.login_enabled.subscribe()
    }

    /// Observable "progress indicator visible" view.
    #[must_use]
    pub fn in_progress(&self) -> watch::Receiver<bool> {
        self.in_progress.subscribe()
    }

    /// The controller this form drives.
    #[must_use]
    pub fn controller(&self) -> &Arc<AuthenticationController> {
        &self.controller
    }

    /// Start a login attempt from the current input values.
    ///
    /// Callers gate the action on [`Self::login_enabled`]; the form does
    /// not re-validate here.
    pub fn login(&self) {
        let username = self.username.borrow().clone();
        let password = self.password.borrow().clone();
        self.controller.login(&username, &password);
    }

    fn recompute(&self) {
        let in_progress = self.controller.state().is_in_progress();
        let enabled = !in_progress
            && !self.username.borrow().trim().is_empty()
            && !self.password.borrow().trim().is_empty();
        self.in_progress.send_replace(in_progress);
        self.login_enabled.send_replace(enabled);
    }
}
