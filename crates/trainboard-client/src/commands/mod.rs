//! Command handlers consumed by the presentation layer.
//!
//! Each sub-module groups related commands by domain.  Every handler takes
//! the shared `&Mutex<AppState>`, returns `Result<_, String>` so errors can be
//! shown as-is, and requires an admin session when it mutates the store.

pub mod catalog;
pub mod departments;
pub mod employees;
pub mod participants;
pub mod session;
pub mod trainings;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use crate::config::ClientConfig;
    use crate::state::{AdminSession, AppState};

    /// Sample data, nobody logged in.
    pub fn guest_state() -> Mutex<AppState> {
        Mutex::new(AppState::from_config(ClientConfig::default()).unwrap())
    }

    /// Sample data with the demo admin logged in.
    pub fn admin_state() -> Mutex<AppState> {
        let state = guest_state();
        state.lock().unwrap().admin = Some(AdminSession {
            employee_id: "1".into(),
            name: "1".into(),
        });
        state
    }
}
