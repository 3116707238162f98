use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::info;

use trainboard_shared::constants::INVALID_CREDENTIALS;

use crate::state::{AdminSession, AppState};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub is_admin: bool,
    pub name: Option<String>,
    pub instance_name: String,
}

impl SessionDto {
    fn of(state: &AppState) -> Self {
        Self {
            is_admin: state.admin.is_some(),
            name: state.admin.as_ref().map(|a| a.name.clone()),
            instance_name: state.config.instance_name.clone(),
        }
    }
}

/// Log in as an admin. Only employees flagged as admin may log in, and
/// every failure reports the same message.
pub fn login(state: &Mutex<AppState>, request: LoginRequest) -> Result<SessionDto, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    let session = guard
        .store
        .authenticate_admin(&request.username, &request.password)
        .map(|e| AdminSession {
            employee_id: e.id.clone(),
            name: e.name.clone(),
        })
        .ok_or_else(|| INVALID_CREDENTIALS.to_string())?;

    info!(employee_id = %session.employee_id, "Admin logged in");
    guard.admin = Some(session);
    Ok(SessionDto::of(&guard))
}

pub fn logout(state: &Mutex<AppState>) -> Result<SessionDto, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    if let Some(session) = guard.admin.take() {
        info!(employee_id = %session.employee_id, "Admin logged out");
    }
    Ok(SessionDto::of(&guard))
}

pub fn get_session(state: &Mutex<AppState>) -> Result<SessionDto, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    Ok(SessionDto::of(&guard))
}
