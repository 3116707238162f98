use std::sync::Mutex;

use trainboard_shared::{EmployeeId, ParticipantFilter, ParticipantFlag, TrainingId};
use trainboard_store::{Participant, RosterEntry};

use crate::state::AppState;

/// Participants of one training joined with their employee.
pub fn training_roster(
    state: &Mutex<AppState>,
    training_id: String,
    filter: ParticipantFilter,
) -> Result<Vec<RosterEntry>, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.require_admin()?;

    let id = TrainingId::from(training_id);
    guard
        .store
        .get_training(&id)
        .map_err(|e| format!("Failed to load participants: {e}"))?;
    Ok(guard.store.snapshot().roster(&id, filter))
}

pub fn set_participant_flag(
    state: &Mutex<AppState>,
    training_id: String,
    employee_id: String,
    flag: ParticipantFlag,
    value: bool,
) -> Result<Participant, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.require_admin()?;

    guard
        .store
        .set_participant_flag(
            &TrainingId::from(training_id),
            &EmployeeId::from(employee_id),
            flag,
            value,
        )
        .map_err(|e| format!("Failed to update participant: {e}"))
}

pub fn toggle_participant_flag(
    state: &Mutex<AppState>,
    training_id: String,
    employee_id: String,
    flag: ParticipantFlag,
) -> Result<Participant, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.require_admin()?;

    guard
        .store
        .toggle_participant_flag(
            &TrainingId::from(training_id),
            &EmployeeId::from(employee_id),
            flag,
        )
        .map_err(|e| format!("Failed to update participant: {e}"))
}
