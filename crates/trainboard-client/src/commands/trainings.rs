use std::sync::Mutex;

use serde::Serialize;
use tracing::{debug, info};

use trainboard_shared::constants::LOCKED_DEPARTMENT_REASON;
use trainboard_shared::{DepartmentId, TrainingId};
use trainboard_store::{
    CreateTrainingRequest, MembershipChange, Training, TrainingCard, UpdateTrainingRequest,
};

use crate::state::AppState;

/// What the edit form needs to render one training's department picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingFormDto {
    pub training: Training,
    pub department_ids: Vec<DepartmentId>,
    /// Departments shown checked and disabled.
    pub locked_department_ids: Vec<DepartmentId>,
    pub locked_reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrainingDto {
    pub training: Training,
    pub added: Vec<DepartmentId>,
    pub removed: Vec<DepartmentId>,
    pub retained: Vec<DepartmentId>,
}

impl UpdateTrainingDto {
    fn new(training: Training, change: MembershipChange) -> Self {
        Self {
            training,
            added: change.added,
            removed: change.removed,
            retained: change.retained,
        }
    }
}

/// The admin console's list: cards filtered by name or description.
pub fn admin_list_trainings(
    state: &Mutex<AppState>,
    search: String,
) -> Result<Vec<TrainingCard>, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.require_admin()?;

    let snapshot = guard.store.snapshot();
    let cards: Vec<TrainingCard> = snapshot
        .admin_search_trainings(&search)
        .into_iter()
        .filter_map(|t| snapshot.training_card(&t.id))
        .collect();
    debug!(search = %search, count = cards.len(), "Admin training list");
    Ok(cards)
}

pub fn create_training(
    state: &Mutex<AppState>,
    request: CreateTrainingRequest,
) -> Result<Training, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.require_admin()?;

    guard
        .store
        .create_training(request)
        .map_err(|e| format!("Failed to create training: {e}"))
}

pub fn training_form(state: &Mutex<AppState>, training_id: String) -> Result<TrainingFormDto, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.require_admin()?;

    let id = TrainingId::from(training_id);
    let training = guard
        .store
        .get_training(&id)
        .map_err(|e| format!("Failed to load training: {e}"))?
        .clone();

    Ok(TrainingFormDto {
        training,
        department_ids: guard.store.snapshot().targeted_department_ids(&id),
        locked_department_ids: guard
            .store
            .non_removable_department_ids(&id)
            .into_iter()
            .collect(),
        locked_reason: LOCKED_DEPARTMENT_REASON,
    })
}

/// Save the edit form. Locked departments stay even when unchecked; the
/// result lists them under `retained`.
pub fn update_training(
    state: &Mutex<AppState>,
    request: UpdateTrainingRequest,
) -> Result<UpdateTrainingDto, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.require_admin()?;

    let id = request.id.clone();
    let change = guard
        .store
        .update_training(request)
        .map_err(|e| format!("Failed to update training: {e}"))?;
    let training = guard
        .store
        .get_training(&id)
        .map_err(|e| format!("Failed to update training: {e}"))?
        .clone();

    if !change.is_noop() {
        info!(training_id = %id, "Training departments reconciled");
    }
    Ok(UpdateTrainingDto::new(training, change))
}

pub fn delete_training(state: &Mutex<AppState>, training_id: String) -> Result<bool, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.require_admin()?;

    guard
        .store
        .delete_training(&TrainingId::from(training_id))
        .map_err(|e| format!("Failed to delete training: {e}"))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use trainboard_store::TrainingFields;

    use super::*;
    use crate::commands::test_support::{admin_state, guest_state};

    fn fields(departments: &[&str]) -> TrainingFields {
        TrainingFields {
            name: "Leadership Training".into(),
            date: NaiveDate::from_ymd_opt(2025, 12, 8).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            description: "Develop your leadership skills".into(),
            department_ids: departments.iter().map(|&d| d.into()).collect(),
        }
    }

    #[test]
    fn form_shows_locked_departments_with_reason() {
        let state = admin_state();
        let form = training_form(&state, "2".into()).unwrap();
        assert_eq!(form.department_ids, vec![DepartmentId::from("2")]);
        // Chen (Marketing) acknowledged training 2.
        assert_eq!(form.locked_department_ids, vec![DepartmentId::from("2")]);
        assert_eq!(form.locked_reason, LOCKED_DEPARTMENT_REASON);
    }

    #[test]
    fn unchecking_a_locked_department_keeps_it() {
        let state = admin_state();
        let dto = update_training(
            &state,
            UpdateTrainingRequest {
                id: "2".into(),
                fields: fields(&["4"]),
            },
        )
        .unwrap();
        assert_eq!(dto.retained, vec![DepartmentId::from("2")]);
        assert_eq!(dto.added, vec![DepartmentId::from("4")]);
        assert!(dto.removed.is_empty());
    }

    #[test]
    fn create_without_department_is_rejected() {
        let state = admin_state();
        let err = create_training(&state, fields(&[])).unwrap_err();
        assert_eq!(err, "Failed to create training: Please select at least one department");
    }

    #[test]
    fn guests_cannot_touch_trainings() {
        let state = guest_state();
        assert!(create_training(&state, fields(&["1"])).is_err());
        assert!(training_form(&state, "1".into()).is_err());
        assert!(delete_training(&state, "1".into()).is_err());
        assert!(admin_list_trainings(&state, String::new()).is_err());
    }

    #[test]
    fn admin_search_matches_description() {
        let state = admin_state();
        let cards = admin_list_trainings(&state, "PLANNING".into()).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].training.id.as_str(), "3");

        assert_eq!(admin_list_trainings(&state, String::new()).unwrap().len(), 3);
        assert!(delete_training(&state, "3".into()).unwrap());
        assert_eq!(admin_list_trainings(&state, String::new()).unwrap().len(), 2);
    }
}
