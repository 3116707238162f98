use std::sync::Mutex;

use serde::Serialize;
use tracing::info;

use trainboard_shared::DepartmentId;
use trainboard_store::{CreateDepartmentRequest, Department, Store, UpdateDepartmentRequest};

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub id: String,
    pub name: String,
    pub color: String,
    pub employee_count: usize,
}

impl DepartmentDto {
    fn from_department(d: &Department, store: &Store) -> Self {
        Self {
            id: d.id.to_string(),
            name: d.name.clone(),
            color: d.color.clone(),
            employee_count: store.department_employee_count(&d.id),
        }
    }
}

pub fn list_departments(state: &Mutex<AppState>) -> Result<Vec<DepartmentDto>, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    Ok(guard
        .store
        .list_departments()
        .iter()
        .map(|d| DepartmentDto::from_department(d, &guard.store))
        .collect())
}

pub fn create_department(
    state: &Mutex<AppState>,
    request: CreateDepartmentRequest,
) -> Result<DepartmentDto, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.require_admin()?;

    let department = guard
        .store
        .create_department(request)
        .map_err(|e| format!("Failed to create department: {e}"))?;

    info!(department_id = %department.id, "Department created via command");
    Ok(DepartmentDto::from_department(&department, &guard.store))
}

pub fn update_department(
    state: &Mutex<AppState>,
    request: UpdateDepartmentRequest,
) -> Result<DepartmentDto, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.require_admin()?;

    let department = guard
        .store
        .update_department(request)
        .map_err(|e| format!("Failed to update department: {e}"))?;

    Ok(DepartmentDto::from_department(&department, &guard.store))
}

/// Returns `false` when the department did not exist. A department that
/// still has employees is refused with the count in the message.
pub fn delete_department(state: &Mutex<AppState>, department_id: String) -> Result<bool, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.require_admin()?;

    guard
        .store
        .delete_department(&DepartmentId::from(department_id))
        .map_err(|e| format!("Failed to delete department: {e}"))
}
