use std::sync::Mutex;

use serde::Serialize;

use trainboard_shared::{DepartmentId, EmployeeId};
use trainboard_store::{
    CreateEmployeeRequest, Employee, EmployeeTraining, Snapshot, UpdateEmployeeRequest,
};

use crate::state::AppState;

/// An employee as the dashboard lists them. The password never leaves the
/// store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department_id: String,
    pub department_name: Option<String>,
    pub position: String,
    pub is_admin: bool,
}

impl EmployeeDto {
    fn from_employee(e: &Employee, snapshot: &Snapshot) -> Self {
        Self {
            id: e.id.to_string(),
            name: e.name.clone(),
            email: e.email.clone(),
            department_id: e.department_id.to_string(),
            department_name: snapshot.department(&e.department_id).map(|d| d.name.clone()),
            position: e.position.clone(),
            is_admin: e.is_admin,
        }
    }
}

/// Everyone, or only the members of `department_id`.
pub fn list_employees(
    state: &Mutex<AppState>,
    department_id: Option<String>,
) -> Result<Vec<EmployeeDto>, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    let filter = department_id.filter(|d| !d.is_empty()).map(DepartmentId::from);
    let snapshot = guard.store.snapshot();
    Ok(guard
        .store
        .list_employees_in(filter.as_ref())
        .into_iter()
        .map(|e| EmployeeDto::from_employee(e, snapshot))
        .collect())
}

pub fn create_employee(
    state: &Mutex<AppState>,
    request: CreateEmployeeRequest,
) -> Result<EmployeeDto, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.require_admin()?;

    let employee = guard
        .store
        .create_employee(request)
        .map_err(|e| format!("Failed to create employee: {e}"))?;
    Ok(EmployeeDto::from_employee(&employee, guard.store.snapshot()))
}

pub fn update_employee(
    state: &Mutex<AppState>,
    request: UpdateEmployeeRequest,
) -> Result<EmployeeDto, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.require_admin()?;

    let employee = guard
        .store
        .update_employee(request)
        .map_err(|e| format!("Failed to update employee: {e}"))?;
    Ok(EmployeeDto::from_employee(&employee, guard.store.snapshot()))
}

pub fn delete_employee(state: &Mutex<AppState>, employee_id: String) -> Result<bool, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.require_admin()?;

    guard
        .store
        .delete_employee(&EmployeeId::from(employee_id))
        .map_err(|e| format!("Failed to delete employee: {e}"))
}

/// The trainings one employee has a participant row for, with their flags.
pub fn employee_history(
    state: &Mutex<AppState>,
    employee_id: String,
) -> Result<Vec<EmployeeTraining>, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    let id = EmployeeId::from(employee_id);
    guard
        .store
        .get_employee(&id)
        .map_err(|e| format!("Failed to load history: {e}"))?;
    Ok(guard.store.snapshot().employee_history(&id))
}
