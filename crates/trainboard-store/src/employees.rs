//! CRUD operations for [`Employee`] records, plus the admin credential check.

use trainboard_shared::{DepartmentId, EmployeeId};

use crate::error::{Result, StoreError};
use crate::models::Employee;
use crate::requests::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::store::Store;

impl Store {
    pub fn create_employee(&mut self, request: CreateEmployeeRequest) -> Result<Employee> {
        request.validate()?;

        let employee = Employee {
            id: EmployeeId::generate(),
            name: request.name,
            email: request.email,
            department_id: request.department_id,
            position: request.position,
            is_admin: request.is_admin,
            password: request.password,
        };

        let mut next = self.snapshot().clone();
        next.employees.push(employee.clone());
        self.commit(next);

        tracing::info!(
            employee_id = %employee.id,
            department_id = %employee.department_id,
            "Employee created"
        );
        Ok(employee)
    }

    pub fn list_employees(&self) -> &[Employee] {
        &self.snapshot().employees
    }

    pub fn get_employee(&self, id: &EmployeeId) -> Result<&Employee> {
        self.snapshot()
            .employee(id)
            .ok_or_else(|| StoreError::not_found("Employee", id))
    }

    /// Employees of one department, or everyone when `department_id` is `None`.
    pub fn list_employees_in(&self, department_id: Option<&DepartmentId>) -> Vec<&Employee> {
        self.list_employees()
            .iter()
            .filter(|e| department_id.map_or(true, |d| &e.department_id == d))
            .collect()
    }

    /// Replace an employee's fields. A department change applies at once;
    /// existing participant rows are not touched.
    pub fn update_employee(&mut self, request: UpdateEmployeeRequest) -> Result<Employee> {
        request.validate()?;
        let previous = self.get_employee(&request.id)?.department_id.clone();

        let fields = request.fields;
        let employee = Employee {
            id: request.id,
            name: fields.name,
            email: fields.email,
            department_id: fields.department_id,
            position: fields.position,
            is_admin: fields.is_admin,
            password: fields.password,
        };

        let mut next = self.snapshot().clone();
        next.employees = next
            .employees
            .iter()
            .map(|e| if e.id == employee.id { employee.clone() } else { e.clone() })
            .collect();
        self.commit(next);

        if previous != employee.department_id {
            tracing::info!(
                employee_id = %employee.id,
                from = %previous,
                to = %employee.department_id,
                "Employee moved to another department"
            );
        } else {
            tracing::info!(employee_id = %employee.id, "Employee updated");
        }
        Ok(employee)
    }

    /// Delete an employee. Returns `true` if a row was deleted.
    ///
    /// Their participant rows stay; views skip rows without an employee.
    pub fn delete_employee(&mut self, id: &EmployeeId) -> Result<bool> {
        let mut next = self.snapshot().clone();
        let before = next.employees.len();
        next.employees.retain(|e| &e.id != id);
        let removed = next.employees.len() < before;
        self.commit(next);

        if removed {
            tracing::info!(employee_id = %id, "Employee deleted");
        }
        Ok(removed)
    }

    /// Find an admin by name and compare the plaintext password.
    pub fn authenticate_admin(&self, username: &str, password: &str) -> Option<&Employee> {
        let Some(user) = self.list_employees().iter().find(|e| e.name == username) else {
            tracing::warn!(username, "Login failed: unknown user");
            return None;
        };
        if !user.is_admin {
            tracing::warn!(username, "Login failed: not an admin");
            return None;
        }
        if user.password != password {
            tracing::warn!(username, "Login failed: wrong password");
            return None;
        }
        Some(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::EmployeeFields;
    use crate::sample::sample_snapshot;

    fn fields(name: &str, department: &str) -> EmployeeFields {
        EmployeeFields {
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            department_id: department.into(),
            position: "Analyst".into(),
            is_admin: false,
            password: String::new(),
        }
    }

    #[test]
    fn create_and_filter_by_department() {
        let mut store = Store::from_snapshot(sample_snapshot());
        let created = store.create_employee(fields("Noor", "4")).unwrap();

        assert_eq!(store.get_employee(&created.id).unwrap().name, "Noor");
        let hr = store.list_employees_in(Some(&"4".into()));
        assert_eq!(hr.len(), 2);
        assert_eq!(store.list_employees_in(None).len(), 7);
    }

    #[test]
    fn create_without_department_is_rejected() {
        let mut store = Store::from_snapshot(sample_snapshot());
        let err = store.create_employee(fields("Noor", "")).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.list_employees().len(), 6);
    }

    #[test]
    fn department_change_leaves_participant_rows() {
        let mut store = Store::from_snapshot(sample_snapshot());
        let before = store.snapshot().participants.clone();

        // Jannessa moves from Engineering to HR.
        store
            .update_employee(UpdateEmployeeRequest {
                id: "2".into(),
                fields: fields("Jannessa", "4"),
            })
            .unwrap();

        assert_eq!(store.get_employee(&"2".into()).unwrap().department_id.as_str(), "4");
        assert_eq!(store.snapshot().participants, before);
    }

    #[test]
    fn update_unknown_employee_is_not_found() {
        let mut store = Store::new();
        let err = store
            .update_employee(UpdateEmployeeRequest { id: "x".into(), fields: fields("X", "1") })
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { kind: "Employee", .. }));
    }

    #[test]
    fn delete_keeps_participant_rows() {
        let mut store = Store::from_snapshot(sample_snapshot());
        assert!(store.delete_employee(&"6".into()).unwrap());
        assert!(!store.delete_employee(&"6".into()).unwrap());
        assert!(store
            .snapshot()
            .participants
            .iter()
            .any(|p| p.employee_id.as_str() == "6"));
    }

    #[test]
    fn admin_login_rules() {
        let store = Store::from_snapshot(sample_snapshot());
        assert!(store.authenticate_admin("1", "1").is_some());
        assert!(store.authenticate_admin("1", "wrong").is_none());
        // Lisa has a password but is not an admin.
        assert!(store.authenticate_admin("Lisa", "345").is_none());
        assert!(store.authenticate_admin("nobody", "").is_none());
    }
}
