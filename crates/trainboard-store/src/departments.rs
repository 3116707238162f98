//! CRUD operations for [`Department`] records.

use rand::seq::SliceRandom;
use rand::Rng;
use trainboard_shared::constants::DEPARTMENT_PALETTE;
use trainboard_shared::{DepartmentId, EmployeeId};

use crate::error::{Result, StoreError};
use crate::models::{Department, Employee};
use crate::requests::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::store::Store;

impl Store {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Create a department with a random palette color and move the
    /// selected employees into it.
    pub fn create_department(&mut self, request: CreateDepartmentRequest) -> Result<Department> {
        self.create_department_with(request, &mut rand::thread_rng())
    }

    pub fn create_department_with<R: Rng + ?Sized>(
        &mut self,
        request: CreateDepartmentRequest,
        rng: &mut R,
    ) -> Result<Department> {
        request.validate()?;

        let department = Department {
            id: DepartmentId::generate(),
            name: request.name,
            color: pick_color(rng),
        };

        let mut next = self.snapshot().clone();
        next.departments.push(department.clone());
        next.employees = move_into(&next.employees, &request.employee_ids, &department.id);
        self.commit(next);

        tracing::info!(
            department_id = %department.id,
            name = %department.name,
            members = request.employee_ids.len(),
            "Department created"
        );
        Ok(department)
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    pub fn list_departments(&self) -> &[Department] {
        &self.snapshot().departments
    }

    pub fn get_department(&self, id: &DepartmentId) -> Result<&Department> {
        self.snapshot()
            .department(id)
            .ok_or_else(|| StoreError::not_found("Department", id))
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Rename a department and move the selected employees into it.
    ///
    /// Current members missing from `employee_ids` keep their department:
    /// leaving someone out does not evict them.
    pub fn update_department(&mut self, request: UpdateDepartmentRequest) -> Result<Department> {
        request.validate()?;
        let current = self.get_department(&request.id)?;

        let department = Department {
            id: current.id.clone(),
            name: request.name,
            color: current.color.clone(),
        };

        let mut next = self.snapshot().clone();
        next.departments = next
            .departments
            .iter()
            .map(|d| if d.id == department.id { department.clone() } else { d.clone() })
            .collect();
        next.employees = move_into(&next.employees, &request.employee_ids, &department.id);
        self.commit(next);

        tracing::info!(department_id = %department.id, name = %department.name, "Department updated");
        Ok(department)
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Delete a department that no employee references. Returns `true` if a
    /// department was removed.
    ///
    /// Junction rows pointing at the department go with it.
    pub fn delete_department(&mut self, id: &DepartmentId) -> Result<bool> {
        let count = self.department_employee_count(id);
        if count > 0 {
            tracing::warn!(department_id = %id, count, "Department delete rejected: has employees");
            return Err(StoreError::DepartmentHasEmployees { count });
        }

        let mut next = self.snapshot().clone();
        let before = next.departments.len();
        next.departments.retain(|d| &d.id != id);
        let removed = next.departments.len() < before;
        next.training_departments.retain(|l| &l.department_id != id);
        self.commit(next);

        if removed {
            tracing::info!(department_id = %id, "Department deleted");
        }
        Ok(removed)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Random pick, not rotation.
fn pick_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    DEPARTMENT_PALETTE
        .choose(rng)
        .copied()
        .unwrap_or(DEPARTMENT_PALETTE[0])
        .to_string()
}

fn move_into(employees: &[Employee], selected: &[EmployeeId], department_id: &DepartmentId) -> Vec<Employee> {
    employees
        .iter()
        .map(|e| {
            if selected.contains(&e.id) {
                Employee {
                    department_id: department_id.clone(),
                    ..e.clone()
                }
            } else {
                e.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::models::TrainingDepartment;
    use crate::sample::sample_snapshot;

    fn create(store: &mut Store, name: &str, members: &[&str]) -> Department {
        store
            .create_department(CreateDepartmentRequest {
                name: name.into(),
                employee_ids: members.iter().map(|&e| e.into()).collect(),
            })
            .unwrap()
    }

    #[test]
    fn create_picks_palette_color_and_moves_members() {
        let mut store = Store::from_snapshot(sample_snapshot());
        let dept = create(&mut store, "Finance", &["4", "5"]);

        assert!(DEPARTMENT_PALETTE.contains(&dept.color.as_str()));
        assert_eq!(store.list_departments().len(), 5);
        assert_eq!(store.department_employee_count(&dept.id), 2);
        // Sales lost its only member.
        assert_eq!(store.department_employee_count(&"3".into()), 0);
    }

    #[test]
    fn create_with_seeded_rng_is_deterministic() {
        let mut a = Store::new();
        let mut b = Store::new();
        let req = CreateDepartmentRequest { name: "Ops".into(), employee_ids: Vec::new() };
        let da = a.create_department_with(req.clone(), &mut StdRng::seed_from_u64(7)).unwrap();
        let db = b.create_department_with(req, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(da.color, db.color);
        assert_ne!(da.id, db.id);
    }

    #[test]
    fn create_requires_a_name() {
        let mut store = Store::new();
        let err = store
            .create_department(CreateDepartmentRequest { name: " ".into(), employee_ids: Vec::new() })
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.list_departments().is_empty());
    }

    #[test]
    fn update_keeps_color_and_does_not_evict_unselected_members() {
        let mut store = Store::from_snapshot(sample_snapshot());
        let before = store.get_department(&"1".into()).unwrap().clone();

        // Engineering has 1, 2 and 6. Select only 2 plus Chen (3) from Marketing.
        let updated = store
            .update_department(UpdateDepartmentRequest {
                id: "1".into(),
                name: "Platform".into(),
                employee_ids: vec!["2".into(), "3".into()],
            })
            .unwrap();

        assert_eq!(updated.name, "Platform");
        assert_eq!(updated.color, before.color);
        let snap = store.snapshot();
        assert_eq!(snap.employee(&"1".into()).unwrap().department_id.as_str(), "1");
        assert_eq!(snap.employee(&"6".into()).unwrap().department_id.as_str(), "1");
        assert_eq!(snap.employee(&"3".into()).unwrap().department_id.as_str(), "1");
        assert_eq!(store.department_employee_count(&"1".into()), 4);
    }

    #[test]
    fn update_unknown_department_is_not_found() {
        let mut store = Store::new();
        let err = store
            .update_department(UpdateDepartmentRequest {
                id: "nope".into(),
                name: "X".into(),
                employee_ids: Vec::new(),
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn delete_rejected_while_employees_reference_it() {
        let mut store = Store::from_snapshot(sample_snapshot());
        let err = store.delete_department(&"1".into()).unwrap_err();
        match err {
            StoreError::DepartmentHasEmployees { count } => assert_eq!(count, 3),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(store.list_departments().len(), 4);
    }

    #[test]
    fn delete_empty_department_succeeds_and_drops_links() {
        let mut snap = sample_snapshot();
        snap.training_departments.push(TrainingDepartment {
            training_id: "1".into(),
            department_id: "9".into(),
        });
        snap.departments.push(Department {
            id: "9".into(),
            name: "Empty".into(),
            color: "#F59A6A".into(),
        });
        let mut store = Store::from_snapshot(snap);

        assert!(store.delete_department(&"9".into()).unwrap());
        assert!(store.snapshot().department(&"9".into()).is_none());
        assert!(store
            .snapshot()
            .training_departments
            .iter()
            .all(|l| l.department_id.as_str() != "9"));
        assert!(!store.delete_department(&"9".into()).unwrap());
    }
}
