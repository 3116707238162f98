//! Department membership reconciliation for a single training.
//!
//! When an admin edits which departments a training targets, the junction
//! rows and participant rows of that training are recomputed together:
//!
//! - an added department brings a pending participant row for each of its
//!   current employees;
//! - a removed department takes its junction row and its employees'
//!   participant rows with it, unless it is *locked*;
//! - a department is locked when any participant row of this training whose
//!   employee currently belongs to it is attended or acknowledged. A locked
//!   department stays targeted and keeps every row, even if its removal was
//!   requested;
//! - departments targeted before and after are left alone.
//!
//! The engine is pure: it reads a [`Snapshot`] and returns the replacement
//! rows for the training. Splicing them back is the caller's job (see
//! `Store::update_training`).

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;
use trainboard_shared::{DepartmentId, EmployeeId, TrainingId};

use crate::models::{Participant, TrainingDepartment};
use crate::requests::distinct_departments;
use crate::snapshot::Snapshot;

/// Outcome of reconciling one training's department set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipChange {
    /// Newly targeted departments.
    pub added: Vec<DepartmentId>,
    /// Departments actually un-targeted.
    pub removed: Vec<DepartmentId>,
    /// Departments whose removal was requested but refused.
    pub retained: Vec<DepartmentId>,
    /// Every junction row of the training after the change.
    pub training_departments: Vec<TrainingDepartment>,
    /// Every participant row of the training after the change.
    pub participants: Vec<Participant>,
}

impl MembershipChange {
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Current department of every employee.
fn department_index(snapshot: &Snapshot) -> HashMap<&EmployeeId, &DepartmentId> {
    snapshot
        .employees
        .iter()
        .map(|e| (&e.id, &e.department_id))
        .collect()
}

/// Departments (by the employee's current membership) holding at least one
/// attended or acknowledged participant row of `training_id`. Rows whose
/// employee no longer exists count for no department.
fn engaged_departments(snapshot: &Snapshot, training_id: &TrainingId) -> HashSet<DepartmentId> {
    let index = department_index(snapshot);
    snapshot
        .participants_for(training_id)
        .filter(|p| p.is_engaged())
        .filter_map(|p| index.get(&p.employee_id).map(|d| (*d).clone()))
        .collect()
}

/// Targeted departments of `training_id` that cannot be deselected.
///
/// This is what a form needs before submission to disable the deselect
/// control of each locked department.
pub fn locked_departments(snapshot: &Snapshot, training_id: &TrainingId) -> BTreeSet<DepartmentId> {
    let engaged = engaged_departments(snapshot, training_id);
    snapshot
        .targeted_department_ids(training_id)
        .into_iter()
        .filter(|d| engaged.contains(d))
        .collect()
}

/// Compute the junction and participant rows of `training_id` after its
/// targeted departments are changed to `requested`.
pub fn reconcile(
    snapshot: &Snapshot,
    training_id: &TrainingId,
    requested: &[DepartmentId],
) -> MembershipChange {
    let old = snapshot.targeted_department_ids(training_id);
    let requested = distinct_departments(requested);

    let added: Vec<DepartmentId> = requested
        .iter()
        .filter(|d| !old.contains(d))
        .cloned()
        .collect();

    let engaged = engaged_departments(snapshot, training_id);
    let (retained, removed): (Vec<DepartmentId>, Vec<DepartmentId>) = old
        .iter()
        .filter(|d| !requested.contains(d))
        .cloned()
        .partition(|d| engaged.contains(d));

    let training_departments = old
        .iter()
        .filter(|d| !removed.contains(d))
        .chain(added.iter())
        .map(|d| TrainingDepartment {
            training_id: training_id.clone(),
            department_id: d.clone(),
        })
        .collect();

    let index = department_index(snapshot);
    let mut participants: Vec<Participant> = snapshot
        .participants_for(training_id)
        .filter(|p| match index.get(&p.employee_id) {
            Some(dept) => !removed.contains(dept),
            None => true,
        })
        .cloned()
        .collect();

    // At most one row per employee, even if they moved departments since
    // their row was created.
    let mut enrolled: HashSet<EmployeeId> =
        participants.iter().map(|p| p.employee_id.clone()).collect();
    for employee in &snapshot.employees {
        if added.contains(&employee.department_id) && enrolled.insert(employee.id.clone()) {
            participants.push(Participant::pending(training_id.clone(), employee.id.clone()));
        }
    }

    MembershipChange {
        added,
        removed,
        retained,
        training_departments,
        participants,
    }
}
