//! The five collections as one immutable value.

use std::path::Path;

use serde::{Deserialize, Serialize};
use trainboard_shared::{DepartmentId, EmployeeId, TrainingId};

use crate::error::Result;
use crate::models::{Department, Employee, Participant, Training, TrainingDepartment};

/// Full session state. Serialized as-is when handed to the UI layer or
/// loaded from a seed file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub trainings: Vec<Training>,
    #[serde(default)]
    pub training_departments: Vec<TrainingDepartment>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Snapshot {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn department(&self, id: &DepartmentId) -> Option<&Department> {
        self.departments.iter().find(|d| &d.id == id)
    }

    pub fn employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }

    pub fn training(&self, id: &TrainingId) -> Option<&Training> {
        self.trainings.iter().find(|t| &t.id == id)
    }

    pub fn participant(&self, training_id: &TrainingId, employee_id: &EmployeeId) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|p| &p.training_id == training_id && &p.employee_id == employee_id)
    }

    /// Distinct targeted department ids of a training, in junction order.
    pub fn targeted_department_ids(&self, training_id: &TrainingId) -> Vec<DepartmentId> {
        let mut ids: Vec<DepartmentId> = Vec::new();
        for link in self.training_departments.iter().filter(|l| &l.training_id == training_id) {
            if !ids.contains(&link.department_id) {
                ids.push(link.department_id.clone());
            }
        }
        ids
    }

    pub fn participants_for(&self, training_id: &TrainingId) -> impl Iterator<Item = &Participant> + '_ {
        let training_id = training_id.clone();
        self.participants
            .iter()
            .filter(move |p| p.training_id == training_id)
    }
}
