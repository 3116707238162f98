//! Per-operation request payloads.
//!
//! Each request is checked with `validate()` before any collection is
//! touched, so a rejected request never reaches the reconciliation engine.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use trainboard_shared::{DepartmentId, EmployeeId, TrainingId, ValidationError};

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Collapse duplicates and blank ids, keeping first-seen order.
pub fn distinct_departments(ids: &[DepartmentId]) -> Vec<DepartmentId> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| !id.as_str().trim().is_empty())
        .filter(|id| seen.insert(*id))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Departments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    pub name: String,
    /// Employees moved into the new department.
    #[serde(default)]
    pub employee_ids: Vec<EmployeeId>,
}

impl CreateDepartmentRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentRequest {
    pub id: DepartmentId,
    pub name: String,
    /// Employees that must end up in this department. Members left out of
    /// the list are not moved anywhere.
    #[serde(default)]
    pub employee_ids: Vec<EmployeeId>,
}

impl UpdateDepartmentRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)
    }
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFields {
    pub name: String,
    pub email: String,
    pub department_id: DepartmentId,
    pub position: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub password: String,
}

impl EmployeeFields {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("position", &self.position)?;
        if self.department_id.as_str().trim().is_empty() {
            return Err(ValidationError::NoDepartmentAssigned);
        }
        Ok(())
    }
}

pub type CreateEmployeeRequest = EmployeeFields;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub id: EmployeeId,
    #[serde(flatten)]
    pub fields: EmployeeFields,
}

impl UpdateEmployeeRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.fields.validate()
    }
}

// ---------------------------------------------------------------------------
// Trainings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingFields {
    pub name: String,
    pub date: NaiveDate,
    #[serde(with = "crate::models::clock_time")]
    pub time: NaiveTime,
    #[serde(default)]
    pub description: String,
    /// Targeted departments. Duplicates collapse, order is irrelevant.
    pub department_ids: Vec<DepartmentId>,
}

impl TrainingFields {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        if distinct_departments(&self.department_ids).is_empty() {
            return Err(ValidationError::NoDepartmentSelected);
        }
        Ok(())
    }
}

pub type CreateTrainingRequest = TrainingFields;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrainingRequest {
    pub id: TrainingId,
    #[serde(flatten)]
    pub fields: TrainingFields,
}

impl UpdateTrainingRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.fields.validate()
    }
}
