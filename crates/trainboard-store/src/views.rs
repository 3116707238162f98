//! Derived, read-only views over a [`Snapshot`].
//!
//! Nothing here is cached: every view is recomputed from the snapshot it is
//! called on, so it always reflects the latest commit.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use trainboard_shared::{DepartmentId, EmployeeId, ParticipantFilter, SortOrder, TrainingId};

use crate::models::{Department, Participant, Training};
use crate::snapshot::Snapshot;
use crate::store::Store;

/// Participation counts for one training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingStats {
    pub total: usize,
    pub acknowledged: usize,
    pub attended: usize,
}

/// A training as seen from one employee's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTraining {
    pub id: TrainingId,
    pub name: String,
    pub date: NaiveDate,
    #[serde(with = "crate::models::clock_time")]
    pub time: NaiveTime,
    pub description: String,
    pub attended: bool,
    pub acknowledgment: bool,
}

/// One participant row joined with its employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub employee_id: EmployeeId,
    pub name: String,
    pub email: String,
    pub position: String,
    /// Resolved from the employee's current department.
    pub department_id: DepartmentId,
    pub department_name: Option<String>,
    pub attended: bool,
    pub acknowledgment: bool,
}

/// Everything a catalog card shows for one training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingCard {
    pub training: Training,
    pub departments: Vec<Department>,
    pub stats: TrainingStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub total_trainings: usize,
    pub upcoming_trainings: usize,
}

/// Public catalog search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingQuery {
    /// Matched case-insensitively against the training name, its targeted
    /// departments' names and its participants' names, exactly as typed
    /// (no trimming). Empty matches all.
    #[serde(default)]
    pub search: String,
    /// Only trainings on exactly this date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub sort: SortOrder,
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn passes(participant: &Participant, filter: ParticipantFilter) -> bool {
    match filter {
        ParticipantFilter::All => true,
        ParticipantFilter::Pending => !participant.acknowledgment,
        ParticipantFilter::NotAttended => !participant.attended,
    }
}

impl Snapshot {
    pub fn training_stats(&self, training_id: &TrainingId) -> TrainingStats {
        self.participants_for(training_id)
            .fold(TrainingStats::default(), |mut stats, p| {
                stats.total += 1;
                stats.acknowledged += usize::from(p.acknowledgment);
                stats.attended += usize::from(p.attended);
                stats
            })
    }

    /// Trainings the employee has a participant row for, with that row's
    /// flags. Trainings without a row are absent, not "not attended".
    pub fn employee_history(&self, employee_id: &EmployeeId) -> Vec<EmployeeTraining> {
        self.trainings
            .iter()
            .filter_map(|t| {
                let row = self.participant(&t.id, employee_id)?;
                Some(EmployeeTraining {
                    id: t.id.clone(),
                    name: t.name.clone(),
                    date: t.date,
                    time: t.time,
                    description: t.description.clone(),
                    attended: row.attended,
                    acknowledgment: row.acknowledgment,
                })
            })
            .collect()
    }

    pub fn department_employee_count(&self, department_id: &DepartmentId) -> usize {
        self.employees
            .iter()
            .filter(|e| &e.department_id == department_id)
            .count()
    }

    /// Targeted departments of a training that still exist, in department
    /// list order.
    pub fn departments_of(&self, training_id: &TrainingId) -> Vec<&Department> {
        let targeted = self.targeted_department_ids(training_id);
        self.departments
            .iter()
            .filter(|d| targeted.contains(&d.id))
            .collect()
    }

    /// The public catalog: search, exact-date filter and date-time sort.
    /// Ties keep their original order in both directions.
    pub fn search_trainings(&self, query: &TrainingQuery) -> Vec<&Training> {
        let needle = query.search.to_lowercase();
        let mut found: Vec<&Training> = self
            .trainings
            .iter()
            .filter(|t| query.date.map_or(true, |d| t.date == d))
            .filter(|t| needle.is_empty() || self.training_matches(t, &needle))
            .collect();

        match query.sort {
            SortOrder::Asc => found.sort_by_key(|t| t.starts_at()),
            SortOrder::Desc => found.sort_by(|a, b| b.starts_at().cmp(&a.starts_at())),
        }
        tracing::debug!(search = %needle, matches = found.len(), "catalog search");
        found
    }

    fn training_matches(&self, training: &Training, needle: &str) -> bool {
        if contains_folded(&training.name, needle) {
            return true;
        }
        if self
            .departments_of(&training.id)
            .iter()
            .any(|d| contains_folded(&d.name, needle))
        {
            return true;
        }
        self.participants_for(&training.id)
            .filter_map(|p| self.employee(&p.employee_id))
            .any(|e| contains_folded(&e.name, needle))
    }

    /// The admin console's search box: name or description.
    pub fn admin_search_trainings(&self, search: &str) -> Vec<&Training> {
        let needle = search.to_lowercase();
        self.trainings
            .iter()
            .filter(|t| {
                needle.is_empty()
                    || contains_folded(&t.name, &needle)
                    || contains_folded(&t.description, &needle)
            })
            .collect()
    }

    /// Participant rows of a training joined with their employee. Rows
    /// whose employee no longer exists are skipped.
    pub fn roster(&self, training_id: &TrainingId, filter: ParticipantFilter) -> Vec<RosterEntry> {
        self.participants_for(training_id)
            .filter(|p| passes(p, filter))
            .filter_map(|p| {
                let employee = self.employee(&p.employee_id)?;
                Some(RosterEntry {
                    employee_id: employee.id.clone(),
                    name: employee.name.clone(),
                    email: employee.email.clone(),
                    position: employee.position.clone(),
                    department_id: employee.department_id.clone(),
                    department_name: self.department(&employee.department_id).map(|d| d.name.clone()),
                    attended: p.attended,
                    acknowledgment: p.acknowledgment,
                })
            })
            .collect()
    }

    pub fn training_card(&self, training_id: &TrainingId) -> Option<TrainingCard> {
        let training = self.training(training_id)?;
        Some(TrainingCard {
            training: training.clone(),
            departments: self.departments_of(training_id).into_iter().cloned().collect(),
            stats: self.training_stats(training_id),
        })
    }

    /// Totals for the catalog header. A training is upcoming when its date
    /// is `today` or later.
    pub fn catalog_summary(&self, today: NaiveDate) -> CatalogSummary {
        CatalogSummary {
            total_trainings: self.trainings.len(),
            upcoming_trainings: self.trainings.iter().filter(|t| t.date >= today).count(),
        }
    }
}

impl Store {
    pub fn department_employee_count(&self, department_id: &DepartmentId) -> usize {
        self.snapshot().department_employee_count(department_id)
    }
}
