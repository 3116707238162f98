//! CRUD operations for [`Training`] records.
//!
//! A training's junction rows and participant rows are always written in
//! the same commit as the training itself.

use std::collections::BTreeSet;

use trainboard_shared::{DepartmentId, TrainingId};

use crate::error::{Result, StoreError};
use crate::models::{Participant, Training, TrainingDepartment};
use crate::reconcile::{self, MembershipChange};
use crate::requests::{distinct_departments, CreateTrainingRequest, UpdateTrainingRequest};
use crate::store::Store;

impl Store {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Create a training for at least one department. Every current
    /// employee of a targeted department gets a pending participant row.
    pub fn create_training(&mut self, request: CreateTrainingRequest) -> Result<Training> {
        request.validate()?;
        let department_ids = distinct_departments(&request.department_ids);

        let training = Training {
            id: TrainingId::generate(),
            name: request.name,
            date: request.date,
            time: request.time,
            description: request.description,
        };

        let mut next = self.snapshot().clone();
        next.trainings.push(training.clone());
        next.training_departments
            .extend(department_ids.iter().map(|d| TrainingDepartment {
                training_id: training.id.clone(),
                department_id: d.clone(),
            }));
        let enrolled: Vec<Participant> = next
            .employees
            .iter()
            .filter(|e| department_ids.contains(&e.department_id))
            .map(|e| Participant::pending(training.id.clone(), e.id.clone()))
            .collect();
        let participant_count = enrolled.len();
        next.participants.extend(enrolled);
        self.commit(next);

        tracing::info!(
            training_id = %training.id,
            departments = department_ids.len(),
            participants = participant_count,
            "Training created"
        );
        Ok(training)
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    pub fn list_trainings(&self) -> &[Training] {
        &self.snapshot().trainings
    }

    pub fn list_training_departments(&self) -> &[TrainingDepartment] {
        &self.snapshot().training_departments
    }

    pub fn get_training(&self, id: &TrainingId) -> Result<&Training> {
        self.snapshot()
            .training(id)
            .ok_or_else(|| StoreError::not_found("Training", id))
    }

    /// Targeted departments of `id` that may not be deselected.
    pub fn non_removable_department_ids(&self, id: &TrainingId) -> BTreeSet<DepartmentId> {
        reconcile::locked_departments(self.snapshot(), id)
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Replace a training's fields and reconcile its departments and
    /// participants against `department_ids`.
    pub fn update_training(&mut self, request: UpdateTrainingRequest) -> Result<MembershipChange> {
        request.validate()?;
        self.get_training(&request.id)?;

        let fields = request.fields;
        let training = Training {
            id: request.id,
            name: fields.name,
            date: fields.date,
            time: fields.time,
            description: fields.description,
        };
        let change = reconcile::reconcile(self.snapshot(), &training.id, &fields.department_ids);

        let mut next = self.snapshot().clone();
        next.trainings = next
            .trainings
            .iter()
            .map(|t| if t.id == training.id { training.clone() } else { t.clone() })
            .collect();
        next.training_departments.retain(|l| l.training_id != training.id);
        next.training_departments
            .extend(change.training_departments.iter().cloned());
        next.participants.retain(|p| p.training_id != training.id);
        next.participants.extend(change.participants.iter().cloned());
        self.commit(next);

        if !change.retained.is_empty() {
            tracing::warn!(
                training_id = %training.id,
                retained = ?change.retained,
                "Locked departments kept on training"
            );
        }
        tracing::info!(
            training_id = %training.id,
            added = ?change.added,
            removed = ?change.removed,
            participants = change.participants.len(),
            "Training updated"
        );
        Ok(change)
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Delete a training with its junction and participant rows. Returns
    /// `true` if the training existed.
    pub fn delete_training(&mut self, id: &TrainingId) -> Result<bool> {
        let mut next = self.snapshot().clone();
        let before = next.trainings.len();
        next.trainings.retain(|t| &t.id != id);
        let removed = next.trainings.len() < before;
        next.training_departments.retain(|l| &l.training_id != id);
        next.participants.retain(|p| &p.training_id != id);
        self.commit(next);

        if removed {
            tracing::info!(training_id = %id, "Training deleted");
        }
        Ok(removed)
    }
}
