//! Attendance and acknowledgment updates on [`Participant`] rows.

use trainboard_shared::{EmployeeId, ParticipantFlag, TrainingId};

use crate::error::{Result, StoreError};
use crate::models::Participant;
use crate::store::Store;

impl Store {
    pub fn list_participants(&self) -> &[Participant] {
        &self.snapshot().participants
    }

    /// Set one status flag of the `(training_id, employee_id)` row.
    pub fn set_participant_flag(
        &mut self,
        training_id: &TrainingId,
        employee_id: &EmployeeId,
        flag: ParticipantFlag,
        value: bool,
    ) -> Result<Participant> {
        let current = self
            .snapshot()
            .participant(training_id, employee_id)
            .ok_or_else(|| {
                StoreError::not_found("Participant", format!("{training_id}/{employee_id}"))
            })?;

        let mut updated = current.clone();
        updated.set_flag(flag, value);

        let mut next = self.snapshot().clone();
        next.participants = next
            .participants
            .iter()
            .map(|p| {
                if &p.training_id == training_id && &p.employee_id == employee_id {
                    updated.clone()
                } else {
                    p.clone()
                }
            })
            .collect();
        self.commit(next);

        tracing::info!(
            training_id = %training_id,
            employee_id = %employee_id,
            ?flag,
            value,
            "Participant status updated"
        );
        Ok(updated)
    }

    /// Flip one status flag, the way a status button does.
    pub fn toggle_participant_flag(
        &mut self,
        training_id: &TrainingId,
        employee_id: &EmployeeId,
        flag: ParticipantFlag,
    ) -> Result<Participant> {
        let current = self
            .snapshot()
            .participant(training_id, employee_id)
            .map(|p| p.flag(flag))
            .ok_or_else(|| {
                StoreError::not_found("Participant", format!("{training_id}/{employee_id}"))
            })?;
        self.set_participant_flag(training_id, employee_id, flag, !current)
    }
}
