//! Domain model structs held in the in-memory [`Snapshot`](crate::Snapshot).
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to the UI layer, and loaded back from a JSON seed file.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use trainboard_shared::{DepartmentId, EmployeeId, ParticipantFlag, TrainingId};

// ---------------------------------------------------------------------------
// Department
// ---------------------------------------------------------------------------

/// An organisational unit employees belong to and trainings are offered to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    /// Display color, picked from the palette when the department is created.
    pub color: String,
}

// ---------------------------------------------------------------------------
// Employee
// ---------------------------------------------------------------------------

/// A member of exactly one department.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    /// Also the login name for admins.
    pub name: String,
    pub email: String,
    pub department_id: DepartmentId,
    pub position: String,
    pub is_admin: bool,
    /// Plaintext; compared literally on login.
    #[serde(default)]
    pub password: String,
}

// ---------------------------------------------------------------------------
// Training
// ---------------------------------------------------------------------------

/// A calendar-scheduled training session.
///
/// Targeted departments are not stored here but in the
/// [`TrainingDepartment`] junction rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Training {
    pub id: TrainingId,
    pub name: String,
    pub date: NaiveDate,
    #[serde(with = "clock_time")]
    pub time: NaiveTime,
    #[serde(default)]
    pub description: String,
}

impl Training {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

// ---------------------------------------------------------------------------
// TrainingDepartment (junction)
// ---------------------------------------------------------------------------

/// "This training is offered to this department."
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDepartment {
    pub training_id: TrainingId,
    #[serde(rename = "departmentsId", alias = "departmentId")]
    pub department_id: DepartmentId,
}

// ---------------------------------------------------------------------------
// Participant
// ---------------------------------------------------------------------------

/// One employee's status for one training.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub training_id: TrainingId,
    pub employee_id: EmployeeId,
    pub attended: bool,
    pub acknowledgment: bool,
}

impl Participant {
    /// A fresh row: not attended, not acknowledged.
    pub fn pending(training_id: TrainingId, employee_id: EmployeeId) -> Self {
        Self {
            training_id,
            employee_id,
            attended: false,
            acknowledgment: false,
        }
    }

    /// Attended or acknowledged. An engaged row pins its department to the
    /// training.
    pub fn is_engaged(&self) -> bool {
        self.attended || self.acknowledgment
    }

    pub fn flag(&self, flag: ParticipantFlag) -> bool {
        match flag {
            ParticipantFlag::Attended => self.attended,
            ParticipantFlag::Acknowledgment => self.acknowledgment,
        }
    }

    pub fn set_flag(&mut self, flag: ParticipantFlag, value: bool) {
        match flag {
            ParticipantFlag::Attended => self.attended = value,
            ParticipantFlag::Acknowledgment => self.acknowledgment = value,
        }
    }
}

/// `HH:MM` on the wire, the way a time picker produces it. `HH:MM:SS` is
/// accepted on input and written back whenever the seconds are non-zero.
pub(crate) mod clock_time {
    use chrono::{NaiveTime, Timelike};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";
    const FORMAT_SECONDS: &str = "%H:%M:%S";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        let format = if time.second() == 0 { FORMAT } else { FORMAT_SECONDS };
        serializer.serialize_str(&time.format(format).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, FORMAT_SECONDS))
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn training_time_uses_clock_format() {
        let json = r#"{"id":"1","name":"Onboarding","date":"2025-12-10","time":"14:00"}"#;
        let training: Training = serde_json::from_str(json).unwrap();
        assert_eq!(training.time, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(training.description, "");

        let back = serde_json::to_value(&training).unwrap();
        assert_eq!(back["time"], "14:00");
        assert_eq!(back["date"], "2025-12-10");
    }

    #[test]
    fn training_time_accepts_seconds() {
        let json = r#"{"id":"1","name":"x","date":"2025-01-01","time":"09:30:15"}"#;
        let training: Training = serde_json::from_str(json).unwrap();
        assert_eq!(training.time, NaiveTime::from_hms_opt(9, 30, 15).unwrap());

        let back = serde_json::to_value(&training).unwrap();
        assert_eq!(back["time"], "09:30:15");
    }

    #[test]
    fn junction_uses_departments_id_on_the_wire() {
        let link: TrainingDepartment =
            serde_json::from_str(r#"{"trainingId":"1","departmentsId":"2"}"#).unwrap();
        assert_eq!(link.department_id.as_str(), "2");

        let back = serde_json::to_value(&link).unwrap();
        assert_eq!(back["departmentsId"], "2");
        assert!(back.get("departmentId").is_none());

        let legacy: TrainingDepartment =
            serde_json::from_str(r#"{"trainingId":"1","departmentId":"3"}"#).unwrap();
        assert_eq!(legacy.department_id.as_str(), "3");
    }

    #[test]
    fn engaged_means_either_flag() {
        let mut p = Participant::pending("t".into(), "e".into());
        assert!(!p.is_engaged());
        p.set_flag(ParticipantFlag::Acknowledgment, true);
        assert!(p.is_engaged());
        assert!(p.flag(ParticipantFlag::Acknowledgment));
        assert!(!p.flag(ParticipantFlag::Attended));
    }
}
