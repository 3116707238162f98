//! Built-in demo dataset. The demo admin logs in as `1` / `1`.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{Department, Employee, Participant, Training, TrainingDepartment};
use crate::snapshot::Snapshot;

fn department(id: &str, name: &str, color: &str) -> Department {
    Department {
        id: id.into(),
        name: name.into(),
        color: color.into(),
    }
}

fn employee(id: &str, name: &str, email: &str, department_id: &str, position: &str) -> Employee {
    Employee {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        department_id: department_id.into(),
        position: position.into(),
        is_admin: false,
        password: String::new(),
    }
}

fn training(id: &str, name: &str, (y, m, d): (i32, u32, u32), (hh, mm): (u32, u32), description: &str) -> Training {
    Training {
        id: id.into(),
        name: name.into(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        time: NaiveTime::from_hms_opt(hh, mm, 0).unwrap_or_default(),
        description: description.into(),
    }
}

fn link(training_id: &str, department_id: &str) -> TrainingDepartment {
    TrainingDepartment {
        training_id: training_id.into(),
        department_id: department_id.into(),
    }
}

fn participant(training_id: &str, employee_id: &str, attended: bool, acknowledgment: bool) -> Participant {
    Participant {
        training_id: training_id.into(),
        employee_id: employee_id.into(),
        attended,
        acknowledgment,
    }
}

pub fn sample_snapshot() -> Snapshot {
    let mut admin = employee("1", "1", "john@example.com", "1", "Senior Developer");
    admin.is_admin = true;
    admin.password = "1".into();

    let mut lisa = employee("6", "Lisa", "lisa@example.com", "1", "SW Developer");
    lisa.password = "345".into();

    Snapshot {
        departments: vec![
            department("1", "Engineering", "#F59A6A"),
            department("2", "Marketing", "#F6C177"),
            department("3", "Sales", "#F28B82"),
            department("4", "HR", "#E0A458"),
        ],
        employees: vec![
            admin,
            employee("2", "Jannessa", "sarah@example.com", "1", "Product Manager"),
            employee("3", "Chen", "mike@example.com", "2", "Marketing Lead"),
            employee("4", "Emily Davis", "emily@example.com", "3", "Sales Representative"),
            employee("5", "Alex Kumar", "alex@example.com", "4", "HR Manager"),
            lisa,
        ],
        trainings: vec![
            training(
                "1",
                "React Best Practices Workshop",
                (2025, 12, 10),
                (14, 0),
                "Learn modern React patterns and best practices",
            ),
            training(
                "2",
                "Leadership Training",
                (2025, 12, 8),
                (10, 0),
                "Develop your leadership skills",
            ),
            training(
                "3",
                "Sales Strategy Meeting",
                (2025, 12, 15),
                (9, 0),
                "Q4 sales strategy and planning",
            ),
        ],
        training_departments: vec![link("1", "1"), link("2", "2"), link("3", "3")],
        participants: vec![
            participant("1", "1", true, true),
            participant("1", "2", false, true),
            participant("1", "6", true, true),
            participant("2", "1", false, false),
            participant("2", "2", false, true),
            participant("2", "3", false, true),
            participant("2", "4", false, false),
            participant("3", "4", false, false),
        ],
    }
}
