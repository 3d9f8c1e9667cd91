
use chrono::NaiveDate;

use crate::{
    model::schedule::{
        AssignmentDto, AssignmentValueType, CycleStatus, EmployeeDto, RoleLevel,
        ScheduleCycleDto, TimeOffDto, TrainingStatus,
    },
    server::service::schedule::columns::default_columns,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn cycle() -> ScheduleCycleDto {
    ScheduleCycleDto {
        id: "cycle".to_string(),
        title: "Clinical Review Schedule May and June".to_string(),
        start_date: date(2025, 5, 19),
        end_date: date(2025, 6, 30),
        effective_date: date(2025, 5, 19),
        status: CycleStatus::Published,
        notes: None,
        column_config: default_columns(2, 1),
    }
}

fn employee(id: &str, name: &str) -> EmployeeDto {
    EmployeeDto {
        id: id.to_string(),
        name: name.to_string(),
        role_level: RoleLevel::CrII,
        active: true,
        training: TrainingStatus::default(),
        hire_date: None,
        end_date: None,
        notes: None,
    }
}

fn assignment(
    employee_id: &str,
    column_key: &str,
    value_text: &str,
    codes: &[&str],
) -> AssignmentDto {
    AssignmentDto {
        id: format!("{}-{}", employee_id, column_key),
        schedule_cycle_id: "cycle".to_string(),
        employee_id: employee_id.to_string(),
        column_key: column_key.to_string(),
        value_type: AssignmentValueType::EntityList,
        value_text: value_text.to_string(),
        entity_codes: codes.iter().map(|code| code.to_string()).collect(),
    }
}

fn time_off(employee_id: &str, start_date: NaiveDate, end_date: NaiveDate) -> TimeOffDto {
    TimeOffDto {
        id: format!("timeoff-{}", employee_id),
        employee_id: employee_id.to_string(),
        start_date,
        end_date,
        kind: "PTO".to_string(),
        note: None,
    }
}
