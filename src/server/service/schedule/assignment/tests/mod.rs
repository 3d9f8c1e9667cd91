
use chrono::NaiveDate;
use reposit_test_utils::prelude::*;

use crate::model::schedule::SaveAssignmentDto;

fn save_assignment(employee_id: &str, column_key: &str, value_text: &str) -> SaveAssignmentDto {
    SaveAssignmentDto {
        schedule_cycle_id: "cycle".to_string(),
        employee_id: employee_id.to_string(),
        column_key: column_key.to_string(),
        value_text: value_text.to_string(),
    }
}

/// Cycle "cycle" with employees Alyssa and Casey and entities THAL, THB, THS and THP
async fn setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_schedule_tables()
        .with_entity("ent-thal", "Texas Health Allen", "THAL")
        .with_entity("ent-thb", "Texas Health Bedford", "THB")
        .with_entity("ent-ths", "Texas Health Southlake", "THS")
        .with_entity("ent-thp", "Texas Health Plano", "THP")
        .with_employee("emp-alyssa", "Alyssa")
        .with_employee("emp-casey", "Casey")
        .with_cycle(
            "cycle",
            NaiveDate::from_ymd_opt(2025, 5, 19).unwrap(),
            "published",
        )
        .build()
        .await
}
