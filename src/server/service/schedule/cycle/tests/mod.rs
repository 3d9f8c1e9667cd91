
use chrono::NaiveDate;
use reposit_test_utils::prelude::*;

use crate::model::schedule::{CycleStatus, SaveScheduleCycleDto};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

fn save_cycle(title: &str) -> SaveScheduleCycleDto {
    SaveScheduleCycleDto {
        id: None,
        title: title.to_string(),
        start_date: date(5, 19),
        end_date: date(6, 30),
        effective_date: date(5, 19),
        status: CycleStatus::Draft,
        notes: None,
        column_config: Vec::new(),
    }
}

/// Published cycle "cycle" with employees Alyssa and Casey
async fn setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_schedule_tables()
        .with_employee("emp-alyssa", "Alyssa")
        .with_employee("emp-casey", "Casey")
        .with_cycle("cycle", date(5, 19), "published")
        .build()
        .await
}
