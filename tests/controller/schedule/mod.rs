//! Tests for the review scheduler endpoints.

mod assignment;
mod cycle;
mod productivity;
mod time_off;

use chrono::NaiveDate;

use super::*;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

/// Published cycle "cycle" with Alyssa and Casey, and entities THP and THAL
async fn setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_schedule_tables()
        .with_entity("thp", "Texas Health Plano", "THP")
        .with_entity("thal", "Texas Health Allen", "THAL")
        .with_employee("emp-alyssa", "Alyssa")
        .with_employee("emp-casey", "Casey")
        .with_cycle("cycle", date(5, 19), "published")
        .build()
        .await
}
