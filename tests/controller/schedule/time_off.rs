use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use reposit::{
    model::schedule::{SaveTimeOffDto, TimeOffDto},
    server::{
        controller::schedule::time_off::{create_time_off, delete_time_off, list_time_off},
        model::app::AppState,
    },
};

use super::*;

fn save_time_off(employee_id: &str, start: (u32, u32), end: (u32, u32)) -> Json<SaveTimeOffDto> {
    Json(SaveTimeOffDto {
        id: None,
        employee_id: employee_id.to_string(),
        start_date: date(start.0, start.1),
        end_date: date(end.0, end.1),
        kind: "PTO".to_string(),
        note: None,
    })
}

/// Expect 201 and the entry listed afterwards
#[tokio::test]
async fn creates_time_off() -> Result<(), TestError> {
    let test = setup().await?;
    enter_supervisor(&test.session).await;

    let resp = into_response(
        create_time_off(
            State(test.state::<AppState>()),
            test.session.clone(),
            save_time_off("emp-casey", (6, 2), (6, 6)),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: TimeOffDto = body_json(resp).await?;

    let resp = into_response(list_time_off(State(test.state::<AppState>())).await);
    let entries: Vec<TimeOffDto> = body_json(resp).await?;
    assert_eq!(entries, vec![created]);

    Ok(())
}

/// Expect 400 when the start date is after the end date
#[tokio::test]
async fn rejects_reversed_dates() -> Result<(), TestError> {
    let test = setup().await?;
    enter_supervisor(&test.session).await;

    let result = create_time_off(
        State(test.state::<AppState>()),
        test.session.clone(),
        save_time_off("emp-casey", (6, 6), (6, 2)),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 for an employee that does not exist
#[tokio::test]
async fn unknown_employee_is_not_found() -> Result<(), TestError> {
    let test = setup().await?;
    enter_supervisor(&test.session).await;

    let result = create_time_off(
        State(test.state::<AppState>()),
        test.session.clone(),
        save_time_off("emp-missing", (6, 2), (6, 6)),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 when deleting an entry that does not exist
#[tokio::test]
async fn delete_missing_is_not_found() -> Result<(), TestError> {
    let test = setup().await?;
    enter_supervisor(&test.session).await;

    let result = delete_time_off(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path("missing".to_string()),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}
