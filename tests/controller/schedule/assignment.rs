use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use reposit::{
    model::schedule::{
        AssignmentDto, AssignmentHistoryDto, AssignmentValueType, SaveAssignmentDto,
    },
    server::{
        controller::schedule::assignment::{
            delete_assignment, get_history, list_assignments, save_assignment,
            ListAssignmentsParams,
        },
        model::app::AppState,
    },
};

use super::*;

fn cell(employee_id: &str, column_key: &str, value_text: &str) -> Json<SaveAssignmentDto> {
    Json(SaveAssignmentDto {
        schedule_cycle_id: "cycle".to_string(),
        employee_id: employee_id.to_string(),
        column_key: column_key.to_string(),
        value_text: value_text.to_string(),
    })
}

async fn save(
    test: &TestSetup,
    employee_id: &str,
    column_key: &str,
    value_text: &str,
) -> AssignmentDto {
    let resp = into_response(
        save_assignment(
            State(test.state::<AppState>()),
            test.session.clone(),
            cell(employee_id, column_key, value_text),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::OK);

    body_json(resp).await.unwrap()
}

/// Expect 401 when writing a cell outside supervisor mode
#[tokio::test]
async fn requires_supervisor() -> Result<(), TestError> {
    let test = setup().await?;

    let result = save_assignment(
        State(test.state::<AppState>()),
        test.session.clone(),
        cell("emp-alyssa", "DAR_1", "THP"),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the value type and known entity codes to be derived from the text
#[tokio::test]
async fn classifies_cell_text() -> Result<(), TestError> {
    let test = setup().await?;
    enter_supervisor(&test.session).await;

    let assignment = save(&test, "emp-alyssa", "DAR_1", "THAL/THP, XYZ").await;
    assert_eq!(assignment.value_type, AssignmentValueType::EntityList);
    assert_eq!(assignment.entity_codes, vec!["THAL".to_string(), "THP".to_string()]);

    let assignment = save(&test, "emp-casey", "CPOE", " x ").await;
    assert_eq!(assignment.value_type, AssignmentValueType::X);
    assert!(assignment.entity_codes.is_empty());

    Ok(())
}

/// Expect a second write to the same cell to replace the first
#[tokio::test]
async fn replaces_existing_cell() -> Result<(), TestError> {
    let test = setup().await?;
    enter_supervisor(&test.session).await;

    let first = save(&test, "emp-alyssa", "DAR_1", "THP").await;
    let second = save(&test, "emp-alyssa", "DAR_1", "THAL").await;
    assert_eq!(first.id, second.id);

    let resp = into_response(
        list_assignments(
            State(test.state::<AppState>()),
            Query(ListAssignmentsParams {
                cycle_id: Some("cycle".to_string()),
            }),
        )
        .await,
    );
    let assignments: Vec<AssignmentDto> = body_json(resp).await?;
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].value_text, "THAL");

    Ok(())
}

/// Expect 404 for a column the cycle does not have
#[tokio::test]
async fn unknown_column_is_not_found() -> Result<(), TestError> {
    let test = setup().await?;
    enter_supervisor(&test.session).await;

    let result = save_assignment(
        State(test.state::<AppState>()),
        test.session.clone(),
        cell("emp-alyssa", "DAR_7", "THP"),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 204 on delete and 404 when deleting again
#[tokio::test]
async fn deletes_assignment() -> Result<(), TestError> {
    let test = setup().await?;
    enter_supervisor(&test.session).await;

    let assignment = save(&test, "emp-alyssa", "DAR_1", "THP").await;

    let result = delete_assignment(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path(assignment.id.clone()),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);

    let result = delete_assignment(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path(assignment.id),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect history keyed by employee and by entity code
#[tokio::test]
async fn builds_history() -> Result<(), TestError> {
    let test = setup().await?;
    enter_supervisor(&test.session).await;

    save(&test, "emp-alyssa", "DAR_1", "THP/THAL").await;
    save(&test, "emp-casey", "INCOMING_1", "THP").await;

    let resp = into_response(get_history(State(test.state::<AppState>())).await);
    assert_eq!(resp.status(), StatusCode::OK);

    let history: AssignmentHistoryDto = body_json(resp).await?;
    assert_eq!(
        history.by_person.get("emp-alyssa"),
        Some(&vec!["THAL".to_string(), "THP".to_string()])
    );
    assert_eq!(
        history.by_entity.get("THP"),
        Some(&vec!["emp-alyssa".to_string(), "emp-casey".to_string()])
    );

    Ok(())
}
