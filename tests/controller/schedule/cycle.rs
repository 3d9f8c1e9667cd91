use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use reposit::{
    model::schedule::{
        ColumnFilter, CycleStatus, GridFilter, MoveColumnDto, MoveDirection,
        SaveScheduleCycleDto, ScheduleCycleDto, ScheduleGridDto, UpdateColumnDto,
    },
    server::{
        controller::schedule::cycle::{
            copy_cycle, create_cycle, get_active_cycle, get_cycle, get_cycle_grid,
            get_cycle_warnings, move_column, update_column,
        },
        model::app::AppState,
    },
};

use super::*;

fn save_cycle(title: &str) -> SaveScheduleCycleDto {
    SaveScheduleCycleDto {
        id: None,
        title: title.to_string(),
        start_date: date(7, 1),
        end_date: date(8, 11),
        effective_date: date(7, 1),
        status: CycleStatus::Draft,
        notes: None,
        column_config: Vec::new(),
    }
}

/// Expect 401 when creating a cycle outside supervisor mode
#[tokio::test]
async fn create_requires_supervisor() -> Result<(), TestError> {
    let test = setup().await?;

    let result = create_cycle(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(save_cycle("July")),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 201 with the default columns when none are submitted
#[tokio::test]
async fn creates_cycle_with_default_columns() -> Result<(), TestError> {
    let test = setup().await?;
    enter_supervisor(&test.session).await;

    let resp = into_response(
        create_cycle(
            State(test.state::<AppState>()),
            test.session.clone(),
            Json(save_cycle("July")),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::CREATED);

    let cycle: ScheduleCycleDto = body_json(resp).await?;
    assert_eq!(cycle.column_config[0].key, "TEAM_MEMBER");
    assert!(cycle.column_config.iter().any(|column| column.key == "FLOAT"));

    Ok(())
}

/// Expect an admin login to also allow scheduler writes
#[tokio::test]
async fn admin_can_create_cycle() -> Result<(), TestError> {
    let test = setup().await?;
    login_admin(&test.session).await;

    let result = create_cycle(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(save_cycle("July")),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 when the start date is after the end date
#[tokio::test]
async fn rejects_reversed_dates() -> Result<(), TestError> {
    let test = setup().await?;
    enter_supervisor(&test.session).await;

    let mut cycle = save_cycle("July");
    cycle.end_date = date(6, 1);

    let result = create_cycle(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(cycle),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the published cycle to be active over a newer draft
#[tokio::test]
async fn active_cycle_is_published() -> Result<(), TestError> {
    let test = setup().await?;
    enter_supervisor(&test.session).await;

    let result = create_cycle(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(save_cycle("July draft")),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::CREATED);

    let resp = into_response(get_active_cycle(State(test.state::<AppState>())).await);
    assert_eq!(resp.status(), StatusCode::OK);

    let cycle: ScheduleCycleDto = body_json(resp).await?;
    assert_eq!(cycle.id, "cycle");

    Ok(())
}

/// Expect 404 for the active cycle when no cycles exist
#[tokio::test]
async fn active_cycle_not_found_without_cycles() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schedule_tables().build().await?;

    let result = get_active_cycle(State(test.state::<AppState>())).await;
    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a column to be relabeled and moved within the stored configuration
#[tokio::test]
async fn edits_columns() -> Result<(), TestError> {
    let test = setup().await?;
    enter_supervisor(&test.session).await;

    let result = update_column(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path(("cycle".to_string(), "DAR_1".to_string())),
        Json(UpdateColumnDto {
            label: Some("DAR North".to_string()),
            column_type: None,
            header_group_text: Some("THP/THPS".to_string()),
        }),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::OK);

    let result = move_column(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path(("cycle".to_string(), "DAR_1".to_string())),
        Json(MoveColumnDto {
            direction: MoveDirection::Down,
        }),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::OK);

    let resp = into_response(
        get_cycle(State(test.state::<AppState>()), Path("cycle".to_string())).await,
    );
    let cycle: ScheduleCycleDto = body_json(resp).await?;
    let keys: Vec<&str> = cycle
        .column_config
        .iter()
        .map(|column| column.key.as_str())
        .collect();
    assert_eq!(keys[..3], ["TEAM_MEMBER", "CPOE", "DAR_1"]);
    assert_eq!(cycle.column_config[2].label, "DAR North");

    Ok(())
}

/// Expect 404 when editing a column the cycle does not have
#[tokio::test]
async fn unknown_column_is_not_found() -> Result<(), TestError> {
    let test = setup().await?;
    enter_supervisor(&test.session).await;

    let result = update_column(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path(("cycle".to_string(), "DAR_9".to_string())),
        Json(UpdateColumnDto {
            label: Some("DAR 9".to_string()),
            column_type: None,
            header_group_text: None,
        }),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the copy to be a draft titled "(Copy)" with the same assignments
#[tokio::test]
async fn copies_cycle() -> Result<(), TestError> {
    let mut test = setup().await?;
    test.schedule()
        .insert_assignment("a-1", "cycle", "emp-alyssa", "CPOE", "X")
        .await?;
    enter_supervisor(&test.session).await;

    let resp = into_response(
        copy_cycle(
            State(test.state::<AppState>()),
            test.session.clone(),
            Path("cycle".to_string()),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::CREATED);

    let copy: ScheduleCycleDto = body_json(resp).await?;
    assert_ne!(copy.id, "cycle");
    assert_eq!(copy.title, "Cycle cycle (Copy)");
    assert_eq!(copy.status, CycleStatus::Draft);

    let resp = into_response(
        get_cycle_grid(
            State(test.state::<AppState>()),
            Path(copy.id.clone()),
            Query(GridFilter::default()),
        )
        .await,
    );
    let grid: ScheduleGridDto = body_json(resp).await?;
    let alyssa = grid
        .rows
        .iter()
        .find(|row| row.employee_id == "emp-alyssa")
        .unwrap();
    let cpoe = alyssa
        .cells
        .iter()
        .find(|cell| cell.column_key == "CPOE")
        .unwrap();
    assert_eq!(cpoe.value_text, "X");

    Ok(())
}

/// Expect the grid to apply the column and person filters
#[tokio::test]
async fn grid_applies_filters() -> Result<(), TestError> {
    let test = setup().await?;

    let resp = into_response(
        get_cycle_grid(
            State(test.state::<AppState>()),
            Path("cycle".to_string()),
            Query(GridFilter {
                columns: ColumnFilter::Dar,
                person: Some("ALY".to_string()),
                highlight: None,
            }),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::OK);

    let grid: ScheduleGridDto = body_json(resp).await?;
    let keys: Vec<&str> = grid.columns.iter().map(|column| column.key.as_str()).collect();
    assert_eq!(keys, vec!["TEAM_MEMBER", "DAR_1"]);
    assert_eq!(grid.rows.len(), 1);
    assert_eq!(grid.rows[0].name, "Alyssa");

    Ok(())
}

/// Expect a warning for every required column left unassigned
#[tokio::test]
async fn warns_about_missing_coverage() -> Result<(), TestError> {
    let mut test = setup().await?;
    test.schedule()
        .insert_assignment("a-1", "cycle", "emp-alyssa", "CPOE", "X")
        .await?;

    let resp = into_response(
        get_cycle_warnings(State(test.state::<AppState>()), Path("cycle".to_string())).await,
    );
    assert_eq!(resp.status(), StatusCode::OK);

    let warnings: Vec<String> = body_json(resp).await?;
    assert_eq!(
        warnings,
        vec![
            "No 3P Email Primary assigned.".to_string(),
            "No Float coverage assigned.".to_string(),
        ]
    );

    Ok(())
}
