use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::de::null_as_default;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum RoleLevel {
    #[default]
    #[serde(rename = "CR I")]
    CrI,
    #[serde(rename = "CR II")]
    CrII,
}

impl RoleLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CrI => "CR I",
            Self::CrII => "CR II",
        }
    }
}

impl fmt::Display for RoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CR I" => Ok(Self::CrI),
            "CR II" => Ok(Self::CrII),
            other => Err(format!("unknown role level {:?}", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrainingStatus {
    pub incoming_trained: bool,
    pub dar_trained: bool,
    pub cpoe_trained: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: String,
    pub name: String,
    pub role_level: RoleLevel,
    pub active: bool,
    pub training: TrainingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveEmployeeDto {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub role_level: RoleLevel,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub training: TrainingStatus,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_active() -> bool {
    true
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ColumnType {
    Dar,
    Incoming,
    Single,
    FreeText,
}

/// One column of the schedule grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Entity group shown under the label, e.g. "THP/THPS/THFM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_group_text: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CycleStatus {
    #[default]
    Draft,
    Published,
}

impl CycleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl FromStr for CycleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(format!("unknown cycle status {:?}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCycleDto {
    pub id: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub effective_date: NaiveDate,
    pub status: CycleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub column_config: Vec<ColumnDefinition>,
}

/// Cycle submitted by a supervisor, an empty column config gets the default columns
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveScheduleCycleDto {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub effective_date: NaiveDate,
    #[serde(default)]
    pub status: CycleStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub column_config: Vec<ColumnDefinition>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentValueType {
    X,
    EntityList,
    Note,
    FreeText,
}

impl AssignmentValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::EntityList => "ENTITY_LIST",
            Self::Note => "NOTE",
            Self::FreeText => "FREE_TEXT",
        }
    }
}

impl FromStr for AssignmentValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Self::X),
            "ENTITY_LIST" => Ok(Self::EntityList),
            "NOTE" => Ok(Self::Note),
            "FREE_TEXT" => Ok(Self::FreeText),
            other => Err(format!("unknown assignment value type {:?}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDto {
    pub id: String,
    pub schedule_cycle_id: String,
    pub employee_id: String,
    pub column_key: String,
    pub value_type: AssignmentValueType,
    pub value_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entity_codes: Vec<String>,
}

/// Cell value written from the grid, keyed by (cycle, employee, column)
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveAssignmentDto {
    pub schedule_cycle_id: String,
    pub employee_id: String,
    pub column_key: String,
    pub value_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffDto {
    pub id: String,
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveTimeOffDto {
    #[serde(default)]
    pub id: Option<String>,
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type", default = "default_time_off_kind")]
    pub kind: String,
    #[serde(default)]
    pub note: Option<String>,
}

fn default_time_off_kind() -> String {
    "PTO".to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityDto {
    pub id: String,
    pub schedule_cycle_id: String,
    pub entity_code: String,
    pub dar_count: i32,
    pub incoming_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpoe_count: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveProductivityDto {
    #[serde(default)]
    pub id: Option<String>,
    pub schedule_cycle_id: String,
    pub entity_code: String,
    #[serde(default)]
    pub dar_count: i32,
    #[serde(default)]
    pub incoming_count: i32,
    #[serde(default)]
    pub cpoe_count: Option<i32>,
}

/// Which column kinds the grid shows, the team member column is always shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ColumnFilter {
    #[default]
    All,
    Dar,
    Incoming,
    Cpoe,
}

/// Filters applied when building the grid view
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GridFilter {
    #[serde(default)]
    pub columns: ColumnFilter,
    /// Case-insensitive employee name substring
    #[serde(default)]
    pub person: Option<String>,
    /// Case-insensitive cell text substring to highlight, e.g. "THP"
    #[serde(default)]
    pub highlight: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GridCellDto {
    pub column_key: String,
    pub value_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<AssignmentValueType>,
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GridRowDto {
    pub employee_id: String,
    pub name: String,
    pub role_level: RoleLevel,
    pub active: bool,
    /// The employee has time off overlapping the cycle
    pub off: bool,
    pub cells: Vec<GridCellDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGridDto {
    pub cycle: ScheduleCycleDto,
    pub columns: Vec<ColumnDefinition>,
    pub rows: Vec<GridRowDto>,
    pub warnings: Vec<String>,
}

/// Relabel or regroup a column; absent fields are left unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateColumnDto {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, rename = "type")]
    pub column_type: Option<ColumnType>,
    #[serde(default)]
    pub header_group_text: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MoveColumnDto {
    pub direction: MoveDirection,
}

/// Entity codes each employee has covered and employees each entity code was covered by
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentHistoryDto {
    pub by_person: BTreeMap<String, Vec<String>>,
    pub by_entity: BTreeMap<String, Vec<String>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    /// Backed by the configured database
    Database,
    /// In-memory store seeded with demonstration data
    Local,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DataModeDto {
    pub mode: DataMode,
}
