use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::de::null_as_default;

/// A physical care site exams can be enabled for and overridden by
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntityDto {
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Entity submitted by the admin editor, `id` is generated when absent
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveEntityDto {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum Modality {
    CT,
    MRI,
    US,
    XR,
    NM,
    IR,
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CT => "CT",
            Self::MRI => "MRI",
            Self::US => "US",
            Self::XR => "XR",
            Self::NM => "NM",
            Self::IR => "IR",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CT" => Ok(Self::CT),
            "MRI" => Ok(Self::MRI),
            "US" => Ok(Self::US),
            "XR" => Ok(Self::XR),
            "NM" => Ok(Self::NM),
            "IR" => Ok(Self::IR),
            other => Err(format!("unknown modality {:?}", other)),
        }
    }
}

/// Color of a note box shown above the protocol content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Info,
    Warning,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NoteDto {
    pub id: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: NoteKind,
}

/// A titled content block with a sparse per-entity override map.
///
/// An absent or `null` `overrides` map deserializes as an empty one; they are never distinguished.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SectionDto {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub content: String,
    /// Entity ID -> replacement content
    #[serde(default, deserialize_with = "null_as_default")]
    pub overrides: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VariantDto {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<SectionDto>,
}

/// A stored protocol document as edited by administrators
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExamDto {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub modality: Modality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Entities the exam is active for, empty means all entities
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled_entities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: Vec<NoteDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cpt_codes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variants: Vec<VariantDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Incremented on create only, never checked before overwrite
    pub version: i32,
}

/// Exam submitted by the admin editor
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveExamDto {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub modality: Modality,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled_entities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: Vec<NoteDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cpt_codes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variants: Vec<VariantDto>,
}

/// An exam card in the staff listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExamSummaryDto {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub modality: Modality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub cpt_codes: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VariantTabDto {
    pub id: String,
    pub name: String,
}

/// Section content as displayed for the current entity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSectionDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub is_overridden: bool,
    /// "<entity name> Specific" when the content is an override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_label: Option<String>,
}

/// An exam resolved for display to staff at a given entity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedExamDto {
    pub id: String,
    pub title: String,
    pub modality: Modality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub cpt_codes: Vec<String>,
    pub notes: Vec<NoteDto>,
    /// Name of the entity the content was resolved for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewing_for: Option<String>,
    pub variants: Vec<VariantTabDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_variant_id: Option<String>,
    pub sections: Vec<ResolvedSectionDto>,
}

/// Staff entity selection stored in the session
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectEntityDto {
    pub entity_id: String,
}

/// Result of the demonstration seed
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SeedDto {
    pub success: bool,
    pub message: String,
}
