//! Demonstration data.
//!
//! The protocol seed is served by `GET /api/seed`; local mode also loads the scheduler
//! demonstration data at startup. Every record has a fixed ID so seeding twice overwrites
//! instead of duplicating.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        protocol::{Modality, SaveEntityDto, SaveExamDto, SectionDto, SeedDto, VariantDto},
        schedule::{
            AssignmentValueType, ColumnDefinition, ColumnType, CycleStatus, RoleLevel,
            TrainingStatus,
        },
    },
    server::{
        data::{
            protocol::entity::CareEntityRepository,
            schedule::{
                assignment::AssignmentRepository, cycle::ScheduleCycleRepository,
                employee::EmployeeRepository, productivity::ProductivityRepository,
                time_off::TimeOffRepository,
            },
        },
        error::Error,
        model::db::{
            AssignmentModel, CareEntityModel, EmployeeModel, ProductivityModel,
            ScheduleCycleModel, TimeOffModel,
        },
        service::protocol::{entity::EntityService, exam::ExamService},
        util::json::encode,
    },
};

pub const SEED_ENTITY_ID: &str = "thp";
const SEED_ENTITY_LOGO_URL: &str = "https://placehold.co/400x400/003366/ffffff?text=THP";
pub const SEED_EXAM_ID: &str = "cta-abdomen";
pub const DEMO_CYCLE_ID: &str = "cycle-2025-may-jun";

const DEMO_ENTITIES: [(&str, &str, &str); 16] = [
    (SEED_ENTITY_ID, "THP", "Texas Health Plano"),
    ("ent-thps", "THPS", "Texas Health Presbyterian Plano"),
    ("ent-thfm", "THFM", "Texas Health Frisco"),
    ("ent-thsw", "THSW", "Texas Health Southwest"),
    ("ent-tham", "THAM", "Texas Health Arlington"),
    ("ent-thal", "THAL", "Texas Health Allen"),
    ("ent-thd", "THD", "Texas Health Denton"),
    ("ent-thr", "THR", "Texas Health Rockwall"),
    ("ent-theb", "HEB", "Harris Methodist Hospital"),
    ("ent-fw", "FW", "Fort Worth"),
    ("ent-tha", "THA", "Texas Health Alliance"),
    ("ent-thb", "THB", "Texas Health Bedford"),
    ("ent-ths", "THS", "Texas Health Southlake"),
    ("ent-thc", "THC", "Texas Health Cleburne"),
    ("ent-thk", "THK", "Texas Health Kaufman"),
    ("ent-thf", "THF", "Texas Health Flower Mound"),
];

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, Error> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::InternalError(format!("invalid seed date {}-{}-{}", year, month, day))
    })
}

fn column(
    key: &str,
    label: &str,
    column_type: ColumnType,
    group: Option<&str>,
) -> ColumnDefinition {
    ColumnDefinition {
        key: key.to_string(),
        label: label.to_string(),
        column_type,
        header_group_text: group.map(str::to_string),
    }
}

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds the protocol portal with Texas Health Plano and the CTA Abdomen and Pelvis
    /// protocol, whose technique section has a Plano specific override.
    pub async fn seed_protocol(&self) -> Result<SeedDto, Error> {
        EntityService::new(self.db)
            .create(SaveEntityDto {
                id: Some(SEED_ENTITY_ID.to_string()),
                name: "Texas Health Plano".to_string(),
                code: "THP".to_string(),
                logo_url: Some(SEED_ENTITY_LOGO_URL.to_string()),
            })
            .await?;

        let technique_overrides = BTreeMap::from([(
            SEED_ENTITY_ID.to_string(),
            "IV Contrast: 125mL Isovue 370 @ 5mL/sec.\n**Note:** THP uses a dual-head injector for saline flush."
                .to_string(),
        )]);

        ExamService::new(self.db)
            .create(SaveExamDto {
                id: Some(SEED_EXAM_ID.to_string()),
                title: "CTA Abdomen and Pelvis".to_string(),
                slug: Some("cta-abdomen-pelvis".to_string()),
                modality: Modality::CT,
                image_url: None,
                enabled_entities: Vec::new(),
                notes: Vec::new(),
                cpt_codes: vec!["74174".to_string()],
                tags: vec![
                    "abdomen".to_string(),
                    "pelvis".to_string(),
                    "angiogram".to_string(),
                ],
                variants: vec![VariantDto {
                    id: "routine".to_string(),
                    name: "Routine / Runoff".to_string(),
                    sections: vec![
                        SectionDto {
                            id: "indication".to_string(),
                            title: "Indication".to_string(),
                            content: "Evaluation of abdominal aortic aneurysm (AAA), dissection, or mesenteric ischemia.".to_string(),
                            overrides: BTreeMap::new(),
                        },
                        SectionDto {
                            id: "technique".to_string(),
                            title: "Technique".to_string(),
                            content: "IV Contrast: 100mL Omnipaque 350 @ 4mL/sec.\nScan Delay: Bolus Tracking on descending aorta.".to_string(),
                            overrides: technique_overrides,
                        },
                    ],
                }],
            })
            .await?;

        tracing::info!("Seeded protocol entity {} and exam {}", SEED_ENTITY_ID, SEED_EXAM_ID);

        Ok(SeedDto {
            success: true,
            message: "Seeding complete. Log in with the configured admin account.".to_string(),
        })
    }

    /// Loads the scheduler demonstration data: five employees, the sixteen entities, one
    /// published cycle with five assignments, one time off entry and one productivity entry.
    ///
    /// Plano shares its ID with the protocol seed so the two seeds leave one Plano entity.
    ///
    /// Assignments keep the value types they were recorded with rather than being
    /// reclassified.
    pub async fn seed_schedule_demo(&self) -> Result<(), Error> {
        let entity_repo = CareEntityRepository::new(self.db);
        for (id, code, name) in DEMO_ENTITIES {
            entity_repo
                .upsert(CareEntityModel {
                    id: id.to_string(),
                    name: name.to_string(),
                    code: code.to_string(),
                    logo_url: (id == SEED_ENTITY_ID).then(|| SEED_ENTITY_LOGO_URL.to_string()),
                })
                .await?;
        }

        let employees = [
            (
                "emp-alyssa",
                "Alyssa",
                RoleLevel::CrII,
                date(2022, 2, 10)?,
                (true, true, true),
                Some("Team lead"),
            ),
            (
                "emp-casey",
                "Casey",
                RoleLevel::CrII,
                date(2021, 9, 14)?,
                (true, true, false),
                None,
            ),
            (
                "emp-chasity",
                "Chasity",
                RoleLevel::CrI,
                date(2023, 5, 1)?,
                (true, true, false),
                None,
            ),
            (
                "emp-linh",
                "Linh",
                RoleLevel::CrI,
                date(2023, 11, 12)?,
                (true, false, false),
                None,
            ),
            (
                "emp-trish",
                "Trish",
                RoleLevel::CrII,
                date(2020, 3, 9)?,
                (true, true, true),
                None,
            ),
        ];

        let employee_repo = EmployeeRepository::new(self.db);
        for (id, name, role_level, hire_date, (incoming, dar, cpoe), notes) in employees {
            employee_repo
                .upsert(EmployeeModel {
                    id: id.to_string(),
                    name: name.to_string(),
                    role_level: role_level.as_str().to_string(),
                    active: true,
                    training: encode(&TrainingStatus {
                        incoming_trained: incoming,
                        dar_trained: dar,
                        cpoe_trained: cpoe,
                    })?,
                    hire_date: Some(hire_date),
                    end_date: None,
                    notes: notes.map(str::to_string),
                })
                .await?;
        }

        let columns = vec![
            column("TEAM_MEMBER", "TEAM MEMBER", ColumnType::Single, None),
            column("DAR_1", "DAR 1", ColumnType::Dar, Some("THP/THPS/THFM")),
            column("DAR_2", "DAR 2", ColumnType::Dar, Some("THSW/THAM/THAL/THD")),
            column("DAR_3", "DAR 3", ColumnType::Dar, Some("THR/THF/THS/HEB")),
            column("DAR_4", "DAR 4", ColumnType::Dar, Some("THFW/THAZ/THC/THWP")),
            column("CPOE", "CPOE", ColumnType::Single, None),
            column(
                "INCOMING_1",
                "New Incoming Items",
                ColumnType::Incoming,
                Some("THA/THB/THS"),
            ),
            column("CROSS_TRAINING", "Cross-Training", ColumnType::FreeText, None),
            column(
                "SPECIAL_PROJECTS",
                "Special Projects/Assignments",
                ColumnType::FreeText,
                None,
            ),
            column("EMAIL_PRIMARY", "3P Email (Primary)", ColumnType::Single, None),
            column("EMAIL_BACKUP", "3P Email (Backup)", ColumnType::Single, None),
            column("FLOAT", "Float", ColumnType::Single, None),
        ];

        ScheduleCycleRepository::new(self.db)
            .upsert(ScheduleCycleModel {
                id: DEMO_CYCLE_ID.to_string(),
                title: "Clinical Review Schedule May and June".to_string(),
                start_date: date(2025, 5, 19)?,
                end_date: date(2025, 6, 30)?,
                effective_date: date(2025, 5, 19)?,
                status: CycleStatus::Published.as_str().to_string(),
                notes: Some("Sample published cycle".to_string()),
                column_config: encode(&columns)?,
            })
            .await?;

        let assignments: [(&str, &str, &str, AssignmentValueType, &str, &[&str]); 5] = [
            (
                "assign-alyssa-dar1",
                "emp-alyssa",
                "DAR_1",
                AssignmentValueType::X,
                "X",
                &["THP", "THPS", "THFM"],
            ),
            (
                "assign-casey-incoming",
                "emp-casey",
                "INCOMING_1",
                AssignmentValueType::EntityList,
                "THAL/THB/THS",
                &["THAL", "THB", "THS"],
            ),
            (
                "assign-trish-cpoe",
                "emp-trish",
                "CPOE",
                AssignmentValueType::Note,
                "CPOE",
                &[],
            ),
            (
                "assign-linh-email",
                "emp-linh",
                "EMAIL_PRIMARY",
                AssignmentValueType::Note,
                "3:01PM EMAIL",
                &[],
            ),
            (
                "assign-chasity-special",
                "emp-chasity",
                "SPECIAL_PROJECTS",
                AssignmentValueType::FreeText,
                "SPECIAL PROJECT",
                &[],
            ),
        ];

        let assignment_repo = AssignmentRepository::new(self.db);
        for (id, employee_id, column_key, value_type, value_text, codes) in assignments {
            assignment_repo
                .upsert(AssignmentModel {
                    id: id.to_string(),
                    schedule_cycle_id: DEMO_CYCLE_ID.to_string(),
                    employee_id: employee_id.to_string(),
                    column_key: column_key.to_string(),
                    value_type: value_type.as_str().to_string(),
                    value_text: value_text.to_string(),
                    entity_codes: encode(&codes)?,
                })
                .await?;
        }

        TimeOffRepository::new(self.db)
            .upsert(TimeOffModel {
                id: "timeoff-alyssa".to_string(),
                employee_id: "emp-alyssa".to_string(),
                start_date: date(2025, 6, 10)?,
                end_date: date(2025, 6, 14)?,
                kind: "PTO".to_string(),
                note: Some("Family trip".to_string()),
            })
            .await?;

        ProductivityRepository::new(self.db)
            .upsert(ProductivityModel {
                id: "prod-thp".to_string(),
                schedule_cycle_id: DEMO_CYCLE_ID.to_string(),
                entity_code: "THP".to_string(),
                dar_count: 120,
                incoming_count: 45,
                cpoe_count: None,
            })
            .await?;

        tracing::info!("Loaded scheduler demonstration data into cycle {}", DEMO_CYCLE_ID);

        Ok(())
    }
}
