use serde::{Deserialize, Serialize};

/// Email and password submitted on the admin login form
#[derive(Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Password submitted to enter supervisor mode of the scheduler
#[derive(Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SupervisorLoginDto {
    pub password: String,
}

/// The administrator currently logged in
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct AdminDto {
    pub email: String,
}
