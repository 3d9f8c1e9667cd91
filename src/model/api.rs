use serde::{Deserialize, Serialize};

/// JSON body of every failed request, e.g. `{"error": "Protocol not found."}`
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
