use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct RestockRequestResource {
    #[validate(length(min = 1))]
    pub product_name: String,

    #[validate(range(min = 1))]
    pub quantity: i64,
}
