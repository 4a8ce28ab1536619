//! Bairro DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::infrastructure::database::entities::bairro;

#[derive(Debug, Serialize, ToSchema)]
pub struct BairroDto {
    pub id: i32,
    pub cidade_id: i32,
    pub nome: String,
    pub codigo: Option<String>,
}

impl From<bairro::Model> for BairroDto {
    fn from(m: bairro::Model) -> Self {
        Self {
            id: m.id,
            cidade_id: m.cidade_id,
            nome: m.nome,
            codigo: m.codigo,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBairroRequest {
    pub cidade_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub nome: String,
    #[validate(length(max = 10))]
    pub codigo: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBairroRequest {
    #[validate(length(min = 1, max = 100))]
    pub nome: Option<String>,
    #[validate(length(max = 10))]
    pub codigo: Option<String>,
}
