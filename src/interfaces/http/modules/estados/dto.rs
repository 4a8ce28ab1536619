//! Estado DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::infrastructure::database::entities::estado;

#[derive(Debug, Serialize, ToSchema)]
pub struct EstadoDto {
    pub id: i32,
    pub nome: String,
    pub uf: String,
}

impl From<estado::Model> for EstadoDto {
    fn from(m: estado::Model) -> Self {
        Self {
            id: m.id,
            nome: m.nome,
            uf: m.uf,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEstadoRequest {
    #[validate(length(min = 1, max = 100))]
    pub nome: String,
    #[validate(length(equal = 2))]
    pub uf: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEstadoRequest {
    #[validate(length(min = 1, max = 100))]
    pub nome: Option<String>,
    #[validate(length(equal = 2))]
    pub uf: Option<String>,
}
