//! Imóvel domain entity

use chrono::{DateTime, Utc};

/// Commercial situation of the property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SituacaoImovel {
    Disponivel,
    Alugado,
    Reservado,
    Indisponivel,
}

impl SituacaoImovel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disponivel => "DISPONIVEL",
            Self::Alugado => "ALUGADO",
            Self::Reservado => "RESERVADO",
            Self::Indisponivel => "INDISPONIVEL",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "DISPONIVEL" => Some(Self::Disponivel),
            "ALUGADO" => Some(Self::Alugado),
            "RESERVADO" => Some(Self::Reservado),
            "INDISPONIVEL" => Some(Self::Indisponivel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Imovel {
    pub id: i32,
    /// Internal reference code shown on listings and contracts
    pub codigo_interno: String,
    /// Property kind (casa, apartamento, sala comercial, ...)
    pub tipo: String,
    pub endereco: String,
    pub bairro_id: Option<i32>,
    pub proprietario_id: i32,
    pub situacao: SituacaoImovel,
    pub disponivel_aluguel: bool,
    /// Asking rent in centavos
    pub valor_aluguel_centavos: Option<i64>,
    pub qtd_quartos: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Imovel {
    /// Whether the property can enter a new rental contract
    pub fn pode_alugar(&self) -> bool {
        self.disponivel_aluguel && self.situacao == SituacaoImovel::Disponivel
    }

    /// Asking rent formatted as "R$ 1234,56"
    pub fn format_valor_aluguel(&self) -> Option<String> {
        self.valor_aluguel_centavos.map(|v| {
            let major = v / 100;
            let minor = v % 100;
            format!("R$ {},{:02}", major, minor)
        })
    }
}

/// Payload for registering a property
#[derive(Debug, Clone)]
pub struct NovoImovel {
    pub codigo_interno: String,
    pub tipo: String,
    pub endereco: String,
    pub bairro_id: Option<i32>,
    pub proprietario_id: i32,
    pub disponivel_aluguel: bool,
    pub valor_aluguel_centavos: Option<i64>,
    pub qtd_quartos: i32,
}

/// Partial update payload; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct AtualizaImovel {
    pub tipo: Option<String>,
    pub endereco: Option<String>,
    pub bairro_id: Option<i32>,
    pub situacao: Option<SituacaoImovel>,
    pub disponivel_aluguel: Option<bool>,
    pub valor_aluguel_centavos: Option<i64>,
    pub qtd_quartos: Option<i32>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Imovel {
        Imovel {
            id: 1,
            codigo_interno: "IM-0001".into(),
            tipo: "Apartamento".into(),
            endereco: "Rua das Flores, 100".into(),
            bairro_id: None,
            proprietario_id: 10,
            situacao: SituacaoImovel::Disponivel,
            disponivel_aluguel: true,
            valor_aluguel_centavos: Some(185_000),
            qtd_quartos: 2,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn disponivel_pode_alugar() {
        let mut im = sample();
        assert!(im.pode_alugar());
        im.situacao = SituacaoImovel::Alugado;
        assert!(!im.pode_alugar());
    }

    #[test]
    fn formata_valor_em_reais() {
        let im = sample();
        assert_eq!(im.format_valor_aluguel().as_deref(), Some("R$ 1850,00"));
    }

    #[test]
    fn situacao_roundtrip() {
        for s in &[
            SituacaoImovel::Disponivel,
            SituacaoImovel::Alugado,
            SituacaoImovel::Reservado,
            SituacaoImovel::Indisponivel,
        ] {
            assert_eq!(SituacaoImovel::from_str(s.as_str()), Some(*s));
        }
        assert!(SituacaoImovel::from_str("VENDIDO").is_none());
    }
}
