//! Contrato de locação domain entity

use chrono::{DateTime, NaiveDate, Utc};

/// Contract lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContratoStatus {
    Ativo,
    Suspenso,
    Encerrado,
}

impl ContratoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ativo => "ATIVO",
            Self::Suspenso => "SUSPENSO",
            Self::Encerrado => "ENCERRADO",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ATIVO" => Some(Self::Ativo),
            "SUSPENSO" => Some(Self::Suspenso),
            "ENCERRADO" => Some(Self::Encerrado),
            _ => None,
        }
    }
}

/// Rental contract binding an imóvel, a locador and a locatário.
#[derive(Debug, Clone)]
pub struct Contrato {
    pub id: i32,
    pub codigo: String,
    pub imovel_id: i32,
    pub locador_id: i32,
    pub locatario_id: i32,
    pub fiador_id: Option<i32>,
    pub data_inicio: NaiveDate,
    pub data_fim: Option<NaiveDate>,
    /// Monthly rent in centavos
    pub valor_aluguel_centavos: i64,
    /// Day of the month each cobrança falls due (1..=28)
    pub dia_vencimento: u8,
    pub status: ContratoStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contrato {
    pub fn is_ativo(&self) -> bool {
        self.status == ContratoStatus::Ativo
    }

    /// Whether the contract covers the given date
    pub fn vigente_em(&self, data: NaiveDate) -> bool {
        if !self.is_ativo() {
            return false;
        }
        if data < self.data_inicio {
            return false;
        }
        match self.data_fim {
            Some(fim) => data <= fim,
            None => true,
        }
    }

    /// Close the contract on the given date
    pub fn encerrar(&mut self, data_fim: NaiveDate) {
        self.data_fim = Some(data_fim);
        self.status = ContratoStatus::Encerrado;
    }

    /// Monthly rent formatted as "R$ 1234,56"
    pub fn format_valor_aluguel(&self) -> String {
        let major = self.valor_aluguel_centavos / 100;
        let minor = self.valor_aluguel_centavos % 100;
        format!("R$ {},{:02}", major, minor)
    }
}

/// Payload for opening a contract
#[derive(Debug, Clone)]
pub struct NovoContrato {
    pub codigo: String,
    pub imovel_id: i32,
    pub locador_id: i32,
    pub locatario_id: i32,
    pub fiador_id: Option<i32>,
    pub data_inicio: NaiveDate,
    pub valor_aluguel_centavos: i64,
    pub dia_vencimento: u8,
}

/// Partial update payload; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct AtualizaContrato {
    pub fiador_id: Option<i32>,
    pub valor_aluguel_centavos: Option<i64>,
    pub dia_vencimento: Option<u8>,
    pub status: Option<ContratoStatus>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Contrato {
        Contrato {
            id: 1,
            codigo: "CT-2024-001".into(),
            imovel_id: 5,
            locador_id: 10,
            locatario_id: 11,
            fiador_id: None,
            data_inicio: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            data_fim: None,
            valor_aluguel_centavos: 250_000,
            dia_vencimento: 10,
            status: ContratoStatus::Ativo,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn contrato_aberto_vigente_apos_inicio() {
        let ct = sample();
        assert!(ct.vigente_em(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
        assert!(!ct.vigente_em(NaiveDate::from_ymd_opt(2024, 2, 28).unwrap()));
    }

    #[test]
    fn encerrar_define_fim_e_status() {
        let mut ct = sample();
        let fim = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        ct.encerrar(fim);
        assert_eq!(ct.status, ContratoStatus::Encerrado);
        assert_eq!(ct.data_fim, Some(fim));
        assert!(!ct.is_ativo());
        // an encerrado contract is never vigente
        assert!(!ct.vigente_em(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
    }

    #[test]
    fn vigencia_respeita_data_fim() {
        let mut ct = sample();
        ct.data_fim = Some(NaiveDate::from_ymd_opt(2024, 8, 31).unwrap());
        assert!(ct.vigente_em(NaiveDate::from_ymd_opt(2024, 8, 31).unwrap()));
        assert!(!ct.vigente_em(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()));
    }

    #[test]
    fn formata_aluguel() {
        assert_eq!(sample().format_valor_aluguel(), "R$ 2500,00");
    }

    #[test]
    fn status_roundtrip() {
        for s in &[
            ContratoStatus::Ativo,
            ContratoStatus::Suspenso,
            ContratoStatus::Encerrado,
        ] {
            assert_eq!(ContratoStatus::from_str(s.as_str()), Some(*s));
        }
        assert!(ContratoStatus::from_str("CANCELADO").is_none());
    }
}
