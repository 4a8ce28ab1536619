//! Boleto domain entity
//!
//! A boleto is the payment slip issued for one cobrança of a contract. Its
//! status walks PENDENTE → REGISTRADO → PAGO, with VENCIDO/BAIXADO/
//! PROTESTADO/ERRO as side exits. Once settled (PAGO or BAIXADO) the record
//! is immutable.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{DomainError, DomainResult};

/// Boleto lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoletoStatus {
    Pendente,
    Registrado,
    Pago,
    Vencido,
    Baixado,
    Protestado,
    Erro,
}

impl BoletoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendente => "PENDENTE",
            Self::Registrado => "REGISTRADO",
            Self::Pago => "PAGO",
            Self::Vencido => "VENCIDO",
            Self::Baixado => "BAIXADO",
            Self::Protestado => "PROTESTADO",
            Self::Erro => "ERRO",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDENTE" => Some(Self::Pendente),
            "REGISTRADO" => Some(Self::Registrado),
            "PAGO" => Some(Self::Pago),
            "VENCIDO" => Some(Self::Vencido),
            "BAIXADO" => Some(Self::Baixado),
            "PROTESTADO" => Some(Self::Protestado),
            "ERRO" => Some(Self::Erro),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Boleto {
    pub id: i32,
    pub contrato_id: i32,
    /// Pessoa charged by the slip (normally the locatário)
    pub pagador_id: i32,
    /// Bank-side identifier of the slip
    pub nosso_numero: String,
    /// Free reference shown to the payer
    pub seu_numero: Option<String>,
    /// Face value in centavos
    pub valor_nominal_centavos: i64,
    pub data_emissao: NaiveDate,
    pub data_vencimento: NaiveDate,
    pub data_pagamento: Option<NaiveDate>,
    /// Settled amount in centavos (may differ from face value)
    pub valor_pago_centavos: Option<i64>,
    pub status: BoletoStatus,
    pub linha_digitavel: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Boleto {
    pub fn is_pago(&self) -> bool {
        self.status == BoletoStatus::Pago
    }

    /// Whether the slip can still receive a payment
    pub fn aceita_pagamento(&self) -> bool {
        matches!(
            self.status,
            BoletoStatus::Pendente | BoletoStatus::Registrado | BoletoStatus::Vencido
        )
    }

    /// Overdue and still collectable on the given date
    pub fn esta_vencido(&self, hoje: NaiveDate) -> bool {
        self.data_vencimento < hoje && self.aceita_pagamento()
    }

    /// Settle the slip. Rejected when the status does not accept payment.
    pub fn registrar_pagamento(
        &mut self,
        data: NaiveDate,
        valor_centavos: i64,
    ) -> DomainResult<()> {
        if !self.aceita_pagamento() {
            return Err(DomainError::InvalidOperation(format!(
                "Boleto {} cannot be paid in status {}",
                self.nosso_numero,
                self.status.as_str()
            )));
        }
        self.data_pagamento = Some(data);
        self.valor_pago_centavos = Some(valor_centavos);
        self.status = BoletoStatus::Pago;
        Ok(())
    }

    /// Write the slip off without payment. Paid slips cannot be written off.
    pub fn baixar(&mut self) -> DomainResult<()> {
        if self.is_pago() || self.status == BoletoStatus::Baixado {
            return Err(DomainError::InvalidOperation(format!(
                "Boleto {} cannot be written off in status {}",
                self.nosso_numero,
                self.status.as_str()
            )));
        }
        self.status = BoletoStatus::Baixado;
        Ok(())
    }

    /// Face value formatted as "R$ 1234,56"
    pub fn format_valor(&self) -> String {
        let major = self.valor_nominal_centavos / 100;
        let minor = self.valor_nominal_centavos % 100;
        format!("R$ {},{:02}", major, minor)
    }
}

/// Payload for issuing a boleto
#[derive(Debug, Clone)]
pub struct NovoBoleto {
    pub contrato_id: i32,
    pub pagador_id: i32,
    pub nosso_numero: String,
    pub seu_numero: Option<String>,
    pub valor_nominal_centavos: i64,
    pub data_emissao: NaiveDate,
    pub data_vencimento: NaiveDate,
    pub linha_digitavel: Option<String>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Boleto {
        Boleto {
            id: 1,
            contrato_id: 1,
            pagador_id: 11,
            nosso_numero: "00000000123".into(),
            seu_numero: None,
            valor_nominal_centavos: 250_000,
            data_emissao: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            data_vencimento: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            data_pagamento: None,
            valor_pago_centavos: None,
            status: BoletoStatus::Registrado,
            linha_digitavel: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn pagamento_marca_pago() {
        let mut b = sample();
        let data = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        b.registrar_pagamento(data, 250_000).unwrap();
        assert!(b.is_pago());
        assert_eq!(b.data_pagamento, Some(data));
        assert_eq!(b.valor_pago_centavos, Some(250_000));
    }

    #[test]
    fn boleto_pago_rejeita_novo_pagamento() {
        let mut b = sample();
        let data = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        b.registrar_pagamento(data, 250_000).unwrap();
        let err = b.registrar_pagamento(data, 100).unwrap_err();
        assert!(matches!(err, DomainError::InvalidOperation(_)));
    }

    #[test]
    fn boleto_pago_nao_pode_ser_baixado() {
        let mut b = sample();
        b.registrar_pagamento(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(), 250_000)
            .unwrap();
        assert!(b.baixar().is_err());
    }

    #[test]
    fn baixa_encerra_cobranca() {
        let mut b = sample();
        b.baixar().unwrap();
        assert_eq!(b.status, BoletoStatus::Baixado);
        assert!(!b.aceita_pagamento());
        // a written-off slip is no longer overdue
        assert!(!b.esta_vencido(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
    }

    #[test]
    fn vencimento_compara_com_hoje() {
        let b = sample();
        assert!(!b.esta_vencido(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()));
        assert!(b.esta_vencido(NaiveDate::from_ymd_opt(2024, 1, 11).unwrap()));
    }

    #[test]
    fn formata_valor_nominal() {
        let b = sample();
        assert_eq!(b.format_valor(), "R$ 2500,00");
    }

    #[test]
    fn status_roundtrip() {
        for s in &[
            BoletoStatus::Pendente,
            BoletoStatus::Registrado,
            BoletoStatus::Pago,
            BoletoStatus::Vencido,
            BoletoStatus::Baixado,
            BoletoStatus::Protestado,
            BoletoStatus::Erro,
        ] {
            assert_eq!(BoletoStatus::from_str(s.as_str()), Some(*s));
        }
        assert!(BoletoStatus::from_str("CANCELADO").is_none());
    }
}
