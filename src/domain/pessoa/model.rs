//! Pessoa domain entity
//!
//! A pessoa is anyone the back office deals with: locadores (landlords),
//! locatários (tenants), fiadores (guarantors). One record can hold several
//! roles at once, so the roles are independent flags rather than a single
//! type column.

use chrono::{DateTime, Utc};

/// Natural or legal person
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaturezaPessoa {
    Fisica,
    Juridica,
}

impl NaturezaPessoa {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fisica => "F",
            Self::Juridica => "J",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "F" => Some(Self::Fisica),
            "J" => Some(Self::Juridica),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Pessoa {
    pub id: i32,
    pub nome: String,
    /// CPF or CNPJ, digits only
    pub documento: String,
    pub natureza: NaturezaPessoa,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub locador: bool,
    pub locatario: bool,
    pub fiador: bool,
    pub ativo: bool,
    pub observacoes: Option<String>,
    pub dt_cadastro: DateTime<Utc>,
}

impl Pessoa {
    /// Whether the record carries at least one business role
    pub fn tem_vinculo(&self) -> bool {
        self.locador || self.locatario || self.fiador
    }
}

/// Payload for creating a pessoa
#[derive(Debug, Clone)]
pub struct NovaPessoa {
    pub nome: String,
    pub documento: String,
    pub natureza: NaturezaPessoa,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub locador: bool,
    pub locatario: bool,
    pub fiador: bool,
    pub observacoes: Option<String>,
}

/// Partial update payload; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct AtualizaPessoa {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub locador: Option<bool>,
    pub locatario: Option<bool>,
    pub fiador: Option<bool>,
    pub ativo: Option<bool>,
    pub observacoes: Option<String>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natureza_roundtrip() {
        for n in &[NaturezaPessoa::Fisica, NaturezaPessoa::Juridica] {
            assert_eq!(NaturezaPessoa::from_str(n.as_str()), Some(*n));
        }
        assert!(NaturezaPessoa::from_str("X").is_none());
    }

    #[test]
    fn vinculo_requires_some_role() {
        let mut p = Pessoa {
            id: 1,
            nome: "Maria Souza".into(),
            documento: "12345678901".into(),
            natureza: NaturezaPessoa::Fisica,
            email: None,
            telefone: None,
            locador: false,
            locatario: false,
            fiador: false,
            ativo: true,
            observacoes: None,
            dt_cadastro: Utc::now(),
        };
        assert!(!p.tem_vinculo());
        p.locatario = true;
        assert!(p.tem_vinculo());
    }
}
