use serde::{Deserialize, Serialize};

/// Тип операции с бюджетом
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Reserve,
    Debit,
    Refund,
    Transfer,
    Correction,
}

impl OperationType {
    pub fn code(&self) -> &'static str {
        match self {
            OperationType::Reserve => "RESERVE",
            OperationType::Debit => "DEBIT",
            OperationType::Refund => "REFUND",
            OperationType::Transfer => "TRANSFER",
            OperationType::Correction => "CORRECTION",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OperationType::Reserve => "Резервирование",
            OperationType::Debit => "Списание",
            OperationType::Refund => "Возврат",
            OperationType::Transfer => "Перевод",
            OperationType::Correction => "Корректировка",
        }
    }

    pub fn all() -> Vec<OperationType> {
        vec![
            OperationType::Reserve,
            OperationType::Debit,
            OperationType::Refund,
            OperationType::Transfer,
            OperationType::Correction,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RESERVE" => Some(OperationType::Reserve),
            "DEBIT" => Some(OperationType::Debit),
            "REFUND" => Some(OperationType::Refund),
            "TRANSFER" => Some(OperationType::Transfer),
            "CORRECTION" => Some(OperationType::Correction),
            _ => None,
        }
    }
}
