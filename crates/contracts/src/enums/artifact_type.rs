use serde::{Deserialize, Serialize};

/// Тип артефакта (сертификат, купон и т.п.), выданного в рамках операции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArtifactType {
    Certificate,
    Coupon,
    Gift,
    PromoCode,
}

impl ArtifactType {
    pub fn code(&self) -> &'static str {
        match self {
            ArtifactType::Certificate => "CERTIFICATE",
            ArtifactType::Coupon => "COUPON",
            ArtifactType::Gift => "GIFT",
            ArtifactType::PromoCode => "PROMO_CODE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ArtifactType::Certificate => "Сертификат",
            ArtifactType::Coupon => "Купон",
            ArtifactType::Gift => "Подарок",
            ArtifactType::PromoCode => "Промокод",
        }
    }

    /// Имя иконки артефакта
    pub fn icon(&self) -> &'static str {
        match self {
            ArtifactType::Certificate => "award",
            ArtifactType::Coupon => "ticket",
            ArtifactType::Gift => "gift",
            ArtifactType::PromoCode => "tag",
        }
    }

    pub fn all() -> Vec<ArtifactType> {
        vec![
            ArtifactType::Certificate,
            ArtifactType::Coupon,
            ArtifactType::Gift,
            ArtifactType::PromoCode,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CERTIFICATE" => Some(ArtifactType::Certificate),
            "COUPON" => Some(ArtifactType::Coupon),
            "GIFT" => Some(ArtifactType::Gift),
            "PROMO_CODE" => Some(ArtifactType::PromoCode),
            _ => None,
        }
    }
}
