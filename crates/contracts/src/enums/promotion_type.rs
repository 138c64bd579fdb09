use serde::{Deserialize, Serialize};

/// Тип промо-акции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromotionType {
    Discount,
    Gift,
    Bonus,
    SpecialPrice,
    PromoCode,
}

impl PromotionType {
    pub fn code(&self) -> &'static str {
        match self {
            PromotionType::Discount => "DISCOUNT",
            PromotionType::Gift => "GIFT",
            PromotionType::Bonus => "BONUS",
            PromotionType::SpecialPrice => "SPECIAL_PRICE",
            PromotionType::PromoCode => "PROMO_CODE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PromotionType::Discount => "Скидка",
            PromotionType::Gift => "Подарок",
            PromotionType::Bonus => "Бонусы",
            PromotionType::SpecialPrice => "Специальная цена",
            PromotionType::PromoCode => "Промокод",
        }
    }

    pub fn all() -> Vec<PromotionType> {
        vec![
            PromotionType::Discount,
            PromotionType::Gift,
            PromotionType::Bonus,
            PromotionType::SpecialPrice,
            PromotionType::PromoCode,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "DISCOUNT" => Some(PromotionType::Discount),
            "GIFT" => Some(PromotionType::Gift),
            "BONUS" => Some(PromotionType::Bonus),
            "SPECIAL_PRICE" => Some(PromotionType::SpecialPrice),
            "PROMO_CODE" => Some(PromotionType::PromoCode),
            _ => None,
        }
    }
}
