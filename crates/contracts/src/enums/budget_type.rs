use serde::{Deserialize, Serialize};

/// Тип бюджета
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetType {
    Marketing,
    Promo,
    Loyalty,
}

impl BudgetType {
    pub fn code(&self) -> &'static str {
        match self {
            BudgetType::Marketing => "MARKETING",
            BudgetType::Promo => "PROMO",
            BudgetType::Loyalty => "LOYALTY",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BudgetType::Marketing => "Маркетинговый",
            BudgetType::Promo => "Промо",
            BudgetType::Loyalty => "Программа лояльности",
        }
    }

    pub fn all() -> Vec<BudgetType> {
        vec![BudgetType::Marketing, BudgetType::Promo, BudgetType::Loyalty]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MARKETING" => Some(BudgetType::Marketing),
            "PROMO" => Some(BudgetType::Promo),
            "LOYALTY" => Some(BudgetType::Loyalty),
            _ => None,
        }
    }
}
