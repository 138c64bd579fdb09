use serde::{Deserialize, Serialize};

/// Действие с заказом, породившее операцию
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderAction {
    Purchase,
    Return,
    Cancel,
}

impl OrderAction {
    pub fn code(&self) -> &'static str {
        match self {
            OrderAction::Purchase => "PURCHASE",
            OrderAction::Return => "RETURN",
            OrderAction::Cancel => "CANCEL",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderAction::Purchase => "Покупка",
            OrderAction::Return => "Возврат",
            OrderAction::Cancel => "Отмена",
        }
    }

    pub fn all() -> Vec<OrderAction> {
        vec![OrderAction::Purchase, OrderAction::Return, OrderAction::Cancel]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PURCHASE" => Some(OrderAction::Purchase),
            "RETURN" => Some(OrderAction::Return),
            "CANCEL" => Some(OrderAction::Cancel),
            _ => None,
        }
    }
}
