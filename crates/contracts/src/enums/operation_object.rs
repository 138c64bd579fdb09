use serde::{Deserialize, Serialize};

/// Объект операции: определяет вкладку списка, набор колонок и параметр запроса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationObject {
    Campaign,
    Activity,
    Promotion,
    Marketing,
    Certificate,
}

impl OperationObject {
    /// Код объекта (совпадает с сериализованным значением)
    pub fn code(&self) -> &'static str {
        match self {
            OperationObject::Campaign => "CAMPAIGN",
            OperationObject::Activity => "ACTIVITY",
            OperationObject::Promotion => "PROMOTION",
            OperationObject::Marketing => "MARKETING",
            OperationObject::Certificate => "CERTIFICATE",
        }
    }

    /// Человекочитаемое название вкладки
    pub fn display_name(&self) -> &'static str {
        match self {
            OperationObject::Campaign => "Кампании",
            OperationObject::Activity => "Активности",
            OperationObject::Promotion => "Акции",
            OperationObject::Marketing => "Маркетинг",
            OperationObject::Certificate => "Сертификаты",
        }
    }

    /// Имя иконки вкладки
    pub fn icon(&self) -> &'static str {
        match self {
            OperationObject::Campaign => "megaphone",
            OperationObject::Activity => "activity",
            OperationObject::Promotion => "percent",
            OperationObject::Marketing => "trending-up",
            OperationObject::Certificate => "award",
        }
    }

    /// Все объекты в порядке отображения вкладок
    pub fn all() -> Vec<OperationObject> {
        vec![
            OperationObject::Campaign,
            OperationObject::Activity,
            OperationObject::Promotion,
            OperationObject::Marketing,
            OperationObject::Certificate,
        ]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CAMPAIGN" => Some(OperationObject::Campaign),
            "ACTIVITY" => Some(OperationObject::Activity),
            "PROMOTION" => Some(OperationObject::Promotion),
            "MARKETING" => Some(OperationObject::Marketing),
            "CERTIFICATE" => Some(OperationObject::Certificate),
            _ => None,
        }
    }
}

impl Default for OperationObject {
    fn default() -> Self {
        OperationObject::Campaign
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for object in OperationObject::all() {
            assert_eq!(OperationObject::from_code(object.code()), Some(object));
        }
        assert_eq!(OperationObject::from_code("campaign"), None);
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&OperationObject::Promotion).unwrap();
        assert_eq!(json, "\"PROMOTION\"");
    }
}
