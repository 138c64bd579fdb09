use crate::enums::{
    ArtifactType, BudgetType, OperationObject, OperationType, OrderAction, PromotionType,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Распределение суммы операции на один центр затрат
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCenterAssignment {
    pub cost_center_id: String,
    pub amount: f64,
}

/// Операция с бюджетом (проекция p910)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub id: String,
    #[serde(default)]
    pub campaign_id: Option<String>,
    #[serde(default)]
    pub campaign_name: Option<String>,
    #[serde(default)]
    pub activity_id: Option<String>,
    #[serde(default)]
    pub activity_name: Option<String>,
    #[serde(default)]
    pub certificate_name: Option<String>,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub order_client: Option<String>,
    #[serde(default)]
    pub order_action: Option<OrderAction>,
    pub operation_type: OperationType,
    #[serde(default)]
    pub promotion_type: Option<PromotionType>,
    #[serde(default)]
    pub artifact_name: Option<String>,
    #[serde(default)]
    pub artifact_type: Option<ArtifactType>,
    /// Сумма операции в разрезе центров затрат
    #[serde(default)]
    pub assignment: Vec<CostCenterAssignment>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub store_id: Option<String>,
    #[serde(default)]
    pub marketing_id: Option<String>,
    #[serde(default)]
    pub marketing_name: Option<String>,
    /// ISO 8601
    pub created_at: String,
}

/// Основные поля фильтра (всегда видны в панели)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<Vec<String>>,
}

/// Расширенные поля фильтра ("Другие фильтры")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtendedFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_at_from: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_at_to: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_type: Option<BudgetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<ArtifactType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_type: Option<PromotionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<OperationType>,
}

/// Фильтр списка операций: основная и расширенная части на одном уровне
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationsFilter {
    #[serde(flatten)]
    pub basic: BasicFilter,
    #[serde(flatten)]
    pub extended: ExtendedFilter,
}

/// Количество операций по объекту (для вкладок)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSummaryItem {
    pub object: OperationObject,
    pub count: u64,
}

/// Элемент справочника (центр затрат, магазин, кампания, активность, маркетинг)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryItem {
    pub id: String,
    pub name: String,
}

/// Запрос на получение страницы операций
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationsListRequest {
    #[serde(flatten)]
    pub filter: OperationsFilter,
    pub object: OperationObject,
    pub page: usize,
    pub page_size: usize,
}

/// Страница операций
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationsListResponse {
    pub items: Vec<Operation>,
    pub total_count: usize,
}

/// Запрос на получение количества операций по объектам
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationsSummaryRequest {
    #[serde(flatten)]
    pub filter: OperationsFilter,
}
