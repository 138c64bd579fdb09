//! Колонки таблицы операций
//!
//! Набор колонок зависит от объекта операций и двух справочников
//! (центры затрат для сумм, магазины для акций). Рендер колонки возвращает
//! `CellValue`, а как его нарисовать решает view.

use super::labels;
use super::routes;
use crate::shared::date_utils::format_datetime_short;
use crate::shared::directory::{Directory, DirectoryMap};
use contracts::enums::OperationObject;
use contracts::projections::p910_budget_operations::dto::Operation;
use std::fmt;
use std::sync::Arc;

/// Сумма на один центр затрат
#[derive(Debug, Clone, PartialEq)]
pub struct AmountTag {
    /// `None`, пока справочник не загружен или центра в нём нет
    pub cost_center: Option<String>,
    pub amount: f64,
}

/// Содержимое ячейки
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Link { href: String, text: String },
    Amounts(Vec<AmountTag>),
    Artifact {
        icon: &'static str,
        title: &'static str,
        name: String,
    },
}

impl CellValue {
    fn text(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => CellValue::Text(v.to_string()),
            _ => CellValue::Empty,
        }
    }

    fn link(href: impl FnOnce() -> String, text: Option<&str>) -> Self {
        match text {
            Some(t) if !t.is_empty() => CellValue::Link {
                href: href(),
                text: t.to_string(),
            },
            _ => CellValue::Empty,
        }
    }
}

pub type CellRender = Arc<dyn Fn(&Operation) -> CellValue + Send + Sync>;

#[derive(Clone)]
pub struct ColumnDef {
    pub key: &'static str,
    pub title: &'static str,
    pub width: Option<f64>,
    pub render: CellRender,
}

impl ColumnDef {
    fn new(
        key: &'static str,
        title: &'static str,
        render: impl Fn(&Operation) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            title,
            width: None,
            render: Arc::new(render),
        }
    }

    fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn cell(&self, op: &Operation) -> CellValue {
        (self.render)(op)
    }
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("width", &self.width)
            .finish()
    }
}

/// Набор колонок; равенство по указателю, чтобы `Memo` не перерисовывал
/// таблицу, пока набор не пересобран
#[derive(Debug, Clone)]
pub struct ColumnSet(pub Arc<Vec<ColumnDef>>);

impl PartialEq for ColumnSet {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl ColumnSet {
    pub fn keys(&self) -> Vec<&'static str> {
        self.0.iter().map(|c| c.key).collect()
    }
}

fn campaign_name() -> ColumnDef {
    ColumnDef::new("campaignName", labels::CAMPAIGN_NAME, |op| {
        let id = op.campaign_id.as_deref().unwrap_or_default();
        CellValue::link(|| routes::campaign_path(id), op.campaign_name.as_deref())
    })
}

fn activity_name() -> ColumnDef {
    ColumnDef::new("activityName", labels::ACTIVITY_NAME, |op| {
        let id = op.activity_id.as_deref().unwrap_or_default();
        CellValue::link(|| routes::activity_path(id), op.activity_name.as_deref())
    })
}

fn certificate_name() -> ColumnDef {
    ColumnDef::new("certificateName", labels::CERTIFICATE_NAME, |op| {
        let name = op.certificate_name.as_deref();
        CellValue::link(
            || routes::activity_artifacts_path(name.unwrap_or_default()),
            name,
        )
    })
}

fn operation_type() -> ColumnDef {
    ColumnDef::new("operationType", labels::OPERATION_TYPE, |op| {
        CellValue::Text(op.operation_type.display_name().to_string())
    })
    .width(100.0)
}

fn amount(cost_centers: DirectoryMap) -> ColumnDef {
    ColumnDef::new("amount", labels::AMOUNT, move |op| {
        CellValue::Amounts(
            op.assignment
                .iter()
                .map(|a| AmountTag {
                    cost_center: cost_centers.get(&a.cost_center_id).map(|i| i.name.clone()),
                    amount: a.amount,
                })
                .collect(),
        )
    })
}

fn author() -> ColumnDef {
    ColumnDef::new("author", labels::AUTHOR, |op| {
        CellValue::text(op.author.as_deref())
    })
}

fn marketing_name() -> ColumnDef {
    ColumnDef::new("marketingName", labels::MARKETING_NAME, |op| {
        CellValue::text(op.marketing_name.as_deref())
    })
}

fn store(stores: DirectoryMap) -> ColumnDef {
    ColumnDef::new("storeId", labels::STORE, move |op| {
        let name = op
            .store_id
            .as_ref()
            .and_then(|id| stores.get(id))
            .map(|item| item.name.as_str());
        CellValue::text(name)
    })
}

fn artifact_name() -> ColumnDef {
    ColumnDef::new("artifactName", labels::ARTIFACT_NAME, |op| {
        match op.artifact_name.as_deref() {
            Some(name) if !name.is_empty() => CellValue::Artifact {
                icon: op.artifact_type.map(|t| t.icon()).unwrap_or("artifact"),
                title: op.artifact_type.map(|t| t.display_name()).unwrap_or(""),
                name: name.to_string(),
            },
            _ => CellValue::Empty,
        }
    })
}

fn promotion_type() -> ColumnDef {
    ColumnDef::new("promotionType", labels::PROMOTION_TYPE, |op| {
        CellValue::text(op.promotion_type.map(|t| t.display_name()))
    })
}

fn order_number() -> ColumnDef {
    ColumnDef::new("orderNumber", labels::ORDER_NUMBER, |op| {
        let number = op.order_number.as_deref();
        CellValue::link(|| routes::orders_path(number.unwrap_or_default()), number)
    })
}

fn order_client() -> ColumnDef {
    ColumnDef::new("orderClient", labels::ORDER_CLIENT, |op| {
        CellValue::text(op.order_client.as_deref())
    })
}

fn order_action() -> ColumnDef {
    ColumnDef::new("orderAction", labels::ORDER_ACTION, |op| {
        CellValue::text(op.order_action.map(|a| a.display_name()))
    })
}

fn created_at() -> ColumnDef {
    ColumnDef::new("createdAt", labels::CREATED_AT, |op| {
        CellValue::Text(format_datetime_short(&op.created_at))
    })
    .width(140.0)
}

/// Колонки для объекта в порядке отображения
pub fn object_columns(
    object: OperationObject,
    cost_centers: &Directory,
    stores: &Directory,
) -> Vec<ColumnDef> {
    let cost_centers = cost_centers.as_map();
    match object {
        OperationObject::Campaign | OperationObject::Activity | OperationObject::Certificate => {
            vec![
                campaign_name(),
                activity_name(),
                certificate_name(),
                operation_type(),
                amount(cost_centers),
                author(),
                created_at(),
            ]
        }
        OperationObject::Promotion => vec![
            campaign_name(),
            activity_name(),
            order_number(),
            order_client(),
            store(stores.as_map()),
            order_action(),
            operation_type(),
            promotion_type(),
            artifact_name(),
            amount(cost_centers),
            created_at(),
        ],
        OperationObject::Marketing => vec![
            campaign_name(),
            activity_name(),
            operation_type(),
            marketing_name(),
            amount(cost_centers),
            author(),
            created_at(),
        ],
    }
}

type CacheKey = (OperationObject, u64, u64);

/// Кэш набора колонок по (объект, версия центров затрат, версия магазинов)
#[derive(Debug, Default)]
pub struct ColumnsCache {
    entry: Option<(CacheKey, ColumnSet)>,
}

impl ColumnsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(
        &mut self,
        object: OperationObject,
        cost_centers: &Directory,
        stores: &Directory,
    ) -> ColumnSet {
        let key = (object, cost_centers.version(), stores.version());
        if let Some((cached_key, set)) = &self.entry {
            if *cached_key == key {
                return set.clone();
            }
        }
        let set = ColumnSet(Arc::new(object_columns(object, cost_centers, stores)));
        self.entry = Some((key, set.clone()));
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{ArtifactType, OperationType, OrderAction};
    use contracts::projections::p910_budget_operations::dto::{
        CostCenterAssignment, DirectoryItem,
    };

    fn operation() -> Operation {
        serde_json::from_value(serde_json::json!({
            "id": "op-1",
            "campaignId": "c-7",
            "campaignName": "Весна",
            "operationType": "DEBIT",
            "createdAt": "2024-03-15T14:02:26Z"
        }))
        .unwrap()
    }

    fn directory(items: &[(&str, &str)]) -> Directory {
        let mut dir = Directory::new();
        dir.complete(Ok(items
            .iter()
            .map(|(id, name)| DirectoryItem {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect()));
        dir
    }

    fn keys(object: OperationObject) -> Vec<&'static str> {
        object_columns(object, &Directory::new(), &Directory::new())
            .iter()
            .map(|c| c.key)
            .collect()
    }

    #[test]
    fn test_every_object_has_columns() {
        for object in OperationObject::all() {
            assert!(!keys(object).is_empty(), "{:?}", object);
        }
    }

    #[test]
    fn test_column_order_is_fixed() {
        assert_eq!(
            keys(OperationObject::Campaign),
            vec![
                "campaignName",
                "activityName",
                "certificateName",
                "operationType",
                "amount",
                "author",
                "createdAt"
            ]
        );
        assert_eq!(keys(OperationObject::Activity), keys(OperationObject::Campaign));
        assert_eq!(keys(OperationObject::Certificate), keys(OperationObject::Campaign));
        assert_eq!(
            keys(OperationObject::Marketing),
            vec![
                "campaignName",
                "activityName",
                "operationType",
                "marketingName",
                "amount",
                "author",
                "createdAt"
            ]
        );
    }

    #[test]
    fn test_promotion_columns() {
        let promo = keys(OperationObject::Promotion);
        assert_eq!(promo.len(), 11);
        for key in ["orderNumber", "orderAction", "promotionType", "storeId"] {
            assert!(promo.contains(&key), "{}", key);
        }
        assert!(!promo.contains(&"marketingName"));
    }

    #[test]
    fn test_widths() {
        let cols = object_columns(OperationObject::Campaign, &Directory::new(), &Directory::new());
        let width = |key: &str| cols.iter().find(|c| c.key == key).and_then(|c| c.width);
        assert_eq!(width("operationType"), Some(100.0));
        assert_eq!(width("createdAt"), Some(140.0));
        assert_eq!(width("author"), None);
    }

    #[test]
    fn test_cache_returns_same_set_until_key_changes() {
        let mut cache = ColumnsCache::new();
        let mut cost_centers = Directory::new();
        let stores = Directory::new();

        let a = cache.get(OperationObject::Campaign, &cost_centers, &stores);
        let b = cache.get(OperationObject::Campaign, &cost_centers, &stores);
        assert!(Arc::ptr_eq(&a.0, &b.0));
        assert_eq!(a, b);

        let c = cache.get(OperationObject::Promotion, &cost_centers, &stores);
        assert_ne!(a, c);

        cost_centers.complete(Ok(vec![]));
        let d = cache.get(OperationObject::Promotion, &cost_centers, &stores);
        assert_ne!(c, d);
    }

    #[test]
    fn test_amount_renders_tag_per_assignment() {
        let mut op = operation();
        op.assignment = vec![
            CostCenterAssignment {
                cost_center_id: "cc-1".to_string(),
                amount: 100.0,
            },
            CostCenterAssignment {
                cost_center_id: "cc-missing".to_string(),
                amount: -5.5,
            },
        ];
        let cost_centers = directory(&[("cc-1", "Москва")]);
        let cols = object_columns(OperationObject::Campaign, &cost_centers, &Directory::new());
        let amount = cols.iter().find(|c| c.key == "amount").unwrap();

        assert_eq!(
            amount.cell(&op),
            CellValue::Amounts(vec![
                AmountTag {
                    cost_center: Some("Москва".to_string()),
                    amount: 100.0
                },
                AmountTag {
                    cost_center: None,
                    amount: -5.5
                },
            ])
        );
    }

    #[test]
    fn test_store_without_directory_entry_is_empty() {
        let mut op = operation();
        op.store_id = Some("st-1".to_string());
        let cols = object_columns(OperationObject::Promotion, &Directory::new(), &Directory::new());
        let store = cols.iter().find(|c| c.key == "storeId").unwrap();
        assert_eq!(store.cell(&op), CellValue::Empty);

        let stores = directory(&[("st-1", "ТЦ Галерея")]);
        let cols = object_columns(OperationObject::Promotion, &Directory::new(), &stores);
        let store = cols.iter().find(|c| c.key == "storeId").unwrap();
        assert_eq!(store.cell(&op), CellValue::Text("ТЦ Галерея".to_string()));
    }

    #[test]
    fn test_cells() {
        let mut op = operation();
        op.artifact_name = Some("Скидка 10%".to_string());
        op.artifact_type = Some(ArtifactType::Coupon);
        op.order_action = Some(OrderAction::Return);
        op.operation_type = OperationType::Refund;

        let cols = object_columns(OperationObject::Promotion, &Directory::new(), &Directory::new());
        let cell = |key: &str| cols.iter().find(|c| c.key == key).unwrap().cell(&op);

        assert_eq!(
            cell("campaignName"),
            CellValue::Link {
                href: "/campaigns/c-7".to_string(),
                text: "Весна".to_string()
            }
        );
        assert_eq!(cell("activityName"), CellValue::Empty);
        assert_eq!(cell("orderNumber"), CellValue::Empty);
        assert_eq!(cell("createdAt"), CellValue::Text("15.03.2024 14:02".to_string()));
        assert_eq!(
            cell("artifactName"),
            CellValue::Artifact {
                icon: "ticket",
                title: ArtifactType::Coupon.display_name(),
                name: "Скидка 10%".to_string()
            }
        );
        assert_eq!(
            cell("orderAction"),
            CellValue::Text(OrderAction::Return.display_name().to_string())
        );
        assert_eq!(
            cell("operationType"),
            CellValue::Text(OperationType::Refund.display_name().to_string())
        );
    }
}
