//! Подписи полей и колонок страницы операций

pub const PAGE_TITLE: &str = "Операции";
pub const LOADING_OPERATIONS: &str = "Загружаем операции…";
pub const EMPTY_OPERATIONS: &str = "Операций не найдено";
pub const OTHER_FILTERS: &str = "Другие фильтры";

pub const BUDGET_ID: &str = "ID бюджета";
pub const CAMPAIGN_NAME: &str = "Кампания";
pub const ACTIVITY_NAME: &str = "Активность";
pub const CERTIFICATE_NAME: &str = "Сертификат";
pub const OPERATION_TYPE: &str = "Тип операции";
pub const AMOUNT: &str = "Сумма";
pub const AUTHOR: &str = "Автор";
pub const MARKETING_NAME: &str = "Маркетинг";
pub const STORE: &str = "Магазин";
pub const STORES: &str = "Магазины";
pub const ARTIFACT_NAME: &str = "Артефакт";
pub const ARTIFACT_TYPE: &str = "Тип артефакта";
pub const PROMOTION_TYPE: &str = "Тип акции";
pub const ORDER_NUMBER: &str = "Номер заказа";
pub const ORDER_CLIENT: &str = "Клиент";
pub const ORDER_ACTION: &str = "Действие с заказом";
pub const CREATED_AT: &str = "Дата создания";
pub const BUDGET_TYPE: &str = "Тип бюджета";
pub const DATE_FROM: &str = "от";
pub const DATE_TO: &str = "до";
