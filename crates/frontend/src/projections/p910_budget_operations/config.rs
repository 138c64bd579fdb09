//! Конфигурация страницы операций

use contracts::enums::OperationObject;
use contracts::projections::p910_budget_operations::dto::{
    BasicFilter, ExtendedFilter, OperationsFilter,
};

/// Настройки страницы передаются в состояние явно
#[derive(Debug, Clone, PartialEq)]
pub struct OperationsPageConfig {
    pub basic_defaults: BasicFilter,
    pub extended_defaults: ExtendedFilter,
    pub default_tab: OperationObject,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl OperationsPageConfig {
    /// Полный фильтр по умолчанию (основная + расширенная часть)
    pub fn default_filter(&self) -> OperationsFilter {
        OperationsFilter {
            basic: self.basic_defaults.clone(),
            extended: self.extended_defaults.clone(),
        }
    }
}

impl Default for OperationsPageConfig {
    fn default() -> Self {
        Self {
            basic_defaults: BasicFilter::default(),
            extended_defaults: ExtendedFilter::default(),
            default_tab: OperationObject::Campaign,
            page_size: 50,
            page_size_options: vec![20, 50, 100, 200],
        }
    }
}
