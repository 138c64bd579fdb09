//! Состояние формы фильтра операций

use crate::shared::date_utils::parse_date_input;
use crate::shared::object_diff::count_diff;
use contracts::enums::{ArtifactType, BudgetType, OperationType, PromotionType};
use contracts::projections::p910_budget_operations::dto::OperationsFilter;

/// Поле фильтра, редактируемое одним контролом
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    BudgetId,
    CampaignId,
    ActivityId,
    Author,
    CreateAtFrom,
    CreateAtTo,
    BudgetType,
    ArtifactName,
    OrderNumber,
    StoreIds,
    MarketingId,
    ArtifactType,
    PromotionType,
    OperationType,
}

/// Граница периода создания
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    From,
    To,
}

fn non_empty(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn non_empty_ids(ids: Vec<String>) -> Option<Vec<String>> {
    let ids: Vec<String> = ids.into_iter().filter(|id| !id.is_empty()).collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterForm {
    defaults: OperationsFilter,
    values: OperationsFilter,
}

impl FilterForm {
    /// `initial` уже содержит значения из строки запроса поверх умолчаний
    pub fn new(defaults: OperationsFilter, initial: OperationsFilter) -> Self {
        Self {
            defaults,
            values: initial,
        }
    }

    pub fn values(&self) -> &OperationsFilter {
        &self.values
    }

    pub fn defaults(&self) -> &OperationsFilter {
        &self.defaults
    }

    pub fn set_values(&mut self, values: OperationsFilter) {
        self.values = values;
    }

    /// Значение текстового поля или кода из выпадающего списка.
    /// Пустая строка и неизвестный код очищают поле.
    pub fn handle_change(&mut self, field: FilterField, raw: String) {
        let b = &mut self.values.basic;
        let e = &mut self.values.extended;
        match field {
            FilterField::BudgetId => b.budget_id = non_empty(raw),
            FilterField::Author => e.author = non_empty(raw),
            FilterField::ArtifactName => e.artifact_name = non_empty(raw),
            FilterField::OrderNumber => e.order_number = non_empty(raw),
            FilterField::MarketingId => e.marketing_id = non_empty(raw),
            FilterField::BudgetType => e.budget_type = BudgetType::from_code(raw.trim()),
            FilterField::ArtifactType => e.artifact_type = ArtifactType::from_code(raw.trim()),
            FilterField::PromotionType => {
                e.promotion_type = PromotionType::from_code(raw.trim())
            }
            FilterField::OperationType => {
                e.operation_type = OperationType::from_code(raw.trim())
            }
            FilterField::CampaignId | FilterField::ActivityId | FilterField::StoreIds => {
                self.handle_change_ids(field, vec![raw])
            }
            FilterField::CreateAtFrom => self.handle_change_date(DateBound::From, &raw),
            FilterField::CreateAtTo => self.handle_change_date(DateBound::To, &raw),
        }
    }

    /// Значения множественного выбора
    pub fn handle_change_ids(&mut self, field: FilterField, ids: Vec<String>) {
        let ids = non_empty_ids(ids);
        match field {
            FilterField::CampaignId => self.values.basic.campaign_id = ids,
            FilterField::ActivityId => self.values.basic.activity_id = ids,
            FilterField::StoreIds => self.values.extended.store_ids = ids,
            other => log::warn!("{:?} is not a multi-value field", other),
        }
    }

    /// Значение из поля даты; нераспознанное значение очищает границу
    pub fn handle_change_date(&mut self, bound: DateBound, raw: &str) {
        let value = parse_date_input(raw);
        match bound {
            DateBound::From => self.values.extended.create_at_from = value,
            DateBound::To => self.values.extended.create_at_to = value,
        }
    }

    pub fn handle_clear_value(&mut self, field: FilterField) {
        let b = &mut self.values.basic;
        let e = &mut self.values.extended;
        match field {
            FilterField::BudgetId => b.budget_id = None,
            FilterField::CampaignId => b.campaign_id = None,
            FilterField::ActivityId => b.activity_id = None,
            FilterField::Author => e.author = None,
            FilterField::CreateAtFrom => e.create_at_from = None,
            FilterField::CreateAtTo => e.create_at_to = None,
            FilterField::BudgetType => e.budget_type = None,
            FilterField::ArtifactName => e.artifact_name = None,
            FilterField::OrderNumber => e.order_number = None,
            FilterField::StoreIds => e.store_ids = None,
            FilterField::MarketingId => e.marketing_id = None,
            FilterField::ArtifactType => e.artifact_type = None,
            FilterField::PromotionType => e.promotion_type = None,
            FilterField::OperationType => e.operation_type = None,
        }
    }

    /// Полный сброс к умолчаниям
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
    }

    /// Сброс только расширенных полей; основные остаются как есть
    pub fn reset_extended(&mut self) {
        self.values.extended = self.defaults.extended.clone();
    }

    /// Число изменённых расширенных полей (бейдж "Другие фильтры")
    pub fn extended_diff_count(&self) -> usize {
        count_diff(&self.defaults.extended, &self.values.extended)
    }

    /// Фильтр для поиска
    pub fn submit(&self) -> OperationsFilter {
        self.values.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FilterForm {
        FilterForm::new(OperationsFilter::default(), OperationsFilter::default())
    }

    #[test]
    fn test_diff_count_single_field_and_revert() {
        let mut form = form();
        assert_eq!(form.extended_diff_count(), 0);

        form.handle_change(FilterField::Author, "Петров".to_string());
        assert_eq!(form.extended_diff_count(), 1);

        form.handle_clear_value(FilterField::Author);
        assert_eq!(form.extended_diff_count(), 0);
    }

    #[test]
    fn test_each_extended_field_counts_once() {
        let cases: Vec<(FilterField, &str)> = vec![
            (FilterField::Author, "a"),
            (FilterField::CreateAtFrom, "2024-01-01T10:00"),
            (FilterField::CreateAtTo, "2024-01-02"),
            (FilterField::BudgetType, "PROMO"),
            (FilterField::ArtifactName, "x"),
            (FilterField::OrderNumber, "1"),
            (FilterField::StoreIds, "s1"),
            (FilterField::MarketingId, "m1"),
            (FilterField::ArtifactType, "GIFT"),
            (FilterField::PromotionType, "BONUS"),
            (FilterField::OperationType, "DEBIT"),
        ];
        for (field, raw) in cases {
            let mut form = form();
            form.handle_change(field, raw.to_string());
            assert_eq!(form.extended_diff_count(), 1, "{:?}", field);
            form.handle_clear_value(field);
            assert_eq!(form.extended_diff_count(), 0, "{:?}", field);
        }
    }

    #[test]
    fn test_basic_fields_do_not_affect_badge() {
        let mut form = form();
        form.handle_change(FilterField::BudgetId, "B-100".to_string());
        form.handle_change_ids(FilterField::CampaignId, vec!["c1".to_string()]);
        assert_eq!(form.extended_diff_count(), 0);
    }

    #[test]
    fn test_reset_extended_keeps_basic() {
        let mut form = form();
        form.handle_change(FilterField::BudgetId, "B-100".to_string());
        form.handle_change_ids(FilterField::CampaignId, vec!["c1".to_string()]);
        form.handle_change_ids(FilterField::ActivityId, vec!["a1".to_string()]);
        form.handle_change(FilterField::Author, "Петров".to_string());
        form.handle_change(FilterField::OperationType, "REFUND".to_string());

        let basic_before = form.values().basic.clone();
        form.reset_extended();

        assert_eq!(form.values().basic, basic_before);
        assert_eq!(form.values().extended, form.defaults().extended);
        assert_eq!(form.extended_diff_count(), 0);
    }

    #[test]
    fn test_reset_restores_full_defaults() {
        let mut form = form();
        form.handle_change(FilterField::BudgetId, "B-100".to_string());
        form.handle_change(FilterField::Author, "a".to_string());
        form.reset();
        assert_eq!(form.values(), form.defaults());
    }

    #[test]
    fn test_panel_reset_then_full_reset() {
        let mut form = form();
        form.handle_change(FilterField::BudgetId, "B-7".to_string());
        form.handle_change_ids(FilterField::ActivityId, vec!["a1".to_string()]);
        form.handle_change(FilterField::MarketingId, "m1".to_string());
        form.handle_change_date(DateBound::To, "2024-05-01T18:00");
        assert_eq!(form.extended_diff_count(), 2);

        form.reset_extended();
        assert_eq!(form.values().basic.budget_id.as_deref(), Some("B-7"));
        assert_eq!(form.extended_diff_count(), 0);

        form.handle_change(FilterField::Author, "Петров".to_string());
        form.reset();
        assert_eq!(form.submit(), OperationsFilter::default());
        assert_eq!(form.extended_diff_count(), 0);
    }

    #[test]
    fn test_empty_input_means_absent() {
        let mut form = form();
        form.handle_change(FilterField::BudgetId, "  ".to_string());
        form.handle_change_ids(FilterField::StoreIds, vec![]);
        form.handle_change(FilterField::OperationType, "".to_string());
        form.handle_change_date(DateBound::From, "not a date");
        assert_eq!(form.submit(), OperationsFilter::default());
    }
}
