use contracts::enums::OperationObject;
use contracts::projections::p910_budget_operations::dto::OperationSummaryItem;

/// Вкладка объекта операций
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    pub object: OperationObject,
    pub label: &'static str,
    pub icon: &'static str,
    pub count: u64,
    /// Пустую вкладку нельзя выбрать
    pub disabled: bool,
}

/// Вкладки в фиксированном порядке `OperationObject::all()`.
/// Объект, которого нет в сводке, получает 0 и блокируется.
pub fn build_tabs(summary: &[OperationSummaryItem]) -> Vec<TabEntry> {
    OperationObject::all()
        .into_iter()
        .map(|object| {
            let count = summary
                .iter()
                .find(|item| item.object == object)
                .map(|item| item.count)
                .unwrap_or(0);
            TabEntry {
                object,
                label: object.display_name(),
                icon: object.icon(),
                count,
                disabled: count == 0,
            }
        })
        .collect()
}

/// Можно ли переключиться на объект
pub fn is_selectable(tabs: &[TabEntry], object: OperationObject) -> bool {
    tabs.iter().any(|tab| tab.object == object && !tab.disabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_objects_are_disabled() {
        let tabs = build_tabs(&[
            OperationSummaryItem {
                object: OperationObject::Promotion,
                count: 12,
            },
            OperationSummaryItem {
                object: OperationObject::Campaign,
                count: 0,
            },
        ]);

        let objects: Vec<_> = tabs.iter().map(|t| t.object).collect();
        assert_eq!(objects, OperationObject::all());

        let promo = &tabs[2];
        assert_eq!(promo.count, 12);
        assert!(!promo.disabled);

        assert!(tabs[0].disabled);
        assert!(tabs[3].disabled);
        assert_eq!(tabs[3].count, 0);
    }

    #[test]
    fn test_empty_summary_renders_all_tabs_disabled() {
        let tabs = build_tabs(&[]);
        assert_eq!(tabs.len(), 5);
        assert!(tabs.iter().all(|t| t.disabled && t.count == 0));
        assert!(!is_selectable(&tabs, OperationObject::Activity));
    }

    #[test]
    fn test_labels_and_icons_come_from_object() {
        let tabs = build_tabs(&[OperationSummaryItem {
            object: OperationObject::Marketing,
            count: 3,
        }]);
        assert_eq!(tabs[3].label, "Маркетинг");
        assert_eq!(tabs[3].icon, "trending-up");
        assert!(is_selectable(&tabs, OperationObject::Marketing));
    }
}
