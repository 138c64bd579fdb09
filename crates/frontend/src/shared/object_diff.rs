//! Подсчёт отличий объекта от значений по умолчанию (бейдж "Другие фильтры")

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Количество полей верхнего уровня, значения которых отличаются.
///
/// Отсутствующее поле и `null` считаются равными.
pub fn count_diff<T: Serialize>(defaults: &T, current: &T) -> usize {
    let defaults = to_object(defaults);
    let current = to_object(current);

    let keys: BTreeSet<&String> = defaults.keys().chain(current.keys()).collect();
    keys.into_iter()
        .filter(|key| present(defaults.get(*key)) != present(current.get(*key)))
        .count()
}

fn to_object<T: Serialize>(value: &T) -> Map<String, Value> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Clone, Default)]
    struct Sample {
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        ids: Option<Vec<String>>,
        flag: bool,
    }

    #[test]
    fn test_equal_objects() {
        let a = Sample::default();
        assert_eq!(count_diff(&a, &a.clone()), 0);
    }

    #[test]
    fn test_absent_equals_null() {
        // `name: None` сериализуется в null, `ids: None` пропускается
        let defaults = Sample::default();
        let mut current = Sample::default();
        current.ids = None;
        assert_eq!(count_diff(&defaults, &current), 0);
    }

    #[test]
    fn test_deep_compare() {
        let defaults = Sample {
            ids: Some(vec!["1".into(), "2".into()]),
            ..Sample::default()
        };
        let mut current = defaults.clone();
        assert_eq!(count_diff(&defaults, &current), 0);

        current.ids = Some(vec!["1".into()]);
        current.flag = true;
        assert_eq!(count_diff(&defaults, &current), 2);
    }
}
