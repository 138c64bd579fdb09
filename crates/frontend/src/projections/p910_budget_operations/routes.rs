//! Ссылки на связанные разделы приложения

pub fn campaign_path(id: &str) -> String {
    format!("/campaigns/{}", urlencoding::encode(id))
}

pub fn activity_path(id: &str) -> String {
    format!("/activities/{}", urlencoding::encode(id))
}

/// Список артефактов активностей, отфильтрованный по имени
pub fn activity_artifacts_path(artifact_name: &str) -> String {
    format!(
        "/activities/artifacts?artifactName={}",
        urlencoding::encode(artifact_name)
    )
}

/// Список заказов, отфильтрованный по номеру
pub fn orders_path(order_number: &str) -> String {
    format!("/orders?orderNumber={}", urlencoding::encode(order_number))
}
