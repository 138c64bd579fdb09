//! Поля страницы, отражаемые в строке запроса

use crate::shared::query_params::{read_field, write_field, QueryParams, QueryState, QueryValue};
use contracts::enums::OperationObject;
use contracts::projections::p910_budget_operations::dto::{
    BasicFilter, ExtendedFilter, OperationsFilter,
};

pub const TAB_KEY: &str = "tabKey";

impl QueryState for OperationsFilter {
    fn read_query(params: &QueryParams, defaults: &Self) -> Self {
        let b = &defaults.basic;
        let e = &defaults.extended;
        OperationsFilter {
            basic: BasicFilter {
                budget_id: read_field(params, "budgetId", &b.budget_id),
                campaign_id: read_field(params, "campaignId", &b.campaign_id),
                activity_id: read_field(params, "activityId", &b.activity_id),
            },
            extended: ExtendedFilter {
                author: read_field(params, "author", &e.author),
                create_at_from: read_field(params, "createAtFrom", &e.create_at_from),
                create_at_to: read_field(params, "createAtTo", &e.create_at_to),
                budget_type: read_field(params, "budgetType", &e.budget_type),
                artifact_name: read_field(params, "artifactName", &e.artifact_name),
                order_number: read_field(params, "orderNumber", &e.order_number),
                store_ids: read_field(params, "storeIds", &e.store_ids),
                marketing_id: read_field(params, "marketingId", &e.marketing_id),
                artifact_type: read_field(params, "artifactType", &e.artifact_type),
                promotion_type: read_field(params, "promotionType", &e.promotion_type),
                operation_type: read_field(params, "operationType", &e.operation_type),
            },
        }
    }

    fn write_query(&self, params: &mut QueryParams) {
        let b = &self.basic;
        let e = &self.extended;
        write_field(params, "budgetId", &b.budget_id);
        write_field(params, "campaignId", &b.campaign_id);
        write_field(params, "activityId", &b.activity_id);
        write_field(params, "author", &e.author);
        write_field(params, "createAtFrom", &e.create_at_from);
        write_field(params, "createAtTo", &e.create_at_to);
        write_field(params, "budgetType", &e.budget_type);
        write_field(params, "artifactName", &e.artifact_name);
        write_field(params, "orderNumber", &e.order_number);
        write_field(params, "storeIds", &e.store_ids);
        write_field(params, "marketingId", &e.marketing_id);
        write_field(params, "artifactType", &e.artifact_type);
        write_field(params, "promotionType", &e.promotion_type);
        write_field(params, "operationType", &e.operation_type);
    }
}

/// Активная вкладка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabQuery {
    pub tab_key: OperationObject,
}

impl QueryState for TabQuery {
    fn read_query(params: &QueryParams, defaults: &Self) -> Self {
        let tab_key = params
            .get(TAB_KEY)
            .and_then(|raw| OperationObject::from_query(&[raw]))
            .unwrap_or(defaults.tab_key);
        TabQuery { tab_key }
    }

    fn write_query(&self, params: &mut QueryParams) {
        params.set(TAB_KEY, self.tab_key.to_query());
    }
}
