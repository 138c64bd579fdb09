//! Запросы к API операций и справочников

use crate::shared::api_utils::{get_json, to_query_string};
use crate::shared::error::FetchError;
use crate::shared::list_transaction::ListPage;
use contracts::projections::p910_budget_operations::dto::{
    DirectoryItem, Operation, OperationSummaryItem, OperationsListRequest,
    OperationsListResponse, OperationsSummaryRequest,
};
use serde::Serialize;

use super::state::{ListCommand, SummaryCommand};

const OPERATIONS_PATH: &str = "/api/p910/operations";
const SUMMARY_PATH: &str = "/api/p910/operations/summary";

/// Справочники страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectoryKind {
    CostCenters,
    Stores,
    Campaigns,
    Activities,
    Marketing,
}

impl DirectoryKind {
    fn path(&self) -> &'static str {
        match self {
            DirectoryKind::CostCenters => "/api/directories/cost-centers",
            DirectoryKind::Stores => "/api/directories/stores",
            DirectoryKind::Campaigns => "/api/directories/campaigns",
            DirectoryKind::Activities => "/api/directories/activities",
            DirectoryKind::Marketing => "/api/directories/marketing",
        }
    }
}

#[derive(Debug, Serialize)]
struct DirectoryQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    ids: Option<&'a [String]>,
}

pub fn list_query(cmd: &ListCommand) -> Result<String, FetchError> {
    to_query_string(&OperationsListRequest {
        filter: cmd.filter.clone(),
        object: cmd.params,
        page: cmd.page,
        page_size: cmd.page_size,
    })
}

pub async fn fetch_operations(cmd: &ListCommand) -> Result<ListPage<Operation>, FetchError> {
    let query = list_query(cmd)?;
    let response: OperationsListResponse = get_json(OPERATIONS_PATH, &query).await?;
    Ok(ListPage {
        items: response.items,
        total_count: response.total_count,
    })
}

pub async fn fetch_summary(cmd: &SummaryCommand) -> Result<Vec<OperationSummaryItem>, FetchError> {
    let query = to_query_string(&OperationsSummaryRequest {
        filter: cmd.filter.clone(),
    })?;
    get_json(SUMMARY_PATH, &query).await
}

/// `ids` передаются, чтобы выбранные значения были в ответе даже за пределами первой страницы справочника
pub async fn fetch_directory(
    kind: DirectoryKind,
    ids: Option<Vec<String>>,
) -> Result<Vec<DirectoryItem>, FetchError> {
    let query = to_query_string(&DirectoryQuery {
        ids: ids.as_deref().filter(|ids| !ids.is_empty()),
    })?;
    get_json(kind.path(), &query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::OperationObject;
    use contracts::projections::p910_budget_operations::dto::OperationsFilter;

    #[test]
    fn test_list_query_carries_object_and_page() {
        let mut filter = OperationsFilter::default();
        filter.basic.budget_id = Some("B-100".to_string());
        let cmd = ListCommand {
            id: 1,
            filter,
            params: OperationObject::Promotion,
            page: 2,
            page_size: 20,
            is_search: false,
        };
        let qs = list_query(&cmd).unwrap();
        assert!(qs.contains("budgetId=B-100"));
        assert!(qs.contains("object=PROMOTION"));
        assert!(qs.contains("page=2"));
        assert!(qs.contains("pageSize=20"));
    }

    #[test]
    fn test_list_query_encodes_ids_and_dates() {
        let mut filter = OperationsFilter::default();
        filter.basic.campaign_id = Some(vec!["c1".to_string(), "c2".to_string()]);
        filter.extended.store_ids = Some(vec!["s1".to_string()]);
        filter.extended.create_at_from = chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(9, 30, 0));
        let cmd = ListCommand {
            id: 3,
            filter,
            params: OperationObject::Promotion,
            page: 0,
            page_size: 20,
            is_search: true,
        };
        let qs = list_query(&cmd).unwrap();
        assert!(qs.contains("campaignId[0]=c1"));
        assert!(qs.contains("campaignId[1]=c2"));
        assert!(qs.contains("storeIds[0]=s1"));
        assert!(qs.contains("createAtFrom=2024-03-01T09%3A30%3A00"));
        assert!(qs.contains("object=PROMOTION"));
    }
}
