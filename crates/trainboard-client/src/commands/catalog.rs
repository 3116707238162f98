//! Read-only commands behind the public training catalog. None of them
//! needs a login.

use std::sync::Mutex;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use trainboard_shared::SortOrder;
use trainboard_store::{CatalogSummary, Snapshot, TrainingCard, TrainingQuery};

use crate::state::AppState;

/// Catalog search box, date picker and sort toggle. A missing sort falls
/// back to the configured default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub sort: Option<SortOrder>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub instance_name: String,
    pub sort: SortOrder,
    pub summary: CatalogSummary,
    pub trainings: Vec<TrainingCard>,
}

pub fn search_catalog(
    state: &Mutex<AppState>,
    query: CatalogQuery,
    today: NaiveDate,
) -> Result<CatalogPage, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    let sort = query.sort.unwrap_or(guard.config.catalog_sort);
    let snapshot = guard.store.snapshot();
    let trainings = snapshot
        .search_trainings(&TrainingQuery {
            search: query.search,
            date: query.date,
            sort,
        })
        .into_iter()
        .filter_map(|t| snapshot.training_card(&t.id))
        .collect();

    Ok(CatalogPage {
        instance_name: guard.config.instance_name.clone(),
        sort,
        summary: snapshot.catalog_summary(today),
        trainings,
    })
}

pub fn catalog_summary(state: &Mutex<AppState>, today: NaiveDate) -> Result<CatalogSummary, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    Ok(guard.store.snapshot().catalog_summary(today))
}

/// The five collections as they stand, for a UI that renders them itself.
pub fn get_snapshot(state: &Mutex<AppState>) -> Result<Snapshot, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    Ok(guard.store.snapshot().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::guest_state;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ids(page: &CatalogPage) -> Vec<&str> {
        page.trainings.iter().map(|c| c.training.id.as_str()).collect()
    }

    #[test]
    fn default_sort_comes_from_config() {
        let state = guest_state();
        let page = search_catalog(&state, CatalogQuery::default(), day(2025, 12, 9)).unwrap();
        assert_eq!(page.sort, SortOrder::Asc);
        assert_eq!(ids(&page), vec!["2", "1", "3"]);
        assert_eq!(page.summary.total_trainings, 3);
        assert_eq!(page.summary.upcoming_trainings, 2);

        state.lock().unwrap().config.catalog_sort = SortOrder::Desc;
        let page = search_catalog(&state, CatalogQuery::default(), day(2025, 12, 9)).unwrap();
        assert_eq!(ids(&page), vec!["3", "1", "2"]);
    }

    #[test]
    fn search_by_participant_name_and_date() {
        let state = guest_state();
        let query = CatalogQuery {
            search: "lisa".into(),
            ..CatalogQuery::default()
        };
        let page = search_catalog(&state, query, day(2025, 1, 1)).unwrap();
        assert_eq!(ids(&page), vec!["1"]);

        let query = CatalogQuery {
            date: Some(day(2025, 12, 15)),
            sort: Some(SortOrder::Desc),
            ..CatalogQuery::default()
        };
        let page = search_catalog(&state, query, day(2025, 1, 1)).unwrap();
        assert_eq!(ids(&page), vec!["3"]);
        assert_eq!(page.trainings[0].stats.total, 1);
    }

    #[test]
    fn query_accepts_camel_case_json() {
        let query: CatalogQuery =
            serde_json::from_str(r#"{"search":"sales","date":"2025-12-15","sort":"desc"}"#).unwrap();
        assert_eq!(query.sort, Some(SortOrder::Desc));
        assert_eq!(query.date, Some(day(2025, 12, 15)));
    }

    #[test]
    fn snapshot_is_readable_without_login() {
        let state = guest_state();
        let snapshot = get_snapshot(&state).unwrap();
        assert_eq!(snapshot.participants.len(), 8);
        assert_eq!(catalog_summary(&state, day(2030, 1, 1)).unwrap().upcoming_trainings, 0);
    }
}
