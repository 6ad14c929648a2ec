//! Alert listing.
//!
//! Filters compose into an Opsgenie search query string, joined with
//! `" AND "`. Dates use the day-month-year form the search syntax expects,
//! not ISO order.

use jiff::civil::Date;
use serde::Deserialize;

use crate::model::Alert;

use super::{ApiClient, Result};

/// Filters for the alert list.
///
/// All fields optional; an empty filter lists everything.
#[derive(Debug, Default)]
pub struct AlertFilter {
    /// Only alerts acknowledged by this user.
    pub acknowledged_by: Option<String>,
    /// Only alerts created on or after this date.
    pub start_date: Option<Date>,
    /// Only alerts created up to this date.
    pub end_date: Option<Date>,
}

impl AlertFilter {
    /// Render the filter as an Opsgenie search query, or `None` when empty.
    fn to_query(&self) -> Option<String> {
        let mut elements = Vec::new();
        if let Some(user) = &self.acknowledged_by {
            elements.push(format!("acknowledgedBy:{user}"));
        }
        if let Some(date) = self.start_date {
            elements.push(format!("createdAt:{}", search_date(date)));
        }
        if let Some(date) = self.end_date {
            elements.push(format!("createdAt:{}", search_date(date)));
        }
        if elements.is_empty() {
            None
        } else {
            Some(elements.join(" AND "))
        }
    }
}

/// Format a date the way the alert search syntax wants it: `DD-MM-YYYY`.
fn search_date(date: Date) -> String {
    format!(
        "{:02}-{:02}-{:04}",
        date.day(),
        date.month(),
        date.year()
    )
}

#[derive(Deserialize)]
struct ListAlertsResponse {
    data: Vec<Alert>,
}

pub(super) fn list(client: &ApiClient, filter: &AlertFilter) -> Result<Vec<Alert>> {
    let mut request = client.get("/v2/alerts").query(&[("sort", "createdAt")]);
    if let Some(query) = filter.to_query() {
        request = request.query(&[("query", query)]);
    }

    let response: ListAlertsResponse = client.fetch(request)?;
    Ok(response.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i16, month: i8, day: i8) -> Date {
        Date::new(year, month, day).unwrap()
    }

    #[test]
    fn empty_filter_has_no_query() {
        assert_eq!(AlertFilter::default().to_query(), None);
    }

    #[test]
    fn acknowledged_by_alone() {
        let filter = AlertFilter {
            acknowledged_by: Some("alice".to_string()),
            ..AlertFilter::default()
        };
        assert_eq!(filter.to_query().unwrap(), "acknowledgedBy:alice");
    }

    #[test]
    fn dates_use_day_month_year_order() {
        let filter = AlertFilter {
            start_date: Some(date(2024, 3, 7)),
            ..AlertFilter::default()
        };
        assert_eq!(filter.to_query().unwrap(), "createdAt:07-03-2024");
    }

    #[test]
    fn all_filters_join_with_and() {
        let filter = AlertFilter {
            acknowledged_by: Some("alice".to_string()),
            start_date: Some(date(2024, 1, 2)),
            end_date: Some(date(2024, 1, 31)),
        };
        assert_eq!(
            filter.to_query().unwrap(),
            "acknowledgedBy:alice AND createdAt:02-01-2024 AND createdAt:31-01-2024"
        );
    }

    #[test]
    fn alert_decodes_from_wire_json() {
        let json = r#"{
            "data": [{
                "id": "alert-1",
                "tinyId": "7",
                "message": "Disk full on db-3",
                "status": "open",
                "acknowledged": true,
                "count": 4,
                "owner": "alice",
                "priority": "P2",
                "tags": ["db", "disk"],
                "createdAt": "2024-01-02T03:04:05Z",
                "updatedAt": "2024-01-02T04:00:00Z"
            }]
        }"#;

        let response: ListAlertsResponse = serde_json::from_str(json).unwrap();
        let alert = &response.data[0];
        assert_eq!(alert.tiny_id, "7");
        assert_eq!(alert.message, "Disk full on db-3");
        assert!(alert.acknowledged);
        assert_eq!(alert.count, 4);
        assert_eq!(alert.tags, vec!["db", "disk"]);
    }

    #[test]
    fn alert_tolerates_missing_optional_fields() {
        let json = r#"{
            "data": [{
                "id": "alert-2",
                "tinyId": "8",
                "message": "Ping timeout",
                "status": "closed",
                "acknowledged": false,
                "createdAt": "2024-01-02T03:04:05Z",
                "updatedAt": "2024-01-02T04:00:00Z"
            }]
        }"#;

        let response: ListAlertsResponse = serde_json::from_str(json).unwrap();
        let alert = &response.data[0];
        assert_eq!(alert.owner, "");
        assert_eq!(alert.count, 0);
        assert!(alert.tags.is_empty());
    }
}
