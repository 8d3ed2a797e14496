//! Supplier entity, requests, and list filters.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{BadgeColor, PageInfo};

/// A registered supplier, as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub contact_name: String,
    pub whatsapp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub minimum_order_value: f64,
    pub delivery_time_days: u32,
    pub admin_fee_percentage: f64,
    pub categories: Vec<String>,
    pub performance_rating: f64,
    pub status: SupplierStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: String,
    pub updated_by: String,
    pub catalog_count: u32,
    pub active_orders_count: u32,
    pub total_orders_value: f64,
    pub is_active: bool,
}

/// Supplier lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplierStatus {
    Active,
    Inactive,
    Suspended,
    PendingVerification,
}

impl SupplierStatus {
    /// Wire representation, also used in filter query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            SupplierStatus::Active => "ACTIVE",
            SupplierStatus::Inactive => "INACTIVE",
            SupplierStatus::Suspended => "SUSPENDED",
            SupplierStatus::PendingVerification => "PENDING_VERIFICATION",
        }
    }

    /// Display label shown in the admin table.
    pub fn label(self) -> &'static str {
        match self {
            SupplierStatus::Active => "Ativo",
            SupplierStatus::Inactive => "Inativo",
            SupplierStatus::Suspended => "Suspenso",
            SupplierStatus::PendingVerification => "Pendente",
        }
    }

    pub fn badge_color(self) -> BadgeColor {
        match self {
            SupplierStatus::Active => BadgeColor::Success,
            SupplierStatus::Inactive => BadgeColor::Default,
            SupplierStatus::Suspended => BadgeColor::Error,
            SupplierStatus::PendingVerification => BadgeColor::Warning,
        }
    }
}

/// Status-changing action applied via `PATCH /api/suppliers/{id}/{action}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplierTransition {
    Activate,
    Deactivate,
    Suspend,
}

impl SupplierTransition {
    pub fn as_path_segment(self) -> &'static str {
        match self {
            SupplierTransition::Activate => "activate",
            SupplierTransition::Deactivate => "deactivate",
            SupplierTransition::Suspend => "suspend",
        }
    }
}

/// Payload for creating or updating a supplier.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRequest {
    pub name: String,
    pub contact_name: String,
    pub whatsapp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub minimum_order_value: f64,
    pub delivery_time_days: u32,
    pub admin_fee_percentage: f64,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Optional-field query for the supplier list endpoint.
///
/// Absent fields are omitted from the request entirely.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SupplierFilters {
    pub status: Option<SupplierStatus>,
    pub category: Option<String>,
    pub min_rating: Option<f64>,
    pub max_minimum_value: Option<f64>,
    pub max_delivery_days: Option<u32>,
    pub search_term: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

impl SupplierFilters {
    /// Serialize to query-string pairs, skipping unset fields.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(category) = &self.category {
            query.push(("category", category.clone()));
        }
        if let Some(min_rating) = self.min_rating {
            query.push(("minRating", min_rating.to_string()));
        }
        if let Some(max_minimum_value) = self.max_minimum_value {
            query.push(("maxMinimumValue", max_minimum_value.to_string()));
        }
        if let Some(max_delivery_days) = self.max_delivery_days {
            query.push(("maxDeliveryDays", max_delivery_days.to_string()));
        }
        if let Some(search_term) = &self.search_term {
            query.push(("searchTerm", search_term.clone()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size", size.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            query.push(("sortBy", sort_by.clone()));
        }
        if let Some(sort_dir) = &self.sort_dir {
            query.push(("sortDir", sort_dir.clone()));
        }
        query
    }
}

/// One page of the supplier collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPage {
    pub suppliers: Vec<Supplier>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_previous: bool,
}

impl SupplierPage {
    pub fn info(&self) -> PageInfo {
        PageInfo {
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            current_page: self.current_page,
            page_size: self.page_size,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

/// Aggregate counts shown on the supplier dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierStatistics {
    pub total_active: u32,
    pub total_inactive: u32,
    pub total_suspended: u32,
    pub total_pending: u32,
    pub total_categories: u32,
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_produce_no_query_pairs() {
        assert!(SupplierFilters::default().to_query().is_empty());
    }

    #[test]
    fn filters_serialize_camel_case_keys() {
        let filters = SupplierFilters {
            status: Some(SupplierStatus::Active),
            min_rating: Some(4.5),
            search_term: Some("vestidos".to_string()),
            page: Some(2),
            ..Default::default()
        };
        let query = filters.to_query();
        assert_eq!(
            query,
            vec![
                ("status", "ACTIVE".to_string()),
                ("minRating", "4.5".to_string()),
                ("searchTerm", "vestidos".to_string()),
                ("page", "2".to_string()),
            ]
        );
    }

    #[test]
    fn status_mappings_are_total() {
        for status in [
            SupplierStatus::Active,
            SupplierStatus::Inactive,
            SupplierStatus::Suspended,
            SupplierStatus::PendingVerification,
        ] {
            assert!(!status.label().is_empty());
            assert!(!status.as_str().is_empty());
            let _ = status.badge_color();
        }
    }

    #[test]
    fn request_omits_unset_optionals() {
        let request = SupplierRequest {
            name: "Moda Sul".to_string(),
            contact_name: "Ana".to_string(),
            whatsapp: "+55 51 99999-0000".to_string(),
            minimum_order_value: 300.0,
            delivery_time_days: 15,
            admin_fee_percentage: 10.0,
            categories: vec!["Vestidos".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("website").is_none());
        assert!(json.get("performanceRating").is_none());
        assert_eq!(json["contactName"], "Ana");
    }
}
