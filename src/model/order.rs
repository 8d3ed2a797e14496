//! Custom order entity, requests, and list filters.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::{BadgeColor, PageInfo};

/// A customer's made-to-order request, as returned by the server.
///
/// The trailing flags (`is_urgent`, `is_pending`, ...) are computed
/// server-side; the client never derives them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOrder {
    pub id: i64,
    pub client: ClientSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<SupplierSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collective_order: Option<CollectiveOrderSummary>,
    pub product_image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,
    pub description: String,
    pub preferred_color: String,
    #[serde(default)]
    pub alternative_colors: Vec<String>,
    pub size: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_price: Option<f64>,
    pub status: OrderStatus,
    pub urgency: Urgency,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<NaiveDateTime>,
    pub created_by: String,
    pub updated_by: String,
    pub total_value: f64,
    pub days_old: u32,
    pub is_urgent: bool,
    pub is_pending: bool,
    pub is_confirmed: bool,
    pub is_cancelled: bool,
    pub is_delivered: bool,
}

/// Client identity embedded in an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub whatsapp: String,
}

/// Supplier identity embedded in a priced order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierSummary {
    pub id: i64,
    pub name: String,
    pub contact_name: String,
    pub delivery_time_days: u32,
    pub admin_fee_percentage: f64,
}

/// Collective order an order was grouped into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectiveOrderSummary {
    pub id: i64,
    pub minimum_value: f64,
    pub current_value: f64,
    pub payment_deadline: NaiveDateTime,
}

/// Custom order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    PendingAnalysis,
    Priced,
    Confirmed,
    InCollectiveOrder,
    Paid,
    InProduction,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Wire representation, also used in filter query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::PendingAnalysis => "PENDING_ANALYSIS",
            OrderStatus::Priced => "PRICED",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::InCollectiveOrder => "IN_COLLECTIVE_ORDER",
            OrderStatus::Paid => "PAID",
            OrderStatus::InProduction => "IN_PRODUCTION",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Display label shown in the order tracker.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::PendingAnalysis => "Aguardando Análise",
            OrderStatus::Priced => "Precificado",
            OrderStatus::Confirmed => "Confirmado",
            OrderStatus::InCollectiveOrder => "Em Pedido Coletivo",
            OrderStatus::Paid => "Pago",
            OrderStatus::InProduction => "Em Produção",
            OrderStatus::Delivered => "Entregue",
            OrderStatus::Cancelled => "Cancelado",
        }
    }

    pub fn badge_color(self) -> BadgeColor {
        match self {
            OrderStatus::PendingAnalysis => BadgeColor::Warning,
            OrderStatus::Priced => BadgeColor::Info,
            OrderStatus::Confirmed => BadgeColor::Primary,
            OrderStatus::InCollectiveOrder => BadgeColor::Secondary,
            OrderStatus::Paid => BadgeColor::Success,
            OrderStatus::InProduction => BadgeColor::Primary,
            OrderStatus::Delivered => BadgeColor::Success,
            OrderStatus::Cancelled => BadgeColor::Error,
        }
    }

    /// Progress-bar value for the order tracker, 0..=100.
    pub fn progress(self) -> u8 {
        match self {
            OrderStatus::PendingAnalysis => 10,
            OrderStatus::Priced => 25,
            OrderStatus::Confirmed => 40,
            OrderStatus::InCollectiveOrder => 60,
            OrderStatus::Paid => 75,
            OrderStatus::InProduction => 90,
            OrderStatus::Delivered => 100,
            OrderStatus::Cancelled => 0,
        }
    }
}

/// Urgency assigned by the customer at submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Low,
    Normal,
    High,
    Urgent,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Low => "LOW",
            Urgency::Normal => "NORMAL",
            Urgency::High => "HIGH",
            Urgency::Urgent => "URGENT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Urgency::Low => "Baixa",
            Urgency::Normal => "Normal",
            Urgency::High => "Alta",
            Urgency::Urgent => "Urgente",
        }
    }
}

/// Payload for creating or updating a custom order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOrderRequest {
    pub client_id: i64,
    pub product_image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,
    pub description: String,
    pub preferred_color: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternative_colors: Vec<String>,
    pub size: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// Admin pricing decision attached to the analyze transition.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderAnalysis {
    pub supplier_id: i64,
    pub final_price: f64,
    pub admin_notes: Option<String>,
}

/// Optional-field query for the custom order list endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomOrderFilters {
    pub status: Option<OrderStatus>,
    pub supplier_id: Option<i64>,
    pub urgency: Option<Urgency>,
    pub category: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub search_term: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

impl CustomOrderFilters {
    /// Serialize to query-string pairs, skipping unset fields.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(supplier_id) = self.supplier_id {
            query.push(("supplierId", supplier_id.to_string()));
        }
        if let Some(urgency) = self.urgency {
            query.push(("urgency", urgency.as_str().to_string()));
        }
        if let Some(category) = &self.category {
            query.push(("category", category.clone()));
        }
        if let Some(min_value) = self.min_value {
            query.push(("minValue", min_value.to_string()));
        }
        if let Some(max_value) = self.max_value {
            query.push(("maxValue", max_value.to_string()));
        }
        if let Some(start_date) = self.start_date {
            query.push(("startDate", start_date.to_string()));
        }
        if let Some(end_date) = self.end_date {
            query.push(("endDate", end_date.to_string()));
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

/// One page of the custom order collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPage {
    pub orders: Vec<CustomOrder>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_previous: bool,
}

impl OrderPage {
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
