//! Shared test fixtures and the in-memory transport fake.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};

use nossocloset_client::api::{ApiError, ApiRequest, Transport};
use nossocloset_client::model::{
    ClientSummary, CustomOrder, OrderStatus, Supplier, SupplierStatus, Urgency,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("nossocloset_client=debug")
        .with_test_writer()
        .try_init();
}

fn fixed_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn make_supplier(id: i64, status: SupplierStatus) -> Supplier {
    Supplier {
        id,
        name: format!("Fornecedor {id}"),
        contact_name: "Ana".to_string(),
        whatsapp: "+55 51 99999-0000".to_string(),
        website: None,
        email: None,
        minimum_order_value: 300.0,
        delivery_time_days: 15,
        admin_fee_percentage: 10.0,
        categories: vec!["Vestidos".to_string()],
        performance_rating: 4.2,
        status,
        notes: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
        created_by: "admin".to_string(),
        updated_by: "admin".to_string(),
        catalog_count: 2,
        active_orders_count: 1,
        total_orders_value: 1250.0,
        is_active: status == SupplierStatus::Active,
    }
}

pub fn make_order(id: i64, status: OrderStatus, urgency: Urgency) -> CustomOrder {
    CustomOrder {
        id,
        client: ClientSummary {
            id: 7,
            full_name: "Maria Souza".to_string(),
            email: "maria@example.com".to_string(),
            whatsapp: "+55 51 98888-0000".to_string(),
        },
        supplier: None,
        collective_order: None,
        product_image_url: "https://cdn.example.com/p.png".to_string(),
        reference_code: None,
        description: "Vestido longo de festa".to_string(),
        preferred_color: "Azul".to_string(),
        alternative_colors: vec![],
        size: "M".to_string(),
        category: "Vestidos".to_string(),
        observations: None,
        estimated_price: Some(180.0),
        final_price: None,
        status,
        urgency,
        quantity: 1,
        admin_notes: None,
        analyzed_by: None,
        cancellation_reason: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
        analyzed_at: None,
        confirmed_at: None,
        cancelled_at: None,
        delivered_at: None,
        created_by: "maria@example.com".to_string(),
        updated_by: "maria@example.com".to_string(),
        total_value: 180.0,
        days_old: 3,
        is_urgent: urgency == Urgency::Urgent,
        is_pending: status == OrderStatus::PendingAnalysis,
        is_confirmed: status == OrderStatus::Confirmed,
        is_cancelled: status == OrderStatus::Cancelled,
        is_delivered: status == OrderStatus::Delivered,
    }
}

/// Server-shaped JSON for a supplier page response.
pub fn supplier_page_json(suppliers: &[Supplier], total_elements: u64, page: u32, size: u32) -> Value {
    let total_pages = total_elements.div_ceil(size as u64) as u32;
    json!({
        "suppliers": suppliers,
        "totalElements": total_elements,
        "totalPages": total_pages,
        "currentPage": page,
        "pageSize": size,
        "hasNext": page + 1 < total_pages,
        "hasPrevious": page > 0,
    })
}

/// Server-shaped JSON for an order page response.
pub fn order_page_json(orders: &[CustomOrder], total_elements: u64, page: u32, size: u32) -> Value {
    let total_pages = total_elements.div_ceil(size as u64) as u32;
    json!({
        "orders": orders,
        "totalElements": total_elements,
        "totalPages": total_pages,
        "currentPage": page,
        "pageSize": size,
        "hasNext": page + 1 < total_pages,
        "hasPrevious": page > 0,
    })
}

struct QueuedResponse {
    delay: Option<Duration>,
    result: Result<Value, ApiError>,
}

/// In-memory [`Transport`] that replays queued responses in FIFO order
/// and records every request it sees.
#[derive(Default)]
pub struct FakeTransport {
    queue: Mutex<VecDeque<QueuedResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, value: Value) {
        self.queue.lock().unwrap().push_back(QueuedResponse {
            delay: None,
            result: Ok(value),
        });
    }

    /// Queue a response that resolves only after `delay` of (test) time.
    pub fn push_ok_delayed(&self, delay: Duration, value: Value) {
        self.queue.lock().unwrap().push_back(QueuedResponse {
            delay: Some(delay),
            result: Ok(value),
        });
    }

    pub fn push_server_error(&self, status: u16, message: &str) {
        self.queue.lock().unwrap().push_back(QueuedResponse {
            delay: None,
            result: Err(ApiError::Server {
                status,
                message: message.to_string(),
            }),
        });
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        self.requests.lock().unwrap().push(request);
        let queued = self
            .queue
            .lock()
            .unwrap()
            .pop_front()
            .expect("no response queued for request");
        if let Some(delay) = queued.delay {
            tokio::time::sleep(delay).await;
        }
        queued.result
    }
}
