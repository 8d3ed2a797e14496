//! Custom order endpoint bindings.

use std::sync::Arc;

use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::transport::{ApiRequest, Transport};
use crate::model::{CustomOrder, CustomOrderFilters, CustomOrderRequest, OrderAnalysis, OrderPage};

#[derive(Deserialize)]
struct OrderEnvelope {
    order: CustomOrder,
}

#[derive(Deserialize)]
struct OrdersEnvelope {
    orders: Vec<CustomOrder>,
}

/// Typed client for `/api/custom-orders`.
pub struct CustomOrderApi<T> {
    transport: Arc<T>,
}

impl<T> Clone for CustomOrderApi<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> CustomOrderApi<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// `GET /api/custom-orders?{filters}`
    pub async fn list(&self, filters: &CustomOrderFilters) -> Result<OrderPage, ApiError> {
        let value = self
            .transport
            .execute(ApiRequest::get("/api/custom-orders").with_query(filters.to_query()))
            .await?;
        serde_json::from_value(value).map_err(ApiError::decode)
    }

    /// `GET /api/custom-orders/my-orders?page&size`
    pub async fn my_orders(
        &self,
        page: Option<u32>,
        size: Option<u32>,
    ) -> Result<OrderPage, ApiError> {
        let mut query = Vec::new();
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = size {
            query.push(("size", size.to_string()));
        }
        let value = self
            .transport
            .execute(ApiRequest::get("/api/custom-orders/my-orders").with_query(query))
            .await?;
        serde_json::from_value(value).map_err(ApiError::decode)
    }

    /// `GET /api/custom-orders/{id}`
    pub async fn get(&self, id: i64) -> Result<CustomOrder, ApiError> {
        let value = self
            .transport
            .execute(ApiRequest::get(format!("/api/custom-orders/{id}")))
            .await?;
        let envelope: OrderEnvelope = serde_json::from_value(value).map_err(ApiError::decode)?;
        Ok(envelope.order)
    }

    /// `POST /api/custom-orders`
    pub async fn create(&self, request: &CustomOrderRequest) -> Result<CustomOrder, ApiError> {
        let body = serde_json::to_value(request).map_err(ApiError::decode)?;
        let value = self
            .transport
            .execute(ApiRequest::post("/api/custom-orders").with_body(body))
            .await?;
        let envelope: OrderEnvelope = serde_json::from_value(value).map_err(ApiError::decode)?;
        Ok(envelope.order)
    }

    /// `PUT /api/custom-orders/{id}`
    pub async fn update(
        &self,
        id: i64,
        request: &CustomOrderRequest,
    ) -> Result<CustomOrder, ApiError> {
        let body = serde_json::to_value(request).map_err(ApiError::decode)?;
        let value = self
            .transport
            .execute(ApiRequest::put(format!("/api/custom-orders/{id}")).with_body(body))
            .await?;
        let envelope: OrderEnvelope = serde_json::from_value(value).map_err(ApiError::decode)?;
        Ok(envelope.order)
    }

    /// `POST /api/custom-orders/{id}/analyze?supplierId&finalPrice&adminNotes`
    pub async fn analyze(
        &self,
        id: i64,
        analysis: &OrderAnalysis,
    ) -> Result<CustomOrder, ApiError> {
        let mut query = vec![
            ("supplierId", analysis.supplier_id.to_string()),
            ("finalPrice", analysis.final_price.to_string()),
        ];
        if let Some(notes) = &analysis.admin_notes {
            query.push(("adminNotes", notes.clone()));
        }
        let value = self
            .transport
            .execute(ApiRequest::post(format!("/api/custom-orders/{id}/analyze")).with_query(query))
            .await?;
        let envelope: OrderEnvelope = serde_json::from_value(value).map_err(ApiError::decode)?;
        Ok(envelope.order)
    }

    /// `POST /api/custom-orders/{id}/confirm`
    pub async fn confirm(&self, id: i64) -> Result<CustomOrder, ApiError> {
        let value = self
            .transport
            .execute(ApiRequest::post(format!("/api/custom-orders/{id}/confirm")))
            .await?;
        let envelope: OrderEnvelope = serde_json::from_value(value).map_err(ApiError::decode)?;
        Ok(envelope.order)
    }

    /// `POST /api/custom-orders/{id}/cancel?reason`
    pub async fn cancel(&self, id: i64, reason: &str) -> Result<CustomOrder, ApiError> {
        let value = self
            .transport
            .execute(
                ApiRequest::post(format!("/api/custom-orders/{id}/cancel"))
                    .with_query(vec![("reason", reason.to_string())]),
            )
            .await?;
        let envelope: OrderEnvelope = serde_json::from_value(value).map_err(ApiError::decode)?;
        Ok(envelope.order)
    }

    /// `GET /api/custom-orders/pending-analysis`
    pub async fn pending_analysis(&self) -> Result<Vec<CustomOrder>, ApiError> {
        let value = self
            .transport
            .execute(ApiRequest::get("/api/custom-orders/pending-analysis"))
            .await?;
        let envelope: OrdersEnvelope = serde_json::from_value(value).map_err(ApiError::decode)?;
        Ok(envelope.orders)
    }

    /// `GET /api/custom-orders/urgent`
    pub async fn urgent(&self) -> Result<Vec<CustomOrder>, ApiError> {
        let value = self
            .transport
            .execute(ApiRequest::get("/api/custom-orders/urgent"))
            .await?;
        let envelope: OrdersEnvelope = serde_json::from_value(value).map_err(ApiError::decode)?;
        Ok(envelope.orders)
    }
}
