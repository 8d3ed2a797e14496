//! Supplier endpoint bindings.

use std::sync::Arc;

use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::transport::{ApiRequest, Transport};
use crate::model::{
    Supplier, SupplierFilters, SupplierPage, SupplierRequest, SupplierStatistics,
    SupplierTransition,
};

#[derive(Deserialize)]
struct SupplierEnvelope {
    supplier: Supplier,
}

#[derive(Deserialize)]
struct SuppliersEnvelope {
    suppliers: Vec<Supplier>,
}

#[derive(Deserialize)]
struct CategoriesEnvelope {
    categories: Vec<String>,
}

#[derive(Deserialize)]
struct StatisticsEnvelope {
    statistics: SupplierStatistics,
}

/// Typed client for `/api/suppliers`.
pub struct SupplierApi<T> {
    transport: Arc<T>,
}

impl<T> Clone for SupplierApi<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> SupplierApi<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// `GET /api/suppliers?{filters}`
    pub async fn list(&self, filters: &SupplierFilters) -> Result<SupplierPage, ApiError> {
        let value = self
            .transport
            .execute(ApiRequest::get("/api/suppliers").with_query(filters.to_query()))
            .await?;
        serde_json::from_value(value).map_err(ApiError::decode)
    }

    /// `GET /api/suppliers/active`
    pub async fn active(&self) -> Result<Vec<Supplier>, ApiError> {
        let value = self
            .transport
            .execute(ApiRequest::get("/api/suppliers/active"))
            .await?;
        let envelope: SuppliersEnvelope =
            serde_json::from_value(value).map_err(ApiError::decode)?;
        Ok(envelope.suppliers)
    }

    /// `GET /api/suppliers/{id}`
    pub async fn get(&self, id: i64) -> Result<Supplier, ApiError> {
        let value = self
            .transport
            .execute(ApiRequest::get(format!("/api/suppliers/{id}")))
            .await?;
        let envelope: SupplierEnvelope = serde_json::from_value(value).map_err(ApiError::decode)?;
        Ok(envelope.supplier)
    }

    /// `POST /api/suppliers`
    pub async fn create(&self, request: &SupplierRequest) -> Result<Supplier, ApiError> {
        let body = serde_json::to_value(request).map_err(ApiError::decode)?;
        let value = self
            .transport
            .execute(ApiRequest::post("/api/suppliers").with_body(body))
            .await?;
        let envelope: SupplierEnvelope = serde_json::from_value(value).map_err(ApiError::decode)?;
        Ok(envelope.supplier)
    }

    /// `PUT /api/suppliers/{id}`
    pub async fn update(&self, id: i64, request: &SupplierRequest) -> Result<Supplier, ApiError> {
        let body = serde_json::to_value(request).map_err(ApiError::decode)?;
        let value = self
            .transport
            .execute(ApiRequest::put(format!("/api/suppliers/{id}")).with_body(body))
            .await?;
        let envelope: SupplierEnvelope = serde_json::from_value(value).map_err(ApiError::decode)?;
        Ok(envelope.supplier)
    }

    /// `DELETE /api/suppliers/{id}`
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.transport
            .execute(ApiRequest::delete(format!("/api/suppliers/{id}")))
            .await?;
        Ok(())
    }

    /// `PATCH /api/suppliers/{id}/{activate|deactivate|suspend}`
    pub async fn transition(
        &self,
        id: i64,
        transition: SupplierTransition,
    ) -> Result<Supplier, ApiError> {
        let path = format!("/api/suppliers/{id}/{}", transition.as_path_segment());
        let value = self.transport.execute(ApiRequest::patch(path)).await?;
        let envelope: SupplierEnvelope = serde_json::from_value(value).map_err(ApiError::decode)?;
        Ok(envelope.supplier)
    }

    /// `GET /api/suppliers/categories`
    pub async fn categories(&self) -> Result<Vec<String>, ApiError> {
        let value = self
            .transport
            .execute(ApiRequest::get("/api/suppliers/categories"))
            .await?;
        let envelope: CategoriesEnvelope =
            serde_json::from_value(value).map_err(ApiError::decode)?;
        Ok(envelope.categories)
    }

    /// `GET /api/suppliers/statistics`
    pub async fn statistics(&self) -> Result<SupplierStatistics, ApiError> {
        let value = self
            .transport
            .execute(ApiRequest::get("/api/suppliers/statistics"))
            .await?;
        let envelope: StatisticsEnvelope =
            serde_json::from_value(value).map_err(ApiError::decode)?;
        Ok(envelope.statistics)
    }
}
