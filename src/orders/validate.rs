//! Pre-submission validation for the custom order form.
//!
//! Mirrors the storefront's form rules; failures are resolved in the
//! form and never reach the store or the network.

use thiserror::Error;

use crate::model::CustomOrderRequest;

pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;
pub const QUANTITY_MAX: u32 = 10;

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Check a create/update payload against the form rules.
///
/// Returns every failure so the form can mark all offending fields at
/// once rather than one per submission attempt.
pub fn validate_order_request(request: &CustomOrderRequest) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if request.product_image_url.trim().is_empty() {
        errors.push(ValidationError::new(
            "productImageUrl",
            "Imagem do produto é obrigatória",
        ));
    }

    let description_chars = request.description.chars().count();
    if request.description.trim().is_empty() {
        errors.push(ValidationError::new("description", "Descrição é obrigatória"));
    } else if description_chars < DESCRIPTION_MIN_CHARS {
        errors.push(ValidationError::new(
            "description",
            "Descrição deve ter pelo menos 10 caracteres",
        ));
    } else if description_chars > DESCRIPTION_MAX_CHARS {
        errors.push(ValidationError::new(
            "description",
            "Descrição deve ter no máximo 1000 caracteres",
        ));
    }

    if request.preferred_color.trim().is_empty() {
        errors.push(ValidationError::new(
            "preferredColor",
            "Cor preferencial é obrigatória",
        ));
    }

    if request.size.trim().is_empty() {
        errors.push(ValidationError::new("size", "Tamanho é obrigatório"));
    }

    if request.category.trim().is_empty() {
        errors.push(ValidationError::new("category", "Categoria é obrigatória"));
    }

    match request.quantity {
        None => errors.push(ValidationError::new("quantity", "Quantidade é obrigatória")),
        Some(0) => errors.push(ValidationError::new(
            "quantity",
            "Quantidade deve ser pelo menos 1",
        )),
        Some(q) if q > QUANTITY_MAX => errors.push(ValidationError::new(
            "quantity",
            "Quantidade máxima é 10",
        )),
        Some(_) => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
