use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartRequestError {
    #[error("user id must not be blank")]
    BlankUserId,

    #[error("product id must not be blank")]
    BlankProductId,
}

pub fn validate_user_id(user_id: &str) -> Result<&str, CartRequestError> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(CartRequestError::BlankUserId);
    }
    Ok(trimmed)
}

pub fn validate_product_id(product_id: &str) -> Result<&str, CartRequestError> {
    let trimmed = product_id.trim();
    if trimmed.is_empty() {
        return Err(CartRequestError::BlankProductId);
    }
    Ok(trimmed)
}
