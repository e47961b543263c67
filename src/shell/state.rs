use crate::modules::cart::adapters::outbound::cart_store::CartStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub cart_store: Arc<dyn CartStore>,
}

impl AppState {
    pub fn new(cart_store: Arc<dyn CartStore>) -> Self {
        Self { cart_store }
    }
}
