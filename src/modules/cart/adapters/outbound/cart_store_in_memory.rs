// In memory cart store.
//
// Every user id owns one slot, a mutex around its cart. Slots are created on
// first write and never removed, so a slot handed out once stays the only one
// for that user. Writers lock the registry only to find or create the slot and
// then update the cart under the slot's own lock, which keeps users independent.

use crate::modules::cart::adapters::outbound::cart_store::CartStore;
use crate::modules::cart::core::cart::Cart;
use crate::shared::infrastructure::event_observer::EventObserver;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

type CartSlot = Arc<Mutex<Cart>>;

#[derive(Default)]
pub struct InMemoryCartStore {
    carts: RwLock<HashMap<String, CartSlot>>,
    empty_cart: Cart,
    observer: Option<Arc<dyn EventObserver>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(observer: Arc<dyn EventObserver>) -> Self {
        Self {
            observer: Some(observer),
            ..Self::default()
        }
    }

    pub async fn len(&self) -> usize {
        self.carts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.carts.read().await.is_empty()
    }

    fn emit(&self, name: &str, tags: &[(&str, &str)]) {
        if let Some(observer) = &self.observer {
            observer.emit_event(name, tags);
        }
    }

    async fn existing_slot(&self, user_id: &str) -> Option<CartSlot> {
        self.carts.read().await.get(user_id).cloned()
    }

    async fn slot(&self, user_id: &str) -> CartSlot {
        if let Some(slot) = self.existing_slot(user_id).await {
            return slot;
        }
        let mut guard = self.carts.write().await;
        guard
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(Cart::new(user_id))))
            .clone()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn initialize(&self) {
        tracing::info!("Local Cart Store was initialized");
        self.emit("Initialize called.", &[]);
    }

    async fn add_item(&self, user_id: &str, product_id: &str, quantity: i32) {
        tracing::info!(user_id, product_id, quantity, "AddItem called");
        let slot = self.slot(user_id).await;
        slot.lock().await.add_item(product_id, quantity);
        self.emit(
            "AddItem called.",
            &[("userId", user_id), ("productId", product_id)],
        );
    }

    async fn empty_cart(&self, user_id: &str) {
        tracing::info!(user_id, "EmptyCart called");
        let slot = self.slot(user_id).await;
        *slot.lock().await = Cart::new(user_id);
        self.emit("EmptyCart called.", &[("userId", user_id)]);
    }

    async fn get_cart(&self, user_id: &str) -> Cart {
        tracing::info!(user_id, "GetCart called");
        match self.existing_slot(user_id).await {
            Some(slot) => slot.lock().await.clone(),
            None => {
                tracing::info!(user_id, "No carts for user");
                self.empty_cart.clone()
            }
        }
    }

    fn ping(&self) -> bool {
        true
    }
}
