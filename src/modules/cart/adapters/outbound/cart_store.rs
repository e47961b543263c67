use crate::modules::cart::core::cart::Cart;
use async_trait::async_trait;

/// Per-user cart registry used by the request handlers.
///
/// Implementations must be safe to call from many tasks at once. Every
/// operation succeeds; validating ids is left to the caller.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn initialize(&self);

    /// Adds `quantity` of `product_id` to the user's cart, creating the cart on
    /// first use. Concurrent adds for the same user are never lost.
    async fn add_item(&self, user_id: &str, product_id: &str, quantity: i32);

    /// Replaces the user's cart with an empty one.
    async fn empty_cart(&self, user_id: &str);

    /// Snapshot of the user's cart, or an empty cart when none is registered.
    async fn get_cart(&self, user_id: &str) -> Cart;

    fn ping(&self) -> bool;
}
