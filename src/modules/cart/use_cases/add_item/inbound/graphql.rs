use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::cart::core::validation::{validate_product_id, validate_user_id};
use crate::modules::cart::use_cases::get_cart::inbound::graphql::GqlCart;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AddItemMutation;

#[Object]
impl AddItemMutation {
    /// Adds the product, then returns a fresh snapshot of the cart. Writes from
    /// other requests may land between the add and the read.
    async fn add_item(
        &self,
        context: &Context<'_>,
        user_id: String,
        product_id: String,
        quantity: i32,
    ) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<AppState>();
        let user_id = validate_user_id(&user_id)?;
        let product_id = validate_product_id(&product_id)?;

        state
            .cart_store
            .add_item(user_id, product_id, quantity)
            .await;
        Ok(state.cart_store.get_cart(user_id).await.into())
    }
}
