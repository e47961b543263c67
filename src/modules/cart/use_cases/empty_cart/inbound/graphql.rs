use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::cart::core::validation::validate_user_id;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct EmptyCartMutation;

#[Object]
impl EmptyCartMutation {
    async fn empty_cart(&self, context: &Context<'_>, user_id: String) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let user_id = validate_user_id(&user_id)?;
        state.cart_store.empty_cart(user_id).await;
        Ok(true)
    }
}
