use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::cart::core::cart::{Cart, CartItem};
use crate::modules::cart::core::validation::validate_user_id;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCartItem {
    pub product_id: String,
    pub quantity: i32,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCart {
    pub user_id: String,
    pub items: Vec<GqlCartItem>,
}

impl From<CartItem> for GqlCartItem {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

impl From<Cart> for GqlCart {
    fn from(cart: Cart) -> Self {
        Self {
            user_id: cart.user_id,
            items: cart.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn cart(&self, context: &Context<'_>, user_id: String) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<AppState>();
        let user_id = validate_user_id(&user_id)?;
        Ok(state.cart_store.get_cart(user_id).await.into())
    }
}
