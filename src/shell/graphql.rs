use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

pub use crate::modules::cart::use_cases::add_item::inbound::graphql::AddItemMutation;
pub use crate::modules::cart::use_cases::empty_cart::inbound::graphql::EmptyCartMutation;
pub use crate::modules::cart::use_cases::get_cart::inbound::graphql::QueryRoot;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(AddItemMutation, EmptyCartMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub const GRAPHQL_PATH: &str = "/gql";

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
