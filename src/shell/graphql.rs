use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};

pub use crate::modules::games::use_cases::get_game::inbound::graphql::QueryRoot;
use crate::modules::games::use_cases::create_game::inbound::graphql::CreateGameMutation;
use crate::modules::games::use_cases::make_move::inbound::graphql::MakeMoveMutation;
pub use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateGameMutation, MakeMoveMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub fn router(schema: AppSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
