use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, ErrorExtensions, ID, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension,
    extract::State,
    http::HeaderMap,
    response::Html,
};
use uuid::Uuid;

pub use crate::modules::restaurants::use_cases::create_schedule::inbound::graphql::CreateScheduleMutation;
pub use crate::modules::restaurants::use_cases::delete_schedule::inbound::graphql::DeleteScheduleMutation;
pub use crate::modules::restaurants::use_cases::list_schedules::inbound::graphql::QueryRoot;
use crate::modules::restaurants::core::restaurant::AccessScope;
use crate::shared::core::api_response::CommonCode;
use crate::shared::infrastructure::identity_provider::Identity;
use crate::shell::auth::{MANAGER_ROLES, bearer_token, verify};
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateScheduleMutation, DeleteScheduleMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Outcome of authenticating the request that carries a GraphQL operation.
#[derive(Debug, Clone)]
pub struct Caller(pub Result<Identity, CommonCode>);

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

fn common_error(code: CommonCode) -> async_graphql::Error {
    async_graphql::Error::new(code.message()).extend_with(|_, extensions| {
        extensions.set("code", code.as_str());
        extensions.set("httpCode", code.status().as_u16());
    })
}

pub fn require_manager(context: &async_graphql::Context<'_>) -> async_graphql::Result<AccessScope> {
    let Caller(caller) = context
        .data_opt::<Caller>()
        .cloned()
        .unwrap_or(Caller(Err(CommonCode::AccessTokenRequired)));
    let identity = caller.map_err(common_error)?;
    if !identity.has_any_role(&MANAGER_ROLES) {
        return Err(common_error(CommonCode::Forbidden));
    }
    Ok(AccessScope::from_identity(&identity))
}

pub fn parse_id(id: &ID) -> async_graphql::Result<Uuid> {
    Uuid::parse_str(id.as_str()).map_err(|_| common_error(CommonCode::BadRequest))
}

pub async fn graphql(
    State(state): State<AppState>,
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let caller = match bearer_token(&headers) {
        Some(token) => Caller(verify(&*state.identity_provider, token).await),
        None => Caller(Err(CommonCode::AccessTokenRequired)),
    };
    schema.execute(request.into_inner().data(caller)).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

#[cfg(test)]
mod graphql_tests {
    use super::*;
    use crate::modules::restaurants::adapters::outbound::restaurant_store::ScheduleRepository;
    use crate::modules::restaurants::adapters::outbound::restaurant_store_in_memory::InMemoryRestaurantStore;
    use crate::tests::fixtures::identities::{make_staff_identity, make_tenant_identity};
    use crate::tests::fixtures::restaurants::ScheduleBuilder;
    use crate::tests::fixtures::state::{make_test_state, seed_restaurant};
    use async_graphql::Request;
    use rstest::rstest;
    use std::sync::Arc;

    #[rstest]
    #[tokio::test]
    async fn it_should_list_schedules_for_a_manager() {
        let store = Arc::new(InMemoryRestaurantStore::new());
        let restaurant = seed_restaurant(&store).await;
        let schedule = ScheduleBuilder::new().restaurant_id(restaurant.id).build();
        store.append(0, schedule).await.unwrap();
        let schema = build_schema(make_test_state(store).await);

        let query = format!(
            r#"{{ schedules(restaurantId: "{}") {{ dayOfWeek openTime closeTime }} }}"#,
            restaurant.id
        );
        let response = schema
            .execute(Request::new(query).data(Caller(Ok(make_tenant_identity()))))
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        assert_eq!(json["schedules"][0]["dayOfWeek"], 1);
        assert_eq!(json["schedules"][0]["openTime"], "09:00");
    }

    #[rstest]
    #[case(Caller(Err(CommonCode::AccessTokenRequired)), "ACCESS_TOKEN_REQUIRED")]
    #[case(Caller(Err(CommonCode::InvalidAccessToken)), "INVALID_ACCESS_TOKEN")]
    #[case(Caller(Ok(make_staff_identity())), "FORBIDDEN")]
    #[tokio::test]
    async fn it_should_turn_away_callers_who_may_not_manage(
        #[case] caller: Caller,
        #[case] code: &str,
    ) {
        let store = Arc::new(InMemoryRestaurantStore::new());
        let restaurant = seed_restaurant(&store).await;
        let schema = build_schema(make_test_state(store).await);

        let query = format!(
            r#"mutation {{ createSchedule(restaurantId: "{}", dayOfWeek: 1, openTime: "09:00", closeTime: "12:00") {{ id }} }}"#,
            restaurant.id
        );
        let response = schema.execute(Request::new(query).data(caller)).await;

        assert_eq!(response.errors.len(), 1);
        let extensions = response.errors[0].extensions.as_ref().unwrap();
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from(code))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_then_refuse_an_overlapping_schedule() {
        let store = Arc::new(InMemoryRestaurantStore::new());
        let restaurant = seed_restaurant(&store).await;
        let schema = build_schema(make_test_state(store).await);
        let mutation = |open: &str, close: &str| {
            Request::new(format!(
                r#"mutation {{ createSchedule(restaurantId: "{}", dayOfWeek: 2, openTime: "{open}", closeTime: "{close}") {{ id dayOfWeek }} }}"#,
                restaurant.id
            ))
            .data(Caller(Ok(make_tenant_identity())))
        };

        let created = schema.execute(mutation("09:00", "12:00")).await;
        assert!(created.errors.is_empty(), "{:?}", created.errors);

        let refused = schema.execute(mutation("11:00", "14:00")).await;
        let extensions = refused.errors[0].extensions.as_ref().unwrap();
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("SCHEDULE_OVERLAP"))
        );
    }

    #[rstest]
    fn it_should_reject_a_malformed_id() {
        assert!(parse_id(&ID("not-a-uuid".into())).is_err());
        assert!(parse_id(&ID(Uuid::nil().to_string())).is_ok());
    }
}
