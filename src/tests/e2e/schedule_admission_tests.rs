use axum::http::StatusCode;
use rstest::rstest;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::restaurants::adapters::outbound::restaurant_store_in_memory::InMemoryRestaurantStore;
use crate::shell::http::router;
use crate::tests::fixtures::http::{empty_request, json_of, json_request};
use crate::tests::fixtures::identities::{SUPER_ADMIN_TOKEN, TENANT_TOKEN};
use crate::tests::fixtures::state::make_test_state;

#[rstest]
#[tokio::test]
async fn it_should_admit_a_week_of_schedules_end_to_end() {
    let app = router(make_test_state(Arc::new(InMemoryRestaurantStore::new())).await);

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/restaurants",
            Some(TENANT_TOKEN),
            r#"{"name":"Trattoria Nonna","address":"Calle Mayor 12","isOpen":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let restaurant_id = json_of(created).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();
    let schedules = format!("/restaurants/{restaurant_id}/schedules");

    let attempts = [
        (1, "09:00", "17:00", StatusCode::CREATED, "SCHEDULE_CREATED"),
        (1, "16:00", "20:00", StatusCode::CONFLICT, "SCHEDULE_OVERLAP"),
        (1, "09:00", "17:00", StatusCode::CONFLICT, "SCHEDULE_OVERLAP"),
        (2, "09:00", "17:00", StatusCode::CREATED, "SCHEDULE_CREATED"),
        (5, "22:00", "02:00", StatusCode::CREATED, "SCHEDULE_CREATED"),
        (5, "01:00", "03:00", StatusCode::CONFLICT, "SCHEDULE_OVERLAP"),
    ];
    for (day, open, close, status, code) in attempts {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &schedules,
                Some(TENANT_TOKEN),
                format!(r#"{{"dayOfWeek":{day},"openTime":"{open}","closeTime":"{close}"}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), status, "{day} {open}-{close}");
        assert_eq!(json_of(response).await["code"], code);
    }

    let listed = app
        .clone()
        .oneshot(empty_request("GET", &schedules, Some(SUPER_ADMIN_TOKEN)))
        .await
        .unwrap();
    assert_eq!(listed.status(), StatusCode::OK);
    let data = json_of(listed).await["data"].clone();
    let days: Vec<i64> = data
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["dayOfWeek"].as_i64().unwrap())
        .collect();
    assert_eq!(days, vec![1, 2, 5]);

    // Saturday 01:30 falls in Friday's late shift.
    let saturday_night = app
        .clone()
        .oneshot(empty_request(
            "GET",
            &format!("/restaurants/{restaurant_id}/opening-status?day=6&time=01:30"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(saturday_night.status(), StatusCode::OK);
    assert_eq!(json_of(saturday_night).await["data"]["isOpen"], true);

    let friday_id = data[2]["id"].as_str().unwrap().to_string();
    let deleted = app
        .clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/schedules/{friday_id}"),
            Some(TENANT_TOKEN),
        ))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);
    assert_eq!(json_of(deleted).await["code"], "SCHEDULE_DELETED");

    let after_delete = app
        .oneshot(json_request(
            "POST",
            &schedules,
            Some(TENANT_TOKEN),
            r#"{"dayOfWeek":5,"openTime":"01:00","closeTime":"03:00"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(after_delete.status(), StatusCode::CREATED);
}

#[rstest]
#[tokio::test]
async fn it_should_admit_only_one_of_two_concurrent_overlapping_schedules() {
    let store = Arc::new(InMemoryRestaurantStore::new());
    store.set_delay_append_ms(10);
    let app = router(make_test_state(store).await);

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/restaurants",
            Some(TENANT_TOKEN),
            r#"{"name":"Trattoria Nonna","address":"Calle Mayor 12"}"#,
        ))
        .await
        .unwrap();
    let restaurant_id = json_of(created).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();
    let schedules = format!("/restaurants/{restaurant_id}/schedules");

    let (a, b) = tokio::join!(
        app.clone().oneshot(json_request(
            "POST",
            &schedules,
            Some(TENANT_TOKEN),
            r#"{"dayOfWeek":3,"openTime":"10:00","closeTime":"14:00"}"#,
        )),
        app.clone().oneshot(json_request(
            "POST",
            &schedules,
            Some(TENANT_TOKEN),
            r#"{"dayOfWeek":3,"openTime":"13:00","closeTime":"18:00"}"#,
        )),
    );
    let mut statuses = vec![a.unwrap().status().as_u16(), b.unwrap().status().as_u16()];
    statuses.sort();
    assert_eq!(statuses, vec![201, 409]);
}

#[rstest]
#[tokio::test]
async fn it_should_create_and_list_schedules_over_graphql() {
    let app = router(make_test_state(Arc::new(InMemoryRestaurantStore::new())).await);

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/restaurants",
            Some(TENANT_TOKEN),
            r#"{"name":"Trattoria Nonna","address":"Calle Mayor 12"}"#,
        ))
        .await
        .unwrap();
    let restaurant_id = json_of(created).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let mutation = serde_json::json!({
        "query": format!(
            r#"mutation {{ createSchedule(restaurantId: "{restaurant_id}", dayOfWeek: 0, openTime: "12:00", closeTime: "15:00") {{ id openTime }} }}"#
        )
    });
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/gql",
            Some(TENANT_TOKEN),
            mutation.to_string(),
        ))
        .await
        .unwrap();
    let json = json_of(response).await;
    assert!(json.get("errors").is_none(), "{json}");
    assert_eq!(json["data"]["createSchedule"]["openTime"], "12:00");

    let query = serde_json::json!({
        "query": format!(r#"{{ schedules(restaurantId: "{restaurant_id}") {{ dayOfWeek closeTime }} }}"#)
    });
    let anonymous = app
        .clone()
        .oneshot(json_request("POST", "/gql", None, query.to_string()))
        .await
        .unwrap();
    let json = json_of(anonymous).await;
    assert_eq!(json["errors"][0]["extensions"]["code"], "ACCESS_TOKEN_REQUIRED");

    let listed = app
        .oneshot(json_request(
            "POST",
            "/gql",
            Some(TENANT_TOKEN),
            query.to_string(),
        ))
        .await
        .unwrap();
    let json = json_of(listed).await;
    assert_eq!(json["data"]["schedules"][0]["dayOfWeek"], 0);
    assert_eq!(json["data"]["schedules"][0]["closeTime"], "15:00");
}
