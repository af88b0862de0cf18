//! Loader tests against a mock user-list endpoint.

#![cfg(not(target_arch = "wasm32"))]

use std::time::Duration;

use roster_business::{
    BusinessConfig, FETCH_FAILED_MESSAGE, FetchUsersCommand, UsersFetchCompute, UsersQueryState,
    UsersViewCompute,
};
use roster_states::StateCtx;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn placeholder_users(count: u64) -> serde_json::Value {
    let users: Vec<_> = (1..=count)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "name": format!("Person {id:02}"),
                "username": format!("person{id}"),
                "email": format!("person{id}@roster.test"),
                "phone": "555-0100",
                "website": "roster.test",
                "address": { "street": "Main St", "suite": "1", "city": "Springfield", "zipcode": "0" },
                "company": { "name": "Globex", "catchPhrase": "", "bs": "" }
            })
        })
        .collect();
    serde_json::Value::Array(users)
}

async fn mount(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(template)
        .mount(server)
        .await;
}

fn ctx_for(server: &MockServer) -> StateCtx {
    let mut ctx = StateCtx::new();
    ctx.add_state(BusinessConfig::new(format!("{}/users", server.uri())));
    ctx.add_state(UsersQueryState::default());
    ctx.record_compute(UsersFetchCompute::default());
    ctx.record_compute(UsersViewCompute::default());
    ctx.record_command(FetchUsersCommand);
    ctx.run_computed();
    ctx
}

/// Steps the context until the loader settles or the attempts run out.
async fn settle(ctx: &mut StateCtx) {
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(20)).await;
        ctx.sync_computes();
        ctx.run_computed();
        let loading = ctx
            .cached::<UsersFetchCompute>()
            .is_some_and(|fetch| fetch.is_idle() || fetch.is_loading());
        if !loading {
            return;
        }
    }
}

fn fetch(ctx: &StateCtx) -> &UsersFetchCompute {
    ctx.cached::<UsersFetchCompute>().expect("loader registered")
}

fn view(ctx: &StateCtx) -> &UsersViewCompute {
    ctx.cached::<UsersViewCompute>().expect("view registered")
}

#[tokio::test]
async fn test_loads_users_and_shows_first_page() {
    let _ = env_logger::builder().is_test(true).try_init();
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(placeholder_users(11)),
    )
    .await;

    let mut ctx = ctx_for(&server);
    ctx.dispatch::<FetchUsersCommand>();
    ctx.flush_commands();

    // let the spawned command run up to its first network await
    tokio::task::yield_now().await;
    ctx.sync_computes();
    assert!(fetch(&ctx).is_loading(), "Loading is posted before the response");

    settle(&mut ctx).await;

    assert_eq!(fetch(&ctx).users().map(<[_]>::len), Some(11));
    assert!(fetch(&ctx).fetched_at().is_some());
    assert!(fetch(&ctx).error_message().is_none());

    let page = &view(&ctx).page;
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.rows.len(), 5);
    assert_eq!(page.rows[0].name, "Person 01");
}

#[tokio::test]
async fn test_server_error_reports_fixed_message() {
    let _ = env_logger::builder().is_test(true).try_init();
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(500)).await;

    let mut ctx = ctx_for(&server);
    ctx.dispatch::<FetchUsersCommand>();
    ctx.flush_commands();
    settle(&mut ctx).await;

    assert_eq!(fetch(&ctx).error_message(), Some(FETCH_FAILED_MESSAGE));
    assert!(!fetch(&ctx).is_loading());
    assert!(view(&ctx).page.rows.is_empty());
}

#[tokio::test]
async fn test_non_200_success_is_still_an_error() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(204).set_body_json(placeholder_users(2)),
    )
    .await;

    let mut ctx = ctx_for(&server);
    ctx.dispatch::<FetchUsersCommand>();
    ctx.flush_commands();
    settle(&mut ctx).await;

    assert_eq!(fetch(&ctx).error_message(), Some(FETCH_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_malformed_body_reports_fixed_message() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_string("{ not json"),
    )
    .await;

    let mut ctx = ctx_for(&server);
    ctx.dispatch::<FetchUsersCommand>();
    ctx.flush_commands();
    settle(&mut ctx).await;

    assert_eq!(fetch(&ctx).error_message(), Some(FETCH_FAILED_MESSAGE));
    assert!(fetch(&ctx).users().is_none());
}

#[tokio::test]
async fn test_search_applies_to_loaded_users() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(placeholder_users(11)),
    )
    .await;

    let mut ctx = ctx_for(&server);
    ctx.dispatch::<FetchUsersCommand>();
    ctx.flush_commands();
    settle(&mut ctx).await;

    ctx.update::<UsersQueryState>(|q| q.set_query("person1"));
    ctx.run_computed();

    // person1@, person10@, person11@
    let page = &view(&ctx).page;
    assert_eq!(page.total_matches, 3);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn test_redispatch_cancels_previous_request() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(placeholder_users(1))
            .set_delay(Duration::from_millis(300)),
    )
    .await;

    let mut ctx = ctx_for(&server);
    ctx.dispatch::<FetchUsersCommand>();
    ctx.flush_commands();
    let first = ctx
        .task::<FetchUsersCommand>()
        .map(|task| task.cancellation_token())
        .expect("first task spawned");

    ctx.dispatch::<FetchUsersCommand>();
    ctx.flush_commands();

    assert!(first.is_cancelled());
    settle(&mut ctx).await;
    assert_eq!(fetch(&ctx).users().map(<[_]>::len), Some(1));
}

#[test]
fn test_without_runtime_loader_never_gets_stuck_loading() {
    let mut ctx = StateCtx::new();
    ctx.add_state(BusinessConfig::new("http://127.0.0.1:9/users"));
    ctx.record_compute(UsersFetchCompute::default());
    ctx.record_command(FetchUsersCommand);

    ctx.dispatch::<FetchUsersCommand>();
    ctx.flush_commands();
    ctx.sync_computes();

    assert!(ctx.task::<FetchUsersCommand>().is_none(), "nothing was spawned");
    assert!(fetch(&ctx).is_idle());
    assert!(!fetch(&ctx).is_loading());
}

#[tokio::test]
async fn test_sparse_records_still_load() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": "u-1", "name": null, "email": "ghost@roster.test", "company": null },
            { "id": 2, "name": "John Doe", "email": null, "company": { "name": "Acme" } }
        ])),
    )
    .await;

    let mut ctx = ctx_for(&server);
    ctx.dispatch::<FetchUsersCommand>();
    ctx.flush_commands();
    settle(&mut ctx).await;

    assert!(fetch(&ctx).error_message().is_none());
    assert_eq!(fetch(&ctx).users().map(<[_]>::len), Some(2));

    ctx.update::<UsersQueryState>(|q| q.set_query("doe"));
    ctx.run_computed();
    let page = &view(&ctx).page;
    assert_eq!(page.total_matches, 1);
    assert_eq!(page.rows[0].id, "2");
}
