//! The app fetches the user list once on its first frame and renders the outcome.

mod common;

use std::time::Duration;

use common::{TestCtx, placeholder_users};
use kittest::Queryable;
use roster_business::{FETCH_FAILED_MESSAGE, UsersFetchCompute};
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_initial_fetch_displays_first_page() {
    let mut ctx = TestCtx::new_app(
        ResponseTemplate::new(200).set_body_json(placeholder_users(11)),
        1,
    )
    .await;

    ctx.pump_frames(10).await;
    let harness = ctx.harness_mut();

    assert!(
        harness.query_by_label("Member 01").is_some(),
        "First user should be displayed after the fetch completes"
    );
    assert!(harness.query_by_label("Member 05").is_some());
    assert!(
        harness.query_by_label("Member 06").is_none(),
        "Only five rows fit on a page"
    );
    assert!(harness.query_by_label_contains("11 users match, page 1 of 3").is_some());
}

#[tokio::test]
async fn test_server_error_shows_message_and_empty_table() {
    let mut ctx = TestCtx::new_app(ResponseTemplate::new(500), 1).await;

    ctx.pump_frames(10).await;
    let harness = ctx.harness_mut();

    assert!(
        harness.query_by_label(FETCH_FAILED_MESSAGE).is_some(),
        "Fetch failure should be shown"
    );
    assert!(harness.query_by_label_contains("Member").is_none());
    assert!(harness.query_by_label_contains("Loading users").is_none());

    let fetch = harness
        .state()
        .state
        .ctx
        .cached::<UsersFetchCompute>()
        .expect("loader registered");
    assert!(!fetch.is_loading(), "Loading must end after a failure");
}

#[tokio::test]
async fn test_loading_indicator_while_request_is_pending() {
    let mut ctx = TestCtx::new_app(
        ResponseTemplate::new(200)
            .set_body_json(placeholder_users(2))
            .set_delay(Duration::from_millis(500)),
        1,
    )
    .await;

    // first frame dispatches, the command posts Loading once it runs,
    // the next frame applies it
    ctx.harness_mut().step();
    tokio::time::sleep(Duration::from_millis(20)).await;
    ctx.harness_mut().step();

    assert!(
        ctx.harness_mut()
            .query_by_label_contains("Loading users")
            .is_some(),
        "Spinner text should show while the request is pending"
    );

    tokio::time::sleep(Duration::from_millis(600)).await;
    ctx.pump_frames(5).await;

    assert!(ctx.harness_mut().query_by_label("Member 01").is_some());
    assert!(
        ctx.harness_mut()
            .query_by_label_contains("Loading users")
            .is_none()
    );
}

#[tokio::test]
async fn test_list_is_fetched_only_once() {
    let mut ctx = TestCtx::new_app(
        ResponseTemplate::new(200).set_body_json(placeholder_users(3)),
        1,
    )
    .await;

    // the mock's `expect(1)` fails the test on drop if the app fetched again
    ctx.pump_frames(30).await;
    assert!(ctx.harness_mut().query_by_label("Member 03").is_some());
}
