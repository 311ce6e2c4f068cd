//! Integration tests for `DieselWebinarRepository` against PostgreSQL.
//!
//! Set `WEBINARS_TEST_DATABASE_URL` to a disposable database to run them.
//! Without it every test prints a `SKIP-TEST-DATABASE` marker and returns.
//! Each test works on its own randomly named webinar, so runs can share a
//! database.

use chrono::{Duration, TimeZone, Utc};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use uuid::Uuid;
use webinars_backend::domain::ports::{WebinarRepository, WebinarRepositoryError};
use webinars_backend::domain::{UserId, Webinar, WebinarDraft, WebinarId};
use webinars_backend::outbound::persistence::{
    DbPool, DieselWebinarRepository, PoolConfig, run_pending_migrations,
};

const DATABASE_URL_VAR: &str = "WEBINARS_TEST_DATABASE_URL";

struct TestContext {
    runtime: Runtime,
    repository: DieselWebinarRepository,
}

fn setup_context(database_url: &str) -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    runtime
        .block_on(run_pending_migrations(database_url))
        .map_err(|err| err.to_string())?;

    let config = PoolConfig::new(database_url)
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        repository: DieselWebinarRepository::new(pool),
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    let database_url = std::env::var(DATABASE_URL_VAR).ok()?;
    match setup_context(&database_url) {
        Ok(ctx) => Some(ctx),
        Err(reason) => panic!("test database setup failed: {reason}"),
    }
}

fn sample_webinar(seats: u32) -> Webinar {
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid start date");
    Webinar::new(WebinarDraft {
        id: WebinarId::new(format!("webinar-{}", Uuid::new_v4())).expect("valid id"),
        organizer_id: UserId::new("alice").expect("valid organizer"),
        title: "Webinar title".to_owned(),
        start_date: start,
        end_date: start + Duration::hours(1),
        seats,
    })
    .expect("valid webinar")
}

macro_rules! require_context {
    ($ctx:expr, $name:literal) => {
        match $ctx {
            Some(ctx) => ctx,
            None => {
                eprintln!(
                    "SKIP-TEST-DATABASE: {} skipped; set {DATABASE_URL_VAR}",
                    $name
                );
                return;
            }
        }
    };
}

#[rstest]
fn inserted_webinar_round_trips(repo_context: Option<TestContext>) {
    let context = require_context!(repo_context, "inserted_webinar_round_trips");
    let webinar = sample_webinar(100);

    let inserted = context
        .runtime
        .block_on(context.repository.insert_if_absent(&webinar))
        .expect("insert webinar");
    let fetched = context
        .runtime
        .block_on(context.repository.find_by_id(webinar.id()))
        .expect("fetch webinar")
        .expect("webinar should exist");

    assert!(inserted);
    assert_eq!(fetched, webinar);
}

#[rstest]
fn second_insert_is_ignored(repo_context: Option<TestContext>) {
    let context = require_context!(repo_context, "second_insert_is_ignored");
    let webinar = sample_webinar(100);

    let first = context
        .runtime
        .block_on(context.repository.insert_if_absent(&webinar))
        .expect("first insert");
    let second = context
        .runtime
        .block_on(context.repository.insert_if_absent(&webinar))
        .expect("second insert");

    assert!(first);
    assert!(!second);
}

#[rstest]
fn unknown_webinar_is_absent(repo_context: Option<TestContext>) {
    let context = require_context!(repo_context, "unknown_webinar_is_absent");
    let id = WebinarId::new(format!("missing-{}", Uuid::new_v4())).expect("valid id");

    let fetched = context
        .runtime
        .block_on(context.repository.find_by_id(&id))
        .expect("lookup succeeds");

    assert!(fetched.is_none());
}

#[rstest]
fn update_writes_seats_and_bumps_revision(repo_context: Option<TestContext>) {
    let context = require_context!(repo_context, "update_writes_seats_and_bumps_revision");
    let mut webinar = sample_webinar(100);
    context
        .runtime
        .block_on(context.repository.insert_if_absent(&webinar))
        .expect("insert webinar");

    webinar.update_seats(200).expect("seat rule allows growth");
    context
        .runtime
        .block_on(context.repository.update(&webinar))
        .expect("update webinar");

    let stored = context
        .runtime
        .block_on(context.repository.find_by_id(webinar.id()))
        .expect("fetch webinar")
        .expect("webinar should exist");
    assert_eq!(stored.seats(), 200);
    assert_eq!(stored.revision(), webinar.revision() + 1);
}

#[rstest]
fn stale_update_is_a_revision_mismatch(repo_context: Option<TestContext>) {
    let context = require_context!(repo_context, "stale_update_is_a_revision_mismatch");
    let webinar = sample_webinar(100);
    context
        .runtime
        .block_on(context.repository.insert_if_absent(&webinar))
        .expect("insert webinar");

    let mut first = webinar.clone();
    first.update_seats(150).expect("seat rule allows growth");
    context
        .runtime
        .block_on(context.repository.update(&first))
        .expect("first writer wins");

    let mut second = webinar;
    second.update_seats(300).expect("seat rule allows growth");
    let error = context
        .runtime
        .block_on(context.repository.update(&second))
        .expect_err("second writer is stale");

    assert_eq!(error, WebinarRepositoryError::revision_mismatch(1_u32, 2_u32));
    let stored = context
        .runtime
        .block_on(context.repository.find_by_id(second.id()))
        .expect("fetch webinar")
        .expect("webinar should exist");
    assert_eq!(stored.seats(), 150);
}

#[rstest]
fn updating_a_missing_webinar_reports_missing(repo_context: Option<TestContext>) {
    let context = require_context!(repo_context, "updating_a_missing_webinar_reports_missing");
    let webinar = sample_webinar(100);

    let error = context
        .runtime
        .block_on(context.repository.update(&webinar))
        .expect_err("nothing to update");

    assert_eq!(error, WebinarRepositoryError::missing(webinar.id().as_ref()));
}
