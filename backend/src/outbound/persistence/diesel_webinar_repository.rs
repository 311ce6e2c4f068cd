//! PostgreSQL-backed `WebinarRepository` implementation using Diesel ORM.
//!
//! Updates are revision checked: the `UPDATE` matches on both id and the
//! revision the caller read, and increments the revision in the same
//! statement. A zero row count is resolved by re-reading the row.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{WebinarRepository, WebinarRepositoryError};
use crate::domain::{UserId, Webinar, WebinarDraft, WebinarId};

use super::models::{NewWebinarRow, WebinarRow};
use super::pool::{DbPool, PoolError};
use super::schema::webinars;

/// Diesel-backed implementation of the `WebinarRepository` port.
#[derive(Clone)]
pub struct DieselWebinarRepository {
    pool: DbPool,
}

impl DieselWebinarRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Store a webinar unless one with the same id already exists.
    ///
    /// Returns whether a row was written. Used for seeding; webinar creation
    /// is not part of the HTTP surface.
    pub async fn insert_if_absent(
        &self,
        webinar: &Webinar,
    ) -> Result<bool, WebinarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewWebinarRow {
            id: webinar.id().as_ref(),
            title: webinar.title(),
            seats: to_db_int(webinar.seats(), "seats")?,
            start_date: webinar.start_date(),
            end_date: webinar.end_date(),
            organizer_id: webinar.organizer_id().as_ref(),
            revision: to_db_int(webinar.revision(), "revision")?,
        };

        let inserted = diesel::insert_into(webinars::table)
            .values(&row)
            .on_conflict(webinars::id)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(inserted > 0)
    }
}

/// Map pool errors to domain webinar repository errors.
fn map_pool_error(error: PoolError) -> WebinarRepositoryError {
    WebinarRepositoryError::connection(error.message())
}

/// Map Diesel errors to domain webinar repository errors.
fn map_diesel_error(error: diesel::result::Error) -> WebinarRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => WebinarRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => WebinarRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            WebinarRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            WebinarRepositoryError::query("webinar violates a table constraint")
        }
        _ => WebinarRepositoryError::query("database error"),
    }
}

fn to_db_int(value: u32, column: &str) -> Result<i32, WebinarRepositoryError> {
    i32::try_from(value).map_err(|_| {
        WebinarRepositoryError::query(format!("{column} {value} exceeds column range"))
    })
}

fn from_db_int(value: i32, column: &str) -> Result<u32, WebinarRepositoryError> {
    u32::try_from(value).map_err(|_| {
        WebinarRepositoryError::query(format!("stored {column} {value} is negative"))
    })
}

/// Convert a database row to a domain webinar, revalidating its invariants.
fn row_to_webinar(row: WebinarRow) -> Result<Webinar, WebinarRepositoryError> {
    let invalid = |err: &dyn std::fmt::Display| {
        WebinarRepositoryError::query(format!("invalid webinar row {}: {err}", row.id))
    };

    let id = WebinarId::new(row.id.clone()).map_err(|err| invalid(&err))?;
    let organizer_id = UserId::new(row.organizer_id.clone()).map_err(|err| invalid(&err))?;
    let seats = from_db_int(row.seats, "seats")?;
    let revision = from_db_int(row.revision, "revision")?;

    let webinar = Webinar::new(WebinarDraft {
        id,
        organizer_id,
        title: row.title.clone(),
        start_date: row.start_date,
        end_date: row.end_date,
        seats,
    })
    .map_err(|err| invalid(&err))?;

    Ok(webinar.with_revision(revision))
}

/// Classify an update that matched no rows.
async fn handle_webinar_update_failure<C>(
    conn: &mut C,
    id: &WebinarId,
    expected_revision: u32,
) -> WebinarRepositoryError
where
    C: diesel_async::AsyncConnection<Backend = diesel::pg::Pg> + Send,
{
    let current: Result<Option<i32>, WebinarRepositoryError> = webinars::table
        .filter(webinars::id.eq(id.as_ref()))
        .select(webinars::revision)
        .first(conn)
        .await
        .optional()
        .map_err(map_diesel_error);

    match current {
        Ok(Some(revision)) => match from_db_int(revision, "revision") {
            Ok(actual) => WebinarRepositoryError::revision_mismatch(expected_revision, actual),
            Err(err) => err,
        },
        Ok(None) => WebinarRepositoryError::missing(id.as_ref()),
        Err(err) => err,
    }
}

#[async_trait]
impl WebinarRepository for DieselWebinarRepository {
    async fn find_by_id(
        &self,
        id: &WebinarId,
    ) -> Result<Option<Webinar>, WebinarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let result: Option<WebinarRow> = webinars::table
            .filter(webinars::id.eq(id.as_ref()))
            .select(WebinarRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        result.map(row_to_webinar).transpose()
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let expected = to_db_int(webinar.revision(), "revision")?;
        let seats = to_db_int(webinar.seats(), "seats")?;

        let updated_rows = diesel::update(webinars::table)
            .filter(
                webinars::id
                    .eq(webinar.id().as_ref())
                    .and(webinars::revision.eq(expected)),
            )
            .set((
                webinars::seats.eq(seats),
                webinars::updated_at.eq(Utc::now()),
                webinars::revision.eq(webinars::revision + 1),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated_rows == 0 {
            return Err(
                handle_webinar_update_failure(&mut conn, webinar.id(), webinar.revision()).await,
            );
        }
        Ok(())
    }
}
