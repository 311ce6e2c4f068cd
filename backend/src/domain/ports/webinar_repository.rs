//! Port for webinar persistence.
//!
//! Writes are guarded by the webinar's revision stamp: an adapter must only
//! overwrite the stored webinar when the stored revision still equals
//! [`Webinar::revision`], and must bump the stored revision by one as part of
//! the same atomic write.

use async_trait::async_trait;

use crate::domain::{Webinar, WebinarId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by webinar repository adapters.
    pub enum WebinarRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "webinar repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "webinar repository query failed: {message}",
        /// The stored revision moved on since the webinar was read.
        RevisionMismatch { expected: u32, actual: u32 } =>
            "webinar revision mismatch: expected {expected}, found {actual}",
        /// The webinar disappeared between read and write.
        Missing { id: String } =>
            "webinar {id} does not exist",
    }
}

/// Port for reading and updating webinars.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebinarRepository: Send + Sync {
    /// Find a webinar by id.
    async fn find_by_id(
        &self,
        id: &WebinarId,
    ) -> Result<Option<Webinar>, WebinarRepositoryError>;

    /// Overwrite the stored webinar if its revision still matches.
    ///
    /// Returns [`WebinarRepositoryError::RevisionMismatch`] when another
    /// writer got there first and [`WebinarRepositoryError::Missing`] when the
    /// webinar no longer exists.
    async fn update(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError>;
}

/// Fixture implementation for tests that do not exercise webinar persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureWebinarRepository;

#[async_trait]
impl WebinarRepository for FixtureWebinarRepository {
    async fn find_by_id(
        &self,
        _id: &WebinarId,
    ) -> Result<Option<Webinar>, WebinarRepositoryError> {
        Ok(None)
    }

    async fn update(&self, _webinar: &Webinar) -> Result<(), WebinarRepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use chrono::Utc;
    use rstest::rstest;

    use super::*;
    use crate::domain::{UserId, WebinarDraft};

    #[rstest]
    #[tokio::test]
    async fn fixture_find_returns_none() {
        let repo = FixtureWebinarRepository;
        let found = repo
            .find_by_id(&WebinarId::new("webinar-id").expect("valid id"))
            .await
            .expect("fixture lookup succeeds");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_update_succeeds() {
        let now = Utc::now();
        let webinar = Webinar::new(WebinarDraft {
            id: WebinarId::new("webinar-id").expect("valid id"),
            organizer_id: UserId::new("alice").expect("valid id"),
            title: "Fixture".to_owned(),
            start_date: now,
            end_date: now,
            seats: 10,
        })
        .expect("valid webinar");

        FixtureWebinarRepository
            .update(&webinar)
            .await
            .expect("fixture update succeeds");
    }

    #[rstest]
    fn revision_mismatch_formats_both_revisions() {
        let err = WebinarRepositoryError::revision_mismatch(2_u32, 3_u32);
        assert_eq!(
            err.to_string(),
            "webinar revision mismatch: expected 2, found 3"
        );
    }

    #[rstest]
    fn missing_names_the_webinar() {
        let err = WebinarRepositoryError::missing("webinar-id");
        assert!(err.to_string().contains("webinar-id"));
    }
}
