//! Tests for the webinar aggregate.

use chrono::{Duration, TimeZone};
use rstest::{fixture, rstest};

use super::*;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

#[fixture]
fn draft() -> WebinarDraft {
    WebinarDraft {
        id: WebinarId::new("webinar-id").expect("valid webinar id"),
        organizer_id: UserId::new("alice").expect("valid user id"),
        title: "Webinar title".to_owned(),
        start_date: start(),
        end_date: start() + Duration::hours(1),
        seats: 100,
    }
}

#[fixture]
fn webinar(draft: WebinarDraft) -> Webinar {
    Webinar::new(draft).expect("valid webinar")
}

#[rstest]
fn new_starts_at_initial_revision(webinar: Webinar) {
    assert_eq!(webinar.revision(), INITIAL_REVISION);
    assert_eq!(webinar.seats(), 100);
    assert_eq!(webinar.title(), "Webinar title");
    assert_eq!(webinar.id().as_ref(), "webinar-id");
}

#[rstest]
fn new_rejects_blank_title(mut draft: WebinarDraft) {
    draft.title = "   ".to_owned();
    assert_eq!(Webinar::new(draft), Err(WebinarValidationError::EmptyTitle));
}

#[rstest]
#[case(0)]
#[case(MAX_WEBINAR_SEATS + 1)]
fn new_rejects_seats_outside_range(mut draft: WebinarDraft, #[case] seats: u32) {
    draft.seats = seats;
    assert_eq!(
        Webinar::new(draft),
        Err(WebinarValidationError::SeatsOutOfRange {
            min: MIN_WEBINAR_SEATS,
            max: MAX_WEBINAR_SEATS,
        })
    );
}

#[rstest]
fn new_rejects_end_before_start(mut draft: WebinarDraft) {
    draft.end_date = draft.start_date - Duration::minutes(1);
    assert_eq!(
        Webinar::new(draft),
        Err(WebinarValidationError::EndsBeforeStart)
    );
}

#[rstest]
fn new_accepts_zero_length_webinar(mut draft: WebinarDraft) {
    draft.end_date = draft.start_date;
    assert!(Webinar::new(draft).is_ok());
}

#[rstest]
#[case(100)]
#[case(200)]
#[case(MAX_WEBINAR_SEATS)]
fn update_seats_accepts_growth_up_to_cap(mut webinar: Webinar, #[case] seats: u32) {
    webinar.update_seats(seats).expect("seat change allowed");
    assert_eq!(webinar.seats(), seats);
}

#[rstest]
fn update_seats_rejects_reduction(mut webinar: Webinar) {
    let result = webinar.update_seats(50);
    assert_eq!(
        result,
        Err(WebinarSeatsError::ReduceSeats {
            current: 100,
            requested: 50,
        })
    );
    assert_eq!(webinar.seats(), 100);
}

#[rstest]
fn update_seats_rejects_more_than_cap(mut webinar: Webinar) {
    let result = webinar.update_seats(1001);
    assert_eq!(
        result,
        Err(WebinarSeatsError::TooManySeats {
            max: MAX_WEBINAR_SEATS,
            requested: 1001,
        })
    );
    assert_eq!(webinar.seats(), 100);
}

#[rstest]
fn update_seats_leaves_revision_alone(mut webinar: Webinar) {
    webinar.update_seats(150).expect("seat change allowed");
    assert_eq!(webinar.revision(), INITIAL_REVISION);
}

#[rstest]
fn update_seats_checks_reduction_before_cap(draft: WebinarDraft) {
    let mut full = Webinar::new(WebinarDraft {
        seats: MAX_WEBINAR_SEATS,
        ..draft
    })
    .expect("valid webinar");
    assert!(matches!(
        full.update_seats(5),
        Err(WebinarSeatsError::ReduceSeats { .. })
    ));
    assert!(matches!(
        full.update_seats(MAX_WEBINAR_SEATS + 1),
        Err(WebinarSeatsError::TooManySeats { .. })
    ));
}

#[rstest]
fn update_seats_matches_allowed_range_exhaustively(webinar: Webinar) {
    for requested in 0..=MAX_WEBINAR_SEATS + 5 {
        let mut candidate = webinar.clone();
        let allowed = (webinar.seats()..=MAX_WEBINAR_SEATS).contains(&requested);
        assert_eq!(candidate.update_seats(requested).is_ok(), allowed, "{requested}");
    }
}

#[rstest]
fn organizer_check_compares_identifiers(webinar: Webinar) {
    assert!(webinar.is_organized_by(&UserId::new("alice").expect("valid id")));
    assert!(!webinar.is_organized_by(&UserId::new("bob").expect("valid id")));
}

#[rstest]
fn seats_error_messages_match_api_wording() {
    let reduce = WebinarSeatsError::ReduceSeats {
        current: 100,
        requested: 50,
    };
    let too_many = WebinarSeatsError::TooManySeats {
        max: MAX_WEBINAR_SEATS,
        requested: 1001,
    };
    assert_eq!(reduce.to_string(), "Webinar seats cannot be reduced");
    assert_eq!(
        too_many.to_string(),
        "Webinar cannot have more than 1000 seats"
    );
}

#[rstest]
fn webinar_id_rejects_blank_values() {
    assert!(WebinarId::new("").is_err());
    assert!(WebinarId::new(" webinar").is_err());
}
