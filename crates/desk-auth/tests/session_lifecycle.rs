//! Session lifecycle against the file tier of the token store.

use desk_auth::{Session, SessionOrigin};
use desk_core::entities::AuthResponse;
use pretty_assertions::assert_eq;

#[test]
fn issued_session_survives_a_round_trip_through_storage() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let path = tmp.path().join("credentials");

    let issued = Session::issue(AuthResponse {
        access_token: "jwt-issued".into(),
        token_type: "bearer".into(),
    })
    .expect("issue");
    std::fs::write(&path, issued.token()).expect("persist");

    let stored = std::fs::read_to_string(&path).expect("read");
    let restored = Session::restore(&stored).expect("restore");

    assert_eq!(restored.authorization(), issued.authorization());
    assert_eq!(restored.origin(), SessionOrigin::Restored);

    issued.invalidate();
    restored.invalidate();
}
