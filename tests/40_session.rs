mod common;

use hrdash::cli::utils::clear_rejected_session;
use hrdash::error::ApiError;
use hrdash::nav;
use hrdash::session::SessionStore;

#[test]
fn session_survives_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = SessionStore::open_at(dir.path()).unwrap();
        assert!(store.token().is_none());
        store
            .set("tok-123".to_string(), "Administrator".to_string())
            .unwrap();
    }

    let store = SessionStore::open_at(dir.path()).unwrap();
    assert_eq!(store.token(), Some("tok-123"));
    assert_eq!(store.role(), Some("Administrator"));
}

#[test]
fn clear_destroys_the_persisted_session() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = SessionStore::open_at(dir.path()).unwrap();
    store
        .set("tok-123".to_string(), "User".to_string())
        .unwrap();
    store.clear().unwrap();

    let reopened = SessionStore::open_at(dir.path()).unwrap();
    assert!(reopened.token().is_none());
    assert!(reopened.role().is_none());
}

#[test]
fn require_token_is_the_redirect_gate() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::open_at(dir.path()).unwrap();

    let err = store.session().require_token().unwrap_err();
    assert!(matches!(err, ApiError::Unauthenticated));
    assert!(err.requires_login());
}

#[test]
fn server_rejection_clears_the_stored_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SessionStore::open_at(dir.path()).unwrap();
    store
        .set("tok-stale".to_string(), "Administrator".to_string())
        .unwrap();

    let err = ApiError::Unauthorized("server rejected credentials (401)".to_string());
    clear_rejected_session(&mut store, &err).unwrap();

    assert!(store.token().is_none());
    // Cleared on disk too, not just in memory.
    let reopened = SessionStore::open_at(dir.path()).unwrap();
    assert!(reopened.token().is_none());
    assert!(reopened.role().is_none());
}

#[test]
fn other_failures_leave_the_session_intact() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SessionStore::open_at(dir.path()).unwrap();
    store
        .set("tok-123".to_string(), "Administrator".to_string())
        .unwrap();

    let err = ApiError::Server { status: 500 };
    clear_rejected_session(&mut store, &err).unwrap();

    assert_eq!(store.token(), Some("tok-123"));
    assert_eq!(store.role(), Some("Administrator"));
}

#[test]
fn stored_role_drives_the_visible_menu() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SessionStore::open_at(dir.path()).unwrap();
    store
        .set("tok-123".to_string(), "User".to_string())
        .unwrap();

    let routes = nav::visible_routes(store.role());
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].path, "/admin/employee-self-service");
}
