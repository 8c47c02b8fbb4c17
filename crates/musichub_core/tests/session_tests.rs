use assert_matches::assert_matches;
use base64::Engine as _;
use musichub_core::{
    demo_credentials, encode_token, AccessError, FileStore, Identity, KeyValueStore, MemoryStore,
    RequireAdmin, Role, SessionStore, SESSION_KEY,
};

fn store_with_token(token: &str) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.set(SESSION_KEY, token).unwrap();
    store
}

fn payload(json: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(json)
}

#[test]
fn unknown_credentials_are_refused() {
    let pairs = [
        ("admin", "wrong"),
        ("user", "admin123"),
        ("Admin", "admin123"),
        ("admin ", "admin123"),
        ("", ""),
        ("guest", "guest"),
    ];

    for (username, password) in pairs {
        let mut session = SessionStore::restore(MemoryStore::new());
        assert!(!session.login(username, password), "{username}/{password}");
        assert!(session.identity().is_none());
        assert!(!session.is_authenticated());
        assert_eq!(session.store().get(SESSION_KEY).unwrap(), None);
    }
}

#[test]
fn known_credentials_yield_matching_role() {
    let mut session = SessionStore::restore(MemoryStore::new());
    assert!(session.login("admin", "admin123"));
    assert_eq!(
        session.identity(),
        Some(&Identity {
            id: "1".to_string(),
            username: "admin".to_string(),
            role: Role::Admin,
        })
    );

    let mut session = SessionStore::restore(MemoryStore::new());
    assert!(session.login("user", "user123"));
    let identity = session.identity().unwrap();
    assert_eq!(identity.id, "2");
    assert_eq!(identity.role, Role::User);
    assert!(!identity.is_admin());
}

#[test]
fn successful_login_persists_token() {
    let mut session = SessionStore::restore(MemoryStore::new());
    session.login("user", "user123");

    let token = session.store().get(SESSION_KEY).unwrap().unwrap();
    assert_eq!(token, encode_token(session.identity().unwrap()).unwrap());
    assert!(token.starts_with("header."));
    assert!(token.ends_with(".signature"));
}

#[test]
fn try_login_reports_invalid_credentials() {
    let mut session = SessionStore::restore(MemoryStore::new());
    let err = session.try_login("admin", "nope").unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn failed_login_leaves_existing_identity() {
    let mut session = SessionStore::restore(MemoryStore::new());
    assert!(session.login("admin", "admin123"));
    assert!(!session.login("user", "wrong"));
    assert_eq!(session.identity().unwrap().username, "admin");
}

#[test]
fn login_while_signed_in_replaces_identity() {
    let mut session = SessionStore::restore(MemoryStore::new());
    session.login("admin", "admin123");
    session.login("user", "user123");
    assert_eq!(session.identity().unwrap().role, Role::User);
}

#[test]
fn logout_always_clears_identity_and_slot() {
    let mut session = SessionStore::restore(MemoryStore::new());
    session.logout();
    assert!(session.identity().is_none());

    session.login("admin", "admin123");
    session.logout();
    assert!(session.identity().is_none());
    assert_eq!(session.store().get(SESSION_KEY).unwrap(), None);

    session.logout();
    assert!(session.identity().is_none());
}

#[test]
fn restore_with_valid_token_signs_in() {
    let identity = Identity {
        id: "2".to_string(),
        username: "user".to_string(),
        role: Role::User,
    };
    let token = encode_token(&identity).unwrap();

    let session = SessionStore::restore(store_with_token(&token));
    assert_eq!(session.identity(), Some(&identity));
}

#[test]
fn restore_with_empty_slot_is_signed_out() {
    let session = SessionStore::restore(MemoryStore::new());
    assert!(!session.is_authenticated());
}

#[test]
fn tampered_tokens_are_discarded() {
    let valid = encode_token(&Identity {
        id: "1".to_string(),
        username: "admin".to_string(),
        role: Role::Admin,
    })
    .unwrap();

    let tokens = vec![
        String::new(),
        "garbage".to_string(),
        valid[..valid.len() / 2].to_string(),
        format!("{valid}.extra"),
        "header.!!!not-base64!!!.signature".to_string(),
        format!("header.{}.signature", payload("not json")),
        format!("header.{}.signature", payload("null")),
        format!("header.{}.signature", payload(r#"{"id":"1"}"#)),
        format!(
            "header.{}.signature",
            payload(r#"{"id":"1","username":"admin","role":"root"}"#)
        ),
    ];

    for token in tokens {
        let session = SessionStore::restore(store_with_token(&token));
        assert!(session.identity().is_none(), "token {token:?} was accepted");
        assert_eq!(session.store().get(SESSION_KEY).unwrap(), None);

        let again = SessionStore::restore(session.into_store());
        assert!(again.identity().is_none());
        assert_eq!(again.store().get(SESSION_KEY).unwrap(), None);
    }
}

#[test]
fn session_survives_restart_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");

    let mut session = SessionStore::restore(FileStore::new(&path));
    assert!(session.login("admin", "admin123"));
    drop(session);

    let restored = SessionStore::restore(FileStore::new(&path));
    assert_eq!(restored.identity().unwrap().username, "admin");
    assert!(restored.identity().unwrap().is_admin());
}

#[test]
fn logout_removes_token_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut session = SessionStore::restore(FileStore::new(&path));
    session.login("user", "user123");
    session.logout();

    let restored = SessionStore::restore(FileStore::new(&path));
    assert!(!restored.is_authenticated());
}

#[test]
fn tampered_file_token_is_cleared_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"musicapp_token": "header.@@@.signature", "other": "kept"}"#).unwrap();

    let session = SessionStore::restore(FileStore::new(&path));
    assert!(!session.is_authenticated());

    let store = FileStore::new(&path);
    assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    assert_eq!(store.get("other").unwrap().as_deref(), Some("kept"));
}

#[test]
fn unreadable_store_file_starts_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let session = SessionStore::restore(FileStore::new(&path));
    assert!(!session.is_authenticated());
    assert_eq!(FileStore::new(&path).get(SESSION_KEY).unwrap(), None);
}

#[test]
fn unreadable_store_file_is_replaced_by_next_login() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let mut session = SessionStore::restore(FileStore::new(&path));
    assert!(session.login("admin", "admin123"));

    let restored = SessionStore::restore(FileStore::new(&path));
    assert!(restored.is_authenticated());
    assert_eq!(restored.identity().unwrap().username, "admin");
}

#[test]
fn removing_from_unreadable_store_file_rewrites_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json at all").unwrap();

    let mut store = FileStore::new(&path);
    store.remove(SESSION_KEY).unwrap();

    assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "{}");
}

#[test]
fn require_admin_checks_role() {
    let mut session = SessionStore::restore(MemoryStore::new());
    assert_matches!(RequireAdmin::check(&session), Err(AccessError::NotAuthenticated));

    session.login("user", "user123");
    assert_matches!(RequireAdmin::check(&session), Err(AccessError::Forbidden));

    session.login("admin", "admin123");
    let admin = RequireAdmin::check(&session).unwrap();
    assert_eq!(admin.identity().username, "admin");
}

#[test]
fn demo_credentials_sign_in_with_their_role() {
    for role in [Role::Admin, Role::User] {
        let (username, password) = demo_credentials(role);
        let mut session = SessionStore::restore(MemoryStore::new());
        assert!(session.login(username, password));
        assert_eq!(session.identity().unwrap().role, role);
    }
}
