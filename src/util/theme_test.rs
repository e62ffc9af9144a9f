use super::*;
use crate::state::session::THEME_KEY;
use crate::state::storage::MemoryStorage;

fn session() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::new())
}

#[test]
fn init_without_preference_is_dark() {
    assert_eq!(init_theme(&session()), Theme::Dark);
}

#[test]
fn init_uses_stored_preference() {
    let session = session();
    session.set_theme(Theme::Light).unwrap();
    assert_eq!(init_theme(&session), Theme::Light);
}

#[test]
fn toggle_flips_and_persists() {
    let session = session();
    let next = toggle_theme(&session, Theme::Dark);
    assert_eq!(next, Theme::Light);
    assert_eq!(session.storage().get(THEME_KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn toggle_twice_restores_original() {
    let session = session();
    let original = init_theme(&session);
    let once = toggle_theme(&session, original);
    let twice = toggle_theme(&session, once);
    assert_eq!(twice, original);
    assert_eq!(session.theme(), original);
}

#[test]
fn parse_accepts_only_known_values() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn applied_is_none_off_browser() {
    assert_eq!(applied(), None);
}
