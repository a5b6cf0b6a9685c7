use tabshell::managers::tab_manager::{TabManager, TabManagerTrait};
use tabshell::types::settings::DEFAULT_HOME_URL;
use tabshell::types::tab::DEFAULT_TITLE;

#[test]
fn test_starts_with_one_default_tab() {
    let mgr = TabManager::default();
    assert_eq!(mgr.tab_count(), 1);
    let tab = mgr.get_active_tab();
    assert_eq!(tab.url, DEFAULT_HOME_URL);
    assert_eq!(tab.title, DEFAULT_TITLE);
    assert_eq!(mgr.address_bar_text(), DEFAULT_HOME_URL);
}

#[test]
fn test_new_tab_appends_and_activates() {
    let mut mgr = TabManager::default();
    let first = mgr.active_tab_id().to_string();
    mgr.edit_address_bar("half typed");

    let id = mgr.new_tab();

    assert_ne!(id, first);
    assert_eq!(mgr.tab_count(), 2);
    assert_eq!(mgr.get_all_tabs()[1].id, id);
    assert_eq!(mgr.active_tab_id(), id);
    assert_eq!(mgr.address_bar_text(), DEFAULT_HOME_URL);
}

#[test]
fn test_new_tab_uses_configured_home() {
    let mut mgr = TabManager::new("https://start.test", "https://find.test/?q=");
    mgr.new_tab();
    assert_eq!(mgr.get_active_tab().url, "https://start.test");
}

#[test]
fn test_close_active_tab_activates_first_remaining() {
    let mut mgr = TabManager::default();
    let id1 = mgr.active_tab_id().to_string();
    let _id2 = mgr.new_tab();
    let id3 = mgr.new_tab();

    mgr.close_tab(&id3).unwrap();

    assert_eq!(mgr.tab_count(), 2);
    assert_eq!(mgr.active_tab_id(), id1);
}

#[test]
fn test_close_active_middle_tab_still_picks_index_zero() {
    let mut mgr = TabManager::default();
    let id1 = mgr.active_tab_id().to_string();
    let id2 = mgr.new_tab();
    mgr.new_tab();
    mgr.select_tab(&id2).unwrap();

    mgr.close_tab(&id2).unwrap();

    assert_eq!(mgr.active_tab_id(), id1);
}

#[test]
fn test_close_inactive_tab_keeps_active_and_address() {
    let mut mgr = TabManager::default();
    let id1 = mgr.active_tab_id().to_string();
    let id2 = mgr.new_tab();
    mgr.edit_address_bar("draft");

    mgr.close_tab(&id1).unwrap();

    assert_eq!(mgr.active_tab_id(), id2);
    assert_eq!(mgr.address_bar_text(), "draft");
}

#[test]
fn test_close_last_tab_creates_new_one() {
    let mut mgr = TabManager::default();
    let id = mgr.active_tab_id().to_string();
    mgr.edit_address_bar("example.com");
    mgr.submit();

    mgr.close_tab(&id).unwrap();

    assert_eq!(mgr.tab_count(), 1);
    let tab = mgr.get_active_tab();
    assert_ne!(tab.id, id);
    assert_eq!(tab.url, DEFAULT_HOME_URL);
    assert_eq!(tab.title, DEFAULT_TITLE);
    assert_eq!(mgr.address_bar_text(), DEFAULT_HOME_URL);
}

#[test]
fn test_close_nonexistent_tab_returns_error() {
    let mut mgr = TabManager::default();
    assert!(mgr.close_tab("nonexistent").is_err());
    assert_eq!(mgr.tab_count(), 1);
}

#[test]
fn test_select_tab_discards_unsubmitted_edit() {
    let mut mgr = TabManager::default();
    let id1 = mgr.active_tab_id().to_string();
    mgr.edit_address_bar("rust-lang.org");
    mgr.submit();
    mgr.new_tab();
    mgr.edit_address_bar("not submitted");

    mgr.select_tab(&id1).unwrap();

    assert_eq!(mgr.active_tab_id(), id1);
    assert_eq!(mgr.address_bar_text(), "https://rust-lang.org");
}

#[test]
fn test_select_nonexistent_tab_returns_error() {
    let mut mgr = TabManager::default();
    let before = mgr.active_tab_id().to_string();
    assert!(mgr.select_tab("nonexistent").is_err());
    assert_eq!(mgr.active_tab_id(), before);
}

#[test]
fn test_edit_address_bar_leaves_tabs_alone() {
    let mut mgr = TabManager::default();
    mgr.edit_address_bar("something");
    assert_eq!(mgr.address_bar_text(), "something");
    assert_eq!(mgr.get_active_tab().url, DEFAULT_HOME_URL);
}

#[test]
fn test_submit_updates_active_tab_only() {
    let mut mgr = TabManager::default();
    let id1 = mgr.active_tab_id().to_string();
    mgr.new_tab();
    mgr.edit_address_bar("  example.com  ");

    let url = mgr.submit();

    assert_eq!(url, "https://example.com");
    assert_eq!(mgr.get_active_tab().url, "https://example.com");
    assert_eq!(mgr.address_bar_text(), "https://example.com");
    assert_eq!(mgr.get_tab(&id1).unwrap().url, DEFAULT_HOME_URL);
}

#[test]
fn test_go_home_resets_url_and_address() {
    let mut mgr = TabManager::default();
    mgr.edit_address_bar("https://example.com/x");
    mgr.submit();
    mgr.edit_address_bar("draft");

    mgr.go_home();

    assert_eq!(mgr.get_active_tab().url, DEFAULT_HOME_URL);
    assert_eq!(mgr.address_bar_text(), DEFAULT_HOME_URL);
}

#[test]
fn test_update_title_and_empty_fallback() {
    let mut mgr = TabManager::default();
    let id = mgr.active_tab_id().to_string();

    mgr.update_tab_title(&id, "Example Domain").unwrap();
    assert_eq!(mgr.get_tab(&id).unwrap().title, "Example Domain");

    mgr.update_tab_title(&id, "").unwrap();
    assert_eq!(mgr.get_tab(&id).unwrap().title, DEFAULT_TITLE);

    assert!(mgr.update_tab_title("missing", "x").is_err());
}

#[test]
fn test_weather_scenario() {
    let mut mgr = TabManager::default();
    let id1 = mgr.active_tab_id().to_string();
    let first_url = mgr.get_active_tab().url.clone();

    let id2 = mgr.new_tab();
    assert_eq!(mgr.tab_count(), 2);
    assert_eq!(mgr.active_tab_id(), id2);

    mgr.edit_address_bar("weather");
    mgr.submit();
    assert_eq!(
        mgr.get_active_tab().url,
        "https://www.google.com/search?q=weather"
    );

    mgr.close_tab(&id2).unwrap();
    assert_eq!(mgr.tab_count(), 1);
    assert_eq!(mgr.active_tab_id(), id1);
    assert_eq!(mgr.address_bar_text(), first_url);
}
