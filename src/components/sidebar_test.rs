use super::*;
use crate::net::types::Role;

fn sections(items: &[NavItem]) -> Vec<&'static str> {
    items
        .iter()
        .filter_map(|item| match item {
            NavItem::Section(label) => Some(*label),
            NavItem::Link(_) => None,
        })
        .collect()
}

fn links(items: &[NavItem]) -> Vec<NavLink> {
    items
        .iter()
        .filter_map(|item| match item {
            NavItem::Link(link) => Some(*link),
            NavItem::Section(_) => None,
        })
        .collect()
}

// =============================================================
// Menu composition
// =============================================================

#[test]
fn non_admin_menu_excludes_admin_section() {
    let user = User::new("bob", Role::User);
    let items = nav_items(Some(&user));
    assert!(!sections(&items).contains(&"Admin"));
    assert!(links(&items).iter().all(|link| link.id != "admin"));
    assert_eq!(items, MENU.to_vec());
}

#[test]
fn anonymous_menu_excludes_admin_section() {
    assert_eq!(nav_items(None), MENU.to_vec());
}

#[test]
fn admin_menu_appends_exactly_one_admin_section_and_link() {
    let user = User::new("ada", Role::Admin);
    let items = nav_items(Some(&user));
    assert_eq!(sections(&items).iter().filter(|s| **s == "Admin").count(), 1);
    let admin_links: Vec<_> = links(&items).into_iter().filter(|l| l.label == "Admin Panel").collect();
    assert_eq!(admin_links.len(), 1);
    assert_eq!(admin_links[0].href, "admin.html");
    assert_eq!(items.last(), ADMIN_MENU.last());
}

#[test]
fn menu_order_is_fixed() {
    let labels: Vec<_> = links(&nav_items(None)).iter().map(|l| l.id).collect();
    assert_eq!(
        labels,
        vec![
            "dashboard",
            "brand-name",
            "logo-generator",
            "brand-identity",
            "content-generator",
            "sentiment-analysis",
            "assistant",
            "brand-kit",
        ]
    );
    assert_eq!(sections(&nav_items(None)), vec!["Main", "AI Tools", "Manage"]);
}

#[test]
fn only_matching_link_is_active() {
    let user = User::new("ada", Role::Admin);
    let active: Vec<_> = links(&nav_items(Some(&user)))
        .into_iter()
        .filter(|link| is_active(link, "brand-kit"))
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].label, "Brand Kit");
}

#[test]
fn unknown_active_id_marks_nothing() {
    assert!(links(&nav_items(None)).iter().all(|link| !is_active(link, "settings")));
}

// =============================================================
// Lookup and identity
// =============================================================

#[test]
fn find_link_resolves_page_names() {
    assert_eq!(find_link("/logo-generator.html").map(|l| l.id), Some("logo-generator"));
    assert_eq!(find_link("admin.html").map(|l| l.label), Some("Admin Panel"));
    assert_eq!(find_link("missing.html"), None);
}

#[test]
fn link_path_is_rooted() {
    let link = find_link("brand-kit.html").unwrap();
    assert_eq!(link.path(), "/brand-kit.html");
}

#[test]
fn identity_uses_profile() {
    let user = User::new("ada", Role::Admin);
    assert_eq!(
        identity(Some(&user)),
        Identity {
            initial: "A".to_owned(),
            username: "ada".to_owned(),
            role: "admin",
        }
    );
}

#[test]
fn identity_falls_back_without_profile() {
    let who = identity(None);
    assert_eq!(who.initial, "U");
    assert_eq!(who.username, "User");
    assert_eq!(who.role, "user");
}
