//! Scope color assignment.

use linefmt::fmt::scope::SCOPE_PALETTE;
use linefmt::{Color, ScopeColors};

#[test]
fn assigns_palette_colors_in_rotation_order() {
    let mut scopes = ScopeColors::new();
    assert_eq!(scopes.color_for("a"), Color::Red);
    assert_eq!(scopes.color_for("b"), Color::Green);
    assert_eq!(scopes.color_for("c"), Color::Yellow);
    assert_eq!(scopes.color_for("d"), Color::Blue);
    assert_eq!(scopes.color_for("e"), Color::Magenta);
    assert_eq!(scopes.color_for("f"), Color::Cyan);
    assert_eq!(scopes.color_for("g"), Color::White);
    assert_eq!(scopes.color_for("h"), Color::Gray);
}

#[test]
fn repeat_lookups_do_not_advance_rotation() {
    let mut scopes = ScopeColors::new();
    assert_eq!(scopes.color_for("server"), Color::Red);
    assert_eq!(scopes.color_for("server"), Color::Red);
    assert_eq!(scopes.color_for("server"), Color::Red);
    assert_eq!(scopes.len(), 1);
    assert_eq!(scopes.color_for("worker"), Color::Green);
}

#[test]
fn palette_wraps_after_eight_scopes() {
    let mut scopes = ScopeColors::new();
    for name in ["a", "b", "c", "d", "e", "f", "g", "h"] {
        scopes.color_for(name);
    }
    assert_eq!(scopes.color_for("ninth"), SCOPE_PALETTE[0]);
    assert_eq!(scopes.color_for("tenth"), SCOPE_PALETTE[1]);
}

#[test]
fn palette_excludes_black() {
    assert!(!SCOPE_PALETTE.contains(&Color::Black));
}

#[test]
fn get_peeks_without_assigning() {
    let mut scopes = ScopeColors::new();
    assert_eq!(scopes.get("ghost"), None);
    assert!(scopes.is_empty());
    scopes.color_for("real");
    assert_eq!(scopes.get("real"), Some(Color::Red));
    assert_eq!(scopes.len(), 1);
}

#[test]
fn render_is_bold_in_assigned_color() {
    let mut scopes = ScopeColors::new();
    assert_eq!(scopes.render("job"), "\x1b[31m\x1b[1mjob\x1b[22m\x1b[39m");
    // Same scope, same escapes
    assert_eq!(scopes.render("job"), "\x1b[31m\x1b[1mjob\x1b[22m\x1b[39m");
}
