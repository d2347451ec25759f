use super::*;

#[test]
fn defaults_resolve_by_name_and_index() {
    let config = BorderConfig::new();
    assert_eq!(config.lookup("horizontal").unwrap(), '─');
    assert_eq!(config.lookup("1").unwrap(), '│');
    assert_eq!(config.lookup("top_left").unwrap(), '┌');
    assert_eq!(config.lookup("top-right").unwrap(), '┐');
    assert_eq!(config.lookup("BOTTOM_LEFT").unwrap(), '└');
    assert_eq!(config.lookup("5").unwrap(), '┘');
}

#[test]
fn unknown_keys_fail() {
    let config = BorderConfig::new();
    assert!(matches!(
        config.lookup("unknown-key"),
        Err(ViewError::ConfigKeyNotFound(key)) if key == "unknown-key"
    ));
    assert!(config.lookup("6").is_err());
    assert!(config.lookup("").is_err());
}

#[test]
fn single_override_wins_over_default() {
    let mut config = BorderConfig::new();
    config.override_glyph(BorderKey::TopLeft, '#');
    assert_eq!(config.lookup("top_left").unwrap(), '#');
    assert_eq!(config.lookup("top_right").unwrap(), '┐');
}

#[test]
fn replace_all_is_visible_for_every_key() {
    let mut config = BorderConfig::new();
    config.replace_all(BorderSet::ASCII);
    assert_eq!(config.resolved(), BorderSet::ASCII);
    for key in BorderKey::ALL {
        assert_eq!(config.lookup(key.name()).unwrap(), BorderSet::ASCII.get(key));
    }
}

#[test]
fn override_after_replace_touches_one_slot() {
    let mut config = BorderConfig::new();
    config.replace_all(BorderSet::from(['=', '!', 'a', 'b', 'c', 'd']));
    config.override_glyph(BorderKey::Vertical, ':');
    assert_eq!(
        config.resolved(),
        BorderSet::new('=', ':', 'a', 'b', 'c', 'd')
    );
}

#[test]
fn key_indices_follow_slot_order() {
    for (index, key) in BorderKey::ALL.into_iter().enumerate() {
        assert_eq!(BorderKey::parse(&index.to_string()), Some(key));
        assert_eq!(BorderKey::parse(key.name()), Some(key));
    }
}
