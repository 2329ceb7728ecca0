//! Integration tests for the keymap system

use super::*;
use crate::editable::{OperatorKind, Selector};

#[test]
fn test_embedded_yaml_parses() {
    let bindings = parse_keymap_yaml(get_default_keymap_yaml())
        .expect("Embedded keymap.yaml should parse successfully");

    assert!(!bindings.is_empty(), "Should have bindings");
    assert!(bindings
        .iter()
        .any(|b| b.action == KeyAction::Operate(OperatorKind::InsertBefore)));
    assert!(bindings.iter().any(|b| b.action == KeyAction::CommandMode));
}

#[test]
fn test_embedded_yaml_matches_hardcoded_defaults() {
    let from_yaml = Keymap::with_bindings(parse_keymap_yaml(get_default_keymap_yaml()).unwrap());
    for binding in default_bindings() {
        assert_eq!(
            from_yaml.lookup(binding.key),
            Some(binding.action),
            "key {:?}",
            binding.key
        );
    }
}

#[test]
fn test_keymap_lookup_movement() {
    let keymap = Keymap::with_bindings(default_bindings());
    assert_eq!(keymap.lookup('j'), Some(KeyAction::Select(Selector::NextLine)));
    assert_eq!(keymap.lookup('k'), Some(KeyAction::Select(Selector::PreviousLine)));
    assert_eq!(keymap.lookup('h'), Some(KeyAction::Select(Selector::PreviousChar)));
    assert_eq!(keymap.lookup('l'), Some(KeyAction::Select(Selector::NextChar)));
    assert_eq!(keymap.lookup('z'), None);
}

#[test]
fn test_binding_for() {
    let keymap = Keymap::with_bindings(default_bindings());
    let binding = keymap.binding_for(KeyAction::CommandMode).unwrap();
    assert_eq!(binding.key, ':');
}

#[test]
fn test_parse_action_names() {
    assert_eq!(
        "insert_in_place".parse::<KeyAction>(),
        Ok(KeyAction::Operate(OperatorKind::Replace))
    );
    assert_eq!(
        "move_to_next_char".parse::<KeyAction>(),
        Ok(KeyAction::Select(Selector::NextChar))
    );
    assert_eq!("unbound".parse::<KeyAction>(), Ok(KeyAction::Unbound));
    assert_eq!("frobnicate".parse::<KeyAction>(), Err(()));
}

#[test]
fn test_parse_invalid_action() {
    let yaml = "bindings:\n  - key: x\n    action: frobnicate\n";
    assert_eq!(
        parse_keymap_yaml(yaml),
        Err(KeymapError::InvalidAction("frobnicate".to_string()))
    );
}

#[test]
fn test_parse_invalid_key() {
    assert_eq!(parse_key("ctrl+x"), Err(KeymapError::InvalidKey("ctrl+x".to_string())));
    assert_eq!(parse_key("space"), Ok(' '));
    assert_eq!(parse_key("x"), Ok('x'));
}

#[test]
fn test_merge_overrides_and_unbinds() {
    let user = vec![
        Keybinding::new('j', KeyAction::Select(Selector::NextChar)),
        Keybinding::new('c', KeyAction::Unbound),
        Keybinding::new('s', KeyAction::Select(Selector::Everything)),
    ];
    let keymap = Keymap::with_bindings(merge_bindings(default_bindings(), user));

    assert_eq!(keymap.lookup('j'), Some(KeyAction::Select(Selector::NextChar)));
    assert_eq!(keymap.lookup('c'), None);
    assert_eq!(keymap.lookup('s'), Some(KeyAction::Select(Selector::Everything)));
    assert_eq!(keymap.lookup('i'), Some(KeyAction::Operate(OperatorKind::InsertBefore)));
}

#[test]
fn test_action_names_round_trip() {
    for binding in default_bindings() {
        assert_eq!(binding.action.name().parse::<KeyAction>(), Ok(binding.action));
    }
}
