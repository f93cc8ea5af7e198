use std::collections::HashSet;

use pc_remote::catalog::{find_quick_control, find_template, list_templates, quick_controls};
use pc_remote::db::Method;

use test_utils::create_memory_store;

#[test]
fn test_templates_are_stable() {
    let first = list_templates();
    let second = list_templates();
    assert_eq!(first, second);
    assert_eq!(first.len(), 6);
}

#[test]
fn test_template_contents() {
    let notepad = find_template("notepad").unwrap();
    assert_eq!(notepad.endpoint, "/api/app/launch");
    assert_eq!(notepad.method, Method::Post);
    assert_eq!(
        notepad.parameters.get("path").map(String::as_str),
        Some(r"C:\Windows\System32\notepad.exe")
    );

    let shutdown = find_template("shutdown_force").unwrap();
    assert!(shutdown.is_dangerous);
    assert_eq!(shutdown.parameters.get("force").map(String::as_str), Some("true"));

    assert!(find_template("missing").is_none());
}

#[test]
fn test_templates_are_valid_profiles() {
    for template in list_templates() {
        assert!(template.validate().is_ok(), "{} should be valid", template.id);
    }
}

#[test]
fn test_template_copy_gets_new_id() {
    let store = create_memory_store();
    let template = find_template("volume_up_5").unwrap();

    let saved = store.add(template.as_new_copy()).unwrap();
    assert_ne!(saved.id, template.id);
    assert!(!saved.id.is_empty());
    assert_eq!(saved.name, template.name);
    assert_eq!(saved.parameters, template.parameters);

    // The catalog itself is unchanged
    assert_eq!(find_template("volume_up_5").unwrap().id, "volume_up_5");
}

#[test]
fn test_quick_controls() {
    let keys: HashSet<_> = quick_controls().iter().map(|c| c.key).collect();
    assert_eq!(keys.len(), quick_controls().len());

    let mute = find_quick_control("mute").unwrap();
    assert_eq!(mute.endpoint, "/api/volume/mute");
    assert_eq!(mute.group, "volume");

    let profile = mute.to_profile();
    assert_eq!(profile.method, Method::Get);
    assert!(profile.parameters.is_empty());
    assert!(profile.id.is_empty());
    assert!(profile.validate().is_ok());

    assert!(find_quick_control("self_destruct").is_none());
}
