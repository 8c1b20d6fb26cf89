// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn add_binds_value_and_new_value_to_the_new_value() {
    let path = vec!["htop".to_string()];
    let vars = Interpolation::for_add(&path, "htop");
    assert_eq!(interpolate("sudo apt install -y $value", &vars), "sudo apt install -y htop");
    assert_eq!(interpolate("echo $new_value", &vars), "echo htop");
}

#[test]
fn remove_binds_value_and_old_value_to_the_old_value() {
    let path: Vec<String> = vec![];
    let vars = Interpolation::for_remove(&path, "removed");
    assert_eq!(interpolate("gsettings reset $key1 $key2", &vars), "gsettings reset $key1 $key2");
    assert_eq!(interpolate("echo $value $old_value", &vars), "echo removed removed");
}

#[test]
fn update_interpolates_old_and_new_value_spec_scenario_5() {
    let path = vec!["greeting".to_string()];
    let vars = Interpolation::for_update(&path, "a", "b");
    assert_eq!(interpolate("echo $key:$old_value->$new_value", &vars), "echo greeting:a->b");
}

#[test]
fn key_aliases_key1_when_path_is_non_empty() {
    let path = vec!["a".to_string(), "b".to_string()];
    let vars = Interpolation::for_add(&path, "v");
    assert_eq!(interpolate("$key $key1 $key2", &vars), "a a b");
}

#[test]
fn key_and_keyn_are_undefined_no_ops_when_path_is_empty() {
    let path: Vec<String> = vec![];
    let vars = Interpolation::for_add(&path, "htop");
    assert_eq!(interpolate("$key $key1 install $value", &vars), "$key $key1 install htop");
}

#[test]
fn longer_keyn_names_do_not_get_shadowed_by_shorter_prefixes() {
    let path: Vec<String> = (1..=10).map(|i| format!("k{i}")).collect();
    let vars = Interpolation::for_add(&path, "v");
    assert_eq!(interpolate("$key10 $key1", &vars), "k10 k1");
}

#[test]
fn replacement_output_is_not_rescanned() {
    // The substituted value itself contains `$value`; it must survive
    // untouched because interpolation is a single left-to-right pass.
    let path: Vec<String> = vec![];
    let vars = Interpolation::for_add(&path, "literal $value text");
    assert_eq!(interpolate("$value", &vars), "literal $value text");
}

#[test]
fn gsettings_add_example_from_spec_scenario_2() {
    let path = vec!["org.schema".to_string(), "key".to_string()];
    let vars = Interpolation::for_add(&path, "value");
    assert_eq!(
        interpolate("gsettings set $key1 $key2 '$value'", &vars),
        "gsettings set org.schema key 'value'"
    );
}

#[parameterized(
    symlink_add = {"rm -f $key; ln -sf $value $key;", &["~/.bashrc".to_string()], "/dotfiles/bashrc", "rm -f ~/.bashrc; ln -sf /dotfiles/bashrc ~/.bashrc;"},
    git_config = {"git config --global \"$key\" \"$value\"", &["user.name".to_string()], "Ada", "git config --global \"user.name\" \"Ada\""},
)]
fn builtin_style_templates_interpolate_correctly(template: &str, path: &[String], value: &str, expected: &str) {
    let vars = Interpolation::for_add(path, value);
    assert_eq!(interpolate(template, &vars), expected);
}
