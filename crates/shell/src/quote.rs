// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! POSIX-compatible argv quoting for command display (§4.9: "both
//! variants print the command verbatim before running it;
//! `run_command` quotes argv for display using a POSIX-compatible
//! escaping").

/// Characters that are safe to leave unquoted in a POSIX shell.
fn is_plain(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '=' | '@' | '%' | '+' | ',')
}

/// Quote a single argument for display, using single quotes and the
/// `'\''` idiom to embed a literal single quote. An argument that is
/// itself already a complete double-quoted string literal (as produced
/// by the dconf/gsettings value grammar) is shown with that pair of
/// quotes swapped for single quotes rather than wrapped a second time.
pub fn quote_one(arg: &str) -> String {
    if let Some(inner) = unwrap_double_quoted(arg) {
        return format!("'{inner}'");
    }
    if !arg.is_empty() && arg.chars().all(is_plain) {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}

/// Strips a single matching outer pair of double quotes, provided the
/// remaining content has no double quotes of its own to disambiguate.
fn unwrap_double_quoted(arg: &str) -> Option<&str> {
    let inner = arg.strip_prefix('"')?.strip_suffix('"')?;
    (!inner.contains('"')).then_some(inner)
}

/// Quote and join an argv vector the way a shell would echo it back.
pub fn quote_argv(argv: &[String]) -> String {
    argv.iter().map(|arg| quote_one(arg)).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "quote_tests.rs"]
mod tests;
