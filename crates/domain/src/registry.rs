// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Domain registry (§4.6, §4.7): the fixed built-in table plus
//! resolution of user-declared domains from the document's `domains:`
//! section, with the shadowing rule from §3 invariant 4.

use std::sync::Arc;

use indexmap::IndexMap;
use scm_core::{UserDomainKind, UserDomainSpec};

use crate::domain::{Domain, DomainError};
use crate::encoded_map_domain::EncodedMapDomain;
use crate::list_domain::ShellListDomain;
use crate::map_domain::ShellMapDomain;

/// Canonical built-in table (§4.6): `(key, path_depth, add_script,
/// [update_script,] remove_script)` tuples, exact scripts preserved
/// for bit-compatibility of rendered documents.
fn builtin_domains() -> Vec<Arc<dyn Domain>> {
    vec![
        Arc::new(EncodedMapDomain::dconf()),
        Arc::new(EncodedMapDomain::gsettings()),
        Arc::new(ShellListDomain::new(
            "apt",
            0,
            r#"sudo apt install -y "$value""#,
            r#"sudo apt remove -y "$value""#,
        )),
        Arc::new(ShellListDomain::new(
            "snap",
            0,
            r#"sudo snap install "$value""#,
            r#"sudo snap remove "$value""#,
        )),
        Arc::new(ShellListDomain::new(
            "snap-classic",
            0,
            r#"sudo snap install --classic "$value""#,
            r#"sudo snap remove "$value""#,
        )),
        Arc::new(ShellListDomain::new(
            "pip",
            0,
            r#"pip install --break-system-packages "$value""#,
            r#"pip uninstall --break-system-packages -y "$value""#,
        )),
        Arc::new(ShellListDomain::new("groups", 0, r#"sudo groupadd "$value""#, r#"sudo groupdel "$value""#)),
        Arc::new(ShellListDomain::new(
            "user-groups",
            1,
            r#"sudo usermod -aG "$value" "$key""#,
            r#"echo "Removing group from user not implemented"; exit 1;"#,
        )),
        Arc::new(ShellListDomain::new(
            "vscode-extensions",
            0,
            r#"code --install-extension "$value""#,
            r#"code --uninstall-extension "$value""#,
        )),
        Arc::new(ShellListDomain::new(
            "apt-repository",
            0,
            "sudo add-apt-repository -y \"$value\";\nsudo apt update;",
            "sudo add-apt-repository -r -y \"$value\";\nsudo apt update;",
        )),
        Arc::new(ShellListDomain::new(
            "file-lines",
            1,
            r#"grep -qxF "$value" "$key" || echo "$value" >> "$key""#,
            r#"sed -i "\|^$(printf '%s' "$value")$|d" "$key""#,
        )),
        Arc::new(ShellMapDomain::new(
            "git-config-global",
            1,
            r#"git config --global "$key" "$value""#,
            r#"git config --global "$key" "$value""#,
            r#"git config --global --unset "$key""#,
        )),
        Arc::new(ShellMapDomain::new(
            "symlinks",
            1,
            "rm -f $key;\nln -sf $value $key;",
            "rm -f $key;\nln -sf $value $key;",
            "rm -f $key",
        )),
        Arc::new(ShellMapDomain::new(
            "apt-source-list",
            1,
            "echo \"$value\" | sudo tee /etc/apt/sources.list.d/$key > /dev/null;\n\
             sudo chmod 644 /etc/apt/sources.list.d/$key;\nsudo apt update;",
            "echo \"$value\" | sudo tee /etc/apt/sources.list.d/$key > /dev/null;\n\
             sudo chmod 644 /etc/apt/sources.list.d/$key;\nsudo apt update;",
            "sudo rm -f /etc/apt/sources.list.d/$key;\nsudo apt update;",
        )),
        Arc::new(ShellMapDomain::new(
            "apt-keyring",
            1,
            "sudo install -m 0755 -d $(dirname \"$key\");\n\
             echo \"$value\" | sudo tee \"$key\" > /dev/null;\nsudo chmod 644 \"$key\";",
            "echo \"$value\" | sudo tee \"$key\" > /dev/null;\nsudo chmod 644 \"$key\";",
            "sudo rm -f \"$key\"",
        )),
    ]
}

fn build_user_domain(key: &str, spec: &UserDomainSpec) -> Result<Arc<dyn Domain>, DomainError> {
    match spec.kind {
        UserDomainKind::List => {
            let domain: Arc<dyn Domain> = Arc::new(ShellListDomain::new(
                key,
                spec.depth,
                spec.add.clone(),
                spec.remove.clone(),
            ));
            Ok(domain)
        }
        UserDomainKind::Map => {
            let update = spec.update.clone().ok_or_else(|| DomainError::MissingScript {
                domain_key: key.to_string(),
                field: "update",
            })?;
            let domain: Arc<dyn Domain> = Arc::new(ShellMapDomain::new(
                key,
                spec.depth,
                spec.add.clone(),
                update,
                spec.remove.clone(),
            ));
            Ok(domain)
        }
    }
}

/// The fixed set of built-in domains, plus resolution of user-declared
/// domains against a document's `domains:` table.
pub struct DomainRegistry {
    builtins: IndexMap<String, Arc<dyn Domain>>,
}

impl DomainRegistry {
    pub fn with_builtins() -> Self {
        let builtins = builtin_domains().into_iter().map(|domain| (domain.key().to_string(), domain)).collect();
        DomainRegistry { builtins }
    }

    pub fn is_builtin(&self, key: &str) -> bool {
        self.builtins.contains_key(key)
    }

    pub fn builtin_keys(&self) -> impl Iterator<Item = &str> {
        self.builtins.keys().map(String::as_str)
    }

    /// Resolve `key` against the built-in table, then against
    /// `user_domains`. A user declaration sharing a key with a
    /// built-in is a [`DomainError::ShadowsBuiltin`] error (§3
    /// invariant 4), even though the built-in is what gets used.
    pub fn resolve(
        &self,
        key: &str,
        user_domains: &IndexMap<String, UserDomainSpec>,
    ) -> Result<Arc<dyn Domain>, DomainError> {
        if let Some(builtin) = self.builtins.get(key) {
            if user_domains.contains_key(key) {
                return Err(DomainError::ShadowsBuiltin(key.to_string()));
            }
            return Ok(builtin.clone());
        }
        match user_domains.get(key) {
            Some(spec) => build_user_domain(key, spec),
            None => Err(DomainError::UnknownDomainKey(key.to_string())),
        }
    }
}

impl Default for DomainRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
