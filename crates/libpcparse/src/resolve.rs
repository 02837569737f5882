//! Folding parsed line nodes into a [`Package`].
//!
//! Nodes are applied in document order with a single variable table that
//! grows as `key = value` lines are seen. Values are expanded at the moment
//! their line is applied, so a `${name}` can only refer to a variable
//! defined on an earlier line. Later redefinitions do not reach back.

use std::collections::BTreeMap;

use log::debug;

use crate::dependency::Dependency;
use crate::package::Package;
use crate::parser::Node;

/// Replace each `${name}` in `value` with its binding in `vars`.
///
/// Unbound names and unterminated `${` are kept as written. Substituted text
/// is not scanned again, so this never recurses.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use libpcparse::resolve::substitute;
///
/// let mut vars = BTreeMap::new();
/// vars.insert("prefix".to_string(), "/usr".to_string());
///
/// assert_eq!(substitute("${prefix}/lib", &vars), "/usr/lib");
/// assert_eq!(substitute("${missing}/lib", &vars), "${missing}/lib");
/// ```
pub fn substitute(value: &str, vars: &BTreeMap<String, String>) -> String {
    let mut result = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(open) = rest.find("${") {
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];

        let Some(close) = after_open.find('}') else {
            result.push_str(&rest[open..]);
            return result;
        };

        let name = &after_open[..close];
        match vars.get(name) {
            Some(bound) => result.push_str(bound),
            None => result.push_str(&rest[open..open + 2 + close + 1]),
        }
        rest = &after_open[close + 1..];
    }

    result.push_str(rest);
    result
}

/// Apply `nodes` in order and build the resulting package.
pub fn resolve(nodes: Vec<Node>) -> Package {
    let mut pkg = Package::default();

    for node in nodes {
        match node {
            Node::Comment(_) => {}
            Node::Variable { key, value } => {
                let value = substitute(&value, &pkg.vars);
                pkg.vars.insert(key, value);
            }
            Node::Property { key, value } => {
                let value = substitute(&value, &pkg.vars);
                if let Some(field) = property_field(&mut pkg, &key) {
                    *field = value;
                } else {
                    debug!("ignoring unknown property '{key}'");
                }
            }
            Node::DependencyList { key, dependencies } => {
                if let Some(list) = dependency_field(&mut pkg, &key) {
                    *list = dependencies;
                } else {
                    debug!("ignoring unknown dependency list '{key}'");
                }
            }
        }
    }

    pkg
}

fn property_field<'p>(pkg: &'p mut Package, key: &str) -> Option<&'p mut String> {
    let field = match key.to_uppercase().as_str() {
        "NAME" => &mut pkg.name,
        "VERSION" => &mut pkg.version,
        "DESCRIPTION" => &mut pkg.description,
        "URL" => &mut pkg.url,
        "CFLAGS" => &mut pkg.cflags,
        "CFLAGS.PRIVATE" => &mut pkg.cflags_private,
        "LIBS" => &mut pkg.libs,
        "LIBS.PRIVATE" => &mut pkg.libs_private,
        _ => return None,
    };
    Some(field)
}

fn dependency_field<'p>(pkg: &'p mut Package, key: &str) -> Option<&'p mut Vec<Dependency>> {
    let list = match key.to_uppercase().as_str() {
        "REQUIRES" => &mut pkg.requires,
        "REQUIRES.PRIVATE" => &mut pkg.requires_private,
        "REQUIRES.INTERNAL" => &mut pkg.requires_internal,
        "PROVIDES" => &mut pkg.provides,
        _ => return None,
    };
    Some(list)
}
