// Package registry - Package names in discovery order plus per-package fields
use crate::extract::between;
use std::collections::HashMap;

/// A desktop-entry field that can be set per package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Description,
    Executable,
    DisplayName,
    GenericName,
    MimeTypes,
    Comment,
    Categories,
    CustomAppend,
}

impl FieldKind {
    /// All kinds, in the order the descriptor scanner tests their keywords
    pub const ALL: [FieldKind; 8] = [
        FieldKind::Description,
        FieldKind::Executable,
        FieldKind::DisplayName,
        FieldKind::GenericName,
        FieldKind::MimeTypes,
        FieldKind::Comment,
        FieldKind::Categories,
        FieldKind::CustomAppend,
    ];

    /// Line prefix that declares this field in a PKGBUILD
    pub fn keyword(&self) -> &'static str {
        match self {
            FieldKind::Description => "pkgdesc",
            FieldKind::Executable => "_exec",
            FieldKind::DisplayName => "_name",
            FieldKind::GenericName => "_genericname",
            FieldKind::MimeTypes => "_mimetype",
            FieldKind::Comment => "_comment",
            FieldKind::Categories => "_categories",
            FieldKind::CustomAppend => "_custom",
        }
    }
}

/// Package names and the field values attributed to each of them.
///
/// Built during one descriptor scan (or from explicit overrides) and read-only
/// once resolution starts.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    names: Vec<String>,
    fields: HashMap<String, HashMap<FieldKind, String>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding a single package, as used in override mode
    pub fn single(name: &str) -> Self {
        let mut registry = Self::new();
        registry.declare(vec![name.to_string()]);
        registry
    }

    /// Replace the package list, keeping the first occurrence of each name
    pub fn declare(&mut self, names: Vec<String>) {
        self.names.clear();
        for name in names {
            if !name.is_empty() && !self.names.contains(&name) {
                self.names.push(name);
            }
        }
    }

    /// Attribute a field value to a package; a later value replaces an earlier one
    pub fn set(&mut self, package: &str, kind: FieldKind, value: String) {
        self.fields
            .entry(package.to_string())
            .or_default()
            .insert(kind, value);
    }

    pub fn get(&self, package: &str, kind: FieldKind) -> Option<&str> {
        self.fields
            .get(package)
            .and_then(|fields| fields.get(&kind))
            .map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Package names named by a `pkgname` value.
///
/// A parenthesized group, if present, is the list source. A source containing a
/// space is split into several names with quote characters removed.
pub fn package_list(declared: &str) -> Vec<String> {
    let has_group = matches!(
        (declared.find('('), declared.rfind(')')),
        (Some(open), Some(close)) if open < close
    );
    let center = if has_group {
        between(declared, "(", ")")
    } else {
        declared
    };
    let unquoted = center.replace(['"', '\''], "");
    if center.contains(' ') {
        unquoted
            .split(' ')
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    } else if unquoted.is_empty() {
        Vec::new()
    } else {
        vec![unquoted]
    }
}
