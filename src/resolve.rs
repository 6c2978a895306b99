// Field resolution - Merge descriptor values, overrides and fallbacks per package
use crate::category::{classify, DEFAULT_CATEGORY};
use crate::registry::{FieldKind, Registry};
use serde::Serialize;

/// Explicitly supplied field values (command-line flags or environment)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub description: Option<String>,
    pub executable: Option<String>,
    pub display_name: Option<String>,
    pub generic_name: Option<String>,
    pub comment: Option<String>,
    pub categories: Option<String>,
    pub mime_types: Option<String>,
    pub custom_append: Option<String>,
    pub terminal: bool,
}

impl Overrides {
    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        let value = match kind {
            FieldKind::Description => &self.description,
            FieldKind::Executable => &self.executable,
            FieldKind::DisplayName => &self.display_name,
            FieldKind::GenericName => &self.generic_name,
            FieldKind::MimeTypes => &self.mime_types,
            FieldKind::Comment => &self.comment,
            FieldKind::Categories => &self.categories,
            FieldKind::CustomAppend => &self.custom_append,
        };
        value.as_deref()
    }
}

/// Final values for one package's desktop entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFieldSet {
    pub package: String,
    pub description: String,
    pub executable: String,
    pub display_name: String,
    pub generic_name: String,
    pub mime_types: String,
    pub comment: String,
    pub categories: String,
    pub custom_append: String,
    pub terminal: bool,
    /// Icon URL found in the descriptor, shared by every package of a run
    pub icon_url: Option<String>,
}

/// Headless and command-line-only split packages get no desktop entry
pub fn wants_desktop_entry(package: &str) -> bool {
    !package.contains("-nox") && !package.contains("-cli")
}

/// Upper-case the first character, leaving names shorter than two characters alone
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if s.chars().count() >= 2 => first.to_uppercase().chain(chars).collect(),
        _ => s.to_string(),
    }
}

/// Resolves every field of every package in a registry
pub struct Resolver<'a> {
    registry: &'a Registry,
    overrides: &'a Overrides,
    icon_url: Option<&'a str>,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry, overrides: &'a Overrides) -> Self {
        Self {
            registry,
            overrides,
            icon_url: None,
        }
    }

    pub fn with_icon_url(mut self, icon_url: Option<&'a str>) -> Self {
        self.icon_url = icon_url;
        self
    }

    /// Override first, then the descriptor. Empty values count as absent.
    fn explicit(&self, package: &str, kind: FieldKind) -> Option<String> {
        self.overrides
            .get(kind)
            .into_iter()
            .chain(self.registry.get(package, kind))
            .find(|value| !value.is_empty())
            .map(str::to_string)
    }

    pub fn resolve_package(&self, package: &str) -> ResolvedFieldSet {
        let field = |kind| self.explicit(package, kind);

        let description = field(FieldKind::Description).unwrap_or_else(|| package.to_string());
        let categories = field(FieldKind::Categories)
            .or_else(|| classify(&description).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        ResolvedFieldSet {
            package: package.to_string(),
            executable: field(FieldKind::Executable).unwrap_or_else(|| package.to_string()),
            display_name: field(FieldKind::DisplayName).unwrap_or_else(|| capitalize(package)),
            generic_name: field(FieldKind::GenericName).unwrap_or_default(),
            mime_types: field(FieldKind::MimeTypes).unwrap_or_default(),
            comment: field(FieldKind::Comment).unwrap_or_else(|| description.clone()),
            custom_append: field(FieldKind::CustomAppend).unwrap_or_default(),
            terminal: self.overrides.terminal,
            icon_url: self.icon_url.map(str::to_string),
            description,
            categories,
        }
    }

    /// Field sets for every package that gets a desktop entry, in registry order
    pub fn resolve(&self) -> Vec<ResolvedFieldSet> {
        self.registry
            .names()
            .iter()
            .filter(|package| wants_desktop_entry(package))
            .map(|package| self.resolve_package(package))
            .collect()
    }
}
