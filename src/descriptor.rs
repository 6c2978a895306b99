// PKGBUILD scanner - One forward pass over the descriptor text
use crate::extract::{between, between_quotes_or_after_equals, starts_with};
use crate::icon_url::{has_icon_url, icon_url};
use crate::registry::{package_list, FieldKind, Registry};
use tracing::debug;

/// Everything mined from one descriptor
#[derive(Debug, Clone, Default)]
pub struct DescriptorScan {
    pub registry: Registry,
    pub icon_url: Option<String>,
}

/// Scanner state threaded through the line loop
#[derive(Debug, Default)]
struct ScanState {
    /// Package that field lines are attributed to
    current: Option<String>,
    scan: DescriptorScan,
}

impl ScanState {
    fn line(&mut self, line: &str) {
        if starts_with(line, "pkgname") {
            let names = package_list(&between_quotes_or_after_equals(line));
            self.current = names.first().cloned();
            debug!("Packages declared: {:?}", names);
            self.scan.registry.declare(names);
        } else if starts_with(line, "package_") {
            let name = between(line, "_", "(").trim();
            self.current = (!name.is_empty()).then(|| name.to_string());
            debug!("Switched to package {:?}", self.current);
        } else if let Some(kind) = FieldKind::ALL
            .into_iter()
            .find(|kind| starts_with(line, kind.keyword()))
        {
            let value = between_quotes_or_after_equals(line);
            match &self.current {
                Some(package) => self.scan.registry.set(package, kind, value),
                None => debug!("Ignoring {} before any pkgname", kind.keyword()),
            }
        } else if has_icon_url(line) && self.scan.icon_url.is_none() {
            self.scan.icon_url = icon_url(line, self.current.as_deref());
            if self.scan.icon_url.is_none() {
                debug!("Discarded icon URL with unresolved placeholders: {}", line.trim());
            }
        }
    }
}

/// Scan descriptor text line by line, attributing each field line to the package
/// most recently named by `pkgname` or a `package_<name>(` function.
pub fn scan(text: &str) -> DescriptorScan {
    let mut state = ScanState::default();
    for line in text.lines() {
        state.line(line);
    }
    state.scan
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPLIT_PKGBUILD: &str = r#"
# Maintainer: Someone <someone@example.com>
pkgbase=myapp
pkgname=(myapp myapp-cli myapp-docs)
pkgver=1.0
pkgdesc="A sound editor"
source=("http://example.com/$pkgname.png")

package_myapp() {
  _exec = 'myapp-gui'
  _name=MyApp
  _genericname="Sound Editor"
  _mimetype="audio/x-wav;audio/x-flac"
  _comment='Edit sounds'
  _categories="Application;AudioVideo"
  _custom="X-Foo=bar"
}

package_myapp-docs() {
  pkgdesc="Documentation for myapp"
}
"#;

    #[test]
    fn test_single_package() {
        let scan = scan("pkgname=\"foo\"\n");
        assert_eq!(scan.registry.names(), ["foo"]);
        assert_eq!(scan.registry.get("foo", FieldKind::Description), None);
        assert_eq!(scan.icon_url, None);
    }

    #[test]
    fn test_split_package_order() {
        let scan = scan("pkgname=(one two three)\n");
        assert_eq!(scan.registry.names(), ["one", "two", "three"]);
    }

    #[test]
    fn test_fields_follow_current_package() {
        let scan = scan(SPLIT_PKGBUILD);
        let registry = &scan.registry;
        assert_eq!(registry.names(), ["myapp", "myapp-cli", "myapp-docs"]);
        assert_eq!(registry.get("myapp", FieldKind::Executable), Some("myapp-gui"));
        assert_eq!(registry.get("myapp", FieldKind::DisplayName), Some("MyApp"));
        assert_eq!(registry.get("myapp", FieldKind::GenericName), Some("Sound Editor"));
        assert_eq!(
            registry.get("myapp", FieldKind::MimeTypes),
            Some("audio/x-wav;audio/x-flac")
        );
        assert_eq!(registry.get("myapp", FieldKind::Comment), Some("Edit sounds"));
        assert_eq!(
            registry.get("myapp", FieldKind::Categories),
            Some("Application;AudioVideo")
        );
        assert_eq!(registry.get("myapp", FieldKind::CustomAppend), Some("X-Foo=bar"));
        assert_eq!(registry.get("myapp", FieldKind::Description), Some("A sound editor"));
        assert_eq!(
            registry.get("myapp-docs", FieldKind::Description),
            Some("Documentation for myapp")
        );
        assert_eq!(registry.get("myapp-docs", FieldKind::Executable), None);
        assert_eq!(registry.get("myapp-cli", FieldKind::Executable), None);
    }

    #[test]
    fn test_icon_url_uses_package_in_scope() {
        let scan = scan(SPLIT_PKGBUILD);
        assert_eq!(scan.icon_url.as_deref(), Some("http://example.com/myapp.png"));
    }

    #[test]
    fn test_first_resolvable_icon_url_wins() {
        let text = "pkgname=foo\n\
                    source=(http://example.com/$pkgver.png)\n\
                    source+=(http://example.com/a.png)\n\
                    source+=(http://example.com/b.png)\n";
        assert_eq!(
            scan(text).icon_url.as_deref(),
            Some("http://example.com/a.png")
        );
    }

    #[test]
    fn test_fields_before_pkgname_are_dropped() {
        let scan = scan("pkgdesc='orphan'\npkgname=foo\n");
        assert_eq!(scan.registry.get("foo", FieldKind::Description), None);
    }

    #[test]
    fn test_malformed_input_is_total() {
        let scan = scan("pkgname=\npackage_() {\n_exec\n((('\n");
        assert!(scan.registry.is_empty());
        assert_eq!(scan.icon_url, None);
    }
}
