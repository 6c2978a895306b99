// Desktop entry writer - Render and save <pkgname>.desktop files
use crate::error::{GendeskError, Result};
use crate::resolve::ResolvedFieldSet;
use std::fs;
use std::path::{Path, PathBuf};

/// `;`-separated list with the trailing `;` desktop entries expect
fn list_value(value: &str) -> String {
    if value.ends_with(';') {
        value.to_string()
    } else {
        format!("{};", value)
    }
}

/// Contents of the desktop entry for one package
pub fn render(fields: &ResolvedFieldSet) -> String {
    let mut lines = vec![
        "[Desktop Entry]".to_string(),
        "Version=1.0".to_string(),
        "Type=Application".to_string(),
        format!("Name={}", fields.display_name),
    ];
    if !fields.generic_name.is_empty() {
        lines.push(format!("GenericName={}", fields.generic_name));
    }
    lines.extend([
        format!("Comment={}", fields.comment),
        format!("Exec={}", fields.executable),
        format!("Icon={}", fields.package),
        format!("Terminal={}", fields.terminal),
        "StartupNotify=false".to_string(),
        format!("Categories={}", list_value(&fields.categories)),
    ]);
    if !fields.mime_types.is_empty() {
        lines.push(format!("MimeType={}", list_value(&fields.mime_types)));
    }
    if !fields.custom_append.is_empty() {
        lines.push(fields.custom_append.trim_end().to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn desktop_path(output_dir: &Path, package: &str) -> PathBuf {
    output_dir.join(format!("{}.desktop", package))
}

/// Write the desktop entry, returning where it went
pub fn write_desktop_file(output_dir: &Path, fields: &ResolvedFieldSet) -> Result<PathBuf> {
    let path = desktop_path(output_dir, &fields.package);
    fs::write(&path, render(fields)).map_err(|source| GendeskError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::resolve::{Overrides, Resolver};

    fn fields_for(package: &str, overrides: Overrides) -> ResolvedFieldSet {
        let registry = Registry::single(package);
        Resolver::new(&registry, &overrides).resolve_package(package)
    }

    #[test]
    fn test_render_minimal() {
        let contents = render(&fields_for("foo", Overrides::default()));
        assert_eq!(
            contents,
            "[Desktop Entry]\n\
             Version=1.0\n\
             Type=Application\n\
             Name=Foo\n\
             Comment=foo\n\
             Exec=foo\n\
             Icon=foo\n\
             Terminal=false\n\
             StartupNotify=false\n\
             Categories=Application;\n"
        );
    }

    #[test]
    fn test_render_optional_lines() {
        let fields = fields_for(
            "viewer",
            Overrides {
                generic_name: Some("Image Viewer".to_string()),
                mime_types: Some("image/png;image/jpeg".to_string()),
                categories: Some("Graphics;Viewer;".to_string()),
                custom_append: Some("X-KDE-Protocols=file\n".to_string()),
                terminal: true,
                ..Default::default()
            },
        );
        let contents = render(&fields);
        assert!(contents.contains("GenericName=Image Viewer\n"));
        assert!(contents.contains("MimeType=image/png;image/jpeg;\n"));
        assert!(contents.contains("Categories=Graphics;Viewer;\n"));
        assert!(contents.contains("Terminal=true\n"));
        assert!(contents.ends_with("X-KDE-Protocols=file\n"));
    }

    #[test]
    fn test_write_desktop_file() {
        let dir = tempfile::tempdir().unwrap();
        let fields = fields_for("foo", Overrides::default());
        let path = write_desktop_file(dir.path(), &fields).unwrap();
        assert_eq!(path, dir.path().join("foo.desktop"));
        assert_eq!(fs::read_to_string(&path).unwrap(), render(&fields));
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fields = fields_for("foo", Overrides::default());
        let err = write_desktop_file(&dir.path().join("missing"), &fields).unwrap_err();
        assert!(matches!(err, GendeskError::Write { .. }));
    }
}
