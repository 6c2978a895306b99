// Command-line configuration - flags, environment fallbacks and defaults
use crate::icon::{DEFAULT_ICON, ICON_SEARCH_URL};
use crate::resolve::Overrides;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Every field flag may also be given as an environment variable of the same
/// name (as exported by makepkg); the flag wins when both are set.
#[derive(Parser, Debug)]
#[command(name = "gendesk")]
#[command(about = "Generate .desktop files and icons from a PKGBUILD", long_about = None)]
#[command(version)]
#[command(after_help = "\
Notes:
  * _exec in the PKGBUILD can be used to specify a different executable, e.g. _exec=('appname-gui')
  * _name, _genericname, _comment, _mimetype, _categories and _custom work the same way
  * Split packages are supported; -nox and -cli packages are skipped
  * Categories are guessed from keywords in the package description
  * Without a .png next to the PKGBUILD, an icon is downloaded from the icon search URL")]
pub struct Cli {
    /// PKGBUILD to read
    #[arg(default_value = "../PKGBUILD")]
    pub file: PathBuf,

    /// Don't download anything
    #[arg(short = 'n', long = "no-download")]
    pub no_download: bool,

    /// Don't use colors
    #[arg(long = "nocolor")]
    pub no_color: bool,

    /// Don't output anything on stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite existing .desktop files
    #[arg(short, long)]
    pub force: bool,

    /// Directory to write .desktop and .png files to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Where to look for icons, %s is replaced by the capitalized package name
    #[arg(long, default_value = ICON_SEARCH_URL)]
    pub icon_search_url: String,

    /// Icon to use when none can be downloaded
    #[arg(long, default_value = DEFAULT_ICON)]
    pub default_icon: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Package name; skips reading the PKGBUILD
    #[arg(long, env = "pkgname")]
    pub pkgname: Option<String>,

    /// Package description
    #[arg(long, env = "pkgdesc")]
    pub pkgdesc: Option<String>,

    /// Command to run
    #[arg(long, env = "exec")]
    pub exec: Option<String>,

    /// Display name
    #[arg(long, env = "name")]
    pub name: Option<String>,

    /// Generic name, like "Web Browser"
    #[arg(long, env = "genericname")]
    pub genericname: Option<String>,

    /// Tooltip comment, defaults to the description
    #[arg(long, env = "comment")]
    pub comment: Option<String>,

    /// Run in a terminal
    #[arg(long, env = "terminal", action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    pub terminal: bool,

    /// Categories, separated by ";"
    #[arg(long, env = "categories")]
    pub categories: Option<String>,

    /// Mime types, separated by ";"
    #[arg(long, env = "mimetypes")]
    pub mimetypes: Option<String>,

    /// Text appended to the desktop entry as-is
    #[arg(long, env = "custom")]
    pub custom: Option<String>,
}

impl Cli {
    /// Package name given explicitly, if any
    pub fn explicit_package(&self) -> Option<&str> {
        self.pkgname.as_deref().filter(|name| !name.is_empty())
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            description: self.pkgdesc.clone(),
            executable: self.exec.clone(),
            display_name: self.name.clone(),
            generic_name: self.genericname.clone(),
            comment: self.comment.clone(),
            categories: self.categories.clone(),
            mime_types: self.mimetypes.clone(),
            custom_append: self.custom.clone(),
            terminal: self.terminal,
        }
    }
}
