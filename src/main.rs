use anyhow::Result;
use clap::Parser;
use std::fs;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

mod category;
mod cli_output;
mod config;
mod descriptor;
mod desktop;
mod error;
mod extract;
mod icon;
mod icon_url;
mod registry;
mod resolve;

use cli_output::{OutputMode, OutputWriter, StepStatus};
use config::Cli;
use descriptor::DescriptorScan;
use desktop::{desktop_path, write_desktop_file};
use error::GendeskError;
use icon::IconFetcher;
use registry::Registry;
use resolve::{ResolvedFieldSet, Resolver};

const DESKTOP_STAGE: &str = "Generating desktop file...";
const DOWNLOAD_STAGE: &str = "Downloading icon...";
const DEFAULT_ICON_STAGE: &str = "Using default icon instead...";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let output = OutputWriter::new(OutputMode::detect(cli.quiet, cli.no_color));
    if let Err(e) = run(&cli, &output).await {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}

/// Packages and icon URL, from the explicit package name or the PKGBUILD.
/// Fails when no package name is found at all.
fn load(cli: &Cli) -> Result<DescriptorScan, GendeskError> {
    if let Some(package) = cli.explicit_package() {
        debug!("Using explicit package {}, not reading {}", package, cli.file.display());
        return Ok(DescriptorScan {
            registry: Registry::single(package),
            icon_url: None,
        });
    }

    let text = fs::read_to_string(&cli.file).map_err(|source| GendeskError::DescriptorRead {
        path: cli.file.clone(),
        source,
    })?;
    let scan = descriptor::scan(&text);
    if scan.registry.is_empty() {
        return Err(GendeskError::NoPackageName);
    }
    Ok(scan)
}

async fn run(cli: &Cli, output: &OutputWriter) -> Result<()> {
    let scan = load(cli)?;

    let overrides = cli.overrides();
    let resolved = Resolver::new(&scan.registry, &overrides)
        .with_icon_url(scan.icon_url.as_deref())
        .resolve();
    debug!(
        "{} of {} packages get a desktop entry",
        resolved.len(),
        scan.registry.names().len()
    );

    let fetcher = IconFetcher::new(
        cli.icon_search_url.clone(),
        cli.default_icon.clone(),
        cli.output_dir.clone(),
    );
    for fields in &resolved {
        generate(cli, output, &fetcher, fields).await?;
    }

    info!("Processed {} desktop file(s)", resolved.len());
    Ok(())
}

/// Write one package's desktop file, then make sure it has an icon
async fn generate(
    cli: &Cli,
    output: &OutputWriter,
    fetcher: &IconFetcher,
    fields: &ResolvedFieldSet,
) -> Result<()> {
    let package = fields.package.as_str();

    output.begin(package, DESKTOP_STAGE);
    let path = desktop_path(&cli.output_dir, package);
    if path.exists() && !cli.force {
        output.end(package, DESKTOP_STAGE, StepStatus::Skipped);
        output.warning(&format!(
            "{} already exists, use --force to overwrite",
            path.display()
        ));
    } else {
        match write_desktop_file(&cli.output_dir, fields) {
            Ok(path) => {
                output.end(package, DESKTOP_STAGE, StepStatus::Ok);
                debug!("Wrote {}", path.display());
            }
            Err(e) => {
                output.end(package, DESKTOP_STAGE, StepStatus::Failed);
                return Err(e.into());
            }
        }
    }

    if cli.no_download || !fetcher.needs_icon(fields.icon_url.as_deref()) {
        return Ok(());
    }

    output.begin(package, DOWNLOAD_STAGE);
    match fetcher.download(package).await {
        Ok(path) => {
            output.end(package, DOWNLOAD_STAGE, StepStatus::Downloaded);
            debug!("Wrote {}", path.display());
        }
        Err(e) => {
            output.end(package, DOWNLOAD_STAGE, StepStatus::Missing);
            debug!("{}", e);

            output.begin(package, DEFAULT_ICON_STAGE);
            match fetcher.use_default(package) {
                Ok(path) => {
                    output.end(package, DEFAULT_ICON_STAGE, StepStatus::Fallback);
                    debug!("Wrote {}", path.display());
                }
                Err(e) => {
                    output.end(package, DEFAULT_ICON_STAGE, StepStatus::Failed);
                    output.warning(&e.to_string());
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_for(file: &std::path::Path) -> Cli {
        Cli::try_parse_from([std::ffi::OsStr::new("gendesk"), file.as_os_str()]).unwrap()
    }

    #[test]
    fn test_empty_split_list_has_no_packages() {
        let dir = tempfile::tempdir().unwrap();
        let pkgbuild = dir.path().join("PKGBUILD");
        fs::write(&pkgbuild, "pkgname=()\npkgdesc='nothing'\n").unwrap();

        assert!(descriptor::scan("pkgname=()\n").registry.is_empty());
        let err = load(&cli_for(&pkgbuild)).unwrap_err();
        assert!(matches!(err, GendeskError::NoPackageName));
    }

    #[test]
    fn test_load_reads_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let pkgbuild = dir.path().join("PKGBUILD");
        fs::write(&pkgbuild, "pkgname=(one two)\n").unwrap();

        let scan = load(&cli_for(&pkgbuild)).unwrap();
        assert_eq!(scan.registry.names(), ["one", "two"]);
    }

    #[test]
    fn test_missing_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&cli_for(&dir.path().join("PKGBUILD"))).unwrap_err();
        assert!(matches!(err, GendeskError::DescriptorRead { .. }));
    }
}
