//! List command implementation

use crate::cli::Cli;
use crate::error::convert_config_error;
use crate::error::convert_traversal_error;
use crate::output::ConsoleDecorator;
use crate::output::HumanReporter;
use anyhow::Result;
use anyhow::bail;
use deepjar_core::Decorator;
use deepjar_core::TraversalConfig;
use deepjar_core::TreeWriter;
use deepjar_core::list_archive_path;
use std::io::Write;
use tracing::debug;

/// Builds the traversal configuration from command-line flags.
pub fn build_config(cli: &Cli) -> Result<TraversalConfig> {
    let mut config = TraversalConfig {
        show_manifest: cli.manifest,
        show_line_numbers: cli.line_numbers,
        show_size: cli.size,
        show_hash: cli.md5,
        max_member_size: cli.max_size,
        max_depth: cli.max_depth,
        ..Default::default()
    }
    .with_extensions(cli.extensions.iter().map(String::as_str));

    if cli.xml {
        config = config.with_xml();
    }
    if let Some(pattern) = &cli.filter {
        config = config.with_filter(pattern).map_err(convert_config_error)?;
    }
    config.validate().map_err(convert_config_error)?;

    Ok(config)
}

/// Lists every archive in turn; one failing archive does not stop the rest.
pub fn execute(cli: &Cli, reporter: &HumanReporter) -> Result<()> {
    let config = build_config(cli)?;
    let mut tree = TreeWriter::with_decorator(std::io::stdout().lock(), ConsoleDecorator);
    let mut failed = 0usize;

    for archive in &cli.archives {
        if !archive.exists() {
            reporter.warning(&format!(
                "file {} does not exist, skipping",
                archive.display()
            ));
            continue;
        }

        match list_archive_path(archive, &config, &mut tree) {
            Ok(report) => {
                debug!(
                    archive = %archive.display(),
                    entries = report.entries,
                    nested = report.archives_descended,
                    rendered = report.files_rendered,
                    excluded = report.files_excluded,
                    too_large = report.skipped_too_large,
                    too_deep = report.skipped_too_deep,
                    depth = report.max_depth_reached,
                    bytes = report.bytes_buffered,
                    elapsed = ?report.duration,
                    "archive listed"
                );
            }
            Err(err) => {
                failed += 1;
                // Keep the partial tree ahead of the error message.
                flush_partial(&mut tree);
                reporter.error(&convert_traversal_error(err, archive));
            }
        }
    }

    if failed > 0 {
        bail!(
            "{failed} of {} archives could not be listed",
            cli.archives.len()
        );
    }
    Ok(())
}

/// Flushes the tree written before a failure; returns `false` if stdout is gone.
fn flush_partial<W: Write, D: Decorator>(tree: &mut TreeWriter<W, D>) -> bool {
    match tree.flush() {
        Ok(()) => true,
        Err(err) => {
            debug!(error = %err, "could not flush partial tree");
            false
        }
    }
}
