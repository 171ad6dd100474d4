//! Simplify subcommand handler.

use std::io::Read;
use std::path::Path;

use tracing::info;

use pagelens_config::Config;
use pagelens_core::Simplifier;
use pagelens_dom::{parse_html, PageSnapshot, StaticRenderer};
use pagelens_protocols::{DomError, IdToBboxMap, SimplifiedPage, SimplifyOptions, ViewportInfo};

use crate::cli::{OutputFormat, SimplifyArgs};

/// Handle `pagelens simplify`.
pub(crate) fn handle_simplify(
    args: SimplifyArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = merge_options(&args, config);

    let page = if let Some(path) = &args.snapshot {
        info!(path = %path.display(), "Simplifying page snapshot");
        simplify_snapshot(&read_input(path)?, options, config)?
    } else if let Some(path) = &args.html {
        info!(path = %path.display(), "Simplifying HTML without layout");
        simplify_html(&read_input(path)?, options, config)?
    } else {
        return Err("one of --snapshot or --html is required".into());
    };

    match args.format {
        OutputFormat::Text => print!("{}", page.modified_html),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&page)?),
    }
    Ok(())
}

/// Config file options with command-line flags layered on top.
fn merge_options(args: &SimplifyArgs, config: &Config) -> SimplifyOptions {
    let mut options = config.simplifier.options();
    options.include_invisible |= args.include_invisible;
    options.include_scripts |= args.include_scripts;
    options
        .additional_attributes_to_keep
        .extend(args.keep.iter().cloned());
    options.attributes_to_remove.extend(args.remove.iter().cloned());
    options
}

fn read_input(path: &Path) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    std::fs::read_to_string(path)
}

/// Full pipeline over a capture with recorded layout.
fn simplify_snapshot(
    json: &str,
    options: SimplifyOptions,
    config: &Config,
) -> Result<SimplifiedPage, Box<dyn std::error::Error>> {
    let (mut document, render) = PageSnapshot::from_json(json)?.into_page()?;
    let simplifier =
        Simplifier::new(options).with_viewport_only(config.simplifier.viewport_only);
    Ok(simplifier.simplify_page(&mut document, &render))
}

/// Structural passes only: no geometry table, no viewport restriction.
fn simplify_html(
    source: &str,
    options: SimplifyOptions,
    config: &Config,
) -> Result<SimplifiedPage, Box<dyn std::error::Error>> {
    let mut document = parse_html(source);
    let body = document.body().ok_or(DomError::MissingBody)?;
    let render = StaticRenderer::new(&document, ViewportInfo::from(&config.viewport));

    let modified_html = Simplifier::new(options)
        .with_viewport_only(false)
        .run(&mut document, &render, body, None);
    Ok(SimplifiedPage {
        bboxes: IdToBboxMap::new(),
        modified_html,
    })
}
