use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use gitargets_core::models::InteractionSet;
use gitargets_linker::config::LinkerConfig;
use gitargets_linker::{Linkage, PromoterSource, gi2targets};

///
/// Read `--config` if given, then apply command-line overrides.
///
pub fn load_config(matches: &ArgMatches) -> Result<LinkerConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => LinkerConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => LinkerConfig::default(),
    };

    if let Some(max_dist) = matches.get_one::<i64>("max-dist") {
        config.max_dist = *max_dist;
    }

    log::debug!("using config {:?}", config);
    Ok(config)
}

///
/// Read `--interactions` and `--promoters` and run the linker.
///
pub fn link_from_matches(matches: &ArgMatches, config: &LinkerConfig) -> Result<Linkage> {
    let interactions_path = matches
        .get_one::<String>("interactions")
        .context("--interactions is required")?;
    let promoters_path = matches
        .get_one::<String>("promoters")
        .context("--promoters is required")?;

    let interactions =
        InteractionSet::from_path(Path::new(interactions_path), config.interactions.lenient)
            .with_context(|| format!("Failed to load interactions: {}", interactions_path))?;

    let source = PromoterSource::from_config(Path::new(promoters_path), &config.promoters)
        .with_context(|| format!("Failed to load promoters: {}", promoters_path))?;

    let linkage = gi2targets(&interactions, source, config.max_dist)?;
    Ok(linkage)
}

///
/// Buffered writer to `path`, or to stdout when `path` is absent or `-`.
///
pub fn open_output(path: Option<&String>) -> Result<Box<dyn Write>> {
    match path.map(String::as_str) {
        None | Some("-") => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}
