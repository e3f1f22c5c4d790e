use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use gitargets_core::models::{RegionSet, TaggedRegionSet, write_annotated_bed};
use gitargets_linker::annotate_regions;

use crate::common::{link_from_matches, load_config, open_output};

pub fn run_annotate(matches: &ArgMatches) -> Result<()> {
    let query_path = matches
        .get_one::<String>("query")
        .context("--query is required")?;

    let queries = RegionSet::try_from(Path::new(query_path))
        .with_context(|| format!("Failed to load query regions: {}", query_path))?;

    let targets = match matches.get_one::<String>("targets") {
        Some(targets_path) => TaggedRegionSet::try_from(Path::new(targets_path))
            .with_context(|| format!("Failed to load tagged regions: {}", targets_path))?,
        None => {
            let config = load_config(matches)?;
            link_from_matches(matches, &config)?.regions
        }
    };

    let annotated = annotate_regions(&queries, &targets)?;

    let mut writer = open_output(matches.get_one::<String>("output"))?;
    write_annotated_bed(&annotated, &mut writer)?;
    writer.flush()?;

    Ok(())
}
