use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::common::{link_from_matches, load_config, open_output};

pub fn run_link(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let linkage = link_from_matches(matches, &config)?;

    let mut writer = open_output(matches.get_one::<String>("output"))?;
    linkage.regions.write_bed(&mut writer)?;
    writer.flush()?;

    if let Some(stats_path) = matches.get_one::<String>("stats") {
        let file = File::create(stats_path)
            .with_context(|| format!("Failed to create stats file: {}", stats_path))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &linkage.stats)
            .context("Failed to write stats")?;
    }

    Ok(())
}
