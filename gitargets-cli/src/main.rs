mod annotate;
mod common;
mod link;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "gitargets";
    pub const BIN_NAME: &str = "gitargets";
    pub const AUTHOR: &str = "gitargets contributors";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author(consts::AUTHOR)
        .about("Link distal regulatory regions and peaks to their target genes through chromatin interactions.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase logging verbosity (-v info, -vv debug)"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_parser(value_parser!(usize))
                .global(true)
                .help("Number of worker threads (default: all cores)"),
        )
        .subcommand(link::cli::create_link_cli())
        .subcommand(annotate::cli::create_annotate_cli())
}

fn init(matches: &ArgMatches) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(match matches.get_count("verbose") {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    if let Some(threads) = matches.get_one::<usize>("threads") {
        rayon::ThreadPoolBuilder::new()
            .num_threads(*threads)
            .build_global()
            .context("Failed to configure the thread pool")?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // LINK
        //
        Some((link::cli::LINK_CMD, matches)) => {
            init(matches)?;
            link::handlers::run_link(matches)?;
        }

        //
        // ANNOTATE
        //
        Some((annotate::cli::ANNOTATE_CMD, matches)) => {
            init(matches)?;
            annotate::handlers::run_annotate(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_parser_metadata() {
        let parser = build_parser();
        assert_eq!(parser.get_author(), Some("gitargets contributors"));
        assert_eq!(parser.get_name(), "gitargets");
    }

    #[rstest]
    fn test_link_args() {
        let matches = build_parser()
            .try_get_matches_from([
                "gitargets",
                "link",
                "--interactions",
                "ints.tsv",
                "--promoters",
                "proms.bed",
                "--max-dist",
                "-100",
                "-vv",
            ])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, link::cli::LINK_CMD);
        assert_eq!(sub.get_one::<i64>("max-dist"), Some(&-100));
        assert_eq!(sub.get_count("verbose"), 2);
    }

    #[rstest]
    fn test_annotate_requires_a_target_source() {
        let result = build_parser().try_get_matches_from([
            "gitargets",
            "annotate",
            "--query",
            "peaks.bed",
        ]);
        assert!(result.is_err());

        let result = build_parser().try_get_matches_from([
            "gitargets",
            "annotate",
            "--query",
            "peaks.bed",
            "--interactions",
            "ints.tsv",
        ]);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_annotate_targets_conflict_with_interactions() {
        let result = build_parser().try_get_matches_from([
            "gitargets",
            "annotate",
            "--query",
            "peaks.bed",
            "--targets",
            "targets.bed",
            "--interactions",
            "ints.tsv",
            "--promoters",
            "proms.bed",
        ]);
        assert!(result.is_err());
    }
}
