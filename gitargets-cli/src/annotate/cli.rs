use clap::{ArgGroup, Command, arg};

use crate::link::cli::max_dist_arg;

pub const ANNOTATE_CMD: &str = "annotate";

pub fn create_annotate_cli() -> Command {
    Command::new(ANNOTATE_CMD)
        .about("Annotate query regions (e.g. peaks) with the target genes of the distal regions they overlap.")
        .arg_required_else_help(true)
        .arg(
            arg!(--query <QUERY>)
                .required(true)
                .help("Query BED file (plain or .gz)"),
        )
        .arg(
            arg!(--targets <TARGETS>)
                .required(false)
                .conflicts_with_all(["interactions", "promoters"])
                .help("Tagged distal regions, as written by `link`"),
        )
        .arg(
            arg!(--interactions <INTERACTIONS>)
                .required(false)
                .requires("promoters")
                .help("Interaction table to link first"),
        )
        .arg(
            arg!(--promoters <PROMOTERS>)
                .required(false)
                .requires("interactions")
                .help("Promoter BED or GTF gene annotation, used with --interactions"),
        )
        .group(
            ArgGroup::new("target-source")
                .args(["targets", "interactions"])
                .required(true),
        )
        .arg(max_dist_arg())
        .arg(
            arg!(--config <CONFIG>)
                .required(false)
                .help("TOML run configuration"),
        )
        .arg(
            arg!(-o --output <OUTPUT>)
                .required(false)
                .help("Output BED path (default: stdout)"),
        )
}
