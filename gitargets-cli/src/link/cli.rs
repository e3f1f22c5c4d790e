use clap::{Arg, Command, arg, value_parser};

pub const LINK_CMD: &str = "link";

/// `--max-dist`, shared with `annotate`
pub fn max_dist_arg() -> Arg {
    Arg::new("max-dist")
        .long("max-dist")
        .value_parser(value_parser!(i64))
        .allow_negative_numbers(true)
        .help("<= 0: anchors must overlap a promoter by |N| bases (any overlap at 0). > 0: nearest promoter within N bases. Overrides the config")
}

pub fn create_link_cli() -> Command {
    Command::new(LINK_CMD)
        .about("Tag interaction anchors with the genes whose promoters their mate anchors contact.")
        .arg_required_else_help(true)
        .arg(
            arg!(--interactions <INTERACTIONS>)
                .required(true)
                .help("Interaction table: chr1 start1 end1 chr2 start2 end2 observed (plain or .gz)"),
        )
        .arg(
            arg!(--promoters <PROMOTERS>)
                .required(true)
                .help("Promoter BED with gene names in column 4, or a GTF gene annotation"),
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
        .arg(
            arg!(--stats <STATS>)
                .required(false)
                .help("Write run statistics as JSON to this path"),
        )
}
