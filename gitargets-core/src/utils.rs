use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::RegionSetError;
use crate::models::region::Region;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>, RegionSetError> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)
        .map_err(|e| RegionSetError::FileReadError(format!("{}: {}", path.display(), e)))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Lines that carry no records: blank lines, `#` comments and UCSC
/// `track`/`browser` lines.
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("track")
        || trimmed.starts_with("browser")
}

///
/// Parse one tab-separated BED-like line into a [Region].
///
/// Columns after the third are kept verbatim in `rest`.
///
pub fn parse_bed_line(line: &str) -> Result<Region, RegionSetError> {
    let mut fields = line.split('\t');

    let chr = fields
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| RegionSetError::RegionParseError(format!("missing chromosome: {line:?}")))?;
    let start = parse_coordinate(fields.next(), "start", line)?;
    let end = parse_coordinate(fields.next(), "end", line)?;

    let mut region = Region::try_new(chr, start, end)?;
    let rest: Vec<&str> = fields.collect();
    region.rest = Some(rest.join("\t")).filter(|s| !s.is_empty());

    Ok(region)
}

pub(crate) fn parse_coordinate(
    field: Option<&str>,
    which: &str,
    line: &str,
) -> Result<u32, RegionSetError> {
    let field = field.ok_or_else(|| {
        RegionSetError::RegionParseError(format!("missing {which} field: {line:?}"))
    })?;
    field.trim().parse::<u32>().map_err(|_| {
        RegionSetError::RegionParseError(format!("error in parsing {which} position: {line:?}"))
    })
}

/// Returns a sort key that orders chromosome names karyotypically:
/// numeric (1, 2, …, 22) → X → Y → M/MT → everything else alphabetically.
///
/// The `chr` prefix is ignored, so both naming styles order the same way.
pub fn chrom_karyotype_key(chr: &str) -> (u8, u32, String) {
    let bare = chr.strip_prefix("chr").unwrap_or(chr);
    match bare {
        "X" => (1, 0, String::new()),
        "Y" => (2, 0, String::new()),
        "M" | "MT" => (3, 0, String::new()),
        _ => match bare.parse::<u32>() {
            Ok(n) => (0, n, String::new()),
            Err(_) => (4, 0, bare.to_string()),
        },
    }
}
