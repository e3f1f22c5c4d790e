use gitargets_core::models::RegionSet;
use gitargets_core::seqlevels::SeqlevelsStyle;

use crate::errors::{LinkerError, LinkerResult};

///
/// Fail fast unless every input names its chromosomes the same way.
///
/// Each input must be internally consistent, and all non-empty inputs must
/// share one style. Returns that style, or `None` when every input is empty.
///
/// # Arguments
/// - inputs: `(label, regions)` pairs; labels appear in error messages
///
pub fn ensure_same_seqlevels_style(
    inputs: &[(&str, &RegionSet)],
) -> LinkerResult<Option<SeqlevelsStyle>> {
    let mut first: Option<(&str, SeqlevelsStyle)> = None;

    for &(label, regions) in inputs {
        let chroms = regions.regions.iter().map(|r| r.chr.as_str());
        let Some(style) = SeqlevelsStyle::detect(label, chroms)? else {
            continue;
        };

        match first {
            None => first = Some((label, style)),
            Some((left, left_style)) if left_style != style => {
                return Err(LinkerError::SeqlevelsStyleMismatch {
                    left: left.to_string(),
                    left_style,
                    right: label.to_string(),
                    right_style: style,
                });
            }
            Some(_) => {}
        }
    }

    Ok(first.map(|(_, style)| style))
}
