/// Version selection: the smallest version whose data capacity holds the segments
use crate::encoder::segment::Segment;
use crate::encoder::tables::num_data_codewords;
use crate::error::DataTooLong;
use crate::models::{ECLevel, Version};

/// Outcome of version selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityFit {
    /// Smallest version that holds the data
    pub version: Version,
    /// Level actually used, after any boost
    pub ec_level: ECLevel,
    /// Bits used by the segments, headers included
    pub data_bits: usize,
}

/// Data capacity in bits of `version` at `ec_level`
pub fn capacity_bits(version: Version, ec_level: ECLevel) -> usize {
    num_data_codewords(version, ec_level) * 8
}

/// Scan `min..=max` upward for the first version that fits.
///
/// With `boost_ecl`, the level is then raised as far as the chosen version allows.
///
/// # Panics
/// Panics if `min > max`; callers validate the range first.
pub fn select_version(
    segments: &[Segment],
    ec_level: ECLevel,
    min: Version,
    max: Version,
    boost_ecl: bool,
) -> Result<CapacityFit, DataTooLong> {
    assert!(min <= max, "invalid version range");

    let mut version = min;
    let data_bits = loop {
        let capacity = capacity_bits(version, ec_level);
        let used = Segment::total_bits(segments, version);
        match used {
            Some(bits) if bits <= capacity => break bits,
            _ if version >= max => {
                return Err(match used {
                    Some(required_bits) => DataTooLong::DataOverCapacity {
                        required_bits,
                        capacity_bits: capacity,
                    },
                    None => DataTooLong::SegmentTooLong,
                });
            }
            _ => {}
        }
        // version < max <= Version::MAX, so a next version exists
        version = match version.next() {
            Some(next) => next,
            None => return Err(DataTooLong::SegmentTooLong),
        };
    };

    let mut fit = CapacityFit {
        version,
        ec_level,
        data_bits,
    };
    if boost_ecl {
        for candidate in [ECLevel::M, ECLevel::Q, ECLevel::H] {
            if candidate > fit.ec_level && data_bits <= capacity_bits(version, candidate) {
                fit.ec_level = candidate;
            }
        }
        if fit.ec_level != ec_level {
            log::debug!(
                "boosted error correction {:?} -> {:?} at version {}",
                ec_level,
                fit.ec_level,
                version.number()
            );
        }
    }

    log::debug!(
        "selected version {} ({:?}): {} of {} data bits",
        version.number(),
        fit.ec_level,
        data_bits,
        capacity_bits(version, fit.ec_level)
    );
    Ok(fit)
}
