//! Girder demand from equally spaced beam reactions.

use super::Demand;

/// Moment and shear in a simply supported girder carrying `beam_count`
/// equal point loads at `span/(beam_count + 1)` spacing.
///
/// `point_load_kips` is the reaction delivered by one interior beam. The
/// support shear is `P·n/2`; the moment is accumulated segment by segment
/// from the support, stopping at the segment where the shear would next
/// drop to zero or below.
///
/// Returns moment in kip-in and shear in kips.
///
/// # Example
///
/// ```rust
/// use frame_core::loads::girder_load;
///
/// // One beam at midspan of a 20 ft girder: M = P·L/4
/// let demand = girder_load(10.0, 1, 20.0);
/// assert_eq!(demand.shear, 5.0);
/// assert_eq!(demand.moment, 600.0);
/// ```
pub fn girder_load(point_load_kips: f64, beam_count: u32, span_ft: f64) -> Demand {
    let shear = point_load_kips * f64::from(beam_count) / 2.0;
    let spacing_in = span_ft * 12.0 / f64::from(beam_count + 1);

    let mut moment = 0.0;
    let mut segment_shear = shear;
    for _ in 0..beam_count {
        moment += spacing_in * segment_shear;
        if segment_shear - point_load_kips <= 0.0 {
            break;
        }
        segment_shear -= point_load_kips;
    }

    Demand { moment, shear }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_beams() {
        // Third points of a 30 ft girder: M = P·L/3
        let demand = girder_load(12.0, 2, 30.0);
        assert_relative_eq!(demand.shear, 12.0);
        assert_relative_eq!(demand.moment, 12.0 * 360.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_three_beams() {
        // V = 1.5P, spacing L/4: M = L/4·1.5P + L/4·0.5P = P·L/2
        let demand = girder_load(8.0, 3, 24.0);
        assert_relative_eq!(demand.shear, 12.0);
        assert_relative_eq!(demand.moment, 8.0 * 288.0 / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_four_beams() {
        // V = 2P, spacing L/5: M = L/5·(2P + P) = 0.6·P·L
        let demand = girder_load(5.0, 4, 25.0);
        assert_relative_eq!(demand.shear, 10.0);
        assert_relative_eq!(demand.moment, 0.6 * 5.0 * 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_load() {
        let demand = girder_load(0.0, 3, 30.0);
        assert_eq!(demand.shear, 0.0);
        assert_eq!(demand.moment, 0.0);
    }

    #[test]
    fn test_zero_beams() {
        let demand = girder_load(10.0, 0, 30.0);
        assert_eq!(demand.shear, 0.0);
        assert_eq!(demand.moment, 0.0);
    }
}
