//! Comparison between the original road map and its spanning forest.
//!
//! Two ratios are reported: how much road the barely connected map needs
//! compared to the original map, and how much longer the fastest route
//! becomes once redundant roads are removed.

use std::fmt;

use crate::error::AnalysisError;

const DEFAULT_PLACES: usize = 2;
const MAX_PLACES: usize = 18;

/// An exact quotient of two road lengths.
///
/// Formatting rounds half away from zero at the requested precision
/// (two places by default), computed on the exact fraction rather than on
/// its floating-point approximation.
///
/// # Examples
/// ```
/// use cartograph_core::Ratio;
///
/// let ratio = Ratio::new(1, 8).expect("non-zero denominator");
/// assert_eq!(ratio.to_string(), "0.13");
/// assert_eq!(format!("{ratio:.3}"), "0.125");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ratio {
    numerator: u64,
    denominator: u64,
}

impl Ratio {
    /// Creates `numerator / denominator`, or `None` when the denominator is
    /// zero.
    #[must_use]
    pub const fn new(numerator: u64, denominator: u64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        Some(Self {
            numerator,
            denominator,
        })
    }

    /// Returns the numerator.
    #[must_use]
    #[rustfmt::skip]
    pub const fn numerator(&self) -> u64 { self.numerator }

    /// Returns the denominator, never zero.
    #[must_use]
    #[rustfmt::skip]
    pub const fn denominator(&self) -> u64 { self.denominator }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.precision().unwrap_or(DEFAULT_PLACES).min(MAX_PLACES);
        let scale = (0..width).fold(1_u128, |scale, _| scale * 10);
        let denominator = u128::from(self.denominator);
        // (2n·s + d) / 2d rounds n·s / d half up without leaving integers.
        let scaled = (2 * u128::from(self.numerator) * scale + denominator)
            .div_euclid(2 * denominator);
        let whole = scaled.div_euclid(scale);
        if width == 0 {
            return write!(f, "{whole}");
        }
        let fraction = scaled.rem_euclid(scale);
        write!(f, "{whole}.{fraction:0width$}")
    }
}

/// Totals gathered from one planning run.
///
/// # Examples
/// ```
/// use cartograph_core::MapAnalysis;
///
/// let analysis = MapAnalysis::new(25, 15, Some(5), Some(5));
/// assert_eq!(analysis.material_ratio()?.to_string(), "0.60");
/// assert_eq!(analysis.route_ratio()?.to_string(), "1.00");
/// # Ok::<(), cartograph_core::AnalysisError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MapAnalysis {
    original_length: u64,
    forest_length: u64,
    original_route: Option<u64>,
    forest_route: Option<u64>,
}

impl MapAnalysis {
    /// Creates an analysis from the map totals and route distances.
    ///
    /// A route distance of `None` means the query locations are not
    /// connected on that map.
    #[must_use]
    pub const fn new(
        original_length: u64,
        forest_length: u64,
        original_route: Option<u64>,
        forest_route: Option<u64>,
    ) -> Self {
        Self {
            original_length,
            forest_length,
            original_route,
            forest_route,
        }
    }

    /// Returns the total length of the original map.
    #[must_use]
    #[rustfmt::skip]
    pub const fn original_length(&self) -> u64 { self.original_length }

    /// Returns the total length of the barely connected map.
    #[must_use]
    #[rustfmt::skip]
    pub const fn forest_length(&self) -> u64 { self.forest_length }

    /// Returns the fastest route distance on the original map.
    #[must_use]
    #[rustfmt::skip]
    pub const fn original_route(&self) -> Option<u64> { self.original_route }

    /// Returns the fastest route distance on the barely connected map.
    #[must_use]
    #[rustfmt::skip]
    pub const fn forest_route(&self) -> Option<u64> { self.forest_route }

    /// Ratio of construction material: forest length over original length.
    ///
    /// # Errors
    /// Returns [`AnalysisError::EmptyOriginalMap`] when the original map has
    /// zero total length.
    pub fn material_ratio(&self) -> Result<Ratio, AnalysisError> {
        Ratio::new(self.forest_length, self.original_length).ok_or(AnalysisError::EmptyOriginalMap)
    }

    /// Ratio of route quality: forest route distance over original route
    /// distance.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Unreachable`] when either route is missing and
    /// [`AnalysisError::ZeroLengthRoute`] when the original route has zero
    /// length.
    pub fn route_ratio(&self) -> Result<Ratio, AnalysisError> {
        let (Some(forest), Some(original)) = (self.forest_route, self.original_route) else {
            return Err(AnalysisError::Unreachable);
        };
        Ratio::new(forest, original).ok_or(AnalysisError::ZeroLengthRoute)
    }
}
