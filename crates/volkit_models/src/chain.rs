//! Batch evaluation of option chains.
//!
//! An option chain is a set of quotes sharing a spot, expiry, and
//! rate, one per strike. Each row is independent of every other, so
//! evaluation is embarrassingly parallel: rows are fanned out with
//! rayon and failed rows are dropped before aggregation instead of
//! propagating as NaN.

use num_traits::Float;
use rayon::prelude::*;

use crate::analytical::{BlackScholes, Greeks, OptionType};
use crate::calibration::ImpliedVolSolver;

/// Default minimum implied volatility for a row to be kept (5%).
pub const DEFAULT_MIN_IMPLIED_VOL: f64 = 0.05;

/// Default minimum vega for a row to be kept.
pub const DEFAULT_MIN_VEGA: f64 = 1e-5;

/// Default moneyness bounds for surface points.
pub const DEFAULT_MONEYNESS_BOUNDS: (f64, f64) = (0.5, 2.4);

/// A single observed quote: strike and market price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainEntry<T> {
    /// Strike price (K)
    pub strike: T,
    /// Observed option price
    pub market_price: T,
}

/// A fully evaluated chain row.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainRow<T> {
    /// Strike price (K)
    pub strike: T,
    /// Moneyness S/K
    pub moneyness: T,
    /// Implied volatility backed out of the market price
    pub implied_vol: T,
    /// Model price at the implied volatility
    pub model_price: T,
    /// The five Greeks at the implied volatility
    pub greeks: Greeks<T>,
}

/// A point of an implied-volatility surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfacePoint<T> {
    /// Moneyness S/K
    pub moneyness: T,
    /// Time to expiry in years
    pub expiry: T,
    /// Implied volatility
    pub implied_vol: T,
}

/// Row quality thresholds.
///
/// Rows with near-zero implied volatility or vega are numerically
/// meaningless (the market price carries almost no volatility
/// information there) and are dropped before aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainFilter<T> {
    /// Rows with implied volatility below this are dropped.
    pub min_implied_vol: T,
    /// Rows with vega at or below this are dropped.
    pub min_vega: T,
}

impl<T: Float> Default for ChainFilter<T> {
    fn default() -> Self {
        Self {
            min_implied_vol: T::from(DEFAULT_MIN_IMPLIED_VOL).unwrap(),
            min_vega: T::from(DEFAULT_MIN_VEGA).unwrap(),
        }
    }
}

/// Evaluates every row of an option chain.
///
/// Holds the shared scalars (spot, expiry, rate, option type); each
/// call to [`evaluate`](ChainEvaluator::evaluate) is a pure function
/// of those and the given entries, so evaluators may be shared across
/// threads freely.
///
/// # Examples
/// ```
/// use volkit_models::analytical::OptionType;
/// use volkit_models::chain::{ChainEntry, ChainEvaluator};
///
/// let evaluator = ChainEvaluator::new(100.0_f64, 1.0, 0.01, OptionType::Call);
/// let entries = [
///     ChainEntry { strike: 95.0, market_price: 11.0 },
///     ChainEntry { strike: 105.0, market_price: 6.0 },
/// ];
///
/// let rows = evaluator.evaluate(&entries);
/// assert_eq!(rows.len(), 2);
/// assert!(rows[0].implied_vol > 0.05);
/// ```
#[derive(Debug, Clone)]
pub struct ChainEvaluator<T: Float> {
    spot: T,
    expiry: T,
    rate: T,
    option_type: OptionType,
    solver: ImpliedVolSolver<T>,
    filter: ChainFilter<T>,
}

impl<T: Float + Send + Sync> ChainEvaluator<T> {
    /// Create an evaluator with the default implied-vol solver and
    /// row filter.
    pub fn new(spot: T, expiry: T, rate: T, option_type: OptionType) -> Self {
        Self {
            spot,
            expiry,
            rate,
            option_type,
            solver: ImpliedVolSolver::with_defaults(),
            filter: ChainFilter::default(),
        }
    }

    /// Replace the row filter.
    pub fn with_filter(mut self, filter: ChainFilter<T>) -> Self {
        self.filter = filter;
        self
    }

    /// Replace the implied-vol solver.
    pub fn with_solver(mut self, solver: ImpliedVolSolver<T>) -> Self {
        self.solver = solver;
        self
    }

    /// Evaluate a chain: implied vol, model price, and Greeks per row.
    ///
    /// Rows are processed in parallel. Rows whose implied-vol search
    /// fails, or that fall below the quality thresholds, are dropped;
    /// output order follows input order for the rows that remain.
    pub fn evaluate(&self, entries: &[ChainEntry<T>]) -> Vec<ChainRow<T>> {
        entries
            .par_iter()
            .filter_map(|entry| self.evaluate_entry(entry))
            .collect()
    }

    /// Extract implied-volatility surface points for this expiry.
    ///
    /// Rows outside the given moneyness bounds or with a failed
    /// implied-vol search are dropped. Axes follow the usual surface
    /// convention: moneyness = S/K, time to expiry, implied vol.
    pub fn surface_points(
        &self,
        entries: &[ChainEntry<T>],
        moneyness_bounds: (T, T),
    ) -> Vec<SurfacePoint<T>> {
        entries
            .par_iter()
            .filter_map(|entry| {
                let moneyness = self.spot / entry.strike;
                if moneyness <= moneyness_bounds.0 || moneyness >= moneyness_bounds.1 {
                    return None;
                }
                let implied_vol = self
                    .solver
                    .solve(
                        self.spot,
                        entry.strike,
                        self.expiry,
                        self.rate,
                        entry.market_price,
                        self.option_type,
                    )
                    .ok()?;
                Some(SurfacePoint {
                    moneyness,
                    expiry: self.expiry,
                    implied_vol,
                })
            })
            .collect()
    }

    fn evaluate_entry(&self, entry: &ChainEntry<T>) -> Option<ChainRow<T>> {
        let implied_vol = self
            .solver
            .solve(
                self.spot,
                entry.strike,
                self.expiry,
                self.rate,
                entry.market_price,
                self.option_type,
            )
            .ok()?;

        let bs = BlackScholes::new(self.spot, entry.strike, self.expiry, self.rate, implied_vol)
            .ok()?;
        let greeks = bs.greeks(self.option_type);

        if implied_vol < self.filter.min_implied_vol || greeks.vega <= self.filter.min_vega {
            return None;
        }

        Some(ChainRow {
            strike: entry.strike,
            moneyness: bs.moneyness(),
            implied_vol,
            model_price: bs.price(self.option_type),
            greeks,
        })
    }
}

/// Surface points across several expiries of the same underlying,
/// with the default moneyness bounds.
///
/// `chains` pairs each expiry (in years) with its observed entries.
pub fn surface_from_chains<T: Float + Send + Sync>(
    spot: T,
    rate: T,
    option_type: OptionType,
    chains: &[(T, Vec<ChainEntry<T>>)],
) -> Vec<SurfacePoint<T>> {
    let bounds = (
        T::from(DEFAULT_MONEYNESS_BOUNDS.0).unwrap(),
        T::from(DEFAULT_MONEYNESS_BOUNDS.1).unwrap(),
    );

    chains
        .iter()
        .flat_map(|(expiry, entries)| {
            ChainEvaluator::new(spot, *expiry, rate, option_type).surface_points(entries, bounds)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Build entries whose market prices come from known vols, so the
    /// expected implied vols are exact.
    fn synthetic_entries(
        spot: f64,
        expiry: f64,
        rate: f64,
        option_type: OptionType,
        strikes_vols: &[(f64, f64)],
    ) -> Vec<ChainEntry<f64>> {
        strikes_vols
            .iter()
            .map(|&(strike, vol)| {
                let bs = BlackScholes::new(spot, strike, expiry, rate, vol).unwrap();
                ChainEntry {
                    strike,
                    market_price: bs.price(option_type),
                }
            })
            .collect()
    }

    #[test]
    fn test_evaluate_recovers_known_vols() {
        let strikes_vols = [(90.0, 0.25), (100.0, 0.2), (110.0, 0.22)];
        let entries = synthetic_entries(100.0, 1.0, 0.01, OptionType::Call, &strikes_vols);

        let evaluator = ChainEvaluator::new(100.0, 1.0, 0.01, OptionType::Call);
        let rows = evaluator.evaluate(&entries);

        assert_eq!(rows.len(), 3);
        for (row, &(strike, vol)) in rows.iter().zip(strikes_vols.iter()) {
            assert_eq!(row.strike, strike);
            assert_relative_eq!(row.implied_vol, vol, epsilon = 1e-4);
            assert_relative_eq!(row.moneyness, 100.0 / strike, epsilon = 1e-12);
            assert!(row.greeks.vega > 0.0);
        }
    }

    #[test]
    fn test_evaluate_drops_unsolvable_rows() {
        let mut entries = synthetic_entries(100.0, 1.0, 0.01, OptionType::Call, &[(100.0, 0.2)]);
        // Below intrinsic: implied-vol search must fail, row dropped
        entries.push(ChainEntry {
            strike: 50.0,
            market_price: 10.0,
        });

        let evaluator = ChainEvaluator::new(100.0, 1.0, 0.01, OptionType::Call);
        let rows = evaluator.evaluate(&entries);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].strike, 100.0);
    }

    #[test]
    fn test_evaluate_drops_low_vol_rows() {
        // 2% vol is below the 5% quality threshold
        let entries =
            synthetic_entries(100.0, 1.0, 0.01, OptionType::Call, &[(100.0, 0.02), (100.0, 0.3)]);

        let evaluator = ChainEvaluator::new(100.0, 1.0, 0.01, OptionType::Call);
        let rows = evaluator.evaluate(&entries);

        assert_eq!(rows.len(), 1);
        assert_relative_eq!(rows[0].implied_vol, 0.3, epsilon = 1e-4);
    }

    #[test]
    fn test_evaluate_custom_filter_keeps_low_vol() {
        let entries = synthetic_entries(100.0, 1.0, 0.01, OptionType::Call, &[(100.0, 0.02)]);

        let filter = ChainFilter {
            min_implied_vol: 0.0,
            min_vega: 0.0,
        };
        let evaluator =
            ChainEvaluator::new(100.0, 1.0, 0.01, OptionType::Call).with_filter(filter);

        assert_eq!(evaluator.evaluate(&entries).len(), 1);
    }

    #[test]
    fn test_evaluate_puts() {
        let strikes_vols = [(95.0, 0.3), (105.0, 0.28)];
        let entries = synthetic_entries(100.0, 0.5, 0.02, OptionType::Put, &strikes_vols);

        let evaluator = ChainEvaluator::new(100.0, 0.5, 0.02, OptionType::Put);
        let rows = evaluator.evaluate(&entries);

        assert_eq!(rows.len(), 2);
        for (row, &(_, vol)) in rows.iter().zip(strikes_vols.iter()) {
            assert_relative_eq!(row.implied_vol, vol, epsilon = 1e-4);
            assert!(row.greeks.delta < 0.0);
        }
    }

    #[test]
    fn test_surface_points_respect_moneyness_bounds() {
        // S/K = 4.0 and 0.4 both fall outside the default bounds
        let strikes_vols = [(25.0, 0.2), (100.0, 0.2), (250.0, 0.2)];
        let entries = synthetic_entries(100.0, 1.0, 0.01, OptionType::Call, &strikes_vols);

        let evaluator = ChainEvaluator::new(100.0, 1.0, 0.01, OptionType::Call);
        let points = evaluator.surface_points(&entries, (0.5, 2.4));

        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].moneyness, 1.0, epsilon = 1e-12);
        assert_relative_eq!(points[0].implied_vol, 0.2, epsilon = 1e-4);
        assert_eq!(points[0].expiry, 1.0);
    }

    #[test]
    fn test_surface_from_chains_multiple_expiries() {
        let mut chains = Vec::new();
        for expiry in [0.25, 0.5, 1.0] {
            let entries =
                synthetic_entries(100.0, expiry, 0.01, OptionType::Call, &[(95.0, 0.2), (105.0, 0.25)]);
            chains.push((expiry, entries));
        }

        let points = surface_from_chains(100.0, 0.01, OptionType::Call, &chains);
        assert_eq!(points.len(), 6);

        for point in &points {
            assert!(point.implied_vol > 0.1 && point.implied_vol < 0.3);
        }
    }

    #[test]
    fn test_evaluate_empty_chain() {
        let evaluator = ChainEvaluator::<f64>::new(100.0, 1.0, 0.01, OptionType::Call);
        assert!(evaluator.evaluate(&[]).is_empty());
    }

    #[test]
    fn test_evaluate_deterministic_under_parallelism() {
        let strikes_vols: Vec<(f64, f64)> = (0..64)
            .map(|i| (70.0 + i as f64, 0.15 + 0.001 * i as f64))
            .collect();
        let entries = synthetic_entries(100.0, 1.0, 0.01, OptionType::Call, &strikes_vols);

        let evaluator = ChainEvaluator::new(100.0, 1.0, 0.01, OptionType::Call);
        let first = evaluator.evaluate(&entries);
        let second = evaluator.evaluate(&entries);
        assert_eq!(first, second);
    }
}
