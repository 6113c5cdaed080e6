//! Unique random subsets
//!
//! Draws `length` distinct integers from the closed range `[min, max]`.
//! Three interchangeable strategies are available:
//! - `Rejection`: draw, scan the output for a collision, redraw
//! - `RejectionWithSet`: same draws, collisions checked against a `HashSet`
//! - `PoolRemoval`: materialise the range and remove a random index per step
//!
//! All strategies validate the request first, so asking for more values than
//! the range holds is an error rather than an endless loop.

use crate::errors::{KataError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Largest range `PoolRemoval` is willing to materialise.
pub const MAX_POOL_SIZE: u64 = 1 << 24;

/// Sampling algorithm used by [`generate`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Redraw on collision, linear membership scan
    Rejection,
    /// Redraw on collision, hash-set membership
    RejectionWithSet,
    /// Sample without replacement from the materialised range (default)
    #[default]
    PoolRemoval,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Rejection,
        Strategy::RejectionWithSet,
        Strategy::PoolRemoval,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Rejection => "rejection",
            Strategy::RejectionWithSet => "rejection-with-set",
            Strategy::PoolRemoval => "pool-removal",
        }
    }

    fn is_rejection(&self) -> bool {
        !matches!(self, Strategy::PoolRemoval)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Strategy {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| {
                KataError::invalid(
                    "strategy",
                    format!(
                        "unknown strategy '{}', expected one of rejection, rejection-with-set, pool-removal",
                        s
                    ),
                )
            })
    }
}

/// How many values to draw and from which closed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsetRequest {
    pub length: usize,
    pub min: i64,
    pub max: i64,
}

impl Default for SubsetRequest {
    fn default() -> Self {
        Self {
            length: 5,
            min: 2,
            max: 32,
        }
    }
}

impl SubsetRequest {
    pub fn new(length: usize, min: i64, max: i64) -> Self {
        Self { length, min, max }
    }

    /// Number of distinct integers in `[min, max]`, or 0 when `min > max`.
    pub fn range_size(&self) -> u128 {
        if self.min > self.max {
            return 0;
        }
        (self.max as i128 - self.min as i128 + 1) as u128
    }

    /// Check `min <= max`, `length <= max - min + 1` and
    /// `length <= MAX_POOL_SIZE`.
    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(KataError::invalid(
                "min",
                format!("min ({}) must not exceed max ({})", self.min, self.max),
            ));
        }
        if self.length as u64 > MAX_POOL_SIZE {
            return Err(KataError::invalid(
                "length",
                format!(
                    "cannot draw {} values, the limit is {}",
                    self.length, MAX_POOL_SIZE
                ),
            ));
        }
        if self.length as u128 > self.range_size() {
            return Err(KataError::invalid(
                "length",
                format!(
                    "cannot draw {} distinct values from [{}, {}] which holds only {}",
                    self.length,
                    self.min,
                    self.max,
                    self.range_size()
                ),
            ));
        }
        Ok(())
    }

    /// [`validate`](Self::validate), plus the range limit of `PoolRemoval`.
    pub fn validate_for(&self, strategy: Strategy) -> Result<()> {
        self.validate()?;
        let size = self.range_size();
        if strategy == Strategy::PoolRemoval && size > MAX_POOL_SIZE as u128 {
            return Err(KataError::invalid(
                "max",
                format!(
                    "range of {} values is too large to materialise (limit {})",
                    size, MAX_POOL_SIZE
                ),
            ));
        }
        Ok(())
    }
}

/// Uniform integer in `[min, max]`, both ends inclusive.
///
/// # Panics
///
/// Panics if `min > max`. [`generate_with`] validates before drawing.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.random_range(min..=max)
}

/// Generate a unique random subset using the thread-local RNG.
pub fn generate(request: &SubsetRequest, strategy: Strategy) -> Result<Vec<i64>> {
    generate_with(&mut rand::rng(), request, strategy)
}

/// Generate a unique random subset with a caller-supplied RNG.
///
/// Output order is draw order. Every strategy returns exactly
/// `request.length` distinct values inside the range.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    request: &SubsetRequest,
    strategy: Strategy,
) -> Result<Vec<i64>> {
    request.validate_for(strategy)?;

    if strategy.is_rejection() && request.length as u128 * 2 > request.range_size() {
        warn!(
            strategy = strategy.name(),
            length = request.length,
            range_size = request.range_size() as u64,
            "Rejection sampling over more than half the range, expect many redraws"
        );
    }

    let values = match strategy {
        Strategy::Rejection => rejection(rng, request),
        Strategy::RejectionWithSet => rejection_with_set(rng, request),
        Strategy::PoolRemoval => pool_removal(rng, request),
    };

    debug!(
        strategy = strategy.name(),
        length = values.len(),
        "Generated unique random subset"
    );
    Ok(values)
}

fn rejection<R: Rng + ?Sized>(rng: &mut R, request: &SubsetRequest) -> Vec<i64> {
    let mut result = Vec::with_capacity(request.length);
    let mut discarded = 0u64;

    while result.len() < request.length {
        let candidate = uniform(rng, request.min, request.max);
        if result.contains(&candidate) {
            discarded += 1;
        } else {
            result.push(candidate);
        }
    }

    debug!(discarded, "Rejection sampling finished");
    result
}

fn rejection_with_set<R: Rng + ?Sized>(rng: &mut R, request: &SubsetRequest) -> Vec<i64> {
    let mut result = Vec::with_capacity(request.length);
    let mut seen = HashSet::with_capacity(request.length);
    let mut discarded = 0u64;

    while result.len() < request.length {
        let candidate = uniform(rng, request.min, request.max);
        if seen.insert(candidate) {
            result.push(candidate);
        } else {
            discarded += 1;
        }
    }

    debug!(discarded, "Set-tracked rejection sampling finished");
    result
}

fn pool_removal<R: Rng + ?Sized>(rng: &mut R, request: &SubsetRequest) -> Vec<i64> {
    let mut pool: Vec<i64> = (request.min..=request.max).collect();
    let mut result = Vec::with_capacity(request.length);

    for _ in 0..request.length {
        let index = rng.random_range(0..pool.len());
        result.push(pool.swap_remove(index));
    }

    result
}
