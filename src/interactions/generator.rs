//! Sparse matrix generation
//!
//! Picks `floor(size² × density)` distinct cells without replacement and
//! assigns each a rating drawn uniformly from `1..=max_rating`. The random
//! source is supplied by the caller, so a fixed seed reproduces the matrix.

use super::error::{GenerateError, Result};
use super::matrix::InteractionMatrix;
use rand::seq::index;
use rand::Rng;
use tracing::debug;

/// Largest supported side length
pub const MAX_GRID_SIZE: usize = 4096;

/// Parameters of a single matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixSpec {
    /// Side length (users == items)
    pub size: usize,
    /// Fraction of observed cells, in (0, 1)
    pub density: f64,
    /// Highest rating value
    pub max_rating: u32,
}

impl MatrixSpec {
    pub fn new(size: usize, density: f64, max_rating: u32) -> Self {
        Self {
            size,
            density,
            max_rating,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GenerateError::EmptyGrid);
        }
        if self.size > MAX_GRID_SIZE {
            return Err(GenerateError::GridTooLarge {
                size: self.size,
                max: MAX_GRID_SIZE,
            });
        }
        if !self.density.is_finite() || self.density <= 0.0 || self.density >= 1.0 {
            return Err(GenerateError::DensityOutOfRange(self.density));
        }
        if self.max_rating == 0 || self.max_rating > u8::MAX as u32 {
            return Err(GenerateError::InvalidMaxRating(self.max_rating));
        }
        Ok(())
    }

    /// Number of observed cells: floor(size² × density)
    pub fn observed_target(&self) -> usize {
        let total = self.size.saturating_mul(self.size);
        ((total as f64) * self.density).floor() as usize
    }
}

/// Generate a sparse interaction matrix
pub fn generate<R: Rng + ?Sized>(spec: &MatrixSpec, rng: &mut R) -> Result<InteractionMatrix> {
    spec.validate()?;

    let total = spec.size * spec.size;
    // density < 1 keeps this within total
    let amount = spec.observed_target().min(total);
    let max_rating = spec.max_rating as u8;

    let mut cells = vec![None; total];
    for idx in index::sample(rng, total, amount).into_iter() {
        cells[idx] = Some(rng.gen_range(1..=max_rating));
    }

    debug!(
        size = spec.size,
        density = spec.density,
        observed = amount,
        "generated sparse matrix"
    );

    Ok(InteractionMatrix::from_cells(spec.size, cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn gen(density: f64, seed: u64) -> InteractionMatrix {
        let mut rng = StdRng::seed_from_u64(seed);
        generate(&MatrixSpec::new(10, density, 5), &mut rng).unwrap()
    }

    #[test]
    fn test_observed_count_matches_floor() {
        for &density in &[0.12, 0.07, 0.15, 0.05, 0.5, 0.99, 0.001] {
            let m = gen(density, 7);
            let expected = (100.0 * density).floor() as usize;
            assert_eq!(m.observed_count(), expected, "density {}", density);
        }
    }

    #[test]
    fn test_known_counts() {
        assert_eq!(gen(0.05, 42).observed_count(), 5);
        assert_eq!(gen(0.15, 42).observed_count(), 15);
        assert_eq!(gen(0.12, 42).observed_count(), 12);
        assert_eq!(gen(0.07, 42).observed_count(), 7);
    }

    #[test]
    fn test_ratings_in_range() {
        for seed in 0..20 {
            let m = gen(0.9, seed);
            for (_, _, rating) in m.observed() {
                assert!((1..=5).contains(&rating), "rating {}", rating);
            }
        }
    }

    #[test]
    fn test_positions_distinct() {
        let m = gen(0.6, 3);
        let positions: HashSet<(usize, usize)> = m.observed().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(positions.len(), m.observed_count());
        assert_eq!(positions.len(), 60);
    }

    #[test]
    fn test_same_seed_same_matrix() {
        assert_eq!(gen(0.12, 42), gen(0.12, 42));
        assert_eq!(gen(0.15, 1234), gen(0.15, 1234));
    }

    #[test]
    fn test_all_ratings_reachable() {
        let m = gen(0.95, 11);
        let seen: HashSet<u8> = m.observed().map(|(_, _, r)| r).collect();
        assert_eq!(seen, (1..=5).collect::<HashSet<u8>>());
    }

    #[test]
    fn test_max_rating_one() {
        let mut rng = StdRng::seed_from_u64(0);
        let m = generate(&MatrixSpec::new(4, 0.5, 1), &mut rng).unwrap();
        assert_eq!(m.observed_count(), 8);
        assert!(m.observed().all(|(_, _, r)| r == 1));
    }

    #[test]
    fn test_small_density_may_yield_empty_matrix() {
        let mut rng = StdRng::seed_from_u64(0);
        let m = generate(&MatrixSpec::new(3, 0.1, 5), &mut rng).unwrap();
        assert_eq!(m.observed_count(), 0);
    }

    #[test]
    fn test_invalid_specs_rejected() {
        let mut rng = StdRng::seed_from_u64(0);

        let err = generate(&MatrixSpec::new(0, 0.1, 5), &mut rng).unwrap_err();
        assert_eq!(err, GenerateError::EmptyGrid);

        for density in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            let err = generate(&MatrixSpec::new(10, density, 5), &mut rng).unwrap_err();
            assert!(matches!(err, GenerateError::DensityOutOfRange(_)));
        }

        let err = generate(&MatrixSpec::new(usize::MAX, 0.1, 5), &mut rng).unwrap_err();
        assert_eq!(
            err,
            GenerateError::GridTooLarge {
                size: usize::MAX,
                max: MAX_GRID_SIZE
            }
        );
        assert!(MatrixSpec::new(MAX_GRID_SIZE, 0.1, 5).validate().is_ok());

        let err = generate(&MatrixSpec::new(10, 0.1, 0), &mut rng).unwrap_err();
        assert_eq!(err, GenerateError::InvalidMaxRating(0));

        let err = generate(&MatrixSpec::new(10, 0.1, 300), &mut rng).unwrap_err();
        assert_eq!(err, GenerateError::InvalidMaxRating(300));
    }
}
