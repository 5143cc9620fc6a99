//! Standard-normal draw buffers with optional antithetic pairing.
//!
//! Antithetic pairing draws ⌈n/2⌉ independent variates `z` and appends their
//! mirror `-z`, truncating to exactly `n` values. For odd `n` the last
//! independent draw keeps no partner. The grid variant mirrors whole rows so
//! that a path and its partner share every increment with opposite sign.

use pricer_core::types::PricingError;

use super::prng::PricerRng;
use crate::mc::config::grid_len;

/// Draws `n` standard normals from one seeded stream.
///
/// # Arguments
///
/// * `n` - Number of variates (> 0)
/// * `seed` - Seed for reproducibility; `None` seeds from entropy
/// * `antithetic` - Mirror the first ⌈n/2⌉ draws
///
/// # Errors
///
/// `PricingError::InvalidArgument` when `n == 0`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::standard_normals;
///
/// let z = standard_normals(5, Some(42), true).unwrap();
/// assert_eq!(z.len(), 5);
/// assert_eq!(z[3], -z[0]);
/// assert_eq!(z[4], -z[1]);
/// ```
pub fn standard_normals(
    n: usize,
    seed: Option<u64>,
    antithetic: bool,
) -> Result<Vec<f64>, PricingError> {
    standard_normal_grid(n, 1, seed, antithetic)
}

/// Draws an `n_paths × n_steps` row-major grid of standard normals.
///
/// Rows are filled in order from one stream. With `antithetic`, the first
/// ⌈n_paths/2⌉ rows are independent and the remaining rows are their
/// negations, in the same order.
///
/// # Errors
///
/// `PricingError::InvalidArgument` when `n_paths == 0`, `n_steps == 0` or
/// the grid exceeds [`MAX_GRID_DRAWS`](crate::mc::MAX_GRID_DRAWS).
pub fn standard_normal_grid(
    n_paths: usize,
    n_steps: usize,
    seed: Option<u64>,
    antithetic: bool,
) -> Result<Vec<f64>, PricingError> {
    if n_paths == 0 {
        return Err(PricingError::invalid_argument("n_paths must be > 0"));
    }
    if n_steps == 0 {
        return Err(PricingError::invalid_argument("n_steps must be > 0"));
    }

    let total = grid_len(n_paths, n_steps)?;
    let mut rng = PricerRng::from_optional_seed(seed);

    if !antithetic {
        let mut grid = vec![0.0; total];
        rng.fill_normal(&mut grid);
        return Ok(grid);
    }

    let independent_rows = n_paths.div_ceil(2);
    let mut grid = vec![0.0; total];
    let (head, tail) = grid.split_at_mut(independent_rows * n_steps);
    rng.fill_normal(head);

    // tail holds n_paths - ⌈n_paths/2⌉ rows, never more than head
    for (mirror, source) in tail.iter_mut().zip(head.iter()) {
        *mirror = -*source;
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_draws_match_sequential_stream() {
        let z = standard_normals(8, Some(7), false).unwrap();
        let mut rng = PricerRng::from_seed(7);
        let mut expected = vec![0.0; 8];
        rng.fill_normal(&mut expected);
        assert_eq!(z, expected);
    }

    #[test]
    fn test_antithetic_even_count() {
        let z = standard_normals(6, Some(1), true).unwrap();
        for i in 0..3 {
            assert_eq!(z[i + 3], -z[i]);
        }
    }

    #[test]
    fn test_antithetic_odd_count_keeps_one_unpaired() {
        let z = standard_normals(5, Some(1), true).unwrap();
        let mut rng = PricerRng::from_seed(1);
        let mut half = vec![0.0; 3];
        rng.fill_normal(&mut half);

        assert_eq!(&z[..3], &half[..]);
        assert_eq!(z[3], -half[0]);
        assert_eq!(z[4], -half[1]);
    }

    #[test]
    fn test_antithetic_single_draw() {
        let z = standard_normals(1, Some(3), true).unwrap();
        assert_eq!(z.len(), 1);
        assert_eq!(z[0], PricerRng::from_seed(3).gen_normal());
    }

    #[test]
    fn test_grid_mirrors_whole_rows() {
        let (n_paths, n_steps) = (5, 4);
        let grid = standard_normal_grid(n_paths, n_steps, Some(11), true).unwrap();
        assert_eq!(grid.len(), n_paths * n_steps);

        for row in 0..2 {
            for step in 0..n_steps {
                assert_eq!(grid[(row + 3) * n_steps + step], -grid[row * n_steps + step]);
            }
        }
    }

    #[test]
    fn test_zero_sizes_rejected() {
        assert!(matches!(
            standard_normals(0, Some(1), false),
            Err(PricingError::InvalidArgument(_))
        ));
        assert!(matches!(
            standard_normal_grid(10, 0, Some(1), true),
            Err(PricingError::InvalidArgument(_))
        ));
    }
}
