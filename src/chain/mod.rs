//! Procedural residue chains.
//!
//! A [`Chain`] is an immutable, ordered list of [`Residue`]s. Each residue
//! contributes one bond direction; integrating those directions from the
//! origin gives the chain's absolute coordinates
//! ([`Chain::calculate_coordinates`]). Regenerating means building a new
//! `Chain`, never mutating an existing one.

/// Residue colors and the rainbow palette.
pub mod palette;
/// Single residue and its spherical-angle direction.
pub mod residue;

use glam::DVec3;
use rand::Rng;

pub use palette::{Palette, Rgb, RAINBOW};
pub use residue::Residue;

/// Smallest accepted angle resolution; lower requests are raised to this.
pub const MIN_ANGLE_RESOLUTION: u32 = 4;
/// Resolution used when the caller does not specify one.
pub const DEFAULT_ANGLE_RESOLUTION: f64 = 20.0;
/// Upper bound (inclusive) for a randomly chosen residue count.
pub const MAX_RANDOM_RESIDUE_COUNT: usize = 100;
/// Distance between consecutive coordinates when none is given.
pub const DEFAULT_BOND_LENGTH: f64 = 3.0;

/// Absolute position of one chain vertex.
pub type Coordinate = DVec3;

/// Parameters for building a chain.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChainParams {
    /// Number of residues; `None` draws one uniformly from `1..=100`.
    pub residue_count: Option<usize>,
    /// Raw angle resolution; floored and raised to at least 4. `None`
    /// means 20.
    pub angle_resolution: Option<f64>,
}

impl ChainParams {
    /// Parameters with an explicit count and resolution.
    #[must_use]
    pub fn new(residue_count: usize, angle_resolution: f64) -> Self {
        Self {
            residue_count: Some(residue_count),
            angle_resolution: Some(angle_resolution),
        }
    }
}

/// Floor a raw resolution and raise it to [`MIN_ANGLE_RESOLUTION`].
///
/// Non-finite input maps to the minimum.
#[must_use]
pub fn normalize_resolution(raw: f64) -> u32 {
    if !raw.is_finite() {
        return MIN_ANGLE_RESOLUTION;
    }
    // `as` saturates for values beyond u32::MAX.
    (raw.floor().max(f64::from(MIN_ANGLE_RESOLUTION))) as u32
}

/// An ordered, immutable sequence of residues.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    angle_resolution: u32,
    residues: Vec<Residue>,
}

impl Chain {
    /// Generate a chain using the thread-local RNG.
    #[must_use]
    pub fn generate(params: ChainParams) -> Self {
        Self::generate_with_rng(params, &mut rand::rng())
    }

    /// Generate a chain drawing every random choice from `rng`.
    ///
    /// A zero residue count is raised to one.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        params: ChainParams,
        rng: &mut R,
    ) -> Self {
        let residue_count = params.residue_count.map_or_else(
            || rng.random_range(1..=MAX_RANDOM_RESIDUE_COUNT),
            |count| count.max(1),
        );
        let angle_resolution = normalize_resolution(
            params.angle_resolution.unwrap_or(DEFAULT_ANGLE_RESOLUTION),
        );

        let residues = (0..residue_count)
            .map(|index| Residue::random(index, angle_resolution, rng))
            .collect();

        log::debug!(
            "generated chain: {residue_count} residues, angle resolution \
             {angle_resolution}"
        );

        Self {
            angle_resolution,
            residues,
        }
    }

    /// Build a chain from explicit `(theta_steps, phi_steps)` pairs.
    ///
    /// Residue indices follow slice order and steps are clamped into
    /// `1..=resolution`. An empty slice yields a single `(1, 1)` residue,
    /// since a chain always has at least one.
    #[must_use]
    pub fn from_steps(angle_resolution: f64, steps: &[(u32, u32)]) -> Self {
        let angle_resolution = normalize_resolution(angle_resolution);
        let steps = if steps.is_empty() { &[(1, 1)][..] } else { steps };
        let residues = steps
            .iter()
            .enumerate()
            .map(|(index, &(theta, phi))| {
                Residue::with_steps(index, theta, phi, angle_resolution)
            })
            .collect();
        Self {
            angle_resolution,
            residues,
        }
    }

    /// Number of residues.
    #[must_use]
    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    /// Effective (normalized) angle resolution.
    #[must_use]
    pub fn angle_resolution(&self) -> u32 {
        self.angle_resolution
    }

    /// Residues in chain order.
    #[must_use]
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    /// Residue at `index`, if any.
    #[must_use]
    pub fn residue(&self, index: usize) -> Option<&Residue> {
        self.residues.get(index)
    }

    /// Integrate residue directions into absolute coordinates.
    ///
    /// Returns `residue_count + 1` points starting at the origin; point
    /// `i + 1` is point `i` plus residue `i`'s direction times
    /// `bond_length`. Pure: repeated calls return identical sequences.
    #[must_use]
    pub fn calculate_coordinates(&self, bond_length: f64) -> Vec<Coordinate> {
        let mut coordinates = Vec::with_capacity(self.residues.len() + 1);
        let mut position = Coordinate::ZERO;
        coordinates.push(position);
        for residue in &self.residues {
            position += residue.direction() * bond_length;
            coordinates.push(position);
        }
        coordinates
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn lengths_follow_residue_count() {
        let mut rng = seeded(1);
        for count in [1, 2, 17, 1000] {
            let chain = Chain::generate_with_rng(
                ChainParams::new(count, 20.0),
                &mut rng,
            );
            assert_eq!(chain.residue_count(), count);
            assert_eq!(chain.residues().len(), count);
            assert_eq!(
                chain.calculate_coordinates(DEFAULT_BOND_LENGTH).len(),
                count + 1
            );
        }
    }

    #[test]
    fn unspecified_count_is_between_one_and_hundred() {
        let mut rng = seeded(2);
        for _ in 0..200 {
            let chain =
                Chain::generate_with_rng(ChainParams::default(), &mut rng);
            assert!((1..=MAX_RANDOM_RESIDUE_COUNT)
                .contains(&chain.residue_count()));
            assert_eq!(chain.angle_resolution(), 20);
        }
    }

    #[test]
    fn zero_count_is_raised_to_one() {
        let chain =
            Chain::generate_with_rng(ChainParams::new(0, 20.0), &mut seeded(3));
        assert_eq!(chain.residue_count(), 1);
    }

    #[test]
    fn resolution_is_floored_and_clamped() {
        assert_eq!(normalize_resolution(20.9), 20);
        assert_eq!(normalize_resolution(4.0), 4);
        assert_eq!(normalize_resolution(3.99), 4);
        assert_eq!(normalize_resolution(-12.0), 4);
        assert_eq!(normalize_resolution(f64::NAN), 4);
        assert_eq!(normalize_resolution(f64::INFINITY), 4);
        let chain = Chain::from_steps(1.0, &[(1, 1)]);
        assert_eq!(chain.angle_resolution(), MIN_ANGLE_RESOLUTION);
    }

    #[test]
    fn explicit_chain_is_never_empty() {
        let chain = Chain::from_steps(20.0, &[]);
        assert_eq!(chain.residue_count(), 1);
        assert_eq!(chain.calculate_coordinates(3.0).len(), 2);

        let clamped = Chain::from_steps(8.0, &[(0, 9)]);
        let residue = clamped.residue(0).unwrap();
        assert_eq!((residue.theta_steps(), residue.phi_steps()), (1, 8));
    }

    #[test]
    fn residue_indices_are_sequential() {
        let chain =
            Chain::generate_with_rng(ChainParams::new(30, 8.0), &mut seeded(4));
        for (i, residue) in chain.residues().iter().enumerate() {
            assert_eq!(residue.index(), i);
            assert!(residue.theta() > 0.0 && residue.theta() <= PI);
            assert!(residue.phi() > 0.0 && residue.phi() <= 2.0 * PI);
        }
    }

    #[test]
    fn consecutive_coordinates_are_one_bond_apart() {
        let chain = Chain::generate_with_rng(
            ChainParams::new(250, 300.0),
            &mut seeded(5),
        );
        for bond in [DEFAULT_BOND_LENGTH, 1.5] {
            let coords = chain.calculate_coordinates(bond);
            assert_eq!(coords[0], Coordinate::ZERO);
            for pair in coords.windows(2) {
                assert!((pair[0].distance(pair[1]) - bond).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn coordinates_are_idempotent() {
        let params = ChainParams::new(64, 20.0);
        let chain = Chain::generate_with_rng(params, &mut seeded(6));
        assert_eq!(
            chain.calculate_coordinates(3.0),
            chain.calculate_coordinates(3.0)
        );
    }

    #[test]
    fn same_seed_same_chain() {
        let params = ChainParams::new(40, 50.0);
        let a = Chain::generate_with_rng(params, &mut seeded(7));
        let b = Chain::generate_with_rng(params, &mut seeded(7));
        assert_eq!(a, b);
    }

    #[test]
    fn explicit_steps_give_hand_computed_coordinates() {
        let chain = Chain::from_steps(20.0, &[(5, 5), (10, 10), (15, 15)]);
        assert_eq!(chain.residue_count(), 3);

        // theta = k/20·π, phi = k/20·2π for k = 5, 10, 15.
        let expected_dirs = [
            // θ = π/4, φ = π/2
            DVec3::new(0.0, (PI / 4.0).sin(), (PI / 4.0).cos()),
            // θ = π/2, φ = π
            DVec3::new(-1.0, 0.0, 0.0),
            // θ = 3π/4, φ = 3π/2
            DVec3::new(0.0, -(3.0 * PI / 4.0).sin(), (3.0 * PI / 4.0).cos()),
        ];

        let coords = chain.calculate_coordinates(3.0);
        assert_eq!(coords.len(), 4);
        let mut expected = DVec3::ZERO;
        for (i, dir) in expected_dirs.iter().enumerate() {
            expected += *dir * 3.0;
            assert!(
                (coords[i + 1] - expected).length() < 1e-12,
                "point {}: {:?} vs {:?}",
                i + 1,
                coords[i + 1],
                expected
            );
        }
        // The y and z contributions cancel.
        assert!((coords[3] - DVec3::new(-3.0, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn residue_lookup_is_bounds_checked() {
        let chain = Chain::from_steps(20.0, &[(1, 1), (2, 2)]);
        assert!(chain.residue(1).is_some());
        assert!(chain.residue(2).is_none());
    }
}
