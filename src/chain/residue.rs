//! A single residue: one bond direction expressed as two quantized
//! spherical angles.

use std::f64::consts::PI;

use glam::DVec3;
use rand::Rng;

use super::palette::PALETTE_LEN;

/// One element of a generated chain.
///
/// The polar angle is `theta_steps / resolution · π` and the azimuthal
/// angle is `phi_steps / resolution · 2π`, so with steps in
/// `1..=resolution` the angles lie in `(0, π]` and `(0, 2π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residue {
    index: usize,
    theta_steps: u32,
    phi_steps: u32,
    theta: f64,
    phi: f64,
}

impl Residue {
    /// Build a residue from explicit angle steps.
    ///
    /// Steps are clamped into `1..=resolution` so the angles stay within
    /// `(0, π]` and `(0, 2π]`.
    #[must_use]
    pub fn with_steps(
        index: usize,
        theta_steps: u32,
        phi_steps: u32,
        resolution: u32,
    ) -> Self {
        let max_steps = resolution.max(1);
        let theta_steps = theta_steps.clamp(1, max_steps);
        let phi_steps = phi_steps.clamp(1, max_steps);
        let resolution = f64::from(max_steps);
        Self {
            index,
            theta_steps,
            phi_steps,
            theta: f64::from(theta_steps) / resolution * PI,
            phi: f64::from(phi_steps) / resolution * 2.0 * PI,
        }
    }

    /// Build a residue with both steps drawn uniformly from
    /// `1..=resolution`.
    pub fn random<R: Rng + ?Sized>(
        index: usize,
        resolution: u32,
        rng: &mut R,
    ) -> Self {
        let theta_steps = rng.random_range(1..=resolution);
        let phi_steps = rng.random_range(1..=resolution);
        Self::with_steps(index, theta_steps, phi_steps, resolution)
    }

    /// Position of this residue in its chain.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Palette slot: `index mod 7`.
    #[must_use]
    pub fn color_tag(&self) -> usize {
        self.index % PALETTE_LEN
    }

    /// Quantized polar step.
    #[must_use]
    pub fn theta_steps(&self) -> u32 {
        self.theta_steps
    }

    /// Quantized azimuthal step.
    #[must_use]
    pub fn phi_steps(&self) -> u32 {
        self.phi_steps
    }

    /// Polar angle in radians.
    #[must_use]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Azimuthal angle in radians.
    #[must_use]
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Unit bond direction from the spherical angles.
    #[must_use]
    pub fn direction(&self) -> DVec3 {
        DVec3::new(
            self.theta.sin() * self.phi.cos(),
            self.theta.sin() * self.phi.sin(),
            self.theta.cos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn explicit_steps_map_to_angles() {
        let r = Residue::with_steps(3, 5, 10, 20);
        assert_eq!(r.theta(), 5.0 / 20.0 * PI);
        assert_eq!(r.phi(), 10.0 / 20.0 * 2.0 * PI);
        assert_eq!(r.theta_steps(), 5);
        assert_eq!(r.phi_steps(), 10);
    }

    #[test]
    fn full_steps_reach_upper_bounds() {
        let r = Residue::with_steps(0, 20, 20, 20);
        assert_eq!(r.theta(), PI);
        assert_eq!(r.phi(), 2.0 * PI);
        let d = r.direction();
        assert!((d - DVec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn out_of_range_steps_are_clamped() {
        let low = Residue::with_steps(0, 0, 0, 20);
        assert_eq!((low.theta_steps(), low.phi_steps()), (1, 1));
        assert!(low.theta() > 0.0 && low.phi() > 0.0);

        let high = Residue::with_steps(0, 21, 500, 20);
        assert_eq!((high.theta_steps(), high.phi_steps()), (20, 20));
        assert_eq!(high.theta(), PI);
        assert_eq!(high.phi(), 2.0 * PI);
    }

    #[test]
    fn color_tag_cycles() {
        assert_eq!(Residue::with_steps(0, 1, 1, 4).color_tag(), 0);
        assert_eq!(Residue::with_steps(6, 1, 1, 4).color_tag(), 6);
        assert_eq!(Residue::with_steps(7, 1, 1, 4).color_tag(), 0);
        assert_eq!(Residue::with_steps(22, 1, 1, 4).color_tag(), 1);
    }

    #[test]
    fn random_steps_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(0xC4A1);
        for i in 0..2_000 {
            let r = Residue::random(i, 4, &mut rng);
            assert!((1..=4).contains(&r.theta_steps()));
            assert!((1..=4).contains(&r.phi_steps()));
            assert!(r.theta() > 0.0 && r.theta() <= PI);
            assert!(r.phi() > 0.0 && r.phi() <= 2.0 * PI);
        }
    }

    #[test]
    fn direction_is_unit_length() {
        let mut rng = StdRng::seed_from_u64(11);
        for i in 0..500 {
            let d = Residue::random(i, 300, &mut rng).direction();
            assert!((d.length() - 1.0).abs() < 1e-12);
        }
    }
}
