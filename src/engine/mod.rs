//! The chain viewing engine.
//!
//! [`ChainEngine`] owns the current [`Chain`] and its coordinates, the
//! camera, the pointer state machine, and the renderer. Hosts feed it
//! input events (or [`ViewCommand`]s directly) and ask it to render onto
//! their [`DrawSurface`] whenever it reports a change.

/// Interactive command vocabulary.
pub mod command;
mod input;
mod options;

pub use command::ViewCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera::{CameraController, CameraState, Projection};
use crate::chain::{Chain, Coordinate};
use crate::input::InputProcessor;
use crate::options::Options;
use crate::renderer::{ChainRenderer, DrawSurface};

/// Owns a generated chain and everything needed to view it interactively.
pub struct ChainEngine {
    options: Options,
    chain: Chain,
    coordinates: Vec<Coordinate>,
    camera: CameraController,
    input: InputProcessor,
    renderer: ChainRenderer,
    rng: StdRng,
}

impl ChainEngine {
    /// Engine with an OS-seeded random source and a freshly generated chain.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::with_rng(options, StdRng::from_os_rng())
    }

    /// Engine whose chain generation is reproducible from `seed`.
    #[must_use]
    pub fn with_seed(options: Options, seed: u64) -> Self {
        Self::with_rng(options, StdRng::seed_from_u64(seed))
    }

    /// Engine drawing all randomness from `rng`.
    #[must_use]
    pub fn with_rng(options: Options, mut rng: StdRng) -> Self {
        let chain = Chain::generate_with_rng(options.chain.params(), &mut rng);
        let mut engine = Self::assemble(options, chain, rng);
        engine.refresh_coordinates();
        engine
    }

    /// Engine showing an existing chain.
    #[must_use]
    pub fn with_chain(options: Options, chain: Chain) -> Self {
        let mut engine = Self::assemble(options, chain, StdRng::from_os_rng());
        engine.refresh_coordinates();
        engine
    }

    fn assemble(options: Options, chain: Chain, rng: StdRng) -> Self {
        Self {
            camera: CameraController::new(options.camera.clone()),
            input: InputProcessor::new(),
            renderer: ChainRenderer::new(
                options.colors.clone(),
                options.viewport,
            ),
            coordinates: Vec::new(),
            options,
            chain,
            rng,
        }
    }

    /// Build a new chain from the current chain options. The camera view
    /// is kept.
    pub fn regenerate(&mut self) {
        let params = self.options.chain.params();
        self.chain = Chain::generate_with_rng(params, &mut self.rng);
        self.refresh_coordinates();
    }

    /// Replace the displayed chain.
    pub fn set_chain(&mut self, chain: Chain) {
        self.chain = chain;
        self.refresh_coordinates();
    }

    fn refresh_coordinates(&mut self) {
        self.coordinates = self
            .chain
            .calculate_coordinates(self.options.chain.bond_length);
    }

    /// Displayed chain.
    #[must_use]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Absolute coordinates of the displayed chain (origin first).
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Current view transform.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.camera.state
    }

    /// Project every coordinate with the current camera.
    #[must_use]
    pub fn project(&self) -> Projection {
        let projection = self
            .camera
            .projector(&self.options.viewport)
            .project_all(&self.coordinates);
        if projection.degenerate > 0 {
            log::warn!(
                "{} point(s) on the camera plane; using fallback scale",
                projection.degenerate
            );
        }
        projection
    }

    /// Reproject and redraw the whole chain onto `surface`.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let projection = self.project();
        self.renderer
            .render(surface, &projection.points, &self.chain);
    }
}
