//! Options management for ChainEngine

use std::path::Path;

use super::ChainEngine;
use crate::options::{ChainOptions, Options};
use crate::renderer::ChainRenderer;

impl ChainEngine {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace all options.
    ///
    /// Camera speeds, colors, and the viewport apply immediately and the
    /// current view is kept. Chain parameters take effect on the next
    /// regeneration, except the bond length, which re-integrates the
    /// current chain's coordinates.
    pub fn set_options(&mut self, options: Options) {
        let bond_changed =
            options.chain.bond_length != self.options.chain.bond_length;
        self.camera.set_options(options.camera.clone());
        self.renderer =
            ChainRenderer::new(options.colors.clone(), options.viewport);
        self.options = options;
        if bond_changed {
            self.refresh_coordinates();
        }
    }

    /// Update the parameters used by the next regeneration (the count and
    /// resolution sliders).
    pub fn set_chain_options(&mut self, chain: ChainOptions) {
        let options = Options {
            chain,
            ..self.options.clone()
        };
        self.set_options(options);
    }

    /// Load a named preset (`<dir>/<name>.toml`). Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(opts) => {
                log::info!("Loaded view preset '{name}'");
                self.set_options(opts);
                true
            }
            Err(e) => {
                log::error!("Failed to load view preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset. Returns true on success.
    pub fn save_preset(&self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved view preset '{name}'");
                true
            }
            Err(e) => {
                log::error!("Failed to save view preset '{name}': {e}");
                false
            }
        }
    }
}
