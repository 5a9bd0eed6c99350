// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Procedural 3D residue chains with an interactive perspective viewer.
//!
//! A random chain of residues is grown from the origin, one fixed-length
//! bond per residue, with each bond direction chosen from quantized
//! spherical angles. The chain is viewed through a pan/rotate/zoom camera
//! and drawn as colored segments and depth-scaled points on any 2D
//! surface.
//!
//! # Key entry points
//!
//! - [`chain::Chain`] - chain generation and coordinate integration
//! - [`camera::Projector`] - perspective projection to surface coordinates
//! - [`renderer::ChainRenderer`] - back-to-front segment/point drawing
//! - [`input::InputProcessor`] - pointer/wheel drag state machine
//! - [`engine::ChainEngine`] - ties everything together for a host
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Example
//!
//! ```
//! use chainview::engine::ChainEngine;
//! use chainview::input::InputEvent;
//! use chainview::options::Options;
//! use chainview::renderer::svg::SvgSurface;
//!
//! let mut engine = ChainEngine::with_seed(Options::default(), 7);
//! let _ = engine.handle_input(InputEvent::Wheel { delta: -1.0 });
//!
//! let mut svg = SvgSurface::new(600.0, 500.0);
//! engine.render(&mut svg);
//! assert!(svg.to_document().contains("<circle"));
//! ```

pub mod camera;
pub mod chain;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod renderer;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{ChainEngine, ViewCommand};
pub use error::ChainViewError;
pub use input::InputEvent;
