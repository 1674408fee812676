// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The seam between a sketch and whatever drives it.
//!
//! A [`Sketch`] owns a retained scene and a panel schema, applies config
//! updates to its own state, and advances its animation as a pure function
//! of total elapsed seconds. The driver (the headless runner here, a real
//! renderer elsewhere) owns the clock, the event bus, and the frame loop.

use atelier_core::event::EventBus;
use atelier_core::Clock;
use atelier_scene::{RendererSettings, Scene, ViewportSize};
use rand::RngCore;

use crate::panel::{ConfigUpdate, PanelError, PanelSchema};

/// One self-contained scene demo.
pub trait Sketch {
    /// The name the runner selects this sketch by.
    fn name(&self) -> &'static str;

    /// The retained scene a renderer would draw.
    fn scene(&self) -> &Scene;

    /// The control surface this sketch exposes. Empty for panel-less sketches.
    fn panel_schema(&self) -> &PanelSchema;

    /// The renderer configuration this sketch wants up front.
    fn renderer_settings(&self) -> RendererSettings {
        RendererSettings::default()
    }

    /// Applies one panel update to the sketch's state.
    fn apply(&mut self, update: &ConfigUpdate) -> Result<(), PanelError>;

    /// Advances the animation to `elapsed_secs` seconds since start.
    ///
    /// Steps are keyed on total elapsed time, not deltas, so stepping to
    /// the same instant twice leaves the scene in the same state. The rng
    /// feeds the few effects that want per-frame noise (flicker) and any
    /// planting deferred from [`Sketch::apply`].
    fn step(&mut self, elapsed_secs: f32, rng: &mut dyn RngCore);

    /// Reacts to a viewport resize by updating the camera's aspect ratio.
    fn resize(&mut self, size: ViewportSize);
}

/// Drives a sketch for a fixed number of frames.
///
/// Each frame drains the pending config updates, applies them (logging and
/// skipping any the panel rejects), ticks the clock, and steps the sketch.
/// Returns the number of updates that applied cleanly.
pub fn run(
    sketch: &mut dyn Sketch,
    bus: &EventBus<ConfigUpdate>,
    frames: u32,
    rng: &mut dyn RngCore,
) -> usize {
    let mut clock = Clock::new();
    let mut applied = 0;

    log::info!("Running sketch '{}' for {frames} frames.", sketch.name());
    for frame in 0..frames {
        for update in bus.drain() {
            match sketch.apply(&update) {
                Ok(()) => applied += 1,
                Err(error) => {
                    log::warn!("Sketch '{}' rejected an update: {error}", sketch.name());
                }
            }
        }

        let elapsed = clock.tick();
        sketch.step(elapsed, rng);
        log::debug!(
            "Frame {frame}: t = {elapsed:.3}s, delta = {:.4}s, {} objects.",
            clock.delta_secs(),
            sketch.scene().object_count()
        );
    }
    applied
}
