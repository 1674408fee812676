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

//! Headless sketch runner.
//!
//! Usage: `atelier <sketch> [frames] [source-text-file]`
//!
//! Selects a sketch by name and drives it for a fixed number of frames
//! without a renderer, which exercises the full construction, panel, and
//! animation paths. The optional file argument feeds the garden sketch its
//! source text and plays the save/visualize workflow before the loop runs.

use std::env;
use std::fs;

use anyhow::{bail, Context, Result};
use atelier_core::event::EventBus;
use atelier_sketches::{
    run, Cave, ConfigUpdate, ControlId, Garden, Knot, Orbiters, Scatter, Sketch,
};

const SKETCH_NAMES: [&str; 5] = ["orbiters", "knot", "cave", "scatter", "garden"];
const DEFAULT_FRAMES: u32 = 300;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(name) = args.first() else {
        eprintln!("Usage: atelier <sketch> [frames] [source-text-file]");
        eprintln!("Available sketches: {}", SKETCH_NAMES.join(", "));
        return Ok(());
    };

    let frames = match args.get(1) {
        Some(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("invalid frame count '{raw}'"))?,
        None => DEFAULT_FRAMES,
    };

    let bus = EventBus::new();
    let mut rng = rand::rng();

    let mut sketch: Box<dyn Sketch> = match name.as_str() {
        "orbiters" => Box::new(Orbiters::new()),
        "knot" => Box::new(Knot::new()),
        "cave" => Box::new(Cave::new()),
        "scatter" => Box::new(Scatter::new(&mut rng)),
        "garden" => {
            let garden = Box::new(Garden::new());
            if let Some(path) = args.get(2) {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("could not read source text from '{path}'"))?;
                bus.publish(ConfigUpdate::text(
                    ControlId::from_static("source_text"),
                    text,
                ));
                bus.publish(ConfigUpdate::press(ControlId::from_static("save_text")));
                bus.publish(ConfigUpdate::press(ControlId::from_static("visualize")));
            }
            garden
        }
        other => bail!(
            "unknown sketch '{other}'; available: {}",
            SKETCH_NAMES.join(", ")
        ),
    };

    let applied = run(sketch.as_mut(), &bus, frames, &mut rng);
    log::info!(
        "Sketch '{}' finished: {} objects in the scene, {applied} updates applied.",
        sketch.name(),
        sketch.scene().object_count()
    );
    Ok(())
}
