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

//! The declarative control panel and its update events.
//!
//! A sketch does not own widgets. It publishes a [`PanelSchema`] describing
//! folders of controls, and a frontend (or a test, or the headless runner)
//! sends [`ConfigUpdate`] events back. The sketch applies each update to its
//! own state; nothing in the panel layer mutates a scene. Applying an update
//! to a control that does not exist, or with a value of the wrong kind, is a
//! typed error rather than a silent no-op.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use atelier_core::math::clamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies one control within a panel.
///
/// Sketch modules declare their ids as constants via [`ControlId::from_static`];
/// preset replay builds owned ids from stored names. Equality is by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControlId(pub Cow<'static, str>);

impl ControlId {
    /// Creates a control id from a static name.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ControlId {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

/// The widget type of a control, together with its current value.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    /// A bounded numeric slider.
    ///
    /// Incoming values are clamped into `[min, max]`; the step is advisory
    /// for the frontend and is not snapped to here.
    Slider {
        /// Lower bound of the range.
        min: f32,
        /// Upper bound of the range.
        max: f32,
        /// Drag increment hint.
        step: f32,
        /// Current value.
        value: f32,
    },
    /// An on/off toggle.
    Checkbox {
        /// Current state.
        value: bool,
    },
    /// A color swatch editing a `#RRGGBB` hex string.
    ColorPicker {
        /// Current hex string.
        value: String,
    },
    /// A free-form text input.
    TextField {
        /// Current text.
        value: String,
    },
    /// A momentary action with no persistent value.
    Button,
}

impl ControlKind {
    /// The value kind this control accepts, for error messages.
    fn accepts(&self) -> &'static str {
        match self {
            Self::Slider { .. } => "scalar",
            Self::Checkbox { .. } => "flag",
            Self::ColorPicker { .. } => "color",
            Self::TextField { .. } => "text",
            Self::Button => "press",
        }
    }
}

/// One labeled control in a folder.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    /// Stable identifier update events address.
    pub id: ControlId,
    /// Human-readable label.
    pub label: String,
    /// Widget type and current value.
    pub kind: ControlKind,
}

impl Control {
    /// A bounded numeric slider.
    pub fn slider(
        id: ControlId,
        label: impl Into<String>,
        min: f32,
        max: f32,
        step: f32,
        value: f32,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            kind: ControlKind::Slider {
                min,
                max,
                step,
                value,
            },
        }
    }

    /// An on/off toggle.
    pub fn checkbox(id: ControlId, label: impl Into<String>, value: bool) -> Self {
        Self {
            id,
            label: label.into(),
            kind: ControlKind::Checkbox { value },
        }
    }

    /// A color swatch initialized with a `#RRGGBB` hex string.
    pub fn color_picker(id: ControlId, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            kind: ControlKind::ColorPicker {
                value: value.into(),
            },
        }
    }

    /// A free-form text input.
    pub fn text_field(id: ControlId, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            kind: ControlKind::TextField {
                value: value.into(),
            },
        }
    }

    /// A momentary action.
    pub fn button(id: ControlId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            kind: ControlKind::Button,
        }
    }
}

/// An ordered group of controls that shows or hides together.
#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    /// Folder heading.
    pub title: String,
    /// Whether the frontend should display the folder.
    pub visible: bool,
    /// Controls in display order.
    pub controls: Vec<Control>,
}

impl Folder {
    /// Creates a visible folder.
    pub fn new(title: impl Into<String>, controls: Vec<Control>) -> Self {
        Self {
            title: title.into(),
            visible: true,
            controls,
        }
    }

    /// Returns this folder hidden, for staged workflows that reveal it later.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// The full control surface a sketch exposes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelSchema {
    /// Folders in display order.
    pub folders: Vec<Folder>,
}

impl PanelSchema {
    /// Creates a schema from folders.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }

    /// Looks up a control anywhere in the panel.
    pub fn control(&self, id: &ControlId) -> Option<&Control> {
        self.folders
            .iter()
            .flat_map(|folder| folder.controls.iter())
            .find(|control| control.id == *id)
    }

    /// Mutable lookup of a control.
    pub fn control_mut(&mut self, id: &ControlId) -> Option<&mut Control> {
        self.folders
            .iter_mut()
            .flat_map(|folder| folder.controls.iter_mut())
            .find(|control| control.id == *id)
    }

    /// Shows or hides a folder by title. Returns `false` for unknown titles.
    pub fn set_folder_visible(&mut self, title: &str, visible: bool) -> bool {
        match self
            .folders
            .iter_mut()
            .find(|folder| folder.title == title)
        {
            Some(folder) => {
                folder.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Writes an incoming value into the addressed control.
    ///
    /// This is the validation gate every sketch routes updates through
    /// before reading them into its own state. Slider values are clamped to
    /// the slider's range. A `Press` on a button validates but stores
    /// nothing.
    pub fn set_value(&mut self, id: &ControlId, value: &ControlValue) -> Result<(), PanelError> {
        let control = self
            .control_mut(id)
            .ok_or_else(|| PanelError::UnknownControl(id.clone()))?;

        match (&mut control.kind, value) {
            (ControlKind::Slider { min, max, value, .. }, ControlValue::Scalar(incoming)) => {
                *value = clamp(*incoming, *min, *max);
            }
            (ControlKind::Checkbox { value }, ControlValue::Flag(incoming)) => {
                *value = *incoming;
            }
            (ControlKind::ColorPicker { value }, ControlValue::Color(incoming)) => {
                *value = incoming.clone();
            }
            (ControlKind::TextField { value }, ControlValue::Text(incoming)) => {
                *value = incoming.clone();
            }
            (ControlKind::Button, ControlValue::Press) => {}
            (kind, mismatched) => {
                return Err(PanelError::WrongValueKind {
                    id: id.clone(),
                    expected: kind.accepts(),
                    got: mismatched.kind_name(),
                });
            }
        }
        Ok(())
    }
}

/// A value carried by a [`ConfigUpdate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControlValue {
    /// A slider position.
    Scalar(f32),
    /// A checkbox state.
    Flag(bool),
    /// A `#RRGGBB` hex string from a color picker.
    Color(String),
    /// Text field contents.
    Text(String),
    /// A button press.
    Press,
}

impl ControlValue {
    /// The kind of this value, for error messages.
    fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Flag(_) => "flag",
            Self::Color(_) => "color",
            Self::Text(_) => "text",
            Self::Press => "press",
        }
    }
}

/// One control change, published on an event bus and applied by a sketch.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigUpdate {
    /// Which control changed.
    pub control: ControlId,
    /// The new value.
    pub value: ControlValue,
}

impl ConfigUpdate {
    /// A slider change.
    pub fn scalar(control: ControlId, value: f32) -> Self {
        Self {
            control,
            value: ControlValue::Scalar(value),
        }
    }

    /// A checkbox change.
    pub fn flag(control: ControlId, value: bool) -> Self {
        Self {
            control,
            value: ControlValue::Flag(value),
        }
    }

    /// A color change.
    pub fn color(control: ControlId, value: impl Into<String>) -> Self {
        Self {
            control,
            value: ControlValue::Color(value.into()),
        }
    }

    /// A text change.
    pub fn text(control: ControlId, value: impl Into<String>) -> Self {
        Self {
            control,
            value: ControlValue::Text(value.into()),
        }
    }

    /// A button press.
    pub fn press(control: ControlId) -> Self {
        Self {
            control,
            value: ControlValue::Press,
        }
    }
}

/// An error applying a [`ConfigUpdate`] to a panel.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PanelError {
    /// The update names a control the panel does not have.
    #[error("no control '{0}' in this panel")]
    UnknownControl(ControlId),

    /// The update's value does not match the control's widget type.
    #[error("control '{id}' expected a {expected} value, got {got}")]
    WrongValueKind {
        /// The addressed control.
        id: ControlId,
        /// The value kind the control accepts.
        expected: &'static str,
        /// The value kind the update carried.
        got: &'static str,
    },
}

/// A snapshot of every value-bearing control, keyed by control name.
///
/// Buttons carry no value and are skipped. The map round-trips through JSON
/// and replays as a sequence of [`ConfigUpdate`] events, so restoring a
/// preset exercises exactly the same path as live edits.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preset {
    /// Control name to captured value.
    pub values: BTreeMap<String, ControlValue>,
}

impl Preset {
    /// Captures the current value of every non-button control.
    pub fn capture(schema: &PanelSchema) -> Self {
        let mut values = BTreeMap::new();
        for folder in &schema.folders {
            for control in &folder.controls {
                let value = match &control.kind {
                    ControlKind::Slider { value, .. } => ControlValue::Scalar(*value),
                    ControlKind::Checkbox { value } => ControlValue::Flag(*value),
                    ControlKind::ColorPicker { value } => ControlValue::Color(value.clone()),
                    ControlKind::TextField { value } => ControlValue::Text(value.clone()),
                    ControlKind::Button => continue,
                };
                values.insert(control.id.as_str().to_owned(), value);
            }
        }
        log::debug!("Captured a panel preset with {} values.", values.len());
        Self { values }
    }

    /// Serializes the preset as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a preset from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The stored values as replayable update events, in name order.
    pub fn updates(&self) -> Vec<ConfigUpdate> {
        self.values
            .iter()
            .map(|(name, value)| ConfigUpdate {
                control: ControlId(Cow::Owned(name.clone())),
                value: value.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: ControlId = ControlId::from_static("speed");
    const WIREFRAME: ControlId = ControlId::from_static("wireframe");
    const TINT: ControlId = ControlId::from_static("tint");
    const CAPTION: ControlId = ControlId::from_static("caption");
    const REPLANT: ControlId = ControlId::from_static("replant");

    fn sample_schema() -> PanelSchema {
        PanelSchema::new(vec![
            Folder::new(
                "Motion",
                vec![
                    Control::slider(SPEED, "Speed", 0.1, 10.0, 0.1, 1.0),
                    Control::checkbox(WIREFRAME, "Toggle Wireframe", true),
                ],
            ),
            Folder::new(
                "Appearance",
                vec![
                    Control::color_picker(TINT, "Tint", "#D72638"),
                    Control::text_field(CAPTION, "Caption", ""),
                    Control::button(REPLANT, "Replant"),
                ],
            )
            .hidden(),
        ])
    }

    #[test]
    fn test_set_slider_value() {
        let mut schema = sample_schema();
        schema.set_value(&SPEED, &ControlValue::Scalar(2.5)).unwrap();
        match schema.control(&SPEED).unwrap().kind {
            ControlKind::Slider { value, .. } => assert_eq!(value, 2.5),
            _ => panic!("Expected a slider"),
        }
    }

    #[test]
    fn test_slider_clamps_to_range() {
        let mut schema = sample_schema();
        schema.set_value(&SPEED, &ControlValue::Scalar(50.0)).unwrap();
        match schema.control(&SPEED).unwrap().kind {
            ControlKind::Slider { value, .. } => assert_eq!(value, 10.0),
            _ => panic!("Expected a slider"),
        }

        schema.set_value(&SPEED, &ControlValue::Scalar(-3.0)).unwrap();
        match schema.control(&SPEED).unwrap().kind {
            ControlKind::Slider { value, .. } => assert_eq!(value, 0.1),
            _ => panic!("Expected a slider"),
        }
    }

    #[test]
    fn test_set_checkbox_color_and_text() {
        let mut schema = sample_schema();
        schema.set_value(&WIREFRAME, &ControlValue::Flag(false)).unwrap();
        schema
            .set_value(&TINT, &ControlValue::Color("#FFFF33".to_owned()))
            .unwrap();
        schema
            .set_value(&CAPTION, &ControlValue::Text("arise".to_owned()))
            .unwrap();

        assert_eq!(
            schema.control(&WIREFRAME).unwrap().kind,
            ControlKind::Checkbox { value: false }
        );
        assert_eq!(
            schema.control(&TINT).unwrap().kind,
            ControlKind::ColorPicker {
                value: "#FFFF33".to_owned()
            }
        );
        assert_eq!(
            schema.control(&CAPTION).unwrap().kind,
            ControlKind::TextField {
                value: "arise".to_owned()
            }
        );
    }

    #[test]
    fn test_button_press_stores_nothing() {
        let mut schema = sample_schema();
        assert_eq!(schema.set_value(&REPLANT, &ControlValue::Press), Ok(()));
        assert_eq!(schema.control(&REPLANT).unwrap().kind, ControlKind::Button);
    }

    #[test]
    fn test_unknown_control() {
        let mut schema = sample_schema();
        let missing = ControlId::from_static("gravity");
        let err = schema
            .set_value(&missing, &ControlValue::Scalar(1.0))
            .unwrap_err();
        assert_eq!(err, PanelError::UnknownControl(missing));
        assert_eq!(format!("{err}"), "no control 'gravity' in this panel");
    }

    #[test]
    fn test_wrong_value_kind() {
        let mut schema = sample_schema();
        let err = schema
            .set_value(&SPEED, &ControlValue::Flag(true))
            .unwrap_err();
        assert_eq!(
            err,
            PanelError::WrongValueKind {
                id: SPEED,
                expected: "scalar",
                got: "flag",
            }
        );
        assert_eq!(
            format!("{err}"),
            "control 'speed' expected a scalar value, got flag"
        );

        // Pressing something that is not a button is the same class of error.
        let err = schema.set_value(&TINT, &ControlValue::Press).unwrap_err();
        assert!(matches!(err, PanelError::WrongValueKind { .. }));
    }

    #[test]
    fn test_folder_visibility() {
        let mut schema = sample_schema();
        assert!(!schema.folders[1].visible);
        assert!(schema.set_folder_visible("Appearance", true));
        assert!(schema.folders[1].visible);
        assert!(!schema.set_folder_visible("Nonexistent", true));
    }

    #[test]
    fn test_preset_capture_skips_buttons() {
        let preset = Preset::capture(&sample_schema());
        assert_eq!(preset.values.len(), 4);
        assert!(!preset.values.contains_key("replant"));
        assert_eq!(preset.values["speed"], ControlValue::Scalar(1.0));
    }

    #[test]
    fn test_preset_json_round_trip() {
        let preset = Preset::capture(&sample_schema());
        let json = preset.to_json().unwrap();
        let restored = Preset::from_json(&json).unwrap();
        assert_eq!(restored, preset);
    }

    #[test]
    fn test_preset_replays_into_schema() {
        let mut edited = sample_schema();
        edited.set_value(&SPEED, &ControlValue::Scalar(7.5)).unwrap();
        edited
            .set_value(&TINT, &ControlValue::Color("#2B65EC".to_owned()))
            .unwrap();
        let preset = Preset::capture(&edited);

        let mut fresh = sample_schema();
        for update in preset.updates() {
            fresh.set_value(&update.control, &update.value).unwrap();
        }
        assert_eq!(Preset::capture(&fresh), preset);
    }
}
