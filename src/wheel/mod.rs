pub(crate) mod model;
pub(crate) mod spin;

pub use model::WheelModel;
pub use spin::{SpinController, SpinOutcome};

use serde::{Deserialize, Serialize};

/// Longest name drawn on a segment before truncation kicks in.
const MAX_LABEL_CHARS: usize = 13;
const TRUNCATED_LABEL_CHARS: usize = 10;

/// One selectable segment on the wheel. Immutable once placed; the segment's
/// position in the option sequence is its identity for angle mapping.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WheelOption {
    pub name: String,
    /// Detail page URL for the place behind this segment
    pub link: String,
}

impl WheelOption {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }

    /// Label drawn on the segment: placeholder while the wheel has no real
    /// candidates yet, truncated when the name would overflow the slice.
    pub fn display_label(&self) -> String {
        if self.name.is_empty() {
            return "Loading...".to_string();
        }
        if self.name.chars().count() > MAX_LABEL_CHARS {
            let short: String = self.name.chars().take(TRUNCATED_LABEL_CHARS).collect();
            format!("{short}...")
        } else {
            self.name.clone()
        }
    }
}

/// Rendering collaborator, redrawn once per animation tick. The engine never
/// consumes a return value from the surface.
pub trait RenderSurface {
    fn render(&mut self, wheel: &WheelModel);
}

/// Surface that drops every frame, for headless runs.
pub struct NullRenderSurface;

impl RenderSurface for NullRenderSurface {
    fn render(&mut self, _wheel: &WheelModel) {}
}
