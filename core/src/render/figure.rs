use crate::prelude::{SignalError, SignalResult};
use serde::{Deserialize, Serialize};

/// Figure layout handed to the sink alongside the samples.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FigureConfig {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: u32,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width_in: 20.0,
            height_in: 6.0,
            dpi: 80,
        }
    }
}

impl FigureConfig {
    /// Canvas size in pixels, `(width, height)`.
    pub fn pixel_size(&self) -> (f32, f32) {
        (
            self.width_in * self.dpi as f32,
            self.height_in * self.dpi as f32,
        )
    }

    pub fn validate(&self) -> SignalResult<()> {
        let valid_dimension = |value: f32| value.is_finite() && value > 0.0;
        if !valid_dimension(self.width_in) || !valid_dimension(self.height_in) {
            return Err(SignalError::Sink(format!(
                "figure dimensions must be positive, got {}x{} in",
                self.width_in, self.height_in
            )));
        }
        if self.dpi == 0 {
            return Err(SignalError::Sink("figure dpi must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_figure_is_wide_strip() {
        let figure = FigureConfig::default();
        assert_eq!(figure.pixel_size(), (1600.0, 480.0));
        assert!(figure.validate().is_ok());
    }

    #[test]
    fn degenerate_figures_are_rejected() {
        let flat = FigureConfig {
            height_in: 0.0,
            ..Default::default()
        };
        assert!(flat.validate().is_err());

        let no_dpi = FigureConfig {
            dpi: 0,
            ..Default::default()
        };
        assert!(no_dpi.validate().is_err());
    }
}
