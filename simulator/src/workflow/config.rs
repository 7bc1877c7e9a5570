use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wavecore::{FigureConfig, WaveSpec};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WorkflowConfig {
    #[serde(default)]
    pub wave: WaveSpec,
    #[serde(default)]
    pub figure: FigureConfig,
    #[serde(default)]
    pub label: Option<String>,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        config
            .figure
            .validate()
            .with_context(|| format!("validating figure in {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(wave: WaveSpec, label: Option<String>) -> Self {
        Self {
            wave,
            figure: FigureConfig::default(),
            label,
        }
    }

    /// Explicit label if one was configured, otherwise the wave description.
    pub fn display_label(&self) -> String {
        self.label.clone().unwrap_or_else(|| self.wave.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use wavecore::{CycleParams, TimedWaveParams};

    #[test]
    fn config_from_args_uses_default_figure() {
        let cfg = WorkflowConfig::from_args(WaveSpec::default(), None);
        assert_eq!(cfg.figure.pixel_size(), (1600.0, 480.0));
        assert!(cfg.display_label().starts_with("sine 100 Hz"));
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"wave:\n  mode: cycles\n  cycle_count: 2.5\n  resolution: 256\nfigure:\n  dpi: 100\nlabel: demo\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(
            cfg.wave,
            WaveSpec::Cycles(CycleParams {
                cycle_count: 2.5,
                resolution: 256,
            })
        );
        assert_eq!(cfg.figure.dpi, 100);
        assert_eq!(cfg.figure.width_in, 20.0);
        assert_eq!(cfg.display_label(), "demo");
    }

    #[test]
    fn config_load_defaults_timed_fields() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"wave:\n  mode: timed\n  amplitude: 3.0\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(
            cfg.wave,
            WaveSpec::Timed(TimedWaveParams {
                amplitude: 3.0,
                ..Default::default()
            })
        );
    }

    #[test]
    fn config_load_rejects_degenerate_figure() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"figure:\n  width_in: 0.0\n").unwrap();
        let path = temp.into_temp_path();
        assert!(WorkflowConfig::load(&path).is_err());
    }
}
