use crate::frame::HandlerParams;
use crate::grid::{AssemblyParams, GridSpec};
use crate::types::Circle;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Detections to feed the handler with, in frame pixel coordinates.
    #[serde(default)]
    pub circles: Vec<Circle>,
    #[serde(default)]
    pub grid: GridConfig,
    pub output: DemoOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub columns: usize,
    pub rows: usize,
    pub reserve_last_column: bool,
    pub line_thickness: u32,
    pub show_labels: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        let spec = GridSpec::default();
        let assembly = AssemblyParams::default();
        Self {
            columns: spec.columns,
            rows: spec.rows,
            reserve_last_column: spec.reserve_last_column,
            line_thickness: assembly.line_thickness,
            show_labels: assembly.show_labels,
        }
    }
}

impl GridConfig {
    pub fn resolve(&self) -> HandlerParams {
        HandlerParams {
            grid: GridSpec {
                columns: self.columns,
                rows: self.rows,
                reserve_last_column: self.reserve_last_column,
            },
            assembly: AssemblyParams {
                line_thickness: self.line_thickness,
                show_labels: self.show_labels,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DemoOutputConfig {
    #[serde(rename = "live_image")]
    pub live_image: PathBuf,
    #[serde(rename = "grid_image")]
    pub grid_image: PathBuf,
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<DemoConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(
            r#"{
                "input": "coins.png",
                "output": {
                    "live_image": "out/live.png",
                    "grid_image": "out/grid.png",
                    "report_json": "out/report.json"
                }
            }"#,
        )
        .unwrap();
        assert!(cfg.circles.is_empty());
        let params = cfg.grid.resolve();
        assert_eq!(params.grid, GridSpec::default());
        assert_eq!(params.assembly.line_thickness, 3);
    }

    #[test]
    fn circles_and_grid_overrides_are_read() {
        let cfg = parse_config(
            r#"{
                "input": "coins.png",
                "circles": [{ "x": 10.0, "y": 20.5, "radius": 7.0 }],
                "grid": { "columns": 4, "rows": 4, "reserve_last_column": false },
                "output": {
                    "live_image": "a.png",
                    "grid_image": "b.png",
                    "report_json": "c.json"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.circles, vec![Circle::new(10.0, 20.5, 7.0)]);
        assert_eq!(cfg.grid.resolve().grid, GridSpec::square(4));
        assert!(cfg.grid.show_labels);
    }

    #[test]
    fn missing_config_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/coin_demo.json")).unwrap_err();
        assert!(err.contains("/nonexistent/coin_demo.json"));
    }
}
