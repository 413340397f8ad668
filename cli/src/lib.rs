use sprite_split::{DirectorySink, Pipeline, PixelGrid, SplitConfig, SplitError, SplitReport, Strategy};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

/// Source image used when none is given on the command line
pub const DEFAULT_SOURCE: &str = "../public/img/icon/139899.png";
/// Base output directory used when none is given on the command line
pub const DEFAULT_OUTPUT_DIR: &str = "output_icons";
/// Report file written into each output directory when requested
pub const REPORT_FILE: &str = "report.json";

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Split(#[from] SplitError),
    #[error("Unsupported file format. Please use .toml or .json files")]
    UnsupportedFileFormat,
}

/// Load a configuration from TOML string
pub fn config_from_toml(content: &str) -> Result<SplitConfig, CliError> {
    let config: SplitConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load a configuration from JSON string
pub fn config_from_json(content: &str) -> Result<SplitConfig, CliError> {
    let config: SplitConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Auto-detect file format and load configuration
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SplitConfig, CliError> {
    let path_ref = path.as_ref();
    match path_ref.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => config_from_toml(&fs::read_to_string(path_ref)?),
        Some("json") => config_from_json(&fs::read_to_string(path_ref)?),
        _ => Err(CliError::UnsupportedFileFormat),
    }
}

/// A single strategy run and the directory its crops go to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRun {
    pub strategy: Strategy,
    pub output_dir: PathBuf,
}

/// `base` with `suffix` appended to its final component
pub fn suffixed_dir(base: &Path, suffix: &str) -> PathBuf {
    let mut dir = base.as_os_str().to_owned();
    dir.push(suffix);
    PathBuf::from(dir)
}

/// Without an explicit strategy, run grid then auto into suffixed
/// directories; otherwise run the chosen strategy straight into `output_dir`.
pub fn plan_runs(strategy: Option<Strategy>, output_dir: &Path) -> Vec<PlannedRun> {
    match strategy {
        Some(strategy) => vec![PlannedRun {
            strategy,
            output_dir: output_dir.to_path_buf(),
        }],
        None => [Strategy::Grid, Strategy::Auto]
            .into_iter()
            .map(|strategy| PlannedRun {
                strategy,
                output_dir: suffixed_dir(output_dir, strategy.dir_suffix()),
            })
            .collect(),
    }
}

/// Decode `source` and run one strategy, saving crops into the planned directory.
///
/// The output directory is only created once the source has decoded.
pub fn execute_run(
    source: &Path,
    run: &PlannedRun,
    config: &SplitConfig,
    write_report: bool,
) -> Result<SplitReport, CliError> {
    let grid = PixelGrid::open(source)?;
    let mut sink = DirectorySink::create(&run.output_dir)?;

    let pipeline = Pipeline::builder()
        .strategy(run.strategy)
        .config(config.clone())
        .build()?;
    let report = pipeline.run(&grid, &mut sink)?;

    if write_report {
        let report_path = run.output_dir.join(REPORT_FILE);
        report.save_json(&report_path)?;
        info!("Report saved to: {:?}", report_path);
    }

    info!(
        "Done! Extracted {} icons into {:?}",
        report.count(),
        run.output_dir
    );
    Ok(report)
}

/// Run every planned strategy in turn, returning the icon count of each.
///
/// A failing run is logged and counted as 0; later runs still go ahead.
pub fn run_all(
    source: &Path,
    runs: &[PlannedRun],
    config: &SplitConfig,
    write_report: bool,
) -> Vec<(Strategy, usize)> {
    runs.iter()
        .map(|run| {
            info!("Strategy: {}", run.strategy.description());
            let count = match execute_run(source, run, config, write_report) {
                Ok(report) => report.count(),
                Err(e) => {
                    error!("Strategy '{}' failed: {}", run.strategy, e);
                    0
                }
            };
            (run.strategy, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_sheet(path: &Path) {
        let mut img = RgbaImage::new(50, 24);
        for y in 0..24 {
            for x in 23..27 {
                img.put_pixel(x, y, Rgba([0, 0, 255, 255]));
            }
        }
        for y in 2..22 {
            for x in 2..22 {
                img.put_pixel(x, y, Rgba([250, 120, 0, 255]));
                img.put_pixel(x + 26, y, Rgba([20, 220, 120, 255]));
            }
        }
        img.save(path).unwrap();
    }

    #[test]
    fn test_plan_without_strategy_runs_grid_and_auto() {
        let runs = plan_runs(None, Path::new("out/icons"));
        assert_eq!(
            runs,
            vec![
                PlannedRun { strategy: Strategy::Grid, output_dir: PathBuf::from("out/icons_grid") },
                PlannedRun { strategy: Strategy::Auto, output_dir: PathBuf::from("out/icons_auto") },
            ]
        );
    }

    #[test]
    fn test_plan_with_strategy_uses_dir_as_is() {
        let runs = plan_runs(Some(Strategy::Simple), Path::new("icons"));
        assert_eq!(
            runs,
            vec![PlannedRun { strategy: Strategy::Simple, output_dir: PathBuf::from("icons") }]
        );
    }

    #[test]
    fn test_load_config_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("split.toml");
        fs::write(&toml_path, "padding = 4\nmax_gap = 2\n\n[classifier]\nalpha_floor = 128\n").unwrap();
        let config = load_config(&toml_path).unwrap();
        assert_eq!(config.padding, 4);
        assert_eq!(config.max_gap, 2);
        assert_eq!(config.classifier.alpha_floor, 128);
        assert_eq!(config.classifier.blue_threshold, 100);

        let json_path = dir.path().join("split.json");
        fs::write(&json_path, r#"{ "min_width": 16 }"#).unwrap();
        assert_eq!(load_config(&json_path).unwrap().min_width, 16);

        let yaml_path = dir.path().join("split.yaml");
        fs::write(&yaml_path, "padding: 1").unwrap();
        assert!(matches!(load_config(&yaml_path), Err(CliError::UnsupportedFileFormat)));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(matches!(
            config_from_json(r#"{ "max_gutter_fraction": 2.0 }"#),
            Err(CliError::Split(SplitError::Config(_)))
        ));
    }

    #[test]
    fn test_execute_run_writes_crops_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("sheet.png");
        write_sheet(&source);

        let run = PlannedRun {
            strategy: Strategy::Grid,
            output_dir: dir.path().join("out").join("icons_grid"),
        };
        let report = execute_run(&source, &run, &SplitConfig::default(), true).unwrap();

        assert_eq!(report.count(), 2);
        assert!(run.output_dir.join("icon_001.png").exists());
        assert!(run.output_dir.join("icon_002.png").exists());
        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(run.output_dir.join(REPORT_FILE)).unwrap()).unwrap();
        assert_eq!(saved["strategy"], "grid");
    }

    #[test]
    fn test_missing_source_creates_no_directory() {
        let dir = tempfile::tempdir().unwrap();
        let run = PlannedRun {
            strategy: Strategy::Auto,
            output_dir: dir.path().join("icons_auto"),
        };
        let err = execute_run(&dir.path().join("nope.png"), &run, &SplitConfig::default(), false).unwrap_err();

        assert!(matches!(err, CliError::Split(SplitError::MissingSource(_))));
        assert!(!run.output_dir.exists());
    }

    #[test]
    fn test_undecodable_source_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("broken.png");
        fs::write(&source, b"not a png").unwrap();
        let run = PlannedRun {
            strategy: Strategy::Grid,
            output_dir: dir.path().join("icons_grid"),
        };

        let err = execute_run(&source, &run, &SplitConfig::default(), false).unwrap_err();
        assert!(matches!(err, CliError::Split(SplitError::Decode { .. })));
        assert!(!run.output_dir.exists());
    }

    #[test]
    fn test_run_all_counts_failed_strategies_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("bad.png");
        fs::write(&source, b"junk").unwrap();
        let base = dir.path().join("bad");
        let runs = plan_runs(None, &base);

        let counts = run_all(&source, &runs, &SplitConfig::default(), false);

        assert_eq!(counts, vec![(Strategy::Grid, 0), (Strategy::Auto, 0)]);
        assert!(!suffixed_dir(&base, "_grid").exists());
        assert!(!suffixed_dir(&base, "_auto").exists());
    }

    #[test]
    fn test_run_all_runs_both_strategies() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("sheet.png");
        write_sheet(&source);
        let base = dir.path().join("icons");

        let counts = run_all(&source, &plan_runs(None, &base), &SplitConfig::default(), false);

        assert_eq!(counts, vec![(Strategy::Grid, 2), (Strategy::Auto, 2)]);
        assert!(suffixed_dir(&base, "_grid").join("icon_002.png").exists());
        assert!(suffixed_dir(&base, "_auto").join("icon_002.png").exists());
    }
}
