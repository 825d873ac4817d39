use crate::config::RenderConfig;
use crate::integrator::Shading;
use crate::scene::SceneKind;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SceneArg {
    Single,
    Materials,
    Field,
}

impl From<SceneArg> for SceneKind {
    fn from(scene: SceneArg) -> Self {
        match scene {
            SceneArg::Single => SceneKind::Single,
            SceneArg::Materials => SceneKind::Materials,
            SceneArg::Field => SceneKind::Field,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ShadingArg {
    Path,
    Normals,
}

impl From<ShadingArg> for Shading {
    fn from(shading: ShadingArg) -> Self {
        match shading {
            ShadingArg::Path => Shading::Path,
            ShadingArg::Normals => Shading::Normals,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "pinhole_tracer")]
#[command(about = "Render a sphere scene to a plain PPM image")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    /// Width divided by height
    #[arg(long, default_value_t = 16.0 / 9.0)]
    pub aspect_ratio: f64,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 100)]
    pub samples_per_pixel: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = 50)]
    pub max_depth: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    pub vfov: f64,

    /// Distance from the eye to the viewport
    #[arg(long, default_value_t = 1.0)]
    pub focal_length: f64,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value = "materials")]
    pub scene: SceneArg,

    #[arg(long, value_enum, default_value = "path")]
    pub shading: ShadingArg,

    /// Output file; the image goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,
}

impl Args {
    pub fn to_config(&self) -> RenderConfig {
        RenderConfig {
            image_width: self.width,
            aspect_ratio: self.aspect_ratio,
            samples_per_pixel: self.samples_per_pixel,
            max_depth: self.max_depth,
            vfov: self.vfov,
            focal_length: self.focal_length,
            seed: self.seed,
            shading: self.shading.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_render_config() {
        let args = Args::try_parse_from(["pinhole_tracer"]).unwrap();
        assert_eq!(args.to_config(), RenderConfig::default());
        assert_eq!(SceneKind::from(args.scene), SceneKind::Materials);
        assert!(args.output.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "pinhole_tracer",
            "--width",
            "64",
            "-s",
            "4",
            "--max-depth",
            "8",
            "--seed",
            "17",
            "--scene",
            "field",
            "--shading",
            "normals",
            "-o",
            "out.ppm",
        ])
        .unwrap();
        let config = args.to_config();

        assert_eq!(config.image_width, 64);
        assert_eq!(config.samples_per_pixel, 4);
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.seed, Some(17));
        assert_eq!(config.shading, Shading::Normals);
        assert_eq!(SceneKind::from(args.scene), SceneKind::Field);
        assert_eq!(args.output, Some(PathBuf::from("out.ppm")));
    }

    #[test]
    fn rejects_unknown_scene() {
        assert!(Args::try_parse_from(["pinhole_tracer", "--scene", "teapot"]).is_err());
    }
}
