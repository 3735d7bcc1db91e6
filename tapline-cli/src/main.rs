//! # tapline CLI
//!
//! Distance-sweep driver for the tapline fault locator: reads feeder
//! geometry from a GeoJSON file, builds and validates the edge tree, then
//! writes one GeoJSON artifact per sampled distance that produced any
//! fault locations.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use geo::{LineString, MultiLineString, Point};
use geojson::{GeoJson, Geometry, Value};
use log::{error, info};
use tapline_core::prelude::*;

#[derive(Parser)]
#[command(name = "tapline")]
#[command(about = "Locates fault positions along a tapped (branching) feeder line")]
#[command(version)]
struct Cli {
    /// GeoJSON file with the feeder geometry (LineString / MultiLineString)
    input: PathBuf,

    /// Longitude of the reference (source) point
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Latitude of the reference (source) point
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// First sampled distance in meters
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// Last sampled distance in meters (inclusive)
    #[arg(long, default_value_t = 1000.0)]
    end: f64,

    /// Sweep increment in meters
    #[arg(long, default_value_t = 100.0)]
    step: f64,

    /// Directory the per-distance artifacts are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.input)?;
    let geojson: GeoJson = raw
        .parse()
        .map_err(|e: geojson::Error| Error::GeoJsonError(e.to_string()))?;
    let lines = collect_lines(&geojson)?;
    info!(
        "Read {} segment(s) from {}",
        lines.0.len(),
        cli.input.display()
    );

    let reference = Point::new(cli.lon, cli.lat);
    let root = create_tap_network(&lines, reference)?;

    for (distance, locations) in sweep_faults(&root, cli.start, cli.end, cli.step)? {
        if locations.is_empty() {
            info!("No fault locations found for distance: {distance}");
            continue;
        }

        let artifact = fault_locations_to_geojson_string(distance, &locations)?;
        let path = artifact_path(&cli.out_dir, distance);
        info!("Writing {} location(s) to {}", locations.len(), path.display());
        fs::write(path, artifact)?;
    }

    Ok(())
}

/// One artifact per sampled distance. The distance keeps its fractional
/// part ("100.0", not "100") so names line up across sweep runs.
fn artifact_path(out_dir: &Path, distance: f64) -> PathBuf {
    out_dir.join(format!("fault-locations-{distance:?}.geojson"))
}

/// Pulls every line out of the document, whatever container it sits in.
fn collect_lines(geojson: &GeoJson) -> Result<MultiLineString<f64>, Error> {
    let mut lines = Vec::new();

    match geojson {
        GeoJson::Geometry(geometry) => push_lines(geometry, &mut lines)?,
        GeoJson::Feature(feature) => {
            if let Some(geometry) = &feature.geometry {
                push_lines(geometry, &mut lines)?;
            }
        }
        GeoJson::FeatureCollection(collection) => {
            for feature in &collection.features {
                if let Some(geometry) = &feature.geometry {
                    push_lines(geometry, &mut lines)?;
                }
            }
        }
    }

    if lines.is_empty() {
        return Err(Error::InvalidData(
            "input contains no line geometry".to_string(),
        ));
    }

    Ok(MultiLineString::new(lines))
}

fn push_lines(geometry: &Geometry, lines: &mut Vec<LineString<f64>>) -> Result<(), Error> {
    match &geometry.value {
        Value::LineString { .. } => {
            let line = LineString::try_from(geometry.value.clone())
                .map_err(|e| Error::GeoJsonError(e.to_string()))?;
            lines.push(line);
        }
        Value::MultiLineString { .. } => {
            let multi = MultiLineString::try_from(geometry.value.clone())
                .map_err(|e| Error::GeoJsonError(e.to_string()))?;
            lines.extend(multi.0);
        }
        Value::GeometryCollection { geometries: members } => {
            for member in members {
                push_lines(member, lines)?;
            }
        }
        other => {
            return Err(Error::InvalidData(format!(
                "unsupported geometry type: {}",
                other.type_name()
            )));
        }
    }

    Ok(())
}
