//! Command-line driver for the grid engine.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use fieldgrid::format::parse_boundary;
use fieldgrid::geometry::{Corner, GeoBounds, GridSpec, Traversal};
use fieldgrid::model::Boundary;
use fieldgrid::session::GridSession;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a waypoint grid from a boundary file and export it
    Generate {
        /// Boundary GeoJSON file (FeatureCollection of >= 3 Point features)
        #[arg(long)]
        boundary: PathBuf,

        /// Number of grid columns
        #[arg(short = 'x', long, default_value_t = 3)]
        columns: u32,

        /// Number of grid rows
        #[arg(short = 'y', long, default_value_t = 3)]
        rows: u32,

        /// Corner the traversal starts from (A-D)
        #[arg(long, default_value = "A")]
        start_corner: String,

        /// Traversal direction (cw or ccw)
        #[arg(long, default_value = "cw")]
        direction: String,

        /// Export format id (geojson, csv, mission)
        #[arg(long, default_value = "geojson")]
        format: String,

        /// Output filename; the format's extension is appended if absent
        #[arg(long)]
        output: String,

        /// Mission name for the structured document
        #[arg(long)]
        name: Option<String>,

        /// Mission description for the structured document
        #[arg(long)]
        description: Option<String>,
    },

    /// Print the labeled corners and bounding box of a boundary file
    Inspect {
        /// Boundary GeoJSON file
        #[arg(long)]
        boundary: PathBuf,
    },

    /// List the available export formats
    Formats,
}

fn parse_start_corner(text: &str) -> Result<Corner> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(label), None) => {
            Corner::from_label(label).with_context(|| format!("unknown start corner '{text}'"))
        }
        _ => bail!("start corner must be a single letter A-D, got '{text}'"),
    }
}

fn parse_direction(text: &str) -> Result<Traversal> {
    match text.to_ascii_lowercase().as_str() {
        "cw" => Ok(Traversal::Clockwise),
        "ccw" => Ok(Traversal::CounterClockwise),
        _ => bail!("direction must be 'cw' or 'ccw', got '{text}'"),
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            boundary,
            columns,
            rows,
            start_corner,
            direction,
            format,
            output,
            name,
            description,
        } => {
            let spec = GridSpec::new(columns, rows)
                .with_start(parse_start_corner(&start_corner)?)
                .with_traversal(parse_direction(&direction)?);

            let mut session = GridSession::new();
            session.import_boundary_file(&boundary)?;
            let count = session.generate_grid(&spec)?;

            if let Some(name) = name {
                session.mission_mut().name = name;
            }
            if let Some(description) = description {
                session.mission_mut().description = description;
            }

            let result = session.export_to_file(&format, &output)?;
            for path in &result.files_created {
                println!("{} waypoints written to {}", count, path.display());
            }
            Ok(())
        }

        Command::Inspect { boundary } => {
            let text = std::fs::read_to_string(&boundary)
                .with_context(|| format!("reading {}", boundary.display()))?;
            let boundary = Boundary::from_corners(parse_boundary(&text)?);

            println!("{} corners:", boundary.len());
            for (label, corner) in boundary.labeled_corners() {
                println!(
                    "  {}  lat {:>12.6}  lng {:>12.6}",
                    label, corner.lat, corner.lng
                );
            }
            if let Some(bounds) = GeoBounds::from_points(boundary.corners()) {
                println!(
                    "bounds: lat [{:.6}, {:.6}]  lng [{:.6}, {:.6}]",
                    bounds.min_lat, bounds.max_lat, bounds.min_lng, bounds.max_lng
                );
            }
            if !boundary.can_generate() {
                println!("note: grid generation needs exactly 4 corners");
            }
            Ok(())
        }

        Command::Formats => {
            let session = GridSession::new();
            let mut formats = session.registry().all();
            formats.sort_by_key(|f| f.id());
            for format in formats {
                println!(
                    "{:<10} {} (.{})",
                    format.id(),
                    format.display_name(),
                    format.extensions()[0]
                );
            }
            Ok(())
        }
    }
}
