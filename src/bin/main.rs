use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use naca4_rs::airfoil::generate::generate;
use naca4_rs::airfoil::params::{SurfaceOffset, TrailingEdge};
use naca4_rs::config::GeneratorConfig;
use naca4_rs::export::{save_table, write_json, write_table, DEFAULT_FILE_NAME};
use naca4_rs::logging::init_logging;
use naca4_rs::plot::{JsonPlotWriter, PlotRequest, Renderer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EdgeArg {
    /// Thickness closes to zero at the trailing edge (a4 = -0.1036)
    Closed,
    /// Finite trailing edge thickness (a4 = -0.1015)
    Open,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OffsetArg {
    /// Offset thickness perpendicular to the camber line
    Normal,
    /// Offset thickness vertically from the camber line
    Vertical,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Two whitespace separated columns, no header
    Table,
    /// JSON array of tagged points
    Json,
}

#[derive(Parser)]
#[command(name = "naca4")]
#[command(about = "Generate NACA 4-digit airfoil coordinates", long_about = None)]
struct Args {
    /// NACA designation, e.g. 2412
    #[arg(conflicts_with_all = ["thickness", "camber", "camber_position"])]
    designation: Option<String>,

    /// TOML file with generator settings, overridden by any flag given here
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum thickness in % of chord
    #[arg(long)]
    thickness: Option<i32>,

    /// Maximum camber in % of chord
    #[arg(long)]
    camber: Option<i32>,

    /// Location of maximum camber in % of chord
    #[arg(long)]
    camber_position: Option<i32>,

    /// Total number of points on the contour
    #[arg(long, short = 'n')]
    samples: Option<usize>,

    #[arg(long, value_enum)]
    trailing_edge: Option<EdgeArg>,

    #[arg(long, value_enum)]
    offset: Option<OffsetArg>,

    /// Output file, use "-" for stdout
    #[arg(long, short = 'o', default_value = DEFAULT_FILE_NAME)]
    output: String,

    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Also write a JSON plot description to this file
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    fn to_config(&self) -> Result<GeneratorConfig> {
        let mut cfg = match &self.config {
            Some(path) => GeneratorConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if self.thickness.is_some() || self.camber.is_some() || self.camber_position.is_some() {
            cfg.designation = None;
        }
        if let Some(d) = &self.designation {
            cfg.designation = Some(d.clone());
        }
        if let Some(t) = self.thickness {
            cfg.thickness = t;
        }
        if let Some(m) = self.camber {
            cfg.camber = m;
        }
        if let Some(p) = self.camber_position {
            cfg.camber_position = p;
        }
        if let Some(n) = self.samples {
            cfg.samples = n;
        }
        if let Some(te) = self.trailing_edge {
            cfg.trailing_edge = match te {
                EdgeArg::Closed => TrailingEdge::Closed,
                EdgeArg::Open => TrailingEdge::Open,
            };
        }
        if let Some(offset) = self.offset {
            cfg.offset = match offset {
                OffsetArg::Normal => SurfaceOffset::Normal,
                OffsetArg::Vertical => SurfaceOffset::Vertical,
            };
        }

        Ok(cfg)
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let spec = args.to_config()?.to_spec()?;
    info!(naca = %spec.title(), samples = spec.sample_count(), "generating airfoil");

    let airfoil = generate(&spec)?;
    let contour = airfoil.to_outer_contour();

    match (args.output.as_str(), args.format) {
        ("-", format) => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            match format {
                OutputFormat::Table => write_table(&contour, &mut writer)?,
                OutputFormat::Json => write_json(&contour, &mut writer)?,
            }
            writer.flush()?;
        }
        (path, OutputFormat::Table) => {
            save_table(&contour, path).with_context(|| format!("writing {}", path))?;
            info!(path, points = contour.len(), "coordinates written");
        }
        (path, OutputFormat::Json) => {
            let mut writer =
                BufWriter::new(File::create(path).with_context(|| format!("creating {}", path))?);
            write_json(&contour, &mut writer)?;
            writer.flush()?;
            info!(path, points = contour.len(), "coordinates written");
        }
    }

    if let Some(path) = &args.plot {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut renderer = JsonPlotWriter::new(BufWriter::new(file));
        renderer.render(&PlotRequest::new(&spec, &airfoil))?;
        info!(path = %path.display(), "plot description written");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::NamedTempFile;

    fn config(args: &[&str]) -> GeneratorConfig {
        let mut argv = vec!["naca4"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).unwrap().to_config().unwrap()
    }

    #[test]
    fn designation_with_percentage_flag_is_rejected() {
        for flag in ["--thickness", "--camber", "--camber-position"] {
            let result = Args::try_parse_from(["naca4", "0012", flag, "30"]);
            assert!(result.is_err(), "{} accepted alongside a designation", flag);
        }
    }

    #[test]
    fn designation_alone() {
        let spec = config(&["2412", "-n", "11"]).to_spec().unwrap();
        assert_eq!("NACA 2412", spec.title());
        assert_eq!(11, spec.sample_count());
    }

    #[test]
    fn percentage_flags_alone() {
        let spec = config(&["--thickness", "30", "-n", "11"]).to_spec().unwrap();
        assert_eq!("NACA 0030", spec.title());
        assert_relative_eq!(0.30, spec.thickness());
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "designation = \"2412\"\nsamples = 51\ntrailing_edge = \"open\"").unwrap();
        let path = file.path().to_str().unwrap();

        let cfg = config(&["--config", path, "--thickness", "15", "--offset", "vertical"]);
        assert_eq!(None, cfg.designation);
        assert_eq!(15, cfg.thickness);
        assert_eq!(51, cfg.samples);
        assert_eq!(TrailingEdge::Open, cfg.trailing_edge);
        assert_eq!(SurfaceOffset::Vertical, cfg.offset);

        let cfg = config(&["--config", path, "4415"]);
        assert_eq!(Some("4415".to_string()), cfg.designation);
        assert_eq!(51, cfg.samples);
    }
}
