/// lavis - linear algebra demos in the terminal
///
///   lavis vectors     a vector and a triangle under a 2x2 matrix
///   lavis isometric   a house wireframe rotated into isometric view
///
/// Each command draws full-screen and waits for a key press. `--print`
/// writes the numbers and an ASCII rendering to stdout instead.
use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use lavis_core::{parse, IsometricDemo, IsometricTransform, Plot, VectorsDemo, ViewAngles};
use lavis_terminal::report::{IsometricReport, VectorsReport};
use lavis_terminal::{render_to_lines, TerminalApp};

#[derive(Parser)]
#[command(name = "lavis")]
#[command(about = "Linear algebra visualizations for the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Log verbosity (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a 2-D vector by a 2x2 matrix
    Vectors {
        /// Matrix, e.g. "[[2, 1], [-1, 1]]" or "2 1; -1 1"
        #[arg(long, allow_hyphen_values = true)]
        matrix: Option<String>,

        /// Vector, e.g. "1, 1"
        #[arg(long, allow_hyphen_values = true)]
        vector: Option<String>,

        /// Also draw the triangle's image under the matrix
        #[arg(long)]
        show_image: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Rotate the house wireframe and project it isometrically
    Isometric {
        /// Rotation angle in radians applied about every axis [default: atan(0.5)]
        #[arg(long, allow_negative_numbers = true)]
        theta: Option<f64>,

        /// Translation applied after the rotation, e.g. "1, 0, 0"
        #[arg(long, allow_hyphen_values = true)]
        translate: Option<String>,

        /// View elevation in degrees
        #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
        elev: f64,

        /// View azimuth in degrees
        #[arg(long, default_value_t = -120.0, allow_negative_numbers = true)]
        azim: f64,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Print results and the rendering to stdout instead of opening the viewer
    #[arg(long)]
    print: bool,

    /// Canvas width for --print
    #[arg(long, default_value_t = 72, requires = "print")]
    width: usize,

    /// Canvas height for --print
    #[arg(long, default_value_t = 24, requires = "print")]
    height: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level {
        logger.filter_level(level.into());
    }
    logger.init();

    match cli.command {
        Commands::Vectors {
            matrix,
            vector,
            show_image,
            output,
        } => {
            let mut demo = VectorsDemo::new()?;
            demo.show_image_triangle = show_image;
            if let Some(matrix) = matrix {
                demo.map = parse::parse_matrix2(&matrix)
                    .with_context(|| format!("invalid --matrix {matrix:?}"))?;
            }
            if let Some(vector) = vector {
                demo.vector = parse::parse_vector2(&vector)
                    .with_context(|| format!("invalid --vector {vector:?}"))?;
            }
            log::info!("A * v = {}", demo.transformed());

            let plot = demo.plot();
            if output.print {
                print!("{}", VectorsReport(&demo));
            }
            show(plot, &output)
        }
        Commands::Isometric {
            theta,
            translate,
            elev,
            azim,
            output,
        } => {
            let mut transform = IsometricTransform::default();
            if let Some(theta) = theta {
                transform.theta = finite("--theta", theta)?;
            }
            if let Some(translate) = translate {
                transform.translation = parse::parse_vector3(&translate)
                    .with_context(|| format!("invalid --translate {translate:?}"))?;
            }

            let view = ViewAngles::new(finite("--elev", elev)?, finite("--azim", azim)?);
            let demo = IsometricDemo {
                transform,
                view,
                ..IsometricDemo::new()?
            };
            let plot = demo.plot().context("failed to lay out the house wireframe")?;
            if output.print {
                print!("{}", IsometricReport(&demo));
            }
            show(plot, &output)
        }
    }
}

fn finite(flag: &str, value: f64) -> Result<f64> {
    ensure!(value.is_finite(), "invalid {flag} {value}: not a finite number");
    Ok(value)
}

fn show(plot: Plot, output: &OutputArgs) -> Result<()> {
    if output.print {
        println!();
        for line in render_to_lines(&plot, output.width, output.height) {
            println!("{line}");
        }
        return Ok(());
    }

    let mut app = TerminalApp::new(plot).context("failed to query the terminal size")?;
    app.run().context("terminal viewer failed")?;
    Ok(())
}
