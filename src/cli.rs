//! Command-line surface
//!
//! `julia-term [OPTION]... [REAL] [IMAGINARY]`. The single-dash color
//! flags `-c1` / `-c2` are accepted as aliases of `--c1` / `--c2`.

use crate::engine::{Complex, ConfigError, EscapeTest, FractalConfig, Rgb};
use crate::error::AppError;
use std::ffi::OsString;
use std::path::PathBuf;
use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "julia-term",
    usage = "julia-term [OPTION]... [REAL] [IMAGINARY]",
    about = "Render Julia set at given complex constant.\nArrow keys to move, +/- to zoom, space to reset, Esc to quit.",
    after_help = "REAL and IMAGINARY are the real and imaginary components of a complex constant.\nWith no REAL and IMAGINARY, constant is -0.8+0.156i.",
    setting = AppSettings::AllowNegativeNumbers
)]
pub struct Args {
    /// Color 1 in RGB list format
    #[structopt(long = "c1", value_name = "R,G,B", default_value = "0,255,0")]
    pub begin_color: String,

    /// Color 2 in RGB list format
    #[structopt(long = "c2", value_name = "R,G,B", default_value = "0,0,0")]
    pub end_color: String,

    /// Iteration cap per cell
    #[structopt(long = "max-iter", default_value = "100")]
    pub max_iterations: u32,

    /// Escape radius
    #[structopt(long, default_value = "2.0")]
    pub radius: f32,

    /// Stop orbits at |z| >= radius instead of |z| >= radius²
    #[structopt(long)]
    pub conventional_escape: bool,

    /// Write logs to this file (also JULIA_TERM_LOG)
    #[structopt(long, parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    /// Real part of the constant
    #[structopt(name = "REAL")]
    pub real: Option<f32>,

    /// Imaginary part of the constant
    #[structopt(name = "IMAGINARY")]
    pub imaginary: Option<f32>,
}

impl Args {
    /// Parse an argument list, program name first.
    pub fn parse_from<I, T>(args: I) -> Result<Self, structopt::clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::from_iter_safe(normalize_flags(args))
    }

    pub fn into_config(self) -> Result<FractalConfig, ConfigError> {
        let defaults = FractalConfig::default();
        let constant = match (self.real, self.imaginary) {
            (Some(re), Some(im)) => Complex::new(re, im),
            (None, None) => defaults.constant,
            _ => return Err(ConfigError::IncompleteConstant),
        };
        let escape_test = if self.conventional_escape {
            EscapeTest::Conventional
        } else {
            EscapeTest::Compatible
        };

        let config = FractalConfig {
            constant,
            max_iterations: self.max_iterations,
            radius: self.radius,
            escape_test,
            begin_color: self.begin_color.parse::<Rgb>()?,
            end_color: self.end_color.parse::<Rgb>()?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// What `main` needs to start the viewer.
#[derive(Debug)]
pub struct Launch {
    pub config: FractalConfig,
    pub log_file: Option<PathBuf>,
}

/// Parse and validate the command line. Help output comes back as
/// [`AppError::Usage`] so the caller decides where it is printed.
pub fn launch_from<I, T>(args: I) -> Result<Launch, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = Args::parse_from(args)?;
    let log_file = args.log_file.clone();
    let config = args.into_config()?;
    Ok(Launch { config, log_file })
}

/// Rewrite `-c1 X`, `-c1=X` (and `c2`) into their long forms.
fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut seen_terminator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if seen_terminator {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                seen_terminator = true;
                return arg;
            }
            for flag in ["-c1", "-c2"] {
                if let Some(rest) = s.strip_prefix(flag) {
                    if rest.is_empty() || rest.starts_with('=') {
                        return OsString::from(format!("-{}{}", flag, rest));
                    }
                }
            }
            arg
        })
        .collect()
}
