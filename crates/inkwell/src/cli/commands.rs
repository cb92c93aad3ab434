//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use inkwell::{ColorMode, ParsePolicy, VisualMedium};
use std::path::PathBuf;

/// Inkwell - turn a prose script into an illustrated manga or comic
#[derive(Parser, Debug)]
#[command(name = "inkwell")]
#[command(about = "Turn a prose script into an illustrated manga or comic", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a project file from a story script
    Init {
        /// Path to the story text
        story: PathBuf,

        /// Title rendered on the cover
        #[arg(long)]
        title: String,

        /// Where to write the project file
        #[arg(long, default_value = "project.json")]
        out: PathBuf,

        /// Black-and-white or color artwork
        #[arg(long, value_enum, default_value_t = ColorArg::Bw)]
        color_mode: ColorArg,

        /// Visual style preset
        #[arg(long, value_enum, default_value_t = MediumArg::Manga)]
        medium: MediumArg,

        /// Number of storyboard pages to request
        #[arg(long, default_value = "8")]
        pages: u32,

        /// Production context for asset extraction
        #[arg(long)]
        style_ref: Option<String>,

        /// Volume name for the cover
        #[arg(long)]
        volume: Option<String>,

        /// Artist credit for the cover
        #[arg(long)]
        artist: Option<String>,

        /// Overwrite an existing project file
        #[arg(long)]
        force: bool,
    },

    /// Extract characters and locations from the story
    Assets {
        /// Path to the project file
        project: PathBuf,

        /// How to handle a response that does not parse
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
    },

    /// Render character portraits and location plates
    Portraits {
        /// Path to the project file
        project: PathBuf,

        /// Re-render assets that already have an image
        #[arg(long)]
        force: bool,
    },

    /// Break the story into storyboard pages
    Storyboard {
        /// Path to the project file
        project: PathBuf,

        /// How to handle a response that does not parse
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
    },

    /// Render the cover and every pending or failed page
    Render {
        /// Path to the project file
        project: PathBuf,

        /// Pages rendered at once
        #[arg(long, default_value = "1")]
        concurrency: usize,

        /// Leave the cover alone
        #[arg(long)]
        skip_cover: bool,
    },

    /// Write generated images out as files
    Export {
        /// Path to the project file
        project: PathBuf,

        /// Output directory
        #[arg(long, default_value = "out")]
        out: PathBuf,
    },

    /// Check storyboard references and report render progress
    Validate {
        /// Path to the project file
        project: PathBuf,
    },
}

/// Color mode options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ColorArg {
    /// Black ink and screentones
    Bw,
    /// Full color
    Color,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Bw => ColorMode::BlackAndWhite,
            ColorArg::Color => ColorMode::Color,
        }
    }
}

/// Visual medium options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum MediumArg {
    /// Japanese seinen manga
    Manga,
    /// American superhero comic
    DcComic,
    /// Painterly graphic novel
    DetailedComic,
}

impl From<MediumArg> for VisualMedium {
    fn from(arg: MediumArg) -> Self {
        match arg {
            MediumArg::Manga => VisualMedium::Manga,
            MediumArg::DcComic => VisualMedium::DcComic,
            MediumArg::DetailedComic => VisualMedium::DetailedComic,
        }
    }
}

/// Parse failure handling options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PolicyArg {
    /// Carry on with an empty result
    Degrade,
    /// Stop with an error
    Fail,
}

impl From<PolicyArg> for ParsePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Degrade => ParsePolicy::Degrade,
            PolicyArg::Fail => ParsePolicy::Fail,
        }
    }
}
