use clap::{Parser, Subcommand};
use std::path::PathBuf;
use style_advisor_common::{Rating, StylePreference};

#[derive(Parser)]
#[command(name = "style-advisor")]
#[command(about = "Outfit and fabric recommendations for your body shape", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend URL (overrides config and STYLE_ADVISOR_SERVER)
    #[arg(long, global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a photo and show the recommendations
    Analyze {
        /// Full-body photo
        #[arg(required = true)]
        image: PathBuf,

        /// Preferred style (auto/traditional/casual/office)
        #[arg(short, long)]
        style: Option<StylePreference>,

        /// Rate each recommendation after it is shown
        #[arg(long)]
        rate: bool,
    },

    /// Send a single feedback event
    Feedback {
        #[arg(long)]
        shape: String,

        /// Style category the recommendation came from
        #[arg(long)]
        style: String,

        /// Recommendation name or image path
        #[arg(long, default_value = "")]
        recommendation: String,

        /// 1 = helpful, 0 = not helpful
        #[arg(long, value_parser = parse_rating)]
        rating: Rating,
    },

    /// Ask the server to retrain its reward model from collected feedback
    TrainReward,

    /// Show or change settings
    Config {
        /// Backend URL
        #[arg(long)]
        set_server: Option<String>,

        /// Default style
        #[arg(long)]
        set_style: Option<StylePreference>,

        #[arg(long)]
        show: bool,
    },
}

pub fn parse_rating(value: &str) -> Result<Rating, String> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(Rating::from_u8)
        .ok_or_else(|| format!("rating must be 0 or 1, got '{}'", value))
}
