use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "imagesim", about = "Find visually similar images in a gallery")]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank images by similarity to a query image
    Similar {
        /// Image name as written in the feature file
        name: String,
        /// Image to leave out of the results (repeatable)
        #[arg(long = "exclude")]
        exclude: Vec<String>,
        #[arg(long, default_value = "5")]
        limit: usize,
    },
    /// Random selection of images for the initial gallery
    Sample {
        #[arg(long, default_value = "9")]
        count: usize,
    },
    /// List images in the image directory
    Images,
    /// Show feature store statistics
    Stats,
    /// Print the stored feature vector of one image
    Feature { name: String },
    /// Run the feature extractor, then reload the feature store
    Reindex,
    /// Download the extractor's model file
    FetchModel,
}
