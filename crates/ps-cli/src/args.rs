use clap::Parser;
use ps_core::config::DEFAULT_TARGET_DIR;
use ps_core::ScrubConfig;
use std::path::PathBuf;

/// Strip site-builder markup from exported blog posts, rewriting files in place.
#[derive(Parser, Debug)]
#[command(name = "postscrub", author, version, about, long_about = None)]
pub struct Cli {
    /// Folder holding the exported posts.
    #[arg(default_value = DEFAULT_TARGET_DIR)]
    pub dir: PathBuf,
    /// Extension of the files to clean.
    #[arg(short, long, default_value = "html")]
    pub extension: String,
    /// Report what would change without writing anything.
    #[arg(short = 'n', long)]
    pub dry_run: bool,
    /// Keep processing when a post cannot be read or written.
    #[arg(short, long)]
    pub keep_going: bool,
    /// Print the run report as JSON instead of status lines.
    #[arg(long)]
    pub json: bool,
    /// Stop sanitizing a post after this many rounds even if it is still changing.
    #[arg(long)]
    pub max_rounds: Option<usize>,
    /// Log every pass to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> ScrubConfig {
        ScrubConfig {
            target_dir: self.dir.clone(),
            extension: self.extension.clone(),
            dry_run: self.dry_run,
            keep_going: self.keep_going,
            max_rounds: self.max_rounds,
        }
    }
}
