use clap::Parser;
use std::path::PathBuf;

/// Generate a PlantUML dependency graph from a Maven pom.xml
#[derive(Parser, Debug)]
#[command(name = "pom-graph")]
#[command(version)]
#[command(about = "Generate a PlantUML dependency graph from a Maven pom.xml", long_about = None)]
pub struct Args {
    /// Path to the root pom.xml
    #[arg(short, long, value_name = "FILE")]
    pub path: PathBuf,

    /// File to write the PlantUML diagram to (overwritten if it exists)
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Maximum depth of dependency traversal [default: 3]
    #[arg(short, long, value_name = "N")]
    pub depth: Option<usize>,

    /// Maven local repository used to resolve transitive dependencies
    /// (e.g. ~/.m2/repository). Without it only direct dependencies are listed.
    #[arg(long = "local-repo", value_name = "DIR")]
    pub local_repo: Option<PathBuf>,

    /// Fail on <dependency> entries without groupId or artifactId instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Config file (defaults to pom-graph.config.yml next to the descriptor)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
