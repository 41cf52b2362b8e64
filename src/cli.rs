use clap::{Parser, Subcommand};
use std::path::PathBuf;

use actiongraph::application::dto::OutputFormat;

/// Default number of steps listed by `top`
pub const DEFAULT_TOP_LIMIT: usize = 20;

/// Find out where Go build time goes and why a package is built at all
#[derive(Parser, Debug)]
#[command(name = "actiongraph")]
#[command(version)]
#[command(
    about = "Analyze Go build traces recorded with `go build -debug-actiongraph`",
    long_about = None
)]
pub struct Args {
    /// Build trace to read, or "-" for stdin [default: -]
    #[arg(short = 'f', long = "file", global = true, value_name = "FILE")]
    pub file: Option<String>,

    /// Output format: text or json [default: text]
    #[arg(short = 'F', long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./actiongraph.config.yml when present)
    #[arg(short, long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Only print warnings and errors on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the slowest build steps
    Top {
        /// Number of steps to list, 0 for all [default: 20]
        #[arg(short = 'n', long = "limit")]
        limit: Option<usize>,
    },
    /// Show cumulative build time per package directory
    Tree {
        /// Deepest level to show, negative for unlimited
        #[arg(short = 'L', long = "level", allow_negative_numbers = true)]
        level: Option<i64>,

        /// Packages or directories to focus on
        #[arg(value_name = "PKG")]
        packages: Vec<String>,
    },
    /// Print the build step graph in Graphviz format
    #[command(alias = "dot")]
    Graph {
        /// Keep only the steps on a dependency path to this package
        #[arg(long, value_name = "PKG")]
        why: Option<String>,
    },
    /// Show total build time per step mode
    Types,
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

/// Interprets a `top` limit, where 0 means no limit
pub fn top_limit(limit: usize) -> Option<usize> {
    (limit > 0).then_some(limit)
}

/// Interprets a `tree` level, where a negative level means no limit
pub fn tree_level(level: i64) -> Option<usize> {
    usize::try_from(level).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("actiongraph").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_top_defaults() {
        let args = parse(&["top"]);
        assert_eq!(args.command, Command::Top { limit: None });
        assert!(args.file.is_none());
        assert!(args.format.is_none());
        assert!(!args.quiet);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&["top", "-n", "5", "-f", "compile.json", "-F", "json", "-q"]);
        assert_eq!(args.command, Command::Top { limit: Some(5) });
        assert_eq!(args.file.as_deref(), Some("compile.json"));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(args.quiet);
    }

    #[test]
    fn test_tree_with_negative_level_and_packages() {
        let args = parse(&["-f", "trace.json", "tree", "-L", "-1", "net/http", "golang.org/x/"]);
        assert_eq!(
            args.command,
            Command::Tree {
                level: Some(-1),
                packages: vec!["net/http".to_string(), "golang.org/x/".to_string()],
            }
        );
    }

    #[test]
    fn test_graph_alias() {
        let args = parse(&["dot", "--why", "fmt"]);
        assert_eq!(
            args.command,
            Command::Graph {
                why: Some("fmt".to_string())
            }
        );
    }

    #[test]
    fn test_output_and_config_paths() {
        let args = parse(&["-o", "out.dot", "-c", "ci.yml", "graph"]);
        assert_eq!(args.output, Some(PathBuf::from("out.dot")));
        assert_eq!(args.config, Some(PathBuf::from("ci.yml")));
        assert_eq!(args.command, Command::Graph { why: None });
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = Args::try_parse_from(["actiongraph", "-F", "yaml", "types"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Args::try_parse_from(["actiongraph"]).is_err());
    }

    #[test]
    fn test_top_limit() {
        assert_eq!(top_limit(0), None);
        assert_eq!(top_limit(20), Some(20));
    }

    #[test]
    fn test_tree_level() {
        assert_eq!(tree_level(-1), None);
        assert_eq!(tree_level(0), Some(0));
        assert_eq!(tree_level(3), Some(3));
    }
}
