use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use filterlang_ide::http::DEFAULT_BASE_URL;
use filterlang_ide::{BackendConfig, HttpBackend};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "filterlang", bin_name = "filterlang", version)]
#[command(about = "Parse, check, highlight, complete and lint flow filters")]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace). RUST_LOG wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the syntax tree of a filter
    #[command(after_help = r#"EXAMPLES:
  filterlang ast 'SrcAS = 1000 AND DstPort IN (80, 443)'
  filterlang ast -f filter.txt --trivia --spans
  filterlang ast --pretty 'srcas in (1,2)  and not x="y"'"#)]
    Ast {
        #[command(flatten)]
        input: FilterArgs,

        /// Include whitespace and comments
        #[arg(long)]
        trivia: bool,

        /// Show source spans
        #[arg(long)]
        spans: bool,

        /// Print the filter in canonical one-line form instead
        #[arg(long, conflicts_with_all = ["trivia", "spans"])]
        pretty: bool,
    },

    /// Report syntax errors; silent on success
    #[command(after_help = r#"EXAMPLES:
  filterlang check 'SrcAS = 1000 AND'
  echo 'SrcAS IN ()' | filterlang check --strict"#)]
    Check {
        #[command(flatten)]
        input: FilterArgs,

        /// Fail on warnings too
        #[arg(long)]
        strict: bool,

        /// Colorize diagnostics (auto-detected by default)
        #[arg(long, default_value = "auto", value_name = "WHEN")]
        color: ColorChoice,
    },

    /// Print highlight classes of a filter's tokens
    Highlight {
        #[command(flatten)]
        input: FilterArgs,

        /// Print JSON instead of one span per line
        #[arg(long)]
        json: bool,
    },

    /// Ask the backend for completions at a cursor position
    #[command(after_help = r#"EXAMPLES:
  filterlang complete 'SrcAS = 1000 AND |'     # `|` marks the cursor
  filterlang complete 'SrcAS ' --cursor 6
  filterlang complete 'DstNetName = "so|' --json"#)]
    Complete {
        #[command(flatten)]
        input: FilterArgs,

        /// Byte offset of the cursor (default: `|` in the filter, else its end)
        #[arg(long, value_name = "OFFSET")]
        cursor: Option<usize>,

        /// Print the completion list as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        backend: BackendArgs,
    },

    /// Validate a filter with the backend
    Lint {
        #[command(flatten)]
        input: FilterArgs,

        /// Print findings as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        backend: BackendArgs,
    },

    /// Check that the backend is reachable
    Health {
        #[command(flatten)]
        backend: BackendArgs,
    },

    /// List dimension names known to the backend
    Dimensions {
        /// Only names starting with this (case-insensitive)
        prefix: Option<String>,

        #[command(flatten)]
        backend: BackendArgs,
    },
}

#[derive(Args, Debug)]
#[group(id = "filter_input", multiple = false)]
pub struct FilterArgs {
    /// Filter as inline text (read from stdin when neither text nor file is given)
    #[arg(value_name = "FILTER")]
    pub text: Option<String>,

    /// Filter from file (use "-" for stdin)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BackendArgs {
    /// Console API base URL
    #[arg(long, env = "FILTERLANG_URL", default_value = DEFAULT_BASE_URL, value_name = "URL")]
    pub url: String,

    /// Bearer token for the console API
    #[arg(long, env = "FILTERLANG_TOKEN", hide_env_values = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10, value_name = "SECS")]
    pub timeout: u64,
}

impl BackendArgs {
    pub fn config(&self) -> BackendConfig {
        let config = BackendConfig::new(self.url.clone())
            .with_timeout(Duration::from_secs(self.timeout));
        match &self.token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }

    pub fn connect(&self) -> filterlang_ide::Result<HttpBackend> {
        HttpBackend::new(self.config())
    }
}
