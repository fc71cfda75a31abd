use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use sentok::config::load_config;
use sentok::run;
use sentok::settings::{OutputFormat, Settings};
use tracing_subscriber::EnvFilter;

const BINARY_NAME: &str = "sentok";

#[derive(Parser)]
#[command(version, subcommand_required = false)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
    #[arg(
        short,
        long,
        global = true,
        num_args = 1..,
        value_name = "PATH",
        help = "Files to read sentences from, one per line (defaults to stdin)"
    )]
    input: Vec<PathBuf>,

    #[command(flatten)]
    tokenizer: TokenizerArgs,
}

#[derive(Debug, Args)]
struct TokenizerArgs {
    #[arg(
        long,
        global = true,
        value_name = "COUNT",
        help = "Only emit ids below this bound"
    )]
    num_words: Option<u32>,
    #[arg(
        long,
        global = true,
        value_name = "TOKEN",
        help = "Encode unknown words as this token instead of dropping them"
    )]
    oov_token: Option<String>,
}

#[derive(Debug, Args, Default, Clone, Copy)]
struct EncodeArgs {
    #[arg(long, help = "Strip punctuation and lowercase sentences before fitting")]
    clean: bool,
    #[arg(long, help = "Also print the fitted vocabulary")]
    vocab: bool,
    #[arg(
        long,
        value_name = "FORMAT",
        value_enum,
        default_value_t = OutputFormat::default(),
        help = "Output format"
    )]
    format: OutputFormat,
}

#[derive(Debug, Subcommand, Clone)]
enum Command {
    /// (default) Fit a vocabulary on the input and print each line as a sequence of ids
    Encode(EncodeArgs),
    /// Print each input line lowercased with punctuation removed
    Clean,
    /// Fit a vocabulary on the input and map the given ids back to words
    Decode {
        #[arg(
            long,
            required = true,
            value_delimiter = ',',
            value_name = "IDS",
            help = "Comma-separated ids to decode"
        )]
        ids: Vec<u32>,
        #[arg(long, help = "Strip punctuation and lowercase sentences before fitting")]
        clean: bool,
    },
    /// Generate shell completions
    ShellCompletions {
        #[arg()]
        shell: Shell,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Encode(EncodeArgs::default())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .expect("should be able to initialize the logger");

    let cwd = std::env::current_dir()?;
    let cfg = load_config(&cwd)?;

    let cli = Cli::parse();

    let mut tokenizer = cfg.tokenizer;
    if let Some(num_words) = cli.tokenizer.num_words {
        tokenizer.num_words = Some(num_words);
    }
    if let Some(oov_token) = cli.tokenizer.oov_token {
        tokenizer.oov_token = Some(oov_token);
    }

    let command = cli.command.unwrap_or_default();
    let format = match &command {
        Command::Encode(args) => args.format,
        _ => OutputFormat::default(),
    };
    let settings = Settings {
        inputs: cli.input,
        format,
        tokenizer,
    };

    match command {
        Command::Encode(args) => run::encode(settings, args.clean, args.vocab).await,
        Command::Clean => run::clean_lines(settings).await,
        Command::Decode { ids, clean } => run::decode(settings, clean, &ids).await,
        Command::ShellCompletions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, BINARY_NAME, &mut std::io::stdout());
            Ok(())
        }
    }
}
