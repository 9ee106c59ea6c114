use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use linediff::artifacts::core::PagerWriter;
use linediff::commands::preview::{Preview, PreviewOptions};
use linediff::{CONTEXT_LINES, DiffOptions, DiffStrategy, LOOKAHEAD_WINDOW, RenderStyle};
use minus::Pager;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Parser)]
#[command(
    name = "linediff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Preview the line differences between two versions of a file",
    long_about = "This command compares an original and a modified version of a file \
    and prints what would change as a unified diff, without touching either file.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The original version of the file")]
    original: PathBuf,
    #[arg(index = 2, help = "The modified version of the file")]
    modified: PathBuf,
    #[arg(long, help = "Label shown in the diff headers (defaults to the modified path)")]
    label: Option<String>,
    #[arg(long, help = "Print the unified diff as plain text")]
    plain: bool,
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, help = "When to style the output")]
    color: ColorWhen,
    #[arg(long, help = "Do not page the output")]
    no_pager: bool,
    #[arg(
        short = 'U',
        long = "context",
        default_value_t = CONTEXT_LINES,
        help = "Unchanged lines shown around each change"
    )]
    context: usize,
    #[arg(
        long,
        default_value_t = LOOKAHEAD_WINDOW,
        help = "Lines searched ahead by the lookahead strategy"
    )]
    lookahead: usize,
    #[arg(long, value_enum, default_value_t = DiffStrategy::Alignment, help = "How changed lines are detected")]
    strategy: DiffStrategy,
    #[arg(long, help = "Append an insertion/deletion summary")]
    stat: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.color {
        ColorWhen::Always => colored::control::set_override(true),
        ColorWhen::Never => colored::control::set_override(false),
        ColorWhen::Auto => {}
    }

    let original = std::fs::read_to_string(&cli.original)
        .with_context(|| format!("failed to read {}", cli.original.display()))?;
    let modified = std::fs::read_to_string(&cli.modified)
        .with_context(|| format!("failed to read {}", cli.modified.display()))?;
    let label = cli
        .label
        .clone()
        .unwrap_or_else(|| cli.modified.display().to_string());

    let opts = PreviewOptions {
        diff: DiffOptions::default()
            .with_context_lines(cli.context)
            .with_lookahead_window(cli.lookahead)
            .with_strategy(cli.strategy),
        plain: cli.plain,
        style: if cli.plain || cli.color == ColorWhen::Never {
            RenderStyle::Plain
        } else {
            RenderStyle::Styled
        },
        stat: cli.stat,
    };

    if cli.plain || cli.no_pager || !std::io::stdout().is_terminal() {
        let preview = Preview::new(Box::new(std::io::stdout()));
        preview.show(&original, &modified, &label, &opts)?;
    } else {
        let pager = Pager::new();
        let preview = Preview::new(Box::new(PagerWriter::new(pager.clone())));
        preview.show(&original, &modified, &label, &opts)?;
        minus::page_all(pager)?;
    }

    Ok(())
}
