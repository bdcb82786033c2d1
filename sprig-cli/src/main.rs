//! Sprig CLI
//!
//! Builds an element tree from a selector and prints it.

use std::fmt;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use sprig_dom::{NodeId, OutlineStyle};
use sprig_selector::{BuildOptions, GroupMode, TokenKind, build_with_options, tokenize};

/// Sprig — build element trees from CSS-selector-like strings
#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the tree as an indented outline
    sprig 'ul#menu > li.item + li.item'

    # Print markup
    sprig --format html 'p.lead[html=<b>Hello</b>]'

    # Print the tree as JSON with a different default tag
    sprig --format json --default-tag span '.a > .b'

    # Show how the selector was split
    sprig --format tokens 'div, span'
"#)]
struct Cli {
    /// Selector to build
    #[arg(value_name = "SELECTOR")]
    selector: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Outline)]
    format: Format,

    /// Tag for chunks without one
    #[arg(long, value_name = "TAG", default_value = sprig_selector::DEFAULT_TAG)]
    default_tag: String,

    /// How comma-separated groups are built: restart or continue
    #[arg(long, value_name = "MODE", default_value_t = GroupMode::Continue)]
    groups: GroupMode,

    /// Do not warn about skipped or reinterpreted input
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Indented tree, one element per line
    Outline,
    /// Markup for the fragment
    Html,
    /// Nested JSON
    Json,
    /// The token stream, one token per line
    Tokens,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.format == Format::Tokens {
        print_tokens(&cli.selector);
        return Ok(());
    }

    let options = BuildOptions::default()
        .with_default_tag(cli.default_tag.as_str())
        .with_group_mode(cli.groups)
        .with_warnings(!cli.quiet);
    let output = build_with_options(&cli.selector, &options);

    let mut stdout = io::stdout().lock();
    match cli.format {
        Format::Outline if cli.no_color => write!(stdout, "{}", output.tree.outline(NodeId::ROOT))?,
        Format::Outline => write!(stdout, "{}", output.tree.outline_with(NodeId::ROOT, Colored))?,
        Format::Html => writeln!(stdout, "{}", output.tree.to_html())?,
        Format::Json => {
            let json = serde_json::to_string_pretty(&output.tree.view(NodeId::ROOT))
                .context("failed to serialize tree")?;
            writeln!(stdout, "{json}")?;
        }
        Format::Tokens => {}
    }

    Ok(())
}

/// Terminal colors for the outline format.
struct Colored;

impl OutlineStyle for Colored {
    fn fragment(&self, f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        write!(f, "{}", text.dimmed())
    }

    fn tag_name(&self, f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        write!(f, "{}", text.cyan())
    }

    fn attribute_name(&self, f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        write!(f, "{}", text.green())
    }

    fn content(&self, f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        write!(f, "{}", text.yellow())
    }
}

/// Print each token with its byte span.
fn print_tokens(selector: &str) {
    for token in tokenize(selector) {
        let kind = match token.kind {
            TokenKind::Compound(chunk) => format!("compound   {chunk}"),
            TokenKind::Combinator(combinator) => format!("combinator {combinator}"),
        };
        let separator = if token.ends_group() { "  ," } else { "" };
        println!("{:>3}..{:<3} {kind}{separator}", token.span.start, token.span.end);
    }
}
