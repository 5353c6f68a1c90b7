//! `faqbot` — ask questions against an FAQ catalog from the command line.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use faq_match::{FaqService, MatchResult, MatcherConfig};

#[derive(Debug, Parser)]
#[command(name = "faqbot", version)]
#[command(about = "Answer questions from an FAQ catalog with TF-IDF matching")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// FAQ catalog (JSON with a top-level `faqs` array). Overrides the config.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Minimum similarity for an FAQ answer, in [0, 1]. Overrides the config.
    #[arg(long, global = true)]
    threshold: Option<f32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Answer a single question.
    Ask {
        /// The question (words are joined with spaces).
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
        /// Also show the N closest FAQ entries and their scores.
        #[arg(long, value_name = "N")]
        explain: Option<usize>,
    },
    /// List catalog entries.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Report whether the matcher initialized.
    Health,
    /// Interactive question loop.
    Chat,
    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn load_config(cli: &Cli) -> Result<MatcherConfig> {
    let mut config = match &cli.config {
        Some(path) => MatcherConfig::load(path)?,
        None => MatcherConfig::default(),
    };
    if let Some(catalog) = &cli.catalog {
        config.catalog = catalog.clone();
    }
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }
    config.validate()?;
    Ok(config)
}

fn print_result(out: &mut impl Write, result: &MatchResult, json: bool) -> Result<()> {
    if json {
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(result).context("serialize result")?
        )?;
        return Ok(());
    }
    writeln!(out, "{}", result.answer)?;
    writeln!(
        out,
        "confidence={:.3} matched_question={} category={}",
        result.confidence,
        result.matched_question.as_deref().unwrap_or("null"),
        result.category.as_deref().unwrap_or("null")
    )?;
    Ok(())
}

fn chat_loop(out: &mut impl Write, service: &FaqService) -> Result<()> {
    let mut editor = DefaultEditor::new().context("start line editor")?;
    writeln!(out, "Ask a question (Ctrl-D to quit).")?;
    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    log::debug!("history not updated: {e}");
                }
                let result = service.chat(&line)?;
                writeln!(out, "bot> {} [{:.3}]", result.answer, result.confidence)?;
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("read input"),
        }
    }
    Ok(())
}

/// Execute one command. Returns the process exit code.
fn run(cli: &Cli, out: &mut impl Write) -> Result<i32> {
    if let Commands::Completions { shell } = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "faqbot", out);
        return Ok(0);
    }

    let config = load_config(cli)?;
    let service = FaqService::start(config);

    match &cli.command {
        Commands::Ask {
            question,
            json,
            explain,
        } => {
            let question = question.join(" ");
            let result = service.chat(&question)?;
            print_result(out, &result, *json)?;
            if let Some(k) = explain {
                let bot = service.core()?;
                for (entry, score) in bot.rank(&question, *k) {
                    writeln!(out, "  {score:.4}  #{}  {}", entry.id, entry.question)?;
                }
            }
        }
        Commands::List { json } => {
            let entries = service.entries()?;
            if *json {
                writeln!(
                    out,
                    "{}",
                    serde_json::to_string_pretty(&entries).context("serialize entries")?
                )?;
            } else {
                for e in &entries {
                    writeln!(
                        out,
                        "{:>4}  [{}]  {}",
                        e.id,
                        e.category.as_deref().unwrap_or("-"),
                        e.question
                    )?;
                }
            }
        }
        Commands::Health => {
            let report = service.health();
            writeln!(
                out,
                "{}",
                serde_json::to_string_pretty(&report).context("serialize health")?
            )?;
            if !report.chatbot_initialized {
                return Ok(1);
            }
        }
        Commands::Chat => chat_loop(out, &service)?,
        Commands::Completions { .. } => {}
    }

    Ok(0)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    match run(&cli, &mut stdout) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
