use crate::cli::commands::{Cli, Commands};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;
use tracing::info;

use pod042::Config;
use pod042::core::familiarity::LEVEL_CEILING;
use pod042::core::persona::PersonaSession;
use pod042::core::persona::session::parse_transcript;
use pod042::core::style::{StylePipeline, classify};

fn run_format(config: &Config, text: &str, context: Option<&str>, level: f64) -> Result<()> {
    if !(0.0..=LEVEL_CEILING).contains(&level) {
        bail!("--level must be within 0.0..={LEVEL_CEILING}, got {level}");
    }
    let pipeline = StylePipeline::new(config.persona.profile());
    println!("{}", pipeline.render(text, context, level));
    Ok(())
}

/// Replay a transcript through one session.
///
/// 1. Reads and parses the transcript (a JSON array of turns).
/// 2. Creates a fresh `PersonaSession` from config.
/// 3. Prints each styled response with the level and phase after the turn.
fn run_replay(config: &Config, path: &Path, as_json: bool) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript: {}", path.display()))?;
    let turns = parse_transcript(&raw)?;

    let mut session = PersonaSession::from_config(config);
    info!(
        session = %session.id(),
        variant = %config.persona.variant,
        turns = turns.len(),
        "replaying transcript"
    );

    for outcome in session.replay(&turns) {
        if as_json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            println!(
                "[{:>3}] {}  (level {:.2}, {})",
                outcome.index, outcome.response, outcome.level, outcome.phase
            );
        }
    }
    Ok(())
}

pub fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Classify { text, context } => {
            let category = classify(&text, context.as_deref());
            println!("{category}\t{}", category.label());
            Ok(())
        }
        Commands::Format {
            text,
            context,
            level,
        } => run_format(&config, &text, context.as_deref(), level),
        Commands::Replay { path, json } => run_replay(&config, &path, json),
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        Commands::Instruction => {
            println!("{}", config.persona.effective_instruction());
            Ok(())
        }
    }
}
