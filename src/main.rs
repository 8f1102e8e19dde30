//! Combat Calc - Entry Point
//!
//! Command-line front end for the calculator. Each skill is passed as raw
//! text, exactly as typed into a form field, and the result is printed
//! as text or JSON.

use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use combat_calc::core::error::Result;
use combat_calc::dialog::{FixedChoice, SkillChoice, SkillPrompt, StdinPrompt};
use combat_calc::input::{parse_level, COMBAT_FIELD};
use combat_calc::{
    CalcError, CalculationRequest, Calculator, CalculatorConfig, LockSet, Mode, OffensiveSample,
    Skill, SkillSet,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Calculate combat level
    Combat,
    /// Calculate missing levels for the --combat target
    Missing,
    /// Infer a skill level from --damage and --bonus
    Offensive,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Combat => Mode::CombatLevel,
            ModeArg::Missing => Mode::MissingLevels,
            ModeArg::Offensive => Mode::OffensiveLevel,
        }
    }
}

/// Combat level calculator
#[derive(Parser, Debug)]
#[command(name = "combat-calc")]
#[command(about = "Calculate a combat level, or the levels missing to reach one")]
struct Args {
    #[arg(long)]
    attack: Option<String>,
    #[arg(long)]
    strength: Option<String>,
    #[arg(long)]
    defence: Option<String>,
    #[arg(long)]
    hitpoints: Option<String>,
    #[arg(long)]
    prayer: Option<String>,
    #[arg(long)]
    ranged: Option<String>,
    #[arg(long)]
    magic: Option<String>,

    /// Target combat level (missing mode)
    #[arg(long)]
    combat: Option<String>,

    /// Skill the search may not raise (repeatable)
    #[arg(long = "lock", value_name = "SKILL")]
    locks: Vec<String>,

    #[arg(long, value_enum, default_value = "combat")]
    mode: ModeArg,

    /// Observed damage roll (offensive mode)
    #[arg(long)]
    damage: Option<String>,

    /// Offensive gear bonus (offensive mode)
    #[arg(long)]
    bonus: Option<String>,

    /// Damage sample was taken in the aggressive stance
    #[arg(long)]
    aggressive: bool,

    /// Skill to receive the inferred level instead of prompting
    #[arg(long, value_name = "SKILL")]
    assign: Option<String>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    fn fields(&self) -> Vec<(&str, &str)> {
        let named = [
            (Skill::Attack.name(), &self.attack),
            (Skill::Strength.name(), &self.strength),
            (Skill::Defence.name(), &self.defence),
            (Skill::Hitpoints.name(), &self.hitpoints),
            (Skill::Prayer.name(), &self.prayer),
            (Skill::Ranged.name(), &self.ranged),
            (Skill::Magic.name(), &self.magic),
            (COMBAT_FIELD, &self.combat),
        ];
        named
            .into_iter()
            .filter_map(|(name, text)| text.as_deref().map(|t| (name, t)))
            .collect()
    }

    fn request(&self) -> Result<CalculationRequest> {
        let skills = SkillSet::from_fields(self.fields())?;
        let locks = self
            .locks
            .iter()
            .map(|name| name.parse::<Skill>())
            .collect::<Result<LockSet>>()?;
        let sample = OffensiveSample::new(
            self.damage.as_deref().map_or(0.0, parse_level),
            self.bonus.as_deref().map_or(0.0, parse_level),
        );

        Ok(CalculationRequest::new(skills, self.mode.into())
            .with_locks(locks)
            .with_sample(sample, self.aggressive))
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::default(),
    };
    let request = args.request()?;

    let mut prompt: Box<dyn SkillPrompt> = match &args.assign {
        Some(name) => Box::new(FixedChoice(Some(name.parse::<SkillChoice>()?))),
        None => Box::new(StdinPrompt::new(io::stdin().lock(), io::stderr())),
    };

    let calculator = Calculator::new(config);
    let outcome = calculator.run(&request, prompt.as_mut())?;

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.render(calculator.config().display_precision));
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ CalcError::CombatLevelTooHigh { .. }) => {
            eprintln!("Warning: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
