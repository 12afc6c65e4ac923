use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "yahtzee",
    version,
    about = "Yahtzee dice game: play, simulate and inspect scoring rules"
)]
pub struct YahtzeeCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one full game
    Play {
        #[arg(long, value_enum, default_value_t = Vs::Human)]
        vs: Vs,
        #[arg(long)]
        seed: Option<u64>,
        /// Strategy used in AI mode (defaults to the configured one)
        #[arg(long)]
        ai: Option<String>,
        /// Append turn records to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Let a strategy play many games and summarize the totals
    Sim {
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        ai: Option<String>,
        /// Append turn records to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Roll one hand and show what every rule would pay
    Roll {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the scoring rules
    Rules {
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Who makes the decisions in `play`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    /// Interactive prompts on stdin
    Human,
    /// A strategy plays every turn
    Ai,
}

impl Vs {
    /// ```
    /// # use yahtzee_cli::Vs;
    /// assert_eq!(Vs::Ai.as_str(), "ai");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Ai => "ai",
        }
    }
}
