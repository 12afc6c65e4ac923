use serde::{Deserialize, Serialize};
use std::fs;
use yahtzee_engine::game::GameSettings;
use yahtzee_engine::rules::{Rule, RuleKind, standard_rules};

/// Environment variable naming a TOML configuration file.
pub const CONFIG_ENV: &str = "YAHTZEE_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub dice: usize,
    pub sides: u8,
    pub max_rolls: u8,
    pub seed: Option<u64>,
    pub ai: String,
    pub fibonyahtzee: bool,
    pub custom_rules: Vec<CustomRule>,
}

/// An extra exact-pattern rule declared in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomRule {
    pub name: String,
    pub target: Vec<u8>,
    pub bonus: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub dice: ValueSource,
    pub sides: ValueSource,
    pub max_rolls: ValueSource,
    pub seed: ValueSource,
    pub ai: ValueSource,
    pub fibonyahtzee: ValueSource,
    pub custom_rules: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            dice: ValueSource::Default,
            sides: ValueSource::Default,
            max_rolls: ValueSource::Default,
            seed: ValueSource::Default,
            ai: ValueSource::Default,
            fibonyahtzee: ValueSource::Default,
            custom_rules: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dice: 5,
            sides: 6,
            max_rolls: 3,
            seed: None,
            ai: "greedy".into(),
            fibonyahtzee: true,
            custom_rules: Vec::new(),
        }
    }
}

impl Config {
    /// The rule table: the standard rules (FibonYahtzee optional) followed by
    /// any custom exact-pattern rules.
    pub fn rules(&self) -> Vec<Rule> {
        let mut rules: Vec<Rule> = standard_rules()
            .into_iter()
            .filter(|r| self.fibonyahtzee || *r != Rule::fibonyahtzee())
            .collect();
        rules.extend(self.custom_rules.iter().map(|c| {
            Rule::new(
                c.name.clone(),
                RuleKind::ExactMultiset {
                    target: c.target.clone(),
                    bonus: c.bonus,
                },
            )
        }));
        rules
    }

    pub fn game_settings(&self, seed: u64) -> GameSettings {
        GameSettings {
            dice: self.dice,
            sides: self.sides,
            max_rolls: self.max_rolls,
            seed,
            rules: self.rules(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from_env(|key| std::env::var(key).ok())
}

/// Resolves defaults, then the file named by `YAHTZEE_CONFIG`, then the
/// `YAHTZEE_*` overrides, reading variables through `var`.
pub fn load_from_env<F>(var: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = var(CONFIG_ENV).filter(|p| !p.is_empty()) {
        let s = fs::read_to_string(path)?;
        apply_file(&mut cfg, &mut sources, &s)?;
    }

    if let Some(seed) = var("YAHTZEE_SEED").filter(|v| !v.is_empty()) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(dice) = var("YAHTZEE_DICE").filter(|v| !v.is_empty()) {
        cfg.dice = dice
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid dice count".into()))?;
        sources.dice = ValueSource::Env;
    }
    if let Some(sides) = var("YAHTZEE_SIDES").filter(|v| !v.is_empty()) {
        cfg.sides = sides
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid sides".into()))?;
        sources.sides = ValueSource::Env;
    }
    if let Some(ai) = var("YAHTZEE_AI").filter(|v| !v.is_empty()) {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    dice: Option<usize>,
    #[serde(default)]
    sides: Option<u8>,
    #[serde(default)]
    max_rolls: Option<u8>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
    #[serde(default)]
    fibonyahtzee: Option<bool>,
    #[serde(default)]
    custom_rules: Option<Vec<CustomRule>>,
}

fn apply_file(
    cfg: &mut Config,
    sources: &mut ConfigSources,
    contents: &str,
) -> Result<(), ConfigError> {
    let f: FileConfig = toml::from_str(contents)?;
    if let Some(v) = f.dice {
        cfg.dice = v;
        sources.dice = ValueSource::File;
    }
    if let Some(v) = f.sides {
        cfg.sides = v;
        sources.sides = ValueSource::File;
    }
    if let Some(v) = f.max_rolls {
        cfg.max_rolls = v;
        sources.max_rolls = ValueSource::File;
    }
    if let Some(v) = f.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::File;
    }
    if let Some(v) = f.ai {
        cfg.ai = v;
        sources.ai = ValueSource::File;
    }
    if let Some(v) = f.fibonyahtzee {
        cfg.fibonyahtzee = v;
        sources.fibonyahtzee = ValueSource::File;
    }
    if let Some(v) = f.custom_rules {
        cfg.custom_rules = v;
        sources.custom_rules = ValueSource::File;
    }
    Ok(())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.dice == 0 {
        return Err(ConfigError::Invalid("Invalid configuration: dice must be >=1".into()));
    }
    if cfg.sides == 0 {
        return Err(ConfigError::Invalid("Invalid configuration: sides must be >=1".into()));
    }
    if cfg.max_rolls == 0 {
        return Err(ConfigError::Invalid("Invalid configuration: max_rolls must be >=1".into()));
    }
    let mut names: Vec<String> = standard_rules()
        .into_iter()
        .filter(|r| cfg.fibonyahtzee || *r != Rule::fibonyahtzee())
        .map(|r| r.name().to_string())
        .collect();
    for rule in &cfg.custom_rules {
        if rule.name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Invalid configuration: custom rule needs a name".into(),
            ));
        }
        if rule.target.len() != cfg.dice {
            return Err(ConfigError::Invalid(format!(
                "Invalid configuration: rule '{}' has {} faces, expected {}",
                rule.name,
                rule.target.len(),
                cfg.dice
            )));
        }
        if let Some(face) = rule.target.iter().find(|&&f| f == 0 || f > cfg.sides) {
            return Err(ConfigError::Invalid(format!(
                "Invalid configuration: rule '{}' uses face {} on a {}-sided die",
                rule.name, face, cfg.sides
            )));
        }
        if names.iter().any(|n| n.eq_ignore_ascii_case(rule.name.trim())) {
            return Err(ConfigError::Invalid(format!(
                "Invalid configuration: rule name '{}' is already in the rule table",
                rule.name
            )));
        }
        names.push(rule.name.trim().to_string());
    }
    Ok(())
}
