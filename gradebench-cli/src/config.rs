//! Configuration loading from gradebench.toml
//!
//! Gradebench configuration can be specified in a `gradebench.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.

use gradebench_school::{
    DEFAULT_ALLOCATION_ITERATIONS, DEFAULT_CHANNELING_STUDENTS, DEFAULT_SKILLS, DEFAULT_STUDENTS,
    Population, SLOW_TEAM_SIZE, SkillCatalog, Workload,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name searched for by [`GradeConfig::discover`]
pub const CONFIG_FILE: &str = "gradebench.toml";

/// Gradebench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GradeConfig {
    /// Class sizes
    #[serde(default)]
    pub population: PopulationConfig,
    /// Skill catalog
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Slow-team suite configuration
    #[serde(default)]
    pub slow_team: SlowTeamConfig,
    /// Allocation suite configuration
    #[serde(default)]
    pub allocation: AllocationConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Class sizes per strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Students for every strategy except channeling
    #[serde(default = "default_students")]
    pub students: u64,
    /// Students for the channeling strategy
    #[serde(default = "default_channeling_students")]
    pub channeling_students: u64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            students: default_students(),
            channeling_students: default_channeling_students(),
        }
    }
}

fn default_students() -> u64 {
    DEFAULT_STUDENTS
}
fn default_channeling_students() -> u64 {
    DEFAULT_CHANNELING_STUDENTS
}

/// Skill catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Skill names, in the order students study them
    #[serde(default = "default_skills")]
    pub skills: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            skills: default_skills(),
        }
    }
}

fn default_skills() -> Vec<String> {
    DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
}

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Run the recursive and tail-recursive strategies, which overflow the stack at full size
    #[serde(default)]
    pub allow_overflow: bool,
    /// Runs per planned entry
    #[serde(default = "default_repeat")]
    pub repeat: u32,
    /// Worker threads for the channeling runtime (0 = tokio default)
    #[serde(default)]
    pub worker_threads: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            allow_overflow: false,
            repeat: default_repeat(),
            worker_threads: 0,
        }
    }
}

fn default_repeat() -> u32 {
    1
}

/// Slow-team suite configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlowTeamConfig {
    /// Students in the slow team
    #[serde(default = "default_slow_students")]
    pub students: u64,
    /// Grading delay per student (e.g., "1s", "250ms")
    #[serde(default = "default_slow_delay")]
    pub delay: String,
}

impl Default for SlowTeamConfig {
    fn default() -> Self {
        Self {
            students: default_slow_students(),
            delay: default_slow_delay(),
        }
    }
}

fn default_slow_students() -> u64 {
    SLOW_TEAM_SIZE
}
fn default_slow_delay() -> String {
    "1s".to_string()
}

/// Allocation suite configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationConfig {
    /// Iterations per allocation runner
    #[serde(default = "default_iterations")]
    pub iterations: u64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
        }
    }
}

fn default_iterations() -> u64 {
    DEFAULT_ALLOCATION_ITERATIONS
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default report format: "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl GradeConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    ///
    /// Returns the path it was loaded from. A file that exists but fails to
    /// parse is an error, not a silent fallback to defaults.
    pub fn discover() -> anyhow::Result<Option<(PathBuf, Self)>> {
        let Ok(mut dir) = std::env::current_dir() else {
            return Ok(None);
        };
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                let config = Self::load(&config_path)?;
                return Ok(Some((config_path, config)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Build the shared skill catalog
    pub fn skill_catalog(&self) -> anyhow::Result<SkillCatalog> {
        Ok(SkillCatalog::new(self.catalog.skills.iter().cloned())?)
    }

    /// Sizes every suite entry runs at
    pub fn workload(&self) -> anyhow::Result<Workload> {
        let delay_ns = Self::parse_duration(&self.slow_team.delay)?;
        Ok(Workload {
            students: Population::new(self.population.students)?,
            channeling_students: Population::new(self.population.channeling_students)?,
            slow_students: Population::new(self.slow_team.students)?,
            slow_delay: Duration::from_nanos(delay_ns),
            allocation_iterations: self.allocation.iterations,
        })
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Gradebench Configuration

[population]
# Students per strategy (imperative, functional, recursive, tail-recursive, higher-order)
students = 10000000
# Students for the channeling strategy
channeling_students = 1000000

[catalog]
# Skills in study order; each student studies a prefix of at most four
skills = ["Channels", "Types", "Pointers", "Structs", "Slices"]

[runner]
# Enable recursive and tail-recursive strategies (they overflow the stack at full size)
allow_overflow = false
# Runs per strategy
repeat = 1
# Worker threads for the channeling runtime (0 = tokio default)
worker_threads = 0

[slow_team]
# Students in the slow team
students = 5
# Grading delay per student
delay = "1s"

[allocation]
# Iterations per allocation runner
iterations = 1000000

[output]
# Report format: human or json
format = "human"
"#
        .to_string()
    }

    /// Parse duration string (e.g., "1s", "500ms", "2m") to nanoseconds
    pub fn parse_duration(s: &str) -> anyhow::Result<u64> {
        let s = s.trim();
        if s.is_empty() {
            return Err(anyhow::anyhow!("Empty duration string"));
        }

        let (num_part, unit_part) = s
            .char_indices()
            .find(|(_, c)| c.is_alphabetic() || *c == 'µ')
            .map(|(i, _)| s.split_at(i))
            .unwrap_or((s, "s"));

        let value: f64 = num_part
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid duration number: {}", num_part))?;
        if value < 0.0 {
            return Err(anyhow::anyhow!("Negative duration: {}", s));
        }

        let multiplier: u64 = match unit_part.to_lowercase().as_str() {
            "ns" => 1,
            "us" | "µs" => 1_000,
            "ms" => 1_000_000,
            "s" | "" => 1_000_000_000,
            "m" | "min" => 60_000_000_000,
            _ => return Err(anyhow::anyhow!("Unknown duration unit: {}", unit_part)),
        };

        Ok((value * multiplier as f64) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GradeConfig::default();
        assert_eq!(config.population.students, 10_000_000);
        assert_eq!(config.population.channeling_students, 1_000_000);
        assert_eq!(config.catalog.skills.len(), 5);
        assert!(!config.runner.allow_overflow);
        assert_eq!(config.runner.repeat, 1);
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(GradeConfig::parse_duration("1s").unwrap(), 1_000_000_000);
        assert_eq!(GradeConfig::parse_duration("500ms").unwrap(), 500_000_000);
        assert_eq!(GradeConfig::parse_duration("100us").unwrap(), 100_000);
        assert_eq!(GradeConfig::parse_duration("250µs").unwrap(), 250_000);
        assert_eq!(GradeConfig::parse_duration("1000ns").unwrap(), 1000);
        assert_eq!(GradeConfig::parse_duration("2m").unwrap(), 120_000_000_000);
        assert_eq!(GradeConfig::parse_duration("1.5s").unwrap(), 1_500_000_000);
        assert_eq!(GradeConfig::parse_duration("3").unwrap(), 3_000_000_000);
        assert!(GradeConfig::parse_duration("").is_err());
        assert!(GradeConfig::parse_duration("5 fortnights").is_err());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [population]
            students = 2000

            [runner]
            allow_overflow = true
        "#;

        let config: GradeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.population.students, 2000);
        assert!(config.runner.allow_overflow);
        // Defaults should still apply
        assert_eq!(config.population.channeling_students, 1_000_000);
        assert_eq!(config.output.format, "human");
        assert_eq!(config.slow_team.delay, "1s");
    }

    #[test]
    fn test_default_toml_parses() {
        let config: GradeConfig = toml::from_str(&GradeConfig::default_toml()).unwrap();
        assert_eq!(config.population.students, 10_000_000);
        assert_eq!(config.catalog.skills, default_skills());
        assert_eq!(config.allocation.iterations, 1_000_000);
    }

    #[test]
    fn test_workload_from_config() {
        let mut config = GradeConfig::default();
        config.population.students = 300;
        config.slow_team.delay = "20ms".to_string();

        let workload = config.workload().unwrap();
        assert_eq!(workload.students.get(), 300);
        assert_eq!(workload.slow_delay, Duration::from_millis(20));
    }

    #[test]
    fn test_zero_students_rejected() {
        let mut config = GradeConfig::default();
        config.population.channeling_students = 0;
        assert!(config.workload().is_err());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let config: GradeConfig = toml::from_str("[catalog]\nskills = []\n").unwrap();
        assert!(config.skill_catalog().is_err());
    }
}
