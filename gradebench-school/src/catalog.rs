//! Skill catalog shared by every student of a run

use crate::error::SchoolError;

/// Skills students may study, in catalog order
pub const DEFAULT_SKILLS: [&str; 5] = ["Channels", "Types", "Pointers", "Structs", "Slices"];

/// Ordered, immutable list of skill names.
///
/// Built once per process and shared read-only (behind an `Arc`) by every
/// strategy and task. Students study a prefix of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCatalog {
    skills: Vec<String>,
}

impl SkillCatalog {
    /// Build a catalog from skill names; fails if `skills` is empty.
    pub fn new<I, S>(skills: I) -> Result<Self, SchoolError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let skills: Vec<String> = skills.into_iter().map(Into::into).collect();
        if skills.is_empty() {
            return Err(SchoolError::EmptyCatalog);
        }
        Ok(Self { skills })
    }

    /// Number of skills in the catalog
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Whether the catalog holds no skills
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// The first `count` skills, clamped to `1..=len`
    pub fn prefix(&self, count: usize) -> &[String] {
        &self.skills[..count.clamp(1, self.skills.len())]
    }

    /// All skills
    pub fn skills(&self) -> &[String] {
        &self.skills
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self {
            skills: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
