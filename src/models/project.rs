//! Project content records
//!
//! Everything the dossier says about the project apart from the budget. These
//! are plain records: defined once (built in or loaded from a content file)
//! and only read during rendering.

use serde::{Deserialize, Serialize};

/// Credit role whose holder appears in the hero byline
pub const DIRECTOR_ROLE: &str = "Dirección y creación";

/// A production phase in the overall schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    /// Duration range, e.g. "Mes 1-6"
    pub duration: String,
    pub description: String,
    pub responsible: String,
    pub outcome: String,
}

/// One row of the weekly schedule excerpt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyEntry {
    pub week: u32,
    pub activity: String,
    pub responsible: String,
    pub goal: String,
    pub status: String,
}

/// A team credit: role and the people or entities holding it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    pub role: String,
    pub names: String,
}

/// Contact details printed at the end of the dossier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    /// Social handle, e.g. an Instagram account
    pub social: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Share of the expected audience for one venue type, in percent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceShare {
    pub venue: String,
    pub percent: u32,
}

/// The complete static content of a dossier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub general_objective: String,
    pub objectives: Vec<String>,
    pub phases: Vec<Phase>,
    pub weekly: Vec<WeeklyEntry>,
    pub credits: Vec<Credit>,
    pub contact: ContactInfo,
    /// Free-text audience estimate shown above the reach chart
    pub audience_estimate: String,
    pub audience_reach: Vec<AudienceShare>,
}

impl Project {
    /// Names credited with direction, if such a credit exists
    pub fn director(&self) -> Option<&str> {
        self.credits
            .iter()
            .find(|c| c.role == DIRECTOR_ROLE)
            .map(|c| c.names.as_str())
    }
}
