//! Phase registry
//!
//! The closed set of container lifecycle phases that docker options can be
//! attached to, plus the filtering used to turn a caller-supplied phase list
//! into phases that are safe to act on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// A lifecycle phase at which stored options are injected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// `docker build` invocations
    Build,
    /// `docker run` invocations that start the deployed app
    Deploy,
    /// One-off `docker run` invocations (`dokku run`)
    Run,
}

impl Phase {
    /// All registered phases in enumeration order.
    pub fn all() -> &'static [Phase] {
        &[Phase::Build, Phase::Deploy, Phase::Run]
    }

    /// Get the phase name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Build => "build",
            Phase::Deploy => "deploy",
            Phase::Run => "run",
        }
    }

    /// Capitalised name used in display headings ("Build options:").
    pub fn title(&self) -> &'static str {
        match self {
            Phase::Build => "Build",
            Phase::Deploy => "Deploy",
            Phase::Run => "Run",
        }
    }

    /// Report flag addressing this phase, e.g. `--docker-options-build`.
    pub fn report_flag(&self) -> String {
        format!("--docker-options-{}", self.as_str())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name is not one of the registered phases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPhase(pub String);

impl fmt::Display for UnknownPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phase(s) must be one of {}", registered_names())
    }
}

impl std::error::Error for UnknownPhase {}

impl FromStr for Phase {
    type Err = UnknownPhase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::all()
            .iter()
            .copied()
            .find(|phase| phase.as_str() == s)
            .ok_or_else(|| UnknownPhase(s.to_string()))
    }
}

/// The registered phase names joined with commas.
pub fn registered_names() -> String {
    Phase::all()
        .iter()
        .map(Phase::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Keep the requested names that are registered phases, in request order.
///
/// Unknown names are dropped with a warning. An empty result is not an error
/// here; callers decide whether "no phases" is acceptable.
pub fn filter_valid<I, S>(requested: I) -> Vec<Phase>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut phases = Vec::new();
    for name in requested {
        match name.as_ref().parse::<Phase>() {
            Ok(phase) => phases.push(phase),
            Err(err) => warn!(phase = %err.0, "{}", err),
        }
    }
    phases
}

/// Split a comma separated phase argument (`build,deploy`) and filter it.
pub fn parse_phase_list(list: &str) -> Vec<Phase> {
    filter_valid(list.split(',').map(str::trim).filter(|s| !s.is_empty()))
}
