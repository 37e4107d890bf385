//! Docker options report
//!
//! Builds the per-application report: one flag per phase
//! (`--docker-options-build`, ...) mapped to that phase's options rendered on
//! a single line. Reports keep phase enumeration order.

use crate::apps::AppRegistry;
use crate::errors::{ReportError, Result};
use crate::paths::PathResolver;
use crate::phase::Phase;
use crate::store;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, instrument};

/// Flag value that asks for the full report, same as passing no flag
pub const SHOW_ALL_SENTINEL: &str = "true";

/// Full report for one application
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppReport {
    /// Application name
    pub app: String,
    /// Report flag to rendered options, in phase order
    pub flags: IndexMap<String, String>,
}

/// One unit of report output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportItem {
    /// Every flag for an application
    Full(AppReport),
    /// A single flag's value for an application
    Flag {
        app: String,
        flag: String,
        value: String,
    },
}

/// All report flag names, in phase order.
pub fn known_flags() -> Vec<String> {
    Phase::all().iter().map(Phase::report_flag).collect()
}

/// Turn `--docker-options-build` into the `Docker options build:` label.
pub fn flag_label(flag: &str) -> String {
    let words = flag.trim_start_matches('-').replace('-', " ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => format!("{}{}:", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

/// Produces reports from the option store
pub struct Reporter<'a> {
    resolver: &'a PathResolver,
    registry: &'a dyn AppRegistry,
}

impl<'a> Reporter<'a> {
    /// Create a reporter over a resolver and an application registry
    pub fn new(resolver: &'a PathResolver, registry: &'a dyn AppRegistry) -> Self {
        Self { resolver, registry }
    }

    /// Flag to rendered options for `app`, for every phase or just one.
    pub fn report_for(
        &self,
        app: &str,
        phase_filter: Option<Phase>,
    ) -> Result<IndexMap<String, String>> {
        let mut flags = IndexMap::new();
        for phase in Phase::all()
            .iter()
            .copied()
            .filter(|phase| phase_filter.map_or(true, |wanted| wanted == *phase))
        {
            let path = self.resolver.resolve(app, phase);
            flags.insert(phase.report_flag(), store::render_flat(&path)?);
        }
        Ok(flags)
    }

    /// Report on one application, or on every application when `app_filter` is `None`.
    ///
    /// With a flag filter only that flag's value is returned per application.
    /// The flag must be a known report flag, and it must have a value.
    #[instrument(skip(self))]
    pub fn report_all(
        &self,
        app_filter: Option<&str>,
        flag_filter: Option<&str>,
    ) -> Result<Vec<ReportItem>> {
        let flag_filter = flag_filter.filter(|flag| !flag.is_empty() && *flag != SHOW_ALL_SENTINEL);

        let apps = match app_filter {
            Some(app) => vec![app.to_string()],
            None => self.registry.list_apps()?,
        };

        let mut items = Vec::with_capacity(apps.len());
        for app in apps {
            items.push(self.report_single(&app, flag_filter)?);
        }
        Ok(items)
    }

    fn report_single(&self, app: &str, flag_filter: Option<&str>) -> Result<ReportItem> {
        self.registry.verify_app_name(app)?;
        let mut flags = self.report_for(app, None)?;
        debug!(app = %app, "Built docker options report");

        let Some(flag) = flag_filter else {
            return Ok(ReportItem::Full(AppReport {
                app: app.to_string(),
                flags,
            }));
        };

        let Some(value) = flags.shift_remove(flag) else {
            return Err(ReportError::InvalidFlag {
                flag: flag.to_string(),
                valid: known_flags(),
            }
            .into());
        };
        if value.is_empty() {
            return Err(ReportError::NotDeployed {
                app: app.to_string(),
                flag: flag.to_string(),
            }
            .into());
        }
        Ok(ReportItem::Flag {
            app: app.to_string(),
            flag: flag.to_string(),
            value,
        })
    }
}
