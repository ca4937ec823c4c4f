//! `CurrentDateTime` — the local date-time at the moment of the call.

use chrono::{DateTime, Local, SecondsFormat, SubsecRound};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use super::spec::ToolSpec;
use super::{Tool, names};
use crate::descriptor::Descriptor;

/// Source of the current local time.
pub type Clock = fn() -> DateTime<Local>;

/// The `CurrentDateTime` tool takes no arguments; anything sent is ignored.
#[derive(Deserialize, JsonSchema, Debug, Clone, Default, PartialEq, Eq)]
#[schemars(description = "No arguments needed.")]
pub struct CurrentTimeArgs {}

/// Local time read when the tool was invoked, truncated to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentTime {
    pub at: DateTime<Local>,
}

#[derive(Debug, Clone, Copy)]
pub struct CurrentTimeTool {
    clock: Clock,
}

impl CurrentTimeTool {
    pub fn new() -> Self {
        Self::with_clock(Local::now)
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }
}

impl Default for CurrentTimeTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CurrentTimeTool {
    type Request = CurrentTimeArgs;
    type Response = CurrentTime;

    fn invoke(&self, _request: CurrentTimeArgs) -> CurrentTime {
        let at = (self.clock)().trunc_subsecs(0);
        debug!(%at, "{} request", names::CURRENT_DATE_TIME);
        CurrentTime { at }
    }
}

/// RFC 3339 with the local offset, e.g. `2024-05-17T09:30:15+02:00`.
pub fn reduce(time: &CurrentTime) -> String {
    time.at.to_rfc3339_opts(SecondsFormat::Secs, false)
}

pub fn spec() -> ToolSpec {
    ToolSpec::builder(names::CURRENT_DATE_TIME, "Get the current local date and time")
        .when_to_use(
            "When the answer depends on today's date, the current year, or the time of day",
        )
        .output_format("RFC 3339 timestamp with UTC offset, second precision")
        .build()
}

/// Wrap `tool` with its name, description, and reducer.
pub fn descriptor(tool: CurrentTimeTool) -> Descriptor {
    Descriptor::from_spec(&spec(), tool, reduce)
}
