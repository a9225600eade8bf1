//! Command line definition for the `gagso` binary

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use gagso_domain::{Config, GagsoError, Result, Role, YearMonth};
use serde_json::{Map, Value};

#[derive(Debug, Parser)]
#[command(name = "gagso")]
#[command(about = "Gagso schedule client", long_about = None)]
pub struct Cli {
    /// Config file (JSON or TOML). Without it, the environment is tried first,
    /// then the standard locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Act as this employee
    #[arg(long, global = true)]
    pub employee_id: Option<String>,

    /// Role of the acting user: EMPLOYEE or ADMINISTRATOR
    #[arg(long, global = true)]
    pub role: Option<Role>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Command line flags win over configured session values.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(employee_id) = &self.employee_id {
            config.session.employee_id = Some(employee_id.clone());
        }
        if let Some(role) = self.role {
            config.session.role = role;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the six-week calendar grid of a month
    Month {
        /// Defaults to the current year
        #[arg(long)]
        year: Option<i32>,
        /// 1-12, defaults to the current month
        #[arg(long)]
        month: Option<u32>,
    },
    /// List the schedules starting on one day (YYYY-MM-DD)
    Day { date: NaiveDate },
    /// Show one schedule with its timing and visibility
    Show { schedule_id: String },
    /// Register a new schedule
    Register(RegisterArgs),
    /// Search schedules by title keyword
    Search { keyword: String },
    /// Schedules of today
    Today,
    /// Schedules starting within the next week
    Upcoming,
    /// Schedule counters of the acting user
    Stats,
    /// Look up participants by name, department or id
    Employees {
        #[arg(default_value = "")]
        keyword: String,
    },
    /// Check whether the acting user may view a schedule
    Access { schedule_id: String },
}

/// Month selected by `--year`/`--month`, falling back to `today`'s.
pub fn resolve_month(year: Option<i32>, month: Option<u32>, today: NaiveDate) -> Result<YearMonth> {
    let current = YearMonth::of(today);
    let year = year.unwrap_or(current.year());
    let month = month.unwrap_or(current.month());
    YearMonth::new(year, month)
        .ok_or_else(|| GagsoError::InvalidInput(format!("Invalid month: {year}-{month}")))
}

#[derive(Debug, Clone, Default, Args)]
pub struct RegisterArgs {
    /// Raw form payload as a JSON object; the flags below only fill keys it
    /// does not set
    #[arg(long)]
    pub form: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Start, `YYYY-MM-DDTHH:MM`
    #[arg(long)]
    pub start: Option<String>,

    /// End, `YYYY-MM-DDTHH:MM`
    #[arg(long)]
    pub end: Option<String>,

    /// public, group or private
    #[arg(long)]
    pub visibility: Option<String>,

    /// Alarm time, `YYYY-MM-DDTHH:MM`; enables the alarm
    #[arg(long)]
    pub alarm: Option<String>,

    /// Participant employee id (repeatable)
    #[arg(long = "participant")]
    pub participants: Vec<String>,
}

impl RegisterArgs {
    /// Build the form state the registration service normalizes.
    ///
    /// # Errors
    ///
    /// Returns `GagsoError::InvalidInput` when `--form` is not a JSON object.
    pub fn to_form(&self) -> Result<Value> {
        let mut form = match &self.form {
            Some(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(GagsoError::InvalidInput("--form must be a JSON object".into()))
                }
                Err(e) => return Err(GagsoError::InvalidInput(format!("Invalid --form JSON: {e}"))),
            },
            None => Map::new(),
        };

        fill(&mut form, "title", self.title.clone().map(Value::String));
        fill(&mut form, "description", self.description.clone().map(Value::String));
        fill(&mut form, "startDateTime", self.start.clone().map(Value::String));
        fill(&mut form, "endDateTime", self.end.clone().map(Value::String));
        fill(&mut form, "visibility", self.visibility.clone().map(Value::String));
        if let Some(alarm) = &self.alarm {
            fill(&mut form, "alarmEnabled", Some(Value::Bool(true)));
            fill(&mut form, "alarmTime", Some(Value::String(alarm.clone())));
        }
        if !self.participants.is_empty() {
            let ids = self.participants.iter().cloned().map(Value::String).collect();
            fill(&mut form, "selectedParticipants", Some(Value::Array(ids)));
        }

        Ok(Value::Object(form))
    }
}

fn fill(form: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        form.entry(key.to_string()).or_insert(value);
    }
}
