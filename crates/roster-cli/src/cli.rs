//! CLI argument definitions for the roster.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_model::{EmployeeId, SortColumn, ViewMode};
use roster_validate::Field;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Employee roster - list, create, edit and delete employee records",
    long_about = "Manage employee records kept in a local state file.\n\n\
                  Search, sort, page size and view mode are remembered between runs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow names, emails and phone numbers to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Directory holding the saved state (overrides ROSTER_DATA_DIR and settings).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the current page of employees.
    List,

    /// Show one employee.
    Show {
        #[arg(value_name = "ID")]
        id: EmployeeId,
    },

    /// Add an employee.
    Create(EmployeeArgs),

    /// Change fields of an existing employee.
    Edit {
        #[arg(value_name = "ID")]
        id: EmployeeId,

        #[command(flatten)]
        fields: EmployeeArgs,
    },

    /// Delete an employee after asking for confirmation.
    Delete {
        #[arg(value_name = "ID")]
        id: EmployeeId,

        /// Skip the confirmation prompt.
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Filter the list; an empty query shows everyone.
    Search {
        #[arg(value_name = "TEXT", default_value = "")]
        query: String,
    },

    /// Sort by a column; repeating the active column flips the direction.
    Sort {
        #[arg(value_name = "COLUMN")]
        column: SortColumn,
    },

    /// Go to a page of the list.
    Page {
        #[arg(value_name = "N")]
        page: usize,
    },

    /// Set how many employees are shown per page.
    PageSize {
        #[arg(value_name = "N")]
        size: usize,
    },

    /// Switch between table and grid layout.
    View {
        #[arg(value_enum)]
        mode: ViewModeArg,
    },

    /// Open a page by path: `/`, `/create` or `/edit/{id}`.
    Open {
        #[arg(value_name = "PATH")]
        path: String,

        #[command(flatten)]
        fields: EmployeeArgs,
    },
}

/// Employee form fields. Only the given ones are applied.
#[derive(Args, Debug, Clone, Default)]
pub struct EmployeeArgs {
    #[arg(long = "first-name")]
    pub first_name: Option<String>,

    #[arg(long = "last-name")]
    pub last_name: Option<String>,

    /// YYYY-MM-DD
    #[arg(long = "date-of-employment", alias = "hired")]
    pub date_of_employment: Option<String>,

    /// YYYY-MM-DD
    #[arg(long = "date-of-birth", alias = "born")]
    pub date_of_birth: Option<String>,

    /// Ten digits.
    #[arg(long = "phone-number", alias = "phone")]
    pub phone_number: Option<String>,

    #[arg(long = "email-address", alias = "email")]
    pub email_address: Option<String>,

    /// analytics or tech
    #[arg(long = "department")]
    pub department: Option<String>,

    /// junior, medior or senior
    #[arg(long = "position")]
    pub position: Option<String>,
}

impl EmployeeArgs {
    /// Fields that were given on the command line.
    pub fn values(&self) -> Vec<(Field, &str)> {
        [
            (Field::FirstName, &self.first_name),
            (Field::LastName, &self.last_name),
            (Field::DateOfEmployment, &self.date_of_employment),
            (Field::DateOfBirth, &self.date_of_birth),
            (Field::PhoneNumber, &self.phone_number),
            (Field::EmailAddress, &self.email_address),
            (Field::Department, &self.department),
            (Field::Position, &self.position),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|value| (field, value)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ViewModeArg {
    Table,
    Grid,
}

impl From<ViewModeArg> for ViewMode {
    fn from(arg: ViewModeArg) -> Self {
        match arg {
            ViewModeArg::Table => ViewMode::Table,
            ViewModeArg::Grid => ViewMode::Grid,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
