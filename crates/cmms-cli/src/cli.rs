//! CLI argument definitions for the CMMS console.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cmms",
    version,
    about = "CMMS Console - factory maintenance records from the terminal",
    long_about = "Query and maintain factory maintenance records.\n\n\
                  Lists equipment, work orders and calibrations with the same\n\
                  search, filter and paging semantics as the desktop console,\n\
                  and moves datasets in and out via JSON stores and CSV files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// JSON dataset store to operate on (built-in sample data when omitted).
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List equipment records.
    Equipment(EquipmentArgs),

    /// List maintenance work orders.
    WorkOrders(WorkOrderArgs),

    /// List instrument calibrations.
    Calibrations(CalibrationArgs),

    /// Print dashboard counts: equipment by status, open orders, overdue work.
    Summary,

    /// Export a record set as CSV.
    Export(ExportArgs),

    /// Import equipment from a CSV file into the dataset store.
    Import(ImportArgs),

    /// Write the built-in sample dataset to a JSON store.
    Seed(SeedArgs),
}

#[derive(Parser)]
pub struct EquipmentArgs {
    /// Filter by status (Running, Standby, Maintenance, Retired).
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by category (Mechanical, Electrical, Instrumentation, HVAC, Utility).
    #[arg(long)]
    pub category: Option<String>,

    /// Free-text search over code, name and location.
    #[arg(long)]
    pub search: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Parser)]
pub struct WorkOrderArgs {
    /// Filter by status (Pending, "In Progress", Completed, Cancelled).
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by priority (Low, Medium, High, Critical).
    #[arg(long)]
    pub priority: Option<String>,

    /// Free-text search over number, title, equipment and assignee.
    #[arg(long)]
    pub search: Option<String>,

    /// Only open orders whose due date has passed.
    #[arg(long)]
    pub overdue: bool,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Parser)]
pub struct CalibrationArgs {
    /// Only instruments past their calibration due date.
    #[arg(long)]
    pub overdue: bool,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Parser)]
pub struct PageArgs {
    /// Page to display (1-based).
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page.
    #[arg(long = "page-size", default_value_t = 25)]
    pub page_size: usize,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Record set to export.
    #[arg(value_enum)]
    pub what: ExportKindArg,

    /// Output CSV path.
    #[arg(long, value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportKindArg {
    Equipment,
    WorkOrders,
    Inspections,
    PmSchedules,
    Meters,
    Calibrations,
    Organizations,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// CSV file with equipment rows
    /// (code,name,category,location,manufacturer,model,commissioned,status).
    #[arg(value_name = "CSV")]
    pub input: PathBuf,
}

#[derive(Parser)]
pub struct SeedArgs {
    /// JSON store path to create.
    #[arg(value_name = "PATH")]
    pub output: PathBuf,
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
