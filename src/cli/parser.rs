use crate::core::render::OutputFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTimeDiary
/// CLI diary of timed activities with attribute tags, backed by SQLite
#[derive(Parser)]
#[command(
    name = "rtimediary",
    version = env!("CARGO_PKG_VERSION"),
    about = "A time diary CLI: log activities, tag them, search them and see how your day was covered",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Entry fields shared by `add` and `edit`.
#[derive(Args, Debug, Clone, Default)]
pub struct EntryArgs {
    /// Date of the entry (YYYY-MM-DD)
    #[arg(long, short = 'd')]
    pub date: Option<String>,

    /// Start time (HH:MM or HH:MM:SS)
    #[arg(long, short = 's')]
    pub start: Option<String>,

    /// End time (HH:MM or HH:MM:SS)
    #[arg(long, short = 'e')]
    pub end: Option<String>,

    #[arg(long, short = 'n', help = "Name of the activity")]
    pub name: Option<String>,

    #[arg(long, help = "Free-text notes")]
    pub notes: Option<String>,

    #[arg(long, short = 'c', help = "Entry color (#RGB or #RRGGBB)")]
    pub color: Option<String>,

    /// Attribute name to attach (repeatable)
    #[arg(long = "attr", short = 'a', value_name = "NAME")]
    pub attrs: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, $VISUAL, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a diary entry
    Add {
        #[command(flatten)]
        fields: EntryArgs,
    },

    /// Change fields of an existing entry
    Edit {
        /// Entry id
        id: i64,

        #[command(flatten)]
        fields: EntryArgs,

        #[arg(long = "clear-attrs", conflicts_with = "attrs", help = "Remove every attribute")]
        clear_attrs: bool,
    },

    /// Delete an entry by ID
    Del {
        /// Entry id
        id: i64,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// List entries
    List {
        #[arg(long, short, help = "Filter by year/month/day, a custom range or 'all'")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's entries")]
        today: bool,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show one entry with its notes and attributes
    Show {
        /// Entry id
        id: i64,
    },

    /// Overlaps and coverage for one day
    Day {
        /// Day to analyze (YYYY-MM-DD, default today)
        date: Option<String>,

        #[arg(long, help = "Print the analysis as JSON")]
        json: bool,
    },

    /// Search entries with a list of conditions
    Search {
        /// Conditions: "[and|or] [not] <field> <operator> <value>"
        #[arg(value_name = "COND")]
        conditions: Vec<String>,

        #[arg(long, value_name = "FILE", help = "JSON array of conditions")]
        file: Option<String>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        #[arg(long = "show-sql", help = "Print the generated query and its parameters")]
        show_sql: bool,
    },

    /// Manage attributes (tags)
    Attr {
        #[command(subcommand)]
        action: AttrAction,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: OutputFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum AttrAction {
    /// List attributes with their usage
    List,

    /// Create an attribute
    Add {
        name: String,

        #[arg(long, short = 'c', help = "Attribute color (#RGB or #RRGGBB)")]
        color: Option<String>,
    },

    /// Rename or recolor an attribute
    Edit {
        id: i64,

        #[arg(long, short = 'n')]
        name: Option<String>,

        #[arg(long, short = 'c')]
        color: Option<String>,
    },

    /// Delete an attribute (entries lose the tag)
    Del {
        id: i64,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },
}
