use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::db::Method;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Profile database file
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Server address for this run (host:port or full URL)
    #[arg(short, long, global = true)]
    pub server: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Parameter sources shared by the commands that take them.
#[derive(Args, Debug, Default, Clone)]
pub struct ParamArgs {
    /// Parameter as key=value (repeatable)
    #[arg(short, long = "param")]
    pub params: Vec<String>,

    /// File with one key=value per line
    #[arg(long)]
    pub params_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a new custom command profile
    ///
    /// Examples:
    ///   - pc-remote add -n "Volume +5" -e /api/volume/up -m post -p steps=5
    ///   - pc-remote add -n Notepad -e /api/app/launch -m post --params-file notepad.txt
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Server path, e.g. /api/volume/up
        #[arg(short, long)]
        endpoint: String,

        /// GET or POST
        #[arg(short, long, default_value = "GET")]
        method: Method,

        #[command(flatten)]
        params: ParamArgs,

        /// Message shown when the command succeeds
        #[arg(long)]
        success_message: Option<String>,

        /// Grouping label
        #[arg(short, long)]
        category: Option<String>,

        /// Mark as destructive, asks for confirmation before running
        #[arg(long)]
        dangerous: bool,
    },
    /// List saved profiles
    Ls {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one profile with its parameters
    Show {
        /// Profile ID
        id: String,
    },
    /// Change fields of a saved profile
    Edit {
        /// Profile ID
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        endpoint: Option<String>,

        #[arg(short, long)]
        method: Option<Method>,

        // replaces all parameters when any are given
        #[command(flatten)]
        params: ParamArgs,

        /// Remove every parameter
        #[arg(long, conflicts_with_all = ["params", "params_file"])]
        clear_params: bool,

        #[arg(long)]
        success_message: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(long)]
        dangerous: Option<bool>,
    },
    /// Delete a saved profile
    Rm {
        /// Profile ID
        id: String,
    },
    /// Dispatch a saved profile to the server
    Run {
        /// Profile ID
        id: String,

        /// Skip the confirmation for dangerous profiles
        #[arg(short, long)]
        yes: bool,
    },
    /// Dispatch an ad-hoc request
    Send {
        /// Server path, e.g. /api/app/launch
        endpoint: String,

        #[arg(short, long, default_value = "GET")]
        method: Method,

        #[command(flatten)]
        params: ParamArgs,
    },
    /// List the built-in templates
    Templates,
    /// Save a copy of a template as a new profile
    UseTemplate {
        /// Template ID
        template_id: String,

        /// Name for the copy (defaults to the template name)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// List the built-in quick controls
    Controls,
    /// Dispatch a built-in quick control
    Control {
        /// Control key, e.g. volume_up
        key: String,
    },
    /// Server address operations
    Server {
        #[command(subcommand)]
        action: ServerCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ServerCommands {
    /// Remember a server address (host:port or full URL)
    Set {
        #[arg(required = true)]
        address: String,
    },
    /// Print the address that will be used
    Show,
    /// Check that the server answers
    Test,
}
