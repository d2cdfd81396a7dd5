//! CLI argument structures.
//!
//! Parameters left off the command line are gathered interactively; the
//! router feeds the ones that were given into the prompt queue, so
//! `funcctl deploy myapp` and a bare `funcctl deploy` both work.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::project::ProjectLanguage;

/// Manage serverless function projects from the terminal
#[derive(Parser)]
#[command(name = "funcctl")]
#[command(about = "funcctl - Create, deploy and verify serverless function apps", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Workspace directory (defaults to the current directory)
    #[arg(short = 'p', long, global = true)]
    pub path: Option<PathBuf>,

    /// Path to a settings file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a new function project in the workspace
    #[command(name = "create-project")]
    CreateProject {
        /// Project folder name
        name: Option<String>,

        /// Project language
        #[arg(value_enum)]
        language: Option<ProjectLanguage>,
    },

    /// Add a function to the workspace project
    #[command(name = "create-function")]
    CreateFunction {
        /// Template label (e.g. "HTTP trigger")
        template: Option<String>,

        /// Function name
        name: Option<String>,
    },

    /// Create a function app in the cloud
    #[command(name = "create-app")]
    CreateApp {
        /// Function app name
        name: Option<String>,
    },

    /// Publish the workspace project to a function app
    #[command(name = "deploy")]
    Deploy {
        /// Target function app
        app: Option<String>,
    },

    /// Start a function app
    #[command(name = "start")]
    Start {
        /// Function app to start
        app: Option<String>,
    },

    /// Stop a function app
    #[command(name = "stop")]
    Stop {
        /// Function app to stop
        app: Option<String>,
    },

    /// Restart a function app
    #[command(name = "restart")]
    Restart {
        /// Function app to restart
        app: Option<String>,
    },

    /// Open a function app in the cloud portal
    #[command(name = "open-portal")]
    OpenPortal {
        /// Function app to open
        app: Option<String>,
    },

    /// Copy a function's invocation URL
    #[command(name = "copy-url")]
    CopyUrl {
        /// Function app holding the function
        app: Option<String>,

        /// Function to copy the URL of
        function: Option<String>,
    },

    /// Verify a deployed function: resolve its URL with bounded retries,
    /// then smoke-test it over HTTP
    #[command(name = "verify")]
    Verify {
        /// Function app the deployment went to
        app: String,

        /// Function expected to be listed under the app
        function: String,

        /// Language the project was scaffolded with
        #[arg(long, value_enum, default_value = "javascript")]
        language: ProjectLanguage,

        /// Retries after the initial attempt (overrides settings)
        #[arg(long)]
        retries: Option<u32>,
    },
}
