//! Debug scaffold files written after project creation.
//!
//! Two files under `<project>/.vscode/` let an editor launch and attach to a
//! local function host. They are only written when neither file pre-exists;
//! a project that already carries either one is left untouched.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

pub const VSCODE_DIR: &str = ".vscode";
pub const TASKS_FILE: &str = "tasks.json";
pub const LAUNCH_FILE: &str = "launch.json";

pub const TASK_LABEL: &str = "Launch Function App";
pub const TASK_IDENTIFIER: &str = "launchFunctionApp";
pub const ATTACH_PORT: u16 = 5858;

#[derive(Serialize)]
struct TasksFile {
    version: &'static str,
    tasks: Vec<TaskDefinition>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TaskDefinition {
    label: &'static str,
    identifier: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    command: String,
    is_background: bool,
}

#[derive(Serialize)]
struct LaunchFile {
    version: &'static str,
    configurations: Vec<AttachConfiguration>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AttachConfiguration {
    name: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    request: &'static str,
    port: u16,
    pre_launch_task: &'static str,
}

fn tasks_file(func_program: &str) -> TasksFile {
    TasksFile {
        version: "2.0.0",
        tasks: vec![TaskDefinition {
            label: TASK_LABEL,
            identifier: TASK_IDENTIFIER,
            kind: "shell",
            command: format!("{func_program} host start"),
            is_background: true,
        }],
    }
}

fn launch_file() -> LaunchFile {
    LaunchFile {
        version: "0.2.0",
        configurations: vec![AttachConfiguration {
            name: "Attach to Function App",
            kind: "node",
            request: "attach",
            port: ATTACH_PORT,
            pre_launch_task: TASK_IDENTIFIER,
        }],
    }
}

/// Write `tasks.json` and `launch.json` for `project_dir`.
///
/// Returns `true` when the files were written, `false` when either already
/// existed (in which case neither is touched).
pub fn write_debug_scaffold(project_dir: &Path, func_program: &str) -> Result<bool> {
    let vscode_dir = project_dir.join(VSCODE_DIR);
    let tasks_path = vscode_dir.join(TASKS_FILE);
    let launch_path = vscode_dir.join(LAUNCH_FILE);

    if tasks_path.exists() || launch_path.exists() {
        tracing::debug!(
            "Debug scaffold already present in {}, leaving as-is",
            vscode_dir.display()
        );
        return Ok(false);
    }

    fs::create_dir_all(&vscode_dir)?;
    fs::write(
        &tasks_path,
        serde_json::to_string_pretty(&tasks_file(func_program))?,
    )?;
    fs::write(&launch_path, serde_json::to_string_pretty(&launch_file())?)?;

    tracing::info!("Wrote debug scaffold to {}", vscode_dir.display());
    Ok(true)
}
