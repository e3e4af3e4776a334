//! Presentation: human-readable and JSON rendering of run results.

use comfy_table::Table;
use owo_colors::OwoColorize;

use crate::compose::{
    render_document, CARRIED_SERVER, EXCEL_SERVER, POWERPOINT_SERVER, WORD_SERVER,
};
use crate::deps::{DependencyReport, InstallOutcome, REQUIRED_PACKAGES};
use crate::error::SetupError;
use crate::setup::{ComposeOutcome, SetupSummary};

const SERVICE_NOTES: &[(&str, &str)] = &[
    (EXCEL_SERVER, "Excel file operations"),
    (POWERPOINT_SERVER, "PowerPoint presentation operations"),
    (WORD_SERVER, "Word document operations"),
];

pub fn format_setup_summary(summary: &SetupSummary) -> Result<String, SetupError> {
    let mut output = String::from("Office MCP Services - Cursor configuration setup\n");
    output.push_str(&format!(
        "Generated: {}\n\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output.push_str(&format!(
        "  {} Workspace directory: {}\n",
        "\u{2713}".green(),
        summary.workspace_dir.display()
    ));

    match &summary.dependencies {
        Some(report) => {
            output.push('\n');
            output.push_str(&format_deps_table(report));
            output.push('\n');
        }
        None => {
            output.push_str(&format!(
                "  {} Dependency check skipped\n",
                "\u{2298}".yellow()
            ));
        }
    }

    output.push('\n');
    output.push_str(&format_compose_text(&summary.compose)?);

    output.push_str("\nServices:\n");
    for (name, note) in SERVICE_NOTES {
        output.push_str(&format!("  - {}: {}\n", name, note));
    }
    output.push_str("\nAdd this configuration to Cursor's MCP settings and restart Cursor.\n");

    Ok(output)
}

pub fn format_compose_outcome(outcome: &ComposeOutcome, format: &str) -> Result<String, SetupError> {
    match format {
        "json" => render_document(&outcome.document),
        "text" => format_compose_text(outcome),
        _ => Err(SetupError::Config(format!(
            "Invalid format: '{}'. Must be 'text' or 'json'.",
            format
        ))),
    }
}

fn format_compose_text(outcome: &ComposeOutcome) -> Result<String, SetupError> {
    let mut output = String::new();

    if outcome.written {
        output.push_str(&format!(
            "  {} Configuration written: {}\n",
            "\u{2713}".green(),
            outcome.output_path.display()
        ));
    } else {
        output.push_str(&format!(
            "  {} Dry run: configuration not written (destination {})\n",
            "\u{2298}".yellow(),
            outcome.output_path.display()
        ));
    }

    match (&outcome.source_config, outcome.carried) {
        (Some(source), true) => output.push_str(&format!(
            "  {} Carried over existing {} entry from {}\n",
            "\u{2713}".green(),
            CARRIED_SERVER,
            source.display()
        )),
        _ => output.push_str(&format!(
            "  - No existing {} entry found; static entries only\n",
            CARRIED_SERVER
        )),
    }

    output.push_str("\nComposed configuration:\n");
    output.push_str(&render_document(&outcome.document)?);
    output.push('\n');

    Ok(output)
}

pub fn format_deps_report(report: &DependencyReport, format: &str) -> Result<String, SetupError> {
    match format {
        "json" => serde_json::to_string_pretty(report)
            .map_err(|e| SetupError::Config(format!("Failed to serialize report: {}", e))),
        "text" => Ok(format_deps_table(report)),
        _ => Err(SetupError::Config(format!(
            "Invalid format: '{}'. Must be 'text' or 'json'.",
            format
        ))),
    }
}

fn format_deps_table(report: &DependencyReport) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Package", "Status"]);

    for package in REQUIRED_PACKAGES {
        let name = package.name.to_string();
        let status = if report.satisfied.contains(&name) {
            format!("{} installed", "\u{2713}".green())
        } else if report.missing_after.contains(&name) {
            format!("{} missing", "\u{2717}".red())
        } else {
            format!("{} installed (via pip)", "\u{2713}".green())
        };
        table.add_row(vec![name, status]);
    }

    let mut output = table.to_string();
    output.push('\n');

    match &report.install {
        InstallOutcome::NotAttempted => {}
        InstallOutcome::SkippedNoManifest => {
            output.push_str("Installer skipped: no requirements.txt in install root.\n");
        }
        InstallOutcome::Ran { success: true } => {
            output.push_str("Installer ran successfully.\n");
        }
        InstallOutcome::Ran { success: false } => {
            output.push_str("Installer exited with a non-zero status.\n");
        }
    }

    if !report.is_satisfied() {
        output.push_str(&format!(
            "Missing: {}. Run `pip install -r requirements.txt` manually.\n",
            report.missing_after.join(", ")
        ));
    }

    output
}
