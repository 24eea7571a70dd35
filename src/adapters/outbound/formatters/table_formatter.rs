use crate::application::dto::{DependencyReport, MergeRequestBlockers};
use crate::merge_requests::domain::MergeRequestDependency;
use crate::ports::outbound::DependencyFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

const REFERENCE_WIDTH: usize = 24;
const STATE_WIDTH: usize = 8;

/// TableFormatter adapter rendering a report as a terminal table
///
/// One section per merge request, one row per blocker. Merged blockers are
/// shown green and open ones yellow when colors are enabled.
pub struct TableFormatter {
    colored: bool,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self { colored: false }
    }

    /// Enables ANSI colors (only when writing to a terminal)
    pub fn with_colors(colored: bool) -> Self {
        Self { colored }
    }

    /// Collapses newlines and tabs so one dependency stays on one line
    fn single_line(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn render_section(&self, output: &mut String, blockers: &MergeRequestBlockers) {
        let count = blockers.dependencies.len();
        if count == 0 {
            output.push_str(&format!("!{}: no blocking merge requests\n", blockers.merge_request_iid));
            return;
        }

        output.push_str(&format!(
            "!{}: {} blocking merge request{} ({} open)\n",
            blockers.merge_request_iid,
            count,
            if count == 1 { "" } else { "s" },
            blockers.open_blockers()
        ));
        output.push_str(&format!(
            "  {:<REFERENCE_WIDTH$} {:<STATE_WIDTH$} TITLE\n",
            "BLOCKED BY", "STATE"
        ));

        for dependency in &blockers.dependencies {
            self.render_row(output, dependency);
        }
    }

    fn render_row(&self, output: &mut String, dependency: &MergeRequestDependency) {
        let blocking = &dependency.blocking_merge_request;
        let reference = format!("{:<REFERENCE_WIDTH$}", blocking.display_reference());
        let state = format!("{:<STATE_WIDTH$}", blocking.state);

        let state = match (self.colored, blocking.is_merged()) {
            (false, _) => state,
            (true, true) => state.green().to_string(),
            (true, false) => state.yellow().to_string(),
        };

        output.push_str(&format!(
            "  {} {} {}\n",
            reference,
            state,
            Self::single_line(&blocking.title)
        ));
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyFormatter for TableFormatter {
    fn format(&self, report: &DependencyReport) -> Result<String> {
        let mut output = String::new();
        let header = format!("Project {}", report.project);
        if self.colored {
            output.push_str(&header.bold().to_string());
        } else {
            output.push_str(&header);
        }
        output.push_str("\n\n");

        for blockers in &report.merge_requests {
            self.render_section(&mut output, blockers);
        }
        Ok(output)
    }
}
