//! Console output formatter for council results

use colored::Colorize;
use commons_application::{ChatReply, FollowUp, ResponseSource};
use commons_domain::{ParticipantRegistry, ParticipantSummary, SelectionResult};

/// Formats council results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a reply and its optional follow-up
    pub fn format_reply(reply: &ChatReply, follow_up: Option<&FollowUp>) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Commons Council"));
        output.push('\n');

        if let Some(selection) = &reply.selection {
            output.push_str(&format!(
                "{} {} (score {:.2}, {})\n",
                "Selected:".cyan().bold(),
                reply.participant_id,
                selection.score,
                selection.reason
            ));
        }

        output.push_str(&format!(
            "\n{}\n{}\n",
            Self::speaker(&reply.agent, reply.response.is_fallback()),
            reply.response.text
        ));

        if let Some(follow_up) = follow_up {
            output.push_str(&Self::section_header("Follow-up"));
            output.push_str(&format!(
                "\n{}\n{}\n",
                Self::speaker(&follow_up.agent, follow_up.source == ResponseSource::Fallback),
                follow_up.text
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a reply as JSON
    pub fn format_json(reply: &ChatReply, follow_up: Option<&FollowUp>) -> String {
        let value = serde_json::json!({
            "participantId": reply.participant_id,
            "agent": reply.agent,
            "response": reply.response.text,
            "source": reply.response.source,
            "selection": reply.selection,
            "followUp": follow_up.map(|f| serde_json::json!({
                "participantId": f.participant_id,
                "agent": f.agent,
                "response": f.text,
                "source": f.source,
            })),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the score breakdown of a selection
    pub fn format_selection(result: &SelectionResult, registry: &ParticipantRegistry) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} ({})\n",
            "Selected:".cyan().bold(),
            result.participant_id.as_str().green().bold(),
            result.reason
        ));
        output.push_str(&Self::section_header("Scores (priority order)"));

        for entry in &result.scores {
            let name = registry
                .get(entry.participant_id.as_str())
                .map(|p| p.name())
                .unwrap_or("?");
            let line = format!(
                "  {:<10} {:<16} {:>6.2}",
                entry.participant_id.as_str(),
                name,
                entry.score
            );
            if entry.participant_id == result.participant_id {
                output.push_str(&format!("{}\n", line.green()));
            } else if entry.score > 0.0 {
                output.push_str(&format!("{}\n", line));
            } else {
                output.push_str(&format!("{}\n", line.dimmed()));
            }
        }

        output
    }

    /// Format the participant roster
    pub fn format_participants(participants: &[ParticipantSummary]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Council Participants"));
        output.push('\n');

        for p in participants {
            output.push_str(&format!(
                "\n{} {} {}\n",
                format!("[{}]", p.avatar).yellow().bold(),
                p.name.bold(),
                format!("({})", p.id).dimmed()
            ));
            output.push_str(&format!("    {} - {}\n", p.role, p.specialty));
        }

        output.push_str(&Self::footer());
        output
    }

    fn speaker(name: &str, fallback: bool) -> String {
        let label = format!("── {} ──", name);
        if fallback {
            format!("{} {}", label.yellow().bold(), "(fallback)".dimmed())
        } else {
            label.yellow().bold().to_string()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
