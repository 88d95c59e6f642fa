use super::{RosterReport, StatusReport};
use crate::types::status::Points;

pub fn status_markdown(report: &StatusReport) -> String {
    let mut output = String::new();
    output.push_str("# Membership Status\n\n");
    if let Some(name) = &report.organization {
        output.push_str(&format!("Organization: {name}\n\n"));
    }
    output.push_str(&format!("Status: {}\n\n", report.status));
    output.push_str(&format!(
        "Total points: {} (required {})\n\n",
        format_points(report.total_points),
        format_points(report.required_points)
    ));

    output.push_str("## Breakdown\n\n");
    if report.breakdown.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for entry in &report.breakdown {
            match entry.max_points {
                Some(max) => output.push_str(&format!(
                    "- {}: {} (max {})\n",
                    entry.event_type,
                    format_points(entry.points),
                    format_points(max)
                )),
                None => output.push_str(&format!(
                    "- {}: {}\n",
                    entry.event_type,
                    format_points(entry.points)
                )),
            }
        }
        output.push('\n');
    }

    output.push_str("## Attendance Window\n\n");
    match (report.first_attended, report.last_attended) {
        (Some(first), Some(last)) => output.push_str(&format!("- {first} to {last}\n\n")),
        _ => output.push_str("- none\n\n"),
    }

    output.push_str("## Unscored Event Types\n\n");
    if report.unscored_event_types.is_empty() {
        output.push_str("- none\n");
    } else {
        for event_type in &report.unscored_event_types {
            output.push_str(&format!("- {event_type}\n"));
        }
    }

    output
}

pub fn roster_markdown(report: &RosterReport) -> String {
    let mut output = String::new();
    output.push_str("# Membership Roster\n\n");
    if let Some(name) = &report.organization {
        output.push_str(&format!("Organization: {name}\n\n"));
    }
    output.push_str(&format!(
        "Required points: {}\n\n",
        format_points(report.required_points)
    ));
    output.push_str(&format!(
        "- Active: {}\n- General: {}\n\n",
        report.active_count, report.general_count
    ));

    output.push_str("## Members\n\n");
    if report.members.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    output.push_str("| Member | Status | Points |\n|---|---|---|\n");
    for member in &report.members {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            escape_cell(&member.member),
            member.result.status,
            format_points(member.result.total_points)
        ));
    }

    output
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

fn format_points(points: Points) -> String {
    if points.fract() == 0.0 {
        format!("{points:.0}")
    } else {
        let rendered = format!("{points:.2}");
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
