use crate::summary::CohortSummary;
use crate::types::report::{Finding, StudentRanking};

pub fn rankings_to_markdown(rankings: &[StudentRanking], total: usize) -> String {
    let mut output = String::new();
    output.push_str("# Cohort Ranking\n\n");
    if let Some(first) = rankings.first() {
        output.push_str(&format!("Computed at: {}\n\n", first.computed_at.to_rfc3339()));
    }
    output.push_str(&format!("Showing {} of {} students\n\n", rankings.len(), total));

    if rankings.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    output.push_str("| Rank | Student | Score | Interaction | Category |\n");
    output.push_str("|---|---|---|---|---|\n");
    for ranking in rankings {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            ranking.rank,
            ranking.display_name(),
            ranking.overall_score,
            ranking.interaction_level,
            ranking.category
        ));
    }
    output.push('\n');

    output.push_str("## Diagnostics\n\n");
    for ranking in rankings {
        output.push_str(&format!(
            "### {}. {}\n\n",
            ranking.rank,
            ranking.display_name()
        ));
        output.push_str(&format!(
            "- evaluations: {} (avg {:.2}/10)\n- tasks: {}/{} completed ({:.1}%)\n",
            ranking.breakdown.evaluation_count,
            ranking.breakdown.average_evaluation,
            ranking.breakdown.completed_tasks,
            ranking.breakdown.total_tasks,
            ranking.breakdown.task_completion_rate
        ));
        push_findings(&mut output, "strengths", &ranking.diagnostic.strengths);
        push_findings(&mut output, "weaknesses", &ranking.diagnostic.weaknesses);
        push_findings(
            &mut output,
            "recommendations",
            &ranking.diagnostic.recommendations,
        );
        push_findings(&mut output, "risk factors", &ranking.diagnostic.risk_factors);
        output.push('\n');
    }

    output
}

fn push_findings(output: &mut String, heading: &str, findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    let labels = findings
        .iter()
        .map(|finding| finding.label)
        .collect::<Vec<_>>();
    output.push_str(&format!("- {}: {}\n", heading, labels.join("; ")));
}

pub fn summary_to_markdown(summary: &CohortSummary) -> String {
    let mut output = String::new();
    output.push_str("# Cohort Summary\n\n");
    output.push_str(&format!("Students: {}\n\n", summary.total_students));
    output.push_str(&format!("Average score: {:.1}\n\n", summary.average_score));

    output.push_str("## Categories\n\n");
    for (category, count) in &summary.category_counts {
        output.push_str(&format!("- {}: {}\n", category, count));
    }
    output.push('\n');

    output.push_str("## At Risk\n\n");
    if summary.at_risk.is_empty() {
        output.push_str("- none\n");
    } else {
        for student_id in &summary.at_risk {
            output.push_str(&format!("- {}\n", student_id));
        }
    }

    output
}
