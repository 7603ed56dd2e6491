//! Text (terminal) reporter with colors and formatting

use crate::models::FullAnalysis;
use anyhow::Result;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";

/// Clarity colors
fn clarity_color(clarity: f64) -> &'static str {
    if clarity >= 0.7 {
        GREEN
    } else if clarity >= 0.4 {
        YELLOW
    } else {
        RED
    }
}

/// Render a full analysis as formatted terminal output
pub fn render(analysis: &FullAnalysis) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Reframe Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!("Statement: {}\n\n", analysis.statement));

    // Base noise audit
    out.push_str(&format!("{BOLD}NOISE AUDIT{RESET}\n"));
    if analysis.noise_audit.signals.is_empty() {
        out.push_str(&format!("  Signals: {DIM}none{RESET}\n"));
    } else {
        let names: Vec<String> = analysis
            .noise_audit
            .signals
            .iter()
            .map(|s| s.to_string())
            .collect();
        out.push_str(&format!("  Signals: {YELLOW}{}{RESET}\n", names.join(", ")));
    }
    out.push_str(&format!(
        "  Base signal-to-noise: {:.2}\n\n",
        analysis.noise_audit.snr
    ));

    // Detected metaphors
    out.push_str(&format!(
        "{BOLD}REIFIED METAPHORS{RESET} ({})\n",
        analysis.matches.len()
    ));
    if analysis.matches.is_empty() {
        out.push_str(&format!("  {DIM}none detected{RESET}\n"));
    }
    for m in &analysis.matches {
        out.push_str(&format!(
            "  {YELLOW}{}{RESET} {DIM}reified as{RESET} {}\n",
            m.term, m.reified_as
        ));
        out.push_str(&format!("      functional form: {}\n", m.functional_form));
        out.push_str(&format!("      range: {}\n", m.value_range.join(", ")));
        out.push_str(&format!("      context: {}\n", m.context));
        if !m.institutional_function.is_empty() {
            out.push_str(&format!(
                "      {DIM}institutional function: {}{RESET}\n",
                m.institutional_function
            ));
        }
    }
    out.push('\n');

    // Dependency chains
    if !analysis.chains.is_empty() {
        out.push_str(&format!("{BOLD}DEPENDENCY CHAINS{RESET}\n"));
        for chain in &analysis.chains {
            out.push_str(&format!(
                "  {} {DIM}forces{RESET} {}\n",
                chain.primary,
                chain.forces.join(", ")
            ));
            out.push_str(&format!("      {DIM}{}{RESET}\n", chain.mechanism));
        }
        out.push('\n');
    }

    // Entropy breakdown
    let clarity_c = clarity_color(analysis.entropy.signal_clarity);
    out.push_str(&format!("{BOLD}ENTROPY{RESET}\n"));
    out.push_str(&format!(
        "  Base SNR: {:.2}\n",
        analysis.entropy.base_signal_to_noise
    ));
    out.push_str(&format!(
        "  Metaphor count: {}\n",
        analysis.entropy.metaphor_count
    ));
    out.push_str(&format!(
        "  Metaphor entropy: {:.2}\n",
        analysis.entropy.metaphor_entropy
    ));
    out.push_str(&format!(
        "  Chain amplification: {:.2}x\n",
        analysis.entropy.chain_amplification
    ));
    out.push_str(&format!(
        "  Total entropy: {:.2}\n",
        analysis.entropy.total_entropy
    ));
    out.push_str(&format!(
        "  {BOLD}SIGNAL CLARITY: {clarity_c}{:.2}{RESET}\n\n",
        analysis.entropy.signal_clarity
    ));

    // Lock record
    out.push_str(&format!("{BOLD}LOCKED VARIABLES{RESET}\n"));
    if analysis.locked_variables.is_empty() {
        out.push_str(&format!("  {DIM}none{RESET}\n"));
    }
    for (term, locked) in &analysis.locked_variables {
        out.push_str(&format!("  {term}: {}\n", locked.kind));
    }
    out.push('\n');

    // Recommendation
    if analysis.requires_renormalization {
        out.push_str(&format!(
            "{RED}{BOLD}Signal clarity below threshold — re-normalization recommended:{RESET}\n"
        ));
        for m in &analysis.matches {
            out.push_str(&format!(
                "  replace '{}' ({}) with: {}\n",
                m.term, m.reified_as, m.functional_form
            ));
        }
    } else {
        out.push_str(&format!(
            "{GREEN}Signal clarity acceptable. Minimal re-normalization needed.{RESET}\n"
        ));
    }

    Ok(out)
}
