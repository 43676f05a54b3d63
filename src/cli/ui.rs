use colored::*;
use console::Term;
use dialoguer::{ theme::ColorfulTheme, Input };
use indicatif::{ ProgressBar, ProgressStyle };
use log::debug;
use std::time::Duration;
use textwrap::wrap;

use factwatch::models::{
    Category,
    ClaimRecord,
    EvidenceItem,
    Snapshot,
    VerificationRecord,
    VerificationResult,
    Verdict,
};

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

fn term_width() -> usize {
    (Term::stdout().size().1 as usize).max(40)
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text wrapped to the terminal, with a left indent
pub fn print_wrapped(text: &str, indent: usize) {
    let pad = " ".repeat(indent);
    for line in wrap(text, term_width().saturating_sub(indent + 4)) {
        println!("{}{}", pad, line);
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Color a verdict tag by its category
pub fn paint_verdict(verdict: Verdict) -> ColoredString {
    let tag = verdict.to_string();
    match verdict.category() {
        Category::Positive => tag.green().bold(),
        Category::Negative => tag.red().bold(),
        Category::Uncertain => tag.yellow().bold(),
        Category::Unknown => tag.dimmed().bold(),
    }
}

fn print_evidence(evidence: &[EvidenceItem]) {
    for item in evidence {
        println!("    🔗 {}", item.label().blue());
        if item.label() != item.link {
            println!("       {}", item.link.dimmed());
        }
    }
}

/// Clear the terminal and draw the whole dashboard
pub fn render_dashboard(snapshot: &Snapshot, loading: bool, evidence_preview: usize) {
    if let Err(e) = Term::stdout().clear_screen() {
        debug!("Could not clear terminal: {}", e);
    }
    print_header("Misinformation Detection Dashboard");

    let counts = snapshot.counts();
    println!(
        "{} {}   {} {}   {} {}",
        "Claims tracked:".dimmed(),
        counts.claims.to_string().purple().bold(),
        "Verifications:".dimmed(),
        counts.verifications.to_string().magenta().bold(),
        "Sources:".dimmed(),
        counts.items.to_string().cyan().bold()
    );
    match snapshot.last_sync_at {
        Some(at) => println!("{} {}", "Last sync:".dimmed(), at.format("%Y-%m-%d %H:%M:%S UTC")),
        None => println!("{} never", "Last sync:".dimmed()),
    }
    if let Some(err) = &snapshot.last_error {
        print_warning(&format!("last refresh failed: {}", err.message));
    }

    if loading {
        println!("\n{}", "Loading data...".dimmed());
        return;
    }

    print_header("Recent Claims");
    if snapshot.claims.is_empty() {
        println!("{}", "No claims detected yet.".dimmed());
    }
    for claim in &snapshot.claims {
        print_claim(claim);
    }

    print_header("Verifications");
    if snapshot.verifications.is_empty() {
        println!("{}", "No verifications yet.".dimmed());
    }
    for verification in &snapshot.verifications {
        print_verification(verification, evidence_preview);
    }
}

fn print_claim(claim: &ClaimRecord) {
    let when = claim.extracted_at
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("{}  {}  {}", paint_verdict(claim.status), when.dimmed(), format!("#{}", claim.short_id()).dimmed());
    print_wrapped(&claim.text, 2);
}

fn print_verification(verification: &VerificationRecord, evidence_preview: usize) {
    let when = verification.checked_at
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{}  {} {}  {}",
        paint_verdict(verification.verdict),
        "confidence".dimmed(),
        verification.score.to_string().purple().bold(),
        when.dimmed()
    );
    print_evidence(verification.evidence_preview(evidence_preview));
}

/// Print the outcome of an ad-hoc verification
pub fn print_verification_result(result: &VerificationResult) {
    print_header("Verification Result");
    print_result("Verdict", &paint_verdict(result.verdict).to_string());
    print_result("Category", &result.category().to_string());
    print_result("Confidence", &result.score.to_string());
    if let Some(summary) = &result.summary {
        println!("{}", "Summary:".bold());
        print_wrapped(summary, 2);
    }
    if !result.reasons.is_empty() {
        println!("{}", "Reasons:".bold());
        for reason in &result.reasons {
            print_wrapped(&format!("- {}", reason), 2);
        }
    }
    if !result.evidence.is_empty() {
        println!("{}", "Evidence:".bold());
        print_evidence(&result.evidence);
    }
}

/// Ask the user for the text to verify
pub fn prompt_claim_text() -> std::io::Result<String> {
    Input::with_theme(&get_theme())
        .with_prompt("Text to verify")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
