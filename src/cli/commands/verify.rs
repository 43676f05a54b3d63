use anyhow::Result;
use std::sync::Arc;

use crate::cli::{ ui, OutputFormat };
use factwatch::traits::FactCheckApi;
use factwatch::{ SubmitOutcome, VerificationController };

/// Ad-hoc verification command
pub async fn execute(api: Arc<dyn FactCheckApi>, text: Option<&str>, format: OutputFormat) -> Result<()> {
    let text = match text {
        Some(text) => text.to_string(),
        None => ui::prompt_claim_text()?,
    };

    let controller = VerificationController::new(api);
    let spinner = ui::spinner_with_message("Verifying...");
    let outcome = controller.submit(&text).await;
    spinner.finish_and_clear();

    match outcome {
        SubmitOutcome::Completed(result) =>
            match format {
                OutputFormat::Text => ui::print_verification_result(&result),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        SubmitOutcome::IgnoredBlank => ui::print_warning("Nothing to verify: the text is blank"),
        SubmitOutcome::IgnoredInFlight => ui::print_warning("A verification is already running"),
        // The failure itself only goes to the log.
        SubmitOutcome::Failed => ui::print_error("Verification did not complete"),
    }

    Ok(())
}
