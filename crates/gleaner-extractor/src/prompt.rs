//! Prompt engineering for key-point extraction

use gleaner_domain::VerificationReport;

/// Base system prompt for the extraction model.
const EXTRACTION_INSTRUCTIONS: &str = "Extract and list only the key points from the given \
article in a precise manner. Format the response as a bullet point list starting with 'Here are \
the key points of the article:'. Each point should start with an asterisk (*). Make it concise \
and focused on the main information. Do not include any references, citations, or source markers.";

/// Build the system prompt, appending regeneration guidance when present.
pub(crate) fn build_system_prompt(guidance: Option<&str>) -> String {
    match guidance {
        Some(guidance) if !guidance.trim().is_empty() => {
            format!("{}\n\n{}", EXTRACTION_INSTRUCTIONS, guidance)
        }
        _ => EXTRACTION_INSTRUCTIONS.to_string(),
    }
}

/// Build regeneration guidance from an attempt's inaccurate points.
///
/// Lists every inaccurate point's text with the first line of the
/// fact-checker's explanation, so the model knows both what was wrong and
/// why. Uncertain points are not included; uncertainty is not proof of
/// error.
pub(crate) fn build_guidance(report: &VerificationReport) -> String {
    let mut guidance = String::from(
        "A previous draft contained statements that are not supported by the article. \
Do not repeat them; correct them or leave them out:\n",
    );
    for flagged in &report.inaccurate {
        let explanation = flagged
            .verification
            .explanation
            .lines()
            .next()
            .unwrap_or("")
            .trim();
        if explanation.is_empty() {
            guidance.push_str(&format!("- {}\n", flagged.point.text()));
        } else {
            guidance.push_str(&format!("- {} ({})\n", flagged.point.text(), explanation));
        }
    }
    guidance
}
