/// Frame a consultation transcript for the upstream model.
///
/// The three section labels here are the same ones `parse_suggestion` looks
/// for; change them together or not at all.
pub fn build_prompt(transcript: &str) -> String {
    format!(
        "You are a clinical assistant reviewing a patient consultation transcript.\n\
         Respond with exactly three labelled sections:\n\
         Summary: a short narrative of the encounter.\n\
         Diagnoses: possible diagnoses to consider, one per line.\n\
         Recommendations: concrete next steps, one per line.\n\
         Do not add other sections.\n\n\
         Transcript:\n{}",
        transcript
    )
}
