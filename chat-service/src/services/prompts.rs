//! Prompt text sent to the text provider.

use crate::config::InstitutionProfile;

/// Prompt for questions that name the institution: always answered by the
/// model.
pub fn direct_prompt(profile: &InstitutionProfile, question: &str) -> String {
    format!(
        "You are the official chatbot for {short} ({full}).\n\
         The user mentioned '{short}', so you must answer clearly in 2-3 sentences.\n\
         \n\
         Question: {question}\n",
        short = profile.short_name,
        full = profile.full_name,
        question = question,
    )
}

/// Prompt for everything else: the model may refine the FAQ answer, write
/// its own, or refuse.
pub fn hybrid_prompt(
    profile: &InstitutionProfile,
    question: &str,
    faq_answer: Option<&str>,
) -> String {
    format!(
        "You are the official chatbot for {short} ({full}).\n\
         Provide accurate and student-friendly answers in 2-3 sentences.\n\
         \n\
         FAQ Answer (if any): {faq}\n\
         User Question: {question}\n\
         \n\
         Rules:\n\
         - If FAQ answer exists but you can improve it, provide your improved version.\n\
         - If no FAQ, generate the best possible {short}-related answer.\n\
         - If unrelated, reply only: \"{refusal}\"\n",
        short = profile.short_name,
        full = profile.full_name,
        faq = faq_answer.unwrap_or("None"),
        question = question,
        refusal = profile.refusal(),
    )
}
