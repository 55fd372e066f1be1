//! Prompt construction for the generative model.
//!
//! Every prompt asks for JSON because the replies are read back through
//! `domain::extraction`.

use super::JobProfile;

/// System instruction sent with every request.
pub const SYSTEM_PROMPT: &str = "You are an experienced technical interviewer. \
Reply with JSON only, without commentary.";

/// Appended to a prompt whose previous reply could not be read.
pub const REPROMPT_NOTICE: &str = "Your previous reply could not be parsed. \
Respond with valid JSON only: no markdown, no code fences, no text before or after the JSON.";

/// Prompt asking for `question_count` questions with reference answers.
pub fn question_generation_prompt(profile: &JobProfile, question_count: u32) -> String {
    format!(
        "Job Position: {}, Job Descriptions: {}, Years of Experience: {}. \
         Based on this information, please give me {} interview questions with answers \
         in JSON format. Provide 'Question' and 'Answer' fields in JSON.",
        profile.position(),
        profile.description(),
        profile.years_of_experience(),
        question_count
    )
}

/// Prompt asking for a rating and short feedback on one answer.
pub fn answer_feedback_prompt(question: &str, user_answer: &str) -> String {
    format!(
        "Question: {}, User Answer: {}. Depending on the question and the user answer, \
         please give a rating out of 10 and feedback as an area of improvement, if any, \
         in 2-3 lines. Respond in JSON format with fields \"rating\" and \"feedback\".",
        question, user_answer
    )
}

/// Prompt asking for a per-skill assessment of one answer.
pub fn skill_report_prompt(question: &str, user_answer: &str) -> String {
    format!(
        "Question: {}, User Answer: {}. Assess the answer skill by skill \
         (for example communication, technical_knowledge, problem_solving). \
         Respond with a JSON object keyed by skill name where each value has a \"rating\" \
         out of 5 and a one-line \"feedback\".",
        question, user_answer
    )
}

/// Returns `prompt` with the re-prompt notice appended.
pub fn with_reprompt(prompt: &str) -> String {
    format!("{}\n\n{}", prompt, REPROMPT_NOTICE)
}
