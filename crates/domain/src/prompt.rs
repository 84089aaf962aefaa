//! Prompts submitted to the remote conversation.

use crate::settings::{Configuration, ReplyTopic};

/// Instruction sent on every continue.
pub const REPEAT_INSTRUCTION: &str = "Do it again.";

/// Build the opening prompt of a run.
///
/// Asks for one self-contained question-and-answer pair, in the configured
/// reply language when one is set, on the configured topic, and nothing else.
#[must_use]
pub fn first_prompt(config: &Configuration) -> String {
    let mut prompt = String::from("Generate a single random question");
    if let Some(language) = &config.reply_language {
        prompt.push_str(" in ");
        prompt.push_str(language);
    }
    match &config.reply_topic {
        ReplyTopic::All => prompt.push_str(" on ALL topics"),
        ReplyTopic::Named(topic) => {
            prompt.push_str(" on the topic of ");
            prompt.push_str(topic);
        }
    }
    prompt.push_str(" then answer it. Don't type anything else.");
    prompt
}
