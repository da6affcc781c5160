use crate::dtos::ValidatedMessage;

/// Instruction prepended to every player message.
pub const SYSTEM_PROMPT: &str = "You are an in-game AI assistant for a Roblox game. \
Be friendly, short, and provide helpful game-appropriate responses. \
Keep replies under 200 characters unless asked for more.";

/// Build the single-turn prompt sent upstream.
pub fn build_prompt(message: &ValidatedMessage) -> String {
    let mut prompt = format!("{}\n\n", SYSTEM_PROMPT);

    if let Some(context) = &message.context {
        prompt.push_str(&format!("Context: {}\n", context));
    }

    prompt.push_str(&format!(
        "Player ({}): {}\nAI:",
        message.player_id, message.message
    ));
    prompt
}
