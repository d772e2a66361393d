//! Builds the prompts sent to the LLM. This module is intentionally dumb:
//! it only formats text. No parsing, no networking, no engine logic.

use crate::model::player::{PlayerProfile, StatCategory};

/// Persona instruction shared by every call.
pub const SYSTEM_INSTRUCTION: &str = "\
You are \"The System\", an advanced, game-like AI interface that governs the user's life.
Your tone is robotic, authoritative, yet helpful.
Use terms like \"Player\", \"Quest\", \"Report\", \"Penalty\".
Keep responses concise and formatted like system notifications.";

pub fn build_quest_prompt(player: &PlayerProfile) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "Generate 3 distinct daily tasks (quests) for a Level {} Player following this strict mandatory routine:\n\n",
        player.level
    ));
    push_mandatory_routine(&mut prompt);
    push_quest_schema(&mut prompt);

    prompt
}

pub fn build_wish_prompt(wish: &str, player: &PlayerProfile) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "The Player (Level {}) has completed all daily tasks and is granted one wish.\nThey wish for: \"{}\".\n\n",
        player.level, wish
    ));
    prompt.push_str(
        "Interpret this wish as \"The System\".\n\
         - If the wish is humble or growth-oriented, grant XP, GOLD, or a STAT increase.\n\
         - If the wish asks for recovery or rest, grant a HEAL.\n\
         - If the wish is greedy or lazy, grant a PENALTY.\n\n",
    );
    push_wish_schema(&mut prompt);

    prompt
}

pub fn build_chat_prompt(message: &str, context: &str) -> String {
    format!("Player Context: {context}\n\nPlayer Message: {message}")
}

/// Summary line handed to the chat collaborator alongside every message.
pub fn chat_context(player: &PlayerProfile) -> String {
    let report: Vec<String> = StatCategory::ALL
        .iter()
        .map(|&c| format!("{}: {}", c.label(), player.counter(c)))
        .collect();
    format!(
        "Level: {}, Class: {}, Title: {}, Activity Report: {{{}}}",
        player.level,
        player.job,
        player.title,
        report.join(", ")
    )
}

fn push_mandatory_routine(prompt: &mut String) {
    prompt.push_str(
        "1. Physical Conditioning:\n\
         \x20  - 25 Push-ups\n\
         \x20  - 50 Sit-ups\n\
         \x20  - 100 Jumping Jacks\n\n\
         2. Wellness & Health:\n\
         \x20  - Drink 1 Liter Water (Lunch)\n\
         \x20  - Drink 1 Liter Water (Dinner)\n\
         \x20  - Consume Maintenance Medicines\n\n\
         3. Knowledge Acquisition:\n\
         \x20  - Research, Learn & Update System\n\
         \x20  - Research, Learn & Update Survival Skills\n\n\
         You may flavor titles and descriptions for the Player's level, but the \
         subtasks and their counts must stay exactly as listed.\n\n",
    );
}

fn push_quest_schema(prompt: &mut String) {
    prompt.push_str(
        "Respond with ONLY a JSON array. Each entry:\n\
         {\"title\": string, \"description\": string, \
         \"difficulty\": \"E\"|\"D\"|\"C\"|\"B\"|\"A\"|\"S\", \
         \"rewardXp\": integer, \"rewardGold\": integer, \
         \"statCategory\": \"physical\"|\"knowledge\"|\"wellness\"|\"routine\", \
         \"subtasks\": [{\"text\": string}]}\n",
    );
}

fn push_wish_schema(prompt: &mut String) {
    prompt.push_str(
        "Respond with ONLY a JSON object:\n\
         {\"message\": string, \
         \"rewardType\": \"XP\"|\"GOLD\"|\"STAT\"|\"ITEM\"|\"HEAL\"|\"PENALTY\", \
         \"rewardValue\": integer, \
         \"statTarget\": \"physical\"|\"knowledge\"|\"wellness\"|\"routine\" (only for STAT)}\n",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn player() -> PlayerProfile {
        let mut p = PlayerProfile::initial(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        p.level = 6;
        p.job = "Shadow Clerk".to_string();
        p.title = "Early Riser".to_string();
        p.add_counter(StatCategory::Physical, 4);
        p
    }

    #[test]
    fn quest_prompt_pins_the_routine_and_the_schema() {
        let prompt = build_quest_prompt(&player());
        assert!(prompt.contains("Level 6 Player"));
        assert!(prompt.contains("25 Push-ups"));
        assert!(prompt.contains("Consume Maintenance Medicines"));
        assert!(prompt.contains("\"statCategory\""));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn wish_prompt_embeds_the_wish_verbatim() {
        let prompt = build_wish_prompt("a mountain of gold", &player());
        assert!(prompt.contains("They wish for: \"a mountain of gold\"."));
        assert!(prompt.contains("\"rewardType\""));
        assert!(prompt.contains("PENALTY"));
    }

    #[test]
    fn chat_context_reports_every_counter() {
        let context = chat_context(&player());
        assert!(context.contains("Level: 6"));
        assert!(context.contains("Class: Shadow Clerk"));
        assert!(context.contains("Physical Conditioning: 4"));
        assert!(context.contains("Daily Routine: 0"));
    }
}
