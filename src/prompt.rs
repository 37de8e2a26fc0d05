//! Prompt composition for the two generation tasks.

/// Fixed preamble prepended to every prompt. Forces English output
/// regardless of the input language.
pub const SYSTEM_RULES: &str = "\
You are a professional cooking assistant.

STRICT LANGUAGE RULES:
- Always respond in English only.
- Never use Filipino or Tagalog.
- Even if ingredients are written in another language, translate internally but output English.
- Use clean formatting.
";

/// The generation task a prompt is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Recipe,
    WeeklyPlan,
}

/// Compose the full prompt: system rules plus the task template with the
/// user input embedded verbatim. Input is expected to be pre-trimmed; no
/// further escaping is applied.
pub fn build_prompt(kind: PromptKind, input: &str) -> String {
    let task = match kind {
        PromptKind::Recipe => format!(
            "\
Create a clear, step-by-step recipe using: {input}.

Include:
- Title
- Ingredients with quantities and price per ingredient
- Instructions (numbered)
- Estimated cooking time
- Servings
- Total price per batch
- Calorie estimate

Do not add disclaimers.
"
        ),
        PromptKind::WeeklyPlan => format!(
            "\
Create a 7-day weekly meal plan using these ingredients: {input}.

Include breakfast, lunch, and dinner for each day.
Provide title, ingredients with quantities and price, and short instructions.
"
        ),
    };

    format!("{}\n{}", SYSTEM_RULES, task)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_start_with_system_rules() {
        for kind in [PromptKind::Recipe, PromptKind::WeeklyPlan] {
            let prompt = build_prompt(kind, "chicken, rice");
            assert!(prompt.starts_with(SYSTEM_RULES));
        }
    }

    #[test]
    fn recipe_prompt_embeds_input() {
        let prompt = build_prompt(PromptKind::Recipe, "adobo");
        assert!(prompt.contains("recipe using: adobo."));
        assert!(prompt.contains("Do not add disclaimers."));
    }

    #[test]
    fn weekly_plan_prompt_embeds_input() {
        let prompt = build_prompt(PromptKind::WeeklyPlan, "eggs, spinach");
        assert!(prompt.contains("7-day weekly meal plan"));
        assert!(prompt.contains("using these ingredients: eggs, spinach."));
    }
}
