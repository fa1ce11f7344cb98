//! Prompt templates.

use regex::{Captures, Regex};
use seoulscript_core::Mode;
use std::sync::LazyLock;

/// Template for storyboard output.
pub const STORYBOARD_TEMPLATE: &str = "You are a seasoned K-drama head writer.
Using the provided episode brief and tropes, write a concise, production-friendly STORYBOARD.

Requirements:
- Keep it visual: 6–10 numbered beats (SCENE 1, SCENE 2, …).
- Each beat: 1–3 sentences.
- Weave in the tropes naturally.
- End with a mini-hook for the next episode.

Context:
Genre: {genre}
Episode Range: {ep_range}
Episode Brief: {description}
Tropes: {tropes}
Examples (optional): {examples}

Output as Markdown.
";

/// Template for screenplay output.
pub const SCRIPT_TEMPLATE: &str = "You are a seasoned K-drama head writer.
Using the provided episode brief and tropes, write a short SCRIPT (3 scenes) suitable for a table read.

Requirements:
- Use screenplay-like formatting: INT./EXT., ACTION, CHARACTER, DIALOGUE.
- 3 short scenes (each scene ~8-16 lines).
- Keep dialogue natural and subtexty.
- Weave in the tropes naturally.
- End with a stinger.

Context:
Genre: {genre}
Episode Range: {ep_range}
Episode Brief: {description}
Tropes: {tropes}
Examples (optional): {examples}

Output as Markdown.
";

/// Maximum number of reference summaries embedded in a prompt.
const MAX_EXAMPLES: usize = 3;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(genre|ep_range|description|tropes|examples)\}")
        .expect("Valid placeholder regex")
});

/// Build the episode-block prompt for `mode`.
///
/// Substitution is single-pass, so braces inside the substituted values are
/// never expanded.
///
/// # Examples
///
/// ```
/// use seoulscript_core::Mode;
/// use seoulscript_narrative::build_prompt;
///
/// let prompt = build_prompt(
///     Mode::Script,
///     "office_romance",
///     "1-2",
///     "Chaebol heir meets intern",
///     &["contract relationship".to_string()],
///     None,
/// );
/// assert!(prompt.contains("Genre: office romance"));
/// assert!(prompt.contains("INT./EXT."));
/// ```
pub fn build_prompt(
    mode: Mode,
    genre: &str,
    episode_range: &str,
    description: &str,
    tropes: &[String],
    examples: Option<&[String]>,
) -> String {
    let template = match mode {
        Mode::Script => SCRIPT_TEMPLATE,
        Mode::Storyboard => STORYBOARD_TEMPLATE,
    };

    let genre = genre.replace('_', " ");
    let tropes = if tropes.is_empty() {
        "None".to_string()
    } else {
        tropes.join(", ")
    };
    let examples = examples
        .map(|examples| {
            examples
                .iter()
                .take(MAX_EXAMPLES)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .unwrap_or_default();

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "genre" => genre.clone(),
            "ep_range" => episode_range.to_string(),
            "description" => description.to_string(),
            "tropes" => tropes.clone(),
            _ => examples.clone(),
        })
        .into_owned()
}

/// Build the single-scene prompt used by the MVP endpoint.
pub fn build_mvp_prompt(
    genre: &str,
    structure_label: &str,
    trope_name: &str,
    summary_inspiration: &str,
) -> String {
    let genre = genre.replace('_', " ");
    format!(
        "You are a creative K-Drama scriptwriter.\n\
         Write a short, emotionally rich K-drama script scene based on the following context:\n\n\
         GENRE: {genre}\n\
         TROPE: {trope_name}\n\
         STRUCTURE: {structure_label}\n\
         SUMMARY INSPIRATION: {summary_inspiration}\n\n\
         Format the output as:\n\n\
         Title: [Scene Title]\n\
         Director’s Notes: [Short notes on visual tone, emotional beats]\n\
         Script:\n[Dialogues and short stage actions in screenplay format]\n\n\
         Constraints:\n\
         - Keep it under 300 words.\n\
         - Use 2-3 short scenes, with INT./EXT. headings.\n\
         - Natural, subtexty dialogue; lean action lines.\n\
         - Add variety in tone (romantic, emotional, dramatic).\n\
         - Randomly incorporate Korean names such as Jisoo, Minho, Haneul, Yuna, Jiho, Sora.\n\
         Return valid JSON with keys: title, director_notes, scene_script."
    )
}
