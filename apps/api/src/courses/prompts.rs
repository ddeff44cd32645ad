use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

pub fn course_system_prompt() -> String {
    format!(
        "{JSON_ONLY_SYSTEM} You recommend online courses to job seekers. \
         Only suggest real, widely available courses."
    )
}

pub fn course_prompt(role: &str, missing_skills: &[String], limit: usize) -> String {
    format!(
        r#"A job seeker is aiming for the role "{role}" and lacks these skills:
{skills}

Suggest at most {limit} courses that close the most important gaps first.
Respond with a JSON array where each element is:
{{"title": string, "provider": string, "skill": string, "url": string | null}}
"skill" must be one of the listed skills."#,
        skills = missing_skills
            .iter()
            .map(|s| format!("- {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}
