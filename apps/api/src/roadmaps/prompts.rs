// LLM prompt constants for the roadmaps module.

/// System framing for roadmap generation — plain text out, no JSON schema.
pub const ROADMAP_SYSTEM: &str = "You are an experienced career mentor. \
    Write practical, specific career roadmaps. \
    Respond in plain text with short, scannable lines. \
    Do NOT ask follow-up questions.";

/// Roadmap generation prompt template.
/// Replace `{experience}`, `{domain}`, and `{goal}` before sending.
/// The three inputs are embedded verbatim.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"I have {experience} years of experience in {domain}, and I want to become a {goal}.

Create a career roadmap with:
- Step-by-step guidance
- Recommended tools, courses (free/paid)
- Projects to build
- Estimated time for each stage
- Job titles to aim for"#;
