// Career roadmap engine: the static catalog lookup and the Gemini-backed
// generator. All LLM calls go through llm_client — no direct API calls here.

pub mod catalog;
pub mod generator;
pub mod handlers;
pub mod prompts;
