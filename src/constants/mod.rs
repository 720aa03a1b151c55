pub mod catalog;
pub mod prompts;
pub mod roadmap_templates;
