pub mod knowledge_base;
pub mod tutorial_generator;
