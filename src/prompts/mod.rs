pub mod tutorial_prompt;
