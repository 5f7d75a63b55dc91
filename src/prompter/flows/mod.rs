pub mod value_prompt;
