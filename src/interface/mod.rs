pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_meal_count, prompt_meal_groups, prompt_meal_type, prompt_yes_no, resolve_name,
};
pub use render::{display_analysis, display_food_items, display_food_list, display_meal_plan};
