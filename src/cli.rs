use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// MealPlanner: analyze what you ate and get a daily meal plan sized to your targets.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the dish catalog CSV.
    #[arg(short, long, env = "MEAL_CATALOG", default_value = "data/foods.csv")]
    pub catalog: PathBuf,

    /// Nutritionix application id; enables the external provider.
    #[arg(long, env = "NUTRITIONIX_APP_ID", hide_env_values = true)]
    pub nutritionix_app_id: Option<String>,

    /// Nutritionix API key; enables the external provider.
    #[arg(long, env = "NUTRITIONIX_API_KEY", hide_env_values = true)]
    pub nutritionix_api_key: Option<String>,

    /// Timeout for external provider requests, in seconds.
    #[arg(long, default_value = "10")]
    pub provider_timeout_secs: u64,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Where the recommender draws candidate foods from.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// The built-in staple list.
    Builtin,
    /// Every dish in the catalog.
    Catalog,
    /// Staples resolved through Nutritionix, built-in list on failure.
    Provider,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog dishes, or search them by substring.
    Foods {
        /// Only show dishes containing this text.
        #[arg(short, long)]
        search: Option<String>,

        /// Maximum number of search results.
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Find the closest catalog dish to a name.
    Match {
        query: String,
    },

    /// Sum the nutrients of foods and drinks you consumed.
    Analyze {
        /// A food eaten (repeatable).
        #[arg(long = "food")]
        foods: Vec<String>,

        /// A drink consumed (repeatable).
        #[arg(long = "drink")]
        drinks: Vec<String>,

        /// Comma-separated foods, e.g. "idli, sambar, masala chai".
        #[arg(long, conflicts_with_all = ["foods", "drinks", "request", "interactive"])]
        text: Option<String>,

        /// JSON file with flat lists or meal groups.
        #[arg(long, conflicts_with_all = ["foods", "drinks", "interactive"])]
        request: Option<PathBuf>,

        /// Enter meals interactively.
        #[arg(short, long)]
        interactive: bool,

        /// Body weight in kg, for the BMI line.
        #[arg(long, requires = "height")]
        weight: Option<f64>,

        /// Height in cm, for the BMI line.
        #[arg(long, requires = "weight")]
        height: Option<f64>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Recommend a daily meal plan.
    Plan {
        /// Number of meals.
        #[arg(long)]
        meals: Option<String>,

        /// Body weight in kg.
        #[arg(long)]
        weight: Option<String>,

        /// Height in cm.
        #[arg(long)]
        height: Option<String>,

        /// Daily calorie target.
        #[arg(long)]
        calories: Option<String>,

        /// Daily protein target (g).
        #[arg(long)]
        protein: Option<String>,

        /// Daily carbohydrate target (g).
        #[arg(long)]
        carbs: Option<String>,

        /// Daily fat target (g).
        #[arg(long)]
        fat: Option<String>,

        /// Random seed for a reproducible plan.
        #[arg(long)]
        seed: Option<u64>,

        /// Candidate food source.
        #[arg(long, value_enum, default_value = "builtin")]
        source: SourceKind,

        /// Plan name used when saving.
        #[arg(long, default_value = "My Plan")]
        name: String,

        /// Save the plan to this JSON file.
        #[arg(long)]
        save: Option<PathBuf>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show a saved plan.
    ShowPlan {
        path: PathBuf,

        /// Print the plan as JSON.
        #[arg(long)]
        json: bool,
    },
}
