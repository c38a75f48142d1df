use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use meal_planner_rs::catalog::{fuzzy_match, load_catalog, Catalog};
use meal_planner_rs::cli::{Cli, Command, SourceKind};
use meal_planner_rs::error::Result;
use meal_planner_rs::interface::{
    display_analysis, display_food_items, display_food_list, display_meal_plan,
    prompt_meal_groups, prompt_yes_no,
};
use meal_planner_rs::models::AnalysisRequest;
use meal_planner_rs::persistence::{load_plan, save_plan, SavedPlan};
use meal_planner_rs::service::{
    analyze_selection, bmi_for_display, recommend_from_raw, Outcome, RawPlanInput,
};
use meal_planner_rs::sources::{
    BuiltinFoods, FoodSource, NutritionixConfig, NutritionixProvider, ProviderFoods,
};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Foods { ref search, limit } => {
            cmd_foods(&cli.catalog, search.as_deref(), limit)
        }
        Command::Match { ref query } => cmd_match(&cli.catalog, query),
        Command::Analyze {
            ref foods,
            ref drinks,
            ref text,
            ref request,
            interactive,
            weight,
            height,
            json,
        } => {
            let catalog = load_catalog(&cli.catalog)?;
            let request = if interactive {
                prompt_meal_groups(&catalog)?
            } else if let Some(text) = text {
                AnalysisRequest::from_text(text)
            } else if let Some(path) = request {
                serde_json::from_str(&fs::read_to_string(path)?)?
            } else {
                AnalysisRequest::flat(foods.clone(), drinks.clone())
            };
            let bmi = weight.zip(height).and_then(|(w, h)| bmi_for_display(w, h));
            cmd_analyze(&catalog, &request, bmi, json)
        }
        Command::Plan {
            ref meals,
            ref weight,
            ref height,
            ref calories,
            ref protein,
            ref carbs,
            ref fat,
            seed,
            source,
            ref name,
            ref save,
            json,
        } => {
            let raw = RawPlanInput {
                meal_count: meals.clone(),
                weight_kg: weight.clone(),
                height_cm: height.clone(),
                target_calories: calories.clone(),
                target_protein: protein.clone(),
                target_carbs: carbs.clone(),
                target_fat: fat.clone(),
            };
            let food_source = build_source(&cli, source)?;
            cmd_plan(&raw, food_source.as_ref(), seed, name, save.as_deref(), json)
        }
        Command::ShowPlan { ref path, json } => cmd_show_plan(path, json),
    }
}

/// Pick the recommender's food source from the CLI configuration.
fn build_source(cli: &Cli, kind: SourceKind) -> Result<Box<dyn FoodSource>> {
    let source: Box<dyn FoodSource> = match kind {
        SourceKind::Builtin => Box::new(BuiltinFoods),
        SourceKind::Catalog => Box::new(load_catalog(&cli.catalog)?),
        SourceKind::Provider => match (&cli.nutritionix_app_id, &cli.nutritionix_api_key) {
            (Some(app_id), Some(api_key)) => {
                let config = NutritionixConfig::new(
                    app_id.clone(),
                    api_key.clone(),
                    Duration::from_secs(cli.provider_timeout_secs),
                );
                Box::new(ProviderFoods::staples(NutritionixProvider::new(config)))
            }
            _ => {
                warn!("Nutritionix credentials not set, using built-in foods");
                Box::new(BuiltinFoods)
            }
        },
    };
    Ok(source)
}

/// List or search catalog dishes.
fn cmd_foods(catalog_path: &Path, search: Option<&str>, limit: usize) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;

    match search {
        Some(query) => {
            let hits = catalog.search(query, limit);
            display_food_items(&hits, &format!("Dishes matching '{}'", query.trim()));
        }
        None => display_food_list(&catalog.list_all_names(), "Catalog dishes"),
    }
    Ok(())
}

/// Fuzzy-match a single name.
fn cmd_match(catalog_path: &Path, query: &str) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;

    match fuzzy_match(query, &catalog) {
        Some(food) => display_food_items(&[food], &format!("Closest to '{}'", query.trim())),
        None => println!("No close match for '{}'", query.trim()),
    }
    Ok(())
}

/// Analyze a selection and print the result or its error.
fn cmd_analyze(
    catalog: &Catalog,
    request: &AnalysisRequest,
    bmi: Option<f64>,
    json: bool,
) -> Result<()> {
    let outcome = analyze_selection(request, catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        Outcome::Ok(result) => display_analysis(&result, bmi),
        Outcome::Error { error } => println!("{}", error),
    }
    Ok(())
}

/// Recommend a plan, then optionally save it.
fn cmd_plan(
    raw: &RawPlanInput,
    source: &dyn FoodSource,
    seed: Option<u64>,
    name: &str,
    save: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let outcome = recommend_from_raw(raw, source, &mut rng);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    let plan = match outcome {
        Outcome::Ok(plan) => plan,
        Outcome::Error { error } => {
            if !json {
                println!("{}", error);
            }
            return Ok(());
        }
    };

    let request = raw.parse()?;
    if !json {
        display_meal_plan(&plan, bmi_for_display(request.weight_kg, request.height_cm));
    }

    let target = match save {
        Some(path) => Some(path.to_path_buf()),
        None if json => None,
        None => prompt_yes_no("Save this plan?", false)?
            .then(|| PathBuf::from(format!("{}.json", slug(name)))),
    };

    if let Some(path) = target {
        save_plan(&path, &SavedPlan::new(name, request, plan))?;
        if !json {
            println!("Plan saved to {}", path.display());
        }
    }
    Ok(())
}

/// Show a saved plan.
fn cmd_show_plan(path: &Path, json: bool) -> Result<()> {
    let saved = load_plan(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
        return Ok(());
    }

    println!("Plan: {}", saved.name);
    display_meal_plan(
        &saved.result,
        bmi_for_display(saved.request.weight_kg, saved.request.height_cm),
    );
    Ok(())
}

/// File-name friendly version of a plan name.
fn slug(name: &str) -> String {
    let slug: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if slug.is_empty() {
        "plan".to_string()
    } else {
        slug
    }
}
