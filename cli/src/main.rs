use anyhow::Result;
use clap::{Parser, Subcommand};
use saucier_core::analysis::{format_analysis, total_time_minutes, RecipeAnalyzer};
use std::path::PathBuf;

/// Sample recipe for demonstration.
const SAMPLE_RECIPE: &str = "
Spaghetti Carbonara

Ingredients:
- 400g spaghetti
- 200g pancetta or guanciale, diced
- 4 large eggs
- 100g Pecorino Romano cheese, grated
- Black pepper
- Salt

Instructions:
1. Cook spaghetti in salted boiling water until al dente
2. Meanwhile, cook pancetta in a large pan until crispy
3. In a bowl, whisk eggs with cheese and black pepper
4. Drain pasta, reserving some pasta water
5. Add hot pasta to pancetta pan, remove from heat
6. Quickly stir in egg mixture, adding pasta water as needed
7. Serve immediately with extra cheese and pepper
";

#[derive(Parser)]
#[command(name = "saucier")]
#[command(about = "Saucier CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a recipe and print the report
    Analyze {
        /// Path to a recipe text file (defaults to a built-in sample)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file } => {
            analyze(file).await?;
        }
    }

    Ok(())
}

async fn analyze(file: Option<PathBuf>) -> Result<()> {
    let recipe_text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_RECIPE.to_string(),
    };

    // Fails here, before any analysis, if OPENAI_API_KEY is not set.
    let analyzer = RecipeAnalyzer::from_env()?;

    println!("🔍 Analyzing recipe...");

    let analysis = analyzer.analyze(&recipe_text).await?;

    println!("{}", format_analysis(&analysis));

    println!("\n🎯 Quick Check:");
    println!(
        "This is a {} recipe",
        analysis.difficulty_level.to_lowercase()
    );
    println!("Total time: {} minutes", total_time_minutes(&analysis));
    println!("Calories per serving: {}", analysis.nutrition.calories);

    Ok(())
}
