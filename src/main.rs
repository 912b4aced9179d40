use log::{debug, error};
use std::env;
use std::path::Path;
use std::process::ExitCode;
use tokio::io::AsyncReadExt;

use mealie_import::{export_recipe_text, require_text, AiConfig, ExtractionError, RecipeExtractor};

const DEFAULT_INPUT: &str = "recette.txt";
const STDIN_INPUT: &str = "-";

const USAGE: &str = "Usage: mealie-import [FILE | -]

  FILE  recipe text file; writes <recipe-name>.json in the current directory
        (default: recette.txt)
  -     read the recipe from stdin and print the JSON";

#[tokio::main]
async fn main() -> ExitCode {
    // .env may carry OPENAI_API_KEY and RUST_LOG
    dotenvy::dotenv().ok();
    env_logger::init();

    let input = env::args().nth(1).unwrap_or_else(|| DEFAULT_INPUT.to_string());
    if input == "-h" || input == "--help" {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match run(&input).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_input_error() => {
            eprintln!("Merci de coller du texte d'abord.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:?}", e);
            eprintln!("Une erreur est survenue : {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(input: &str) -> Result<(), ExtractionError> {
    let text = if input == STDIN_INPUT {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        text
    } else {
        tokio::fs::read_to_string(input).await?
    };
    // blank input is reported even when no provider is configured
    require_text(&text)?;

    let config = AiConfig::load()?;
    let extractor = RecipeExtractor::from_config(&config)?;
    debug!("Using provider {}", extractor.provider_name());

    if input == STDIN_INPUT {
        let recipe = extractor.extract(&text).await?;
        eprintln!("Recette convertie avec succès !");
        println!("{}", recipe.to_pretty_json()?);
    } else {
        let path = export_recipe_text(&extractor, &text, Path::new(".")).await?;
        let file_name = path.file_name().unwrap_or(path.as_os_str());
        println!("OK -> {}", file_name.to_string_lossy());
    }

    Ok(())
}
