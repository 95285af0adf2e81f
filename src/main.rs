use std::env;

use log::error;

use bonappetit_import::model::Recipe;
use bonappetit_import::scrape_recipe;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let url = args.get(1).ok_or("Please provide a URL as an argument")?;
    let as_json = args.iter().any(|arg| arg == "--json");

    match scrape_recipe(url) {
        Some(recipe) if as_json => println!("{}", serde_json::to_string_pretty(&recipe)?),
        Some(recipe) => print_recipe(&recipe),
        None => {
            error!("Unable to fetch the recipe page.");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_recipe(recipe: &Recipe) {
    println!("{}", recipe.title);
    println!("\n\nIngredients:\n");
    println!("{}", recipe.ingredients.join("\n"));
    println!("\n\nDirections:\n");
    println!("{}", recipe.directions.join("\n\n"));
    if !recipe.servings.is_empty() {
        println!("\n\nServings: {}", recipe.servings);
    }
    if !recipe.source.is_empty() {
        println!("\nSource: {}", recipe.source);
    }
    if !recipe.source_url.is_empty() {
        println!("\nSource URL: {}", recipe.source_url);
    }
    if !recipe.img_url.is_empty() {
        println!("\nImage URL: {}", recipe.img_url);
    }
    if !recipe.cooking_time.is_empty() {
        println!("\nCooking Time: {}", recipe.cooking_time);
    }
    if !recipe.total_time.is_empty() {
        println!("\nTotal Time: {}", recipe.total_time);
    }
    if !recipe.notes.is_empty() {
        println!("\nNotes:\n");
        println!("{}", recipe.notes);
    }
}
