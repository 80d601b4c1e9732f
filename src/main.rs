use recipe_scrape::fetch_recipes;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // One JSON object per line; the first fetch failure aborts the run.
    for recipe in fetch_recipes()? {
        println!("{}", serde_json::to_string(&recipe?)?);
    }

    Ok(())
}
