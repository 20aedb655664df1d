use crab_hours::{Schedule, display_schedule, load_catalog, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. dotenv, configuration, logging
    let config = setup_environment()?;

    // 2. Catalog
    let catalog = load_catalog(&config)?;
    tracing::info!(locations = catalog.len(), "Rendering opening hours");

    // 3. Print every location
    for entry in catalog.locations() {
        let location = entry.to_location();
        let schedule = Schedule::from_location(&location);

        println!("{} ({})", location.name, location.city);
        for category in display_schedule(&schedule) {
            println!("  {}", category.category);
            for row in &category.rows {
                println!("    {}", row);
            }
        }
        println!();
    }

    Ok(())
}
