use anyhow::Result;
use huddle_core::config::HuddleConfig;
use owo_colors::OwoColorize;

pub fn run(config: &HuddleConfig) -> Result<()> {
    let config_path = HuddleConfig::config_path()?;
    let timezone = config.timezone()?;
    let user = config.user();

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    match config.seed_path() {
        Some(path) => println!("  Events:     {}", path.display()),
        None => println!("  Events:     {}", "(built-in demo events)".dimmed()),
    }

    println!();
    println!("{}", "Settings".bold());
    println!("  Week start: {:?}", config.week_start);
    println!("  Timezone:   {}", timezone);
    println!("  You:        {} ({})", user.name, user.id.dimmed());

    Ok(())
}
