use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " VISIONS ".yellow());
    println!("Usage:");
    println!("  {} <command> [arguments]", "visions".bold().green());
    println!("\nCommands:");
    println!(
        "  {}                       Run the HTTP generation service.",
        "serve".bold().cyan()
    );
    println!(
        "  {}  Generate images for one city and issue.",
        "generate <city> <issue>".bold().magenta()
    );
    println!(
        "  {}                      List supported cities and issues.",
        "cities".bold().red()
    );
    println!(
        "  {}                   Display this help message.",
        "-h, -help".bold().blue()
    );
    println!("\nEnvironment:");
    println!("  OPENAI_API_KEY, STABILITY_API_KEY   Provider credentials.");
    println!("  VISIONS_PROVIDERS                   e.g. dall-e-3,dall-e-2,stable-diffusion");
    println!("  VISIONS_PROVIDER_TIMEOUT_SECS       Per-provider timeout (default 60).");
    println!("  VISIONS_BIND                        Listen address (default 127.0.0.1:8080).");
    println!("  VISIONS_ENV_FILE                    Read settings from this env file.");
    println!("\nExamples:");
    println!("  {}", "visions serve".bold().cyan());
    println!("  {} London Flooding", "visions generate".bold().magenta());
    println!(
        "  {} Los Angeles Wildfires",
        "visions generate".bold().magenta()
    );
    println!("{:━^60}", "".yellow());
}
