// =====================================================================
// Staff Trainer
// =====================================================================
// Usage:
//   ./staff-trainer
//
// Clef glyphs (g-clef.png, f-clef.png) and font.ttf are looked up in
// an assets/ directory next to the executable or in the working
// directory. All of them are optional.

use log::LevelFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Fixed level, no environment variables are consulted
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .target(env_logger::Target::Stdout)
        .init();

    staff_trainer::app::run()?;
    Ok(())
}
