use anyhow::{bail, Context, Result};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next() else {
        bail!("usage: gbmu <rom-path> [max-steps]");
    };
    let max_steps = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid step count '{arg}'"))?,
        None => gbmu::DEFAULT_MAX_STEPS,
    };

    log::info!("Running ROM path: '{}'", rom_path);
    let rom = std::fs::read(&rom_path).with_context(|| format!("failed to read '{rom_path}'"))?;

    let summary = gbmu::run(&rom, max_steps)?;
    println!("{summary}");
    Ok(())
}
