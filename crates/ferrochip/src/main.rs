use anyhow::{Context, Result};
use ferrochip_core::VmConfig;

const USAGE: &str = "Usage: ferrochip <rom_path> [cycles_per_frame] [--checked-stack]";

fn main() -> Result<()> {
    env_logger::init();

    let mut rom_path = None;
    let mut cycles_per_frame = None;
    let mut checked_stack = false;
    for arg in std::env::args().skip(1) {
        if arg == "--checked-stack" {
            checked_stack = true;
        } else if arg == "-h" || arg == "--help" {
            println!("{USAGE}");
            return Ok(());
        } else if rom_path.is_none() {
            rom_path = Some(arg);
        } else if cycles_per_frame.is_none() {
            let cycles: u32 = arg
                .parse()
                .with_context(|| format!("invalid cycles_per_frame '{arg}'\n{USAGE}"))?;
            cycles_per_frame = Some(cycles);
        } else {
            anyhow::bail!("unexpected argument '{arg}'\n{USAGE}");
        }
    }

    let Some(rom_path) = rom_path else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    log::info!("Playing ROM path: '{}'", rom_path);
    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read ROM file '{rom_path}'"))?;

    let config = VmConfig::builder()
        .checked_stack(checked_stack)
        .cycles_per_frame(cycles_per_frame.unwrap_or(10))
        .build();
    ferrochip::run_chip8(&rom, config)
}
