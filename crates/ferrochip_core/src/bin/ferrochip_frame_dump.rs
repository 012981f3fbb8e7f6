use std::path::PathBuf;

use anyhow::{Context, Result};
use ferrochip_core::{Cycle, Interpreter, SCREEN_HEIGHT, SCREEN_WIDTH};

const USAGE: &str = "Usage: ferrochip_frame_dump <rom_path> [cycles] [out_rgb24_path]";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("{USAGE}");
        std::process::exit(2);
    });
    let cycles: u32 = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid cycle count '{arg}'\n{USAGE}"))?,
        None => 600,
    };
    let out_path = args.next().map(PathBuf::from);

    let mut vm = Interpreter::new();
    vm.load_file(&rom_path)?;

    let mut unimplemented = 0u32;
    for _ in 0..cycles {
        if let Cycle::Unimplemented(_) = vm.advance()? {
            unimplemented += 1;
        }
    }
    if unimplemented > 0 {
        log::warn!("{unimplemented} unimplemented opcodes executed as no-ops");
    }
    vm.debug_dump();

    match out_path {
        Some(out_path) => {
            let mut buffer = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 3];
            for (i, pixel) in vm.framebuffer().iter().enumerate() {
                let value = if *pixel != 0 { 0xFF } else { 0x00 };
                buffer[i * 3..i * 3 + 3].fill(value);
            }
            std::fs::write(&out_path, &buffer)
                .with_context(|| format!("failed to write '{}'", out_path.display()))?;
            println!(
                "Wrote {} bytes ({}x{} rgb24) after {} cycles to '{}'",
                buffer.len(),
                SCREEN_WIDTH,
                SCREEN_HEIGHT,
                cycles,
                out_path.display()
            );
        }
        None => {
            for line in vm.framebuffer().chunks(SCREEN_WIDTH) {
                let line: String = line
                    .iter()
                    .map(|px| if *px != 0 { '#' } else { '.' })
                    .collect();
                println!("{line}");
            }
        }
    }
    Ok(())
}
