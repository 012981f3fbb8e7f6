use anyhow::Result;
use ferrochip_core::{EmulatorApp, VmConfig};
use ferrochip_sdl2::{App, SdlContext, SdlInitInfo};

/// Load `rom_data` into a fresh interpreter and run it in an SDL2 window.
pub fn run_chip8(rom_data: &[u8], config: VmConfig) -> Result<()> {
    let mut app = EmulatorApp::new(config);
    app.emulator.load(rom_data)?;
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}
