mod setup;
mod config_gen;

use jiangnan_skia_renderer::SkiaRenderer;

fn main() -> anyhow::Result<()> {
    setup::init()?;
    log::info!(">>> Jiangnan Desktop Launcher Started <<<");

    let app = SkiaRenderer::new();
    app.run()?;

    log::info!("Bye");
    Ok(())
}
