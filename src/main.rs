use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use sidebar_layout::cli::CliArgs;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    sidebar_layout::tracing::init();

    let startup = args.into_config()?;
    tracing::info!(
        sidebar_width = startup.layout.sidebar_width,
        routes = startup.outline.len(),
        location = %startup.location,
        "starting"
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup);
    event_loop.run_app(&mut app)?;

    Ok(())
}
