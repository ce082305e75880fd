use anyhow::Result;
use norma_term::application::cli;
use norma_term::application::ui::destruct_terminal_for_panic;

#[tokio::main]
async fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    cli::parse().await?;

    return Ok(());
}
