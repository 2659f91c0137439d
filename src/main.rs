use anyhow::Context as _;
use gpui::{
    App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use gpui_folio::{FolioAssets, assets, content::Portfolio, views::PortfolioPage};

const DEFAULT_LOG_FILTER: &str = "gpui_folio=info,folio_palette=info";

fn main() -> anyhow::Result<()> {
    init_tracing();

    let portfolio = Portfolio::builtin().context("failed to load portfolio content")?;

    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .with_assets(assets![FolioAssets])
        .run(move |cx: &mut App| {
            gpui_folio::init(cx);

            let bounds = Bounds::centered(None, size(px(1280.), px(900.)), cx);
            let title = portfolio.profile.name.clone();

            let window = cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        title: Some(title),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |_window, cx| cx.new(|_cx| PortfolioPage::new(portfolio)),
            );

            if let Err(error) = window {
                tracing::error!(%error, "failed to open window");
                cx.quit();
                return;
            }

            cx.activate(true);
        });

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
