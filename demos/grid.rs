//! Label a 2 x 3 grid of panels and print the resulting text objects.
//!
//! Run with `--features tracing` and `RUST_LOG=debug` to see placement logs.
//! An optional first argument is an option list, e.g. `"location = se, order = downright"`.

use panelmark::{FigureOptions, Host, LabelMode, MemoryHost, bold, label_figure};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let source = std::env::args().nth(1).unwrap_or_else(|| "prefix = \"(\", postfix = \")\"".to_string());
    let opts = FigureOptions::parse(&source)?;

    let mut host = MemoryHost::new();
    let fig = host.add_figure();
    for i in 1..=6 {
        host.subplot(fig, 2, 3, i)?;
    }

    let labels = label_figure(&mut host, fig, LabelMode::LowerAlpha, &opts)?;
    bold(&mut host, &labels)?;

    for label in &labels {
        let Some(obj) = host.text_object(label.label()) else {
            continue;
        };
        let rect = host.panel_rect(obj.panel)?;
        println!(
            "{:>6}  panel {}  at ({:.2}, {:.2})  {:?}/{:?}",
            obj.spec.text, rect, obj.spec.position.x, obj.spec.position.y, obj.spec.valign, obj.spec.halign
        );
    }
    Ok(())
}
