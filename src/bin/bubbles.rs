use anyhow::Result;
use bubbles_rs::{Chart, ChartRequest, LayoutConfig, Mode, SimConfig};
use bubbles_rs::{stats, storage, viz};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bubbles",
    version,
    about = "Lay out & render force-directed bubble charts from per-country CSV data"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a bubble chart to SVG (and optionally print stats).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Input CSV with columns id,country,region,year,value,group.
    #[arg(short, long)]
    input: PathBuf,
    /// Year to display (e.g., 2014). Omit to include every row.
    #[arg(short, long)]
    year: Option<i32>,
    /// Layout mode: "region" splits by region; anything else groups.
    #[arg(short, long, default_value = "all")]
    mode: String,
    /// Output SVG path.
    #[arg(short, long)]
    out: PathBuf,
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 940)]
    width: u32,
    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Seed for reproducible bubble placement.
    #[arg(long)]
    seed: Option<u64>,
    /// Print per-region statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let records = storage::load_csv(&args.input)?;

    let layout = LayoutConfig {
        width: args.width as f64,
        height: args.height as f64,
        rng_seed: args.seed,
        ..Default::default()
    };
    let sim = SimConfig::for_canvas(args.width as f64, args.height as f64);
    let mut chart = Chart::new(layout, sim);

    let dataset = args.input.to_string_lossy().into_owned();
    let request = ChartRequest::new(dataset, args.year, Mode::from_button(&args.mode));
    let frame = chart.render(&records, &request)?;
    viz::render_svg(&frame, &args.out)?;
    eprintln!(
        "Wrote {} bubbles to {}",
        frame.nodes.len(),
        args.out.display()
    );

    if args.stats {
        for s in stats::region_summary(&records) {
            println!(
                "{}  count={} total={} mean={} min={} max={}",
                s.region,
                s.count,
                fmt_opt(Some(s.total)),
                fmt_opt(s.mean),
                fmt_opt(s.min),
                fmt_opt(s.max)
            );
        }
    }

    Ok(())
}
