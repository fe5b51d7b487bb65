//! bubbles-rs
//!
//! A lightweight Rust library for laying out and rendering force-directed
//! bubble charts of per-country indicator data. Pairs with the `bubbles` CLI.
//!
//! ### Features
//! - Load rows (id, country, region, year, value) from CSV or JSON
//! - Area-proportional bubble sizing with a descending-value draw order
//! - Two layout modes: one shared cluster, or per-region clusters with labels
//! - A decaying-alpha force simulation that settles on its own
//! - SVG output plus quick per-region summary statistics
//!
//! ### Example
//! ```no_run
//! use bubbles_rs::{Chart, ChartRequest, Mode};
//!
//! let records = bubbles_rs::storage::load_csv("fdi-out.csv")?;
//! let mut chart = Chart::default();
//! let request = ChartRequest::new("fdi-out", Some(2014), Mode::Split);
//! let frame = chart.render(&records, &request)?;
//! bubbles_rs::viz::render_svg(&frame, "fdi-out.svg")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod chart;
pub mod error;
pub mod layout;
pub mod models;
pub mod scale;
pub mod sim;
pub mod stats;
pub mod storage;
pub mod viz;

pub use chart::{Chart, Command, Frame, reduce};
pub use error::ChartError;
pub use layout::{BubbleLayoutEngine, CategoryLabel, LayoutConfig, Point, Targets};
pub use models::{ChartRequest, Mode, Node, Record};
pub use sim::{SimConfig, Simulation};
