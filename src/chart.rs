//! Chart orchestration: an explicit handle that owns the layout engine, the
//! long-lived simulation, the current request, and the current node set.
//!
//! UI intents arrive as [`Command`] values and are folded into the next
//! [`ChartRequest`] by [`reduce`]; mode changes keep the current positions
//! (the layout eases over), while dataset/year changes rebuild from scratch.

use serde::Serialize;

use crate::error::ChartError;
use crate::layout::{BubbleLayoutEngine, CategoryLabel, LayoutConfig};
use crate::models::{ChartRequest, Mode, Node, Record};
use crate::sim::{SimConfig, Simulation};

/// UI intent, decoupled from any widget toolkit.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SelectMode(Mode),
    SelectDataset(String),
    SelectYear(i32),
}

/// Fold a command into the next request. Pure; the caller decides when to
/// re-render with the result.
pub fn reduce(request: &ChartRequest, cmd: &Command) -> ChartRequest {
    let mut next = request.clone();
    match cmd {
        Command::SelectMode(mode) => next.mode = *mode,
        Command::SelectDataset(dataset) => next.dataset = dataset.clone(),
        Command::SelectYear(year) => next.year = Some(*year),
    }
    next
}

/// Snapshot handed to renderers: settled nodes plus the labels to draw.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub nodes: Vec<Node>,
    pub labels: Vec<CategoryLabel>,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// Topmost node under the pointer, if any. Nodes draw largest-first, so
    /// the scan runs in reverse to prefer whatever sits on top.
    pub fn node_at(&self, x: f64, y: f64) -> Option<&Node> {
        self.nodes.iter().rev().find(|n| {
            let dx = x - n.x;
            let dy = y - n.y;
            dx * dx + dy * dy <= n.radius * n.radius
        })
    }
}

/// The chart handle. Holds current mode and dataset state explicitly instead
/// of module-level globals; `render` is re-entrant and a new call supersedes
/// whatever run came before.
#[derive(Debug)]
pub struct Chart {
    engine: BubbleLayoutEngine,
    sim: Simulation,
    request: ChartRequest,
    nodes: Vec<Node>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(LayoutConfig::default(), SimConfig::default())
    }
}

impl Chart {
    pub fn new(layout: LayoutConfig, sim: SimConfig) -> Self {
        Self {
            engine: BubbleLayoutEngine::new(layout),
            sim: Simulation::new(sim),
            request: ChartRequest::default(),
            nodes: Vec::new(),
        }
    }

    pub fn request(&self) -> &ChartRequest {
        &self.request
    }

    pub fn mode(&self) -> Mode {
        self.engine.mode()
    }

    /// Render a request from raw records: filter by the requested year, fully
    /// replace the node set (no merge/diff), apply the requested mode, and
    /// run the simulation to rest. Restarting the simulation supersedes any
    /// previous run, so only one update stream ever mutates the nodes.
    ///
    /// Zero matching records is valid and yields an empty frame.
    pub fn render(
        &mut self,
        records: &[Record],
        request: &ChartRequest,
    ) -> Result<Frame, ChartError> {
        self.request = request.clone();
        self.engine.set_mode(request.mode);

        let filtered: Vec<Record> = match request.year {
            Some(year) => records.iter().filter(|r| r.year == year).cloned().collect(),
            None => records.to_vec(),
        };
        self.nodes = self.engine.build_nodes(&filtered)?;
        log::debug!(
            "render: {} nodes (dataset `{}`, year {:?}, {:?})",
            self.nodes.len(),
            request.dataset,
            request.year,
            request.mode
        );
        self.settle()?;
        Ok(self.frame())
    }

    /// Position-continuous mode change: keeps the current nodes, swaps the
    /// tick target, and re-runs the simulation from wherever bubbles sit.
    /// No jump-cut back to the initial seed positions.
    pub fn set_mode(&mut self, mode: Mode) -> Result<Frame, ChartError> {
        self.engine.set_mode(mode);
        self.request.mode = mode;
        self.settle()?;
        Ok(self.frame())
    }

    /// Toolbar entry point: `"region"` splits, anything else groups.
    pub fn toggle_display(&mut self, button_id: &str) -> Result<Frame, ChartError> {
        self.set_mode(Mode::from_button(button_id))
    }

    /// Apply a UI command: reduce it into the next request, then take the
    /// cheap path for mode changes and the full rebuild for everything else.
    pub fn dispatch(&mut self, records: &[Record], cmd: &Command) -> Result<Frame, ChartError> {
        let next = reduce(&self.request, cmd);
        match cmd {
            Command::SelectMode(mode) => self.set_mode(*mode),
            _ => self.render(records, &next),
        }
    }

    /// Current state as a renderer-facing snapshot.
    pub fn frame(&self) -> Frame {
        Frame {
            nodes: self.nodes.clone(),
            labels: self.engine.visible_labels(),
            width: self.engine.config().width,
            height: self.engine.config().height,
        }
    }

    fn settle(&mut self) -> Result<(), ChartError> {
        self.sim.start();
        while let Some(alpha) = self.sim.step(&mut self.nodes, |n| self.engine.charge(n)) {
            self.engine.apply_tick(&mut self.nodes, alpha)?;
        }
        Ok(())
    }
}
