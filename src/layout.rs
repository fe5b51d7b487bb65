//! The bubble layout core: node construction, the grouped/split mode machine,
//! and the incremental position update applied on every simulation tick.
//!
//! The engine never talks to a renderer or a clock. An external simulation
//! drives it by calling [`BubbleLayoutEngine::apply_tick`] once per step with
//! the current alpha; the engine nudges each node toward the target of the
//! active mode and nothing else. Overlap avoidance is the simulation's job.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::ChartError;
use crate::models::{Mode, Node, Record};
use crate::scale::RadiusScale;

/// A point in canvas space (pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Per-category title shown while split mode is active.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryLabel {
    pub category: String,
    pub anchor: Point,
}

/// Tunables for node construction and the per-tick easing update.
///
/// The split boost (1.1) and charge divisor (8) are carried over from the
/// reference visualization for visual fidelity; treat them as configuration,
/// not physics.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Radius scale output range.
    pub min_radius: f64,
    pub max_radius: f64,
    /// Easing coefficient toward the target per tick.
    pub damper: f64,
    /// Extra pull in split mode; split targets sit farther apart and need a
    /// slightly stronger pull to settle in the same number of steps.
    pub split_boost: f64,
    /// Scales charge down to the visualization dimensions.
    pub charge_divisor: f64,
    /// Sub-rectangle (from the origin) for random initial placement.
    pub seed_width: f64,
    pub seed_height: f64,
    /// Fix the placement RNG for reproducible layouts; `None` uses entropy.
    pub rng_seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 940.0,
            height: 600.0,
            min_radius: 2.0,
            max_radius: 85.0,
            damper: 0.102,
            split_boost: 1.1,
            charge_divisor: 8.0,
            seed_width: 900.0,
            seed_height: 800.0,
            rng_seed: None,
        }
    }
}

/// Layout targets: one shared center plus a target point and label anchor per
/// category.
#[derive(Debug, Clone)]
pub struct Targets {
    center: Point,
    by_category: BTreeMap<String, Point>,
    label_anchors: BTreeMap<String, Point>,
}

impl Targets {
    /// Targets with only a shared center; categories can be registered on top.
    pub fn shared_center(center: Point) -> Self {
        Self {
            center,
            by_category: BTreeMap::new(),
            label_anchors: BTreeMap::new(),
        }
    }

    /// The five world regions of the reference chart, positioned relative to
    /// the canvas: three clusters across the upper band, two below, with
    /// title anchors at the top edge and under the lower band.
    pub fn world_regions(width: f64, height: f64) -> Self {
        let mut t = Self::shared_center(Point::new(width / 2.0, height / 2.0));
        let upper = height / 2.5;
        let lower = height / 1.5;
        let title_lower = height / 1.4;
        t.register("Americas", Point::new(width / 3.0, upper), Point::new(width / 3.0 - 100.0, 40.0));
        t.register("Europe", Point::new(width / 2.0, upper), Point::new(width / 2.0, 40.0));
        t.register("Asia", Point::new(2.0 * width / 3.0, upper), Point::new(2.0 * width / 3.0 + 100.0, 40.0));
        t.register("Africa", Point::new(width / 3.0 - 40.0, lower), Point::new(width / 3.0 - 100.0, title_lower));
        t.register("Oceania", Point::new(2.0 * width / 3.0 + 30.0, lower), Point::new(2.0 * width / 3.0 + 100.0, title_lower));
        t
    }

    /// Register (or replace) a category target and its label anchor.
    pub fn register(&mut self, category: &str, target: Point, label_anchor: Point) {
        self.by_category.insert(category.to_string(), target);
        self.label_anchors.insert(category.to_string(), label_anchor);
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn category(&self, category: &str) -> Option<Point> {
        self.by_category.get(category).copied()
    }

    /// Labels for every registered category, in name order.
    pub fn labels(&self) -> Vec<CategoryLabel> {
        self.label_anchors
            .iter()
            .map(|(category, anchor)| CategoryLabel {
                category: category.clone(),
                anchor: *anchor,
            })
            .collect()
    }
}

/// Owns node construction, the grouped/split mode toggle, and the per-tick
/// position update. The force simulation and the renderer are collaborators;
/// the engine only ever mutates node positions.
#[derive(Debug)]
pub struct BubbleLayoutEngine {
    cfg: LayoutConfig,
    targets: Targets,
    mode: Mode,
}

impl BubbleLayoutEngine {
    /// Engine with the world-region targets derived from the canvas size.
    pub fn new(cfg: LayoutConfig) -> Self {
        let targets = Targets::world_regions(cfg.width, cfg.height);
        Self::with_targets(cfg, targets)
    }

    /// Engine with caller-supplied targets (custom categories or test setups).
    pub fn with_targets(cfg: LayoutConfig, targets: Targets) -> Self {
        Self {
            cfg,
            targets,
            mode: Mode::Grouped,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.cfg
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch layout mode. Node positions are untouched; only the target used
    /// by subsequent ticks (and label visibility) changes, so the transition
    /// eases from wherever nodes currently sit.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Labels to draw for the active mode: every registered category in split
    /// mode, none in grouped mode.
    pub fn visible_labels(&self) -> Vec<CategoryLabel> {
        match self.mode {
            Mode::Grouped => Vec::new(),
            Mode::Split => self.targets.labels(),
        }
    }

    /// Build one node per record, largest value first.
    ///
    /// Radii come from an area-proportional scale over `[0, max(value)]`.
    /// Initial positions are uniformly random inside the seeding
    /// sub-rectangle; with `rng_seed` set the placement is reproducible
    /// call-for-call. The descending sort puts large circles into the
    /// draw/physics order first, which keeps them from occluding small ones
    /// once collisions are resolved.
    pub fn build_nodes(&self, records: &[Record]) -> Result<Vec<Node>, ChartError> {
        let max_value = records.iter().map(|r| r.value).fold(0.0, f64::max);
        let scale = RadiusScale::new(max_value, self.cfg.min_radius, self.cfg.max_radius);
        let mut rng = match self.cfg.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut nodes = Vec::with_capacity(records.len());
        for r in records {
            if !r.value.is_finite() {
                return Err(ChartError::InvalidValue {
                    id: r.id.clone(),
                    raw: r.value.to_string(),
                });
            }
            nodes.push(Node {
                id: r.id.clone(),
                radius: scale.radius(r.value),
                value: r.value,
                name: r.country.clone(),
                region: r.region.clone(),
                year: r.year,
                x: rng.gen_range(0.0..self.cfg.seed_width),
                y: rng.gen_range(0.0..self.cfg.seed_height),
                vx: 0.0,
                vy: 0.0,
            });
        }
        nodes.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
        Ok(nodes)
    }

    /// Per-tick update: ease every node toward its current target,
    /// independently per axis:
    ///
    /// `position += (target − position) × damper × alpha × boost`
    ///
    /// `alpha` decays toward zero over a simulation run, so the pull weakens
    /// as the layout settles and the simulation's own repulsion gets the
    /// final say on spacing. Pure per node: no inter-node coupling here.
    pub fn apply_tick(&self, nodes: &mut [Node], alpha: f64) -> Result<(), ChartError> {
        for node in nodes.iter_mut() {
            let (target, boost) = match self.mode {
                Mode::Grouped => (self.targets.center(), 1.0),
                Mode::Split => {
                    let target = self
                        .targets
                        .category(&node.region)
                        .ok_or_else(|| ChartError::MissingCategoryTarget(node.region.clone()))?;
                    (target, self.cfg.split_boost)
                }
            };
            let k = self.cfg.damper * alpha * boost;
            node.x += (target.x - node.x) * k;
            node.y += (target.y - node.y) * k;
        }
        Ok(())
    }

    /// Charge for the many-body force. Proportional to bubble area so
    /// collision resolution stays accurate across sizes; negative to repel.
    pub fn charge(&self, node: &Node) -> f64 {
        -(node.radius * node.radius) / self.cfg.charge_divisor
    }
}
