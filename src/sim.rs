//! Cooperative force simulation in the d3 `layout.force` mold: a decaying
//! alpha gates every force, and a run halts on its own once alpha drops below
//! the stopping threshold. Convergence is governed solely by alpha decay —
//! there are no timeouts and no cancellation beyond starting a new run.
//!
//! The simulation owns no nodes. Each [`Simulation::step`] call mutates the
//! slice it is handed: many-body repulsion (from a caller-supplied charge
//! function), a weak center gravity, then velocity integration with friction.
//! Callers interleave their own per-tick update between steps; the node slice
//! has exactly one writer per tick.

use crate::models::Node;

/// Parameters for the force simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Canvas size; gravity pulls toward (or pushes from) its center.
    pub width: f64,
    pub height: f64,
    /// Center gravity per tick. The reference chart runs a slightly
    /// *negative* gravity so clusters breathe outward against the easing.
    pub gravity: f64,
    /// Velocity carried over between ticks (0 = full stop, 1 = frictionless).
    pub friction: f64,
    /// Scales every charge; 0.0 disables repulsion entirely.
    pub charge_strength: f64,
    /// Alpha schedule: start value, per-tick decay factor, stop threshold.
    pub alpha_start: f64,
    pub alpha_decay: f64,
    pub alpha_min: f64,
}

impl SimConfig {
    /// Defaults matching the reference chart for a given canvas.
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 940.0,
            height: 600.0,
            gravity: -0.01,
            friction: 0.9,
            charge_strength: 1.0,
            alpha_start: 0.1,
            alpha_decay: 0.99,
            alpha_min: 0.005,
        }
    }
}

/// The simulation loop state. Long-lived: one instance survives across mode
/// toggles and re-renders; `start` resets alpha and supersedes whatever run
/// came before.
#[derive(Debug, Clone)]
pub struct Simulation {
    cfg: SimConfig,
    alpha: f64,
}

impl Simulation {
    pub fn new(cfg: SimConfig) -> Self {
        Self { cfg, alpha: 0.0 }
    }

    pub fn config(&self) -> &SimConfig {
        &self.cfg
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Begin (or restart) a run. Any in-flight run is superseded: the next
    /// `step` uses the fresh alpha, so two competing update streams cannot
    /// exist.
    pub fn start(&mut self) {
        self.alpha = self.cfg.alpha_start;
    }

    /// Halt the current run immediately.
    pub fn stop(&mut self) {
        self.alpha = 0.0;
    }

    pub fn running(&self) -> bool {
        self.alpha >= self.cfg.alpha_min
    }

    /// Advance one tick: apply repulsion and gravity, integrate velocities,
    /// decay alpha. Returns the alpha used for this tick, or `None` once the
    /// run has settled (callers then stop driving their own tick update).
    pub fn step<F>(&mut self, nodes: &mut [Node], charge: F) -> Option<f64>
    where
        F: Fn(&Node) -> f64,
    {
        if self.alpha < self.cfg.alpha_min {
            return None;
        }
        let alpha = self.alpha;
        if self.cfg.charge_strength != 0.0 {
            self.apply_many_body(nodes, &charge, alpha);
        }
        self.apply_gravity(nodes, alpha);
        self.integrate(nodes);
        self.alpha *= self.cfg.alpha_decay;
        Some(alpha)
    }

    /// Pairwise repulsion. O(n²), fine for the few hundred bubbles a chart
    /// holds. Each node pushes the other with its own charge over the squared
    /// distance.
    fn apply_many_body<F>(&self, nodes: &mut [Node], charge: &F, alpha: f64)
    where
        F: Fn(&Node) -> f64,
    {
        let n = nodes.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = nodes[j].x - nodes[i].x;
                let dy = nodes[j].y - nodes[i].y;
                let d2 = (dx * dx + dy * dy).max(1e-6);

                let push_j = -charge(&nodes[i]) * self.cfg.charge_strength * alpha / d2;
                nodes[j].vx += dx * push_j;
                nodes[j].vy += dy * push_j;

                let push_i = -charge(&nodes[j]) * self.cfg.charge_strength * alpha / d2;
                nodes[i].vx -= dx * push_i;
                nodes[i].vy -= dy * push_i;
            }
        }
    }

    fn apply_gravity(&self, nodes: &mut [Node], alpha: f64) {
        let k = self.cfg.gravity * alpha;
        if k == 0.0 {
            return;
        }
        let cx = self.cfg.width / 2.0;
        let cy = self.cfg.height / 2.0;
        for node in nodes.iter_mut() {
            node.x += (cx - node.x) * k;
            node.y += (cy - node.y) * k;
        }
    }

    fn integrate(&self, nodes: &mut [Node]) {
        for node in nodes.iter_mut() {
            node.x += node.vx;
            node.y += node.vy;
            node.vx *= self.cfg.friction;
            node.vy *= self.cfg.friction;
        }
    }
}
