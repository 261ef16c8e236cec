// Movement state machine
//
// Each game owns one `GameMemory`. Every turn it is resynchronised to the real
// snapshot, then either seeds a new plan toward the nearest food or keeps
// following the committed one. Anything that makes the plan unsafe or
// pointless throws it away and falls back to an emergency move.

use log::{debug, info, warn};

use crate::arbiter::{first_safe, Arbiter};
use crate::config::EngineConfig;
use crate::critical::filter_critical;
use crate::error::EngineError;
use crate::occupancy::Occupancy;
use crate::path::{plan_path, Displacement, Plan};
use crate::snapshot::{Dimensions, Snapshot};
use crate::targeting::nearest_food;
use crate::types::{Battlesnake, Coord, Direction};

/// Whether a food target is currently committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    IdleNoTarget,
    TargetCommitted,
}

/// Why a move was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Took the first step of a freshly committed plan
    PlanCommitted,
    /// Took the next step of an existing plan
    FollowingPlan,
    /// Took the final step onto the target
    TargetReached,
    /// No food to target
    NoFood,
    /// The first step of a fresh plan was blocked, off the board or a dead end
    FirstStepUnsafe,
    /// The next step of a committed plan was blocked, off the board or a dead end
    PlanBlocked,
    /// Another snake reached the committed food first
    TargetTaken,
    /// A longer-or-equal opponent contested the destination
    RightOfWay,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::PlanCommitted => "plan-committed",
            Reason::FollowingPlan => "following-plan",
            Reason::TargetReached => "target-reached",
            Reason::NoFood => "no-food",
            Reason::FirstStepUnsafe => "first-step-unsafe",
            Reason::PlanBlocked => "plan-blocked",
            Reason::TargetTaken => "target-taken",
            Reason::RightOfWay => "right-of-way",
        }
    }
}

/// One committed move and the reason for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub direction: Direction,
    pub reason: Reason,
}

impl Decision {
    fn new(direction: Direction, reason: Reason) -> Self {
        Decision { direction, reason }
    }
}

/// Everything the engine derives for a single turn
struct Turn<'a> {
    head: Coord,
    self_length: usize,
    occupancy: Occupancy<'a>,
    critical: &'a [Battlesnake],
    order: Vec<Direction>,
    boxed_in_default: Direction,
}

impl<'a> Turn<'a> {
    fn arbiter(&self) -> Arbiter<'_> {
        Arbiter {
            occupancy: &self.occupancy,
            critical: self.critical,
            self_length: self.self_length,
            order: &self.order,
            boxed_in_default: self.boxed_in_default,
        }
    }

    /// First safe direction in scan order, or the boxed-in default
    fn emergency(&self) -> Direction {
        first_safe(&self.occupancy, self.head, &self.order).unwrap_or_else(|| {
            warn!(
                "Boxed in at {}, falling back to {}",
                self.head, self.boxed_in_default
            );
            self.boxed_in_default
        })
    }
}

/// Cross-turn memory for one game
#[derive(Debug, Clone, Default)]
pub struct GameMemory {
    phase: Phase,
    dimensions: Option<Dimensions>,
    plan: Option<Plan>,
    target: Option<Coord>,
    displacement: Displacement,
    virtual_head: Option<Coord>,
    critical: Vec<Battlesnake>,
}

impl GameMemory {
    pub fn new() -> Self {
        GameMemory::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    pub fn target(&self) -> Option<Coord> {
        self.target
    }

    /// Remaining signed displacement from the virtual head to the target
    pub fn displacement(&self) -> Displacement {
        self.displacement
    }

    /// Projected head after the move decided this turn
    pub fn virtual_head(&self) -> Option<Coord> {
        self.virtual_head
    }

    /// Critical snakes computed on the most recent turn
    pub fn critical(&self) -> &[Battlesnake] {
        &self.critical
    }

    /// Decides this turn's move and updates the memory
    ///
    /// Fails if no board dimensions are known for this game or the snapshot
    /// does not fit on the known board.
    pub fn decide(
        &mut self,
        snapshot: &Snapshot,
        config: &EngineConfig,
    ) -> Result<Decision, EngineError> {
        let head = snapshot.head();
        self.virtual_head = Some(head);

        if snapshot.turn == 0 || self.dimensions.is_none() {
            if let Some(dims) = snapshot.dimensions {
                self.dimensions = Some(dims);
            }
        }
        let dimensions = self.dimensions.ok_or_else(|| EngineError::MissingDimensions {
            game_id: snapshot.game_id.clone(),
            turn: snapshot.turn,
        })?;
        snapshot.check_bounds(dimensions)?;

        if snapshot.turn == 0 && self.phase == Phase::TargetCommitted {
            debug!("Turn 0 for a game with a committed plan, starting over");
            self.invalidate();
        }

        let critical = filter_critical(
            &snapshot.opponents,
            &snapshot.self_id,
            head,
            config.critical_radius,
        );

        let decision = {
            let turn = Turn {
                head,
                self_length: snapshot.self_length(),
                occupancy: Occupancy::new(&snapshot.body, &critical, dimensions),
                critical: &critical,
                order: config.scan_order(),
                boxed_in_default: config.boxed_in_default,
            };

            match self.phase {
                Phase::TargetCommitted => self.follow_plan(snapshot, &turn),
                Phase::IdleNoTarget => self.seek_food(snapshot, &turn),
            }
        };

        self.critical = critical;
        self.virtual_head = Some(decision.direction.apply(&head));

        Ok(decision)
    }

    fn invalidate(&mut self) {
        self.phase = Phase::IdleNoTarget;
        self.plan = None;
        self.target = None;
        self.displacement = Displacement::default();
    }

    /// Idle step: pick the nearest food and try to commit a plan toward it
    fn seek_food(&mut self, snapshot: &Snapshot, turn: &Turn) -> Decision {
        self.invalidate();

        let candidates: Vec<Coord> = snapshot
            .food
            .iter()
            .copied()
            .filter(|&f| f != turn.head)
            .collect();

        let target = match nearest_food(turn.head, &candidates) {
            Ok(target) => target,
            Err(e) => {
                debug!("Turn {}: {}, using emergency move", snapshot.turn, e);
                return Decision::new(turn.emergency(), Reason::NoFood);
            }
        };

        let mut plan = plan_path(turn.head, target);
        let first = match plan.peek() {
            Some(first) => first,
            None => return Decision::new(turn.emergency(), Reason::NoFood),
        };

        if !turn.occupancy.is_safe(&first.apply(&turn.head)) {
            info!(
                "Turn {}: first step {} toward {} is unsafe",
                snapshot.turn, first, target
            );
            return Decision::new(turn.emergency(), Reason::FirstStepUnsafe);
        }

        let chosen = turn.arbiter().arbitrate(first, turn.head);
        if chosen != first {
            info!(
                "Turn {}: {} contested, yielding with {}",
                snapshot.turn, first, chosen
            );
            return Decision::new(chosen, Reason::RightOfWay);
        }

        plan.advance();
        if plan.is_exhausted() {
            return Decision::new(first, Reason::TargetReached);
        }

        info!(
            "Turn {}: committed to food at {} ({} moves)",
            snapshot.turn,
            target,
            plan.moves().len()
        );
        self.displacement = Displacement::between(turn.head, target).after(first);
        self.target = Some(target);
        self.plan = Some(plan);
        self.phase = Phase::TargetCommitted;

        Decision::new(first, Reason::PlanCommitted)
    }

    /// Committed step: take the next queued move unless reality diverged
    fn follow_plan(&mut self, snapshot: &Snapshot, turn: &Turn) -> Decision {
        let (target, next, remaining) = match (self.target, self.plan.as_ref()) {
            (Some(target), Some(plan)) => (target, plan.peek(), plan.remaining()),
            _ => return self.seek_food(snapshot, turn),
        };

        self.displacement = Displacement::between(turn.head, target);
        let next = match next {
            Some(next) if !self.displacement.is_zero() => next,
            _ => return self.seek_food(snapshot, turn),
        };

        let closes_in = self.displacement.after(next).manhattan() < self.displacement.manhattan();
        if remaining != self.displacement.manhattan() || !closes_in {
            warn!(
                "Turn {}: head {} is off plan toward {}, replanning",
                snapshot.turn, turn.head, target
            );
            return self.seek_food(snapshot, turn);
        }

        let taken = turn.critical.iter().any(|s| s.head() == Some(target))
            || !snapshot.food.contains(&target);
        if taken {
            info!("Turn {}: food at {} was taken", snapshot.turn, target);
            self.invalidate();
            return Decision::new(turn.emergency(), Reason::TargetTaken);
        }

        if !turn.occupancy.is_safe(&next.apply(&turn.head)) {
            info!(
                "Turn {}: emergency change of course, {} is unsafe",
                snapshot.turn, next
            );
            self.invalidate();
            return Decision::new(turn.emergency(), Reason::PlanBlocked);
        }

        let chosen = turn.arbiter().arbitrate(next, turn.head);
        if chosen != next {
            info!(
                "Turn {}: {} contested, abandoning plan with {}",
                snapshot.turn, next, chosen
            );
            self.invalidate();
            return Decision::new(chosen, Reason::RightOfWay);
        }

        self.displacement = self.displacement.after(next);
        let exhausted = match self.plan.as_mut() {
            Some(plan) => {
                plan.advance();
                plan.is_exhausted()
            }
            None => true,
        };

        if exhausted {
            self.invalidate();
            return Decision::new(next, Reason::TargetReached);
        }

        debug!(
            "Turn {}: following plan, {} toward {}",
            snapshot.turn, next, target
        );
        Decision::new(next, Reason::FollowingPlan)
    }
}
