//! Travel log: the ordered record of applied instructions.
//!
//! Logs are immutable values. [`TravelLog::record`] returns a new log with
//! the step appended and leaves the original untouched.

use super::instruction::Instruction;
use super::pose::Pose;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One applied instruction and the poses on either side of it.
///
/// # Example
///
/// ```rust
/// use grid_rover::core::{Heading, Instruction, Pose, Step};
/// use chrono::Utc;
///
/// let from = Pose::facing(Heading::North);
/// let step = Step {
///     index: 0,
///     instruction: Instruction::Right,
///     from,
///     to: from.after(Instruction::Right),
///     timestamp: Utc::now(),
/// };
///
/// assert!(step.is_consistent());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Character index within the instruction string or program that applied
    /// this step; single operations count as a batch of one (index 0)
    pub index: usize,
    /// The instruction applied
    pub instruction: Instruction,
    /// Pose before the instruction
    pub from: Pose,
    /// Pose after the instruction
    pub to: Pose,
    /// When the instruction was applied
    pub timestamp: DateTime<Utc>,
}

impl Step {
    /// True when `to` is exactly `from` advanced by `instruction`.
    pub fn is_consistent(&self) -> bool {
        self.from.after(self.instruction) == self.to
    }
}

/// Ordered history of applied instructions.
///
/// # Example
///
/// ```rust
/// use grid_rover::core::{Heading, Instruction, Pose, Position, Step, TravelLog};
/// use chrono::Utc;
///
/// let start = Pose::new(Heading::North, Position::new(5, 5));
/// let mut log = TravelLog::new();
/// let mut pose = start;
///
/// for (index, instruction) in [Instruction::Right, Instruction::Forward].into_iter().enumerate() {
///     let next = pose.after(instruction);
///     log = log.record(Step { index, instruction, from: pose, to: next, timestamp: Utc::now() });
///     pose = next;
/// }
///
/// let path = log.path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[0], &start);
/// assert_eq!(path[2], &Pose::new(Heading::East, Position::new(6, 5)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelLog {
    steps: Vec<Step>,
}

impl TravelLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new log with `step` appended.
    pub fn record(&self, step: Step) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// In-place append for the rover shell, which owns its log exclusively.
    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Poses visited: the first step's `from`, then every step's `to`.
    ///
    /// Empty when nothing was recorded.
    pub fn path(&self) -> Vec<&Pose> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            path.push(&first.from);
        }
        for step in &self.steps {
            path.push(&step.to);
        }
        path
    }

    /// Elapsed time from the first to the last step.
    ///
    /// Returns `None` if the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Every step is internally consistent and starts where the previous
    /// one ended.
    pub fn is_continuous(&self) -> bool {
        self.steps.iter().all(Step::is_consistent)
            && self.steps.windows(2).all(|pair| pair[0].to == pair[1].from)
    }

    /// The instructions applied, in order.
    pub fn instructions(&self) -> impl Iterator<Item = Instruction> + '_ {
        self.steps.iter().map(|step| step.instruction)
    }

    /// The recorded instructions as an instruction string.
    pub fn to_instruction_string(&self) -> String {
        self.instructions().map(Instruction::as_char).collect()
    }

    /// Pose before the first step.
    pub fn start(&self) -> Option<&Pose> {
        self.steps.first().map(|step| &step.from)
    }

    /// Pose after the last step.
    pub fn end(&self) -> Option<&Pose> {
        self.steps.last().map(|step| &step.to)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Heading, Position};

    fn step(index: usize, instruction: Instruction, from: Pose) -> Step {
        Step {
            index,
            instruction,
            from,
            to: from.after(instruction),
            timestamp: Utc::now(),
        }
    }

    fn log_of(start: Pose, instructions: &[Instruction]) -> TravelLog {
        let mut log = TravelLog::new();
        let mut pose = start;
        for (index, &instruction) in instructions.iter().enumerate() {
            let s = step(index, instruction, pose);
            pose = s.to;
            log = log.record(s);
        }
        log
    }

    #[test]
    fn new_log_is_empty() {
        let log = TravelLog::new();
        assert!(log.is_empty());
        assert!(log.path().is_empty());
        assert!(log.duration().is_none());
        assert!(log.start().is_none());
        assert!(log.end().is_none());
        assert!(log.is_continuous());
    }

    #[test]
    fn record_returns_new_log() {
        let log = TravelLog::new();
        let new_log = log.record(step(0, Instruction::Forward, Pose::facing(Heading::North)));

        assert_eq!(log.len(), 0);
        assert_eq!(new_log.len(), 1);
    }

    #[test]
    fn path_lists_visited_poses() {
        use Instruction::*;
        let start = Pose::new(Heading::North, Position::new(5, 5));
        let log = log_of(start, &[Right, Forward, Forward]);

        let path = log.path();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], &start);
        assert_eq!(path[1], &Pose::new(Heading::East, Position::new(5, 5)));
        assert_eq!(path[2], &Pose::new(Heading::East, Position::new(6, 5)));
        assert_eq!(path[3], &Pose::new(Heading::East, Position::new(7, 5)));
        assert_eq!(log.end(), Some(&Pose::new(Heading::East, Position::new(7, 5))));
    }

    #[test]
    fn instruction_string_reproduces_input() {
        use Instruction::*;
        let log = log_of(Pose::facing(Heading::South), &[Left, Left, Backward, Forward, Right]);
        assert_eq!(log.to_instruction_string(), "LLBFR");
    }

    #[test]
    fn continuity_detects_gaps() {
        let a = step(0, Instruction::Forward, Pose::facing(Heading::North));
        let b = step(1, Instruction::Forward, Pose::facing(Heading::East));
        let log = TravelLog::new().record(a).record(b);

        assert!(!log.is_continuous());
    }

    #[test]
    fn continuity_detects_inconsistent_step() {
        let mut s = step(0, Instruction::Right, Pose::facing(Heading::North));
        s.to = Pose::facing(Heading::West);
        let log = TravelLog::new().record(s);

        assert!(!log.is_continuous());
    }

    #[test]
    fn duration_measures_first_to_last() {
        let first = Step {
            timestamp: Utc::now(),
            ..step(0, Instruction::Left, Pose::facing(Heading::North))
        };
        let second = Step {
            timestamp: first.timestamp + chrono::Duration::milliseconds(25),
            ..step(1, Instruction::Left, first.to)
        };
        let log = TravelLog::new().record(first).record(second);

        assert_eq!(log.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn single_step_has_zero_duration() {
        let log = TravelLog::new().record(step(0, Instruction::Forward, Pose::facing(Heading::West)));
        assert_eq!(log.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn log_serializes_correctly() {
        use Instruction::*;
        let log = log_of(Pose::facing(Heading::North), &[Forward, Right, Backward]);

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: TravelLog = serde_json::from_str(&json).unwrap();

        assert_eq!(log, deserialized);
    }
}
