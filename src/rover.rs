//! The rover: a mutable shell around the pure pose transition.

use crate::command::{self, InvalidInstructionError, Program};
use crate::config::RoverConfig;
use crate::core::{Heading, Instruction, Pose, Position, Step, TravelLog};
use chrono::Utc;
use log::{debug, trace, warn};

/// A rover on an unbounded grid.
///
/// The rover owns its pose and a travel log. Heading and position can only
/// change through the turn, move and execute operations; there are no
/// setters.
///
/// A rover is plain owned data. Mutation needs `&mut self`, so sharing one
/// across threads means wrapping it in a lock.
///
/// # Example
///
/// ```rust
/// use grid_rover::Rover;
/// use grid_rover::core::{Heading, Position};
///
/// let mut rover = Rover::at(Heading::North, 5, 5);
/// rover.execute("RFF").unwrap();
///
/// assert_eq!(rover.heading(), Heading::East);
/// assert_eq!(rover.position(), Position::new(7, 5));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Rover {
    initial: Pose,
    pose: Pose,
    log: TravelLog,
    track_history: bool,
}

impl Rover {
    /// A rover facing `heading` at the origin.
    pub fn new(heading: Heading) -> Self {
        Self::from_pose(Pose::facing(heading))
    }

    /// A rover facing `heading` at `(x, y)`.
    pub fn at(heading: Heading, x: i64, y: i64) -> Self {
        Self::from_pose(Pose::new(heading, Position::new(x, y)))
    }

    /// A rover starting at `pose`, recording history.
    pub fn from_pose(pose: Pose) -> Self {
        Self::with_options(pose, true)
    }

    /// A rover built from configuration values.
    pub fn from_config(config: &RoverConfig) -> Self {
        Self::with_options(config.pose(), config.track_history)
    }

    pub(crate) fn with_options(pose: Pose, track_history: bool) -> Self {
        debug!("rover created at {pose} (history {})", on_off(track_history));
        Self {
            initial: pose,
            pose,
            log: TravelLog::new(),
            track_history,
        }
    }

    /// Reassemble a rover from already validated parts.
    pub(crate) fn restore(initial: Pose, pose: Pose, log: TravelLog, track_history: bool) -> Self {
        Self {
            initial,
            pose,
            log,
            track_history,
        }
    }

    pub fn heading(&self) -> Heading {
        self.pose.heading
    }

    pub fn position(&self) -> Position {
        self.pose.position
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// The pose the rover was created with.
    pub fn initial_pose(&self) -> Pose {
        self.initial
    }

    /// Every instruction applied so far. Empty when history is disabled.
    pub fn log(&self) -> &TravelLog {
        &self.log
    }

    pub fn tracks_history(&self) -> bool {
        self.track_history
    }

    pub fn turn_right(&mut self) {
        self.apply(Instruction::Right);
    }

    pub fn turn_left(&mut self) {
        self.apply(Instruction::Left);
    }

    pub fn move_forward(&mut self) {
        self.apply(Instruction::Forward);
    }

    pub fn move_backward(&mut self) {
        self.apply(Instruction::Backward);
    }

    /// Apply a single instruction.
    pub fn apply(&mut self, instruction: Instruction) {
        self.step(0, instruction);
    }

    /// Execute an instruction string left to right.
    ///
    /// Stops at the first character outside `F`/`B`/`L`/`R`. Instructions
    /// before that character stay applied; nothing after it runs. Use
    /// [`execute_atomic`](Self::execute_atomic) to leave the rover untouched
    /// on failure instead.
    ///
    /// An empty string is a no-op.
    pub fn execute(&mut self, instructions: &str) -> Result<(), InvalidInstructionError> {
        debug!("executing {instructions:?} from {}", self.pose);
        for decoded in command::decode(instructions) {
            match decoded {
                Ok((index, instruction)) => self.step(index, instruction),
                Err(err) => {
                    warn!("{err}; rover stopped at {}", self.pose);
                    return Err(err);
                }
            }
        }
        debug!(
            "rover now at {} facing {}",
            self.pose.position,
            self.pose.heading.name()
        );
        Ok(())
    }

    /// Validate the whole string first, then execute it.
    ///
    /// On an invalid character nothing is applied and the rover keeps its
    /// pose and log.
    pub fn execute_atomic(&mut self, instructions: &str) -> Result<(), InvalidInstructionError> {
        let program = Program::parse(instructions).map_err(|err| {
            warn!("{err}; nothing applied");
            err
        })?;
        self.run(&program);
        Ok(())
    }

    /// Run an already validated program.
    pub fn run(&mut self, program: &Program) {
        debug!("running {} instruction(s) from {}", program.len(), self.pose);
        for (index, instruction) in program.into_iter().enumerate() {
            self.step(index, instruction);
        }
    }

    fn step(&mut self, index: usize, instruction: Instruction) {
        let from = self.pose;
        let to = from.after(instruction);
        trace!("[{index}] {instruction}: {from} -> {to}");

        if self.track_history {
            self.log.push(Step {
                index,
                instruction,
                from,
                to,
                timestamp: Utc::now(),
            });
        }
        self.pose = to;
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
