// # Factory: Indicator Light Solver
//
// Each factory machine has a row of indicator lights and a set of buttons,
// every button toggling a fixed subset of the lights. This crate finds the
// fewest presses that switch every light off, per machine and summed over a
// puzzle file.

/// Light configurations and button wiring as fixed-width bit-vectors.
pub mod lights;

/// Machine descriptions and the puzzle file format.
pub mod machine;

/// Breadth-first search for the fewest presses between configurations.
pub mod search;

/// Solving a whole puzzle file and printing the results.
pub mod report;

/// Tools for generating puzzle files.
pub mod puzzlegen {
    /// A module for generating random solvable machines.
    pub mod random;
}
