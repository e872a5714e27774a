//! Hexagonal life sandbox engine.
//!
//! A toroidal boolean lattice ([`Grid`]) stepped by a fixed six-neighbor
//! rule: a live cell survives with 2 or 3 live neighbors, a dead cell is
//! born with exactly 2. [`Session`] holds the state an interactive front end
//! needs around that: the live grid, the snapshot taken at the last edit,
//! the generation counter and cycle detection.
//!
//! ```
//! use hexsim::{simulator, Grid};
//!
//! let mut grid = Grid::new(8, 8).unwrap();
//! grid.set(3, 3, true);
//! grid.set(4, 3, true);
//!
//! let next = simulator::step(&grid);
//! assert!(next.get(3, 4) && next.get(4, 2));
//! assert_eq!(simulator::step(&next), grid);
//! ```

pub mod config;
pub mod coro;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod session;
pub mod simulator;
pub mod stats;

pub use config::Config;
pub use error::{ConfigError, GridError, SimError};
pub use grid::Grid;
pub use patterns::{Pattern, PATTERNS};
pub use session::{Sandbox, Session, Tick};
pub use simulator::step;
