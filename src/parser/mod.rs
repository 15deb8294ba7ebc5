//! Turns a short, human-typed time expression into an [`Instruction`].
//!
//! Accepted shapes, tried in order:
//!
//! | input            | meaning                                   |
//! |------------------|-------------------------------------------|
//! | *(blank)*        | status summary                            |
//! | `s` / `i` / `d`  | status details / indefinite / deactivate  |
//! | `45`             | 45 minutes                                |
//! | `1 30`           | 1 hour 30 minutes                         |
//! | `2h`             | 2 hours                                   |
//! | `7:30`, `7:30pm` | until that clock time                     |
//! | `9:`             | until the next 9 o'clock                  |
//! | `8am`, `11p`     | until that hour                           |
//!
//! Unmarked hours pick whichever of AM/PM comes around first.

mod clock;
mod grammar;
mod instruction;

pub use clock::{convert_to_24h, nearest_future, Meridiem};
pub use grammar::parse;
pub use instruction::{ClockTime, Instruction, MINUTES_PER_DAY};
