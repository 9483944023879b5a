//! Row parsing and command generation engine.
//!
//! This module is the entry point for the pipeline that turns raw passenger
//! rows into the two rendered blocks. It is split into focused submodules
//! under `src/engine/`.
//!
//! ## How the parts work together
//!
//! ```text
//! date rules (all) ─┐
//!                   │  Recognizer::new              (recognizer.rs)
//!                   └──────────┬──────────
//!                              │
//! fragment ── TriggerInfo::scan┼─ skip rules whose buckets are absent
//!             (trigger.rs)     │
//!                              v
//! row ── split_email ── locate_date ── segment_name ── classify
//!        (segment.rs)   (locate.rs)    (segment.rs)    (classify.rs)
//!                              │
//!                              v
//!                    assign (sequence.rs)
//!                      - dense seats for non-infants
//!                      - one guardian per infant
//!                              │
//!                              v
//!                    names_block / directive_block (render.rs)
//! ```
//!
//! `Pipeline` (pipeline.rs) drives the whole run and is the only stage that
//! knows about per-row outcomes. Every stage is pure; a run owns all of its
//! intermediate state and nothing survives between runs.
//!
//! ## Debugging
//!
//! Rule hits are emitted as `tracing` events at `trace` level and dropped rows
//! at `debug` level.

#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/locate.rs"]
mod locate;
#[path = "engine/pipeline.rs"]
mod pipeline;
#[path = "engine/recognizer.rs"]
mod recognizer;
#[path = "engine/render.rs"]
mod render;
#[path = "engine/segment.rs"]
mod segment;
#[path = "engine/sequence.rs"]
mod sequence;
#[path = "engine/trigger.rs"]
mod trigger;

pub use classify::age_on;
#[allow(unused_imports)]
pub use locate::{Located, locate_date};
#[allow(unused_imports)]
pub use pipeline::{Pipeline, RunResult};
pub use recognizer::Recognizer;
#[allow(unused_imports)]
pub use render::{TERMINATOR, directive_block, names_block};
#[allow(unused_imports)]
pub use sequence::FALLBACK_GUARDIAN;
#[allow(unused_imports)]
pub use trigger::{BucketMask, TriggerInfo};
