//! Status Module
//!
//! Compact error carrier returned by every fallible codec operation.
//!
//! ## Shape
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │ Status                                                        │
//! │   None  ─────────────────────────────────────► OK             │
//! │   Some(Arc<State>)                                            │
//! │     ┌──────────┬───────────────┬──────────────┬─────────────┐ │
//! │     │ code     │ message       │ error code   │ location    │ │
//! │     │ (kind)   │ "msg: msg2"   │ (errno, opt) │ (file:line) │ │
//! │     └──────────┴───────────────┴──────────────┴─────────────┘ │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering
//! `Corruption (codec/decoder.rs:42): bad tag: 0x7f (error 5)`
//!
//! The payload is shared behind an `Arc` and never mutated once a failure
//! leaves its constructor, so a `Status` is cheap to clone and safe to send
//! across threads.

mod carrier;
mod code;

pub use carrier::Status;
pub use code::StatusCode;
