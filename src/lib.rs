//! Quickdraw ragdoll simulation
//!
//! The death-animation core of an arcade duel game: when a round is lost,
//! a jointed point-mass body is built at the loser's stand position,
//! launched according to where the shot landed, and collapses under
//! gravity and ground contact while bleeding from the wound. The
//! surrounding game (typing match, pacing, rendering) consumes the
//! per-tick snapshot and the settled signal; nothing here draws or
//! networks.

pub mod config;
pub mod sim;
pub mod util;
