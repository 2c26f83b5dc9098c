//! This module contains building blocks of the greedy construction heuristic.
//!
//! # Components
//!
//! - `ranking`: per client preference order of facilities
//! - `effectiveness`: per facility memory of the best candidate group
//! - `greedy`: the round loop which opens facilities and assigns clients
//! - `aggregation`: total cost of an assignment

pub mod aggregation;
pub mod effectiveness;
pub mod greedy;
pub mod ranking;
