//! Technical-indicator analysis of price/volume histories.
//!
//! Prices and volumes flow through the indicator library into a
//! [`LatestSnapshot`](analyzer::LatestSnapshot), which is classified into a
//! [`SignalSet`](analyzer::SignalSet) and explained by a fixed narrative.

pub mod analyzer;
pub mod config;
pub mod fetcher;
pub mod indicators;
pub mod model;
pub mod pipeline;
pub mod reporter;
pub mod series;
