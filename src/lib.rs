pub mod commands;
pub mod config;
pub mod data;
pub mod feasibility;
pub mod indicators;
pub mod models;
pub mod series;
pub mod strategy;

pub use config::BacktestConfig;
pub use models::{
    EquityPoint, Feasibility, FeasibilityAnalysis, PricePoint, StrategyResult, Trade, TradeAction,
};
pub use strategy::{run_strategy, StrategyKind};
