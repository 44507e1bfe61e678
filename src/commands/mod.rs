pub mod backtest;
pub mod feasibility;
