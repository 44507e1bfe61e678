use crate::config::BacktestConfig;
use crate::models::{PricePoint, StrategyResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[path = "strategies/hodl.rs"]
pub mod hodl;

#[path = "strategies/dca.rs"]
pub mod dca;

#[path = "strategies/sell_high.rs"]
pub mod sell_high;

#[path = "strategies/buy_dip.rs"]
pub mod buy_dip;

#[path = "strategies/grid.rs"]
pub mod grid;

#[path = "strategies/ma_cross.rs"]
pub mod ma_cross;

/// The fixed set of rule-based strategies the engine can simulate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Hodl,
    Dca,
    SellHigh,
    BuyDip,
    Grid,
    MaCross,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 6] = [
        StrategyKind::Hodl,
        StrategyKind::Dca,
        StrategyKind::SellHigh,
        StrategyKind::BuyDip,
        StrategyKind::Grid,
        StrategyKind::MaCross,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::Hodl => "HODL",
            StrategyKind::Dca => "Dollar-Cost Averaging",
            StrategyKind::SellHigh => "Sell High",
            StrategyKind::BuyDip => "Buy the Dip",
            StrategyKind::Grid => "Grid Trading",
            StrategyKind::MaCross => "MA Cross",
        }
    }
}

/// Runs one strategy over an already filtered (sorted, in-range) series with
/// its default parameters. Returns `None` when the series is empty or, for
/// the MA cross, shorter than its long lookback window.
pub fn run_strategy(
    kind: StrategyKind,
    series: &[PricePoint],
    config: &BacktestConfig,
) -> Option<StrategyResult> {
    match kind {
        StrategyKind::Hodl => hodl::run(series, config),
        StrategyKind::Dca => dca::run(series, config),
        StrategyKind::SellHigh => sell_high::run(series, config, sell_high::Params::default()),
        StrategyKind::BuyDip => buy_dip::run(series, config, buy_dip::Params::default()),
        StrategyKind::Grid => grid::run(series, config, grid::Params::default()),
        StrategyKind::MaCross => ma_cross::run(series, config, ma_cross::Params::default()),
    }
}
