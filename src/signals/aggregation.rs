//! Vote tallying over a signal set

use serde::{Deserialize, Serialize};

use crate::signals::categories::Polarity;
use crate::signals::evaluator::SignalSet;

/// Bullish and bearish vote counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentTally {
    pub bullish: u32,
    pub bearish: u32,
}

impl SentimentTally {
    /// 16, or 17 when the oversold bonus fired.
    pub fn total(&self) -> u32 {
        self.bullish + self.bearish
    }
}

pub struct Aggregator;

impl Aggregator {
    /// Each of the sixteen signals casts exactly one vote: a true signal
    /// votes its polarity, a false one votes the opposite side.
    ///
    /// RSI oversold adds one extra bullish vote with no bearish
    /// counterpart. Whether that bias is intended is unresolved; it is
    /// kept as is rather than capped to a symmetric sixteen.
    pub fn tally(signals: &SignalSet) -> SentimentTally {
        let mut tally = SentimentTally::default();

        if signals.rsi_oversold {
            tally.bullish += 1;
        }

        for (kind, value) in signals.iter() {
            let bullish_vote = match kind.polarity() {
                Polarity::BullishWhenTrue => value,
                Polarity::BearishWhenTrue => !value,
            };
            if bullish_vote {
                tally.bullish += 1;
            } else {
                tally.bearish += 1;
            }
        }

        tally
    }
}
