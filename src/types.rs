use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Direction of a bet, or the outcome of a round once it has closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Bull,
    Bear,
    /// Lock and close price were equal; the pool goes to the treasury.
    House,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Position::Bull => "Bull",
            Position::Bear => "Bear",
            Position::House => "House",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Raw subgraph records — every number arrives as a decimal string
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub id: String,
    #[serde(rename = "averageBNB")]
    pub average_bnb: String,
    #[serde(rename = "netBNB")]
    pub net_bnb: String,
    #[serde(rename = "totalBNB")]
    pub total_bnb: String,
    #[serde(rename = "totalBNBBear")]
    pub total_bnb_bear: String,
    #[serde(rename = "totalBNBBull")]
    pub total_bnb_bull: String,
    #[serde(rename = "totalBNBClaimed")]
    pub total_bnb_claimed: String,
    pub block: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    #[serde(rename = "totalBets")]
    pub total_bets: String,
    #[serde(rename = "totalBetsBear")]
    pub total_bets_bear: String,
    #[serde(rename = "totalBetsBull")]
    pub total_bets_bull: String,
    #[serde(rename = "totalBetsClaimed")]
    pub total_bets_claimed: String,
    #[serde(rename = "winRate")]
    pub win_rate: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRound {
    pub id: String,
    pub epoch: String,
    pub failed: bool,
    pub start_block: String,
    pub start_at: String,
    pub lock_at: String,
    pub lock_block: String,
    pub lock_price: String,
    pub end_block: String,
    pub close_price: String,
    pub total_bets: String,
    pub total_amount: String,
    pub bull_bets: String,
    pub bear_bets: String,
    pub bull_amount: String,
    pub bear_amount: String,
    pub position: Option<Position>,
    /// Passed through untouched.
    #[serde(default)]
    pub bets: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBet {
    pub id: String,
    pub hash: String,
    pub amount: String,
    pub position: Position,
    pub claimed: bool,
    pub claimed_hash: Option<String>,
    pub user: RawUser,
    #[serde(default)]
    pub round: Option<RawRound>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TotalWonMarketResponse {
    #[serde(rename = "totalBNB")]
    pub total_bnb: String,
    #[serde(rename = "totalBNBTreasury")]
    pub total_bnb_treasury: String,
}

/// The only round field the total-won query selects.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundAmount {
    pub total_amount: String,
}

// ---------------------------------------------------------------------------
// Normalized records — consumed by the application store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedUser {
    pub id: String,
    #[serde(rename = "averageBNB")]
    pub average_bnb: f64,
    #[serde(rename = "netBNB")]
    pub net_bnb: f64,
    #[serde(rename = "totalBNB")]
    pub total_bnb: f64,
    #[serde(rename = "totalBNBBear")]
    pub total_bnb_bear: f64,
    #[serde(rename = "totalBNBBull")]
    pub total_bnb_bull: f64,
    #[serde(rename = "totalBNBClaimed")]
    pub total_bnb_claimed: f64,
    pub block: u64,
    #[serde(rename = "createdAt")]
    pub created_at: u64,
    #[serde(rename = "updatedAt")]
    pub updated_at: u64,
    #[serde(rename = "totalBets")]
    pub total_bets: u64,
    #[serde(rename = "totalBetsBear")]
    pub total_bets_bear: u64,
    #[serde(rename = "totalBetsBull")]
    pub total_bets_bull: u64,
    #[serde(rename = "totalBetsClaimed")]
    pub total_bets_claimed: u64,
    /// Percentage; the subgraph stores it as a decimal so fractions are kept.
    #[serde(rename = "winRate")]
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRound {
    pub id: String,
    pub epoch: u64,
    pub failed: bool,
    pub start_block: u64,
    pub start_at: u64,
    pub lock_at: u64,
    pub lock_block: u64,
    pub lock_price: f64,
    pub end_block: u64,
    pub close_price: f64,
    pub total_bets: u64,
    pub total_amount: f64,
    pub bull_bets: u64,
    pub bear_bets: u64,
    pub bull_amount: f64,
    pub bear_amount: f64,
    pub position: Option<Position>,
    pub bets: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBet {
    pub id: String,
    pub hash: String,
    pub amount: f64,
    pub position: Position,
    pub claimed: bool,
    pub claimed_hash: Option<String>,
    pub user: NormalizedUser,
    /// Omitted from the serialized object when the query did not select the round.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<NormalizedRound>,
}

// ---------------------------------------------------------------------------
// Future rounds
// ---------------------------------------------------------------------------

/// Zero amount in the shape ethers.js serializes a `BigNumber` to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigNumberPlaceholder {
    pub hex: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl BigNumberPlaceholder {
    pub fn zero() -> Self {
        Self {
            hex: "0x00".to_string(),
            kind: "BigNumber".to_string(),
        }
    }
}

/// A round that has been scheduled but has no on-chain data yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureRoundResponse {
    pub epoch: u64,
    pub start_block: u64,
    pub lock_block: Option<u64>,
    pub end_block: Option<u64>,
    pub lock_price: Option<f64>,
    pub close_price: Option<f64>,
    pub total_amount: BigNumberPlaceholder,
    pub bull_amount: BigNumberPlaceholder,
    pub bear_amount: BigNumberPlaceholder,
    pub reward_base_cal_amount: BigNumberPlaceholder,
    pub reward_amount: BigNumberPlaceholder,
    pub oracle_called: bool,
}
