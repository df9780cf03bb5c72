use tracing::debug;

use super::numeric::{parse_decimal, parse_integer};
use crate::error::Result;
use crate::types::{
    BigNumberPlaceholder, FutureRoundResponse, NormalizedBet, NormalizedRound, NormalizedUser,
    RawBet, RawRound, RawUser, RoundAmount, TotalWonMarketResponse,
};

/// Placeholder for a round whose on-chain data has not been written yet.
pub fn make_future_round_response(epoch: u64, start_block: u64) -> FutureRoundResponse {
    FutureRoundResponse {
        epoch,
        start_block,
        lock_block: None,
        end_block: None,
        lock_price: None,
        close_price: None,
        total_amount: BigNumberPlaceholder::zero(),
        bull_amount: BigNumberPlaceholder::zero(),
        bear_amount: BigNumberPlaceholder::zero(),
        reward_base_cal_amount: BigNumberPlaceholder::zero(),
        reward_amount: BigNumberPlaceholder::zero(),
        oracle_called: false,
    }
}

pub fn transform_user_response(user: &RawUser) -> Result<NormalizedUser> {
    Ok(NormalizedUser {
        id: user.id.clone(),
        average_bnb: parse_decimal("averageBNB", &user.average_bnb)?,
        net_bnb: parse_decimal("netBNB", &user.net_bnb)?,
        total_bnb: parse_decimal("totalBNB", &user.total_bnb)?,
        total_bnb_bear: parse_decimal("totalBNBBear", &user.total_bnb_bear)?,
        total_bnb_bull: parse_decimal("totalBNBBull", &user.total_bnb_bull)?,
        total_bnb_claimed: parse_decimal("totalBNBClaimed", &user.total_bnb_claimed)?,
        block: parse_integer("block", &user.block)?,
        created_at: parse_integer("createdAt", &user.created_at)?,
        updated_at: parse_integer("updatedAt", &user.updated_at)?,
        total_bets: parse_integer("totalBets", &user.total_bets)?,
        total_bets_bear: parse_integer("totalBetsBear", &user.total_bets_bear)?,
        total_bets_bull: parse_integer("totalBetsBull", &user.total_bets_bull)?,
        total_bets_claimed: parse_integer("totalBetsClaimed", &user.total_bets_claimed)?,
        win_rate: parse_decimal("winRate", &user.win_rate)?,
    })
}

pub fn transform_round_response(round: &RawRound) -> Result<NormalizedRound> {
    Ok(NormalizedRound {
        id: round.id.clone(),
        epoch: parse_integer("epoch", &round.epoch)?,
        failed: round.failed,
        start_block: parse_integer("startBlock", &round.start_block)?,
        start_at: parse_integer("startAt", &round.start_at)?,
        lock_at: parse_integer("lockAt", &round.lock_at)?,
        lock_block: parse_integer("lockBlock", &round.lock_block)?,
        lock_price: parse_decimal("lockPrice", &round.lock_price)?,
        end_block: parse_integer("endBlock", &round.end_block)?,
        close_price: parse_decimal("closePrice", &round.close_price)?,
        total_bets: parse_integer("totalBets", &round.total_bets)?,
        total_amount: parse_decimal("totalAmount", &round.total_amount)?,
        bull_bets: parse_integer("bullBets", &round.bull_bets)?,
        bear_bets: parse_integer("bearBets", &round.bear_bets)?,
        bull_amount: parse_decimal("bullAmount", &round.bull_amount)?,
        bear_amount: parse_decimal("bearAmount", &round.bear_amount)?,
        position: round.position,
        bets: round.bets.clone(),
    })
}

pub fn transform_bet_response(bet: &RawBet) -> Result<NormalizedBet> {
    let round = bet.round.as_ref().map(transform_round_response).transpose()?;
    debug!(
        bet = %bet.id,
        position = %bet.position,
        with_round = round.is_some(),
        "[NORMALIZE] bet transformed"
    );

    Ok(NormalizedBet {
        id: bet.id.clone(),
        hash: bet.hash.clone(),
        amount: parse_decimal("amount", &bet.amount)?,
        position: bet.position,
        claimed: bet.claimed,
        claimed_hash: bet.claimed_hash.clone(),
        user: transform_user_response(&bet.user)?,
        round,
    })
}

/// Normalizes a bet-history page, keeping query order.
pub fn transform_bet_responses(bets: &[RawBet]) -> Result<Vec<NormalizedBet>> {
    let out = bets
        .iter()
        .map(transform_bet_response)
        .collect::<Result<Vec<_>>>()?;
    debug!(count = out.len(), "[NORMALIZE] bet page transformed");
    Ok(out)
}

/// Amount won by bettors: the market's gross pool minus the treasury cut
/// minus the total amount of the given rounds. Not clamped at zero.
pub fn transform_total_won_response(
    market: &TotalWonMarketResponse,
    rounds: &[RoundAmount],
) -> Result<f64> {
    let total_bnb = parse_decimal("totalBNB", &market.total_bnb)?;
    let treasury = parse_decimal("totalBNBTreasury", &market.total_bnb_treasury)?;
    let rounds_total = rounds
        .iter()
        .map(|r| parse_decimal("totalAmount", &r.total_amount))
        .sum::<Result<f64>>()?;

    Ok(total_bnb - treasury - rounds_total)
}
