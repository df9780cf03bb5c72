use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::transform::{
    make_future_round_response, transform_bet_response, transform_bet_responses,
    transform_round_response, transform_total_won_response, transform_user_response,
};
use crate::config::RecordKind;
use crate::error::Result;
use crate::graphql::unwrap_envelope;
use crate::types::{RawBet, RawRound, RawUser, RoundAmount, TotalWonMarketResponse};

#[derive(Debug, Deserialize)]
struct TotalWonInput {
    market: TotalWonMarketResponse,
    #[serde(default)]
    rounds: Vec<RoundAmount>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FutureRoundInput {
    epoch: u64,
    start_block: u64,
}

/// Normalize one JSON document (bare record or GraphQL envelope) as `kind`.
pub fn normalize_document(kind: RecordKind, doc: Value) -> Result<Value> {
    let payload = unwrap_envelope(doc)?;
    debug!(%kind, "[NORMALIZE] transforming document");

    // Total-won and future-round inputs are keyed by root field name.
    let doc = match kind {
        RecordKind::TotalWon | RecordKind::FutureRound => payload.into_root(),
        _ => payload.into_record(),
    };

    let out = match kind {
        RecordKind::User => {
            let raw: RawUser = serde_json::from_value(doc)?;
            serde_json::to_value(transform_user_response(&raw)?)?
        }
        RecordKind::Bet => {
            let raw: RawBet = serde_json::from_value(doc)?;
            serde_json::to_value(transform_bet_response(&raw)?)?
        }
        RecordKind::Bets => {
            let raw: Vec<RawBet> = serde_json::from_value(doc)?;
            serde_json::to_value(transform_bet_responses(&raw)?)?
        }
        RecordKind::Round => {
            let raw: RawRound = serde_json::from_value(doc)?;
            serde_json::to_value(transform_round_response(&raw)?)?
        }
        RecordKind::TotalWon => {
            let input: TotalWonInput = serde_json::from_value(doc)?;
            serde_json::to_value(transform_total_won_response(&input.market, &input.rounds)?)?
        }
        RecordKind::FutureRound => {
            let input: FutureRoundInput = serde_json::from_value(doc)?;
            serde_json::to_value(make_future_round_response(input.epoch, input.start_block))?
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use serde_json::json;

    #[test]
    fn total_won_from_envelope() {
        let doc = json!({
            "data": {
                "market": { "totalBNB": "200", "totalBNBTreasury": "100" },
                "rounds": [{ "totalAmount": "5" }, { "totalAmount": "2" }],
            }
        });
        assert_eq!(normalize_document(RecordKind::TotalWon, doc).unwrap(), json!(93.0));
    }

    #[test]
    fn total_won_from_envelope_without_rounds() {
        let doc = json!({
            "data": { "market": { "totalBNB": "200", "totalBNBTreasury": "100" } }
        });
        assert_eq!(normalize_document(RecordKind::TotalWon, doc).unwrap(), json!(100.0));
    }

    #[test]
    fn total_won_bare_and_wrapped_agree() {
        let market = json!({ "market": { "totalBNB": "200", "totalBNBTreasury": "100" } });
        let bare = normalize_document(RecordKind::TotalWon, market.clone()).unwrap();
        let wrapped = normalize_document(RecordKind::TotalWon, json!({ "data": market })).unwrap();
        assert_eq!(bare, wrapped);
    }

    fn raw_user() -> Value {
        json!({
            "averageBNB": "0.005", "block": "9315031", "createdAt": "1626763291",
            "id": "0x335d6a2c3dd0c04a21f41d30c9ee75e640a87890",
            "netBNB": "-0.0055", "totalBNB": "0.005", "totalBNBBear": "0.005",
            "totalBNBBull": "0", "totalBNBClaimed": "0.0045", "totalBets": "1",
            "totalBetsBear": "0", "totalBetsBull": "1", "totalBetsClaimed": "1",
            "updatedAt": "1626763291", "winRate": "100",
        })
    }

    fn raw_bet(id: &str) -> Value {
        json!({
            "id": id, "hash": "hash", "amount": "500", "position": "Bear",
            "claimed": true, "claimedHash": "claimedHash", "user": raw_user(),
        })
    }

    #[test]
    fn user_document() {
        let out = normalize_document(RecordKind::User, json!({ "data": { "user": raw_user() } }))
            .unwrap();
        assert_eq!(out["id"], json!("0x335d6a2c3dd0c04a21f41d30c9ee75e640a87890"));
        assert_eq!(out["netBNB"], json!(-0.0055));
        assert_eq!(out["block"], json!(9315031));
        assert_eq!(out["winRate"], json!(100.0));
    }

    #[test]
    fn bet_document_without_round_has_no_round_key() {
        let out = normalize_document(RecordKind::Bet, raw_bet("id")).unwrap();
        let fields = out.as_object().unwrap();
        assert!(!fields.contains_key("round"), "round key must be absent: {out}");
        assert_eq!(out["amount"], json!(500.0));
        assert_eq!(out["position"], json!("Bear"));
        assert_eq!(out["user"]["totalBets"], json!(1));
    }

    #[test]
    fn bets_document_from_envelope() {
        let doc = json!({ "data": { "bets": [raw_bet("first"), raw_bet("second")] } });
        let out = normalize_document(RecordKind::Bets, doc).unwrap();
        let bets = out.as_array().unwrap();
        assert_eq!(bets.len(), 2);
        assert_eq!(bets[0]["id"], json!("first"));
        assert_eq!(bets[1]["id"], json!("second"));
        assert!(bets.iter().all(|b| b.get("round").is_none()));
    }

    #[test]
    fn future_round_document() {
        let out = normalize_document(
            RecordKind::FutureRound,
            json!({ "epoch": 200, "startBlock": 500 }),
        )
        .unwrap();
        assert_eq!(out["epoch"], json!(200));
        assert_eq!(out["lockPrice"], Value::Null);
        assert_eq!(out["oracleCalled"], json!(false));
    }

    #[test]
    fn round_document_from_single_field_envelope() {
        let doc = json!({
            "data": {
                "round": {
                    "id": "9", "epoch": "9", "failed": true,
                    "startBlock": "1", "startAt": "2", "lockAt": "3", "lockBlock": "4",
                    "lockPrice": "310.5", "endBlock": "5", "closePrice": "309.25",
                    "totalBets": "0", "totalAmount": "0", "bullBets": "0", "bearBets": "0",
                    "bullAmount": "0", "bearAmount": "0", "position": "Bear",
                }
            }
        });
        let out = normalize_document(RecordKind::Round, doc).unwrap();
        assert_eq!(out["lockPrice"], json!(310.5));
        assert_eq!(out["position"], json!("Bear"));
        assert_eq!(out["bets"], json!([]));
        assert_eq!(out["failed"], json!(true));
    }

    #[test]
    fn wrong_shape_is_a_json_error() {
        let err = normalize_document(RecordKind::User, json!({ "id": "0xabc" })).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }
}
