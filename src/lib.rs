//! Normalization of prediction-market subgraph responses.
//!
//! The subgraph encodes every number as a decimal string. The functions in
//! [`normalize`] turn raw user, bet and round records into typed values for
//! the application store.

pub mod config;
pub mod error;
pub mod graphql;
pub mod normalize;
pub mod types;

pub use error::{AppError, Result};
pub use normalize::{
    make_future_round_response, number_or_null, transform_bet_response, transform_bet_responses,
    transform_round_response, transform_total_won_response, transform_user_response,
};
