pub mod document;
pub mod numeric;
pub mod transform;

pub use document::normalize_document;
pub use numeric::number_or_null;
pub use transform::{
    make_future_round_response, transform_bet_response, transform_bet_responses,
    transform_round_response, transform_total_won_response, transform_user_response,
};
