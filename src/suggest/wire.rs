//! JSON shapes exchanged with the suggestion service.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, GameState, Seat, TsoroConfig};
use crate::error::SuggestionError;
use crate::policy::ServiceLevel;

/// Position sent to the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub board: Vec<u32>,
    pub current_seat: Seat,
    #[serde(rename = "seatABank")]
    pub seat_a_bank: usize,
    #[serde(rename = "seatBBank")]
    pub seat_b_bank: usize,
    pub direction: Direction,
    pub starting_pebbles: u32,
    pub skill_level: ServiceLevel,
}

impl SuggestionRequest {
    #[must_use]
    pub fn new(config: &TsoroConfig, state: &GameState, skill_level: ServiceLevel) -> Self {
        Self {
            board: state.board().as_slice().to_vec(),
            current_seat: state.current_seat(),
            seat_a_bank: config.bank(Seat::A),
            seat_b_bank: config.bank(Seat::B),
            direction: config.direction,
            starting_pebbles: config.starting_pebbles,
            skill_level,
        }
    }
}

/// Service answer: either `{"move": n}` or `{"error": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuggestionResponse {
    Move {
        #[serde(rename = "move")]
        hole: i64,
    },
    Error {
        error: String,
    },
}

impl SuggestionResponse {
    /// Parse a response body.
    pub fn from_json(body: &str) -> Result<Self, SuggestionError> {
        Ok(serde_json::from_str(body)?)
    }

    /// The suggested hole, or the error the service reported.
    ///
    /// Only checks that the number can be a hole index; legality is the
    /// engine's call.
    pub fn into_hole(self) -> Result<usize, SuggestionError> {
        match self {
            SuggestionResponse::Move { hole } => usize::try_from(hole)
                .map_err(|_| SuggestionError::Malformed(format!("negative hole {hole}"))),
            SuggestionResponse::Error { error } => Err(SuggestionError::Service(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Tsoro;

    #[test]
    fn test_request_json_shape() {
        let tsoro = Tsoro::new(TsoroConfig::default()).unwrap();
        let state = tsoro.new_game();
        let request = SuggestionRequest::new(tsoro.config(), &state, ServiceLevel::Hard);

        let json: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(json["board"].as_array().unwrap().len(), 16);
        assert_eq!(json["currentSeat"], "B");
        assert_eq!(json["seatABank"], 7);
        assert_eq!(json["seatBBank"], 15);
        assert_eq!(json["direction"], "forward");
        assert_eq!(json["startingPebbles"], 3);
        assert_eq!(json["skillLevel"], "hard");
    }

    #[test]
    fn test_response_move() {
        let response = SuggestionResponse::from_json(r#"{"move": 12}"#).unwrap();
        assert_eq!(response.into_hole(), Ok(12));
    }

    #[test]
    fn test_response_error() {
        let response =
            SuggestionResponse::from_json(r#"{"error": "No valid moves available"}"#).unwrap();
        assert_eq!(
            response.into_hole(),
            Err(SuggestionError::Service("No valid moves available".to_string()))
        );
    }

    #[test]
    fn test_response_negative_hole() {
        let response = SuggestionResponse::from_json(r#"{"move": -1}"#).unwrap();
        assert!(matches!(response.into_hole(), Err(SuggestionError::Malformed(_))));
    }

    #[test]
    fn test_response_garbage() {
        assert!(matches!(
            SuggestionResponse::from_json("hole 3 looks good"),
            Err(SuggestionError::Malformed(_))
        ));
        assert!(matches!(
            SuggestionResponse::from_json(r#"{"move": "three"}"#),
            Err(SuggestionError::Malformed(_))
        ));
    }
}
