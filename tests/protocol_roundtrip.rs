mod common;

use common::{board, random_open_position, random_position, seeded};
use tictactoe_ai::{
    Error,
    protocol::{MAX_WIRE_SIZE, MoveRequest, MoveResponse, answer, respond},
    search::Difficulty,
    tictactoe::{Coord, Player},
};

#[test]
fn requests_survive_the_wire() {
    let mut rng = seeded(11);
    let difficulties = [Difficulty::Easy, Difficulty::Hard, Difficulty::Expert];

    for size in 1..=MAX_WIRE_SIZE {
        for difficulty in difficulties {
            let (board, to_move) = random_position(size, &mut rng);
            let request = MoveRequest::new(board, to_move, difficulty);
            let query = request.to_query().unwrap();
            assert_eq!(MoveRequest::parse(&query).unwrap(), request, "{query}");
        }
    }
}

#[test]
fn answers_are_empty_cells() {
    let mut rng = seeded(5);
    for size in 3..=5 {
        for _ in 0..4 {
            let (position, to_move) = random_open_position(size, &mut rng);
            let request = MoveRequest::new(position.clone(), to_move, Difficulty::Easy);
            let response = respond(&request.to_query().unwrap(), true).unwrap();

            let coord = response.coord().unwrap();
            assert!(position.is_empty(coord), "{coord} is taken in\n{position}");
            let scores = response.scores.unwrap();
            assert_eq!(scores.len(), position.empty_cells().len());
        }
    }
}

#[test]
fn response_json_matches_the_client_format() {
    let query = "n=3&currentPlayer=2&board=002+012+020+101+111+120+201+210+220&AI=AI1";
    let response = respond(query, false).unwrap();
    assert_eq!(response.to_json().unwrap(), "{\n  \"move\": \"02\"\n}");

    let parsed = MoveResponse::from_json(r#"{"move":"02"}"#).unwrap();
    assert_eq!(parsed, response);
}

#[test]
fn leading_question_mark_and_extra_parameters() {
    let query = "?n=3&currentPlayer=1&board=001+011+020+102+112+120+200+210+220&AI=AI3&t=17";
    assert_eq!(respond(query, false).unwrap().position, "02");
}

#[test]
fn difficulty_changes_the_answer_on_an_empty_board() {
    let empty = "000+010+020+100+110+120+200+210+220";
    let mv = |ai: &str| {
        respond(&format!("n=3&currentPlayer=1&board={empty}&AI={ai}"), false)
            .unwrap()
            .coord()
            .unwrap()
    };
    assert_eq!(mv("AI1"), Coord::new(1, 1));
    assert_eq!(mv("AI2"), Coord::new(1, 1));
    assert_eq!(mv("AI3"), Coord::new(0, 0));

    let default = respond(&format!("n=3&currentPlayer=1&board={empty}"), false).unwrap();
    assert_eq!(default.coord().unwrap(), Coord::new(0, 0));
}

#[test]
fn full_board_cannot_be_answered() {
    let request = MoveRequest::new(board("XOX/XOO/OXX"), Player::X, Difficulty::Easy);
    assert!(matches!(
        answer(&request, false),
        Err(Error::InvalidConfiguration { .. })
    ));
}

#[test]
fn out_of_range_token_is_rejected() {
    let query = "n=2&currentPlayer=1&board=000+010+100+130";
    assert!(respond(query, false).is_err());
}
