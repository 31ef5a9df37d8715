use puzzle2048_engine::GameStatus;

use crate::session::GameSession;

pub fn render(session: &GameSession) -> String {
    let game_state = session.game_state();
    let status = match game_state.status() {
        GameStatus::Playing => "playing",
        GameStatus::Won => "won",
        GameStatus::Lost => "lost",
    };

    let mut text = String::new();
    text.push_str(&game_state.board().to_string());
    text.push_str(&format!(
        "Score: {}  Moves: {}  Best tile: {}  Status: {}\n",
        game_state.score(),
        game_state.moves_made(),
        game_state.highest_tile(),
        status
    ));
    for event in session.events() {
        text.push_str("  ");
        text.push_str(event);
        text.push('\n');
    }
    text
}
