use super::game_view::GameView;
use crate::config::GRID_SIZE_INITIAL;
use crate::model::GameState;
use crate::state::{load_high_score, save_high_score};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(|| GameState::new(GRID_SIZE_INITIAL));
    let high_score = use_state(load_high_score);
    // Best score as it stood when the current run began
    let previous_best = use_state(load_high_score);

    {
        let previous_best = previous_best.clone();
        let best = *high_score;
        use_effect_with(game.score == 0, move |&fresh_run| {
            if fresh_run {
                previous_best.set(best);
            }
            || ()
        });
    }

    // Persist a new best as soon as the score passes it
    {
        let high_score = high_score.clone();
        use_effect_with(game.score, move |&score| {
            if score > *high_score {
                save_high_score(score);
                high_score.set(score);
            }
            || ()
        });
    }

    html! { <GameView game={game.clone()} high_score={*high_score} previous_best={*previous_best} /> }
}
