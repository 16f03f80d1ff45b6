use kanban_board::app::App;
use kanban_board::logging::init_logging;
use kanban_board::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = BoardConfig::from_document();
    init_logging(config.log_level);
    log::info!("mounting kanban board (activation distance {}px)", config.activation_distance);

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
