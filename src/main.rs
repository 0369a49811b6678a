use human_panic::setup_panic;
use pretty_env_logger::formatted_builder;

mod cli;
mod lib;

fn main() {
    setup_panic!();

    let filters = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    formatted_builder().parse_filters(&filters).init();

    let args = std::env::args().skip(1).collect::<Vec<String>>();
    if cli::run(&mut std::io::stdout(), &args).is_err() {
        std::process::exit(1);
    }
}
