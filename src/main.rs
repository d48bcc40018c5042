use std::process;

fn main() {
    let app = mapdn::cli::App::new();
    if let Err(e) = app.run() {
        app.report(&e);
        process::exit(e.exit_code());
    }
}
