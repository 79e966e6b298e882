use system_version::app;

fn main() {
    std::process::exit(app::startup::startup());
}
