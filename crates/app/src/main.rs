fn main() {
    dioxus::logger::initialize_default();
    hydroatlas::config::load_shell_config();
    dioxus::launch(hydroatlas::App);
}
