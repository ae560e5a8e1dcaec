use civibase_web::app::App;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}
