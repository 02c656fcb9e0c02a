mod app;

fn main() {
    yew::start_app::<app::App>();
}
