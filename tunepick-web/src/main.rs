fn main() {
    dioxus::launch(tunepick_web::App);
}
