fn main() {
    #[cfg(feature = "logger")]
    env_logger::init();

    js_highlight::cli();
}
