fn main() {
    relcheck::app::cli::run();
}
