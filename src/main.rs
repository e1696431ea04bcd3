fn main() {
    migrun::app::cli::run();
}
