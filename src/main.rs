fn main() {
    omnipkg::run_cli();
}
