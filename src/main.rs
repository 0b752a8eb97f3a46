/// Binary entrypoint for the `hexpaint` executable.
///
/// Keeps the binary thin: all business logic lives in the `hexpaint` library
/// crate so unit tests can import library functions directly.
fn main() {
    hexpaint::run();
}
