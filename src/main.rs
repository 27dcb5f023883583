fn main() {
    #[cfg(feature = "web")]
    gigboard_web::web::launch();

    #[cfg(not(feature = "web"))]
    eprintln!("gigboard_web runs in the browser; build for wasm32 with the `web` feature");
}
