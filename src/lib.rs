// Library API shared by the CLI binaries and the wasm glue
pub mod dictionary;
pub mod digits;
pub mod errors;
pub mod keypad;
pub mod log;
pub mod segment;
pub mod translator;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
