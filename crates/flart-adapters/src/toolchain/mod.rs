//! Flutter/Dart toolchain adapters.

mod flutter;
mod recording;

pub use flutter::{FlutterToolchain, build_runner_args, pub_add_args};
pub use recording::RecordingToolchain;
