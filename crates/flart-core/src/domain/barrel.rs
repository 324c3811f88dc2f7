//! Barrel index rules.
//!
//! A barrel is a per-directory Dart file whose only job is re-exporting every
//! public unit in that directory:
//!
//! ```dart
//! export 'order.dart';
//! export 'user_profile.dart';
//! ```
//!
//! This module holds the pure half of barrel maintenance: which files are
//! eligible, how export lines look, and what a freshly created index contains.
//! The I/O half lives in `application::services::BarrelSynchronizer`.

/// Extension of every managed source file.
pub const DART_EXTENSION: &str = ".dart";

/// Suffixes of files emitted by `build_runner`. Never exported by hand.
pub const RESERVED_SUFFIXES: [&str; 2] = [".g.dart", ".freezed.dart"];

/// Export statement for a unit given by its file form.
///
/// ```
/// use flart_core::domain::barrel::export_line;
/// assert_eq!(export_line("user_profile"), "export 'user_profile.dart';");
/// ```
pub fn export_line(unit: &str) -> String {
    export_line_for_file(&format!("{unit}{DART_EXTENSION}"))
}

fn export_line_for_file(file_name: &str) -> String {
    format!("export '{file_name}';")
}

/// Whether `file_name` is a derived artifact.
pub fn is_reserved(file_name: &str) -> bool {
    RESERVED_SUFFIXES
        .iter()
        .any(|suffix| file_name.ends_with(suffix))
}

/// Whether a plain file found while scanning a directory belongs in its index.
pub fn is_exportable(file_name: &str, index_file: &str) -> bool {
    file_name.ends_with(DART_EXTENSION) && file_name != index_file && !is_reserved(file_name)
}

/// Whether existing index text already carries the export line.
pub fn contains_export(index_content: &str, line: &str) -> bool {
    index_content.contains(line)
}

/// Sorted, deduplicated export lines for a new index.
///
/// `existing_files` are the plain file names found in the directory; the new
/// unit is added when the scan did not already pick it up.
pub fn seed_exports<'a>(
    existing_files: impl IntoIterator<Item = &'a str>,
    index_file: &str,
    unit: &str,
) -> Vec<String> {
    let mut exports: Vec<String> = existing_files
        .into_iter()
        .filter(|name| is_exportable(name, index_file))
        .map(export_line_for_file)
        .collect();

    let line = export_line(unit);
    if !exports.contains(&line) {
        exports.push(line);
    }

    exports.sort();
    exports.dedup();
    exports
}

/// Render export lines as index file content, newline terminated.
pub fn render_index(exports: &[String]) -> String {
    let mut content = exports.join("\n");
    content.push('\n');
    content
}

/// Text to append to an existing index so it ends with `line`.
///
/// A separating newline is added first when the file does not end with one,
/// so the new export never shares a line with hand-written content.
pub fn append_fragment(index_content: &str, line: &str) -> String {
    if index_content.is_empty() || index_content.ends_with('\n') {
        format!("{line}\n")
    } else {
        format!("\n{line}\n")
    }
}
