//! Packages the generated code imports.

use crate::domain::value_objects::{Dependency, EntityKind, SerializationStyle};

const EQUATABLE: Dependency = Dependency::regular("equatable");
const FLUTTER_BLOC: Dependency = Dependency::regular("flutter_bloc");
const FREEZED_ANNOTATION: Dependency = Dependency::regular("freezed_annotation");
const JSON_ANNOTATION: Dependency = Dependency::regular("json_annotation");

const FREEZED: Dependency = Dependency::dev("freezed");
const BUILD_RUNNER: Dependency = Dependency::dev("build_runner");
const JSON_SERIALIZABLE: Dependency = Dependency::dev("json_serializable");

/// Dev packages needed to run `build_runner` at all.
pub const CODEGEN_TOOLING: [Dependency; 3] = [FREEZED, BUILD_RUNNER, JSON_SERIALIZABLE];

/// Ordered, duplicate-free set of packages for one request.
///
/// Regular dependencies come first, then dev dependencies, each in the order
/// `flutter pub add` should see them.
pub fn required_dependencies(kind: EntityKind, style: SerializationStyle) -> Vec<Dependency> {
    let mut deps = match kind {
        EntityKind::Model => vec![EQUATABLE],
        EntityKind::Screen => vec![FLUTTER_BLOC, EQUATABLE],
    };

    if style.is_generated() {
        deps.push(FREEZED_ANNOTATION);
        if kind == EntityKind::Model {
            deps.push(JSON_ANNOTATION);
        }
        deps.extend(CODEGEN_TOOLING);
    }

    deps
}
