//! Dart sources for model scaffolds.

pub(super) const PLAIN_MODEL: &str = r#"import 'package:equatable/equatable.dart';

class {{TYPE_NAME}} extends Equatable {
  final String id;

  const {{TYPE_NAME}}({
    required this.id,
  });

  @override
  List<Object?> get props => [id];
}
"#;

pub(super) const GENERATED_MODEL: &str = r#"import 'package:freezed_annotation/freezed_annotation.dart';

part '{{FILE_NAME}}.freezed.dart';
part '{{FILE_NAME}}.g.dart';

@freezed
abstract class {{TYPE_NAME}} with _${{TYPE_NAME}} {
  const factory {{TYPE_NAME}}({
    required String id,
  }) = _{{TYPE_NAME}};

  factory {{TYPE_NAME}}.fromJson(Map<String, dynamic> json) =>
      _${{TYPE_NAME}}FromJson(json);
}
"#;

const TEST_HEADER: &str = r#"import 'package:flutter_test/flutter_test.dart';
import 'package:{{PACKAGE_NAME}}/models/{{FILE_NAME}}.dart';

void main() {
  group('{{TYPE_NAME}}', () {
    test('should create instance correctly', () {
      final model = {{TYPE_NAME}}(
        id: '1',
      );

      expect(model.id, equals('1'));
    });

    test('should support value comparison', () {
      final model1 = {{TYPE_NAME}}(
        id: '1',
      );
      final model2 = {{TYPE_NAME}}(
        id: '1',
      );

      expect(model1, equals(model2));
      expect(model1.hashCode, equals(model2.hashCode));
    });

    test('should have correct string representation', () {
      final model = {{TYPE_NAME}}(
        id: '1',
      );

      expect(model.toString(), contains('{{TYPE_NAME}}'));
      expect(model.toString(), contains('1'));
    });
"#;

const PLAIN_TEST_CASES: &str = r#"
    test('should have correct props', () {
      final model = {{TYPE_NAME}}(
        id: '1',
      );

      expect(model.props, equals([model.id]));
    });
"#;

const GENERATED_TEST_CASES: &str = r#"
    test('should convert to and from JSON', () {
      final model = {{TYPE_NAME}}(
        id: '1',
      );
      final json = model.toJson();
      final fromJson = {{TYPE_NAME}}.fromJson(json);

      expect(fromJson, equals(model));
      expect(json['id'], equals('1'));
    });

    test('should support copyWith', () {
      final model = {{TYPE_NAME}}(
        id: '1',
      );
      final copy = model.copyWith(id: '2');

      expect(copy.id, equals('2'));
      expect(model.id, equals('1'));
    });
"#;

const TEST_FOOTER: &str = "  });\n}\n";

/// Test file for a plain model: shared cases plus the `props` check.
pub(super) fn plain_test() -> String {
    [TEST_HEADER, PLAIN_TEST_CASES, TEST_FOOTER].concat()
}

/// Test file for a generated model: shared cases plus JSON and `copyWith`.
pub(super) fn generated_test() -> String {
    [TEST_HEADER, GENERATED_TEST_CASES, TEST_FOOTER].concat()
}
