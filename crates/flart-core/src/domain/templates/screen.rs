//! Dart sources for screen scaffolds.
//!
//! The presentation files take their relative state imports from
//! `{{STATE_IMPORTS}}`, which selection fills from the files it actually emits.

pub(super) const BLOC_VIEW: &str = r#"import 'package:flutter/material.dart';
import 'package:flutter_bloc/flutter_bloc.dart';

{{STATE_IMPORTS}}

class {{TYPE_NAME}}Screen extends StatelessWidget {
  const {{TYPE_NAME}}Screen({super.key});

  @override
  Widget build(BuildContext context) {
    return BlocProvider(
      create: (context) => {{TYPE_NAME}}Bloc()..add(const {{TYPE_NAME}}InitialEvent()),
      child: const {{TYPE_NAME}}View(),
    );
  }
}

class {{TYPE_NAME}}View extends StatefulWidget {
  const {{TYPE_NAME}}View({super.key});

  @override
  State<{{TYPE_NAME}}View> createState() => _{{TYPE_NAME}}ViewState();
}

class _{{TYPE_NAME}}ViewState extends State<{{TYPE_NAME}}View> {
  @override
  Widget build(BuildContext context) {
    return Scaffold(
      appBar: AppBar(title: const Text('{{TYPE_NAME}}')),
      body: BlocBuilder<{{TYPE_NAME}}Bloc, {{TYPE_NAME}}State>(
        builder: (context, state) {
          return const Center(child: Text('{{TYPE_NAME}} Screen'));
        },
      ),
    );
  }
}
"#;

pub(super) const CUBIT_VIEW: &str = r#"import 'package:flutter/material.dart';
import 'package:flutter_bloc/flutter_bloc.dart';

{{STATE_IMPORTS}}

class {{TYPE_NAME}}Screen extends StatelessWidget {
  const {{TYPE_NAME}}Screen({super.key});

  @override
  Widget build(BuildContext context) {
    return BlocProvider(
      create: (context) => {{TYPE_NAME}}Cubit(),
      child: const {{TYPE_NAME}}View(),
    );
  }
}

class {{TYPE_NAME}}View extends StatefulWidget {
  const {{TYPE_NAME}}View({super.key});

  @override
  State<{{TYPE_NAME}}View> createState() => _{{TYPE_NAME}}ViewState();
}

class _{{TYPE_NAME}}ViewState extends State<{{TYPE_NAME}}View> {
  @override
  Widget build(BuildContext context) {
    return Scaffold(
      appBar: AppBar(title: const Text('{{TYPE_NAME}}')),
      body: BlocBuilder<{{TYPE_NAME}}Cubit, {{TYPE_NAME}}State>(
        builder: (context, state) {
          return const Center(child: Text('{{TYPE_NAME}} Screen'));
        },
      ),
    );
  }
}
"#;

pub(super) const BLOC: &str = r#"import 'package:flutter_bloc/flutter_bloc.dart';

import '{{FILE_NAME}}_event.dart';
import '{{FILE_NAME}}_state.dart';

class {{TYPE_NAME}}Bloc extends Bloc<{{TYPE_NAME}}Event, {{TYPE_NAME}}State> {
  {{TYPE_NAME}}Bloc() : super(const {{TYPE_NAME}}State()) {
    on<{{TYPE_NAME}}InitialEvent>(_onInitial);
  }

  Future<void> _onInitial(
    {{TYPE_NAME}}InitialEvent event,
    Emitter<{{TYPE_NAME}}State> emit,
  ) async {}
}
"#;

pub(super) const EVENT: &str = r#"import 'package:equatable/equatable.dart';

abstract class {{TYPE_NAME}}Event extends Equatable {
  const {{TYPE_NAME}}Event();

  @override
  List<Object> get props => [];
}

class {{TYPE_NAME}}InitialEvent extends {{TYPE_NAME}}Event {
  const {{TYPE_NAME}}InitialEvent();
}

class {{TYPE_NAME}}RefreshEvent extends {{TYPE_NAME}}Event {
  const {{TYPE_NAME}}RefreshEvent();
}
"#;

pub(super) const CUBIT: &str = r#"import 'package:flutter_bloc/flutter_bloc.dart';

import '{{FILE_NAME}}_state.dart';

class {{TYPE_NAME}}Cubit extends Cubit<{{TYPE_NAME}}State> {
  {{TYPE_NAME}}Cubit() : super(const {{TYPE_NAME}}State());

  Future<void> init() async {}
}
"#;

pub(super) const PLAIN_STATE: &str = r#"import 'package:equatable/equatable.dart';

class {{TYPE_NAME}}State extends Equatable {
  final bool isLoading;

  const {{TYPE_NAME}}State({
    this.isLoading = false,
  });

  @override
  List<Object?> get props => [isLoading];

  {{TYPE_NAME}}State copyWith({
    bool? isLoading,
  }) {
    return {{TYPE_NAME}}State(
      isLoading: isLoading ?? this.isLoading,
    );
  }
}
"#;

pub(super) const GENERATED_STATE: &str = r#"import 'package:freezed_annotation/freezed_annotation.dart';

part '{{FILE_NAME}}_state.freezed.dart';

@freezed
abstract class {{TYPE_NAME}}State with _${{TYPE_NAME}}State {
  const factory {{TYPE_NAME}}State({
    @Default(false) bool isLoading,
  }) = _{{TYPE_NAME}}State;
}
"#;
