//! Template selection.
//!
//! Templates are a closed set of [`TemplateVariant`]s, each a static Dart
//! source with `{{PLACEHOLDER}}` variables. [`TemplateSelector::select`] maps
//! an entity kind, a name and a [`GenerationConfig`] to a [`GenerationPlan`]:
//!
//! ```text
//! Model  ─┬─ lib/models/<f>.dart            (PlainModel | GeneratedModel)
//!         └─ test/models/<f>_test.dart      (PlainModelTest | GeneratedModelTest)
//!
//! Screen ─┬─ lib/screens/<f>/<dir>/...      state container files first
//!         └─ lib/screens/<f>/<f>_screen.dart (imports computed from the above)
//! ```
//!
//! Selection is pure: same inputs, same plan, byte for byte.

mod model;
mod render;
mod screen;

use std::borrow::Cow;

use tracing::debug;

pub use render::{RenderContext, unresolved_placeholders};

use crate::domain::{
    dependencies::required_dependencies,
    entities::{BarrelTarget, GenerationPlan, RelativePath},
    error::DomainError,
    naming::EntityName,
    value_objects::{EntityKind, GenerationConfig, SerializationStyle, StateManagement},
};

/// Package name used for test imports when `pubspec.yaml` has none.
pub const DEFAULT_PACKAGE_NAME: &str = "flutter_app";

pub const MODELS_DIR: &str = "lib/models";
pub const MODEL_TESTS_DIR: &str = "test/models";
pub const SCREENS_DIR: &str = "lib/screens";

// ── TemplateVariant ──────────────────────────────────────────────────────────

/// Every template flart knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateVariant {
    PlainModel,
    GeneratedModel,
    PlainModelTest,
    GeneratedModelTest,
    BlocView,
    CubitView,
    BlocEvent,
    Bloc,
    Cubit,
    PlainState,
    GeneratedState,
}

impl TemplateVariant {
    /// Unrendered Dart source.
    pub fn source(self) -> Cow<'static, str> {
        match self {
            Self::PlainModel => Cow::Borrowed(model::PLAIN_MODEL),
            Self::GeneratedModel => Cow::Borrowed(model::GENERATED_MODEL),
            Self::PlainModelTest => Cow::Owned(model::plain_test()),
            Self::GeneratedModelTest => Cow::Owned(model::generated_test()),
            Self::BlocView => Cow::Borrowed(screen::BLOC_VIEW),
            Self::CubitView => Cow::Borrowed(screen::CUBIT_VIEW),
            Self::BlocEvent => Cow::Borrowed(screen::EVENT),
            Self::Bloc => Cow::Borrowed(screen::BLOC),
            Self::Cubit => Cow::Borrowed(screen::CUBIT),
            Self::PlainState => Cow::Borrowed(screen::PLAIN_STATE),
            Self::GeneratedState => Cow::Borrowed(screen::GENERATED_STATE),
        }
    }

    /// File name this variant produces for an entity's file form.
    pub fn file_name(self, file_form: &str) -> String {
        let suffix = match self {
            Self::PlainModel | Self::GeneratedModel => "",
            Self::PlainModelTest | Self::GeneratedModelTest => "_test",
            Self::BlocView | Self::CubitView => "_screen",
            Self::BlocEvent => "_event",
            Self::Bloc => "_bloc",
            Self::Cubit => "_cubit",
            Self::PlainState | Self::GeneratedState => "_state",
        };
        format!("{file_form}{suffix}.dart")
    }

    pub fn render(self, ctx: &RenderContext) -> String {
        ctx.render(&self.source())
    }

    fn model(style: SerializationStyle) -> (Self, Self) {
        match style {
            SerializationStyle::Plain => (Self::PlainModel, Self::PlainModelTest),
            SerializationStyle::Generated => (Self::GeneratedModel, Self::GeneratedModelTest),
        }
    }

    /// State container files in dependency order, then the view.
    fn screen(style: SerializationStyle, state: StateManagement) -> (Vec<Self>, Self) {
        let state_file = match style {
            SerializationStyle::Plain => Self::PlainState,
            SerializationStyle::Generated => Self::GeneratedState,
        };
        match state {
            StateManagement::Bloc => (vec![Self::BlocEvent, state_file, Self::Bloc], Self::BlocView),
            StateManagement::Cubit => (vec![state_file, Self::Cubit], Self::CubitView),
        }
    }
}

// ── TemplateSelector ─────────────────────────────────────────────────────────

/// Maps a request to its [`GenerationPlan`].
#[derive(Debug, Clone)]
pub struct TemplateSelector {
    package_name: String,
}

impl Default for TemplateSelector {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE_NAME)
    }
}

impl TemplateSelector {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
        }
    }

    /// Use the manifest's package name, or the default when it has none.
    pub fn for_package(package_name: Option<String>) -> Self {
        package_name
            .filter(|name| !name.trim().is_empty())
            .map_or_else(Self::default, Self::new)
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Build the plan for one request.
    ///
    /// # Errors
    /// `MissingConfiguration` when an option the kind branches on is unset.
    pub fn select(
        &self,
        kind: EntityKind,
        name: &EntityName,
        config: &GenerationConfig,
    ) -> Result<GenerationPlan, DomainError> {
        let ctx = RenderContext::new(name, &self.package_name);

        let plan = match kind {
            EntityKind::Model => self.select_model(name, config, &ctx)?,
            EntityKind::Screen => self.select_screen(name, config, &ctx)?,
        };

        plan.validate()?;
        debug!(
            kind = %kind,
            entity = %name.file_form(),
            files = plan.files().len(),
            "template plan selected"
        );
        Ok(plan)
    }

    fn select_model(
        &self,
        name: &EntityName,
        config: &GenerationConfig,
        ctx: &RenderContext,
    ) -> Result<GenerationPlan, DomainError> {
        let style = config.require_serialization()?;
        let (source, test) = TemplateVariant::model(style);
        let file_form = name.file_form();

        let models_dir = RelativePath::new(MODELS_DIR);
        let tests_dir = RelativePath::new(MODEL_TESTS_DIR);

        let mut plan = GenerationPlan::new(EntityKind::Model, name.clone());
        plan.add_file(
            models_dir.join(source.file_name(file_form))?,
            source.render(ctx),
        );
        plan.add_file(
            tests_dir.join(test.file_name(file_form))?,
            test.render(ctx),
        );
        plan.add_barrel(BarrelTarget::named_after_directory(models_dir, file_form));

        Ok(plan
            .with_dependencies(required_dependencies(EntityKind::Model, style))
            .with_codegen(style.is_generated()))
    }

    fn select_screen(
        &self,
        name: &EntityName,
        config: &GenerationConfig,
        ctx: &RenderContext,
    ) -> Result<GenerationPlan, DomainError> {
        let style = config.require_serialization()?;
        let state = config.require_state_management()?;
        let (state_variants, view) = TemplateVariant::screen(style, state);
        let file_form = name.file_form();

        let screen_dir = RelativePath::new(SCREENS_DIR).join(file_form)?;
        let state_dir = screen_dir.join(state.directory())?;
        let ctx = ctx.clone().with_variable("STATE_DIR", state.directory());

        let mut plan = GenerationPlan::new(EntityKind::Screen, name.clone());
        for variant in state_variants {
            let file_name = variant.file_name(file_form);
            plan.add_file(state_dir.join(&file_name)?, variant.render(&ctx));
            plan.add_barrel(BarrelTarget::named_after_directory(
                state_dir.clone(),
                file_name.trim_end_matches(crate::domain::barrel::DART_EXTENSION),
            ));
        }

        let ctx = ctx.with_variable("STATE_IMPORTS", state_imports(&plan, &state_dir, state));
        let view_name = view.file_name(file_form);
        plan.add_file(screen_dir.join(&view_name)?, view.render(&ctx));
        plan.add_barrel(BarrelTarget::named_after_directory(
            screen_dir,
            view_name.trim_end_matches(crate::domain::barrel::DART_EXTENSION),
        ));

        Ok(plan
            .with_dependencies(required_dependencies(EntityKind::Screen, style))
            .with_codegen(style.is_generated()))
    }
}

/// Relative imports of every planned file inside the state directory, sorted.
fn state_imports(plan: &GenerationPlan, state_dir: &RelativePath, state: StateManagement) -> String {
    let mut imports: Vec<String> = plan
        .files()
        .iter()
        .filter(|f| f.path.as_path().parent() == Some(state_dir.as_path()))
        .filter_map(|f| f.path.file_name())
        .map(|file| format!("import '{}/{}';", state.directory(), file))
        .collect();
    imports.sort();
    imports.join("\n")
}
