/// Public API pruning.
///
/// Reduces a compilation unit to its public surface: non-public declarations
/// are dropped, constructor bodies emptied, method bodies and field
/// initializers removed, initializer blocks and comments erased, and the
/// arguments of the marker annotation cleared.
///
/// Traversal is depth-first and children first. Every child list is rebuilt
/// from survivors instead of being edited while it is walked.

use serde::Serialize;

use super::ast::{
    Annotation, Block, CompilationUnit, EnumConstant, Member, Modifiers, Scope, Signature,
};
use super::marker;

pub const DEFAULT_MARKER: &str = "Deprecated";

/// What one `prune` call removed. Observational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PruneStats {
    pub types_removed: usize,
    pub constructors_removed: usize,
    pub methods_removed: usize,
    pub fields_removed: usize,
    pub initializer_blocks_removed: usize,
    pub bodies_stripped: usize,
    pub field_initializers_cleared: usize,
    pub markers_cleared: usize,
    pub comments_removed: usize,
}

impl PruneStats {
    pub fn merge(&mut self, other: &PruneStats) {
        self.types_removed += other.types_removed;
        self.constructors_removed += other.constructors_removed;
        self.methods_removed += other.methods_removed;
        self.fields_removed += other.fields_removed;
        self.initializer_blocks_removed += other.initializer_blocks_removed;
        self.bodies_stripped += other.bodies_stripped;
        self.field_initializers_cleared += other.field_initializers_cleared;
        self.markers_cleared += other.markers_cleared;
        self.comments_removed += other.comments_removed;
    }

    pub fn declarations_removed(&self) -> usize {
        self.types_removed
            + self.constructors_removed
            + self.methods_removed
            + self.fields_removed
            + self.initializer_blocks_removed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruneOutcome {
    /// No class, interface, record, annotation type or enum is left at the top level.
    pub is_empty: bool,
    pub stats: PruneStats,
}

/// The pruning transform. Holds nothing but the marker annotation name.
#[derive(Debug, Clone)]
pub struct Minimizer {
    marker: String,
}

impl Default for Minimizer {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl Minimizer {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Prune `unit` in place and report whether its top level became empty.
    pub fn prune(&self, unit: &mut CompilationUnit) -> PruneOutcome {
        let mut stats = PruneStats::default();

        stats.comments_removed += unit.comments.len();
        unit.comments.clear();

        let declarations = std::mem::take(&mut unit.declarations);
        unit.declarations = self.prune_members(declarations, Scope::TopLevel, &mut stats);

        PruneOutcome {
            is_empty: unit.type_declaration_count() == 0,
            stats,
        }
    }

    fn prune_members(&self, members: Vec<Member>, scope: Scope, stats: &mut PruneStats) -> Vec<Member> {
        members
            .into_iter()
            .filter_map(|member| self.prune_member(member, scope, stats))
            .collect()
    }

    /// Prune one member declared in `scope`. `None` means the member is dropped.
    fn prune_member(&self, mut member: Member, scope: Scope, stats: &mut PruneStats) -> Option<Member> {
        let comments = member.comments_mut();
        stats.comments_removed += comments.len();
        comments.clear();

        match member {
            Member::Type(mut decl) => {
                let members = std::mem::take(&mut decl.members);
                decl.members = self.prune_members(members, decl.kind.body_scope(), stats);
                self.clear_markers(&mut decl.modifiers, stats);
                self.clear_text_markers(&mut decl.header, stats);
                if !decl.modifiers.access_in(scope).is_exported() {
                    stats.types_removed += 1;
                    return None;
                }
                Some(Member::Type(decl))
            }
            Member::Enum(mut decl) => {
                let constants = std::mem::take(&mut decl.constants);
                decl.constants = constants
                    .into_iter()
                    .map(|constant| self.prune_constant(constant, stats))
                    .collect();
                let members = std::mem::take(&mut decl.members);
                decl.members = self.prune_members(members, Scope::Enum, stats);
                self.clear_markers(&mut decl.modifiers, stats);
                self.clear_text_markers(&mut decl.header, stats);
                if !decl.modifiers.access_in(scope).is_exported() {
                    stats.types_removed += 1;
                    return None;
                }
                Some(Member::Enum(decl))
            }
            Member::Constructor(mut decl) => {
                self.clear_markers(&mut decl.modifiers, stats);
                self.clear_signature_markers(&mut decl.signature, stats);
                if !decl.modifiers.access_in(scope).is_exported() {
                    stats.constructors_removed += 1;
                    return None;
                }
                // A constructor must keep a block, so it is emptied rather than removed.
                if !decl.body.is_empty() {
                    stats.bodies_stripped += 1;
                }
                decl.body = Block::empty();
                Some(Member::Constructor(decl))
            }
            Member::Method(mut decl) => {
                self.clear_markers(&mut decl.modifiers, stats);
                self.clear_signature_markers(&mut decl.signature, stats);
                if !decl.modifiers.access_in(scope).is_exported() {
                    stats.methods_removed += 1;
                    return None;
                }
                if decl.body.take().is_some() {
                    stats.bodies_stripped += 1;
                }
                Some(Member::Method(decl))
            }
            Member::Field(mut decl) => {
                self.clear_markers(&mut decl.modifiers, stats);
                self.clear_text_markers(&mut decl.ty, stats);
                for variable in &mut decl.variables {
                    self.clear_text_markers(&mut variable.name, stats);
                }
                if !decl.modifiers.access_in(scope).is_exported() {
                    stats.fields_removed += 1;
                    return None;
                }
                for variable in &mut decl.variables {
                    if variable.initializer.take().is_some() {
                        stats.field_initializers_cleared += 1;
                    }
                }
                Some(Member::Field(decl))
            }
            Member::Initializer(_) => {
                stats.initializer_blocks_removed += 1;
                None
            }
            Member::AnnotationElement(mut decl) => {
                self.clear_markers(&mut decl.modifiers, stats);
                self.clear_text_markers(&mut decl.ty, stats);
                for text in decl.dimensions.iter_mut().chain(decl.default.iter_mut()) {
                    self.clear_text_markers(text, stats);
                }
                Some(Member::AnnotationElement(decl))
            }
        }
    }

    /// Enum constants are implicitly public; only their bodies are pruned.
    fn prune_constant(&self, mut constant: EnumConstant, stats: &mut PruneStats) -> EnumConstant {
        stats.comments_removed += constant.comments.len();
        constant.comments.clear();
        if let Some(body) = constant.body.take() {
            constant.body = Some(self.prune_members(body, Scope::Class, stats));
        }
        self.clear_markers(&mut constant.modifiers, stats);
        if let Some(arguments) = constant.arguments.as_mut() {
            self.clear_text_markers(arguments, stats);
        }
        constant
    }

    fn clear_signature_markers(&self, signature: &mut Signature, stats: &mut PruneStats) {
        self.clear_text_markers(&mut signature.head, stats);
        self.clear_text_markers(&mut signature.tail, stats);
        for parameter in signature.parameters.iter_mut().flatten() {
            self.clear_markers(&mut parameter.modifiers, stats);
            self.clear_text_markers(&mut parameter.text, stats);
        }
    }

    fn clear_markers(&self, modifiers: &mut Modifiers, stats: &mut PruneStats) {
        for annotation in &mut modifiers.annotations {
            if self.is_marker(annotation) {
                if !annotation.arguments.is_empty() {
                    annotation.arguments.clear();
                    stats.markers_cleared += 1;
                }
            } else {
                for argument in &mut annotation.arguments {
                    self.clear_text_markers(&mut argument.value, stats);
                }
            }
        }
    }

    /// Markers written inside text: type parameters, record components,
    /// type-use positions and nested annotation arguments.
    fn clear_text_markers(&self, text: &mut String, stats: &mut PruneStats) {
        stats.markers_cleared += marker::clear_in_text(text, &self.marker);
    }

    fn is_marker(&self, annotation: &Annotation) -> bool {
        annotation.matches(&self.marker)
    }
}
