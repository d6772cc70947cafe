// Syntax tree data structures for the Java minimizer.
// These types represent one parsed Java compilation unit in a form suitable
// for pruning and re-printing. Expression and statement level code is kept
// as normalized source text; only declarations are modelled structurally.

/// Visibility of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Public,
    Protected,
    /// No access keyword outside of an interface or annotation type.
    PackagePrivate,
    Private,
}

impl Access {
    /// Whether a declaration with this access is part of the public API surface.
    pub fn is_exported(self) -> bool {
        matches!(self, Access::Public | Access::Protected)
    }
}

/// The kind of body a declaration lives in. Determines implicit access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    TopLevel,
    Class,
    Interface,
    Enum,
    Record,
    AnnotationType,
}

/// One parsed source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationUnit {
    pub package: Option<String>,
    pub imports: Vec<String>,
    pub module: Option<String>,
    /// Top-level declarations. The front-end only puts type-like members here.
    pub declarations: Vec<Member>,
    /// Comments not attached to any declaration.
    pub comments: Vec<Comment>,
}

impl CompilationUnit {
    /// Number of top-level class, interface, record, annotation type and enum declarations.
    pub fn type_declaration_count(&self) -> usize {
        self.declarations.iter().filter(|m| m.is_type_like()).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
    Block,
    Doc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    pub text: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = if text.starts_with("/**") && text != "/**/" {
            CommentKind::Doc
        } else if text.starts_with("/*") {
            CommentKind::Block
        } else {
            CommentKind::Line
        };
        Self { kind, text }
    }
}

/// An annotation usage such as `@Deprecated(since = "9")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Name as written, possibly qualified (`java.lang.Deprecated`).
    pub name: String,
    pub arguments: Vec<AnnotationArgument>,
}

impl Annotation {
    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// `@X` and `@a.b.X` both match `X`; `@a.b.X` also matches `a.b.X`.
    pub fn matches(&self, name: &str) -> bool {
        super::marker::name_matches(&self.name, name)
    }
}

/// One argument of an annotation. The single-element form (`@X(1)`) has no key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationArgument {
    pub key: Option<String>,
    pub value: String,
}

/// Annotations and keyword modifiers of a declaration or parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub annotations: Vec<Annotation>,
    pub keywords: Vec<String>,
}

impl Modifiers {
    pub fn with_keywords(keywords: &[&str]) -> Self {
        Self {
            annotations: Vec::new(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// Access written on the declaration, ignoring implicit rules.
    pub fn explicit_access(&self) -> Access {
        if self.has_keyword("public") {
            Access::Public
        } else if self.has_keyword("protected") {
            Access::Protected
        } else if self.has_keyword("private") {
            Access::Private
        } else {
            Access::PackagePrivate
        }
    }

    /// Effective access of a member declared directly inside `scope`.
    /// Interface and annotation type members are implicitly public.
    pub fn access_in(&self, scope: Scope) -> Access {
        match (self.explicit_access(), scope) {
            (Access::PackagePrivate, Scope::Interface | Scope::AnnotationType) => Access::Public,
            (access, _) => access,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty() && self.keywords.is_empty()
    }
}

/// A code block. Statements are kept as normalized source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub statements: Vec<String>,
}

impl Block {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub modifiers: Modifiers,
    /// Type and name, e.g. `String... args`.
    pub text: String,
}

/// Method or constructor signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    /// Everything between the modifiers and the name: type parameters and return type.
    pub head: String,
    pub name: String,
    /// `None` for record compact constructors.
    pub parameters: Option<Vec<Parameter>>,
    /// Everything after the parameter list: dimensions and `throws` clause.
    pub tail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
    Record,
    AnnotationType,
}

impl TypeKind {
    pub fn body_scope(self) -> Scope {
        match self {
            TypeKind::Class => Scope::Class,
            TypeKind::Interface => Scope::Interface,
            TypeKind::Record => Scope::Record,
            TypeKind::AnnotationType => Scope::AnnotationType,
        }
    }
}

/// Class, interface, record or annotation type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub kind: TypeKind,
    pub modifiers: Modifiers,
    pub name: String,
    /// Declaration header without modifiers, e.g. `class Foo<T> extends Bar`.
    pub header: String,
    pub members: Vec<Member>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    pub modifiers: Modifiers,
    pub name: String,
    pub header: String,
    pub constants: Vec<EnumConstant>,
    pub members: Vec<Member>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    pub modifiers: Modifiers,
    pub name: String,
    /// Argument list including parentheses, e.g. `("red", 1)`.
    pub arguments: Option<String>,
    /// Constant-specific class body.
    pub body: Option<Vec<Member>>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDecl {
    pub modifiers: Modifiers,
    pub signature: Signature,
    pub body: Block,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub modifiers: Modifiers,
    pub signature: Signature,
    pub body: Option<Block>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableBinding {
    /// Name including any trailing dimensions, e.g. `values[]`.
    pub name: String,
    pub initializer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub modifiers: Modifiers,
    pub ty: String,
    pub variables: Vec<VariableBinding>,
    pub comments: Vec<Comment>,
}

/// `static { ... }` or a bare instance initializer `{ ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializerBlock {
    pub is_static: bool,
    pub body: Block,
    pub comments: Vec<Comment>,
}

/// Element of an annotation type, e.g. `String value() default "";`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationElementDecl {
    pub modifiers: Modifiers,
    pub ty: String,
    pub name: String,
    pub dimensions: Option<String>,
    pub default: Option<String>,
    pub comments: Vec<Comment>,
}

/// A declaration inside a compilation unit or a type body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Type(TypeDecl),
    Enum(EnumDecl),
    Constructor(ConstructorDecl),
    Method(MethodDecl),
    Field(FieldDecl),
    Initializer(InitializerBlock),
    AnnotationElement(AnnotationElementDecl),
}

impl Member {
    /// Class, interface, record, annotation type or enum.
    pub fn is_type_like(&self) -> bool {
        matches!(self, Member::Type(_) | Member::Enum(_))
    }

    /// Declared name, if the member has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Member::Type(t) => Some(&t.name),
            Member::Enum(e) => Some(&e.name),
            Member::Constructor(c) => Some(&c.signature.name),
            Member::Method(m) => Some(&m.signature.name),
            Member::Field(f) => f.variables.first().map(|v| v.name.as_str()),
            Member::Initializer(_) => None,
            Member::AnnotationElement(a) => Some(&a.name),
        }
    }

    pub fn modifiers(&self) -> Option<&Modifiers> {
        match self {
            Member::Type(t) => Some(&t.modifiers),
            Member::Enum(e) => Some(&e.modifiers),
            Member::Constructor(c) => Some(&c.modifiers),
            Member::Method(m) => Some(&m.modifiers),
            Member::Field(f) => Some(&f.modifiers),
            Member::Initializer(_) => None,
            Member::AnnotationElement(a) => Some(&a.modifiers),
        }
    }

    pub fn comments_mut(&mut self) -> &mut Vec<Comment> {
        match self {
            Member::Type(t) => &mut t.comments,
            Member::Enum(e) => &mut e.comments,
            Member::Constructor(c) => &mut c.comments,
            Member::Method(m) => &mut m.comments,
            Member::Field(f) => &mut f.comments,
            Member::Initializer(i) => &mut i.comments,
            Member::AnnotationElement(a) => &mut a.comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_access() {
        assert_eq!(Modifiers::with_keywords(&["public", "static"]).explicit_access(), Access::Public);
        assert_eq!(Modifiers::with_keywords(&["protected"]).explicit_access(), Access::Protected);
        assert_eq!(Modifiers::with_keywords(&["private", "final"]).explicit_access(), Access::Private);
        assert_eq!(Modifiers::with_keywords(&["static"]).explicit_access(), Access::PackagePrivate);
    }

    #[test]
    fn test_interface_members_are_implicitly_public() {
        let none = Modifiers::default();
        assert_eq!(none.access_in(Scope::Interface), Access::Public);
        assert_eq!(none.access_in(Scope::AnnotationType), Access::Public);
        assert_eq!(none.access_in(Scope::Class), Access::PackagePrivate);
        assert_eq!(none.access_in(Scope::TopLevel), Access::PackagePrivate);

        let private = Modifiers::with_keywords(&["private"]);
        assert_eq!(private.access_in(Scope::Interface), Access::Private);
    }

    #[test]
    fn test_annotation_matches_simple_and_qualified() {
        assert!(Annotation::marker("Deprecated").matches("Deprecated"));
        assert!(Annotation::marker("java.lang.Deprecated").matches("Deprecated"));
        assert!(Annotation::marker("java.lang.Deprecated").matches("java.lang.Deprecated"));
        assert!(!Annotation::marker("NotDeprecated").matches("Deprecated"));
        assert!(!Annotation::marker("Deprecated").matches("java.lang.Deprecated"));
    }

    #[test]
    fn test_comment_kind() {
        assert_eq!(Comment::new("// hi").kind, CommentKind::Line);
        assert_eq!(Comment::new("/* hi */").kind, CommentKind::Block);
        assert_eq!(Comment::new("/** hi */").kind, CommentKind::Doc);
        assert_eq!(Comment::new("/**/").kind, CommentKind::Block);
    }

    #[test]
    fn test_exported_access() {
        assert!(Access::Public.is_exported());
        assert!(Access::Protected.is_exported());
        assert!(!Access::PackagePrivate.is_exported());
        assert!(!Access::Private.is_exported());
    }
}
