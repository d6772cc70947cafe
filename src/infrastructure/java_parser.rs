//! Java front-end.
//!
//! Parses source text with tree-sitter-java and lowers the concrete syntax
//! tree into the domain `CompilationUnit`. Declarations are modelled
//! structurally; types, expressions and statements are kept as normalized
//! text (comments dropped, whitespace runs between tokens collapsed to one
//! space, literals verbatim).

use tree_sitter::{Node, Parser};

use crate::domain::ast::{
    Annotation, AnnotationArgument, AnnotationElementDecl, Block, Comment, CompilationUnit,
    ConstructorDecl, EnumConstant, EnumDecl, FieldDecl, InitializerBlock, Member, MethodDecl,
    Modifiers, Parameter, Signature, TypeDecl, TypeKind, VariableBinding,
};
use crate::error::{MinimizeError, Result};
use crate::ports::SourceParser;

const COMMENT_KINDS: &[&str] = &["line_comment", "block_comment", "comment"];

/// Nodes whose source text is copied verbatim.
const ATOMIC_KINDS: &[&str] = &["string_literal", "character_literal", "text_block"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Collect comments found between declarations into the tree.
    pub attach_comments: bool,
}

#[derive(Debug, Clone, Default)]
pub struct JavaParser {
    options: ParserOptions,
}

impl JavaParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }
}

impl SourceParser for JavaParser {
    fn parse(&self, source: &str) -> Result<CompilationUnit> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::language())
            .map_err(|e| MinimizeError::Grammar(e.to_string()))?;

        let tree = parser.parse(source, None).ok_or_else(|| MinimizeError::Parse {
            line: 1,
            column: 1,
            message: "parser returned no tree".to_string(),
        })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(syntax_error(root));
        }

        UnitBuilder {
            src: source,
            attach_comments: self.options.attach_comments,
        }
        .build(root)
    }
}

fn children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

fn is_comment(node: Node<'_>) -> bool {
    COMMENT_KINDS.contains(&node.kind())
}

fn is_type_declaration(kind: &str) -> bool {
    matches!(
        kind,
        "class_declaration"
            | "interface_declaration"
            | "enum_declaration"
            | "record_declaration"
            | "annotation_type_declaration"
    )
}

/// Locate the first ERROR or MISSING node and report its position (1-based).
fn syntax_error(root: Node<'_>) -> MinimizeError {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            let message = if node.is_missing() {
                format!("missing `{}`", node.kind())
            } else {
                "unexpected input".to_string()
            };
            return MinimizeError::Parse {
                line: pos.row + 1,
                column: pos.column + 1,
                message,
            };
        }
        let mut nested: Vec<Node<'_>> = children(node).into_iter().filter(|c| c.has_error()).collect();
        nested.reverse();
        stack.extend(nested);
    }
    let pos = root.start_position();
    MinimizeError::Parse {
        line: pos.row + 1,
        column: pos.column + 1,
        message: "syntax error".to_string(),
    }
}

/// Put `pending` in front of the member's own comments and leave `pending` empty.
fn attach(member: &mut Member, pending: &mut Vec<Comment>) {
    let comments = member.comments_mut();
    pending.append(comments);
    std::mem::swap(comments, pending);
}

fn unsupported(node: Node<'_>) -> MinimizeError {
    let pos = node.start_position();
    MinimizeError::Unsupported {
        kind: node.kind().to_string(),
        line: pos.row + 1,
        column: pos.column + 1,
    }
}

/// Joins the leaf tokens of a sequence of nodes.
struct TextBuilder<'s> {
    src: &'s str,
    out: String,
    last_end: Option<usize>,
}

impl<'s> TextBuilder<'s> {
    fn new(src: &'s str) -> Self {
        Self {
            src,
            out: String::new(),
            last_end: None,
        }
    }

    fn push(&mut self, node: Node<'_>) {
        if is_comment(node) {
            return;
        }
        if node.child_count() == 0 || ATOMIC_KINDS.contains(&node.kind()) {
            let text = &self.src[node.start_byte()..node.end_byte()];
            if text.is_empty() {
                return;
            }
            if matches!(self.last_end, Some(end) if node.start_byte() > end) {
                self.out.push(' ');
            }
            self.out.push_str(text);
            self.last_end = Some(node.end_byte());
            return;
        }
        for child in children(node) {
            self.push(child);
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

struct UnitBuilder<'s> {
    src: &'s str,
    attach_comments: bool,
}

impl<'s> UnitBuilder<'s> {
    fn raw(&self, node: Node<'_>) -> &'s str {
        &self.src[node.start_byte()..node.end_byte()]
    }

    fn text(&self, node: Node<'_>) -> String {
        self.text_of(&[node])
    }

    fn text_of(&self, nodes: &[Node<'_>]) -> String {
        let mut builder = TextBuilder::new(self.src);
        for node in nodes {
            builder.push(*node);
        }
        builder.finish()
    }

    fn field_text(&self, node: Node<'_>, field: &str) -> Option<String> {
        node.child_by_field_name(field).map(|n| self.text(n))
    }

    fn required_field<'t>(&self, node: Node<'t>, field: &str) -> Result<Node<'t>> {
        node.child_by_field_name(field).ok_or_else(|| unsupported(node))
    }

    fn collect_comment(&self, node: Node<'_>, pending: &mut Vec<Comment>) {
        if self.attach_comments {
            pending.push(Comment::new(self.raw(node)));
        }
    }

    fn build(&self, root: Node<'_>) -> Result<CompilationUnit> {
        let mut unit = CompilationUnit::default();
        let mut pending = Vec::new();

        for child in children(root) {
            match child.kind() {
                kind if COMMENT_KINDS.contains(&kind) => self.collect_comment(child, &mut pending),
                "package_declaration" => {
                    unit.comments.append(&mut pending);
                    unit.package = Some(self.text(child));
                }
                "import_declaration" => {
                    unit.comments.append(&mut pending);
                    unit.imports.push(self.text(child));
                }
                "module_declaration" => {
                    unit.comments.append(&mut pending);
                    unit.module = Some(self.text(child));
                }
                ";" => {}
                kind if is_type_declaration(kind) => {
                    let mut member = self.type_member(child)?;
                    attach(&mut member, &mut pending);
                    unit.declarations.push(member);
                }
                _ => return Err(unsupported(child)),
            }
        }

        unit.comments.append(&mut pending);
        Ok(unit)
    }

    fn type_member(&self, node: Node<'_>) -> Result<Member> {
        let modifiers = self.modifiers(node);
        let name = self.text(self.required_field(node, "name")?);
        let body = self.required_field(node, "body")?;

        let header_nodes: Vec<Node<'_>> = children(node)
            .into_iter()
            .filter(|c| c.kind() != "modifiers" && c.id() != body.id() && !is_comment(*c))
            .collect();
        let header = self.text_of(&header_nodes);

        let mut comments = Vec::new();
        let member = match node.kind() {
            "enum_declaration" => {
                let mut constants = Vec::new();
                let mut members = Vec::new();
                for child in children(body) {
                    match child.kind() {
                        "enum_constant" => {
                            let mut constant = self.enum_constant(child)?;
                            constant.comments.append(&mut comments);
                            constants.push(constant);
                        }
                        "enum_body_declarations" => self.collect_members(child, &mut members, &mut comments)?,
                        kind if COMMENT_KINDS.contains(&kind) => self.collect_comment(child, &mut comments),
                        "{" | "}" | "," | ";" => {}
                        _ => return Err(unsupported(child)),
                    }
                }
                Member::Enum(EnumDecl {
                    modifiers,
                    name,
                    header,
                    constants,
                    members,
                    comments,
                })
            }
            kind => {
                let kind = match kind {
                    "class_declaration" => TypeKind::Class,
                    "interface_declaration" => TypeKind::Interface,
                    "record_declaration" => TypeKind::Record,
                    "annotation_type_declaration" => TypeKind::AnnotationType,
                    _ => return Err(unsupported(node)),
                };
                let mut members = Vec::new();
                self.collect_members(body, &mut members, &mut comments)?;
                Member::Type(TypeDecl {
                    kind,
                    modifiers,
                    name,
                    header,
                    members,
                    comments,
                })
            }
        };
        Ok(member)
    }

    /// Lower the declarations found directly inside `body`. Comments are
    /// attached to the declaration that follows them; whatever is left in
    /// `pending` at the end belongs to the container.
    fn collect_members(&self, body: Node<'_>, members: &mut Vec<Member>, pending: &mut Vec<Comment>) -> Result<()> {
        for child in children(body) {
            let mut member = match child.kind() {
                kind if COMMENT_KINDS.contains(&kind) => {
                    self.collect_comment(child, pending);
                    continue;
                }
                "{" | "}" | ";" => continue,
                "field_declaration" | "constant_declaration" => self.field(child)?,
                "method_declaration" => self.method(child)?,
                "constructor_declaration" | "compact_constructor_declaration" => self.constructor(child)?,
                "static_initializer" => {
                    let block = children(child)
                        .into_iter()
                        .find(|c| c.kind() == "block")
                        .ok_or_else(|| unsupported(child))?;
                    Member::Initializer(InitializerBlock {
                        is_static: true,
                        body: self.block(block),
                        comments: Vec::new(),
                    })
                }
                "block" => Member::Initializer(InitializerBlock {
                    is_static: false,
                    body: self.block(child),
                    comments: Vec::new(),
                }),
                "annotation_type_element_declaration" => self.annotation_element(child)?,
                kind if is_type_declaration(kind) => self.type_member(child)?,
                _ => return Err(unsupported(child)),
            };
            attach(&mut member, pending);
            members.push(member);
        }
        Ok(())
    }

    fn enum_constant(&self, node: Node<'_>) -> Result<EnumConstant> {
        let body = match node.child_by_field_name("body") {
            Some(body) => {
                let mut members = Vec::new();
                let mut trailing = Vec::new();
                self.collect_members(body, &mut members, &mut trailing)?;
                Some(members)
            }
            None => None,
        };
        Ok(EnumConstant {
            modifiers: self.modifiers(node),
            name: self.text(self.required_field(node, "name")?),
            arguments: self.field_text(node, "arguments"),
            body,
            comments: Vec::new(),
        })
    }

    fn modifiers(&self, node: Node<'_>) -> Modifiers {
        let mut modifiers = Modifiers::default();
        if let Some(list) = children(node).into_iter().find(|c| c.kind() == "modifiers") {
            for child in children(list) {
                match child.kind() {
                    "marker_annotation" | "annotation" => modifiers.annotations.push(self.annotation(child)),
                    kind if COMMENT_KINDS.contains(&kind) => {}
                    _ => modifiers.keywords.push(self.raw(child).to_string()),
                }
            }
        }
        modifiers
    }

    fn annotation(&self, node: Node<'_>) -> Annotation {
        let name = self.field_text(node, "name").unwrap_or_default();
        let mut arguments = Vec::new();
        if let Some(list) = node.child_by_field_name("arguments") {
            let mut cursor = list.walk();
            for arg in list.named_children(&mut cursor) {
                if is_comment(arg) {
                    continue;
                }
                if arg.kind() == "element_value_pair" {
                    arguments.push(AnnotationArgument {
                        key: self.field_text(arg, "key"),
                        value: self.field_text(arg, "value").unwrap_or_default(),
                    });
                } else {
                    arguments.push(AnnotationArgument {
                        key: None,
                        value: self.text(arg),
                    });
                }
            }
        }
        Annotation { name, arguments }
    }

    /// Split a method or constructor into head, name, parameters and tail.
    fn signature(&self, node: Node<'_>) -> Result<Signature> {
        let name = self.required_field(node, "name")?;
        let params = node.child_by_field_name("parameters");
        let body_id = node.child_by_field_name("body").map(|b| b.id());

        let mut head = Vec::new();
        let mut tail = Vec::new();
        let mut seen_name = false;
        for child in children(node) {
            if child.id() == name.id() {
                seen_name = true;
                continue;
            }
            if Some(child.id()) == params.map(|p| p.id())
                || Some(child.id()) == body_id
                || child.kind() == "modifiers"
                || child.kind() == ";"
                || is_comment(child)
            {
                continue;
            }
            if seen_name {
                tail.push(child);
            } else {
                head.push(child);
            }
        }

        Ok(Signature {
            head: self.text_of(&head),
            name: self.text(name),
            parameters: params.map(|p| self.parameters(p)),
            tail: self.text_of(&tail),
        })
    }

    fn parameters(&self, list: Node<'_>) -> Vec<Parameter> {
        let mut cursor = list.walk();
        list.named_children(&mut cursor)
            .filter(|p| !is_comment(*p))
            .map(|p| self.parameter(p))
            .collect()
    }

    fn parameter(&self, node: Node<'_>) -> Parameter {
        let mut modifiers = self.modifiers(node);
        let mut rest = Vec::new();
        for child in children(node) {
            match child.kind() {
                "modifiers" => {}
                "marker_annotation" | "annotation" => modifiers.annotations.push(self.annotation(child)),
                _ => rest.push(child),
            }
        }
        Parameter {
            modifiers,
            text: self.text_of(&rest),
        }
    }

    fn block(&self, node: Node<'_>) -> Block {
        let mut cursor = node.walk();
        let statements = node
            .named_children(&mut cursor)
            .filter(|s| !is_comment(*s))
            .map(|s| self.text(s))
            .collect();
        Block { statements }
    }

    fn method(&self, node: Node<'_>) -> Result<Member> {
        Ok(Member::Method(MethodDecl {
            modifiers: self.modifiers(node),
            signature: self.signature(node)?,
            body: node.child_by_field_name("body").map(|b| self.block(b)),
            comments: Vec::new(),
        }))
    }

    fn constructor(&self, node: Node<'_>) -> Result<Member> {
        let body = self.required_field(node, "body")?;
        Ok(Member::Constructor(ConstructorDecl {
            modifiers: self.modifiers(node),
            signature: self.signature(node)?,
            body: self.block(body),
            comments: Vec::new(),
        }))
    }

    fn field(&self, node: Node<'_>) -> Result<Member> {
        let ty = self.text(self.required_field(node, "type")?);
        let mut variables = Vec::new();
        for declarator in children(node).into_iter().filter(|c| c.kind() == "variable_declarator") {
            let value = declarator.child_by_field_name("value");
            let name_nodes: Vec<Node<'_>> = children(declarator)
                .into_iter()
                .filter(|c| c.kind() != "=" && Some(c.id()) != value.map(|v| v.id()))
                .collect();
            variables.push(VariableBinding {
                name: self.text_of(&name_nodes),
                initializer: value.map(|v| self.text(v)),
            });
        }
        if variables.is_empty() {
            return Err(unsupported(node));
        }
        Ok(Member::Field(FieldDecl {
            modifiers: self.modifiers(node),
            ty,
            variables,
            comments: Vec::new(),
        }))
    }

    fn annotation_element(&self, node: Node<'_>) -> Result<Member> {
        Ok(Member::AnnotationElement(AnnotationElementDecl {
            modifiers: self.modifiers(node),
            ty: self.text(self.required_field(node, "type")?),
            name: self.text(self.required_field(node, "name")?),
            dimensions: self.field_text(node, "dimensions"),
            default: self.field_text(node, "value"),
            comments: Vec::new(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ast::{CommentKind, Scope};

    fn parse(src: &str) -> CompilationUnit {
        JavaParser::default().parse(src).unwrap()
    }

    fn only_type(unit: &CompilationUnit) -> &TypeDecl {
        match &unit.declarations[0] {
            Member::Type(t) => t,
            other => panic!("expected a type, found {:?}", other),
        }
    }

    #[test]
    fn test_package_imports_and_class_header() {
        let unit = parse(
            "package org.example;\n\nimport java.util.List;\nimport static java.lang.Math.max;\n\npublic final class Box<T extends Comparable<T>>\n    extends Base implements   Iterable<T> {\n}\n",
        );
        assert_eq!(unit.package.as_deref(), Some("package org.example;"));
        assert_eq!(unit.imports, vec!["import java.util.List;", "import static java.lang.Math.max;"]);
        let decl = only_type(&unit);
        assert_eq!(decl.kind, TypeKind::Class);
        assert_eq!(decl.name, "Box");
        assert_eq!(decl.modifiers.keywords, vec!["public", "final"]);
        assert_eq!(decl.header, "class Box<T extends Comparable<T>> extends Base implements Iterable<T>");
    }

    #[test]
    fn test_members_are_lowered() {
        let unit = parse(
            r#"public class Foo {
    private int secret = 1;
    public int a, b[] = {1, 2};
    static { init(); }
    { count++; }
    public Foo(int x) throws java.io.IOException { super(x); doWork(); }
    protected abstract <T> java.util.List<T> items(final String... names);
    public int[] raw()[] { return null; }
}"#,
        );
        let decl = only_type(&unit);
        assert_eq!(decl.members.len(), 7);

        match &decl.members[1] {
            Member::Field(f) => {
                assert_eq!(f.ty, "int");
                assert_eq!(f.variables[0].name, "a");
                assert!(f.variables[0].initializer.is_none());
                assert_eq!(f.variables[1].name, "b[]");
                assert_eq!(f.variables[1].initializer.as_deref(), Some("{1, 2}"));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(&decl.members[2], Member::Initializer(i) if i.is_static));
        assert!(matches!(&decl.members[3], Member::Initializer(i) if !i.is_static));
        match &decl.members[4] {
            Member::Constructor(c) => {
                assert_eq!(c.signature.name, "Foo");
                assert_eq!(c.signature.head, "");
                assert_eq!(c.signature.tail, "throws java.io.IOException");
                assert_eq!(c.body.statements, vec!["super(x);", "doWork();"]);
                let params = c.signature.parameters.as_ref().unwrap();
                assert_eq!(params[0].text, "int x");
            }
            other => panic!("unexpected {:?}", other),
        }
        match &decl.members[5] {
            Member::Method(m) => {
                assert_eq!(m.signature.head, "<T> java.util.List<T>");
                assert_eq!(m.signature.name, "items");
                assert!(m.body.is_none());
                let params = m.signature.parameters.as_ref().unwrap();
                assert_eq!(params[0].modifiers.keywords, vec!["final"]);
                assert_eq!(params[0].text, "String... names");
            }
            other => panic!("unexpected {:?}", other),
        }
        match &decl.members[6] {
            Member::Method(m) => {
                assert_eq!(m.signature.head, "int[]");
                assert_eq!(m.signature.tail, "[]");
                assert_eq!(m.body.as_ref().unwrap().statements, vec!["return null;"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_annotations() {
        let unit = parse(
            r#"@Deprecated(since = "9", forRemoval = true)
@SuppressWarnings("unchecked")
@java.lang.FunctionalInterface
public interface Api {
    void call(@Deprecated(since = "1") int x);
}"#,
        );
        let decl = only_type(&unit);
        assert_eq!(decl.kind, TypeKind::Interface);
        let anns = &decl.modifiers.annotations;
        assert_eq!(anns.len(), 3);
        assert_eq!(anns[0].name, "Deprecated");
        assert_eq!(anns[0].arguments.len(), 2);
        assert_eq!(anns[0].arguments[0].key.as_deref(), Some("since"));
        assert_eq!(anns[0].arguments[0].value, "\"9\"");
        assert_eq!(anns[1].arguments[0].key, None);
        assert_eq!(anns[1].arguments[0].value, "\"unchecked\"");
        assert_eq!(anns[2].name, "java.lang.FunctionalInterface");
        assert!(anns[2].arguments.is_empty());

        match &decl.members[0] {
            Member::Method(m) => {
                assert_eq!(m.modifiers.access_in(Scope::Interface), crate::domain::ast::Access::Public);
                let param = &m.signature.parameters.as_ref().unwrap()[0];
                assert_eq!(param.modifiers.annotations[0].name, "Deprecated");
                assert_eq!(param.text, "int x");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_enum_constants_and_body() {
        let unit = parse(
            r#"public enum Op implements Fn {
    ADD("+") {
        public int apply(int a, int b) { return a + b; }
    },
    NOP;
    private final String symbol;
    Op(String s) { symbol = s; }
    Op() { this(""); }
}"#,
        );
        match &unit.declarations[0] {
            Member::Enum(e) => {
                assert_eq!(e.header, "enum Op implements Fn");
                assert_eq!(e.constants.len(), 2);
                assert_eq!(e.constants[0].name, "ADD");
                assert_eq!(e.constants[0].arguments.as_deref(), Some("(\"+\")"));
                assert_eq!(e.constants[0].body.as_ref().unwrap().len(), 1);
                assert!(e.constants[1].arguments.is_none());
                assert!(e.constants[1].body.is_none());
                assert_eq!(e.members.len(), 3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_record_and_annotation_type() {
        let unit = parse(
            r#"public record Point(int x, int y) {
    public Point {
        if (x < 0) throw new IllegalArgumentException();
    }
}
@interface Marker {
    String value() default "";
    int[] ids();
}"#,
        );
        assert_eq!(unit.declarations.len(), 2);
        let record = only_type(&unit);
        assert_eq!(record.kind, TypeKind::Record);
        assert_eq!(record.header, "record Point(int x, int y)");
        match &record.members[0] {
            Member::Constructor(c) => {
                assert!(c.signature.parameters.is_none());
                assert_eq!(c.body.statements.len(), 1);
            }
            other => panic!("unexpected {:?}", other),
        }
        match &unit.declarations[1] {
            Member::Type(t) => {
                assert_eq!(t.kind, TypeKind::AnnotationType);
                assert_eq!(t.header, "@interface Marker");
                match &t.members[0] {
                    Member::AnnotationElement(a) => {
                        assert_eq!(a.ty, "String");
                        assert_eq!(a.name, "value");
                        assert_eq!(a.default.as_deref(), Some("\"\""));
                    }
                    other => panic!("unexpected {:?}", other),
                }
                match &t.members[1] {
                    Member::AnnotationElement(a) => {
                        assert_eq!(a.ty, "int[]");
                        assert!(a.default.is_none());
                    }
                    other => panic!("unexpected {:?}", other),
                }
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_comments_dropped_from_text_and_optionally_attached() {
        let src = "/* license */\npackage a;\n/** Doc. */\npublic class A {\n    // field\n    public int /* inline */ x = 1 // trailing\n    ;\n    // dangling\n}\n";

        let plain = parse(src);
        assert!(plain.comments.is_empty());
        let decl = only_type(&plain);
        assert!(decl.comments.is_empty());
        match &decl.members[0] {
            Member::Field(f) => {
                assert_eq!(f.ty, "int");
                assert_eq!(f.variables[0].initializer.as_deref(), Some("1"));
            }
            other => panic!("unexpected {:?}", other),
        }

        let attached = JavaParser::new(ParserOptions { attach_comments: true }).parse(src).unwrap();
        assert_eq!(attached.comments.len(), 1);
        let decl = only_type(&attached);
        assert_eq!(decl.comments.len(), 2);
        assert_eq!(decl.comments[0].kind, CommentKind::Doc);
        assert_eq!(decl.comments[1].text, "// dangling");
    }

    #[test]
    fn test_string_literals_kept_verbatim() {
        let unit = parse("public class S { public String s = \"a   b\" +\n      \"c\"; }");
        match &only_type(&unit).members[0] {
            Member::Field(f) => assert_eq!(f.variables[0].initializer.as_deref(), Some("\"a   b\" + \"c\"")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_syntax_error_reports_position() {
        let err = JavaParser::default().parse("public class {\n").unwrap_err();
        assert!(matches!(err, MinimizeError::Parse { line: 1, .. }), "got {:?}", err);
        assert!(err.is_syntax());
    }

    #[test]
    fn test_top_level_statement_is_unsupported() {
        let err = JavaParser::default().parse("int x = 1;\n").unwrap_err();
        assert!(err.is_syntax(), "got {:?}", err);
    }

    #[test]
    fn test_package_info_has_no_types() {
        let unit = parse("@Deprecated\npackage org.example;\n");
        assert!(unit.package.is_some());
        assert!(unit.declarations.is_empty());
    }
}
