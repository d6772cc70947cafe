//! Java printer.
//!
//! Serializes a `CompilationUnit` back to Java source. Layout is fixed:
//! package, imports, module, then top-level types separated by blank lines;
//! members one per line without blank lines in between.

use crate::domain::ast::{
    Annotation, AnnotationElementDecl, Block, Comment, CompilationUnit, ConstructorDecl,
    EnumConstant, EnumDecl, FieldDecl, InitializerBlock, Member, MethodDecl, Modifiers, Parameter,
    Signature, TypeDecl,
};
use crate::ports::UnitPrinter;

#[derive(Debug, Clone)]
pub struct JavaPrinter {
    indent_width: usize,
}

impl Default for JavaPrinter {
    fn default() -> Self {
        Self::new(4)
    }
}

impl JavaPrinter {
    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }
}

impl UnitPrinter for JavaPrinter {
    fn print(&self, unit: &CompilationUnit) -> String {
        let mut out = Output {
            buf: String::new(),
            indent: " ".repeat(self.indent_width),
            level: 0,
        };
        out.unit(unit);
        out.buf
    }
}

struct Output {
    buf: String,
    indent: String,
    level: usize,
}

impl Output {
    fn line(&mut self, text: &str) {
        for _ in 0..self.level {
            self.buf.push_str(&self.indent);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        if !self.buf.is_empty() && !self.buf.ends_with("\n\n") {
            self.buf.push('\n');
        }
    }

    fn unit(&mut self, unit: &CompilationUnit) {
        for comment in &unit.comments {
            self.comment(comment);
        }
        if let Some(package) = &unit.package {
            self.line(package);
            self.blank();
        }
        if !unit.imports.is_empty() {
            for import in &unit.imports {
                self.line(import);
            }
            self.blank();
        }
        if let Some(module) = &unit.module {
            self.line(module);
            self.blank();
        }
        for (i, member) in unit.declarations.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            self.member(member);
        }
        if self.buf.ends_with("\n\n") {
            self.buf.pop();
        }
    }

    /// Continuation lines of block comments keep the ` * ` alignment.
    fn comment(&mut self, comment: &Comment) {
        for (i, line) in comment.text.lines().enumerate() {
            let trimmed = line.trim();
            if i > 0 && trimmed.starts_with('*') {
                self.line(&format!(" {}", trimmed));
            } else {
                self.line(trimmed);
            }
        }
    }

    fn annotations(&mut self, modifiers: &Modifiers) {
        for annotation in &modifiers.annotations {
            let text = annotation_text(annotation);
            self.line(&text);
        }
    }

    fn member(&mut self, member: &Member) {
        match member {
            Member::Type(decl) => self.type_decl(decl),
            Member::Enum(decl) => self.enum_decl(decl),
            Member::Constructor(decl) => self.constructor(decl),
            Member::Method(decl) => self.method(decl),
            Member::Field(decl) => self.field(decl),
            Member::Initializer(decl) => self.initializer(decl),
            Member::AnnotationElement(decl) => self.annotation_element(decl),
        }
    }

    fn members(&mut self, members: &[Member]) {
        self.level += 1;
        for member in members {
            self.member(member);
        }
        self.level -= 1;
    }

    fn type_decl(&mut self, decl: &TypeDecl) {
        for comment in &decl.comments {
            self.comment(comment);
        }
        self.annotations(&decl.modifiers);
        self.line(&format!("{} {{", join_words(&[&keywords(&decl.modifiers), &decl.header])));
        self.members(&decl.members);
        self.line("}");
    }

    fn enum_decl(&mut self, decl: &EnumDecl) {
        for comment in &decl.comments {
            self.comment(comment);
        }
        self.annotations(&decl.modifiers);
        self.line(&format!("{} {{", join_words(&[&keywords(&decl.modifiers), &decl.header])));
        self.level += 1;
        let last = decl.constants.len().saturating_sub(1);
        for (i, constant) in decl.constants.iter().enumerate() {
            let terminator = if i < last {
                ","
            } else if decl.members.is_empty() {
                ""
            } else {
                ";"
            };
            self.enum_constant(constant, terminator);
        }
        if decl.constants.is_empty() && !decl.members.is_empty() {
            self.line(";");
        }
        self.level -= 1;
        self.members(&decl.members);
        self.line("}");
    }

    fn enum_constant(&mut self, constant: &EnumConstant, terminator: &str) {
        for comment in &constant.comments {
            self.comment(comment);
        }
        self.annotations(&constant.modifiers);
        let head = format!("{}{}", constant.name, constant.arguments.as_deref().unwrap_or(""));
        match &constant.body {
            Some(body) => {
                self.line(&format!("{} {{", head));
                self.members(body);
                self.line(&format!("}}{}", terminator));
            }
            None => self.line(&format!("{}{}", head, terminator)),
        }
    }

    fn constructor(&mut self, decl: &ConstructorDecl) {
        for comment in &decl.comments {
            self.comment(comment);
        }
        self.annotations(&decl.modifiers);
        let head = signature_text(&decl.modifiers, &decl.signature);
        self.block(&head, &decl.body);
    }

    fn method(&mut self, decl: &MethodDecl) {
        for comment in &decl.comments {
            self.comment(comment);
        }
        self.annotations(&decl.modifiers);
        let head = signature_text(&decl.modifiers, &decl.signature);
        match &decl.body {
            Some(body) => self.block(&head, body),
            None => self.line(&format!("{};", head)),
        }
    }

    fn field(&mut self, decl: &FieldDecl) {
        for comment in &decl.comments {
            self.comment(comment);
        }
        self.annotations(&decl.modifiers);
        let variables: Vec<String> = decl
            .variables
            .iter()
            .map(|v| match &v.initializer {
                Some(init) => format!("{} = {}", v.name, init),
                None => v.name.clone(),
            })
            .collect();
        let text = join_words(&[&keywords(&decl.modifiers), &decl.ty, &variables.join(", ")]);
        self.line(&format!("{};", text));
    }

    fn initializer(&mut self, decl: &InitializerBlock) {
        for comment in &decl.comments {
            self.comment(comment);
        }
        let head = if decl.is_static { "static" } else { "" };
        self.block(head, &decl.body);
    }

    fn annotation_element(&mut self, decl: &AnnotationElementDecl) {
        for comment in &decl.comments {
            self.comment(comment);
        }
        self.annotations(&decl.modifiers);
        let mut text = format!(
            "{}(){}",
            join_words(&[&keywords(&decl.modifiers), &decl.ty, &decl.name]),
            decl.dimensions.as_deref().unwrap_or("")
        );
        if let Some(default) = &decl.default {
            text.push_str(" default ");
            text.push_str(default);
        }
        self.line(&format!("{};", text));
    }

    fn block(&mut self, head: &str, body: &Block) {
        if head.is_empty() {
            self.line("{");
        } else {
            self.line(&format!("{} {{", head));
        }
        self.level += 1;
        for statement in &body.statements {
            self.line(statement);
        }
        self.level -= 1;
        self.line("}");
    }
}

/// Join non-empty words with single spaces.
fn join_words(words: &[&str]) -> String {
    words
        .iter()
        .filter(|w| !w.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn keywords(modifiers: &Modifiers) -> String {
    modifiers.keywords.join(" ")
}

fn annotation_text(annotation: &Annotation) -> String {
    if annotation.arguments.is_empty() {
        return format!("@{}", annotation.name);
    }
    let args: Vec<String> = annotation
        .arguments
        .iter()
        .map(|arg| match &arg.key {
            Some(key) => format!("{} = {}", key, arg.value),
            None => arg.value.clone(),
        })
        .collect();
    format!("@{}({})", annotation.name, args.join(", "))
}

fn parameter_text(parameter: &Parameter) -> String {
    let annotations: Vec<String> = parameter.modifiers.annotations.iter().map(annotation_text).collect();
    join_words(&[&annotations.join(" "), &keywords(&parameter.modifiers), &parameter.text])
}

/// Modifiers, head, name, parameter list and tail of a method or constructor.
fn signature_text(modifiers: &Modifiers, signature: &Signature) -> String {
    let mut name = signature.name.clone();
    if let Some(parameters) = &signature.parameters {
        let params: Vec<String> = parameters.iter().map(parameter_text).collect();
        name.push('(');
        name.push_str(&params.join(", "));
        name.push(')');
    }
    // Dimensions after the parameter list attach without a space.
    let (dims, rest) = split_leading_dims(&signature.tail);
    name.push_str(dims);
    join_words(&[&keywords(modifiers), &signature.head, &name, rest])
}

fn split_leading_dims(tail: &str) -> (&str, &str) {
    let end = tail
        .char_indices()
        .find(|(_, c)| !matches!(c, '[' | ']'))
        .map(|(i, _)| i)
        .unwrap_or(tail.len());
    (&tail[..end], tail[end..].trim_start())
}
