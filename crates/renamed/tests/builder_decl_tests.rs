use renamed::ast::*;
use renamed::sexp::Parser;
use renamed::{DeclBuilder, ParseError};

fn build(input: &str) -> AttributedDecl {
    let sexp = Parser::parse_str(input).unwrap();
    DeclBuilder::new().build_attributed(&sexp).unwrap()
}

fn build_err(input: &str) -> ParseError {
    let sexp = Parser::parse_str(input).unwrap();
    DeclBuilder::new().build_attributed(&sexp).unwrap_err()
}

// ===== Types =====

#[test]
fn test_build_struct_with_modifiers() {
    let attributed = build(r#"(Renamed :from "OldStruct" :decl (Struct :name "NewStruct" :modifiers (public final)))"#);

    assert_eq!(attributed.arguments, vec![MacroArgument::from_name("OldStruct")]);
    assert_eq!(
        attributed.decl,
        Declaration::Type(
            TypeDecl::new(TypeKind::Struct, "NewStruct").with_modifiers(modifiers(["public", "final"]))
        )
    );
}

#[test]
fn test_build_class_enum_and_typealias() {
    let class = build(r#"(Renamed :from "A" :decl (Class :name "B"))"#);
    assert!(matches!(class.decl, Declaration::Type(TypeDecl { kind: TypeKind::Class, .. })));

    let enumeration = build(r#"(Renamed :from "A" :decl (Enum :name B))"#);
    assert!(matches!(enumeration.decl, Declaration::Type(TypeDecl { kind: TypeKind::Enum, .. })));

    let alias = build(r#"(Renamed :from "A" :decl (Typealias :name "B" :modifiers ("private")))"#);
    assert_eq!(
        alias.decl,
        Declaration::TypeAlias(TypeAliasDecl::new("B").with_modifiers(modifiers(["private"])))
    );
}

#[test]
fn test_unknown_node_becomes_other() {
    let attributed = build(r#"(Renamed :from "A" :decl (Extension :name "B"))"#);
    assert_eq!(attributed.decl, Declaration::Other("extension".to_string()));
}

// ===== Variables =====

#[test]
fn test_build_stored_let() {
    let attributed = build(r#"(Renamed :from "old" :decl (Variable :binding let :name "x" :type "String"))"#);
    assert_eq!(
        attributed.decl,
        Declaration::Variable(VariableDecl::new(Binding::Let, "x").with_type("String"))
    );
}

#[test]
fn test_build_accessor_shapes() {
    let naked = build(r#"(Renamed :from "o" :decl (Variable :binding var :name "x" :type "Int" :accessors naked))"#);
    let explicit = build(r#"(Renamed :from "o" :decl (Variable :binding var :name "x" :type "Int" :accessors (get set _modify)))"#);
    let unsupported = build(r#"(Renamed :from "o" :decl (Variable :binding var :name "x" :type "Int" :accessors "effectful getter"))"#);

    let shape = |decl: &Declaration| match decl {
        Declaration::Variable(v) => v.accessors.clone(),
        other => panic!("Expected Variable, got {:?}", other),
    };

    assert_eq!(shape(&naked.decl), AccessorShape::NakedGetter);
    assert_eq!(
        shape(&explicit.decl),
        AccessorShape::Explicit(vec![AccessorKind::Get, AccessorKind::Set, AccessorKind::Modify])
    );
    assert_eq!(shape(&unsupported.decl), AccessorShape::Unsupported("effectful getter".to_string()));
}

#[test]
fn test_build_pattern_and_other_binding() {
    let attributed = build(r#"(Renamed :from "o" :decl (Variable :binding "async let" :pattern "(a, b)"))"#);
    match attributed.decl {
        Declaration::Variable(v) => {
            assert_eq!(v.binding, Binding::Other("async let".to_string()));
            assert_eq!(v.pattern, Pattern::Other("(a, b)".to_string()));
            assert_eq!(v.explicit_type, None);
        }
        other => panic!("Expected Variable, got {:?}", other),
    }
}

#[test]
fn test_variable_without_name_or_pattern() {
    let err = build_err(r#"(Renamed :from "o" :decl (Variable :binding var :type "Int"))"#);
    assert!(matches!(err, ParseError::MissingField { ref field, .. } if field == "name"));
}

// ===== Functions =====

#[test]
fn test_build_function() {
    let attributed = build(
        r#"(Renamed :from "oldFn(_:label:)"
             :decl (Function :name "newFn"
                             :params ((Param :label "_" :name "x" :type "Int")
                                      (Param :label label :name "y" :type "String"))
                             :returns "Bool"))"#,
    );

    assert_eq!(
        attributed.decl,
        Declaration::Function(
            FunctionDecl::new("newFn")
                .with_params(vec![
                    Param::unlabeled("x", "Int"),
                    Param::labeled("label", "String").with_name("y"),
                ])
                .with_return_type("Bool")
        )
    );
}

#[test]
fn test_function_without_params_or_return() {
    let attributed = build(r#"(Renamed :from "a" :decl (Function :name "b" :returns nil))"#);
    assert_eq!(attributed.decl, Declaration::Function(FunctionDecl::new("b")));
}

#[test]
fn test_param_without_label_uses_its_name() {
    let attributed = build(
        r#"(Renamed :from "oldFn(value:)"
             :decl (Function :name "newFn" :params ((Param :name "amount" :type "Int"))))"#,
    );

    let Declaration::Function(function) = &attributed.decl else {
        panic!("expected a function, got {:?}", attributed.decl);
    };
    assert_eq!(function.params, vec![Param::labeled("amount", "Int").with_name("amount")]);

    let shim = renamed::expand(&attributed).unwrap();
    assert_eq!(shim.renamed_to(), Some("newFn(amount:)"));
    assert!(shim.to_string().contains("newFn(amount: arg0)"));
}

#[test]
fn test_param_with_wildcard_label_stays_unlabeled() {
    let attributed = build(
        r#"(Renamed :from "a(_:)"
             :decl (Function :name "b" :params ((Param :label "_" :name "x" :type "Int"))))"#,
    );
    let Declaration::Function(function) = &attributed.decl else {
        panic!("expected a function, got {:?}", attributed.decl);
    };
    assert_eq!(function.params[0].label, None);
    assert_eq!(function.params[0].name.as_deref(), Some("x"));
}

#[test]
fn test_param_requires_type() {
    let err = build_err(r#"(Renamed :from "a" :decl (Function :name "b" :params ((Param :label "x"))))"#);
    assert!(matches!(err, ParseError::MissingField { ref field, .. } if field == "type"));
}

// ===== Attribute argument =====

#[test]
fn test_missing_from_yields_no_arguments() {
    let attributed = build(r#"(Renamed :decl (Struct :name "B"))"#);
    assert!(attributed.arguments.is_empty());
}

#[test]
fn test_segments() {
    let attributed = build(r#"(Renamed :from (Segments "old" (Interpolation suffix)) :decl (Struct :name "B"))"#);
    assert_eq!(
        attributed.arguments[0].expr,
        ArgExpr::StringLiteral(vec![
            StringSegment::Text("old".to_string()),
            StringSegment::Interpolation("suffix".to_string()),
        ])
    );
}

#[test]
fn test_non_string_argument() {
    let attributed = build(r#"(Renamed :from someConstant :decl (Struct :name "B"))"#);
    assert!(matches!(attributed.arguments[0].expr, ArgExpr::Other(_)));
}

// ===== Shape errors =====

#[test]
fn test_wrong_head() {
    let err = build_err(r#"(Deprecated :decl (Struct :name "B"))"#);
    assert!(matches!(err, ParseError::Expected { ref found, .. } if found == "Deprecated"));
}

#[test]
fn test_missing_decl() {
    let err = build_err(r#"(Renamed :from "A")"#);
    assert!(matches!(err, ParseError::MissingField { ref field, .. } if field == "decl"));
}

#[test]
fn test_dangling_keyword() {
    let err = build_err(r#"(Renamed :from)"#);
    assert!(matches!(err, ParseError::Expected { .. }));
}

#[test]
fn test_build_all() {
    let forms = Parser::parse_all_str(
        r#"(Renamed :from "A" :decl (Struct :name "B"))
           (Renamed :from "c" :decl (Function :name "d"))"#,
    )
    .unwrap();
    let decls = DeclBuilder::new().build_all(&forms).unwrap();
    assert_eq!(decls.len(), 2);
}
