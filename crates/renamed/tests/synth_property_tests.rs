use renamed::ast::*;
use renamed::{expand, AttributedDecl, ShimError, Visibility};

fn expand_var(decl: VariableDecl, old: &str) -> Result<ShimDecl, ShimError> {
    expand(&AttributedDecl::renamed_from(old, Declaration::Variable(decl)))
}

fn accessors(shim: &ShimDecl) -> &PropertyAccessors {
    match &shim.kind {
        ShimKind::Property { accessors, .. } => accessors,
        other => panic!("Expected Property, got {:?}", other),
    }
}

// ===== Shapes =====

#[test]
fn test_let_is_read_only() {
    let decl = VariableDecl::new(Binding::Let, "immutableProperty").with_type("String");
    let shim = expand_var(decl, "oldImmutableProperty").unwrap();

    assert_eq!(
        accessors(&shim),
        &PropertyAccessors::ReadOnly { getter: Expr::Ident("immutableProperty".to_string()) }
    );
    assert_eq!(
        shim.to_string(),
        "@available(*, deprecated, renamed: \"immutableProperty\")\n\
         var oldImmutableProperty: String {\n    immutableProperty\n}"
    );
}

#[test]
fn test_let_ignores_accessor_shape() {
    let decl = VariableDecl::new(Binding::Let, "value")
        .with_type("Int")
        .with_accessors(AccessorShape::explicit_get_and_set());
    let shim = expand_var(decl, "oldValue").unwrap();
    assert!(!accessors(&shim).is_mutable());
}

#[test]
fn test_stored_var_is_read_write() {
    let decl = VariableDecl::new(Binding::Var, "mutableProperty").with_type("String");
    let shim = expand_var(decl, "oldMutableProperty").unwrap();

    assert_eq!(
        accessors(&shim),
        &PropertyAccessors::ReadWrite {
            getter: Expr::Ident("mutableProperty".to_string()),
            target: "mutableProperty".to_string(),
        }
    );
    assert_eq!(
        shim.to_string(),
        "@available(*, deprecated, renamed: \"mutableProperty\")\n\
         var oldMutableProperty: String {\n    get {\n        mutableProperty\n    }\n    set {\n        mutableProperty = newValue\n    }\n}"
    );
}

#[test]
fn test_naked_getter_is_read_only() {
    let decl = VariableDecl::new(Binding::Var, "computedImmutableProperty")
        .with_type("String")
        .with_accessors(AccessorShape::NakedGetter);
    let shim = expand_var(decl, "oldName").unwrap();

    assert_eq!(shim.name, "oldName");
    assert_eq!(
        shim.to_string(),
        "@available(*, deprecated, renamed: \"computedImmutableProperty\")\n\
         var oldName: String {\n    computedImmutableProperty\n}"
    );
}

#[test]
fn test_get_only_is_read_only() {
    let decl = VariableDecl::new(Binding::Var, "count")
        .with_type("Int")
        .with_accessors(AccessorShape::explicit_get_only());
    assert!(!accessors(&expand_var(decl, "oldCount").unwrap()).is_mutable());
}

#[test]
fn test_get_set_is_read_write() {
    let decl = VariableDecl::new(Binding::Var, "computedMutableProperty")
        .with_type("String")
        .with_accessors(AccessorShape::explicit_get_and_set());
    let shim = expand_var(decl, "oldComputedMutableProperty").unwrap();
    assert!(accessors(&shim).is_mutable());
    assert_eq!(shim.renamed_to(), Some("computedMutableProperty"));
}

#[test]
fn test_visibility_is_copied() {
    let decl = VariableDecl::new(Binding::Var, "x")
        .with_type("Int")
        .with_modifiers(modifiers(["static", "internal"]));
    let shim = expand_var(decl, "oldX").unwrap();
    assert_eq!(shim.visibility, Some(Visibility::Internal));
    assert!(shim.to_string().contains("\ninternal var oldX: Int {"));
}

// ===== Failures =====

#[test]
fn test_inferred_type_is_rejected() {
    let decl = VariableDecl::new(Binding::Var, "test");
    let err = expand_var(decl, "oldTest").unwrap_err();
    assert_eq!(err, ShimError::MissingExplicitType { name: "test".to_string() });
    assert_eq!(err.id(), "missing-variable-type");
}

#[test]
fn test_non_simple_types_are_rejected() {
    for ty in ["[Int]", "String?", "Set<Int>", "Foundation.Date"] {
        let decl = VariableDecl::new(Binding::Let, "x").with_type(ty);
        assert_eq!(expand_var(decl, "y").unwrap_err().id(), "missing-variable-type", "{}", ty);
    }
}

#[test]
fn test_tuple_pattern_is_rejected() {
    let decl = VariableDecl {
        pattern: Pattern::Other("(a, b)".to_string()),
        binding: Binding::Let,
        explicit_type: Some("Int".to_string()),
        accessors: AccessorShape::NoAccessorBlock,
        modifiers: Vec::new(),
    };
    assert_eq!(expand_var(decl, "old").unwrap_err().id(), "missing-variable-type");
}

#[test]
fn test_block_without_getter() {
    let decl = VariableDecl::new(Binding::Var, "x")
        .with_type("Int")
        .with_accessors(AccessorShape::Explicit(vec![AccessorKind::WillSet, AccessorKind::DidSet]));
    assert_eq!(expand_var(decl, "old").unwrap_err(), ShimError::MissingGetAccessor);
}

#[test]
fn test_modify_accessor_is_unsupported() {
    let decl = VariableDecl::new(Binding::Var, "x")
        .with_type("Int")
        .with_accessors(AccessorShape::Explicit(vec![AccessorKind::Get, AccessorKind::Modify]));
    let err = expand_var(decl, "old").unwrap_err();
    assert_eq!(err.id(), "unsupported-block");
    assert!(err.to_string().contains("_modify"));
}

#[test]
fn test_unclassified_accessor_form() {
    let decl = VariableDecl::new(Binding::Var, "x")
        .with_type("Int")
        .with_accessors(AccessorShape::Unsupported("macro expansion".to_string()));
    assert_eq!(expand_var(decl, "old").unwrap_err().id(), "unsupported-block");
}

#[test]
fn test_unknown_binding_keyword() {
    let decl = VariableDecl::new(Binding::Other("inout".to_string()), "x").with_type("Int");
    let err = expand_var(decl, "old").unwrap_err();
    assert_eq!(err.id(), "unsupported-variable");
    assert!(err.to_string().ends_with("This is a inout"));
}

#[test]
fn test_signature_on_property_is_rejected() {
    let decl = VariableDecl::new(Binding::Var, "x").with_type("Int");
    assert_eq!(expand_var(decl, "oldX()").unwrap_err().id(), "invalid-function-signature");
}
