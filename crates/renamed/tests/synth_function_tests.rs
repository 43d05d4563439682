use renamed::ast::*;
use renamed::{expand, AttributedDecl, ShimError, Visibility};

fn expand_fn(decl: FunctionDecl, old: &str) -> Result<ShimDecl, ShimError> {
    expand(&AttributedDecl::renamed_from(old, Declaration::Function(decl)))
}

fn new_fn() -> FunctionDecl {
    FunctionDecl::new("newFn")
        .with_params(vec![Param::unlabeled("x", "Int"), Param::labeled("label", "String").with_name("y")])
        .with_return_type("Bool")
}

fn parts(shim: &ShimDecl) -> (&[ShimParam], Option<&str>, &CallExpr) {
    match &shim.kind {
        ShimKind::Function { params, return_type, body } => {
            (params.as_slice(), return_type.as_deref(), body)
        }
        other => panic!("Expected Function, got {:?}", other),
    }
}

#[test]
fn test_wildcard_and_labeled_parameters() {
    let shim = expand_fn(new_fn(), "oldFn(_:label:)").unwrap();

    assert_eq!(shim.name, "oldFn");
    assert_eq!(shim.renamed_to(), Some("newFn(_:label:)"));
    assert_eq!(
        shim.to_string(),
        "@available(*, deprecated, renamed: \"newFn(_:label:)\")\n\
         func oldFn(_ arg0: Int, label arg1: String) -> Bool {\n    newFn(arg0, label: arg1)\n}"
    );
}

#[test]
fn test_shim_params_pair_legacy_labels_with_current_types() {
    let shim = expand_fn(new_fn(), "oldFn(first:_:)").unwrap();
    let (params, return_type, _) = parts(&shim);

    assert_eq!(params[0], ShimParam { label: "first".into(), name: "arg0".into(), ty: "Int".into() });
    assert_eq!(params[1], ShimParam { label: "_".into(), name: "arg1".into(), ty: "String".into() });
    assert_eq!(return_type, Some("Bool"));
}

#[test]
fn test_forwarding_uses_current_labels() {
    let shim = expand_fn(new_fn(), "oldFn(first:_:)").unwrap();
    let (_, _, body) = parts(&shim);

    assert_eq!(body.callee, "newFn");
    assert_eq!(body.to_string(), "newFn(arg0, label: arg1)");
}

#[test]
fn test_four_parameter_function() {
    let decl = FunctionDecl::new("testFunction")
        .with_params(vec![
            Param::unlabeled("unnamedParameter", "String"),
            Param::labeled("argumentLabel", "Int").with_name("parameterName"),
            Param::labeled("previouslyUnnamed", "Bool"),
            Param::labeled("trailingClosure", "@escaping () -> Void"),
        ])
        .with_return_type("Bool")
        .with_modifiers(modifiers(["public"]));

    let shim = expand_fn(decl, "oldTestFunction(_:oldArgumentLabel:_:oldTrailingClosure)").unwrap();

    assert_eq!(shim.visibility, Some(Visibility::Public));
    assert_eq!(
        shim.to_string(),
        "@available(*, deprecated, renamed: \"testFunction(_:argumentLabel:previouslyUnnamed:trailingClosure:)\")\n\
         public func oldTestFunction(_ arg0: String, oldArgumentLabel arg1: Int, _ arg2: Bool, oldTrailingClosure arg3: @escaping () -> Void) -> Bool {\n    \
         testFunction(arg0, argumentLabel: arg1, previouslyUnnamed: arg2, trailingClosure: arg3)\n}"
    );
}

#[test]
fn test_no_return_type_and_no_parameters() {
    let decl = FunctionDecl::new("testFunctionWithoutReturn");
    let shim = expand_fn(decl, "oldTestFunctionWithoutReturn()").unwrap();

    assert_eq!(shim.renamed_to(), Some("testFunctionWithoutReturn"));
    assert_eq!(
        shim.to_string(),
        "@available(*, deprecated, renamed: \"testFunctionWithoutReturn\")\n\
         func oldTestFunctionWithoutReturn() {\n    testFunctionWithoutReturn()\n}"
    );
}

#[test]
fn test_bare_identifier_for_zero_parameter_function() {
    let decl = FunctionDecl::new("reload");
    let shim = expand_fn(decl, "refresh").unwrap();
    assert_eq!(shim.name, "refresh");
    let (params, return_type, body) = parts(&shim);
    assert!(params.is_empty());
    assert_eq!(return_type, None);
    assert_eq!(body.to_string(), "reload()");
}

#[test]
fn test_bare_identifier_for_function_with_parameters() {
    let err = expand_fn(new_fn(), "oldFn").unwrap_err();
    assert_eq!(err, ShimError::ParameterCountMismatch { expected: 2, found: 0 });
    assert_eq!(err.id(), "invalid-function-parameter-count");
}

#[test]
fn test_too_many_legacy_labels() {
    let err = expand_fn(new_fn(), "oldFn(a:b:c:)").unwrap_err();
    assert_eq!(err, ShimError::ParameterCountMismatch { expected: 2, found: 3 });
}

#[test]
fn test_empty_legacy_signature_needs_empty_function() {
    let err = expand_fn(new_fn(), "oldFn()").unwrap_err();
    assert_eq!(err.id(), "invalid-function-parameter-count");
}

#[test]
fn test_unbalanced_signature() {
    let err = expand_fn(new_fn(), "oldFn(_:label:").unwrap_err();
    assert_eq!(err.id(), "invalid-function-signature");
}

#[test]
fn test_explicit_wildcard_label_is_normalised() {
    let decl = FunctionDecl::new("f").with_params(vec![Param::labeled("_", "Int")]);
    let shim = expand_fn(decl, "g(value:)").unwrap();
    assert_eq!(shim.renamed_to(), Some("f(_:)"));
    assert_eq!(parts(&shim).2.to_string(), "f(arg0)");
}

#[test]
fn test_selector_and_call_agree() {
    let decl = FunctionDecl::new("move").with_params(vec![
        Param::unlabeled("piece", "Piece"),
        Param::labeled("to", "Square"),
        Param::labeled("animated", "Bool"),
    ]);
    let shim = expand_fn(decl, "movePiece(_:_:animated:)").unwrap();

    let selector = shim.renamed_to().unwrap().to_string();
    let call_labels: Vec<String> = parts(&shim)
        .2
        .args
        .iter()
        .map(|arg| arg.label.clone().unwrap_or_else(|| "_".to_string()))
        .collect();
    assert_eq!(selector, format!("move({}:)", call_labels.join(":")));
}
