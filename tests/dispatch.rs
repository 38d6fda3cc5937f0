use cool_lang::typechecker::ErrorKind;
use test_utils::{analyze_source, assert_clean, Expected};

const STATIC_DISPATCH: &str = r#"
class A {
    f(): Int { 1 };
};

class B inherits A {
    f(): Int { 2 };
};

class Main {
    main(): Object { (new B)@A.f() };
};
"#;

#[test]
fn static_dispatch_resolves_on_the_named_type() {
    assert_clean(STATIC_DISPATCH);
}

const BAD_STATIC_DISPATCH: &str = r#"
class A { };
class B inherits A {
    f(): Int { 1 };
};

class Main {
    main(): Object { (new A)@B.f() };
};
"#;

#[test]
fn static_dispatch_requires_conformance() {
    let analysis = analyze_source(BAD_STATIC_DISPATCH);
    Expected {
        errors: &[(ErrorKind::IncompatibleTypes, "Cannot convert \"A\" into \"B\"")],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const WRONG_ARITY: &str = r#"
class Main inherits IO {
    main(): Object { out_string() };
};
"#;

#[test]
fn wrong_arity_is_a_single_error() {
    let analysis = analyze_source(WRONG_ARITY);
    Expected {
        errors: &[(ErrorKind::MethodArity, "expects 1 arguments but got 0")],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const WRONG_ARGUMENT: &str = r#"
class Main inherits IO {
    main(): Object { out_string(5) };
};
"#;

#[test]
fn argument_types_must_conform() {
    let analysis = analyze_source(WRONG_ARGUMENT);
    Expected {
        errors: &[(
            ErrorKind::IncompatibleTypes,
            "Cannot convert \"Int\" into \"String\"",
        )],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const UNDEFINED_METHOD: &str = r#"
class Main inherits IO {
    main(): Object { out_strin("typo") };
};
"#;

#[test]
fn undefined_methods_are_reported() {
    let analysis = analyze_source(UNDEFINED_METHOD);
    Expected {
        errors: &[(ErrorKind::NameUnknown, "\"out_strin\" is not defined")],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const WRONG_OVERRIDE: &str = r#"
class A {
    f(): Int { 1 };
};

class B inherits A {
    f(): String { "changed" };
};

class Main {
    main(): Object { 0 };
};
"#;

#[test]
fn overrides_must_keep_the_signature() {
    let analysis = analyze_source(WRONG_OVERRIDE);
    Expected {
        errors: &[(
            ErrorKind::MethodRedeclared,
            "defined in \"A\" with a different signature",
        )],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const SELF_TYPE_PARAMETER: &str = r#"
class Main {
    f(x: SELF_TYPE): Int { 1 };

    main(): Object { 0 };
};
"#;

#[test]
fn self_type_cannot_be_a_parameter_type() {
    let analysis = analyze_source(SELF_TYPE_PARAMETER);
    Expected {
        errors: &[(
            ErrorKind::InvalidParamType,
            "\"SELF_TYPE\" cannot be used as parameter type",
        )],
        inferences: &[],
    }
    .assert_matches(&analysis);
}
