use cool_lang::typechecker::ErrorKind;
use test_utils::{analyze_source, Expected};

const SEALED_PARENT: &str = r#"
class A inherits Int { };

class Main {
    main(): Object { 0 };
};
"#;

#[test]
fn inheriting_from_a_sealed_type_is_rejected() {
    let analysis = analyze_source(SEALED_PARENT);
    Expected {
        errors: &[(ErrorKind::InheritanceRule, "sealed")],
        inferences: &[],
    }
    .assert_matches(&analysis);

    // the class stays usable, rooted at Object
    let context = &analysis.context;
    let a = context.get_type("A").unwrap();
    let object = context.get_type("Object").unwrap();
    assert_eq!(context[a].parent, Some(object));
}

const UNKNOWN_PARENT: &str = r#"
class A inherits Unknown { };

class Main {
    main(): Object { 0 };
};
"#;

#[test]
fn unknown_parent_falls_back_to_object() {
    let analysis = analyze_source(UNKNOWN_PARENT);
    Expected {
        errors: &[(ErrorKind::InheritanceRule, "\"Unknown\" is not defined")],
        inferences: &[],
    }
    .assert_matches(&analysis);

    let context = &analysis.context;
    let a = context.get_type("A").unwrap();
    let object = context.get_type("Object").unwrap();
    assert_eq!(context[a].parent, Some(object));
}

const CYCLE: &str = r#"
class A inherits B { };
class B inherits A { };

class Main {
    main(): Object { 0 };
};
"#;

#[test]
fn inheritance_cycles_are_broken() {
    let analysis = analyze_source(CYCLE);
    Expected {
        errors: &[(ErrorKind::InheritanceRule, "inheritance cycle")],
        inferences: &[],
    }
    .assert_matches(&analysis);

    // every parent chain terminates at Object afterwards
    let context = &analysis.context;
    let object = context.get_type("Object").unwrap();
    for name in ["A", "B"] {
        let mut current = context.get_type(name).unwrap();
        let mut steps = 0;
        while let Some(parent) = context[current].parent {
            current = parent;
            steps += 1;
            assert!(steps < 10, "parent chain of {name} does not terminate");
        }
        assert_eq!(current, object);
    }
}

const REDECLARED_CLASS: &str = r#"
class A { };
class A { };

class Main {
    main(): Object { 0 };
};
"#;

#[test]
fn class_redeclaration_is_reported() {
    let analysis = analyze_source(REDECLARED_CLASS);
    Expected {
        errors: &[
            (ErrorKind::TypeRedeclared, "same name (A)"),
            (ErrorKind::InheritanceRule, "already set"),
        ],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const REDECLARED_FEATURES: &str = r#"
class A {
    x: Int;
    x: Bool;
    f(): Int { 1 };
    f(): Int { 2 };
};

class B inherits A {
    x: Int;
};

class Main {
    main(): Object { 0 };
};
"#;

#[test]
fn feature_redeclarations_are_reported() {
    let analysis = analyze_source(REDECLARED_FEATURES);
    Expected {
        errors: &[
            (ErrorKind::AttrRedeclared, "\"x\" is already defined in A"),
            (ErrorKind::MethodRedeclared, "\"f\" already defined in A"),
            (ErrorKind::AttrRedeclared, "\"x\" is already defined in B"),
        ],
        inferences: &[],
    }
    .assert_matches(&analysis);
}
