use cool_lang::typechecker::ErrorKind;
use test_utils::{analyze_source, Expected};

const NO_MAIN_CLASS: &str = r#"
class A {
    f(): Int { 1 };
};
"#;

#[test]
fn missing_main_class_is_reported() {
    let analysis = analyze_source(NO_MAIN_CLASS);
    Expected {
        errors: &[(ErrorKind::MissingEntryPoint, "The class \"Main\"")],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const MAIN_WITHOUT_MAIN: &str = r#"
class Main {
    start(): Int { 1 };
};
"#;

#[test]
fn main_without_main_method_is_reported() {
    let analysis = analyze_source(MAIN_WITHOUT_MAIN);
    Expected {
        errors: &[(ErrorKind::MissingEntryPoint, "its method \"main\"")],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const INHERITED_MAIN: &str = r#"
class Base {
    main(): Object { 0 };
};

class Main inherits Base { };
"#;

#[test]
fn inherited_main_satisfies_the_entry_point() {
    test_utils::assert_clean(INHERITED_MAIN);
}
