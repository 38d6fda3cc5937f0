use cool_lang::typechecker::ErrorKind;
use test_utils::{analyze_source, assert_clean, Expected};

const ATTRIBUTE_IN_INITIALIZER: &str = r#"
class Main {
    a: Int <- 1;
    b: Int <- a;

    main(): Object { a + b };
};
"#;

#[test]
fn attributes_are_invisible_to_initializers_but_visible_to_methods() {
    let analysis = analyze_source(ATTRIBUTE_IN_INITIALIZER);
    Expected {
        errors: &[(ErrorKind::NameUnknown, "\"a\" is not defined in \"Main\"")],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const LET_LEFT_TO_RIGHT: &str = r#"
class Main {
    main(): Object {
        let x: Int <- 1, y: Int <- x + 1 in x + y
    };
};
"#;

#[test]
fn let_bindings_are_visible_left_to_right() {
    assert_clean(LET_LEFT_TO_RIGHT);
}

const LET_OUT_OF_ORDER: &str = r#"
class Main {
    main(): Object {
        let x: Int <- y, y: Int <- 1 in x + y
    };
};
"#;

#[test]
fn later_let_bindings_are_invisible_to_earlier_initializers() {
    let analysis = analyze_source(LET_OUT_OF_ORDER);
    Expected {
        errors: &[(ErrorKind::NameUnknown, "\"y\" is not defined in \"Main\"")],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const SHADOWING: &str = r#"
class Main {
    f(x: Int): String {
        let x: String <- "shadowed" in x
    };

    main(): Object { f(1) };
};
"#;

#[test]
fn let_bindings_shadow_parameters() {
    assert_clean(SHADOWING);
}

const CASE_BRANCH_BINDING: &str = r#"
class Main {
    describe(value: Object): Int {
        case value of
            i: Int => i + 1;
            s: String => s.length();
            o: Object => 0;
        esac
    };

    main(): Object { describe(42) };
};
"#;

#[test]
fn case_branches_bind_their_pattern_variable() {
    assert_clean(CASE_BRANCH_BINDING);
}

const PARAMETERS_AND_SELF: &str = r#"
class Main {
    double(x: Int): Int { x + x };

    main(): Object { self.double(2) };
};
"#;

#[test]
fn parameters_and_self_are_in_scope() {
    assert_clean(PARAMETERS_AND_SELF);
}
