use cool_lang::typechecker::ErrorKind;
use test_utils::{analyze_source, assert_clean, Expected};

const SELF_ASSIGNMENT: &str = r#"
class Main {
    main(): Object { self <- 1 };
};
"#;

#[test]
fn assigning_to_self_is_rejected() {
    let analysis = analyze_source(SELF_ASSIGNMENT);
    Expected {
        errors: &[
            (ErrorKind::SelfAssignment, "\"self\" is read-only"),
            (ErrorKind::IncompatibleTypes, "Cannot convert \"Int\" into \"Main\""),
        ],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const UNDEFINED_VARIABLE: &str = r#"
class Main {
    main(): Object { x <- 1 };
};
"#;

#[test]
fn assigning_an_undefined_variable_is_rejected() {
    let analysis = analyze_source(UNDEFINED_VARIABLE);
    Expected {
        errors: &[(ErrorKind::NameUnknown, "\"x\" is not defined in \"Main\"")],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const STRING_ARITHMETIC: &str = r#"
class Main {
    main(): Object { 1 + "two" };
};
"#;

#[test]
fn arithmetic_needs_int_operands() {
    let analysis = analyze_source(STRING_ARITHMETIC);
    Expected {
        errors: &[(
            ErrorKind::InvalidOperands,
            "not defined between \"Int\" and \"String\"",
        )],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const MIXED_EQUALITY: &str = r#"
class Main {
    main(): Object { 1 = new Main };
};
"#;

#[test]
fn equality_between_primitive_and_object_is_rejected() {
    let analysis = analyze_source(MIXED_EQUALITY);
    Expected {
        errors: &[(
            ErrorKind::InvalidOperands,
            "not defined between \"Int\" and \"Main\"",
        )],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const OBJECT_EQUALITY: &str = r#"
class A { };

class Main {
    main(): Object { new A = new Main };
};
"#;

#[test]
fn equality_between_objects_is_allowed() {
    assert_clean(OBJECT_EQUALITY);
}

const BAD_CONDITIONS: &str = r#"
class Main {
    main(): Object { {
        if 1 then 2 else 3 fi;
        while "text" loop 0 pool;
    } };
};
"#;

#[test]
fn conditions_must_be_bool() {
    let analysis = analyze_source(BAD_CONDITIONS);
    Expected {
        errors: &[
            (ErrorKind::IncompatibleTypes, "Cannot convert \"Int\" into \"Bool\""),
            (ErrorKind::IncompatibleTypes, "Cannot convert \"String\" into \"Bool\""),
        ],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const CASE_UNION: &str = r#"
class Main {
    pick(flag: Bool): Int {
        case flag of
            t: Bool => 1;
            o: Object => "text";
        esac
    };

    main(): Object { pick(true) };
};
"#;

#[test]
fn case_result_is_the_union_of_its_branches() {
    let analysis = analyze_source(CASE_UNION);
    // Int joined with String is Object, which does not fit the return type
    Expected {
        errors: &[(
            ErrorKind::IncompatibleTypes,
            "Cannot convert \"Object\" into \"Int\"",
        )],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const IF_UNION: &str = r#"
class A { };
class B inherits A { };
class C inherits A { };

class Main {
    pick(flag: Bool): A {
        if flag then new B else new C fi
    };

    main(): Object { pick(false) };
};
"#;

#[test]
fn if_result_is_the_union_of_its_branches() {
    assert_clean(IF_UNION);
}

const UNKNOWN_LET_TYPE: &str = r#"
class Main {
    main(): Object { let x: Unknown <- 1 in 0 };
};
"#;

#[test]
fn unknown_binding_types_are_reported_once() {
    let analysis = analyze_source(UNKNOWN_LET_TYPE);
    Expected {
        errors: &[(ErrorKind::TypeUnknown, "\"Unknown\" is not defined")],
        inferences: &[],
    }
    .assert_matches(&analysis);
}

const ISVOID_AND_NOT: &str = r#"
class Main {
    main(): Object { {
        isvoid new Main;
        not 1 <= 2;
        ~5;
    } };
};
"#;

#[test]
fn unary_operators_type_check() {
    assert_clean(ISVOID_AND_NOT);
}
