use test_utils::{analyze_source, Expected};

const PARAM_AND_RETURN: &str = r#"
class Main inherits IO {
    f(x: AUTO_TYPE): AUTO_TYPE { x + 1 };

    main(): Object { f(3) };
};
"#;

#[test]
fn parameter_and_return_are_inferred_from_usage() {
    let analysis = analyze_source(PARAM_AND_RETURN);
    Expected {
        errors: &[],
        inferences: &[
            "Inferred type \"Int\" for parameter \"x\" of method \"f\" in class \"Main\".",
            "Inferred type \"Int\" for the return of method \"f\" in class \"Main\".",
        ],
    }
    .assert_matches(&analysis);

    let context = &analysis.context;
    let main = context.get_type("Main").unwrap();
    let method = context.get_method(main, "f").unwrap();
    let int = context.get_type("Int").unwrap();
    assert_eq!(method.param_types, vec![int]);
    assert_eq!(method.return_type, int);
}

const ATTRIBUTE: &str = r#"
class Main inherits IO {
    count: AUTO_TYPE <- 0;

    main(): Object { out_string("done") };
};
"#;

#[test]
fn attributes_are_inferred_from_their_initializer() {
    let analysis = analyze_source(ATTRIBUTE);
    Expected {
        errors: &[],
        inferences: &[
            "Inferred type \"Int\" for attribute \"count\" of class \"Main\".",
        ],
    }
    .assert_matches(&analysis);

    let context = &analysis.context;
    let main = context.get_type("Main").unwrap();
    let attribute = context.get_attribute(main, "count").unwrap();
    assert_eq!(context[attribute.ty].name, "Int");
}

const LET_VARIABLE: &str = r#"
class Main {
    main(): Object { let x: AUTO_TYPE <- 42 in x + 1 };
};
"#;

#[test]
fn let_variables_are_inferred_from_their_initializer() {
    let analysis = analyze_source(LET_VARIABLE);
    Expected {
        errors: &[],
        inferences: &[
            "Inferred type \"Int\" for variable \"x\" in method \"main\" of class \"Main\".",
        ],
    }
    .assert_matches(&analysis);
}

const MUTUAL_RECURSION: &str = r#"
class Main inherits IO {
    f(a: AUTO_TYPE, b: AUTO_TYPE): AUTO_TYPE {
        if a = 1 then b else g(a + 1, b / 2) fi
    };

    g(a: AUTO_TYPE, b: AUTO_TYPE): AUTO_TYPE {
        if b = 1 then a else f(a / 2, b + 1) fi
    };

    main(): Object { f(8, 6) };
};
"#;

#[test]
fn mutual_recursion_closes_every_hole() {
    let analysis = analyze_source(MUTUAL_RECURSION);
    Expected {
        errors: &[],
        inferences: &[
            "Inferred type \"Int\" for parameter \"a\" of method \"f\" in class \"Main\".",
            "Inferred type \"Int\" for parameter \"b\" of method \"f\" in class \"Main\".",
            "Inferred type \"Int\" for parameter \"a\" of method \"g\" in class \"Main\".",
            "Inferred type \"Int\" for parameter \"b\" of method \"g\" in class \"Main\".",
            "Inferred type \"Int\" for the return of method \"f\" in class \"Main\".",
            "Inferred type \"Int\" for the return of method \"g\" in class \"Main\".",
        ],
    }
    .assert_matches(&analysis);

    let context = &analysis.context;
    let main = context.get_type("Main").unwrap();
    let int = context.get_type("Int").unwrap();
    for name in ["f", "g"] {
        let method = context.get_method(main, name).unwrap();
        assert_eq!(method.param_types, vec![int, int], "parameters of {name}");
        assert_eq!(method.return_type, int, "return of {name}");
    }
}

const UNUSED_AUTO: &str = r#"
class Main {
    f(x: AUTO_TYPE): Int { 1 };

    main(): Object { 0 };
};
"#;

#[test]
fn unconstrained_variables_stay_open() {
    let analysis = analyze_source(UNUSED_AUTO);
    Expected {
        errors: &[],
        inferences: &[],
    }
    .assert_matches(&analysis);

    // nothing ever constrained x, so it keeps AUTO_TYPE
    let context = &analysis.context;
    let main = context.get_type("Main").unwrap();
    let method = context.get_method(main, "f").unwrap();
    assert_eq!(context[method.param_types[0]].name, "AUTO_TYPE");
    assert!(!method.param_infos[0].inferred);
}

#[test]
fn inference_is_deterministic() {
    let first = analyze_source(MUTUAL_RECURSION);
    let second = analyze_source(MUTUAL_RECURSION);

    assert_eq!(first.inferences, second.inferences);
    assert_eq!(first.errors.len(), second.errors.len());
}

const ASSIGNED_AUTO: &str = r#"
class A { };
class B inherits A { };

class Main {
    main(): Object {
        let x: AUTO_TYPE <- new B in { x <- new A; x; }
    };
};
"#;

#[test]
fn assignments_join_into_the_inferred_type() {
    let analysis = analyze_source(ASSIGNED_AUTO);

    // x is assigned both a B and an A, so the union A is inferred
    assert_eq!(
        analysis.inferences,
        vec!["Inferred type \"A\" for variable \"x\" in method \"main\" of class \"Main\".".to_owned()],
    );
    assert!(analysis.errors.is_empty(), "unexpected: {:?}", analysis.errors);
}
